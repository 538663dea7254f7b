use std::process::ExitCode;

use xsd_catalog::{Document, Type};

use crate::input::InputError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// At least one requested name is not catalogued
    NotFound,
    /// The schema could not be read or parsed
    InputError,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::NotFound => 1,
            Self::InputError => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// What a run prints, and how it exits
#[derive(Debug)]
pub struct Report {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub status: Status,
}

/// One tab-separated catalog line: kind, name and a short description of the declaration.
pub fn describe(name: &str, ty: Type) -> String {
    let detail = match ty {
        Type::SimpleType(s) => s.restriction.base.clone(),
        Type::ComplexType(c) => c
            .elements()
            .iter()
            .map(|e| format!("{}:{}", e.name, e.type_name))
            .collect::<Vec<_>>()
            .join(","),
        Type::Element(e) => e.type_name.clone(),
    };
    format!("{}\t{name}\t{detail}", ty.kind())
}

/// The whole catalog, sorted by name
pub fn describe_catalog(document: &Document) -> Vec<String> {
    let mut entries: Vec<_> = document.iter().collect();
    entries.sort_by_key(|(name, _)| *name);
    entries
        .into_iter()
        .map(|(name, ty)| describe(name, ty))
        .collect()
}

/// Describes `names` in `document`, or the whole catalog if no names are given. Every name is
/// processed even after a miss.
pub fn report(loaded: Result<Document, InputError>, names: &[String]) -> Report {
    let document = match loaded {
        Ok(document) => document,
        Err(e) => {
            return Report {
                stdout: Vec::new(),
                stderr: vec![format!("error: {e}")],
                status: Status::InputError,
            }
        }
    };

    if names.is_empty() {
        return Report {
            stdout: describe_catalog(&document),
            stderr: Vec::new(),
            status: Status::Success,
        };
    }

    let mut status = Status::Success;
    let stdout = names
        .iter()
        .map(|name| match document.lookup(name) {
            Some(ty) => describe(name, ty),
            None => {
                status = Status::NotFound;
                format!("not found\t{name}")
            }
        })
        .collect();

    Report {
        stdout,
        stderr: Vec::new(),
        status,
    }
}
