use thiserror::Error;

/// Failure to turn an input stream into a [`Document`](crate::Document).
///
/// Any of these aborts the parse; no partially populated document is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read the schema source: {0}")]
    Io(#[from] std::io::Error),
    #[error("the schema source is not valid {encoding}")]
    Encoding { encoding: &'static str },
    #[error("the schema is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error(
        "expected root element {{{}}}schema, found {}",
        crate::XS_NAMESPACE,
        display_name(.namespace.as_deref(), .name)
    )]
    UnexpectedRoot {
        namespace: Option<String>,
        name: String,
    },
}

fn display_name(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(namespace) => format!("{{{namespace}}}{name}"),
        None => name.to_string(),
    }
}
