//! Read-only catalog of the top-level declarations of an XSD schema.
//!
//! [`parse`] decodes a schema into a [`Document`], which holds the `<simpleType>`,
//! `<complexType>` and `<element>` declarations of the schema in document order and resolves
//! names to declarations with [`Document::lookup`].
//!
//! Only a small subset of XSD is modelled; attributes, groups, imports, derivation by extension
//! and occurrence constraints are ignored.

pub mod annotation;
pub mod complex_type_def;
pub mod document;
pub mod element_decl;
pub mod error;
pub mod shared;
pub mod simple_type_def;

mod lookup_table;
mod reader;
mod values;

use std::io::Read;

pub use annotation::Annotation;
pub use complex_type_def::{ComplexType, Sequence};
pub use document::Document;
pub use element_decl::Element;
pub use error::DecodeError;
pub use shared::{Type, TypeKind};
pub use simple_type_def::{Restriction, SimpleType};

/// Namespace of the XSD vocabulary; only elements in this namespace are mapped
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Options for the underlying XML parser
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Allow a Document Type Definition (DTD) to occur. Internal entities declared in it are
    /// expanded.
    pub allow_dtd: bool,
    /// Maximum number of XML nodes in the input
    pub nodes_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_dtd: false,
            nodes_limit: u32::MAX,
        }
    }
}

impl ParseOptions {
    fn to_parsing_options(self) -> roxmltree::ParsingOptions {
        let mut options = roxmltree::ParsingOptions::default();
        options.allow_dtd = self.allow_dtd;
        options.nodes_limit = self.nodes_limit;
        options
    }
}

/// Parses a schema from `source` with the default [`ParseOptions`].
pub fn parse(source: impl Read) -> Result<Document, DecodeError> {
    parse_with_options(source, &ParseOptions::default())
}

pub fn parse_with_options(
    source: impl Read,
    options: &ParseOptions,
) -> Result<Document, DecodeError> {
    let text = reader::read_text(source)?;
    parse_str_with_options(&text, options)
}

/// Parses a schema that is already decoded to text.
pub fn parse_str(source: &str) -> Result<Document, DecodeError> {
    parse_str_with_options(source, &ParseOptions::default())
}

pub fn parse_str_with_options(
    source: &str,
    options: &ParseOptions,
) -> Result<Document, DecodeError> {
    let xml = roxmltree::Document::parse_with_options(source, options.to_parsing_options())?;
    Document::map_from_xml(xml.root_element())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_reject_dtd() {
        let options = ParseOptions::default();
        assert!(!options.allow_dtd);
        assert_eq!(options.nodes_limit, u32::MAX);
        assert!(!options.to_parsing_options().allow_dtd);
    }

    #[test]
    fn io_errors_are_reported() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire"))
            }
        }

        assert!(matches!(parse(Broken), Err(DecodeError::Io(_))));
    }
}
