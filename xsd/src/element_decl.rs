use roxmltree::Node;

use super::values::attribute_value;

/// An `<element>` declaration, either top-level or inside a [`Sequence`](super::Sequence).
///
/// `type_name` is a reference by name to a simple type, complex type or built-in type. It is kept
/// verbatim and only resolved on demand through [`Document::lookup`](super::Document::lookup).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub type_name: String,
}

impl Element {
    pub const TAG_NAME: &'static str = "element";

    pub(super) fn map_from_xml(element: Node) -> Self {
        Self {
            name: attribute_value(element, "name"),
            type_name: attribute_value(element, "type"),
        }
    }
}
