use roxmltree::Node;

use super::{
    annotation::Annotation,
    values::{attribute_value, optional_attribute_value, xs_children},
};

/// A `<simpleType>` declaration restricting a named base type
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleType {
    pub name: String,
    pub annotation: Option<Annotation>,
    pub restriction: Restriction,
}

/// The `<restriction>` of a simple type. Only the base type reference is kept; facets are not
/// modelled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Restriction {
    pub base: String,
}

impl Restriction {
    pub const TAG_NAME: &'static str = "restriction";

    /// Folds every `<restriction>` child of `simple_type`: the last `base` attribute present wins.
    /// Without any, `base` is empty (e.g. `<list>` or `<union>` content).
    fn from_children(simple_type: Node) -> Self {
        let base = xs_children(simple_type, Self::TAG_NAME)
            .filter_map(|restriction| optional_attribute_value(restriction, "base"))
            .last()
            .unwrap_or_default();
        Self { base }
    }
}

impl SimpleType {
    pub const TAG_NAME: &'static str = "simpleType";

    pub(super) fn map_from_xml(simple_type: Node) -> Self {
        let name = attribute_value(simple_type, "name");
        let annotation = Annotation::child_of(simple_type);
        let restriction = Restriction::from_children(simple_type);

        Self {
            name,
            annotation,
            restriction,
        }
    }
}
