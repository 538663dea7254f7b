use std::str::FromStr;

use log::debug;
use roxmltree::Node;

use super::{
    annotation::Annotation,
    error::DecodeError,
    lookup_table::{self, LookupTable, TypeRef},
    values::{attribute_value, is_xs_element},
    ComplexType, Element, SimpleType, Type, XS_NAMESPACE,
};

/// A parsed XSD schema: its top-level declarations in document order, plus a name-keyed catalog
/// over all of them.
///
/// A `Document` is immutable; the catalog is built once when the document is created.
#[derive(Clone, Debug)]
pub struct Document {
    target_namespace: String,
    version: String,
    annotation: Option<Annotation>,
    simple_types: Vec<SimpleType>,
    complex_types: Vec<ComplexType>,
    elements: Vec<Element>,

    lookup: LookupTable,
}

impl Document {
    pub const TAG_NAME: &'static str = "schema";

    pub(super) fn map_from_xml(schema: Node) -> Result<Self, DecodeError> {
        let tag_name = schema.tag_name();
        if tag_name.namespace() != Some(XS_NAMESPACE) || tag_name.name() != Self::TAG_NAME {
            return Err(DecodeError::UnexpectedRoot {
                namespace: tag_name.namespace().map(str::to_string),
                name: tag_name.name().to_string(),
            });
        }

        let mut simple_types = Vec::new();
        let mut complex_types = Vec::new();
        let mut elements = Vec::new();

        for child in schema.children().filter(|c| c.is_element()) {
            if is_xs_element(child, SimpleType::TAG_NAME) {
                simple_types.push(SimpleType::map_from_xml(child));
            } else if is_xs_element(child, ComplexType::TAG_NAME) {
                complex_types.push(ComplexType::map_from_xml(child));
            } else if is_xs_element(child, Element::TAG_NAME) {
                elements.push(Element::map_from_xml(child));
            } else if !is_xs_element(child, Annotation::TAG_NAME) {
                debug!("ignoring top-level element {:?}", child.tag_name());
            }
        }

        Ok(Self::new(
            attribute_value(schema, "targetNamespace"),
            attribute_value(schema, "version"),
            Annotation::child_of(schema),
            simple_types,
            complex_types,
            elements,
        ))
    }

    /// Assembles a document from already decoded declarations and builds its catalog.
    pub fn new(
        target_namespace: String,
        version: String,
        annotation: Option<Annotation>,
        simple_types: Vec<SimpleType>,
        complex_types: Vec<ComplexType>,
        elements: Vec<Element>,
    ) -> Self {
        let lookup = lookup_table::build(&simple_types, &complex_types, &elements);
        debug!(
            "catalogued {} names from {} simple types, {} complex types and {} elements",
            lookup.len(),
            simple_types.len(),
            complex_types.len(),
            elements.len()
        );

        Self {
            target_namespace,
            version,
            annotation,
            simple_types,
            complex_types,
            elements,
            lookup,
        }
    }

    /// The declaration catalogued under `name`, if any.
    ///
    /// When several declarations share a name, elements take precedence over complex types, which
    /// take precedence over simple types; within one kind the last declaration wins.
    pub fn lookup(&self, name: &str) -> Option<Type<'_>> {
        self.lookup.get(name).map(|type_ref| self.resolve(*type_ref))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Number of distinct names in the catalog
    pub fn catalog_len(&self) -> usize {
        self.lookup.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.lookup.keys().map(String::as_str)
    }

    /// All catalog entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Type<'_>)> + '_ {
        self.lookup
            .iter()
            .map(|(name, type_ref)| (name.as_str(), self.resolve(*type_ref)))
    }

    fn resolve(&self, type_ref: TypeRef) -> Type<'_> {
        match type_ref {
            TypeRef::Simple(i) => Type::SimpleType(&self.simple_types[i]),
            TypeRef::Complex(i) => Type::ComplexType(&self.complex_types[i]),
            TypeRef::Element(i) => Type::Element(&self.elements[i]),
        }
    }

    /// The `targetNamespace` attribute, empty if absent
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    /// The `version` attribute, empty if absent
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        self.annotation.as_ref()
    }

    pub fn simple_types(&self) -> &[SimpleType] {
        &self.simple_types
    }

    pub fn complex_types(&self) -> &[ComplexType] {
        &self.complex_types
    }

    /// Top-level element declarations
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl FromStr for Document {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_str(s)
    }
}
