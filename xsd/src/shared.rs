use std::fmt;

use super::{ComplexType, Element, SimpleType};

/// A catalogued top-level declaration, as returned by [`Document::lookup`](super::Document::lookup)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Type<'a> {
    SimpleType(&'a SimpleType),
    ComplexType(&'a ComplexType),
    Element(&'a Element),
}

/// The kind of a [`Type`], without the declaration itself
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKind {
    SimpleType,
    ComplexType,
    Element,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SimpleType => SimpleType::TAG_NAME,
            Self::ComplexType => ComplexType::TAG_NAME,
            Self::Element => Element::TAG_NAME,
        };
        f.write_str(name)
    }
}

impl<'a> Type<'a> {
    pub fn name(self) -> &'a str {
        match self {
            Self::SimpleType(s) => &s.name,
            Self::ComplexType(c) => &c.name,
            Self::Element(e) => &e.name,
        }
    }

    pub fn kind(self) -> TypeKind {
        match self {
            Self::SimpleType(_) => TypeKind::SimpleType,
            Self::ComplexType(_) => TypeKind::ComplexType,
            Self::Element(_) => TypeKind::Element,
        }
    }

    pub fn simple_type(self) -> Option<&'a SimpleType> {
        match self {
            Self::SimpleType(s) => Some(s),
            _ => None,
        }
    }

    pub fn complex_type(self) -> Option<&'a ComplexType> {
        match self {
            Self::ComplexType(c) => Some(c),
            _ => None,
        }
    }

    pub fn element(self) -> Option<&'a Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_match_the_variant() {
        let element = Element {
            name: "root".into(),
            type_name: "Root".into(),
        };
        let ty = Type::Element(&element);
        assert_eq!(ty.name(), "root");
        assert_eq!(ty.kind(), TypeKind::Element);
        assert_eq!(ty.element(), Some(&element));
        assert!(ty.simple_type().is_none());
        assert!(ty.complex_type().is_none());
    }

    #[test]
    fn kind_displays_as_tag_name() {
        assert_eq!(TypeKind::SimpleType.to_string(), "simpleType");
        assert_eq!(TypeKind::ComplexType.to_string(), "complexType");
        assert_eq!(TypeKind::Element.to_string(), "element");
    }
}
