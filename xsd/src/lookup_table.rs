use std::collections::HashMap;

use log::trace;

use super::{ComplexType, Element, SimpleType, TypeKind};

/// Position of a declaration inside one of the three declaration sequences of a
/// [`Document`](super::Document)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TypeRef {
    Simple(usize),
    Complex(usize),
    Element(usize),
}

impl TypeRef {
    pub(crate) fn kind(self) -> TypeKind {
        match self {
            Self::Simple(_) => TypeKind::SimpleType,
            Self::Complex(_) => TypeKind::ComplexType,
            Self::Element(_) => TypeKind::Element,
        }
    }
}

pub(crate) type LookupTable = HashMap<String, TypeRef>;

/// Merges the three declaration sequences into one name-keyed table.
///
/// Simple types are inserted first, then complex types, then elements, each in document order.
/// Every insertion replaces an existing entry of the same name, so the last declaration of a kind
/// wins and across kinds Element > ComplexType > SimpleType. Collisions are not errors.
pub(crate) fn build(
    simple_types: &[SimpleType],
    complex_types: &[ComplexType],
    elements: &[Element],
) -> LookupTable {
    let mut table =
        LookupTable::with_capacity(simple_types.len() + complex_types.len() + elements.len());

    let declarations = simple_types
        .iter()
        .enumerate()
        .map(|(i, s)| (&s.name, TypeRef::Simple(i)))
        .chain(
            complex_types
                .iter()
                .enumerate()
                .map(|(i, c)| (&c.name, TypeRef::Complex(i))),
        )
        .chain(
            elements
                .iter()
                .enumerate()
                .map(|(i, e)| (&e.name, TypeRef::Element(i))),
        );

    for (name, type_ref) in declarations {
        if let Some(replaced) = table.insert(name.clone(), type_ref) {
            trace!(
                "{} {name:?} replaces {} of the same name",
                type_ref.kind(),
                replaced.kind()
            );
        }
    }

    table
}
