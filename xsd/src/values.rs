use quick_xml::escape::unescape;
use roxmltree::Node;

use crate::XS_NAMESPACE;

/// Value of an unqualified attribute, or `None` when it is absent.
///
/// The value is cut from the source text and only character and predefined entity references are
/// expanded, so whitespace (tabs, newlines) survives unchanged. References to entities declared in
/// a DTD fall back to the value reported by the XML parser.
pub(crate) fn optional_attribute_value(node: Node, name: &str) -> Option<String> {
    let attribute = node
        .attributes()
        .find(|a| a.namespace().is_none() && a.name() == name)?;
    let raw = &node.document().input_text()[attribute.range_value()];
    let value = match unescape(raw) {
        Ok(value) => value.into_owned(),
        Err(_) => attribute.value().to_string(),
    };
    Some(value)
}

/// Value of an unqualified attribute, or the empty string when it is absent.
pub(crate) fn attribute_value(node: Node, name: &str) -> String {
    optional_attribute_value(node, name).unwrap_or_default()
}

pub(crate) fn is_xs_element(node: Node, tag_name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(XS_NAMESPACE)
        && node.tag_name().name() == tag_name
}

/// Element children of `node` named `{XS_NAMESPACE}tag_name`, in document order.
pub(crate) fn xs_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag_name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| is_xs_element(*child, tag_name))
}

/// Character data directly inside `node`; text of nested elements is skipped.
pub(crate) fn direct_text(node: Node) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
