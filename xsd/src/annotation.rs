use roxmltree::Node;

use super::values::{direct_text, xs_children};

/// Human-readable documentation attached to a schema, complex type or simple type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotation {
    pub documentation: String,
}

impl Annotation {
    pub const TAG_NAME: &'static str = "annotation";
    const DOCUMENTATION_TAG_NAME: &'static str = "documentation";

    /// The annotation of `parent`, if it has at least one `<annotation>` child.
    ///
    /// Repeated annotations fold into one: the last `<documentation>` across all of them provides
    /// the text, and an annotation without documentation leaves earlier text in place.
    pub(super) fn child_of(parent: Node) -> Option<Self> {
        let mut annotations = xs_children(parent, Self::TAG_NAME).peekable();
        annotations.peek()?;

        let documentation = annotations
            .flat_map(|annotation| xs_children(annotation, Self::DOCUMENTATION_TAG_NAME))
            .last()
            .map(direct_text)
            .unwrap_or_default();

        Some(Self { documentation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation_of(source: &str) -> Option<Annotation> {
        let doc = roxmltree::Document::parse(source).unwrap();
        Annotation::child_of(doc.root_element())
    }

    #[test]
    fn documentation_text_is_collected() {
        let annotation = annotation_of(
            r#"<p xmlns="http://www.w3.org/2001/XMLSchema">
                <annotation><documentation>A <b>bold</b> claim</documentation></annotation>
            </p>"#,
        );
        assert_eq!(annotation.unwrap().documentation, "A  claim");
    }

    #[test]
    fn annotation_without_documentation_is_empty() {
        let annotation = annotation_of(
            r#"<p xmlns="http://www.w3.org/2001/XMLSchema"><annotation><appinfo>x</appinfo></annotation></p>"#,
        );
        assert_eq!(annotation, Some(Annotation::default()));
    }

    #[test]
    fn last_documentation_wins() {
        let annotation = annotation_of(
            r#"<p xmlns="http://www.w3.org/2001/XMLSchema"><annotation>
                <documentation>first</documentation><documentation>second</documentation>
            </annotation></p>"#,
        );
        assert_eq!(annotation.unwrap().documentation, "second");
    }

    #[test]
    fn annotation_without_documentation_keeps_earlier_text() {
        let annotation = annotation_of(
            r#"<p xmlns="http://www.w3.org/2001/XMLSchema">
                <annotation><documentation>kept</documentation></annotation>
                <annotation><appinfo>tooling</appinfo></annotation>
            </p>"#,
        );
        assert_eq!(annotation.unwrap().documentation, "kept");
    }

    #[test]
    fn missing_annotation_is_none() {
        assert_eq!(annotation_of("<p><annotation/></p>"), None);
    }
}
