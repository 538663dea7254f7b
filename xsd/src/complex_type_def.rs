use roxmltree::Node;

use super::{
    annotation::Annotation,
    element_decl::Element,
    values::{attribute_value, xs_children},
};

/// A `<complexType>` declaration. Only the `<sequence>` content model is represented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplexType {
    pub name: String,
    pub annotation: Option<Annotation>,
    pub sequence: Option<Sequence>,
}

/// Ordered element content of a complex type
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    pub elements: Vec<Element>,
}

impl Sequence {
    pub const TAG_NAME: &'static str = "sequence";

    /// Merges every `<sequence>` child of `complex_type` into one, keeping document order.
    /// `None` if there is no `<sequence>` at all.
    fn from_children(complex_type: Node) -> Option<Self> {
        let mut sequences = xs_children(complex_type, Self::TAG_NAME).peekable();
        sequences.peek()?;

        let elements = sequences
            .flat_map(|sequence| xs_children(sequence, Element::TAG_NAME))
            .map(Element::map_from_xml)
            .collect();
        Some(Self { elements })
    }
}

impl ComplexType {
    pub const TAG_NAME: &'static str = "complexType";

    pub(super) fn map_from_xml(complex_type: Node) -> Self {
        Self {
            name: attribute_value(complex_type, "name"),
            annotation: Annotation::child_of(complex_type),
            sequence: Sequence::from_children(complex_type),
        }
    }

    /// Elements of the sequence, or nothing if no content model is declared
    pub fn elements(&self) -> &[Element] {
        self.sequence
            .as_ref()
            .map(|s| s.elements.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complex_type(source: &str) -> ComplexType {
        let doc = roxmltree::Document::parse(source).unwrap();
        ComplexType::map_from_xml(doc.root_element())
    }

    #[test]
    fn sequence_keeps_document_order() {
        let ct = complex_type(
            r#"<xs:complexType xmlns:xs="http://www.w3.org/2001/XMLSchema" name="Person">
                <xs:sequence>
                    <xs:element name="first" type="xs:string"/>
                    <xs:element name="last" type="xs:string" minOccurs="0"/>
                    <xs:any/>
                    <xs:element name="code" type="Code"/>
                </xs:sequence>
                <xs:attribute name="id" type="xs:ID"/>
            </xs:complexType>"#,
        );
        assert_eq!(ct.name, "Person");
        let names: Vec<_> = ct.elements().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "last", "code"]);
        assert_eq!(ct.elements()[2].type_name, "Code");
    }

    #[test]
    fn no_content_model() {
        let ct = complex_type(
            r#"<xs:complexType xmlns:xs="http://www.w3.org/2001/XMLSchema" name="Empty">
                <xs:annotation><xs:documentation>nothing</xs:documentation></xs:annotation>
                <xs:choice><xs:element name="a" type="A"/></xs:choice>
            </xs:complexType>"#,
        );
        assert!(ct.sequence.is_none());
        assert!(ct.elements().is_empty());
        assert_eq!(ct.annotation.unwrap().documentation, "nothing");
    }

    #[test]
    fn repeated_sequences_are_merged() {
        let ct = complex_type(
            r#"<xs:complexType xmlns:xs="http://www.w3.org/2001/XMLSchema" name="Split">
                <xs:sequence><xs:element name="a" type="A"/></xs:sequence>
                <xs:sequence/>
                <xs:sequence><xs:element name="b" type="B"/></xs:sequence>
            </xs:complexType>"#,
        );
        let names: Vec<_> = ct.elements().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn element_type_keeps_tabs_and_newlines() {
        let ct = complex_type(
            "<xs:complexType xmlns:xs=\"http://www.w3.org/2001/XMLSchema\" name=\"C\">\
                <xs:sequence><xs:element name=\"e\" type=\"t:\tT\n\"/></xs:sequence>\
            </xs:complexType>",
        );
        assert_eq!(ct.elements()[0].type_name, "t:\tT\n");
    }

    #[test]
    fn empty_sequence_is_present() {
        let ct = complex_type(
            r#"<xs:complexType xmlns:xs="http://www.w3.org/2001/XMLSchema" name="E"><xs:sequence/></xs:complexType>"#,
        );
        assert_eq!(ct.sequence, Some(Sequence::default()));
    }
}
