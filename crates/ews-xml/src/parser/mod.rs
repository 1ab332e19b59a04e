pub use roxmltree::{Attribute, Document, ExpandedName, Node, NodeType};

use crate::XmlError;

/// Parses `xml` into a read-only document tree.
pub fn parse(xml: &str) -> Result<Document<'_>, XmlError> {
    tracing::trace!(len = xml.len(), "parsing XML document");
    Ok(Document::parse(xml)?)
}

/// Iterates over the element children of `node`, skipping text, comments and
/// processing instructions.
pub fn element_children<'a>(node: Node<'a, 'a>) -> impl Iterator<Item = Node<'a, 'a>> {
    node.children().filter(Node::is_element)
}

/// Returns the concatenated text of `node`'s direct text children.
///
/// Returns `None` when the element has child elements.
pub fn text_content(node: Node<'_, '_>) -> Option<String> {
    let mut text = String::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Text => text.push_str(child.text().unwrap_or_default()),
            NodeType::Element => return None,
            NodeType::Root | NodeType::Comment | NodeType::PI => {}
        }
    }
    Some(text)
}

/// A stateful consumer of a subtree.
///
/// [`NodeDeserializer`] calls [`XmlVisitor::visit_node`] with the root of the
/// subtree, then [`XmlVisitor::finish`] to produce the value.
pub trait XmlVisitor<'a> {
    type Value;
    type Error: From<XmlError>;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), Self::Error>;

    fn visit_children(
        &mut self,
        _children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, Self::Error>;
}

pub struct NodeDeserializer<'a> {
    root: Node<'a, 'a>,
}

impl<'a> NodeDeserializer<'a> {
    pub fn new(root: Node<'a, 'a>) -> Self {
        Self { root }
    }

    /// Drive any visitor over the subtree rooted at `self.root`
    pub fn deserialize<V>(self, mut visitor: V) -> Result<V::Value, V::Error>
    where
        V: XmlVisitor<'a>,
    {
        if !self.root.is_element() {
            return Err(XmlError::InvalidNodeType {
                expected: NodeType::Element,
                found: self.root.node_type(),
            }
            .into());
        }
        visitor.visit_node(self.root)?;
        visitor.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NameCollector {
        names: Vec<String>,
    }

    impl<'a> XmlVisitor<'a> for NameCollector {
        type Value = Vec<String>;
        type Error = XmlError;

        fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), Self::Error> {
            self.names.push(node.tag_name().name().to_owned());
            self.visit_children(element_children(node))
        }

        fn visit_children(
            &mut self,
            children: impl Iterator<Item = Node<'a, 'a>>,
        ) -> Result<(), Self::Error> {
            for child in children {
                self.names.push(child.tag_name().name().to_owned());
            }
            Ok(())
        }

        fn finish(self) -> Result<Self::Value, Self::Error> {
            Ok(self.names)
        }
    }

    #[test]
    fn test_node_deserializer_drives_visitor() {
        let doc = parse("<root><a/>text<!-- c --><b>x</b></root>").unwrap();
        let names = NodeDeserializer::new(doc.root_element())
            .deserialize(NameCollector { names: Vec::new() })
            .unwrap();

        assert_eq!(names, vec!["root", "a", "b"]);
    }

    #[test]
    fn test_text_content() {
        let doc = parse("<root><a>one &amp; two</a><b/><c><d/></c></root>").unwrap();
        let children: Vec<_> = element_children(doc.root_element()).collect();

        assert_eq!(text_content(children[0]).as_deref(), Some("one & two"));
        assert_eq!(text_content(children[1]).as_deref(), Some(""));
        assert_eq!(text_content(children[2]), None);
    }

    #[test]
    fn test_parse_error() {
        let result = parse("<root>");
        assert!(matches!(result, Err(XmlError::ParserError(_))));
    }

    #[test]
    fn test_deserializer_rejects_non_element_root() {
        let doc = parse("<root>text</root>").unwrap();
        let text_node = doc.root_element().first_child().unwrap();

        let result =
            NodeDeserializer::new(text_node).deserialize(NameCollector { names: Vec::new() });
        assert!(matches!(result, Err(XmlError::InvalidNodeType { .. })));
    }
}
