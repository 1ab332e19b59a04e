use ews_xml::XmlError;
use ews_xml::parser::{Node, NodeDeserializer, XmlVisitor, element_children, parse};
use tracing::{debug, trace, warn};

use crate::config::ReaderConfig;
use crate::cores::{
    AttributeMapping, ComplexType, ElementMapping, Occurs, SimpleType, TypeMapping, XmlValue, display_name,
};
use crate::error::{EwsError, SchemaValidationError};

/// A cursor over the element children of one complex-typed element.
///
/// Entries are requested in sequence order. Each request consumes the next
/// child only when it matches the entry's name and namespace.
pub struct ElementReader<'a> {
    mapping: &'static TypeMapping,
    node: Node<'a, 'a>,
    children: Vec<Node<'a, 'a>>,
    position: usize,
    sequence: Vec<&'static ElementMapping>,
    config: &'a ReaderConfig,
}

fn is_entry(node: Node<'_, '_>, entry: &ElementMapping) -> bool {
    entry.namespace.is_element(node, entry.name)
}

impl<'a> ElementReader<'a> {
    pub fn new(mapping: &'static TypeMapping, node: Node<'a, 'a>, config: &'a ReaderConfig) -> Self {
        Self {
            mapping,
            node,
            children: element_children(node).collect(),
            position: 0,
            sequence: mapping.sequence(),
            config,
        }
    }

    pub fn attribute<T: SimpleType>(
        &self,
        entry: &'static AttributeMapping,
    ) -> Result<Option<T>, EwsError> {
        let Some(text) = self.node.attribute(entry.name) else {
            if entry.occurs.is_required() {
                return Err(SchemaValidationError::MissingRequiredAttribute {
                    type_name: self.mapping.type_name,
                    attribute: entry.name,
                }
                .into());
            }
            return Ok(None);
        };

        trace!(attribute = entry.name, value = text, "reading attribute");
        T::from_xml_text(text)
            .map(Some)
            .map_err(|source| {
                SchemaValidationError::InvalidValue {
                    name: entry.name.to_owned(),
                    source,
                }
                .into()
            })
    }

    pub fn required<T: XmlValue>(
        &mut self,
        entry: &'static ElementMapping,
    ) -> Result<Option<T>, EwsError> {
        match self.take(entry) {
            Some(node) => Ok(Some(T::read_content(node, self.config)?)),
            None => Err(self.absent(entry)),
        }
    }

    pub fn optional<T: XmlValue>(
        &mut self,
        entry: &'static ElementMapping,
    ) -> Result<Option<T>, EwsError> {
        self.take(entry)
            .map(|node| T::read_content(node, self.config))
            .transpose()
    }

    pub fn repeated<T: XmlValue>(
        &mut self,
        entry: &'static ElementMapping,
    ) -> Result<Vec<T>, EwsError> {
        let mut values = Vec::new();
        while let Some(node) = self.take(entry) {
            values.push(T::read_content(node, self.config)?);
        }

        let min = entry.occurs.min_occurs();
        if values.is_empty() && min > 0 {
            return Err(self.absent(entry));
        }
        if values.len() < min {
            return Err(SchemaValidationError::TooFewOccurrences {
                type_name: self.mapping.type_name,
                element: entry.name,
                min,
                found: values.len(),
            }
            .into());
        }

        Ok(values)
    }

    /// Fails if any child was left unread.
    pub fn finish(mut self) -> Result<(), EwsError> {
        self.skip_unknown();
        let Some(&child) = self.children.get(self.position) else {
            return Ok(());
        };

        if let Some(error) = self.duplicate(child) {
            return Err(error);
        }

        let found = display_name(child);
        let error = if self.index_of(child).is_some() {
            SchemaValidationError::ElementOutOfOrder {
                type_name: self.mapping.type_name,
                found,
                expected: "end of content".to_owned(),
            }
        } else {
            SchemaValidationError::UnexpectedElement {
                type_name: self.mapping.type_name,
                found,
            }
        };
        Err(error.into())
    }

    fn take(&mut self, entry: &'static ElementMapping) -> Option<Node<'a, 'a>> {
        self.skip_unknown();
        let child = *self.children.get(self.position)?;
        if !is_entry(child, entry) {
            return None;
        }

        trace!(
            type_name = self.mapping.type_name,
            element = %entry.qualified_name(),
            "reading element"
        );
        self.position += 1;
        Some(child)
    }

    /// The error for a required entry whose element is not next.
    ///
    /// The entry is out of order rather than missing when the next child
    /// belongs earlier in the sequence, or when the entry shows up further on.
    fn absent(&self, entry: &'static ElementMapping) -> EwsError {
        if let Some(&child) = self.children.get(self.position) {
            if let Some(error) = self.duplicate(child) {
                return error;
            }

            let expected = self
                .sequence
                .iter()
                .position(|candidate| candidate.same_element(entry));
            let belongs_earlier = matches!(
                (self.index_of(child), expected),
                (Some(found), Some(expected)) if found < expected
            );
            let appears_later = self
                .children
                .iter()
                .skip(self.position)
                .any(|node| is_entry(*node, entry));

            if belongs_earlier || appears_later {
                return SchemaValidationError::ElementOutOfOrder {
                    type_name: self.mapping.type_name,
                    found: display_name(child),
                    expected: format!("'{}'", entry.qualified_name()),
                }
                .into();
            }
        }

        SchemaValidationError::MissingRequiredElement {
            type_name: self.mapping.type_name,
            element: entry.name,
        }
        .into()
    }

    /// A second occurrence of a single-valued element that was already read.
    fn duplicate(&self, child: Node<'_, '_>) -> Option<EwsError> {
        let entry = self.sequence[self.index_of(child)?];
        if matches!(entry.occurs, Occurs::Repeated { .. }) {
            return None;
        }

        self.children[..self.position]
            .iter()
            .any(|node| is_entry(*node, entry))
            .then(|| {
                SchemaValidationError::TooManyOccurrences {
                    type_name: self.mapping.type_name,
                    element: entry.name,
                }
                .into()
            })
    }

    fn index_of(&self, node: Node<'_, '_>) -> Option<usize> {
        self.sequence.iter().position(|entry| is_entry(node, entry))
    }

    fn skip_unknown(&mut self) {
        if !self.config.skip_unknown_elements {
            return;
        }

        while let Some(&child) = self.children.get(self.position) {
            if self.index_of(child).is_some() {
                break;
            }
            warn!(
                type_name = self.mapping.type_name,
                element = %display_name(child),
                "skipping element not defined by the schema"
            );
            self.position += 1;
        }
    }
}

/// Drives an [`ElementReader`] over one node through the [`XmlVisitor`] protocol.
pub struct ComplexTypeVisitor<'c, T> {
    config: &'c ReaderConfig,
    value: Option<T>,
}

impl<'c, T> ComplexTypeVisitor<'c, T> {
    pub fn new(config: &'c ReaderConfig) -> Self {
        Self {
            config,
            value: None,
        }
    }
}

impl<'a, T: ComplexType> XmlVisitor<'a> for ComplexTypeVisitor<'_, T> {
    type Value = T;
    type Error = EwsError;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), Self::Error> {
        let mut reader = ElementReader::new(T::mapping(), node, self.config);
        let value = T::read(&mut reader)?;
        reader.finish()?;
        self.value = Some(value);
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, Self::Error> {
        self.value.ok_or_else(|| {
            XmlError::InvalidXml(format!("no {} element visited", T::mapping().type_name)).into()
        })
    }
}

/// Reads the attributes and content of `node` as a `T`.
pub fn read_complex<T: ComplexType>(
    node: Node<'_, '_>,
    config: &ReaderConfig,
) -> Result<T, EwsError> {
    NodeDeserializer::new(node).deserialize(ComplexTypeVisitor::<T>::new(config))
}

/// Checks that `node` is the global element of `T`.
pub fn expect_root<T: ComplexType>(node: Node<'_, '_>) -> Result<(), EwsError> {
    let mapping = T::mapping();
    let Some(root) = mapping.root else {
        return Err(SchemaValidationError::NotAGlobalElement {
            type_name: mapping.type_name,
        }
        .into());
    };

    if mapping.namespace.is_element(node, root) {
        return Ok(());
    }

    Err(SchemaValidationError::UnexpectedRootElement {
        expected: format!("{}:{root}", mapping.namespace.alias()),
        found: display_name(node),
    }
    .into())
}

pub fn from_xml_str<T: ComplexType>(xml: &str, config: &ReaderConfig) -> Result<T, EwsError> {
    debug!(mapping = %T::mapping().describe(), "deserializing");
    let document = parse(xml)?;
    let root = document.root_element();
    expect_root::<T>(root)?;
    read_complex(root, config)
}
