use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ews_xml::XmlError;
use ews_xml::builder::Element;
use ews_xml::parser::{Node, NodeDeserializer, XmlVisitor, text_content};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::config::ReaderConfig;
use crate::error::{EwsError, SchemaValidationError, ValueError};

/// A value with a text representation: an XSD simple type.
///
/// Simple types can be the content of an element or the value of an attribute.
pub trait SimpleType: Sized {
    fn to_xml_text(&self) -> Result<Cow<'_, str>, ValueError>;

    fn from_xml_text(text: &str) -> Result<Self, ValueError>;
}

/// Anything that can be the content of an element.
pub trait XmlValue: Sized {
    /// Writes `self` as the attributes and content of `element`.
    fn write_content<'a>(&'a self, element: Element<'a>) -> Result<Element<'a>, EwsError>;

    /// Reads a value from the attributes and content of `node`.
    fn read_content(node: Node<'_, '_>, config: &ReaderConfig) -> Result<Self, EwsError>;
}

impl<T: SimpleType> XmlValue for T {
    fn write_content<'a>(&'a self, element: Element<'a>) -> Result<Element<'a>, EwsError> {
        let text = self
            .to_xml_text()
            .map_err(|source| SchemaValidationError::InvalidValue {
                name: element.name().to_owned(),
                source,
            })?;
        Ok(element.set_text(text))
    }

    fn read_content(node: Node<'_, '_>, _config: &ReaderConfig) -> Result<Self, EwsError> {
        NodeDeserializer::new(node).deserialize(TextVisitor::<T>::new())
    }
}

/// Reads the text content of a simple-typed element.
pub struct TextVisitor<T> {
    value: Option<T>,
}

impl<T> TextVisitor<T> {
    pub fn new() -> Self {
        Self { value: None }
    }
}

impl<T> Default for TextVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: SimpleType> XmlVisitor<'a> for TextVisitor<T> {
    type Value = T;
    type Error = EwsError;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), Self::Error> {
        let name = node.tag_name().name();
        let Some(text) = text_content(node) else {
            return Err(XmlError::InvalidXml(format!(
                "element '{name}' has element content, expected text"
            ))
            .into());
        };

        let value = T::from_xml_text(&text).map_err(|source| {
            SchemaValidationError::InvalidValue {
                name: name.to_owned(),
                source,
            }
        })?;
        self.value = Some(value);
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, Self::Error> {
        self.value
            .ok_or_else(|| XmlError::InvalidXml("no text element visited".to_owned()).into())
    }
}

impl SimpleType for String {
    fn to_xml_text(&self) -> Result<Cow<'_, str>, ValueError> {
        Ok(Cow::Borrowed(self))
    }

    fn from_xml_text(text: &str) -> Result<Self, ValueError> {
        Ok(text.to_owned())
    }
}

impl SimpleType for bool {
    fn to_xml_text(&self) -> Result<Cow<'_, str>, ValueError> {
        Ok(Cow::Borrowed(if *self { "true" } else { "false" }))
    }

    fn from_xml_text(text: &str) -> Result<Self, ValueError> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ValueError::new("xs:boolean", other)),
        }
    }
}

crate::xml_num_value!(i32, "xs:int");
crate::xml_num_value!(i64, "xs:long");
crate::xml_num_value!(u32, "xs:unsignedInt");

/// `xs:base64Binary` content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base64Binary(Vec<u8>);

impl Base64Binary {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Base64Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Base64Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl SimpleType for Base64Binary {
    fn to_xml_text(&self) -> Result<Cow<'_, str>, ValueError> {
        Ok(Cow::Owned(STANDARD.encode(&self.0)))
    }

    fn from_xml_text(text: &str) -> Result<Self, ValueError> {
        // Servers wrap long payloads across lines.
        let compact: String = text.split_whitespace().collect();
        STANDARD
            .decode(compact.as_bytes())
            .map(Self)
            .map_err(|_| ValueError::new("xs:base64Binary", text))
    }
}

/// `xs:dateTime`, written in RFC 3339 form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime(OffsetDateTime);

impl DateTime {
    pub fn new(value: OffsetDateTime) -> Self {
        Self(value)
    }

    pub fn as_offset_date_time(&self) -> &OffsetDateTime {
        &self.0
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl SimpleType for DateTime {
    fn to_xml_text(&self) -> Result<Cow<'_, str>, ValueError> {
        self.0
            .format(&Rfc3339)
            .map(Cow::Owned)
            .map_err(|_| ValueError::new("xs:dateTime", self.0.to_string()))
    }

    fn from_xml_text(text: &str) -> Result<Self, ValueError> {
        OffsetDateTime::parse(text.trim(), &Rfc3339)
            .map(Self)
            .map_err(|_| ValueError::new("xs:dateTime", text))
    }
}
