//! SOAP 1.1 envelope around one EWS message.
//!
//! Only the envelope is handled here. Sending it is left to the caller.
mod fault;
mod header;

pub use fault::{FaultDetail, SoapFault, SoapFaultVisitor};
pub use header::SoapHeader;

use ews_xml::builder::{Builder, Element};
use ews_xml::parser::{Node, NodeDeserializer, XmlVisitor, element_children, parse};
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::config::{ReaderConfig, WriterConfig};
use crate::cores::{ComplexType, Namespace, XmlValue, de, display_name, ser};
use crate::error::{EwsError, SchemaValidationError};

const ENVELOPE: &str = "Envelope";
const BODY: &str = "Body";

#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct SoapEnvelope<B> {
    #[builder(default, setter(into, strip_option))]
    pub header: Option<SoapHeader>,
    pub body: B,
}

impl<B: ComplexType> SoapEnvelope<B> {
    pub fn new(body: B) -> Self {
        Self { header: None, body }
    }

    /// Builds `soap:Envelope`, declaring the `soap`, `m` and `t` prefixes on it.
    pub fn to_element(&self) -> Result<Element<'_>, EwsError> {
        let soap = Namespace::Soap.uri();
        let envelope = [Namespace::Soap, Namespace::Messages, Namespace::Types]
            .iter()
            .fold(Element::new(ENVELOPE).set_namespace(soap), |element, namespace| {
                namespace.declare(element)
            });

        let envelope = match &self.header {
            Some(header) => envelope.add_child(ser::global_element(header)?),
            None => envelope,
        };

        let body = Element::new(BODY)
            .set_namespace(soap)
            .add_child(ser::global_element(&self.body)?);
        Ok(envelope.add_child(body))
    }

    pub fn to_xml_string(&self, config: &WriterConfig) -> Result<String, EwsError> {
        debug!(body = %B::mapping().describe(), "serializing SOAP envelope");
        let element = self.to_element()?;
        Ok(Builder::new(config.declaration(), element).to_xml_string()?)
    }

    /// Reads an envelope whose body holds the global element of `B`.
    ///
    /// A `soap:Fault` body is returned as [`EwsError::Fault`].
    pub fn from_xml_str(xml: &str, config: &ReaderConfig) -> Result<Self, EwsError> {
        debug!(body = %B::mapping().describe(), "deserializing SOAP envelope");
        let document = parse(xml)?;
        let root = document.root_element();
        if !Namespace::Soap.is_element(root, ENVELOPE) {
            return Err(SchemaValidationError::UnexpectedRootElement {
                expected: format!("{}:{ENVELOPE}", Namespace::Soap.alias()),
                found: display_name(root),
            }
            .into());
        }

        NodeDeserializer::new(root).deserialize(SoapEnvelopeVisitor::new(config))
    }
}

pub struct SoapEnvelopeVisitor<'c, B> {
    config: &'c ReaderConfig,
    header: Option<SoapHeader>,
    body: Option<B>,
}

impl<'c, B> SoapEnvelopeVisitor<'c, B> {
    pub fn new(config: &'c ReaderConfig) -> Self {
        Self {
            config,
            header: None,
            body: None,
        }
    }
}

impl<B: ComplexType> SoapEnvelopeVisitor<'_, B> {
    fn visit_body(&self, node: Node<'_, '_>) -> Result<B, EwsError> {
        let mut children = element_children(node);
        let mapping = B::mapping();
        let Some(message) = children.next() else {
            return Err(SchemaValidationError::MissingRequiredElement {
                type_name: BODY,
                element: mapping.root.unwrap_or(mapping.type_name),
            }
            .into());
        };

        if Namespace::Soap.is_element(message, "Fault") {
            let fault = NodeDeserializer::new(message).deserialize(SoapFaultVisitor::default())?;
            return Err(fault.into());
        }

        if let Some(extra) = children.next() {
            return Err(SchemaValidationError::UnexpectedElement {
                type_name: BODY,
                found: display_name(extra),
            }
            .into());
        }

        de::expect_root::<B>(message)?;
        de::read_complex(message, self.config)
    }
}

impl<'a, B: ComplexType> XmlVisitor<'a> for SoapEnvelopeVisitor<'_, B> {
    type Value = SoapEnvelope<B>;
    type Error = EwsError;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), Self::Error> {
        self.visit_children(element_children(node))
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), Self::Error> {
        for child in children {
            let header_allowed = self.header.is_none() && self.body.is_none();
            if header_allowed && Namespace::Soap.is_element(child, "Header") {
                self.header = Some(SoapHeader::read_content(child, self.config)?);
            } else if self.body.is_none() && Namespace::Soap.is_element(child, BODY) {
                self.body = Some(self.visit_body(child)?);
            } else {
                return Err(SchemaValidationError::UnexpectedElement {
                    type_name: ENVELOPE,
                    found: display_name(child),
                }
                .into());
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, Self::Error> {
        let body = self
            .body
            .ok_or(SchemaValidationError::MissingRequiredElement {
                type_name: ENVELOPE,
                element: BODY,
            })?;
        Ok(SoapEnvelope {
            header: self.header,
            body,
        })
    }
}
