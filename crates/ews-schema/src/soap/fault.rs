use std::fmt;

use ews_xml::parser::{Node, XmlVisitor, element_children, text_content};

use crate::cores::{Namespace, SimpleType, display_name};
use crate::error::{EwsError, SchemaValidationError};
use crate::types::ResponseCode;

/// A SOAP 1.1 fault returned in place of a response message.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/ews-error-handling>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    /// A qualified name such as `soap:Client` or `a:ErrorSchemaValidation`.
    pub fault_code: String,
    pub fault_string: String,
    pub fault_actor: Option<String>,
    pub detail: Option<FaultDetail>,
}

/// The EWS specific part of `detail`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultDetail {
    pub response_code: Option<ResponseCode>,
    pub message: Option<String>,
}

impl SoapFault {
    /// The EWS response code, when the server sent one.
    pub fn response_code(&self) -> Option<&ResponseCode> {
        self.detail.as_ref()?.response_code.as_ref()
    }
}

impl fmt::Display for SoapFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.fault_code, self.fault_string)?;
        if let Some(code) = self.response_code() {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

impl std::error::Error for SoapFault {}

const FAULT: &str = "Fault";

fn fault_text(node: Node<'_, '_>) -> Result<String, EwsError> {
    text_content(node).map(|text| text.trim().to_owned()).ok_or_else(|| {
        SchemaValidationError::UnexpectedElement {
            type_name: FAULT,
            found: display_name(node),
        }
        .into()
    })
}

/// Reads a `soap:Fault` element.
///
/// The `fault*` children are unqualified. Unknown `detail` children such as
/// `e:Line` or `t:MessageXml` are ignored.
#[derive(Default)]
pub struct SoapFaultVisitor {
    fault_code: Option<String>,
    fault_string: Option<String>,
    fault_actor: Option<String>,
    detail: Option<FaultDetail>,
}

impl SoapFaultVisitor {
    fn visit_detail(node: Node<'_, '_>) -> Result<FaultDetail, EwsError> {
        let mut detail = FaultDetail::default();
        for child in element_children(node) {
            if Namespace::Errors.is_element(child, "ResponseCode") {
                let text = fault_text(child)?;
                let code = ResponseCode::from_xml_text(&text).map_err(|source| {
                    SchemaValidationError::InvalidValue {
                        name: "ResponseCode".to_owned(),
                        source,
                    }
                })?;
                detail.response_code = Some(code);
            } else if Namespace::Errors.is_element(child, "Message") {
                detail.message = Some(fault_text(child)?);
            }
        }
        Ok(detail)
    }
}

impl<'a> XmlVisitor<'a> for SoapFaultVisitor {
    type Value = SoapFault;
    type Error = EwsError;

    fn visit_node(&mut self, node: Node<'a, 'a>) -> Result<(), Self::Error> {
        self.visit_children(element_children(node))
    }

    fn visit_children(
        &mut self,
        children: impl Iterator<Item = Node<'a, 'a>>,
    ) -> Result<(), Self::Error> {
        for child in children {
            let tag = child.tag_name();
            match (tag.namespace(), tag.name()) {
                (None, "faultcode") => self.fault_code = Some(fault_text(child)?),
                (None, "faultstring") => self.fault_string = Some(fault_text(child)?),
                (None, "faultactor") => self.fault_actor = Some(fault_text(child)?),
                (None, "detail") => self.detail = Some(Self::visit_detail(child)?),
                _ => {
                    return Err(SchemaValidationError::UnexpectedElement {
                        type_name: FAULT,
                        found: display_name(child),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Self::Value, Self::Error> {
        let missing = |element| SchemaValidationError::MissingRequiredElement {
            type_name: FAULT,
            element,
        };

        Ok(SoapFault {
            fault_code: self.fault_code.ok_or_else(|| missing("faultcode"))?,
            fault_string: self.fault_string.ok_or_else(|| missing("faultstring"))?,
            fault_actor: self.fault_actor,
            detail: self.detail,
        })
    }
}
