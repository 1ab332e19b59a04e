use ews_xml::XmlError;
use ews_xml::builder::XmlBuilderError;

use crate::soap::SoapFault;

/// A text value that does not belong to the lexical space of its XSD type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct ValueError {
    /// The XSD type name, `xs:int` or `t:OofState` for example.
    pub kind: &'static str,
    pub value: String,
}

impl ValueError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("{type_name}: required element '{element}' is missing")]
    MissingRequiredElement {
        type_name: &'static str,
        element: &'static str,
    },

    #[error("{type_name}: required attribute '{attribute}' is missing")]
    MissingRequiredAttribute {
        type_name: &'static str,
        attribute: &'static str,
    },

    #[error("{type_name}: element '{found}' is out of order, expected {expected}")]
    ElementOutOfOrder {
        type_name: &'static str,
        found: String,
        expected: String,
    },

    #[error("{type_name}: unexpected element '{found}'")]
    UnexpectedElement {
        type_name: &'static str,
        found: String,
    },

    #[error("{type_name}: element '{element}' may occur at most once")]
    TooManyOccurrences {
        type_name: &'static str,
        element: &'static str,
    },

    #[error("{type_name}: element '{element}' occurs {found} time(s), at least {min} required")]
    TooFewOccurrences {
        type_name: &'static str,
        element: &'static str,
        min: usize,
        found: usize,
    },

    #[error("invalid value for '{name}': {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: ValueError,
    },

    #[error("expected root element '{expected}', found '{found}'")]
    UnexpectedRootElement { expected: String, found: String },

    #[error("{type_name} has no global element and cannot be a document root")]
    NotAGlobalElement { type_name: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum EwsError {
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    #[error("schema validation failed: {0}")]
    SchemaValidation(#[from] SchemaValidationError),

    #[error("SOAP fault: {0}")]
    Fault(Box<SoapFault>),
}

impl From<XmlBuilderError> for EwsError {
    fn from(error: XmlBuilderError) -> Self {
        Self::Xml(XmlError::from(error))
    }
}

impl From<SoapFault> for EwsError {
    fn from(fault: SoapFault) -> Self {
        Self::Fault(Box::new(fault))
    }
}

impl EwsError {
    /// Returns the validation error, when this is one.
    pub fn as_validation(&self) -> Option<&SchemaValidationError> {
        match self {
            Self::SchemaValidation(error) => Some(error),
            Self::Xml(_) | Self::Fault(_) => None,
        }
    }
}
