use ews_xml::builder::Element;
use ews_xml::parser::Node;

pub const MESSAGES_NAMESPACE_URI: &str =
    "http://schemas.microsoft.com/exchange/services/2006/messages";
pub const MESSAGES_NAMESPACE_ALIAS: &str = "m";

pub const TYPES_NAMESPACE_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/types";
pub const TYPES_NAMESPACE_ALIAS: &str = "t";

pub const ERRORS_NAMESPACE_URI: &str = "http://schemas.microsoft.com/exchange/services/2006/errors";
pub const ERRORS_NAMESPACE_ALIAS: &str = "e";

pub const SOAP_ENVELOPE_NAMESPACE_URI: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP_ENVELOPE_NAMESPACE_ALIAS: &str = "soap";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Messages,
    Types,
    Errors,
    Soap,
}

impl Namespace {
    pub fn as_tuple(&self) -> (&'static str, &'static str) {
        match self {
            Self::Messages => (MESSAGES_NAMESPACE_URI, MESSAGES_NAMESPACE_ALIAS),
            Self::Types => (TYPES_NAMESPACE_URI, TYPES_NAMESPACE_ALIAS),
            Self::Errors => (ERRORS_NAMESPACE_URI, ERRORS_NAMESPACE_ALIAS),
            Self::Soap => (SOAP_ENVELOPE_NAMESPACE_URI, SOAP_ENVELOPE_NAMESPACE_ALIAS),
        }
    }

    pub fn uri(&self) -> &'static str {
        self.as_tuple().0
    }

    pub fn alias(&self) -> &'static str {
        self.as_tuple().1
    }

    /// Adds the `xmlns:<alias>` declaration for this namespace to `element`.
    pub fn declare<'a>(&self, element: Element<'a>) -> Element<'a> {
        let (uri, alias) = self.as_tuple();
        element.add_namespace_declaration(uri, Some(alias))
    }

    /// Whether `node` is the element `name` in this namespace.
    pub fn is_element(&self, node: Node<'_, '_>, name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == name
            && node.tag_name().namespace() == Some(self.uri())
    }
}

impl TryFrom<&str> for Namespace {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            MESSAGES_NAMESPACE_URI => Ok(Self::Messages),
            TYPES_NAMESPACE_URI => Ok(Self::Types),
            ERRORS_NAMESPACE_URI => Ok(Self::Errors),
            SOAP_ENVELOPE_NAMESPACE_URI => Ok(Self::Soap),
            _ => Err("Unknown namespace"),
        }
    }
}

/// Renders the name of `node` for diagnostics, `t:ItemId` for known namespaces
/// and `{uri}ItemId` otherwise.
pub fn display_name(node: Node<'_, '_>) -> String {
    let name = node.tag_name().name();
    match node.tag_name().namespace() {
        Some(uri) => match Namespace::try_from(uri) {
            Ok(namespace) => format!("{}:{name}", namespace.alias()),
            Err(_) => format!("{{{uri}}}{name}"),
        },
        None => name.to_owned(),
    }
}
