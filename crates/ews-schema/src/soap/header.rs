use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::types::{RequestServerVersion, ServerVersionInfo};

/// `soap:Header` contents understood by this crate.
///
/// Requests carry `RequestServerVersion`; responses carry `ServerVersionInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "Header", namespace = "soap", root = "Header")]
pub struct SoapHeader {
    #[ews(optional, namespace = "types")]
    #[builder(default, setter(into, strip_option))]
    request_server_version: Option<RequestServerVersion>,
    #[ews(optional, namespace = "types")]
    #[builder(default, setter(into, strip_option))]
    server_version_info: Option<ServerVersionInfo>,
}
