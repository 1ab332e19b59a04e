use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::simple_enum;

simple_enum! {
    /// The Exchange Server version identifiers allowed in `RequestServerVersion`.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/requestserverversion#version-attribute-values>
    pub enum ExchangeVersion: "t:ExchangeVersionType" {
        Exchange2007 => "Exchange2007",
        Exchange2007Sp1 => "Exchange2007_SP1",
        Exchange2010 => "Exchange2010",
        Exchange2010Sp1 => "Exchange2010_SP1",
        Exchange2010Sp2 => "Exchange2010_SP2",
        Exchange2013 => "Exchange2013",
        Exchange2013Sp1 => "Exchange2013_SP1",
    }
}

/// The schema version a request targets, sent as a SOAP header.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "RequestServerVersion", namespace = "types", root = "RequestServerVersion")]
pub struct RequestServerVersion {
    #[ews(attribute, required)]
    #[builder(default, setter(into, strip_option))]
    version: Option<ExchangeVersion>,
}

impl From<ExchangeVersion> for RequestServerVersion {
    fn from(version: ExchangeVersion) -> Self {
        Self {
            version: Some(version),
        }
    }
}

/// The version of the server that produced a response.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/serverversioninfo>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ServerVersionInfo", namespace = "types", root = "ServerVersionInfo")]
pub struct ServerVersionInfo {
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    major_version: Option<i32>,
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    minor_version: Option<i32>,
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    major_build_number: Option<i32>,
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    minor_build_number: Option<i32>,
    /// Newer servers report values outside of `ExchangeVersionType` here,
    /// `V2017_07_11` for example, so the raw token is kept.
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    version: Option<String>,
}
