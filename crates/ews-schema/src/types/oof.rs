use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::cores::DateTime;
use crate::simple_enum;

simple_enum! {
    pub enum OofState: "t:OofState" {
        Disabled => "Disabled",
        Enabled => "Enabled",
        Scheduled => "Scheduled",
    }
}

simple_enum! {
    /// Which external senders get the external reply.
    pub enum ExternalAudience: "t:ExternalAudience" {
        None => "None",
        Known => "Known",
        All => "All",
    }
}

/// Out of office (OOF) settings of a mailbox.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/oofsettings>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "UserOofSettings", namespace = "types")]
pub struct UserOofSettings {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    oof_state: Option<OofState>,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    external_audience: Option<ExternalAudience>,
    /// Only meaningful when `OofState` is `Scheduled`.
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    duration: Option<Duration>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    internal_reply: Option<ReplyBody>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    external_reply: Option<ReplyBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "Duration", namespace = "types")]
pub struct Duration {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    start_time: Option<DateTime>,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    end_time: Option<DateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ReplyBody", namespace = "types")]
pub struct ReplyBody {
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    message: Option<String>,
}

impl ReplyBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
