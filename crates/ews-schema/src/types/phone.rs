use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::simple_enum;

simple_enum! {
    pub enum PhoneCallState: "t:PhoneCallStateType" {
        Idle => "Idle",
        Connecting => "Connecting",
        Alerted => "Alerted",
        Connected => "Connected",
        Disconnected => "Disconnected",
        Incoming => "Incoming",
        Transferring => "Transferring",
        Forwarding => "Forwarding",
    }
}

simple_enum! {
    /// Why a call ended. `None` means it was not a failure.
    pub enum ConnectionFailureCause: "t:ConnectionFailureCauseType" {
        None => "None",
        UserBusy => "UserBusy",
        NoAnswer => "NoAnswer",
        Unavailable => "Unavailable",
        Other => "Other",
    }
}

/// State of a Unified Messaging phone call.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/phonecallinformation>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "PhoneCallInformationType", namespace = "types")]
pub struct PhoneCallInformation {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    phone_call_state: Option<PhoneCallState>,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    connection_failure_cause: Option<ConnectionFailureCause>,
    #[ews(optional, rename = "SIPResponseText")]
    #[builder(default, setter(into, strip_option))]
    sip_response_text: Option<String>,
    #[ews(optional, rename = "SIPResponseCode")]
    #[builder(default, setter(into, strip_option))]
    sip_response_code: Option<i32>,
}
