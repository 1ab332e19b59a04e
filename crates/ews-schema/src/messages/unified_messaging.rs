//! Unified Messaging: playing a message on a phone and tracking the call.
use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::messages::{BaseRequest, ResponseMessage};
use crate::types::{ItemId, PhoneCallId, PhoneCallInformation};

/// Asks the server to call `DialString` and play the item.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/playonphone>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "PlayOnPhoneType", namespace = "messages", root = "PlayOnPhone")]
pub struct PlayOnPhone {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    item_id: Option<ItemId>,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    dial_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "PlayOnPhoneResponseMessageType",
    namespace = "messages",
    root = "PlayOnPhoneResponse"
)]
pub struct PlayOnPhoneResponse {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    phone_call_id: Option<PhoneCallId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetPhoneCallInformationType",
    namespace = "messages",
    root = "GetPhoneCallInformation"
)]
pub struct GetPhoneCallInformation {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    phone_call_id: Option<PhoneCallId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetPhoneCallInformationResponseMessageType",
    namespace = "messages",
    root = "GetPhoneCallInformationResponse"
)]
pub struct GetPhoneCallInformationResponse {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    phone_call_information: Option<PhoneCallInformation>,
}

/// Hangs up a call placed by `PlayOnPhone`.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/disconnectphonecall>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "DisconnectPhoneCallType",
    namespace = "messages",
    root = "DisconnectPhoneCall"
)]
pub struct DisconnectPhoneCall {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    phone_call_id: Option<PhoneCallId>,
}

impl From<PhoneCallId> for DisconnectPhoneCall {
    fn from(phone_call_id: PhoneCallId) -> Self {
        Self {
            base: BaseRequest::default(),
            phone_call_id: Some(phone_call_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "DisconnectPhoneCallResponseMessageType",
    namespace = "messages",
    root = "DisconnectPhoneCallResponse"
)]
pub struct DisconnectPhoneCallResponse {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
}
