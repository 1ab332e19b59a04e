//! Request and response messages of the `messages` schema
//! (`http://schemas.microsoft.com/exchange/services/2006/messages`), together
//! with the abstract base types they extend.
use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::types::{DelegateUser, EmailAddress, ResponseClass, ResponseCode};

pub mod bulk_transfer;
pub mod delegates;
pub mod mailbox;
pub mod rooms;
pub mod unified_messaging;

pub use bulk_transfer::*;
pub use delegates::*;
pub use mailbox::*;
pub use rooms::*;
pub use unified_messaging::*;

/// The abstract base of every request. It has no content of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "BaseRequestType", namespace = "messages")]
pub struct BaseRequest {}

/// Base of the delegate management requests: the principal's mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "BaseDelegateType", namespace = "messages")]
pub struct BaseDelegateRequest {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    mailbox: Option<EmailAddress>,
}

impl From<EmailAddress> for BaseDelegateRequest {
    fn from(mailbox: EmailAddress) -> Self {
        Self {
            base: BaseRequest::default(),
            mailbox: Some(mailbox),
        }
    }
}

/// Status shared by every response message.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responsemessage>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ResponseMessageType", namespace = "messages")]
pub struct ResponseMessage {
    #[ews(attribute, required)]
    #[builder(default, setter(into, strip_option))]
    response_class: Option<ResponseClass>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    message_text: Option<String>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    response_code: Option<ResponseCode>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    descriptive_link_key: Option<i32>,
}

impl ResponseMessage {
    /// A `Success` message with `NoError`.
    pub fn success() -> Self {
        Self {
            response_class: Some(ResponseClass::Success),
            response_code: Some(ResponseCode::NoError),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_class == Some(ResponseClass::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "BaseDelegateResponseMessageType", namespace = "messages")]
pub struct BaseDelegateResponseMessage {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    response_messages: Option<ArrayOfDelegateUserResponseMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ArrayOfDelegateUserResponseMessageType", namespace = "messages")]
pub struct ArrayOfDelegateUserResponseMessage {
    #[ews(repeated, rename = "DelegateUserResponseMessageType")]
    #[builder(default)]
    messages: Vec<DelegateUserResponseMessage>,
}

impl FromIterator<DelegateUserResponseMessage> for ArrayOfDelegateUserResponseMessage {
    fn from_iter<I: IntoIterator<Item = DelegateUserResponseMessage>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// The outcome for one delegate of a delegate management request.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "DelegateUserResponseMessageType", namespace = "messages")]
pub struct DelegateUserResponseMessage {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    delegate_user: Option<DelegateUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cores::{ComplexType, Namespace};

    #[test]
    fn base_chain_is_flattened_base_first() {
        let names: Vec<_> = BaseDelegateResponseMessage::mapping()
            .sequence()
            .iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(
            names,
            [
                "MessageText",
                "ResponseCode",
                "DescriptiveLinkKey",
                "ResponseMessages"
            ]
        );

        let attributes: Vec<_> = DelegateUserResponseMessage::mapping()
            .all_attributes()
            .iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(attributes, ["ResponseClass"]);
    }

    #[test]
    fn array_items_use_the_type_name_as_element_name() {
        let mapping = ArrayOfDelegateUserResponseMessage::mapping();
        assert_eq!(
            mapping.position_of("DelegateUserResponseMessageType", Namespace::Messages),
            Some(0)
        );
        assert_eq!(mapping.elements[0].occurs.min_occurs(), 0);
    }

    #[test]
    fn success_message() {
        let message = ResponseMessage::success();
        assert!(message.is_success());
        assert_eq!(message.response_code(), Some(&ResponseCode::NoError));
    }
}
