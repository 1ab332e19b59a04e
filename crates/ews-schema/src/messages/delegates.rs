//! Delegate management.
use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::messages::{BaseDelegateRequest, BaseDelegateResponseMessage};
use crate::types::{ArrayOfDelegateUser, ArrayOfUserId, DeliverMeetingRequests};

/// Reads the delegates of a mailbox.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/getdelegate>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "GetDelegateType", namespace = "messages", root = "GetDelegate")]
pub struct GetDelegate {
    #[ews(base)]
    #[builder(default)]
    base: BaseDelegateRequest,
    /// All delegates are returned when unset.
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    user_ids: Option<ArrayOfUserId>,
    #[ews(attribute, required)]
    #[builder(default, setter(into, strip_option))]
    include_permissions: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "AddDelegateType", namespace = "messages", root = "AddDelegate")]
pub struct AddDelegate {
    #[ews(base)]
    #[builder(default)]
    base: BaseDelegateRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    delegate_users: Option<ArrayOfDelegateUser>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    deliver_meeting_requests: Option<DeliverMeetingRequests>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "RemoveDelegateType", namespace = "messages", root = "RemoveDelegate")]
pub struct RemoveDelegate {
    #[ews(base)]
    #[builder(default)]
    base: BaseDelegateRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    user_ids: Option<ArrayOfUserId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetDelegateResponseMessageType",
    namespace = "messages",
    root = "GetDelegateResponse"
)]
pub struct GetDelegateResponse {
    #[ews(base)]
    #[builder(default)]
    base: BaseDelegateResponseMessage,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    deliver_meeting_requests: Option<DeliverMeetingRequests>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "AddDelegateResponseMessageType",
    namespace = "messages",
    root = "AddDelegateResponse"
)]
pub struct AddDelegateResponse {
    #[ews(base)]
    #[builder(default)]
    base: BaseDelegateResponseMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "RemoveDelegateResponseMessageType",
    namespace = "messages",
    root = "RemoveDelegateResponse"
)]
pub struct RemoveDelegateResponse {
    #[ews(base)]
    #[builder(default)]
    base: BaseDelegateResponseMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReaderConfig, WriterConfig};
    use crate::cores::ComplexType;
    use crate::messages::{
        ArrayOfDelegateUserResponseMessage, DelegateUserResponseMessage, ResponseMessage,
    };
    use crate::types::{
        DelegateFolderPermissionLevel, DelegatePermissions, DelegateUser, EmailAddress,
        ResponseClass, ResponseCode, UserId,
    };

    fn compact() -> WriterConfig {
        WriterConfig::builder().include_declaration(false).build()
    }

    #[test]
    fn get_delegate_writes_base_mailbox_first() {
        let request = GetDelegate::builder()
            .base(EmailAddress::smtp("boss@contoso.com").into())
            .user_ids([UserId::smtp("assistant@contoso.com")].into_iter().collect::<ArrayOfUserId>())
            .include_permissions(true)
            .build();

        let xml = request.to_xml_string(&compact()).unwrap();
        assert!(xml.contains(r#" IncludePermissions="true"><m:Mailbox>"#));
        assert!(xml.ends_with(concat!(
            "</m:Mailbox><m:UserIds><t:UserId>",
            "<t:PrimarySmtpAddress>assistant@contoso.com</t:PrimarySmtpAddress>",
            "</t:UserId></m:UserIds></m:GetDelegate>"
        )));
        assert_eq!(GetDelegate::from_xml_str(&xml, &ReaderConfig::default()).unwrap(), request);
    }

    #[test]
    fn add_delegate_round_trips_permissions() {
        let delegate = DelegateUser::builder()
            .user_id(UserId::smtp("assistant@contoso.com"))
            .delegate_permissions(
                DelegatePermissions::builder()
                    .calendar_folder_permission_level(DelegateFolderPermissionLevel::Editor)
                    .inbox_folder_permission_level(DelegateFolderPermissionLevel::Reviewer)
                    .build(),
            )
            .view_private_items(false)
            .build();
        let request = AddDelegate::builder()
            .base(EmailAddress::smtp("boss@contoso.com").into())
            .delegate_users([delegate].into_iter().collect::<ArrayOfDelegateUser>())
            .deliver_meeting_requests(DeliverMeetingRequests::DelegatesAndMe)
            .build();

        let xml = request.to_xml_string(&compact()).unwrap();
        assert!(xml.contains(concat!(
            "<t:CalendarFolderPermissionLevel>Editor</t:CalendarFolderPermissionLevel>",
            "<t:InboxFolderPermissionLevel>Reviewer</t:InboxFolderPermissionLevel>"
        )));
        assert!(xml.contains("<m:DeliverMeetingRequests>DelegatesAndMe</m:DeliverMeetingRequests>"));
        assert_eq!(AddDelegate::from_xml_str(&xml, &ReaderConfig::default()).unwrap(), request);
    }

    #[test]
    fn remove_delegate_requires_user_ids() {
        let request = RemoveDelegate::builder()
            .base(EmailAddress::smtp("boss@contoso.com").into())
            .build();
        assert!(request.to_xml_string(&compact()).is_err());
    }

    #[test]
    fn get_delegate_response_reads_nested_response_messages() {
        let mut item = DelegateUserResponseMessage::default();
        item.base_mut()
            .set_response_class(ResponseClass::Error)
            .set_response_code(ResponseCode::ErrorNotDelegate);

        let mut response = GetDelegateResponse::default();
        *response.base_mut().base_mut() = ResponseMessage::success();
        response
            .base_mut()
            .set_response_messages([item].into_iter().collect::<ArrayOfDelegateUserResponseMessage>());
        response.set_deliver_meeting_requests(DeliverMeetingRequests::NoForward);

        let xml = response.to_xml_string(&compact()).unwrap();
        assert!(xml.contains(
            r#"<m:DelegateUserResponseMessageType ResponseClass="Error"><m:ResponseCode>ErrorNotDelegate</m:ResponseCode></m:DelegateUserResponseMessageType>"#
        ));

        let read = GetDelegateResponse::from_xml_str(&xml, &ReaderConfig::default()).unwrap();
        assert_eq!(read, response);
        assert!(read.base().base().is_success());
    }
}
