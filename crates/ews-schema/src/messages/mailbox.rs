//! Mailbox settings: password expiration and out of office replies.
use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::cores::DateTime;
use crate::messages::{BaseRequest, ResponseMessage};
use crate::types::{EmailAddress, UserOofSettings};

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetPasswordExpirationDateType",
    namespace = "messages",
    root = "GetPasswordExpirationDate"
)]
pub struct GetPasswordExpirationDate {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    /// Defaults to the caller's mailbox when unset.
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    mailbox_smtp_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetPasswordExpirationDateResponseMessageType",
    namespace = "messages",
    root = "GetPasswordExpirationDateResponse"
)]
pub struct GetPasswordExpirationDateResponse {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    password_expiration_date: Option<DateTime>,
}

/// Reads the out of office settings of a mailbox.
///
/// Unlike most requests this one does not extend `BaseRequestType`, and its
/// `Mailbox` child lives in the `types` namespace.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/getuseroofsettingsrequest>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetUserOofSettingsRequest",
    namespace = "messages",
    root = "GetUserOofSettingsRequest"
)]
pub struct GetUserOofSettingsRequest {
    #[ews(required, namespace = "types")]
    #[builder(default, setter(into, strip_option))]
    mailbox: Option<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetUserOofSettingsResponse",
    namespace = "messages",
    root = "GetUserOofSettingsResponse"
)]
pub struct GetUserOofSettingsResponse {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    response_message: Option<ResponseMessage>,
    #[ews(optional, namespace = "types")]
    #[builder(default, setter(into, strip_option))]
    oof_settings: Option<UserOofSettings>,
    /// One of `None`, `Known` or `All`, sent as free text by the server.
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    allow_external_oof: Option<String>,
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::config::{ReaderConfig, WriterConfig};
    use crate::cores::ComplexType;
    use crate::error::SchemaValidationError;
    use crate::types::{Duration, ExternalAudience, OofState, ReplyBody};

    const M: &str = "http://schemas.microsoft.com/exchange/services/2006/messages";
    const T: &str = "http://schemas.microsoft.com/exchange/services/2006/types";

    #[test]
    fn oof_request_mailbox_is_a_types_element() {
        let request = GetUserOofSettingsRequest::builder()
            .mailbox(EmailAddress::smtp("user@contoso.com"))
            .build();
        let xml = request
            .to_xml_string(&WriterConfig::builder().include_declaration(false).build())
            .unwrap();

        assert!(xml.contains("<t:Mailbox><t:EmailAddress>user@contoso.com</t:EmailAddress></t:Mailbox>"));
    }

    #[test]
    fn oof_request_rejects_messages_mailbox() {
        let xml = format!(
            r#"<m:GetUserOofSettingsRequest xmlns:m="{M}" xmlns:t="{T}"><m:Mailbox/></m:GetUserOofSettingsRequest>"#
        );
        let error =
            GetUserOofSettingsRequest::from_xml_str(&xml, &ReaderConfig::default()).unwrap_err();
        assert!(matches!(
            error.as_validation(),
            Some(SchemaValidationError::MissingRequiredElement { element: "Mailbox", .. })
        ));
    }

    #[test]
    fn scheduled_oof_settings_round_trip() {
        let response = GetUserOofSettingsResponse::builder()
            .response_message(ResponseMessage::success())
            .oof_settings(
                UserOofSettings::builder()
                    .oof_state(OofState::Scheduled)
                    .external_audience(ExternalAudience::Known)
                    .duration(
                        Duration::builder()
                            .start_time(datetime!(2024-07-01 00:00 UTC))
                            .end_time(datetime!(2024-07-15 00:00 UTC))
                            .build(),
                    )
                    .internal_reply(ReplyBody::new("Back on the 15th. Ask <Dana> & team."))
                    .build(),
            )
            .allow_external_oof("All")
            .build();

        let xml = response.to_xml_string(&WriterConfig::default()).unwrap();
        assert!(xml.contains("<t:StartTime>2024-07-01T00:00:00Z</t:StartTime>"));
        assert!(xml.contains("Ask &lt;Dana&gt; &amp; team."));

        let read = GetUserOofSettingsResponse::from_xml_str(&xml, &ReaderConfig::default()).unwrap();
        assert_eq!(read, response);
    }

    #[test]
    fn password_expiration_date_is_optional() {
        let response = GetPasswordExpirationDateResponse::builder()
            .base(ResponseMessage::success())
            .build();
        let xml = response.to_xml_string(&WriterConfig::default()).unwrap();

        assert!(!xml.contains("PasswordExpirationDate>"));
        assert_eq!(
            GetPasswordExpirationDateResponse::from_xml_str(&xml, &ReaderConfig::default())
                .unwrap()
                .password_expiration_date(),
            None
        );
    }
}
