use std::fs;

use ews_schema::messages::{
    DisconnectPhoneCall, GetDelegate, GetPhoneCallInformationResponse, UploadItems,
};
use ews_schema::types::{NonEmptyArrayOfUploadItems, PhoneCallState, UploadItem};
use ews_schema::{ComplexType, ReaderConfig, SchemaValidationError, ValueError, WriterConfig};

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &str) -> String {
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
    }

    #[test]
    fn test_out_of_order_child_is_rejected() {
        let xml = read("tests/resources/malformed/get_delegate_out_of_order.xml");
        let error = GetDelegate::from_xml_str(&xml, &ReaderConfig::default())
            .expect_err("DisplayName before PrimarySmtpAddress should fail");

        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::ElementOutOfOrder {
                type_name: "UserIdType",
                found: "t:PrimarySmtpAddress".to_owned(),
                expected: "end of content".to_owned(),
            })
        );
    }

    #[test]
    fn test_repeated_single_element_is_rejected() {
        let xml = concat!(
            r#"<m:DisconnectPhoneCall xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages">"#,
            r#"<m:PhoneCallId Id="first"/><m:PhoneCallId Id="second"/>"#,
            "</m:DisconnectPhoneCall>"
        );
        let error = DisconnectPhoneCall::from_xml_str(xml, &ReaderConfig::default())
            .expect_err("PhoneCallId may occur only once");

        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::TooManyOccurrences {
                type_name: "DisconnectPhoneCallType",
                element: "PhoneCallId",
            })
        );
        assert_eq!(
            error.to_string(),
            "schema validation failed: DisconnectPhoneCallType: element 'PhoneCallId' may occur at most once"
        );
    }

    #[test]
    fn test_unknown_element_is_rejected_by_default() {
        let xml = read("tests/resources/malformed/phone_call_information_unknown_element.xml");
        let error = GetPhoneCallInformationResponse::from_xml_str(&xml, &ReaderConfig::default())
            .expect_err("CallDurationSeconds is not part of PhoneCallInformationType");

        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::UnexpectedElement {
                type_name: "PhoneCallInformationType",
                found: "t:CallDurationSeconds".to_owned(),
            })
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_lenient_reader_skips_unknown_element() {
        let xml = read("tests/resources/malformed/phone_call_information_unknown_element.xml");
        let config = ReaderConfig::builder().skip_unknown_elements(true).build();
        let response = GetPhoneCallInformationResponse::from_xml_str(&xml, &config)
            .expect("Lenient reading should skip CallDurationSeconds");

        let information = response
            .phone_call_information()
            .expect("PhoneCallInformation should be present");
        assert_eq!(information.phone_call_state(), Some(&PhoneCallState::Connected));
        assert_eq!(information.sip_response_text().map(String::as_str), Some("OK"));
        assert_eq!(information.sip_response_code(), Some(&200));

        assert!(logs_contain("skipping element not defined by the schema"));
        assert!(logs_contain("t:CallDurationSeconds"));
    }

    #[test]
    fn test_unknown_enumeration_token_is_invalid_value() {
        let xml = read("tests/resources/malformed/phone_call_information_unknown_state.xml");
        let error = GetPhoneCallInformationResponse::from_xml_str(&xml, &ReaderConfig::default())
            .expect_err("OnHold is not a PhoneCallStateType token");

        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::InvalidValue {
                name: "PhoneCallState".to_owned(),
                source: ValueError::new("t:PhoneCallStateType", "OnHold"),
            })
        );
    }

    #[test]
    fn test_required_field_unset_fails_serialization() {
        let error = DisconnectPhoneCall::default()
            .to_xml_string(&WriterConfig::default())
            .expect_err("PhoneCallId is required");
        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::MissingRequiredElement {
                type_name: "DisconnectPhoneCallType",
                element: "PhoneCallId",
            })
        );
        assert_eq!(
            error.to_string(),
            "schema validation failed: DisconnectPhoneCallType: required element 'PhoneCallId' is missing"
        );
    }

    #[test]
    fn test_nested_required_field_unset_fails_serialization() {
        let request = UploadItems::builder()
            .items([UploadItem::default()].into_iter().collect::<NonEmptyArrayOfUploadItems>())
            .build();
        let error = request
            .to_xml_string(&WriterConfig::default())
            .expect_err("UploadItem has required fields");

        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::MissingRequiredAttribute {
                type_name: "UploadItemType",
                attribute: "CreateAction",
            })
        );
    }
}
