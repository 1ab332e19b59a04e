use std::fs;

use ews_schema::cores::Base64Binary;
use ews_schema::messages::{
    DisconnectPhoneCall, DisconnectPhoneCallResponse, GetDelegateResponse,
    GetPasswordExpirationDate, PlayOnPhone, ResponseMessage, UploadItems,
};
use ews_schema::soap::SoapEnvelope;
use ews_schema::types::{
    CreateAction, ExchangeVersion, FolderId, ItemId, NonEmptyArrayOfUploadItems, PhoneCallId,
    ResponseClass, ResponseCode, UploadItem,
};
use ews_schema::{ComplexType, ReaderConfig, WriterConfig};

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> WriterConfig {
        WriterConfig::builder().include_declaration(false).build()
    }

    fn upload_item(action: CreateAction, data: &[u8]) -> UploadItem {
        UploadItem::builder()
            .parent_folder_id(FolderId::new("AAMkADEz"))
            .data(Base64Binary::from(data))
            .create_action(action)
            .build()
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_upload_items_fixture_round_trips() {
        let xml = fs::read_to_string("tests/resources/upload_items_request.xml")
            .expect("Failed to read upload_items_request.xml");
        let envelope = SoapEnvelope::<UploadItems>::from_xml_str(&xml, &ReaderConfig::default())
            .expect("Failed to read UploadItems envelope");

        assert_eq!(
            envelope
                .header
                .as_ref()
                .and_then(|header| header.request_server_version())
                .and_then(|version| version.version()),
            Some(&ExchangeVersion::Exchange2010Sp1)
        );

        let items = envelope.body.items().expect("Items should be present").items();
        let payloads: Vec<_> = items
            .iter()
            .map(|item| item.data().map(Base64Binary::as_bytes))
            .collect();
        assert_eq!(
            payloads,
            [Some(&b"first"[..]), Some(&b"second"[..]), Some(&b"third"[..])]
        );
        assert_eq!(items[1].is_associated(), Some(&false));
        assert_eq!(
            items[1].item_id().and_then(ItemId::change_key).map(String::as_str),
            Some("CQAAABYA")
        );

        let written = envelope
            .to_xml_string(&WriterConfig::default())
            .expect("Failed to write UploadItems envelope");
        let reread = SoapEnvelope::<UploadItems>::from_xml_str(&written, &ReaderConfig::default())
            .expect("Failed to re-read UploadItems envelope");
        assert_eq!(reread, envelope);
        assert!(logs_contain("serializing SOAP envelope"));
    }

    #[test]
    fn test_three_array_entries_keep_insertion_order() {
        let request = UploadItems::builder()
            .items(
                [
                    upload_item(CreateAction::CreateNew, b"one"),
                    upload_item(CreateAction::Update, b"two"),
                    upload_item(CreateAction::UpdateOrCreate, b"three"),
                ]
                .into_iter()
                .collect::<NonEmptyArrayOfUploadItems>(),
            )
            .build();

        let xml = request.to_xml_string(&compact()).expect("Failed to write UploadItems");
        let actions: Vec<_> = xml
            .match_indices("CreateAction=\"")
            .map(|(index, pattern)| {
                let rest = &xml[index + pattern.len()..];
                &rest[..rest.find('"').unwrap_or(rest.len())]
            })
            .collect();
        assert_eq!(actions, ["CreateNew", "Update", "UpdateOrCreate"]);
        assert_eq!(xml.matches("<t:Item ").count(), 3);

        let read = UploadItems::from_xml_str(&xml, &ReaderConfig::default())
            .expect("Failed to read UploadItems");
        assert_eq!(read, request);
    }

    #[test]
    fn test_unset_optional_field_gives_empty_wrapper() {
        let xml = GetPasswordExpirationDate::default()
            .to_xml_string(&compact())
            .expect("Failed to write GetPasswordExpirationDate");

        assert_eq!(
            xml,
            concat!(
                r#"<m:GetPasswordExpirationDate"#,
                r#" xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages""#,
                r#" xmlns:t="http://schemas.microsoft.com/exchange/services/2006/types"/>"#
            )
        );
        assert_eq!(
            GetPasswordExpirationDate::from_xml_str(&xml, &ReaderConfig::default()).unwrap(),
            GetPasswordExpirationDate::default()
        );
    }

    #[test]
    fn test_output_order_ignores_mutator_order() {
        let mut first = UploadItem::default();
        first
            .set_create_action(CreateAction::Update)
            .set_parent_folder_id(FolderId::new("F"))
            .set_item_id(ItemId::new("I"))
            .set_data(Base64Binary::from(&b"x"[..]));

        let mut second = UploadItem::default();
        second
            .set_data(Base64Binary::from(&b"x"[..]))
            .set_item_id(ItemId::new("I"))
            .set_parent_folder_id(FolderId::new("F"))
            .set_create_action(CreateAction::Update);

        let write = |item: UploadItem| {
            UploadItems::builder()
                .items([item].into_iter().collect::<NonEmptyArrayOfUploadItems>())
                .build()
                .to_xml_string(&compact())
                .expect("Failed to write UploadItems")
        };
        let xml = write(first);
        assert_eq!(xml, write(second));
        assert!(xml.contains(concat!(
            r#"<t:Item CreateAction="Update"><t:ParentFolderId Id="F"/>"#,
            r#"<t:ItemId Id="I"/><t:Data>eA==</t:Data></t:Item>"#
        )));
    }

    #[test]
    fn test_get_delegate_fixture_round_trips_without_header() {
        let xml = fs::read_to_string("tests/resources/get_delegate_response.xml")
            .expect("Failed to read get_delegate_response.xml");
        let envelope =
            SoapEnvelope::<GetDelegateResponse>::from_xml_str(&xml, &ReaderConfig::default())
                .expect("Failed to read GetDelegateResponse envelope");

        let body_only = SoapEnvelope::new(envelope.body.clone());
        let written = body_only.to_xml_string(&compact()).expect("Failed to write envelope");
        assert!(!written.contains("soap:Header"));

        let reread =
            SoapEnvelope::<GetDelegateResponse>::from_xml_str(&written, &ReaderConfig::default())
                .expect("Failed to re-read envelope");
        assert_eq!(reread.body, envelope.body);
    }

    #[test]
    fn test_line_breaks_in_element_text_survive() {
        let request = PlayOnPhone::builder()
            .item_id(ItemId::new("AAMk"))
            .dial_string("555\r\n0100\r")
            .build();

        let xml = request.to_xml_string(&compact()).expect("Failed to write PlayOnPhone");
        assert!(xml.contains("<m:DialString>555&#xD;\n0100&#xD;</m:DialString>"));

        let read = PlayOnPhone::from_xml_str(&xml, &ReaderConfig::default())
            .expect("Failed to read PlayOnPhone");
        assert_eq!(read, request);
    }

    #[test]
    fn test_whitespace_and_markup_in_attribute_values_survive() {
        let request = DisconnectPhoneCall::from(
            PhoneCallId::builder().id("a\tb\nc\r\nd \"<&>'").build(),
        );

        let xml = request
            .to_xml_string(&compact())
            .expect("Failed to write DisconnectPhoneCall");
        assert!(!xml.contains('\t'));
        assert!(!xml.contains('\n'));

        let read = DisconnectPhoneCall::from_xml_str(&xml, &ReaderConfig::default())
            .expect("Failed to read DisconnectPhoneCall");
        assert_eq!(read, request);
    }

    #[test]
    fn test_response_code_holding_a_known_token_survives() {
        let message = ResponseMessage::builder()
            .response_class(ResponseClass::Success)
            .response_code(ResponseCode::Other("NoError".to_owned()))
            .message_text("line one\r\nline two")
            .build();
        let response = DisconnectPhoneCallResponse::builder().base(message).build();

        let xml = response.to_xml_string(&compact()).expect("Failed to write response");
        let read = DisconnectPhoneCallResponse::from_xml_str(&xml, &ReaderConfig::default())
            .expect("Failed to read response");
        assert_eq!(read, response);
    }
}
