//! Bulk transfer: uploading and exporting items as opaque payloads.
use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::cores::Base64Binary;
use crate::messages::{BaseRequest, ResponseMessage};
use crate::types::{ItemId, NonEmptyArrayOfItemIds, NonEmptyArrayOfUploadItems};

/// Uploads items exported by `ExportItems` into a mailbox.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/uploaditems>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "UploadItemsType", namespace = "messages", root = "UploadItems")]
pub struct UploadItems {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    items: Option<NonEmptyArrayOfUploadItems>,
}

/// One `m:UploadItemsResponseMessage` per uploaded item, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "UploadItemsResponseType", namespace = "messages", root = "UploadItemsResponse")]
pub struct UploadItemsResponse {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    response_messages: Option<ArrayOfUploadItemsResponseMessages>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ArrayOfResponseMessagesType", namespace = "messages")]
pub struct ArrayOfUploadItemsResponseMessages {
    #[ews(repeated, min = 1, rename = "UploadItemsResponseMessage")]
    #[builder(default)]
    messages: Vec<UploadItemsResponseMessage>,
}

impl FromIterator<UploadItemsResponseMessage> for ArrayOfUploadItemsResponseMessages {
    fn from_iter<I: IntoIterator<Item = UploadItemsResponseMessage>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// The result for one uploaded item.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "UploadItemsResponseMessageType", namespace = "messages")]
pub struct UploadItemsResponseMessage {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    item_id: Option<ItemId>,
}

/// Exports items as opaque data streams.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/exportitems>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ExportItemsType", namespace = "messages", root = "ExportItems")]
pub struct ExportItems {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    item_ids: Option<NonEmptyArrayOfItemIds>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ExportItemsResponseType", namespace = "messages", root = "ExportItemsResponse")]
pub struct ExportItemsResponse {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    response_messages: Option<ArrayOfExportItemsResponseMessages>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ArrayOfResponseMessagesType", namespace = "messages")]
pub struct ArrayOfExportItemsResponseMessages {
    #[ews(repeated, min = 1, rename = "ExportItemsResponseMessage")]
    #[builder(default)]
    messages: Vec<ExportItemsResponseMessage>,
}

impl FromIterator<ExportItemsResponseMessage> for ArrayOfExportItemsResponseMessages {
    fn from_iter<I: IntoIterator<Item = ExportItemsResponseMessage>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// The exported data of one item.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ExportItemsResponseMessageType", namespace = "messages")]
pub struct ExportItemsResponseMessage {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    item_id: Option<ItemId>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    data: Option<Base64Binary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReaderConfig, WriterConfig};
    use crate::cores::ComplexType;
    use crate::error::SchemaValidationError;

    #[test]
    fn export_items_requires_at_least_one_id() {
        let request = ExportItems::builder()
            .item_ids(NonEmptyArrayOfItemIds::default())
            .build();

        let error = request.to_xml_string(&WriterConfig::default()).unwrap_err();
        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::TooFewOccurrences {
                type_name: "NonEmptyArrayOfItemIdsType",
                element: "ItemId",
                min: 1,
                found: 0,
            })
        );
    }

    #[test]
    fn export_response_carries_binary_payload() {
        let response = ExportItemsResponse::builder()
            .response_messages(
                [ExportItemsResponseMessage::builder()
                    .base(ResponseMessage::success())
                    .item_id(ItemId::new("AAMk"))
                    .data(Base64Binary::new(b"\x00\x01binary".to_vec()))
                    .build()]
                .into_iter()
                .collect::<ArrayOfExportItemsResponseMessages>(),
            )
            .build();

        let xml = response.to_xml_string(&WriterConfig::default()).unwrap();
        assert!(xml.contains(concat!(
            "<m:ResponseMessages><m:ExportItemsResponseMessage ResponseClass=\"Success\">",
            "<m:ResponseCode>NoError</m:ResponseCode>"
        )));
        assert!(xml.contains("<m:Data>AAFiaW5hcnk=</m:Data>"));

        let read = ExportItemsResponse::from_xml_str(&xml, &ReaderConfig::default()).unwrap();
        assert_eq!(read, response);
        let data = read
            .response_messages()
            .and_then(|array| array.messages().first())
            .and_then(ExportItemsResponseMessage::data);
        assert_eq!(data.map(Base64Binary::as_bytes), Some(&b"\x00\x01binary"[..]));
    }

    #[test]
    fn upload_response_needs_at_least_one_message() {
        let xml = concat!(
            r#"<m:UploadItemsResponse xmlns:m="http://schemas.microsoft.com/exchange/services/2006/messages">"#,
            "<m:ResponseMessages/>",
            "</m:UploadItemsResponse>"
        );
        let error = UploadItemsResponse::from_xml_str(xml, &ReaderConfig::default()).unwrap_err();

        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::MissingRequiredElement {
                type_name: "ArrayOfResponseMessagesType",
                element: "UploadItemsResponseMessage",
            })
        );
    }

    #[test]
    fn response_message_is_not_a_global_element() {
        let error = UploadItemsResponseMessage::default()
            .to_xml_string(&WriterConfig::default())
            .unwrap_err();

        assert_eq!(
            error.as_validation(),
            Some(&SchemaValidationError::NotAGlobalElement {
                type_name: "UploadItemsResponseMessageType",
            })
        );
    }
}
