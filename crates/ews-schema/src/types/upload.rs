use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::cores::Base64Binary;
use crate::simple_enum;
use crate::types::{FolderId, ItemId};

simple_enum! {
    /// What `UploadItems` does with an item.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/item-uploaditemtype>
    pub enum CreateAction: "t:CreateActionType" {
        CreateNew => "CreateNew",
        Update => "Update",
        UpdateOrCreate => "UpdateOrCreate",
    }
}

/// One item of an `UploadItems` request, carrying the full item stream
/// previously produced by `ExportItems`.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "UploadItemType", namespace = "types")]
pub struct UploadItem {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    parent_folder_id: Option<FolderId>,
    /// Required by the server when `CreateAction` is `Update` or `UpdateOrCreate`.
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    item_id: Option<ItemId>,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    data: Option<Base64Binary>,
    #[ews(attribute, required)]
    #[builder(default, setter(into, strip_option))]
    create_action: Option<CreateAction>,
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    is_associated: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "NonEmptyArrayOfUploadItemsType", namespace = "types")]
pub struct NonEmptyArrayOfUploadItems {
    #[ews(repeated, min = 1, rename = "Item")]
    #[builder(default)]
    items: Vec<UploadItem>,
}

impl FromIterator<UploadItem> for NonEmptyArrayOfUploadItems {
    fn from_iter<I: IntoIterator<Item = UploadItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
