use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

/// The identifier and change key of an item in a mailbox.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/itemid>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ItemIdType", namespace = "types")]
pub struct ItemId {
    #[ews(attribute, required)]
    #[builder(default, setter(into, strip_option))]
    id: Option<String>,
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    change_key: Option<String>,
}

/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/folderid>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "FolderIdType", namespace = "types")]
pub struct FolderId {
    #[ews(attribute, required)]
    #[builder(default, setter(into, strip_option))]
    id: Option<String>,
    #[ews(attribute, optional)]
    #[builder(default, setter(into, strip_option))]
    change_key: Option<String>,
}

/// Identifies a phone call placed by the Unified Messaging server.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "PhoneCallIdType", namespace = "types")]
pub struct PhoneCallId {
    #[ews(attribute, required)]
    #[builder(default, setter(into, strip_option))]
    id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "NonEmptyArrayOfItemIdsType", namespace = "types")]
pub struct NonEmptyArrayOfItemIds {
    #[ews(repeated, min = 1, rename = "ItemId")]
    #[builder(default)]
    item_ids: Vec<ItemId>,
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            change_key: None,
        }
    }
}

impl FolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            change_key: None,
        }
    }
}

impl PhoneCallId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

impl FromIterator<ItemId> for NonEmptyArrayOfItemIds {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        Self {
            item_ids: iter.into_iter().collect(),
        }
    }
}
