use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::simple_enum;
use crate::types::ItemId;

simple_enum! {
    /// The kind of mailbox an e-mail address resolves to.
    pub enum MailboxType: "t:MailboxTypeType" {
        Unknown => "Unknown",
        OneOff => "OneOff",
        Mailbox => "Mailbox",
        PublicDl => "PublicDL",
        PrivateDl => "PrivateDL",
        Contact => "Contact",
        PublicFolder => "PublicFolder",
        GroupMailbox => "GroupMailbox",
        ImplicitContact => "ImplicitContact",
        User => "User",
    }
}

/// A mailbox user or address.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/emailaddresstype>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "EmailAddressType", namespace = "types")]
pub struct EmailAddress {
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    name: Option<String>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    email_address: Option<String>,
    /// Usually `SMTP`.
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    routing_type: Option<String>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    mailbox_type: Option<MailboxType>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    item_id: Option<ItemId>,
}

impl EmailAddress {
    /// An SMTP address without display name.
    pub fn smtp(address: impl Into<String>) -> Self {
        Self {
            email_address: Some(address.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ArrayOfEmailAddressesType", namespace = "types")]
pub struct ArrayOfEmailAddresses {
    #[ews(repeated, rename = "Address")]
    #[builder(default)]
    addresses: Vec<EmailAddress>,
}

/// A room, as listed by `GetRooms`.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "RoomType", namespace = "types")]
pub struct Room {
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    id: Option<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ArrayOfRoomsType", namespace = "types")]
pub struct ArrayOfRooms {
    #[ews(repeated, rename = "Room")]
    #[builder(default)]
    rooms: Vec<Room>,
}
