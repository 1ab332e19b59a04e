//! Room lists and rooms.
use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::messages::{BaseRequest, ResponseMessage};
use crate::types::{ArrayOfEmailAddresses, ArrayOfRooms, EmailAddress};

/// Lists the room lists of the organization.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "GetRoomListsType", namespace = "messages", root = "GetRoomLists")]
pub struct GetRoomLists {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetRoomListsResponseMessageType",
    namespace = "messages",
    root = "GetRoomListsResponse"
)]
pub struct GetRoomListsResponse {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    room_lists: Option<ArrayOfEmailAddresses>,
}

/// Lists the rooms of one room list.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/getrooms>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "GetRoomsType", namespace = "messages", root = "GetRooms")]
pub struct GetRooms {
    #[ews(base)]
    #[builder(default)]
    base: BaseRequest,
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    room_list: Option<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(
    type_name = "GetRoomsResponseMessageType",
    namespace = "messages",
    root = "GetRoomsResponse"
)]
pub struct GetRoomsResponse {
    #[ews(base)]
    #[builder(default)]
    base: ResponseMessage,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    rooms: Option<ArrayOfRooms>,
}
