use ews_macros::ComplexType;
use typed_builder::TypedBuilder;

use crate::simple_enum;

simple_enum! {
    pub enum DistinguishedUser: "t:DistinguishedUserType" {
        Default => "Default",
        Anonymous => "Anonymous",
    }
}

simple_enum! {
    /// Access granted to a delegate on one of the principal's default folders.
    ///
    /// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/delegatepermissions>
    pub enum DelegateFolderPermissionLevel: "t:DelegateFolderPermissionLevelType" {
        None => "None",
        Editor => "Editor",
        Reviewer => "Reviewer",
        Author => "Author",
        Custom => "Custom",
    }
}

simple_enum! {
    /// Who receives meeting requests sent to a mailbox with delegates.
    pub enum DeliverMeetingRequests: "t:DeliverMeetingRequestsType" {
        DelegatesOnly => "DelegatesOnly",
        DelegatesAndMe => "DelegatesAndMe",
        DelegatesAndSendInformationToMe => "DelegatesAndSendInformationToMe",
        NoForward => "NoForward",
    }
}

/// Identifies a delegate user, by SID, address, display name or as one of the
/// distinguished users.
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "UserIdType", namespace = "types")]
pub struct UserId {
    #[ews(optional, rename = "SID")]
    #[builder(default, setter(into, strip_option))]
    sid: Option<String>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    primary_smtp_address: Option<String>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    display_name: Option<String>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    distinguished_user: Option<DistinguishedUser>,
}

impl UserId {
    pub fn smtp(address: impl Into<String>) -> Self {
        Self {
            primary_smtp_address: Some(address.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ArrayOfUserIdType", namespace = "types")]
pub struct ArrayOfUserId {
    #[ews(repeated, rename = "UserId")]
    #[builder(default)]
    user_ids: Vec<UserId>,
}

impl FromIterator<UserId> for ArrayOfUserId {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self {
            user_ids: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "DelegatePermissionsType", namespace = "types")]
pub struct DelegatePermissions {
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    calendar_folder_permission_level: Option<DelegateFolderPermissionLevel>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    tasks_folder_permission_level: Option<DelegateFolderPermissionLevel>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    inbox_folder_permission_level: Option<DelegateFolderPermissionLevel>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    contacts_folder_permission_level: Option<DelegateFolderPermissionLevel>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    notes_folder_permission_level: Option<DelegateFolderPermissionLevel>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    journal_folder_permission_level: Option<DelegateFolderPermissionLevel>,
}

/// A delegate and the permissions granted to it.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/delegateuser>
#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "DelegateUserType", namespace = "types")]
pub struct DelegateUser {
    #[ews(required)]
    #[builder(default, setter(into, strip_option))]
    user_id: Option<UserId>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    delegate_permissions: Option<DelegatePermissions>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    receive_copies_of_meeting_messages: Option<bool>,
    #[ews(optional)]
    #[builder(default, setter(into, strip_option))]
    view_private_items: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, TypedBuilder, ComplexType)]
#[ews(type_name = "ArrayOfDelegateUserType", namespace = "types")]
pub struct ArrayOfDelegateUser {
    #[ews(repeated, min = 1, rename = "DelegateUser")]
    #[builder(default)]
    delegate_users: Vec<DelegateUser>,
}

impl FromIterator<DelegateUser> for ArrayOfDelegateUser {
    fn from_iter<I: IntoIterator<Item = DelegateUser>>(iter: I) -> Self {
        Self {
            delegate_users: iter.into_iter().collect(),
        }
    }
}
