use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::cores::SimpleType;
use crate::error::ValueError;
use crate::simple_enum;

simple_enum! {
    /// Outcome of one response message.
    pub enum ResponseClass: "t:ResponseClassType" {
        Success => "Success",
        Warning => "Warning",
        Error => "Error",
    }
}

/// `m:ResponseCodeType`, the error code of a response message or fault.
///
/// The enumeration has several hundred members and grows with every server
/// release, so only the codes callers usually branch on get a variant. Any
/// other token is kept verbatim in [`ResponseCode::Other`].
///
/// `Other` only ever holds unknown codes when built through
/// [`ResponseCode::from_token`] or parsing. Codes compare by token, so
/// `Other("NoError")` equals `NoError`.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/responsecode>
#[derive(Debug, Clone)]
pub enum ResponseCode {
    NoError,
    ErrorAccessDenied,
    ErrorDelegateAlreadyExists,
    ErrorDelegateMissingConfiguration,
    ErrorDelegateNoUser,
    ErrorInternalServerError,
    ErrorInvalidRequest,
    ErrorInvalidSchemaVersionForMailboxVersion,
    ErrorInvalidServerVersion,
    ErrorItemNotFound,
    ErrorMailboxConfiguration,
    ErrorNameResolutionNoResults,
    ErrorNonExistentMailbox,
    ErrorNotDelegate,
    ErrorSchemaValidation,
    ErrorServerBusy,
    Other(String),
}

impl ResponseCode {
    const KNOWN: [(&'static str, Self); 16] = [
        ("NoError", Self::NoError),
        ("ErrorAccessDenied", Self::ErrorAccessDenied),
        ("ErrorDelegateAlreadyExists", Self::ErrorDelegateAlreadyExists),
        (
            "ErrorDelegateMissingConfiguration",
            Self::ErrorDelegateMissingConfiguration,
        ),
        ("ErrorDelegateNoUser", Self::ErrorDelegateNoUser),
        ("ErrorInternalServerError", Self::ErrorInternalServerError),
        ("ErrorInvalidRequest", Self::ErrorInvalidRequest),
        (
            "ErrorInvalidSchemaVersionForMailboxVersion",
            Self::ErrorInvalidSchemaVersionForMailboxVersion,
        ),
        ("ErrorInvalidServerVersion", Self::ErrorInvalidServerVersion),
        ("ErrorItemNotFound", Self::ErrorItemNotFound),
        ("ErrorMailboxConfiguration", Self::ErrorMailboxConfiguration),
        ("ErrorNameResolutionNoResults", Self::ErrorNameResolutionNoResults),
        ("ErrorNonExistentMailbox", Self::ErrorNonExistentMailbox),
        ("ErrorNotDelegate", Self::ErrorNotDelegate),
        ("ErrorSchemaValidation", Self::ErrorSchemaValidation),
        ("ErrorServerBusy", Self::ErrorServerBusy),
    ];

    /// Maps `token` to its variant, falling back to [`ResponseCode::Other`].
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self::KNOWN
            .iter()
            .find(|(known, _)| *known == token)
            .map_or(Self::Other(token), |(_, code)| code.clone())
    }

    pub fn as_str(&self) -> &str {
        if let Self::Other(token) = self {
            return token;
        }
        Self::KNOWN
            .iter()
            .find_map(|(token, code)| (code == self).then_some(*token))
            .unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        *self == Self::NoError
    }
}

impl PartialEq for ResponseCode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ResponseCode {}

impl Hash for ResponseCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseCode {
    type Err = ValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let token = text.trim();
        if token.is_empty() {
            return Err(ValueError::new("m:ResponseCodeType", text));
        }

        Ok(Self::from_token(token))
    }
}

impl SimpleType for ResponseCode {
    fn to_xml_text(&self) -> Result<Cow<'_, str>, ValueError> {
        let token = self.as_str();
        if token.trim().is_empty() {
            return Err(ValueError::new("m:ResponseCodeType", token));
        }
        Ok(Cow::Borrowed(token))
    }

    fn from_xml_text(text: &str) -> Result<Self, ValueError> {
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_round_trip_through_text() {
        for (token, code) in &ResponseCode::KNOWN {
            assert_eq!(code.as_str(), *token);
            assert_eq!(token.parse::<ResponseCode>().unwrap(), *code);
        }
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let code: ResponseCode = " ErrorCalendarIsCancelledForAccept ".parse().unwrap();
        assert_eq!(
            code,
            ResponseCode::Other("ErrorCalendarIsCancelledForAccept".to_owned())
        );
        assert_eq!(code.to_string(), "ErrorCalendarIsCancelledForAccept");
        assert!(!code.is_success());
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!("  ".parse::<ResponseCode>().is_err());
        assert_eq!(
            ResponseCode::Other(String::new()).to_xml_text(),
            Err(ValueError::new("m:ResponseCodeType", ""))
        );
    }

    #[test]
    fn known_token_maps_to_its_variant() {
        assert_eq!(
            ResponseCode::from_token("ErrorItemNotFound"),
            ResponseCode::ErrorItemNotFound
        );
        assert!(matches!(
            ResponseCode::from_token("NoError"),
            ResponseCode::NoError
        ));
        assert!(matches!(
            ResponseCode::from_token("ErrorQuotaExceeded"),
            ResponseCode::Other(ref token) if token == "ErrorQuotaExceeded"
        ));
    }

    #[test]
    fn other_holding_a_known_token_survives_text_round_trip() {
        let code = ResponseCode::Other("NoError".to_owned());
        let text = code.to_xml_text().unwrap().into_owned();
        let back = ResponseCode::from_xml_text(&text).unwrap();

        assert_eq!(back, code);
        assert!(code.is_success());
    }

    #[test]
    fn response_class_rejects_unknown_tokens() {
        assert_eq!("Warning".parse::<ResponseClass>().unwrap(), ResponseClass::Warning);
        assert_eq!(
            "Fatal".parse::<ResponseClass>(),
            Err(ValueError::new("t:ResponseClassType", "Fatal"))
        );
    }
}
