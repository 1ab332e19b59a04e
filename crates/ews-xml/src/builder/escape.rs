use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape};

/// Escapes element text.
///
/// `\r` is written as a character reference, otherwise end-of-line
/// normalization folds `\r\n` into `\n` on the way back in.
pub(crate) fn escape_text(raw: &str) -> Cow<'_, str> {
    let escaped = partial_escape(raw);
    if !escaped.contains('\r') {
        return escaped;
    }
    Cow::Owned(escaped.replace('\r', "&#xD;"))
}

/// Escapes a double-quoted attribute value.
///
/// Attribute-value normalization turns literal tabs and line breaks into
/// spaces, so they are written as character references.
pub(crate) fn escape_attribute(raw: &str) -> Cow<'_, str> {
    let escaped = escape(raw);
    if !escaped.contains(['\t', '\n', '\r']) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
