//! A small, allocation-light XML writer.
//!
//! Elements are assembled by value and written in one pass. Namespace
//! prefixes are resolved at write time from the `xmlns` declarations in
//! scope, so an element only needs to know its namespace URI.
mod attribute;
mod document;
mod declaration;
mod element;
mod escape;
mod namespace;

use std::collections::HashMap;

pub use self::attribute::*;
pub use self::document::*;
pub use self::declaration::*;
pub use self::element::*;
pub use self::namespace::*;

/// Namespace URI to the prefix it is bound to, `None` for the default namespace.
pub type AliasMap<'a> = HashMap<Namespace<'a>, Option<&'a str>>;

#[derive(Debug, thiserror::Error)]
pub enum XmlBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("Namespace '{ns}' not declared for tag '{tag}'")]
    NamespaceNotDeclared { tag: String, ns: String },
}

pub trait NamespaceWrite<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError>;
}
