use std::borrow::Cow;

use crate::builder::escape::escape_attribute;
use crate::builder::{AliasMap, NamespaceWrite, XmlBuilderError};

/// An unqualified XML attribute with a name and value.
#[derive(Debug, Clone)]
pub struct Attribute<'a> {
    /// The local name of the attribute.
    name: &'a str,
    /// The unescaped value of the attribute.
    value: Cow<'a, str>,
}

impl<'a> Attribute<'a> {
    /// Creates a new instance of `Attribute`.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the attribute.
    /// * `value` - The value of the attribute, escaped when written.
    ///
    /// # Example
    ///
    /// ```
    /// use ews_xml::builder::Attribute;
    /// let attribute = Attribute::new("name", "value");
    /// ```
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Attribute {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn value(&self) -> &str {
        self.value.as_ref()
    }
}

impl<'a> NamespaceWrite<'a> for Attribute<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        _aliases: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError> {
        write!(w, " {}=\"{}\"", self.name, escape_attribute(self.value.as_ref()))?;
        Ok(())
    }
}
