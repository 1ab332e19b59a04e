use core::fmt;

/// Represents a namespace in XML, identified by its URI only.
///
/// The prefix a namespace is written with is decided by the nearest
/// declaration in scope, see [`crate::builder::Element::add_namespace_declaration`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace<'a> {
    pub url: &'a str,
}

impl<'a> Namespace<'a> {
    /// Creates a new instance of `Namespace` with the given URI.
    ///
    /// # Example
    ///
    /// ```
    /// use ews_xml::builder::Namespace;
    /// let namespace = Namespace::new("http://example.com");
    /// ```
    pub fn new(url: &'a str) -> Self {
        Namespace { url }
    }
}

impl<'a> From<&'a str> for Namespace<'a> {
    fn from(url: &'a str) -> Self {
        Namespace::new(url)
    }
}

impl fmt::Display for Namespace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}
