use std::borrow::Cow;

use crate::builder::escape::escape_text;
use crate::builder::{AliasMap, Attribute, Namespace, NamespaceWrite, XmlBuilderError};

#[derive(Debug, Clone)]
pub enum Content<'a> {
    /// Represents a text content within an XML element.
    Text(Cow<'a, str>),
    /// Represents a child element within an XML element.
    Elements(Vec<Element<'a>>),
    None,
}

/// Represents an XML element.
#[derive(Debug, Clone)]
pub struct Element<'a> {
    /// The name of the element.
    name: &'a str,
    /// The namespace the element belongs to.
    namespace: Option<Namespace<'a>>,
    /// The `xmlns` declarations written on this element, in insertion order.
    namespaces_declaration: Vec<(Namespace<'a>, Option<&'a str>)>,
    /// The attributes of the element.
    attributes: Vec<Attribute<'a>>,
    /// The child elements of the element.
    content: Content<'a>,
}

impl<'a> Element<'a> {
    /// Creates a new instance of `Element` with the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the element.
    ///
    /// # Example
    ///
    /// ```
    /// use ews_xml::builder::Element;
    /// let element = Element::new("root");
    /// ```
    pub fn new(name: &'a str) -> Self {
        Element {
            name,
            namespace: None,
            namespaces_declaration: Vec::new(),
            attributes: Vec::new(),
            content: Content::None,
        }
    }

    /// Puts the element in a namespace and returns a modified `Element`.
    ///
    /// The namespace must be declared on this element or one of its
    /// ancestors by the time the document is written.
    ///
    /// # Example
    ///
    /// ```
    /// use ews_xml::builder::{Element, Namespace};
    /// let element = Element::new("root")
    ///     .set_namespace(Namespace::new("http://example.com"))
    ///     .add_namespace_declaration("http://example.com", Some("ex"));
    /// ```
    pub fn set_namespace(mut self, namespace: impl Into<Namespace<'a>>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Declares `url` on this element, bound to `alias` or, when `alias` is
    /// `None`, as the default namespace.
    pub fn add_namespace_declaration(mut self, url: &'a str, alias: Option<&'a str>) -> Self {
        let namespace = Namespace::new(url);
        if let Some(existing) = self
            .namespaces_declaration
            .iter_mut()
            .find(|(ns, _)| *ns == namespace)
        {
            existing.1 = alias;
        } else {
            self.namespaces_declaration.push((namespace, alias));
        }
        self
    }

    /// Adds an attribute to the element and returns a modified `Element`.
    ///
    /// # Example
    ///
    /// ```
    /// use ews_xml::builder::{Element, Attribute};
    /// let element = Element::new("root")
    ///     .add_attribute(Attribute::new("attr1", "value1"));
    /// ```
    pub fn add_attribute(mut self, attribute: Attribute<'a>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds a child element to the element and returns a modified `Element`.
    ///
    /// Any text content previously set is replaced.
    pub fn add_child(mut self, child: Element<'a>) -> Self {
        match self.content {
            Content::None | Content::Text(_) => {
                self.content = Content::Elements(vec![child]);
            }
            Content::Elements(ref mut children) => {
                children.push(child);
            }
        }
        self
    }

    pub fn add_children(mut self, children: impl IntoIterator<Item = Element<'a>>) -> Self {
        for child in children {
            self = self.add_child(child);
        }
        self
    }

    /// Sets the text content of the element and returns a modified `Element`.
    ///
    /// The text is escaped when written, and replaces any child elements.
    ///
    /// # Example
    ///
    /// ```
    /// use ews_xml::builder::Element;
    /// let element = Element::new("root")
    ///     .set_text("This is some text content.");
    /// ```
    pub fn set_text(mut self, text: impl Into<Cow<'a, str>>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn namespace(&self) -> Option<&Namespace<'a>> {
        self.namespace.as_ref()
    }

    pub fn attributes(&self) -> &[Attribute<'a>] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute<'a>> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }

    pub fn children(&self) -> &[Element<'a>] {
        match &self.content {
            Content::Elements(children) => children,
            Content::Text(_) | Content::None => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text.as_ref()),
            Content::Elements(_) | Content::None => None,
        }
    }

    pub fn content(&self) -> &Content<'a> {
        &self.content
    }

    fn qualified_name(&self, aliases: &AliasMap<'a>) -> Result<Cow<'a, str>, XmlBuilderError> {
        let Some(namespace) = &self.namespace else {
            return Ok(Cow::Borrowed(self.name));
        };

        match aliases.get(namespace) {
            Some(Some(alias)) => Ok(Cow::Owned(format!("{alias}:{}", self.name))),
            Some(None) => Ok(Cow::Borrowed(self.name)),
            None => Err(XmlBuilderError::NamespaceNotDeclared {
                tag: self.name.to_string(),
                ns: namespace.url.to_string(),
            }),
        }
    }
}

impl<'a> NamespaceWrite<'a> for Element<'a> {
    fn ns_write<W: std::io::Write>(
        &self,
        w: &mut W,
        aliases: Option<&AliasMap<'a>>,
    ) -> Result<(), XmlBuilderError> {
        // Declarations on this element shadow the ones inherited from the parent.
        let scoped;
        let aliases = if self.namespaces_declaration.is_empty() {
            aliases
        } else {
            let mut map = aliases.cloned().unwrap_or_default();
            for (namespace, alias) in &self.namespaces_declaration {
                map.insert(namespace.clone(), *alias);
            }
            scoped = map;
            Some(&scoped)
        };

        let empty = AliasMap::new();
        let name = self.qualified_name(aliases.unwrap_or(&empty))?;

        write!(w, "<{name}")?;

        for (namespace, alias) in &self.namespaces_declaration {
            match alias {
                Some(alias) => write!(w, " xmlns:{alias}=\"{}\"", namespace.url)?,
                None => write!(w, " xmlns=\"{}\"", namespace.url)?,
            }
        }

        for attribute in &self.attributes {
            attribute.ns_write(w, aliases)?;
        }

        match &self.content {
            Content::None => w.write_all(b"/>")?,
            Content::Elements(children) if children.is_empty() => w.write_all(b"/>")?,
            Content::Text(text) => {
                write!(w, ">{}</{name}>", escape_text(text.as_ref()))?;
            }
            Content::Elements(children) => {
                w.write_all(b">")?;
                for child in children {
                    child.ns_write(w, aliases)?;
                }
                write!(w, "</{name}>")?;
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = Vec::new();
        self.ns_write(&mut buf, None).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
