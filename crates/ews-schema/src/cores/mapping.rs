use std::fmt::Write as _;

use crate::cores::Namespace;

/// Cardinality of an element or attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurs {
    /// `minOccurs="1" maxOccurs="1"`, or `use="required"` on an attribute.
    Required,
    /// `minOccurs="0"`, or an optional attribute.
    Optional,
    /// `maxOccurs="unbounded"`.
    Repeated { min: usize },
}

impl Occurs {
    pub fn min_occurs(&self) -> usize {
        match self {
            Self::Required => 1,
            Self::Optional => 0,
            Self::Repeated { min } => *min,
        }
    }

    pub fn is_required(&self) -> bool {
        self.min_occurs() > 0
    }

    fn range(&self) -> String {
        match self {
            Self::Required => "1".to_owned(),
            Self::Optional => "0..1".to_owned(),
            Self::Repeated { min } => format!("{min}..n"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ElementMapping {
    /// The Rust field holding the value.
    pub field: &'static str,
    /// The local name of the element.
    pub name: &'static str,
    pub namespace: Namespace,
    pub occurs: Occurs,
}

impl ElementMapping {
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace.alias(), self.name)
    }

    /// Whether this entry and `other` describe the same element name.
    pub fn same_element(&self, other: &Self) -> bool {
        self.name == other.name && self.namespace == other.namespace
    }
}

/// An unqualified attribute. Attributes are single-valued, so `occurs` is
/// either `Required` or `Optional`.
#[derive(Debug, PartialEq, Eq)]
pub struct AttributeMapping {
    pub field: &'static str,
    pub name: &'static str,
    pub occurs: Occurs,
}

/// The static description of one XSD complex type.
#[derive(Debug)]
pub struct TypeMapping {
    /// The XSD type name, `DisconnectPhoneCallType` for example.
    pub type_name: &'static str,
    /// The target namespace of the schema defining the type.
    pub namespace: Namespace,
    /// The global element of this type, if the schema declares one.
    pub root: Option<&'static str>,
    /// The mapping of the type this one extends.
    pub base: Option<fn() -> &'static TypeMapping>,
    /// The elements declared by this type, in `xs:sequence` order.
    pub elements: &'static [ElementMapping],
    pub attributes: &'static [AttributeMapping],
}

impl TypeMapping {
    pub fn base(&self) -> Option<&'static Self> {
        self.base.map(|base| base())
    }

    /// The full element sequence, inherited elements first.
    pub fn sequence(&self) -> Vec<&'static ElementMapping> {
        let mut sequence = self.base().map(Self::sequence).unwrap_or_default();
        sequence.extend(self.elements.iter());
        sequence
    }

    /// All attributes, inherited ones first.
    pub fn all_attributes(&self) -> Vec<&'static AttributeMapping> {
        let mut attributes = self.base().map(Self::all_attributes).unwrap_or_default();
        attributes.extend(self.attributes.iter());
        attributes
    }

    /// Index of the element `name` in [`Self::sequence`].
    pub fn position_of(&self, name: &str, namespace: Namespace) -> Option<usize> {
        self.sequence()
            .iter()
            .position(|entry| entry.name == name && entry.namespace == namespace)
    }

    /// Looks up an element entry by its Rust field name, base chain included.
    pub fn element_for_field(&self, field: &str) -> Option<&'static ElementMapping> {
        self.sequence().into_iter().find(|entry| entry.field == field)
    }

    pub fn qualified_root(&self) -> Option<String> {
        self.root
            .map(|root| format!("{}:{root}", self.namespace.alias()))
    }

    /// One line summary, used in log output.
    pub fn describe(&self) -> String {
        let mut out = String::from(self.type_name);

        if let Some(root) = self.qualified_root() {
            let _ = write!(out, " <{root}>");
        }
        if let Some(base) = self.base() {
            let _ = write!(out, " extends {}", base.type_name);
        }

        let elements = self
            .sequence()
            .iter()
            .map(|entry| format!("{}[{}]", entry.qualified_name(), entry.occurs.range()))
            .collect::<Vec<_>>();
        let _ = write!(out, " ({})", elements.join(", "));

        let attributes = self.all_attributes();
        if !attributes.is_empty() {
            let attributes = attributes
                .iter()
                .map(|attr| format!("@{}[{}]", attr.name, attr.occurs.range()))
                .collect::<Vec<_>>();
            let _ = write!(out, " {}", attributes.join(" "));
        }

        out
    }
}
