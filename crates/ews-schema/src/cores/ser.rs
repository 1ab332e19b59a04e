use ews_xml::builder::{Attribute, Builder, Element};
use tracing::{debug, trace};

use crate::config::WriterConfig;
use crate::cores::{
    AttributeMapping, ComplexType, ElementMapping, Namespace, SimpleType, TypeMapping, XmlValue,
};
use crate::error::{EwsError, SchemaValidationError};

/// Collects the attributes and child elements of one complex-typed element.
pub struct ElementWriter<'a> {
    mapping: &'static TypeMapping,
    attributes: Vec<Attribute<'a>>,
    children: Vec<Element<'a>>,
}

impl<'a> ElementWriter<'a> {
    pub fn new(mapping: &'static TypeMapping) -> Self {
        Self {
            mapping,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attribute<T: SimpleType>(
        &mut self,
        entry: &'static AttributeMapping,
        value: Option<&'a T>,
    ) -> Result<(), EwsError> {
        let Some(value) = value else {
            if entry.occurs.is_required() {
                return Err(SchemaValidationError::MissingRequiredAttribute {
                    type_name: self.mapping.type_name,
                    attribute: entry.name,
                }
                .into());
            }
            return Ok(());
        };

        let text = value
            .to_xml_text()
            .map_err(|source| SchemaValidationError::InvalidValue {
                name: entry.name.to_owned(),
                source,
            })?;
        trace!(attribute = entry.name, value = %text, "writing attribute");
        self.attributes.push(Attribute::new(entry.name, text));
        Ok(())
    }

    pub fn required<T: XmlValue>(
        &mut self,
        entry: &'static ElementMapping,
        value: Option<&'a T>,
    ) -> Result<(), EwsError> {
        let value = value.ok_or(SchemaValidationError::MissingRequiredElement {
            type_name: self.mapping.type_name,
            element: entry.name,
        })?;
        self.push(entry, value)
    }

    pub fn optional<T: XmlValue>(
        &mut self,
        entry: &'static ElementMapping,
        value: Option<&'a T>,
    ) -> Result<(), EwsError> {
        match value {
            Some(value) => self.push(entry, value),
            None => Ok(()),
        }
    }

    pub fn repeated<T: XmlValue>(
        &mut self,
        entry: &'static ElementMapping,
        values: &'a [T],
    ) -> Result<(), EwsError> {
        let min = entry.occurs.min_occurs();
        if values.len() < min {
            return Err(SchemaValidationError::TooFewOccurrences {
                type_name: self.mapping.type_name,
                element: entry.name,
                min,
                found: values.len(),
            }
            .into());
        }

        values.iter().try_for_each(|value| self.push(entry, value))
    }

    fn push<T: XmlValue>(
        &mut self,
        entry: &'static ElementMapping,
        value: &'a T,
    ) -> Result<(), EwsError> {
        trace!(
            type_name = self.mapping.type_name,
            element = %entry.qualified_name(),
            "writing element"
        );
        let element = Element::new(entry.name).set_namespace(entry.namespace.uri());
        self.children.push(value.write_content(element)?);
        Ok(())
    }

    /// Moves the collected attributes and children into `element`.
    pub fn finish(self, element: Element<'a>) -> Element<'a> {
        self.attributes
            .into_iter()
            .fold(element, Element::add_attribute)
            .add_children(self.children)
    }
}

/// Writes `value` as the attributes and content of `element`.
pub fn write_complex<'a, T: ComplexType>(
    value: &'a T,
    element: Element<'a>,
) -> Result<Element<'a>, EwsError> {
    let mut writer = ElementWriter::new(T::mapping());
    value.write_attributes(&mut writer)?;
    value.write_elements(&mut writer)?;
    Ok(writer.finish(element))
}

/// Builds the global element of `value` without namespace declarations.
///
/// The prefixes must be declared by an ancestor, as the SOAP envelope does.
pub fn global_element<T: ComplexType>(value: &T) -> Result<Element<'_>, EwsError> {
    let mapping = T::mapping();
    let root = mapping
        .root
        .ok_or(SchemaValidationError::NotAGlobalElement {
            type_name: mapping.type_name,
        })?;

    write_complex(
        value,
        Element::new(root).set_namespace(mapping.namespace.uri()),
    )
}

/// Builds the global element of `value` with the `m` and `t` prefixes declared on it.
pub fn to_element<T: ComplexType>(value: &T) -> Result<Element<'_>, EwsError> {
    let element = global_element(value)?;
    Ok(Namespace::Types.declare(Namespace::Messages.declare(element)))
}

pub fn to_xml_string<T: ComplexType>(value: &T, config: &WriterConfig) -> Result<String, EwsError> {
    debug!(mapping = %T::mapping().describe(), "serializing");
    let element = to_element(value)?;
    Ok(Builder::new(config.declaration(), element).to_xml_string()?)
}
