pub mod de;
pub mod mapping;
pub mod namespace;
pub mod ser;
pub mod value;

pub use mapping::*;
pub use namespace::*;
pub use value::*;

use ews_xml::builder::Element;

use crate::config::{ReaderConfig, WriterConfig};
use crate::error::EwsError;
use de::ElementReader;
use ser::ElementWriter;

/// A type bound to an XSD complex type through a static [`TypeMapping`].
///
/// Implemented by `#[derive(ComplexType)]`. The generated methods only
/// forward each field to the [`ElementWriter`] or [`ElementReader`] together
/// with its mapping entry, so every rule about names, order and cardinality
/// lives in [`ser`] and [`de`].
pub trait ComplexType: Sized {
    fn mapping() -> &'static TypeMapping;

    fn write_attributes<'a>(&'a self, writer: &mut ElementWriter<'a>) -> Result<(), EwsError>;

    fn write_elements<'a>(&'a self, writer: &mut ElementWriter<'a>) -> Result<(), EwsError>;

    /// Reads the attributes and elements of this type, base first.
    ///
    /// Leaves the reader positioned after the last element of the type, so a
    /// derived type can continue from there.
    fn read(reader: &mut ElementReader<'_>) -> Result<Self, EwsError>;

    /// Builds the global element of this type, declaring the `m` and `t` prefixes.
    fn to_element(&self) -> Result<Element<'_>, EwsError> {
        ser::to_element(self)
    }

    fn to_xml_string(&self, config: &WriterConfig) -> Result<String, EwsError> {
        ser::to_xml_string(self, config)
    }

    fn from_xml_str(xml: &str, config: &ReaderConfig) -> Result<Self, EwsError> {
        de::from_xml_str(xml, config)
    }
}
