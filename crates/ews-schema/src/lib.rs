//! Data-binding types for elements of the Exchange Web Services 2006 schema.
//!
//! Each binding is a plain value holder. Its XML shape is described by a
//! static [`cores::TypeMapping`] emitted by `#[derive(ComplexType)]`, and the
//! generic code in [`cores::ser`] and [`cores::de`] walks that table to write
//! and read the wire format.
extern crate self as ews_schema;

pub mod config;
pub mod cores;
pub mod error;
pub mod macros;
pub mod messages;
pub mod soap;
pub mod types;

pub use ews_xml as xml;

pub use config::{ReaderConfig, WriterConfig};
pub use cores::ComplexType;
pub use error::{EwsError, SchemaValidationError, ValueError};
