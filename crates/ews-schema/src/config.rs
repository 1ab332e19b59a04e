use ews_xml::builder::Declaration;
use typed_builder::TypedBuilder;

/// Options for rendering a document.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct WriterConfig {
    /// Prepend `<?xml version="1.0" encoding="utf-8"?>`.
    #[builder(default = true)]
    pub include_declaration: bool,
    /// The `standalone` pseudo-attribute of the declaration, omitted when `None`.
    #[builder(default, setter(strip_option))]
    pub standalone: Option<bool>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            include_declaration: true,
            standalone: None,
        }
    }
}

impl WriterConfig {
    pub(crate) fn declaration(&self) -> Option<Declaration<'static>> {
        self.include_declaration
            .then(|| Declaration::new("1.0", "utf-8").with_standalone_optional(self.standalone))
    }
}

/// Options for reading a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
pub struct ReaderConfig {
    /// Skip elements the schema does not define instead of failing with
    /// `UnexpectedElement`. Each skipped element is logged at `warn`.
    #[builder(default)]
    pub skip_unknown_elements: bool,
}
