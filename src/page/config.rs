//! Construction options for a page

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Options recognized when constructing a [`Page`](super::Page)
///
/// Unset options keep the page defaults: charset `utf-8`, unix line endings,
/// a tab indent, doctype `XHTML 1.0 Transitional`, language `en`, mime
/// `text/html`, namespace resolved from the doctype, caching disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    pub charset: Option<String>,
    /// `unix`, `win` or `mac`
    pub lineend: Option<String>,
    pub tab: Option<String>,
    /// Doctype descriptor, or `none` for simple mode
    pub doctype: Option<String>,
    pub language: Option<String>,
    pub mime: Option<String>,
    pub namespace: Option<String>,
    pub cache: Option<bool>,
}

impl PageOptions {
    /// Create options with every value unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load options from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the character set
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set the line ending style (`unix`, `win` or `mac`)
    pub fn with_lineend(mut self, lineend: impl Into<String>) -> Self {
        self.lineend = Some(lineend.into());
        self
    }

    /// Set the indent unit
    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }

    /// Set the doctype descriptor
    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Self {
        self.doctype = Some(doctype.into());
        self
    }

    /// Set the document language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the document mime type
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Set the root element namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Allow or forbid caching of the emitted page
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }
}
