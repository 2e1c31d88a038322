//! Declarative page descriptions
//!
//! A page description is a TOML document listing everything a [`Page`]
//! can be configured with:
//!
//! ```toml
//! title = "Hello"
//! meta_content_type = true
//! body = ["<h1>Hello</h1>", ["<p>nested</p>", "<p>content</p>"]]
//!
//! [options]
//! doctype = "XHTML 1.0 Strict"
//!
//! [meta]
//! author = "Me"
//!
//! [[stylesheets]]
//! href = "site.css"
//! media = "screen"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::element::{Attributes, ContentNode};
use crate::error::ConfigError;
use crate::page::{LinkRelation, MetaKind, Page, PageOptions};

/// A linked stylesheet entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleSheetLink {
    pub href: String,
    #[serde(rename = "type")]
    pub mime: Option<String>,
    pub media: Option<String>,
}

/// A linked script entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptLink {
    pub src: String,
    #[serde(rename = "type")]
    pub mime: Option<String>,
}

/// A head `<link>` entry with either `rel` or `rev`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeadLink {
    pub href: String,
    pub rel: Option<String>,
    pub rev: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

/// Favicon entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Favicon {
    pub href: String,
    #[serde(rename = "type")]
    pub mime: Option<String>,
    pub rel: Option<String>,
}

/// Body content: a line of markup or a nested group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum BodyItem {
    Text(String),
    Group(Vec<BodyItem>),
}

impl From<BodyItem> for ContentNode {
    fn from(item: BodyItem) -> Self {
        match item {
            BodyItem::Text(text) => ContentNode::Text(text),
            BodyItem::Group(items) => {
                ContentNode::Sequence(items.into_iter().map(ContentNode::from).collect())
            }
        }
    }
}

/// Everything needed to build a [`Page`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageDescription {
    pub options: PageOptions,
    pub title: Option<String>,
    pub xml_prolog: Option<bool>,
    /// Add an http-equiv `Content-Type` tag from mime and charset
    pub meta_content_type: bool,
    pub meta: IndexMap<String, String>,
    pub http_equiv: IndexMap<String, String>,
    pub favicon: Option<Favicon>,
    pub links: Vec<HeadLink>,
    pub stylesheets: Vec<StyleSheetLink>,
    /// Inline styles, type -> content
    pub style: IndexMap<String, String>,
    pub scripts: Vec<ScriptLink>,
    /// Inline scripts, type -> content
    pub script: IndexMap<String, String>,
    pub body_attributes: Attributes,
    pub body: Vec<BodyItem>,
}

impl PageDescription {
    /// Load a description from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a description from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the page this description declares
    pub fn into_page(self) -> Page {
        let mut page = Page::with_options(&self.options);

        if let Some(title) = &self.title {
            page.set_title(title);
        }
        match self.xml_prolog {
            Some(true) => page.enable_xml_prolog(),
            Some(false) => page.disable_xml_prolog(),
            None => {}
        }
        if self.meta_content_type {
            page.set_meta_content_type();
        }
        for (name, content) in &self.http_equiv {
            page.set_meta_data(name, content, MetaKind::HttpEquiv);
        }
        for (name, content) in &self.meta {
            page.set_meta_data(name, content, MetaKind::Standard);
        }

        if let Some(favicon) = &self.favicon {
            page.add_favicon(&favicon.href, favicon.mime.as_deref(), favicon.rel.as_deref());
        }
        for link in &self.links {
            match (&link.rel, &link.rev) {
                (Some(rel), _) => {
                    page.add_head_link(&link.href, rel, LinkRelation::Rel, &link.attributes)
                }
                (None, Some(rev)) => {
                    page.add_head_link(&link.href, rev, LinkRelation::Rev, &link.attributes)
                }
                (None, None) => {
                    tracing::warn!(href = %link.href, "Skipping head link without rel or rev");
                }
            }
        }

        for sheet in &self.stylesheets {
            page.add_style_sheet(&sheet.href, sheet.mime.as_deref(), sheet.media.as_deref());
        }
        for (mime, content) in self.style {
            page.add_style_declaration(content, Some(mime.as_str()));
        }
        for script in &self.scripts {
            page.add_script(&script.src, script.mime.as_deref());
        }
        for (mime, content) in self.script {
            page.add_script_declaration(content, Some(mime.as_str()));
        }

        if !self.body_attributes.is_empty() {
            page.set_body_attributes(self.body_attributes);
        }
        for item in self.body {
            page.add_body_content(item);
        }

        tracing::debug!(doctype = %page.doctype(), "Page description loaded");
        page
    }
}
