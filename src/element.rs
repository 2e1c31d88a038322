//! Generic markup element support and the polymorphic content model
//!
//! [`MarkupElement`] carries the attribute map and formatting state that
//! every markup-producing object shares. [`Renderable`] is the capability
//! trait for objects placed into a page, and [`ContentNode`] is the value
//! stored in the body and in inline head blocks.

use std::fmt;

use indexmap::IndexMap;

use crate::format::{FormattingContext, LineEnd};

/// Ordered attribute map (name -> value)
pub type Attributes = IndexMap<String, String>;

/// Render attributes as a leading-space-separated `name="value"` string
pub fn attr_string(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(r#" {}="{}""#, name, value))
        .collect()
}

/// Attributes plus the formatting state injected by the surrounding document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupElement {
    attributes: Attributes,
    tab_offset: usize,
    tab: String,
    line_end: LineEnd,
}

impl Default for MarkupElement {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            tab_offset: 0,
            tab: "\t".to_string(),
            line_end: LineEnd::Unix,
        }
    }
}

impl MarkupElement {
    /// Create an element without attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, builder style
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set a single attribute, keeping its position if it already exists
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), value.into());
    }

    /// Replace all attributes
    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes.clear();
        self.update_attributes(attributes);
    }

    /// Merge attributes into the existing set
    pub fn update_attributes(&mut self, attributes: Attributes) {
        for (name, value) in attributes {
            self.set_attribute(name, value);
        }
    }

    /// Remove an attribute, returning its value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(&name.to_ascii_lowercase())
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Attribute string for this element (empty when there are no attributes)
    pub fn attr_string(&self) -> String {
        attr_string(&self.attributes)
    }

    pub fn set_tab_offset(&mut self, offset: usize) {
        self.tab_offset = offset;
    }

    pub fn tab_offset(&self) -> usize {
        self.tab_offset
    }

    pub fn set_tab(&mut self, tab: impl Into<String>) {
        self.tab = tab.into();
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn set_line_end(&mut self, line_end: LineEnd) {
        self.line_end = line_end;
    }

    pub fn line_end(&self) -> LineEnd {
        self.line_end
    }

    /// Adopt indent depth, indent unit and line ending from a context
    pub fn apply_formatting(&mut self, ctx: &FormattingContext) {
        self.set_tab_offset(ctx.depth);
        self.set_tab(ctx.indent_unit.clone());
        self.set_line_end(ctx.line_end);
    }

    /// The formatting context this element currently renders with
    pub fn formatting(&self) -> FormattingContext {
        FormattingContext {
            line_end: self.line_end,
            indent_unit: self.tab.clone(),
            depth: self.tab_offset,
        }
    }
}

/// An object that can be placed into a page
///
/// Every method is optional. The normalizer first hands the surrounding
/// formatting context to [`Renderable::markup_element_mut`] when it returns
/// `Some`, then serializes with [`Renderable::to_html`], falling back to
/// [`Renderable::to_text`]. An object exposing neither contributes nothing.
pub trait Renderable {
    /// Markup form of the object
    fn to_html(&self) -> Option<String> {
        None
    }

    /// Plain string form, used when there is no markup form
    fn to_text(&self) -> Option<String> {
        None
    }

    /// Formatting state that accepts the surrounding document's context
    fn markup_element_mut(&mut self) -> Option<&mut MarkupElement> {
        None
    }
}

/// Content stored in the body or in an inline head block
pub enum ContentNode {
    Text(String),
    Renderable(Box<dyn Renderable>),
    Sequence(Vec<ContentNode>),
}

impl ContentNode {
    /// Wrap a renderable object
    pub fn renderable(object: impl Renderable + 'static) -> Self {
        ContentNode::Renderable(Box::new(object))
    }

    /// Number of text leaves, not counting renderables
    pub fn text_leaves(&self) -> usize {
        match self {
            ContentNode::Text(_) => 1,
            ContentNode::Renderable(_) => 0,
            ContentNode::Sequence(items) => items.iter().map(ContentNode::text_leaves).sum(),
        }
    }
}

impl fmt::Debug for ContentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentNode::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ContentNode::Renderable(_) => f.write_str("Renderable(..)"),
            ContentNode::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
        }
    }
}

impl From<&str> for ContentNode {
    fn from(text: &str) -> Self {
        ContentNode::Text(text.to_string())
    }
}

impl From<String> for ContentNode {
    fn from(text: String) -> Self {
        ContentNode::Text(text)
    }
}

impl<T: Into<ContentNode>> From<Vec<T>> for ContentNode {
    fn from(items: Vec<T>) -> Self {
        ContentNode::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<Box<dyn Renderable>> for ContentNode {
    fn from(object: Box<dyn Renderable>) -> Self {
        ContentNode::Renderable(object)
    }
}
