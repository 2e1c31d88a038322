//! Page state and document assembly
//!
//! A [`Page`] collects doctype, meta data, stylesheets, scripts and body
//! content through setter calls, then [`Page::render`] assembles the final
//! document in one of three shapes: simple (`<html>` only), XHTML (optional
//! XML prolog, doctype, namespaced root) or legacy HTML (doctype, bare root).

pub mod body;
pub mod config;
pub mod head;
pub mod meta;

use std::path::Path;

pub use body::Body;
pub use config::PageOptions;
pub use head::{Head, HeadSettings, InlineGuard, LinkRelation, StyleSheet};
pub use meta::{MetaKind, MetaTags, RefreshTarget, RequestInfo, RequestUrl};

use crate::doctype::{self, DoctypeSpec};
use crate::element::{attr_string, Attributes, ContentNode};
use crate::error::PageError;
use crate::format::{FormattingContext, LineEnd};

/// Content of the default `Generator` meta tag
pub const GENERATOR: &str = "html-page";

/// Descriptor of the doctype a new page starts with
pub const DEFAULT_DOCTYPE: &str = "XHTML 1.0 Transitional";

pub const DEFAULT_SCRIPT_TYPE: &str = "text/javascript";
pub const DEFAULT_STYLE_TYPE: &str = "text/css";
pub const DEFAULT_FAVICON_TYPE: &str = "image/x-icon";
pub const DEFAULT_FAVICON_RELATION: &str = "shortcut icon";

/// An (X)HTML document under construction
#[derive(Debug)]
pub struct Page {
    charset: String,
    mime: String,
    language: String,
    doctype: DoctypeSpec,
    namespace: String,
    /// The namespace came from the doctype tables, not from the caller
    namespace_inferred: bool,
    title: String,
    head: Head,
    body: Body,
    cacheable: bool,
    xml_prolog: bool,
    simple: bool,
    line_end: LineEnd,
    tab: String,
}

impl Default for Page {
    fn default() -> Self {
        let mut head = Head::default();
        head.meta.set("Generator", GENERATOR, MetaKind::Standard);
        Self {
            charset: "utf-8".to_string(),
            mime: "text/html".to_string(),
            language: "en".to_string(),
            doctype: DoctypeSpec::parse(DEFAULT_DOCTYPE),
            namespace: String::new(),
            namespace_inferred: false,
            title: String::new(),
            head,
            body: Body::default(),
            cacheable: false,
            xml_prolog: true,
            simple: false,
            line_end: LineEnd::Unix,
            tab: "\t".to_string(),
        }
    }
}

impl Page {
    /// Create a page with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page from construction options
    pub fn with_options(options: &PageOptions) -> Self {
        let mut page = Self::default();
        if let Some(lineend) = &options.lineend {
            page.set_line_end(LineEnd::from_name(lineend));
        }
        if let Some(charset) = &options.charset {
            page.set_charset(charset);
        }
        match options.doctype.as_deref() {
            Some("none") => page.set_simple(true),
            Some(descriptor) if !descriptor.trim().is_empty() => page.set_doctype(descriptor),
            _ => {}
        }
        if let Some(language) = &options.language {
            page.set_lang(language);
        }
        if let Some(mime) = &options.mime {
            page.set_mime_encoding(mime);
        }
        if let Some(namespace) = &options.namespace {
            page.set_namespace(Some(namespace.as_str()));
        }
        if let Some(tab) = &options.tab {
            page.set_tab(tab.as_str());
        }
        if let Some(cache) = options.cache {
            page.set_cache(cache);
        }
        page
    }

    /// Version of this page builder
    pub fn api_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    // ---- document settings ----

    /// Set the document character set
    pub fn set_charset(&mut self, charset: &str) {
        self.charset = charset.to_string();
    }

    /// Get the document character set
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Set the document mime type (stored lowercased)
    pub fn set_mime_encoding(&mut self, mime: &str) {
        self.mime = mime.to_lowercase();
    }

    /// Get the document mime type
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Set the document language (stored lowercased)
    pub fn set_lang(&mut self, language: &str) {
        self.language = language.to_lowercase();
    }

    /// Get the document language
    pub fn lang(&self) -> &str {
        &self.language
    }

    /// Set the doctype from a descriptor such as `"HTML 4.01 Strict"`
    pub fn set_doctype(&mut self, descriptor: &str) {
        self.set_doctype_spec(DoctypeSpec::parse(descriptor));
    }

    /// Set the doctype from explicit fields
    pub fn set_doctype_spec(&mut self, spec: DoctypeSpec) {
        self.doctype = spec;
        if self.namespace_inferred {
            self.namespace.clear();
            self.namespace_inferred = false;
        }
    }

    /// Get the current doctype
    pub fn doctype(&self) -> &DoctypeSpec {
        &self.doctype
    }

    /// Human-readable doctype, e.g. `XHTML 1.0 Strict`
    pub fn doctype_string(&self) -> String {
        self.doctype.to_string()
    }

    /// Set the root element namespace
    ///
    /// `None` resolves the default namespace of the current doctype now;
    /// when there is none a warning is logged and the namespace stays empty.
    pub fn set_namespace(&mut self, namespace: Option<&str>) {
        match namespace {
            Some(namespace) => {
                self.namespace = namespace.to_string();
                self.namespace_inferred = false;
            }
            None => {
                self.namespace.clear();
                self.namespace_inferred = false;
                self.infer_namespace();
            }
        }
    }

    /// The namespace, if set or already resolved
    pub fn namespace(&self) -> Option<&str> {
        if self.namespace.is_empty() {
            None
        } else {
            Some(&self.namespace)
        }
    }

    /// Set the document title
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// The title, or the generated default when none was set
    pub fn title(&self) -> String {
        if !self.title.is_empty() {
            self.title.clone()
        } else if self.simple {
            "New Page".to_string()
        } else {
            format!("New {} Compliant Page", self.doctype_string())
        }
    }

    /// Allow browsers to cache the emitted page
    pub fn set_cache(&mut self, cacheable: bool) {
        self.cacheable = cacheable;
    }

    /// Whether the emitted page may be cached
    pub fn is_cacheable(&self) -> bool {
        self.cacheable
    }

    /// Emit the XML prolog before an XHTML doctype
    pub fn enable_xml_prolog(&mut self) {
        self.xml_prolog = true;
    }

    /// Omit the XML prolog
    pub fn disable_xml_prolog(&mut self) {
        self.xml_prolog = false;
    }

    /// Whether the XML prolog is emitted
    pub fn has_xml_prolog(&self) -> bool {
        self.xml_prolog
    }

    /// Suppress doctype, prolog and namespace entirely
    pub fn set_simple(&mut self, simple: bool) {
        self.simple = simple;
    }

    /// Whether the page renders without doctype and namespace
    pub fn is_simple(&self) -> bool {
        self.simple
    }

    /// Set the line ending style
    pub fn set_line_end(&mut self, line_end: LineEnd) {
        self.line_end = line_end;
    }

    /// Get the line ending style
    pub fn line_end(&self) -> LineEnd {
        self.line_end
    }

    /// Set the indent unit
    pub fn set_tab(&mut self, tab: impl Into<String>) {
        self.tab = tab.into();
    }

    /// Get the indent unit
    pub fn tab(&self) -> &str {
        &self.tab
    }

    /// Formatting context at document level
    pub fn formatting(&self) -> FormattingContext {
        FormattingContext::new(self.line_end, self.tab.clone())
    }

    // ---- meta data ----

    /// Set a meta tag; empty content removes it
    pub fn set_meta_data(&mut self, name: &str, content: &str, kind: MetaKind) {
        self.head.meta.set(name, content, kind);
    }

    /// Remove a meta tag
    pub fn unset_meta_data(&mut self, name: &str, kind: MetaKind) {
        self.head.meta.unset(name, kind);
    }

    /// Get the content of a meta tag
    pub fn meta_data(&self, name: &str, kind: MetaKind) -> Option<&str> {
        self.head.meta.get(name, kind)
    }

    /// Get all meta tags
    pub fn meta_tags(&self) -> &MetaTags {
        &self.head.meta
    }

    /// Declare mime type and charset in an http-equiv `Content-Type` tag
    pub fn set_meta_content_type(&mut self) {
        let content = format!("{}; charset={}", self.mime, self.charset);
        self.head
            .meta
            .set("Content-Type", content, MetaKind::HttpEquiv);
    }

    /// Add an http-equiv `Refresh` tag
    pub fn set_meta_refresh(&mut self, seconds: u32, target: RefreshTarget<'_>, https: bool) {
        let content = format!("{}; url={}", seconds, target.url(https));
        self.head.meta.set("Refresh", content, MetaKind::HttpEquiv);
    }

    // ---- head links, styles and scripts ----

    /// Add a `<link>` with a forward or reverse relationship
    pub fn add_head_link(
        &mut self,
        href: &str,
        relation: &str,
        kind: LinkRelation,
        attributes: &Attributes,
    ) {
        self.head.links.push(format!(
            r#"<link href="{}" {}="{}"{}"#,
            href,
            kind.attribute(),
            relation,
            attr_string(attributes)
        ));
    }

    /// Add a favicon link; `None` uses `image/x-icon` and `shortcut icon`
    pub fn add_favicon(&mut self, href: &str, mime: Option<&str>, relation: Option<&str>) {
        self.head.links.push(format!(
            r#"<link href="{}" rel="{}" type="{}""#,
            href,
            relation.unwrap_or(DEFAULT_FAVICON_RELATION),
            mime.unwrap_or(DEFAULT_FAVICON_TYPE)
        ));
    }

    /// Link a stylesheet; re-adding a URL replaces it in place
    pub fn add_style_sheet(&mut self, url: &str, mime: Option<&str>, media: Option<&str>) {
        self.head.style_sheets.insert(
            url.to_string(),
            StyleSheet {
                mime: mime.unwrap_or(DEFAULT_STYLE_TYPE).to_string(),
                media: media.map(str::to_string),
            },
        );
    }

    /// Embed a style block; one block per type
    pub fn add_style_declaration(&mut self, content: impl Into<ContentNode>, mime: Option<&str>) {
        let mime = mime.unwrap_or(DEFAULT_STYLE_TYPE).to_lowercase();
        self.head.styles.insert(mime, content.into());
    }

    /// Link a script; re-adding a URL replaces it in place
    pub fn add_script(&mut self, url: &str, mime: Option<&str>) {
        self.head.scripts.insert(
            url.to_string(),
            mime.unwrap_or(DEFAULT_SCRIPT_TYPE).to_string(),
        );
    }

    /// Embed a script block; one block per type
    pub fn add_script_declaration(&mut self, content: impl Into<ContentNode>, mime: Option<&str>) {
        let mime = mime.unwrap_or(DEFAULT_SCRIPT_TYPE).to_lowercase();
        self.head.inline_scripts.insert(mime, content.into());
    }

    // ---- body ----

    /// Append content to the body
    pub fn add_body_content(&mut self, content: impl Into<ContentNode>) {
        self.body.content.push(content.into());
    }

    /// Insert content before everything already in the body
    pub fn prepend_body_content(&mut self, content: impl Into<ContentNode>) {
        self.body.content.insert(0, content.into());
    }

    /// Replace the body content
    pub fn set_body(&mut self, content: impl Into<ContentNode>) {
        self.unset_body();
        self.add_body_content(content);
    }

    /// Remove all body content
    pub fn unset_body(&mut self) {
        self.body.content.clear();
    }

    /// Replace the `<body>` tag attributes
    pub fn set_body_attributes(&mut self, attributes: Attributes) {
        self.body.element.set_attributes(attributes);
    }

    /// Get the `<body>` tag attributes
    pub fn body_attributes(&self) -> &Attributes {
        self.body.element.attributes()
    }

    // ---- output ----

    /// Assemble the full document
    ///
    /// Resolves the doctype first: an unsupported doctype switches the page
    /// to simple mode. The resolved doctype and namespace are kept, so the
    /// next render skips the lookups. The output ends with `</html>` and no
    /// trailing line end.
    pub fn render(&mut self) -> String {
        let ctx = self.formatting();
        let declaration = if self.simple {
            None
        } else {
            self.resolve_doctype()
        };

        let mut html = String::new();
        match declaration {
            None => html.push_str(&ctx.line("<html>")),
            Some(lines) if self.doctype.is_xhtml() => {
                if self.xml_prolog {
                    html.push_str(&ctx.line(&format!(
                        r#"<?xml version="1.0" encoding="{}"?>"#,
                        self.charset
                    )));
                }
                for line in lines {
                    html.push_str(&ctx.line(line));
                }
                if self.namespace.is_empty() {
                    self.infer_namespace();
                }
                html.push_str(&ctx.line(&format!(
                    r#"<html xmlns="{}" xml:lang="{}">"#,
                    self.namespace, self.language
                )));
            }
            Some(lines) => {
                for line in lines {
                    html.push_str(&ctx.line(line));
                }
                html.push_str(&ctx.line("<html>"));
            }
        }

        let title = self.title();
        let settings = HeadSettings {
            title: &title,
            tag_end: if self.doctype.is_html() { ">" } else { " />" },
            guard: InlineGuard::for_mime(&self.mime),
        };
        html.push_str(&self.head.render(settings, &ctx));
        html.push_str(&self.body.render(&ctx));
        html.push_str("</html>");
        html
    }

    /// Write the rendered document to a file
    pub fn to_file(&mut self, path: impl AsRef<Path>) -> Result<(), PageError> {
        let path = path.as_ref();
        let html = self.render();
        std::fs::write(path, html).map_err(|source| {
            let err = PageError::FileWrite {
                path: path.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, "Page not written");
            err
        })
    }

    fn resolve_doctype(&mut self) -> Option<&'static [&'static str]> {
        match doctype::resolve(&self.doctype) {
            Ok(resolution) => {
                if resolution.spec != self.doctype {
                    tracing::debug!(
                        requested = %self.doctype,
                        resolved = %resolution.spec,
                        "Normalized doctype"
                    );
                    self.doctype = resolution.spec;
                }
                Some(resolution.lines)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to simple mode");
                self.simple = true;
                None
            }
        }
    }

    fn infer_namespace(&mut self) {
        match doctype::resolve_namespace(&self.doctype) {
            Ok(uri) => {
                self.namespace = uri.to_string();
                self.namespace_inferred = true;
            }
            Err(e) => tracing::warn!(error = %e, "Root element has no namespace"),
        }
    }
}
