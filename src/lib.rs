//! html-page - Programmatic (X)HTML page assembly
//!
//! This library builds complete (X)HTML documents: doctype declaration,
//! `<head>` with meta data, stylesheets and scripts, and a `<body>` of
//! nested content. Output honors the selected doctype family, line ending
//! style and indentation unit.
//!
//! # Example
//!
//! ```rust
//! use html_page::{MetaKind, Page};
//!
//! let mut page = Page::new();
//! page.set_doctype("XHTML 1.0 Strict");
//! page.set_title("Hello");
//! page.set_meta_data("author", "Me", MetaKind::Standard);
//! page.add_body_content("<p>Hello</p>");
//!
//! let html = page.render();
//! assert!(html.starts_with("<?xml"));
//! assert!(html.ends_with("</html>"));
//! ```

pub mod description;
pub mod doctype;
pub mod element;
pub mod error;
pub mod format;
pub mod normalize;
pub mod page;
pub mod response;

pub use description::PageDescription;
pub use doctype::DoctypeSpec;
pub use element::{Attributes, ContentNode, MarkupElement, Renderable};
pub use error::{ConfigError, PageError};
pub use format::{FormattingContext, LineEnd};
pub use page::{LinkRelation, MetaKind, Page, PageOptions, RefreshTarget, RequestInfo, RequestUrl};
pub use response::{BufferedResponse, ResponseSink, WriterSink};

/// Render a TOML page description to a document
///
/// This is the main entry point for declarative use. It parses the
/// description, builds the page and renders it.
///
/// # Example
///
/// ```rust
/// use html_page::render;
///
/// let html = render(r#"
///     title = "Report"
///     body = ["<h1>Report</h1>"]
///
///     [options]
///     doctype = "HTML 4.01 Strict"
/// "#).unwrap();
///
/// assert!(html.starts_with("<!DOCTYPE HTML PUBLIC"));
/// assert!(html.contains("<title>Report</title>"));
/// ```
pub fn render(description: &str) -> Result<String, ConfigError> {
    let mut page = PageDescription::from_str(description)?.into_page();
    Ok(page.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_description() {
        let html = render("").unwrap();
        assert!(html.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(html.contains("<title>New XHTML 1.0 Transitional Compliant Page</title>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_render_simple_mode() {
        let html = render(
            r#"
            [options]
            doctype = "none"
        "#,
        )
        .unwrap();
        assert!(html.starts_with("<html>\n<head>"));
        assert!(html.contains("<title>New Page</title>"));
    }

    #[test]
    fn test_render_with_head_entries() {
        let html = render(
            r#"
            title = "Styled"
            meta_content_type = true

            [[stylesheets]]
            href = "site.css"
            media = "print"

            [style]
            "text/css" = "body { margin: 0 }"
        "#,
        )
        .unwrap();
        assert!(html.contains(r#"<meta http-equiv="Content-Type" content="text/html; charset=utf-8" />"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="site.css" type="text/css" media="print" />"#));
        assert!(html.contains("body { margin: 0 }"));
    }

    #[test]
    fn test_render_unsupported_doctype_degrades() {
        let html = render(
            r#"
            [options]
            doctype = "HTML 5"
        "#,
        )
        .unwrap();
        assert!(!html.contains("<!DOCTYPE"));
        assert!(html.starts_with("<html>"));
    }

    #[test]
    fn test_render_invalid_description() {
        let result = render("title = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
