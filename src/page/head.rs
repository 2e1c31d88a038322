//! Head section assembly
//!
//! The head renders in a fixed order: http-equiv meta tags, standard meta
//! tags, title, links, linked stylesheets, inline styles, linked scripts,
//! inline scripts. http-equiv tags come first so a charset declaration
//! precedes anything whose interpretation depends on it.

use indexmap::IndexMap;

use crate::element::ContentNode;
use crate::error::PageError;
use crate::format::FormattingContext;
use crate::normalize;

use super::meta::MetaTags;

/// A linked stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub mime: String,
    /// `None` omits the `media` attribute; `Some("")` renders it empty
    pub media: Option<String>,
}

/// Attribute naming the relationship of a head link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkRelation {
    /// Forward relationship (`rel`)
    #[default]
    Rel,
    /// Reverse relationship (`rev`)
    Rev,
}

impl LinkRelation {
    pub fn attribute(&self) -> &'static str {
        match self {
            LinkRelation::Rel => "rel",
            LinkRelation::Rev => "rev",
        }
    }
}

/// Guard wrapped around inline style and script content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineGuard {
    /// `<!--` / `-->` for documents served as `text/html`
    Comment,
    /// `<![CDATA[` / `]]>` for documents served with an XML mime type
    CData,
}

impl InlineGuard {
    /// Pick the guard for a document mime type
    pub fn for_mime(mime: &str) -> Self {
        if mime.eq_ignore_ascii_case("text/html") {
            InlineGuard::Comment
        } else {
            InlineGuard::CData
        }
    }

    pub fn open(&self) -> &'static str {
        match self {
            InlineGuard::Comment => "<!--",
            InlineGuard::CData => "<![CDATA[",
        }
    }

    pub fn close(&self) -> &'static str {
        match self {
            InlineGuard::Comment => "-->",
            InlineGuard::CData => "]]>",
        }
    }
}

/// Everything rendered inside `<head>` except the title
#[derive(Debug, Default)]
pub struct Head {
    pub meta: MetaTags,
    /// Pre-rendered `<link ...` fragments, closed at render time
    pub links: Vec<String>,
    /// URL -> stylesheet
    pub style_sheets: IndexMap<String, StyleSheet>,
    /// Lowercased type -> inline style content
    pub styles: IndexMap<String, ContentNode>,
    /// URL -> script type
    pub scripts: IndexMap<String, String>,
    /// Lowercased type -> inline script content
    pub inline_scripts: IndexMap<String, ContentNode>,
}

/// Per-render settings the head depends on
#[derive(Debug, Clone, Copy)]
pub struct HeadSettings<'a> {
    pub title: &'a str,
    /// `>` for the html family, ` />` otherwise
    pub tag_end: &'static str,
    pub guard: InlineGuard,
}

impl Head {
    /// Render the head section; `ctx` is the depth of the `<head>` tag itself
    pub fn render(&mut self, settings: HeadSettings<'_>, ctx: &FormattingContext) -> String {
        let tag_end = settings.tag_end;
        let item = ctx.nested();
        let mut html = ctx.line("<head>");

        for (name, content) in self.meta.http_equiv() {
            html.push_str(&item.line(&format!(
                r#"<meta http-equiv="{}" content="{}"{}"#,
                name, content, tag_end
            )));
        }
        for (name, content) in self.meta.standard() {
            html.push_str(&item.line(&format!(
                r#"<meta name="{}" content="{}"{}"#,
                name, content, tag_end
            )));
        }

        html.push_str(&item.line(&format!("<title>{}</title>", settings.title)));

        for link in &self.links {
            html.push_str(&item.line(&format!("{}{}", link, tag_end)));
        }

        for (href, sheet) in &self.style_sheets {
            let media = sheet
                .media
                .as_ref()
                .map(|m| format!(r#" media="{}""#, m))
                .unwrap_or_default();
            html.push_str(&item.line(&format!(
                r#"<link rel="stylesheet" href="{}" type="{}"{}{}"#,
                href, sheet.mime, media, tag_end
            )));
        }

        for (mime, content) in self.styles.iter_mut() {
            html.push_str(&render_inline("style", mime, content, settings.guard, &item));
        }

        for (src, mime) in &self.scripts {
            html.push_str(&item.line(&format!(
                r#"<script type="{}" src="{}"></script>"#,
                mime, src
            )));
        }

        for (mime, content) in self.inline_scripts.iter_mut() {
            html.push_str(&render_inline("script", mime, content, settings.guard, &item));
        }

        html.push_str(&ctx.line("</head>"));
        html
    }
}

/// Render one inline `<style>` or `<script>` block with its guard
fn render_inline(
    tag: &'static str,
    mime: &str,
    content: &mut ContentNode,
    guard: InlineGuard,
    ctx: &FormattingContext,
) -> String {
    let inner = ctx.nested();
    let mut html = ctx.line(&format!(r#"<{} type="{}">"#, tag, mime));
    html.push_str(&inner.line(guard.open()));

    let (text, skipped) = normalize::flatten_counted(content, &inner);
    if skipped > 0 {
        let err = PageError::unserializable(tag, mime);
        tracing::warn!(error = %err, skipped, "Inline content object rendered empty");
    }
    html.push_str(&text);

    html.push_str(&inner.line(guard.close()));
    html.push_str(&ctx.line(&format!("</{}>", tag)));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Renderable;
    use crate::format::LineEnd;
    use crate::page::meta::MetaKind;
    use pretty_assertions::assert_eq;

    fn ctx() -> FormattingContext {
        FormattingContext::new(LineEnd::Unix, "  ")
    }

    fn settings(tag_end: &'static str, guard: InlineGuard) -> HeadSettings<'static> {
        HeadSettings {
            title: "T",
            tag_end,
            guard,
        }
    }

    struct Opaque;

    impl Renderable for Opaque {}

    #[test]
    fn test_minimal_head() {
        let mut head = Head::default();
        let out = head.render(settings(" />", InlineGuard::Comment), &ctx());
        assert_eq!(out, "<head>\n  <title>T</title>\n</head>\n");
    }

    #[test]
    fn test_section_order() {
        let mut head = Head::default();
        head.inline_scripts
            .insert("text/javascript".to_string(), "run();".into());
        head.scripts
            .insert("app.js".to_string(), "text/javascript".to_string());
        head.styles.insert("text/css".to_string(), "p {}".into());
        head.style_sheets.insert(
            "site.css".to_string(),
            StyleSheet {
                mime: "text/css".to_string(),
                media: None,
            },
        );
        head.links
            .push(r#"<link href="/feed" rel="alternate""#.to_string());
        head.meta.set("author", "Me", MetaKind::Standard);
        head.meta.set("expires", "0", MetaKind::HttpEquiv);

        let out = head.render(settings(">", InlineGuard::Comment), &ctx());
        let expected = [
            "<head>",
            r#"  <meta http-equiv="expires" content="0">"#,
            r#"  <meta name="author" content="Me">"#,
            "  <title>T</title>",
            r#"  <link href="/feed" rel="alternate">"#,
            r#"  <link rel="stylesheet" href="site.css" type="text/css">"#,
            r#"  <style type="text/css">"#,
            "    <!--",
            "    p {}",
            "    -->",
            "  </style>",
            r#"  <script type="text/javascript" src="app.js"></script>"#,
            r#"  <script type="text/javascript">"#,
            "    <!--",
            "    run();",
            "    -->",
            "  </script>",
            "</head>",
            "",
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_media_only_when_given() {
        let mut head = Head::default();
        head.style_sheets.insert(
            "print.css".to_string(),
            StyleSheet {
                mime: "text/css".to_string(),
                media: Some("print".to_string()),
            },
        );
        head.style_sheets.insert(
            "empty.css".to_string(),
            StyleSheet {
                mime: "text/css".to_string(),
                media: Some(String::new()),
            },
        );
        let out = head.render(settings(" />", InlineGuard::Comment), &ctx());
        assert!(out.contains(r#"href="print.css" type="text/css" media="print" />"#));
        assert!(out.contains(r#"href="empty.css" type="text/css" media="" />"#));
    }

    #[test]
    fn test_cdata_guard() {
        let mut head = Head::default();
        head.inline_scripts
            .insert("text/javascript".to_string(), "if (a < b) {}".into());
        let out = head.render(settings(" />", InlineGuard::CData), &ctx());
        assert!(out.contains("    <![CDATA[\n    if (a < b) {}\n    ]]>\n"));
    }

    #[test]
    fn test_unserializable_inline_renders_empty_block() {
        let mut head = Head::default();
        head.styles
            .insert("text/css".to_string(), ContentNode::renderable(Opaque));
        let out = head.render(settings(" />", InlineGuard::Comment), &ctx());
        assert!(out.contains("  <style type=\"text/css\">\n    <!--\n    -->\n  </style>\n"));
    }

    #[test]
    fn test_nested_unserializable_inline_keeps_other_content() {
        let mut head = Head::default();
        head.inline_scripts.insert(
            "text/javascript".to_string(),
            ContentNode::Sequence(vec![ContentNode::renderable(Opaque), "go();".into()]),
        );
        let out = head.render(settings(">", InlineGuard::Comment), &ctx());
        assert!(out.contains("    <!--\n    go();\n    -->\n"));
    }

    #[test]
    fn test_guard_selection() {
        assert_eq!(InlineGuard::for_mime("text/html"), InlineGuard::Comment);
        assert_eq!(InlineGuard::for_mime("application/xhtml+xml"), InlineGuard::CData);
        assert_eq!(InlineGuard::for_mime("text/xml"), InlineGuard::CData);
    }
}
