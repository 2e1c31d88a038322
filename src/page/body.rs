//! Body section assembly

use crate::element::{ContentNode, MarkupElement};
use crate::format::FormattingContext;
use crate::normalize;

/// Body attributes and content
#[derive(Debug, Default)]
pub struct Body {
    pub element: MarkupElement,
    pub content: Vec<ContentNode>,
}

impl Body {
    /// Render `<body>` with its content one level deeper than `ctx`
    pub fn render(&mut self, ctx: &FormattingContext) -> String {
        self.element.apply_formatting(ctx);
        let mut html = ctx.line(&format!("<body{}>", self.element.attr_string()));
        html.push_str(&normalize::flatten_all(&mut self.content, &ctx.nested()));
        html.push_str(&ctx.line("</body>"));
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LineEnd;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_body() {
        let mut body = Body::default();
        assert_eq!(body.render(&FormattingContext::default()), "<body>\n</body>\n");
    }

    #[test]
    fn test_body_with_attributes_and_content() {
        let mut body = Body {
            element: MarkupElement::new().with_attribute("class", "home"),
            content: vec!["<h1>Hi</h1>".into(), vec!["<p>a</p>", "<p>b</p>"].into()],
        };
        let ctx = FormattingContext::new(LineEnd::Windows, "  ");
        assert_eq!(
            body.render(&ctx),
            "<body class=\"home\">\r\n  <h1>Hi</h1>\r\n  <p>a</p>\r\n  <p>b</p>\r\n</body>\r\n"
        );
    }
}
