//! Formatting context shared by every renderer

use std::fmt;

/// Line ending style of the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnd {
    /// `\n`
    #[default]
    Unix,
    /// `\r\n`
    Windows,
    /// `\r`
    Mac,
}

impl LineEnd {
    /// Parse a line ending name (`unix`, `win` or `mac`)
    ///
    /// Unknown names fall back to unix line endings.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "win" | "windows" => LineEnd::Windows,
            "mac" => LineEnd::Mac,
            _ => LineEnd::Unix,
        }
    }

    /// The literal line terminator
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnd::Unix => "\n",
            LineEnd::Windows => "\r\n",
            LineEnd::Mac => "\r",
        }
    }
}

impl fmt::Display for LineEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line ending, indentation unit and depth for one rendering pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingContext {
    pub line_end: LineEnd,
    pub indent_unit: String,
    pub depth: usize,
}

impl Default for FormattingContext {
    fn default() -> Self {
        Self {
            line_end: LineEnd::Unix,
            indent_unit: "\t".to_string(),
            depth: 0,
        }
    }
}

impl FormattingContext {
    /// Create a context at depth zero
    pub fn new(line_end: LineEnd, indent_unit: impl Into<String>) -> Self {
        Self {
            line_end,
            indent_unit: indent_unit.into(),
            depth: 0,
        }
    }

    /// Same line ending and indent unit at another depth
    pub fn at_depth(&self, depth: usize) -> Self {
        Self {
            line_end: self.line_end,
            indent_unit: self.indent_unit.clone(),
            depth,
        }
    }

    /// The context one level deeper
    pub fn nested(&self) -> Self {
        self.at_depth(self.depth + 1)
    }

    /// Indentation for the current depth
    pub fn indent(&self) -> String {
        self.indent_unit.repeat(self.depth)
    }

    /// The line terminator
    pub fn nl(&self) -> &'static str {
        self.line_end.as_str()
    }

    /// A single indented, terminated line
    pub fn line(&self, text: &str) -> String {
        format!("{}{}{}", self.indent(), text, self.nl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_end_names() {
        assert_eq!(LineEnd::from_name("unix"), LineEnd::Unix);
        assert_eq!(LineEnd::from_name("win"), LineEnd::Windows);
        assert_eq!(LineEnd::from_name("MAC"), LineEnd::Mac);
        assert_eq!(LineEnd::from_name("amiga"), LineEnd::Unix);
    }

    #[test]
    fn test_line_end_literals() {
        assert_eq!(LineEnd::Unix.as_str(), "\n");
        assert_eq!(LineEnd::Windows.as_str(), "\r\n");
        assert_eq!(LineEnd::Mac.as_str(), "\r");
    }

    #[test]
    fn test_indent_by_depth() {
        let ctx = FormattingContext::new(LineEnd::Unix, "  ").at_depth(3);
        assert_eq!(ctx.indent(), "      ");
        assert_eq!(ctx.nested().depth, 4);
        assert_eq!(ctx.line("x"), "      x\n");
    }

    #[test]
    fn test_default_context() {
        let ctx = FormattingContext::default();
        assert_eq!(ctx.indent_unit, "\t");
        assert_eq!(ctx.depth, 0);
        assert_eq!(ctx.line("a"), "a\n");
    }
}
