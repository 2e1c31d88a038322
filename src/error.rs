//! Error types for page assembly and configuration loading

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while assembling or writing a page
///
/// None of these abort a render. The page logs them as warnings and degrades
/// to an emptier document; only [`PageError::FileWrite`] and
/// [`PageError::Emit`] are handed back to the caller.
#[derive(Debug, Error)]
pub enum PageError {
    /// Descriptor does not resolve at any specificity level
    #[error("\"{doctype}\" is an unsupported or illegal document type")]
    UnsupportedDoctype { doctype: String },

    /// The namespace table has no entry for the doctype
    #[error(
        "\"{doctype}\" does not have a default namespace; use set_namespace() to define your namespace"
    )]
    MissingDefaultNamespace { doctype: String },

    /// An inline style or script object has no serialized form
    #[error("{kind} content object for type '{mime}' supports neither to_html() nor to_text()")]
    UnserializableInlineContent { kind: &'static str, mime: String },

    /// The output file could not be created or written
    #[error("failed to write to {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The response sink rejected headers or body
    #[error("failed to emit response: {0}")]
    Emit(#[from] std::io::Error),
}

impl PageError {
    /// Create an unsupported doctype error
    pub fn unsupported(doctype: impl Into<String>) -> Self {
        Self::UnsupportedDoctype {
            doctype: doctype.into(),
        }
    }

    /// Create a missing namespace error
    pub fn missing_namespace(doctype: impl Into<String>) -> Self {
        Self::MissingDefaultNamespace {
            doctype: doctype.into(),
        }
    }

    /// Create an unserializable inline content error
    pub fn unserializable(kind: &'static str, mime: impl Into<String>) -> Self {
        Self::UnserializableInlineContent {
            kind,
            mime: mime.into(),
        }
    }
}

/// Errors that can occur when loading page options or page descriptions
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl ConfigError {
    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            ConfigError::ParseError(e) => e.span(),
            ConfigError::IoError(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let message = match self {
            ConfigError::ParseError(e) => e.message().to_string(),
            ConfigError::IoError(e) => return e.to_string(),
        };
        let span = self.span().unwrap_or(0..0);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid page description")
            .with_label(
                Label::new((filename, span))
                    .with_message(&message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_doctype_display() {
        let err = PageError::unsupported("HTML 5.0");
        assert_eq!(
            err.to_string(),
            "\"HTML 5.0\" is an unsupported or illegal document type"
        );
    }

    #[test]
    fn test_missing_namespace_display() {
        let err = PageError::missing_namespace("HTML 4.01 Strict");
        assert!(err.to_string().contains("set_namespace()"));
    }

    #[test]
    fn test_unserializable_display() {
        let err = PageError::unserializable("Script", "text/javascript");
        assert!(err.to_string().contains("Script"));
        assert!(err.to_string().contains("text/javascript"));
    }

    #[test]
    fn test_config_error_span_and_format() {
        let source = "charset = \n";
        let err: ConfigError = toml::from_str::<toml::Table>(source).unwrap_err().into();
        assert!(err.span().is_some());
        let report = err.format(source, "page.toml");
        assert!(report.contains("page.toml"));
    }
}
