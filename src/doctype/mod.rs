//! Doctype resolution
//!
//! A [`DoctypeSpec`] names a document type by `type`, `version` and
//! `variant` ("XHTML 1.0 Strict"). [`resolve`] maps it to literal declaration
//! lines, relaxing the lookup from the most specific key to canonical
//! defaults. [`resolve_namespace`] does the same for the root element
//! namespace.

mod tables;

use std::fmt;

use crate::error::PageError;

/// Maximum number of canonical default redirections per resolution
const MAX_REDIRECTS: usize = 1;

/// A document type, lowercased and split into its three qualifiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DoctypeSpec {
    /// Doctype family, e.g. `xhtml` or `html`
    pub kind: String,
    pub version: Option<String>,
    pub variant: Option<String>,
}

impl DoctypeSpec {
    /// Build a spec from explicit fields (lowercased)
    pub fn new(kind: &str, version: Option<&str>, variant: Option<&str>) -> Self {
        Self {
            kind: kind.to_lowercase(),
            version: version.map(str::to_lowercase),
            variant: variant.map(str::to_lowercase),
        }
    }

    /// Parse a human-readable descriptor such as `"XHTML 1.0 Strict"`
    ///
    /// Tokens are split on whitespace and mapped positionally; anything
    /// after the third token is ignored.
    pub fn parse(descriptor: &str) -> Self {
        let lowered = descriptor.to_lowercase();
        let mut tokens = lowered.split_whitespace().map(str::to_string);
        Self {
            kind: tokens.next().unwrap_or_default(),
            version: tokens.next(),
            variant: tokens.next(),
        }
    }

    /// Whether this is the legacy `html` family (void tags close with `>`)
    pub fn is_html(&self) -> bool {
        self.kind == "html"
    }

    /// Whether this is the `xhtml` family (root element carries a namespace)
    pub fn is_xhtml(&self) -> bool {
        self.kind == "xhtml"
    }
}

impl fmt::Display for DoctypeSpec {
    /// `XHTML 1.0 Strict` style: type uppercased, qualifiers capitalized
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_empty() && self.version.is_none() && self.variant.is_none() {
            // An empty spec resolves to the global default
            return fmt::Display::fmt(&DoctypeSpec::parse(tables::GLOBAL_DEFAULT), f);
        }
        let mut parts = vec![self.kind.to_uppercase()];
        parts.extend(self.version.as_deref().map(capitalize));
        parts.extend(self.variant.as_deref().map(capitalize));
        f.write_str(parts.join(" ").trim())
    }
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result of a successful doctype lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The spec the lines belong to, after any default redirection
    pub spec: DoctypeSpec,
    /// Declaration lines, without line terminators
    pub lines: &'static [&'static str],
}

/// Resolve a doctype spec to its declaration lines
///
/// Lookup order:
/// 1. exact `type/version/variant`
/// 2. `type/version` without variant branching
/// 3. canonical default for `type/version`
/// 4. canonical default for `type`
/// 5. global default when no type is given
pub fn resolve(spec: &DoctypeSpec) -> Result<Resolution, PageError> {
    resolve_guarded(spec, 0)
}

fn resolve_guarded(spec: &DoctypeSpec, redirects: usize) -> Result<Resolution, PageError> {
    let kind = spec.kind.as_str();

    let version = spec.version.as_deref();
    let variant = spec.variant.as_deref();

    if let (Some(version), Some(variant)) = (version, variant) {
        if let Some(lines) = tables::declaration(kind, version, Some(variant)) {
            return Ok(Resolution {
                spec: spec.clone(),
                lines,
            });
        }
    }

    let canonical = match version {
        Some(version) => {
            if let Some(lines) = tables::declaration(kind, version, None) {
                // An unknown variant never mixes into a version-level entry
                return Ok(Resolution {
                    spec: DoctypeSpec::new(kind, Some(version), None),
                    lines,
                });
            }
            tables::canonical_default(kind, Some(version))
        }
        None if !kind.is_empty() => tables::canonical_default(kind, None),
        None => Some(tables::GLOBAL_DEFAULT),
    };

    match canonical {
        Some(descriptor) if redirects < MAX_REDIRECTS => {
            tracing::debug!(from = %spec, to = descriptor, "Redirecting doctype to canonical default");
            resolve_guarded(&DoctypeSpec::parse(descriptor), redirects + 1)
        }
        _ => Err(PageError::unsupported(spec.to_string())),
    }
}

/// Resolve the default namespace URI for a doctype spec
///
/// Tries `type/version/variant`, then `type/version`, then `type`.
pub fn resolve_namespace(spec: &DoctypeSpec) -> Result<&'static str, PageError> {
    let kind = spec.kind.as_str();
    let version = spec.version.as_deref();
    let variant = spec.variant.as_deref();

    let mut candidates = Vec::with_capacity(3);
    if version.is_some() && variant.is_some() {
        candidates.push((version, variant));
    }
    if version.is_some() {
        candidates.push((version, None));
    }
    candidates.push((None, None));

    candidates
        .into_iter()
        .find_map(|(version, variant)| tables::namespace(kind, version, variant))
        .ok_or_else(|| PageError::missing_namespace(spec.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_three_tokens() {
        let spec = DoctypeSpec::parse("XHTML 1.0 Strict");
        assert_eq!(spec, DoctypeSpec::new("xhtml", Some("1.0"), Some("strict")));
    }

    #[test]
    fn test_parse_fewer_and_extra_tokens() {
        assert_eq!(DoctypeSpec::parse("HTML"), DoctypeSpec::new("html", None, None));
        assert_eq!(
            DoctypeSpec::parse("  html   4.01 "),
            DoctypeSpec::new("html", Some("4.01"), None)
        );
        assert_eq!(
            DoctypeSpec::parse("html 4.01 strict extra words"),
            DoctypeSpec::new("html", Some("4.01"), Some("strict"))
        );
        assert_eq!(DoctypeSpec::parse(""), DoctypeSpec::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(DoctypeSpec::parse("xhtml 1.0 strict").to_string(), "XHTML 1.0 Strict");
        assert_eq!(DoctypeSpec::parse("xhtml basic 1.0").to_string(), "XHTML Basic 1.0");
        assert_eq!(DoctypeSpec::parse("html").to_string(), "HTML");
    }

    #[test]
    fn test_descriptor_and_fields_resolve_identically() {
        let parsed = resolve(&DoctypeSpec::parse("HTML 4.01 Frameset")).unwrap();
        let built = resolve(&DoctypeSpec::new("html", Some("4.01"), Some("frameset"))).unwrap();
        assert_eq!(parsed, built);
    }

    #[test]
    fn test_exact_variant() {
        let res = resolve(&DoctypeSpec::parse("xhtml 1.0 strict")).unwrap();
        assert_eq!(res.lines.len(), 2);
        assert!(res.lines[0].contains("XHTML 1.0 Strict"));
        assert!(res.lines[1].contains("xhtml1-strict.dtd"));
    }

    #[test]
    fn test_version_without_variant_table() {
        let res = resolve(&DoctypeSpec::parse("xhtml 1.1")).unwrap();
        assert_eq!(res.lines.len(), 1);
        assert!(res.lines[0].contains("XHTML 1.1"));
    }

    #[test]
    fn test_unknown_variant_falls_back_to_version_entry() {
        let exact = resolve(&DoctypeSpec::parse("html 2.0")).unwrap();
        let relaxed = resolve(&DoctypeSpec::parse("html 2.0 bogus")).unwrap();
        assert_eq!(relaxed.lines, exact.lines);
        assert_eq!(relaxed.spec, DoctypeSpec::parse("html 2.0"));
    }

    #[test]
    fn test_version_redirects_to_canonical_default() {
        let res = resolve(&DoctypeSpec::parse("xhtml 1.0")).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("xhtml 1.0 transitional"));

        let res = resolve(&DoctypeSpec::parse("html 3.2")).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("html 3.2 final"));
    }

    #[test]
    fn test_unknown_variant_with_branching_version_redirects() {
        let res = resolve(&DoctypeSpec::parse("xhtml 1.0 loose")).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("xhtml 1.0 transitional"));
    }

    #[test]
    fn test_type_only_redirects() {
        let res = resolve(&DoctypeSpec::parse("html")).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("html 4.01 transitional"));
        let res = resolve(&DoctypeSpec::parse("xhtml")).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("xhtml 1.0 transitional"));
    }

    #[test]
    fn test_empty_spec_uses_global_default() {
        let res = resolve(&DoctypeSpec::default()).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("xhtml 1.0 transitional"));
    }

    #[test]
    fn test_display_empty_spec_as_global_default() {
        assert_eq!(DoctypeSpec::default().to_string(), "XHTML 1.0 Transitional");
        assert_eq!(DoctypeSpec::parse("   ").to_string(), "XHTML 1.0 Transitional");
    }

    #[test]
    fn test_redirect_limit() {
        let err = resolve_guarded(&DoctypeSpec::parse("xhtml"), MAX_REDIRECTS).unwrap_err();
        assert!(matches!(err, PageError::UnsupportedDoctype { .. }));
        let err = resolve_guarded(&DoctypeSpec::default(), MAX_REDIRECTS).unwrap_err();
        assert!(matches!(err, PageError::UnsupportedDoctype { .. }));

        let res = resolve_guarded(&DoctypeSpec::parse("xhtml 1.0 strict"), MAX_REDIRECTS).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("xhtml 1.0 strict"));
        let res = resolve_guarded(&DoctypeSpec::parse("xhtml 1.1 mobile"), MAX_REDIRECTS).unwrap();
        assert_eq!(res.spec, DoctypeSpec::parse("xhtml 1.1"));
    }

    #[test]
    fn test_unsupported() {
        for descriptor in ["html 5", "svg", "xhtml 3.0 strict", "html 2.1 final"] {
            let err = resolve(&DoctypeSpec::parse(descriptor)).unwrap_err();
            assert!(
                matches!(err, PageError::UnsupportedDoctype { .. }),
                "{} should be unsupported",
                descriptor
            );
        }
    }

    #[test]
    fn test_namespace_resolution() {
        assert_eq!(
            resolve_namespace(&DoctypeSpec::parse("xhtml 1.0 strict")).unwrap(),
            "http://www.w3.org/1999/xhtml"
        );
        assert_eq!(
            resolve_namespace(&DoctypeSpec::parse("xhtml basic 1.0")).unwrap(),
            "http://www.w3.org/1999/xhtml"
        );
        assert_eq!(
            resolve_namespace(&DoctypeSpec::parse("xhtml 2.0")).unwrap(),
            "http://www.w3.org/2002/06/xhtml2"
        );
    }

    #[test]
    fn test_missing_namespace() {
        let err = resolve_namespace(&DoctypeSpec::parse("html 4.01 strict")).unwrap_err();
        assert!(matches!(err, PageError::MissingDefaultNamespace { .. }));
    }
}
