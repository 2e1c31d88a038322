//! Static doctype, default and namespace tables

/// Declaration lines for one `type -> version (-> variant)` entry
pub(super) struct Declaration {
    pub kind: &'static str,
    pub version: &'static str,
    pub variant: Option<&'static str>,
    pub lines: &'static [&'static str],
}

/// Canonical descriptor used when a spec is not specific enough
pub(super) struct CanonicalDefault {
    pub kind: &'static str,
    pub version: Option<&'static str>,
    pub descriptor: &'static str,
}

/// Default namespace for a `type (-> version (-> variant))` entry
pub(super) struct Namespace {
    pub kind: &'static str,
    pub version: Option<&'static str>,
    pub variant: Option<&'static str>,
    pub uri: &'static str,
}

/// Descriptor used when no type is given at all
pub(super) const GLOBAL_DEFAULT: &str = "xhtml 1.0 transitional";

pub(super) const DECLARATIONS: &[Declaration] = &[
    Declaration {
        kind: "xhtml",
        version: "1.1",
        variant: None,
        lines: &[
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#,
        ],
    },
    Declaration {
        kind: "xhtml",
        version: "1.0",
        variant: Some("strict"),
        lines: &[
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN""#,
            r#"    "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#,
        ],
    },
    Declaration {
        kind: "xhtml",
        version: "1.0",
        variant: Some("transitional"),
        lines: &[
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN""#,
            r#"    "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#,
        ],
    },
    Declaration {
        kind: "xhtml",
        version: "1.0",
        variant: Some("frameset"),
        lines: &[
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN""#,
            r#"    "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#,
        ],
    },
    Declaration {
        kind: "xhtml",
        version: "basic",
        variant: Some("1.0"),
        lines: &[
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML Basic 1.0//EN""#,
            r#"    "http://www.w3.org/TR/xhtml-basic/xhtml-basic10.dtd">"#,
        ],
    },
    Declaration {
        kind: "xhtml",
        version: "2.0",
        variant: None,
        lines: &[
            r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 2.0//EN""#,
            r#"    "TBD">"#,
        ],
    },
    Declaration {
        kind: "html",
        version: "4.01",
        variant: Some("strict"),
        lines: &[
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN""#,
            r#"    "http://www.w3.org/TR/html4/strict.dtd">"#,
        ],
    },
    Declaration {
        kind: "html",
        version: "4.01",
        variant: Some("transitional"),
        lines: &[
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN""#,
            r#"    "http://www.w3.org/TR/html4/loose.dtd">"#,
        ],
    },
    Declaration {
        kind: "html",
        version: "4.01",
        variant: Some("frameset"),
        lines: &[
            r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN""#,
            r#"    "http://www.w3.org/TR/html4/frameset.dtd">"#,
        ],
    },
    Declaration {
        kind: "html",
        version: "3.2",
        variant: Some("final"),
        lines: &[r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">"#],
    },
    Declaration {
        kind: "html",
        version: "2.0",
        variant: None,
        lines: &[r#"<!DOCTYPE HTML PUBLIC "-//IETF//DTD HTML//EN">"#],
    },
];

pub(super) const DEFAULTS: &[CanonicalDefault] = &[
    CanonicalDefault {
        kind: "xhtml",
        version: None,
        descriptor: "xhtml 1.0 transitional",
    },
    CanonicalDefault {
        kind: "xhtml",
        version: Some("1.0"),
        descriptor: "xhtml 1.0 transitional",
    },
    CanonicalDefault {
        kind: "xhtml",
        version: Some("basic"),
        descriptor: "xhtml basic 1.0",
    },
    CanonicalDefault {
        kind: "html",
        version: None,
        descriptor: "html 4.01 transitional",
    },
    CanonicalDefault {
        kind: "html",
        version: Some("4.01"),
        descriptor: "html 4.01 transitional",
    },
    CanonicalDefault {
        kind: "html",
        version: Some("3.2"),
        descriptor: "html 3.2 final",
    },
];

pub(super) const NAMESPACES: &[Namespace] = &[
    Namespace {
        kind: "xhtml",
        version: None,
        variant: None,
        uri: "http://www.w3.org/1999/xhtml",
    },
    Namespace {
        kind: "xhtml",
        version: Some("2.0"),
        variant: None,
        uri: "http://www.w3.org/2002/06/xhtml2",
    },
];

/// Exact declaration lookup
pub(super) fn declaration(
    kind: &str,
    version: &str,
    variant: Option<&str>,
) -> Option<&'static [&'static str]> {
    DECLARATIONS
        .iter()
        .find(|d| d.kind == kind && d.version == version && d.variant == variant)
        .map(|d| d.lines)
}

/// Exact canonical default lookup
pub(super) fn canonical_default(kind: &str, version: Option<&str>) -> Option<&'static str> {
    DEFAULTS
        .iter()
        .find(|d| d.kind == kind && d.version == version)
        .map(|d| d.descriptor)
}

/// Exact namespace lookup
pub(super) fn namespace(
    kind: &str,
    version: Option<&str>,
    variant: Option<&str>,
) -> Option<&'static str> {
    NAMESPACES
        .iter()
        .find(|n| n.kind == kind && n.version == version && n.variant == variant)
        .map(|n| n.uri)
}
