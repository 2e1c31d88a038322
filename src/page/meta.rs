//! Meta tag storage and meta-refresh targets

use indexmap::IndexMap;

/// Which attribute names a meta tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKind {
    /// Rendered as `name="..."`
    Standard,
    /// Rendered as `http-equiv="..."`
    HttpEquiv,
}

/// Two independent, insertion-ordered meta tag maps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    standard: IndexMap<String, String>,
    http_equiv: IndexMap<String, String>,
}

impl MetaTags {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: MetaKind) -> &IndexMap<String, String> {
        match kind {
            MetaKind::Standard => &self.standard,
            MetaKind::HttpEquiv => &self.http_equiv,
        }
    }

    fn map_mut(&mut self, kind: MetaKind) -> &mut IndexMap<String, String> {
        match kind {
            MetaKind::Standard => &mut self.standard,
            MetaKind::HttpEquiv => &mut self.http_equiv,
        }
    }

    /// Set a tag; empty content removes the tag instead
    pub fn set(&mut self, name: impl Into<String>, content: impl Into<String>, kind: MetaKind) {
        let name = name.into();
        let content = content.into();
        if content.is_empty() {
            self.unset(&name, kind);
        } else {
            self.map_mut(kind).insert(name, content);
        }
    }

    /// Remove a tag, returning its content
    pub fn unset(&mut self, name: &str, kind: MetaKind) -> Option<String> {
        self.map_mut(kind).shift_remove(name)
    }

    pub fn get(&self, name: &str, kind: MetaKind) -> Option<&str> {
        self.map(kind).get(name).map(|s| s.as_str())
    }

    pub fn standard(&self) -> &IndexMap<String, String> {
        &self.standard
    }

    pub fn http_equiv(&self) -> &IndexMap<String, String> {
        &self.http_equiv
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.http_equiv.is_empty()
    }
}

/// Provider of the URL of the request currently being served
pub trait RequestUrl {
    /// Host name, optionally with port
    fn host(&self) -> &str;

    /// Path and query of the request
    fn request_uri(&self) -> &str;

    /// Absolute URL of the request
    fn url(&self, https: bool) -> String {
        let scheme = if https { "https" } else { "http" };
        format!("{}://{}{}", scheme, self.host(), self.request_uri())
    }
}

/// A fixed request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub host: String,
    pub request_uri: String,
}

impl RequestInfo {
    pub fn new(host: impl Into<String>, request_uri: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            request_uri: request_uri.into(),
        }
    }
}

impl RequestUrl for RequestInfo {
    fn host(&self) -> &str {
        &self.host
    }

    fn request_uri(&self) -> &str {
        &self.request_uri
    }
}

/// Where a meta refresh sends the browser
#[derive(Clone, Copy)]
pub enum RefreshTarget<'a> {
    /// An explicit URL, used verbatim
    Url(&'a str),
    /// The URL of the current request
    SelfUrl(&'a dyn RequestUrl),
}

impl RefreshTarget<'_> {
    /// Resolve to a URL; `https` only affects [`RefreshTarget::SelfUrl`]
    pub fn url(&self, https: bool) -> String {
        match self {
            RefreshTarget::Url(url) => url.to_string(),
            RefreshTarget::SelfUrl(request) => request.url(https),
        }
    }
}
