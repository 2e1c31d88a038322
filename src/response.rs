//! HTTP-style response emission
//!
//! [`Page::emit`] selects caching and content-type headers, then writes the
//! rendered document to a [`ResponseSink`]. The sink decides what a header
//! means: a web framework adapter, a CGI-style writer, or a buffer in tests.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::error::PageError;
use crate::page::Page;

/// `Expires` value sent with uncacheable pages
pub const EXPIRED: &str = "Tue, 1 Jan 1980 12:00:00 GMT";

/// Receives response headers and the response body
pub trait ResponseSink {
    fn send_header(&mut self, name: &str, value: &str) -> io::Result<()>;
    fn send_body(&mut self, body: &str) -> io::Result<()>;
}

/// Writes `Name: value` header lines, a blank line, then the body
pub struct WriterSink<W: Write> {
    writer: W,
    headers_sent: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            headers_sent: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResponseSink for WriterSink<W> {
    fn send_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.headers_sent = true;
        write!(self.writer, "{}: {}\r\n", name, value)
    }

    fn send_body(&mut self, body: &str) -> io::Result<()> {
        if self.headers_sent {
            self.writer.write_all(b"\r\n")?;
        }
        self.writer.write_all(body.as_bytes())?;
        self.writer.flush()
    }
}

/// Collects headers and body in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedResponse {
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl BufferedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// First header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl ResponseSink for BufferedResponse {
    fn send_header(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.headers.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn send_body(&mut self, body: &str) -> io::Result<()> {
        self.body.push_str(body);
        Ok(())
    }
}

/// Format a timestamp as an HTTP date (`Fri, 16 Oct 2026 09:30:00 GMT`)
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

impl Page {
    /// Headers for serving this page at `now`
    ///
    /// Uncacheable pages get `Expires`, `Last-Modified`, `Cache-Control` and
    /// `Pragma` headers; every page gets `Content-Type` with its charset.
    pub fn response_headers(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(5);
        if !self.is_cacheable() {
            headers.push(("Expires", EXPIRED.to_string()));
            headers.push(("Last-Modified", http_date(now)));
            headers.push(("Cache-Control", "no-cache".to_string()));
            headers.push(("Pragma", "no-cache".to_string()));
        }
        headers.push((
            "Content-Type",
            format!("{}; charset={}", self.mime(), self.charset()),
        ));
        headers
    }

    /// Send headers, then the rendered document
    pub fn emit(&mut self, sink: &mut impl ResponseSink) -> Result<(), PageError> {
        for (name, value) in self.response_headers(Utc::now()) {
            sink.send_header(name, &value)?;
        }
        let html = self.render();
        sink.send_body(&html)?;
        tracing::debug!(bytes = html.len(), "Page emitted");
        Ok(())
    }
}
