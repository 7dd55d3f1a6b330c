use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// Only GET is served. Every other token is still parsed so the handler can
/// answer 405 Method Not Allowed instead of rejecting the request as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other method token, kept as received
    Extension(String),
}

/// Represents a parsed HTTP request from a client.
///
/// Built once from the first read on a connection and never mutated.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request target (e.g., "/index.html?lang=en")
    pub path: String,
    /// HTTP version token, accepted as-is (typically "HTTP/1.1")
    pub version: String,
    /// Request headers; for repeated names the last occurrence wins
    pub headers: HashMap<String, String>,
}

impl Method {
    /// Parses an HTTP method token, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::GET);
    /// assert_eq!(Method::parse("BREW"), Method::Extension("BREW".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::Extension(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Extension(token) => token,
        }
    }

    pub fn is_get(&self) -> bool {
        *self == Method::GET
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    ///
    /// An exact-case match is preferred when several keys differ only in case.
    pub fn header(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.headers.get(key) {
            return Some(value.as_str());
        }

        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// The request target without its query string or fragment.
    pub fn target_path(&self) -> &str {
        let end = self.path.find(['?', '#']).unwrap_or(self.path.len());
        &self.path[..end]
    }

    /// The query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        let (_, rest) = self.path.split_once('?')?;
        Some(rest.split('#').next().unwrap_or(rest))
    }
}
