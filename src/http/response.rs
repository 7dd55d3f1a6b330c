use bytes::Bytes;

/// HTTP status codes surfaced by the server.
///
/// - `Ok` (200): File served
/// - `MovedPermanently` (301): Directory requested without a trailing slash
/// - `BadRequest` (400): Malformed request line
/// - `NotFound` (404): Missing file, unservable directory or rejected path
/// - `MethodNotAllowed` (405): Anything but GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Looks a numeric code up in the status table.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            301 => Some(StatusCode::MovedPermanently),
            400 => Some(StatusCode::BadRequest),
            404 => Some(StatusCode::NotFound),
            405 => Some(StatusCode::MethodNotAllowed),
            _ => None,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// The decision reached for one request. It fully determines the response bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok { content: Bytes, mime_type: String },
    Redirect { location: String },
    Error(StatusCode),
}

impl Outcome {
    pub fn into_response(self) -> Response {
        match self {
            Outcome::Ok { content, mime_type } => Response::ok(content, mime_type),
            Outcome::Redirect { location } => Response::redirect(location),
            Outcome::Error(status) => Response::error(status),
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep insertion order so the serialized form is deterministic.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in wire order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/css")
///     .body(Bytes::from_static(b"body {}"))
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Adds a header, or replaces the value of an existing one in place.
    ///
    /// Names are compared ignoring ASCII case.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self
            .headers
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(&key))
        {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets `Content-Type`, `Content-Length` and `Connection: close` for `body`.
    pub fn content(self, mime_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        let length = body.len().to_string();

        self.header("Content-Type", mime_type)
            .header("Content-Length", length)
            .header("Connection", "close")
            .body(body)
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response carrying file contents.
    pub fn ok(content: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content(mime_type, content)
            .build()
    }

    /// Creates a 301 redirect. Only a `Location` header is sent, no body.
    pub fn redirect(location: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::MovedPermanently)
            .header("Location", location)
            .build()
    }

    /// Creates an error response with a small HTML page naming the status.
    pub fn error(status: StatusCode) -> Self {
        let page = format!(
            "<html><body><h1>{} {}</h1></body></html>",
            status.as_u16(),
            status.reason_phrase()
        );

        ResponseBuilder::new(status)
            .content("text/html", page)
            .build()
    }

    pub fn bad_request() -> Self {
        Self::error(StatusCode::BadRequest)
    }

    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
