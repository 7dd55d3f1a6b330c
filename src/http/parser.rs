use crate::http::request::{Method, Request};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but an empty first line was received
    Empty,
    /// The request head is not valid UTF-8
    InvalidEncoding,
    /// The first line is not `METHOD SP PATH SP VERSION`
    InvalidRequestLine(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request"),
            ParseError::InvalidEncoding => f.write_str("request is not valid UTF-8"),
            ParseError::InvalidRequestLine(line) => write!(f, "malformed request line {line:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line and headers out of a single read.
///
/// Lines may end in CRLF or a bare LF. Header lines are split on the first
/// `": "`; lines without one are skipped. Anything after the blank line
/// ending the head is ignored, since GET carries no body.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = decode_head(buf)?;

    let mut lines = text.lines();

    // Request line
    let request_line = lines.next().unwrap_or("");
    if request_line.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method, path, version] = parts[..] else {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    };
    if method.is_empty() || path.is_empty() || version.is_empty() {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    }

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(": ") {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    Ok(Request {
        method: Method::parse(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}

/// UTF-8 view of the read. A character cut in half at the end of the read
/// buffer is dropped; invalid bytes anywhere before that are an error.
fn decode_head(buf: &[u8]) -> Result<&str, ParseError> {
    match std::str::from_utf8(buf) {
        Ok(text) => Ok(text),
        Err(e) if e.error_len().is_none() => {
            let valid = &buf[..e.valid_up_to()];
            std::str::from_utf8(valid).map_err(|_| ParseError::InvalidEncoding)
        }
        Err(_) => Err(ParseError::InvalidEncoding),
    }
}
