//! Static file request handling
//!
//! Turns a parsed request into an [`Outcome`]: method check, path
//! resolution, existence check and file read.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::files::resolver::{DocumentRoot, Resolved};
use crate::http::mime::MimeTable;
use crate::http::request::Request;
use crate::http::response::{Outcome, Response, StatusCode};

/// Why a request could not be served.
#[derive(Debug)]
pub enum ServeError {
    /// Anything but GET
    UnsupportedMethod(String),
    /// The path does not start with `/` or normalizes outside the root
    Forbidden(String),
    /// Missing file, or a directory with nothing to serve
    NotFound(PathBuf),
    /// The file exists but could not be inspected or read
    Io(PathBuf, io::Error),
}

impl ServeError {
    /// Status code sent to the client.
    ///
    /// Rejected paths and read failures are reported as 404 so the client
    /// cannot tell them apart from missing files.
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::UnsupportedMethod(_) => StatusCode::MethodNotAllowed,
            ServeError::Forbidden(_) | ServeError::NotFound(_) | ServeError::Io(..) => {
                StatusCode::NotFound
            }
        }
    }
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::UnsupportedMethod(method) => write!(f, "method {method} not allowed"),
            ServeError::Forbidden(path) => write!(f, "path {path:?} escapes the document root"),
            ServeError::NotFound(path) => write!(f, "{} not found", path.display()),
            ServeError::Io(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for ServeError {}

/// Serves files from a [`DocumentRoot`].
///
/// Holds only read-only state, so one instance is shared by every connection.
#[derive(Debug, Clone)]
pub struct StaticHandler {
    root: DocumentRoot,
    mime_types: MimeTable,
}

impl StaticHandler {
    pub fn new(root: DocumentRoot, mime_types: MimeTable) -> Self {
        Self { root, mime_types }
    }

    pub fn root(&self) -> &DocumentRoot {
        &self.root
    }

    /// Handles one request. Never fails: every error becomes an error page.
    pub async fn serve(&self, request: &Request) -> Response {
        let outcome = match self.decide(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                match &e {
                    ServeError::Forbidden(_) => tracing::warn!(error = %e, "Rejected request path"),
                    ServeError::Io(..) => tracing::error!(error = %e, "File read failed"),
                    _ => tracing::debug!(error = %e, "Request not served"),
                }
                Outcome::Error(e.status())
            }
        };

        outcome.into_response()
    }

    /// Decides the outcome for `request` without building the response.
    pub async fn decide(&self, request: &Request) -> Result<Outcome, ServeError> {
        if !request.method.is_get() {
            return Err(ServeError::UnsupportedMethod(request.method.to_string()));
        }

        let target = request.target_path();

        match self.root.resolve(target).await {
            Resolved::Invalid => Err(ServeError::Forbidden(target.to_string())),
            Resolved::Redirect(mut location) => {
                if let Some(query) = request.query() {
                    location.push('?');
                    location.push_str(query);
                }
                tracing::debug!(location = %location, "Redirecting to directory");
                Ok(Outcome::Redirect { location })
            }
            Resolved::File(path) => {
                let content = read_file(path.clone()).await?;
                let mime_type = self.mime_types.for_path(&path).to_string();
                tracing::debug!(file = %path.display(), bytes = content.len(), "Serving file");
                Ok(Outcome::Ok {
                    content: content.into(),
                    mime_type,
                })
            }
        }
    }
}

/// Reads a regular file fully into memory.
async fn read_file(path: PathBuf) -> Result<Vec<u8>, ServeError> {
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(ServeError::NotFound(path)),
        Err(e) => return Err(classify_io_error(path, e)),
    }

    match tokio::fs::read(&path).await {
        Ok(content) => Ok(content),
        Err(e) => Err(classify_io_error(path, e)),
    }
}

/// Errors meaning "nothing servable at this path" become `NotFound`;
/// anything else is a real I/O failure.
fn classify_io_error(path: PathBuf, e: io::Error) -> ServeError {
    match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::InvalidInput => {
            ServeError::NotFound(path)
        }
        _ => ServeError::Io(path, e),
    }
}
