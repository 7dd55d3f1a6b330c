//! Request path → filesystem path resolution
//!
//! Containment is decided lexically: the request path is joined onto the
//! root, `.`/`..` are collapsed without touching the filesystem, and the
//! result must still sit under the root component by component.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Result of resolving a request path against the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Path to read. It may not exist; the caller checks before reading.
    File(PathBuf),
    /// A directory was requested without its trailing slash.
    Redirect(String),
    /// The path does not start with `/` or escapes the root.
    Invalid,
}

/// The directory everything is served from.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
    index_file: String,
}

impl DocumentRoot {
    /// Creates a document root, made absolute against the current directory.
    ///
    /// The directory does not have to exist yet.
    pub fn new(root: impl AsRef<Path>, index_file: impl Into<String>) -> io::Result<Self> {
        let root = normalize(&std::path::absolute(root.as_ref())?);

        Ok(Self {
            root,
            index_file: index_file.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn index_file(&self) -> &str {
        &self.index_file
    }

    /// Joins `request_path` onto the root and returns it if still inside.
    ///
    /// Pure path arithmetic; the filesystem is not consulted.
    pub fn confine(&self, request_path: &str) -> Option<PathBuf> {
        if !request_path.starts_with('/') {
            return None;
        }

        let mut joined = self.root.clone();
        for component in Path::new(request_path).components() {
            match component {
                Component::RootDir => {}
                Component::Prefix(_) => return None,
                other => joined.push(other.as_os_str()),
            }
        }

        let candidate = normalize(&joined);
        candidate.starts_with(&self.root).then_some(candidate)
    }

    /// Resolves a request path into what should be served.
    ///
    /// Directories are turned into their index file when the request path
    /// ends in `/`, and into a redirect otherwise.
    pub async fn resolve(&self, request_path: &str) -> Resolved {
        let Some(candidate) = self.confine(request_path) else {
            return Resolved::Invalid;
        };

        let is_dir = tokio::fs::metadata(&candidate)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if !is_dir {
            return Resolved::File(candidate);
        }

        if request_path.ends_with('/') {
            Resolved::File(candidate.join(&self.index_file))
        } else {
            Resolved::Redirect(format!("{request_path}/"))
        }
    }
}

/// Collapses `.`, `..` and repeated separators lexically.
///
/// `..` at the filesystem root stays at the root, as with `os.path.normpath`
/// on absolute paths.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }

    out
}
