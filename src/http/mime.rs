use std::collections::HashMap;
use std::path::Path;

/// Fallback for unmapped or missing extensions.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Maps file extensions (including the leading dot) to MIME types.
///
/// Read-only once built; shared by every connection.
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl Default for MimeTable {
    fn default() -> Self {
        let types = [(".html", "text/html"), (".css", "text/css")]
            .into_iter()
            .map(|(ext, mime)| (ext.to_string(), mime.to_string()))
            .collect();

        Self { types }
    }
}

impl MimeTable {
    /// The default table plus `extra`. Keys without a leading dot get one.
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::default();
        for (ext, mime) in extra {
            let ext = ext.into();
            let ext = if ext.starts_with('.') { ext } else { format!(".{ext}") };
            table.types.insert(ext, mime.into());
        }
        table
    }

    /// MIME type for an extension such as `".css"`. Case-sensitive.
    pub fn get(&self, extension: &str) -> &str {
        self.types
            .get(extension)
            .map(String::as_str)
            .unwrap_or(DEFAULT_MIME_TYPE)
    }

    /// MIME type for a file, judged by its final extension.
    pub fn for_path(&self, path: &Path) -> &str {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.get(&format!(".{ext}")),
            None => DEFAULT_MIME_TYPE,
        }
    }
}
