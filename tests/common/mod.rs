#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use docroot::files::{DocumentRoot, StaticHandler};
use docroot::http::mime::MimeTable;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A throwaway document root under the system temp dir.
pub struct Fixture {
    pub dir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!("docroot-test-{}-{}", std::process::id(), id));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    /// The default site: index, stylesheet, a docs dir with index, an empty dir.
    pub fn site() -> Self {
        let fx = Self::new();
        fx.file("index.html", b"<html><body>home</body></html>");
        fx.file("style.css", b"body { color: red; }");
        fx.file("notes.txt", b"plain notes");
        fx.file("docs/index.html", b"<html><body>docs</body></html>");
        fx.file("docs/guide.html", b"<html><body>guide</body></html>");
        std::fs::create_dir_all(fx.dir.join("empty")).unwrap();
        fx
    }

    pub fn file(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn root(&self) -> DocumentRoot {
        DocumentRoot::new(&self.dir, "index.html").unwrap()
    }

    pub fn handler(&self) -> StaticHandler {
        StaticHandler::new(self.root(), MimeTable::default())
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Splits a raw response into (head, body) at the first blank line.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = String::from_utf8(raw[..pos].to_vec()).unwrap();
    (head, raw[pos + 4..].to_vec())
}
