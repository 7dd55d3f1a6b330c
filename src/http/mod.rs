//! HTTP protocol implementation.
//!
//! This module implements the one-shot HTTP/1.1 exchange used by the file
//! server: one request is read, one response is written, the connection closes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Parses the request line and headers from the first read
//! - **`request`**: HTTP request representation and accessors
//! - **`response`**: Status table, response outcomes and the response builder
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read from the client
//!        └──────┬──────┘
//!               │ Request parsed        (empty read → Closed,
//!               ▼                        parse error → Writing 400)
//!        ┌──────────────────┐
//!        │   Processing     │ ← Method check, path resolution, file read
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docroot::files::{DocumentRoot, StaticHandler};
//! use docroot::http::connection::Connection;
//! use docroot::http::mime::MimeTable;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let root = DocumentRoot::new("www", "index.html")?;
//!     let handler = Arc::new(StaticHandler::new(root, MimeTable::default()));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let handler = handler.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, handler, 1024);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
