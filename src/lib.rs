//! Docroot - Static File Server
//!
//! Core library for HTTP parsing, path resolution and file serving.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
