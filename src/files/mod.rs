//! Static file serving
//!
//! This module maps request paths onto the document root and decides what
//! each request gets back.

pub mod handler;
pub mod resolver;

pub use handler::{ServeError, StaticHandler};
pub use resolver::{DocumentRoot, Resolved};
