//! Network front end: binding and accepting connections.

pub mod listener;
