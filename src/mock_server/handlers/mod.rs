//! HTTP request handlers for the mock server.

pub mod websites;

pub use websites::*;
