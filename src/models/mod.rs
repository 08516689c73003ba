//! Update-website wire and result types.

mod document;
mod request;
mod result;

pub use document::*;
pub use request::*;
pub use result::*;
