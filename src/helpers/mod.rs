//! Helper functions shared by the library and the CLI
//!
//! Date display/parsing and route building for posts and tags.

mod date;
mod url;

pub use date::*;
pub use url::*;
