//! `WebDAV` XML parsing.
//!
//! This module parses multistatus response bodies into property sets
//! using the `quick-xml` crate.

mod error;
mod multistatus;
mod tree;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use multistatus::parse_multistatus;
pub use tree::parse_element_tree;
