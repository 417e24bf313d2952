//! `WebDAV`/`CalDAV` wire types for calprop.
//!
//! Provides the typed property keys, the element tree and property set the
//! descriptor engine reads from, and a parser that turns a multistatus body
//! into those types.

pub mod error;
pub mod rfc;
