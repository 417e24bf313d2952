//! `WebDAV` types and parsing.

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;
