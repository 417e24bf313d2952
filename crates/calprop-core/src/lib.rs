//! Shared configuration, constants and errors for the calprop workspace.

pub mod config;
pub mod constants;
pub mod error;
