//! Calendar descriptor resolution for calprop.
//!
//! Turns the property set of a `PROPFIND` response into the normalized
//! calendar and webcal descriptors a client renders.

pub mod calendar;
pub mod error;
