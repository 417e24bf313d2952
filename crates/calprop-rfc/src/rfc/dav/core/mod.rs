//! `WebDAV` XML types.
//!
//! This module defines the element tree, property set and multistatus
//! types produced by parsing a `PROPFIND` response.

mod element;
mod href;
mod multistatus;
mod namespace;
pub mod property;

pub use element::{Attribute, Descendants, Element, Node};
pub use href::Href;
pub use multistatus::{Multistatus, Propstat, PropstatResponse, Status};
pub use namespace::{
    APPLE_ICAL_NS, CALDAV_NS, CS_NS, DAV_NS, Namespace, OWNCLOUD_NS, QName, XML_NS, apple_props,
    caldav_props, cs_props, dav_props, oc_props,
};
pub use property::{PropertySet, PropertyValue};
