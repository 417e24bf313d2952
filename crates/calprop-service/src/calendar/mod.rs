//! Calendar property resolvers and descriptor assembly.
//!
//! Each resolver reads one field out of a [`PropertySet`] and never fails:
//! absent or malformed properties degrade to that field's fallback. The
//! [`skeleton`] and [`webcal_skeleton`] assemblers combine them into a
//! descriptor for a [`ResolveContext`].
//!
//! [`PropertySet`]: calprop_rfc::rfc::dav::core::PropertySet

pub mod acl;
pub mod color;
pub mod components;
pub mod context;
pub mod descriptor;
pub mod enabled;
pub mod factory;
pub mod kind;
pub mod owner;
pub mod publish;
pub mod shares;
pub mod sharing;
pub mod skeleton;
pub mod webcal;

pub use context::ResolveContext;
pub use descriptor::{
    CalendarDescriptor, ComponentSupport, PublishInfo, ShareEntry, Shares, SharingCapability,
    WebcalDescriptor,
};
pub use factory::{CalendarFactory, CalendarResource, DavResource, WebcalResource};
pub use kind::ResourceKind;
pub use skeleton::{skeleton, webcal_skeleton};
