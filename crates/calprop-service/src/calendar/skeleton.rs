//! Descriptor assembly from the individual resolvers.

use calprop_rfc::rfc::dav::core::{PropertySet, apple_props, dav_props};

use super::acl::can_write;
use super::color::color;
use super::components::components;
use super::context::ResolveContext;
use super::descriptor::{CalendarDescriptor, PublishInfo, SharingCapability, WebcalDescriptor};
use super::enabled::enabled;
use super::owner::owner;
use super::publish::publish_info;
use super::shares::shares;
use super::sharing::sharing_capability;
use super::webcal::webcal_source;

/// Builds the calendar descriptor for `props` as seen by `ctx`.
///
/// ## Summary
/// Sharing capability uses the ACL-derived write flag. Public mode then
/// forces the calendar enabled and read-only. Calendar properties are
/// writable only for the owner of a writable calendar.
#[must_use]
#[tracing::instrument(skip_all, fields(public_mode = ctx.public_mode))]
pub fn skeleton(props: &PropertySet, ctx: &ResolveContext) -> CalendarDescriptor {
    let writable = can_write(props, &ctx.principal_url);
    let owner = owner(props);
    let enabled = enabled(props, owner.as_deref(), ctx.current_user.as_deref());
    let shares = shares(props, owner.as_deref());

    let SharingCapability {
        shareable,
        publishable,
    } = sharing_capability(props, writable, ctx.public_mode);

    let PublishInfo {
        published,
        publishurl,
        publicurl,
    } = publish_info(props, ctx.public_mode, &ctx.location);

    let (enabled, writable) = if ctx.public_mode {
        (true, false)
    } else {
        (enabled, writable)
    };

    let writable_properties = ctx.is_current_user(owner.as_deref()) && writable;

    tracing::debug!(
        owner = ?owner,
        writable,
        enabled,
        writable_properties,
        "Resolved calendar"
    );

    CalendarDescriptor {
        color: color(props, &ctx.default_color),
        displayname: props.text(&dav_props::DISPLAYNAME).map(str::to_owned),
        components: components(props),
        order: props.text(&apple_props::CALENDAR_ORDER).map(str::to_owned),
        writable,
        owner,
        enabled,
        shares,
        shareable,
        publishable,
        published,
        publishurl,
        publicurl,
        writable_properties,
    }
}

/// Builds the webcal descriptor for `props` as seen by `ctx`.
///
/// Subscriptions are never writable; their properties are writable for the
/// owner regardless of the ACL.
#[must_use]
pub fn webcal_skeleton(props: &PropertySet, ctx: &ResolveContext) -> WebcalDescriptor {
    let mut calendar = skeleton(props, ctx);
    calendar.writable = false;
    calendar.writable_properties = ctx.is_current_user(calendar.owner.as_deref());

    WebcalDescriptor {
        calendar,
        href: webcal_source(props),
    }
}
