//! Whether a calendar is enabled for the current user.

use calprop_rfc::rfc::dav::core::{PropertySet, PropertyValue, oc_props};

/// Resolves `oc:calendar-enabled`.
///
/// ## Summary
/// Servers deliver the flag in two shapes. When the property carries
/// elements (the owner-only form), its content is not inspected: the
/// calendar is enabled only for its known owner. Otherwise the text value
/// must be exactly `"1"`; a missing property is disabled.
#[must_use]
pub fn enabled(props: &PropertySet, owner: Option<&str>, current_user: Option<&str>) -> bool {
    match props.get(&oc_props::CALENDAR_ENABLED) {
        Some(PropertyValue::Elements(_)) => {
            let enabled = owner.is_some() && owner == current_user;
            tracing::trace!(owner, current_user, enabled, "Owner-only enabled flag");
            enabled
        }
        Some(PropertyValue::Text(value)) => value == "1",
        None => false,
    }
}
