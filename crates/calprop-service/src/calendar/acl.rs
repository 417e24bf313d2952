//! Write access derived from the `DAV:acl` property.

use calprop_rfc::rfc::dav::core::{PropertySet, dav_props};

/// Returns whether `principal_url` is granted write access.
///
/// ## Summary
/// Each ACE applies when the text of its first `DAV:href` descendant equals
/// `principal_url` exactly. Access is granted if any applicable ACE has a
/// `DAV:write` descendant. ACEs without an href are skipped, and a missing or
/// text-valued ACL grants nothing.
#[must_use]
pub fn can_write(props: &PropertySet, principal_url: &str) -> bool {
    props.elements_or_empty(&dav_props::ACL).iter().any(|ace| {
        let Some(href) = ace.first_descendant(&dav_props::HREF) else {
            tracing::trace!(ace = %ace.name(), "Skipping ACE without principal href");
            return false;
        };

        href.text() == principal_url && ace.first_descendant(&dav_props::WRITE).is_some()
    })
}
