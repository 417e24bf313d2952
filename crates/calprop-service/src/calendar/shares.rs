//! Share list from the `oc:invite` property.

use calprop_core::constants::{SHARE_GROUP_PREFIX, SHARE_USER_PREFIX};
use calprop_rfc::rfc::dav::core::{PropertySet, dav_props, oc_props};

use super::descriptor::{ShareEntry, Shares};

/// Reads the users and groups a calendar is shared with.
///
/// ## Summary
/// Every share needs a `DAV:href` and an `oc:access` descendant; a share is
/// writable when its access holds `oc:read-write`. Hrefs are routed by their
/// principal prefix. The owner never appears among the user shares, and
/// principals that are neither users nor groups are dropped.
#[must_use]
pub fn shares(props: &PropertySet, owner: Option<&str>) -> Shares {
    let mut shares = Shares::default();

    let Some(invite) = props.elements(&oc_props::INVITE) else {
        return shares;
    };

    for share in invite {
        let Some(href) = share.first_descendant(&dav_props::HREF) else {
            tracing::trace!("Skipping share without href");
            continue;
        };
        let Some(access) = share.first_descendant(&oc_props::ACCESS) else {
            tracing::trace!("Skipping share without access");
            continue;
        };

        let writable = access.first_descendant(&oc_props::READ_WRITE).is_some();
        let href = href.text();

        if let Some(id) = href.strip_prefix(SHARE_USER_PREFIX) {
            if owner == Some(id) {
                tracing::trace!(id, "Owner excluded from user shares");
            } else {
                shares.users.push(ShareEntry::new(id, writable));
            }
        } else if let Some(id) = href.strip_prefix(SHARE_GROUP_PREFIX) {
            shares.groups.push(ShareEntry::new(id, writable));
        } else {
            tracing::debug!(href = %href, "Dropping share with unknown principal type");
        }
    }

    shares
}
