//! Owner user id from the `DAV:owner` property.

use calprop_core::constants::PRINCIPAL_USERS_PATH;
use calprop_rfc::rfc::dav::core::{PropertySet, dav_props};

/// Returns the user id of the calendar owner.
///
/// Takes the text of the first element of `DAV:owner`, drops its final
/// character (the trailing `/` of the principal collection) and returns what
/// follows the user principal path. `None` when the property is missing or
/// empty, or the href is not a user principal.
#[must_use]
pub fn owner(props: &PropertySet) -> Option<String> {
    let mut href = props.elements_or_empty(&dav_props::OWNER).first()?.text();
    href.pop();

    let owner = href
        .split_once(PRINCIPAL_USERS_PATH)
        .map(|(_, user)| user.to_owned());

    if owner.is_none() {
        tracing::debug!(href = %href, "Owner is not a user principal");
    }

    owner
}
