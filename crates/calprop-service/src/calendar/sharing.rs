//! Whether a calendar can be shared or published.

use calprop_rfc::rfc::dav::core::{PropertySet, cs_props};

use super::descriptor::SharingCapability;

/// Resolves sharing capability from `cs:allowed-sharing-modes`.
///
/// Nothing is shareable in public mode or without write access. Servers
/// that do not advertise any sharing mode allow sharing but not publishing.
#[must_use]
pub fn sharing_capability(
    props: &PropertySet,
    writable: bool,
    public_mode: bool,
) -> SharingCapability {
    if public_mode || !writable {
        return SharingCapability::default();
    }

    let modes = props.elements_or_empty(&cs_props::ALLOWED_SHARING_MODES);
    if modes.is_empty() {
        tracing::trace!("No sharing modes advertised");
        return SharingCapability {
            shareable: writable,
            publishable: false,
        };
    }

    SharingCapability {
        shareable: modes
            .iter()
            .any(|mode| mode.local_name() == cs_props::CAN_BE_SHARED),
        publishable: modes
            .iter()
            .any(|mode| mode.local_name() == cs_props::CAN_BE_PUBLISHED),
    }
}
