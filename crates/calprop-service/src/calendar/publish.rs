//! Publish state and public link.

use calprop_core::constants::{PUBLIC_ROUTE_COMPONENT, PUBLIC_ROUTE_PREFIX};
use calprop_rfc::rfc::dav::core::{Element, PropertySet, PropertyValue, cs_props};

use super::descriptor::PublishInfo;

/// Resolves `cs:publish-url` into publish state and a public link.
///
/// ## Summary
/// The calendar counts as published whenever the property is present. The
/// public link is `location` without one trailing `#`; outside public mode
/// it additionally points at `public/<token>`, where the token is the last
/// path segment of the publish URL.
#[must_use]
pub fn publish_info(props: &PropertySet, public_mode: bool, location: &str) -> PublishInfo {
    let Some(value) = props.get(&cs_props::PUBLISH_URL) else {
        return PublishInfo::default();
    };

    let publishurl = match value {
        PropertyValue::Text(text) => Some(text.clone()).filter(|text| !text.is_empty()),
        PropertyValue::Elements(elements) => elements.first().map(Element::text),
    };

    let mut publicurl = location.strip_suffix('#').unwrap_or(location).to_owned();

    if !public_mode {
        if publicurl.ends_with('/') {
            publicurl.push_str(PUBLIC_ROUTE_COMPONENT);
            publicurl.push('/');
        } else {
            publicurl.push_str(PUBLIC_ROUTE_PREFIX);
        }

        if let Some(url) = &publishurl {
            publicurl.push_str(url.rsplit_once('/').map_or(url.as_str(), |(_, token)| token));
        }
    }

    tracing::trace!(publishurl = ?publishurl, publicurl = %publicurl, "Calendar is published");

    PublishInfo {
        published: true,
        publishurl,
        publicurl: Some(publicurl),
    }
}
