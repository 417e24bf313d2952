//! Subscription source of a webcal calendar.

use calprop_rfc::rfc::dav::core::{Element, PropertySet, cs_props, dav_props};

/// Returns the text of the first `DAV:href` element in `cs:source`.
#[must_use]
pub fn webcal_source(props: &PropertySet) -> Option<String> {
    props
        .elements(&cs_props::SOURCE)?
        .iter()
        .find(|source| *source.name() == dav_props::HREF)
        .map(Element::text)
}
