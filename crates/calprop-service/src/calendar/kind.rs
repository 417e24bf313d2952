//! Resource classification by `DAV:resourcetype`.

use calprop_rfc::rfc::dav::core::{PropertySet, QName, caldav_props, cs_props, dav_props};

/// What kind of collection a response describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A `CalDAV` calendar collection.
    Calendar,
    /// A subscribed (webcal) calendar.
    Webcal,
    Other,
}

impl ResourceKind {
    /// Classifies a resource from its `DAV:resourcetype` children.
    ///
    /// A subscription marker wins over the calendar marker.
    #[must_use]
    pub fn classify(props: &PropertySet) -> Self {
        let types = props.elements_or_empty(&dav_props::RESOURCETYPE);
        let has = |name: &QName| types.iter().any(|kind| kind.name() == name);

        if has(&cs_props::SUBSCRIBED) {
            Self::Webcal
        } else if has(&caldav_props::CALENDAR) {
            Self::Calendar
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use calprop_rfc::rfc::dav::core::Element;

    use super::*;

    fn resourcetype(names: Vec<QName>) -> PropertySet {
        PropertySet::new().with(
            dav_props::RESOURCETYPE,
            names.into_iter().map(Element::new).collect::<Vec<_>>(),
        )
    }

    #[test]
    fn classifies_collections() {
        assert_eq!(
            ResourceKind::classify(&resourcetype(vec![QName::dav("collection"), caldav_props::CALENDAR])),
            ResourceKind::Calendar
        );
        assert_eq!(
            ResourceKind::classify(&resourcetype(vec![QName::dav("collection"), cs_props::SUBSCRIBED])),
            ResourceKind::Webcal
        );
        assert_eq!(
            ResourceKind::classify(&resourcetype(vec![QName::dav("collection")])),
            ResourceKind::Other
        );
        assert_eq!(ResourceKind::classify(&PropertySet::new()), ResourceKind::Other);
    }
}
