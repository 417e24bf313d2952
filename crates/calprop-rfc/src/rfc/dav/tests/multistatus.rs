//! Tests for multistatus parsing into property sets.

use super::fixtures::CALENDAR_HOME;
use crate::rfc::dav::core::{
    PropertyValue, apple_props, caldav_props, cs_props, dav_props, oc_props,
};
use crate::rfc::dav::parse::{ParseErrorKind, parse_multistatus};

#[test_log::test]
fn parses_every_response() {
    let multistatus = parse_multistatus(CALENDAR_HOME).unwrap();

    assert_eq!(multistatus.responses.len(), 2);
    assert_eq!(
        multistatus.responses[0].href.as_str(),
        "/remote.php/dav/calendars/alice/personal/"
    );
    assert_eq!(multistatus.responses[0].propstats.len(), 2);
    assert!(
        multistatus.responses[0].propstats[0]
            .status
            .as_ref()
            .unwrap()
            .is_success()
    );
}

#[test]
fn scalar_properties_are_text() {
    let multistatus = parse_multistatus(CALENDAR_HOME).unwrap();
    let props = multistatus.responses[0].properties().unwrap();

    assert_eq!(props.text(&dav_props::DISPLAYNAME), Some("Personal"));
    assert_eq!(props.text(&apple_props::CALENDAR_COLOR), Some("#0082c9ff"));
    assert_eq!(props.text(&apple_props::CALENDAR_ORDER), Some("0"));
    assert_eq!(props.text(&oc_props::CALENDAR_ENABLED), Some("1"));
}

#[test]
fn structured_properties_are_elements() {
    let multistatus = parse_multistatus(CALENDAR_HOME).unwrap();
    let props = multistatus.responses[0].properties().unwrap();

    let comps = props
        .elements(&caldav_props::SUPPORTED_CALENDAR_COMPONENT_SET)
        .unwrap();
    let names: Vec<&str> = comps.iter().filter_map(|c| c.attribute("name")).collect();
    assert_eq!(names, vec!["VEVENT", "VTODO"]);

    let acl = props.elements(&dav_props::ACL).unwrap();
    assert_eq!(acl.len(), 1);
    assert!(acl[0].first_descendant(&dav_props::WRITE).is_some());

    assert_eq!(props.elements(&oc_props::INVITE).unwrap().len(), 2);

    let modes: Vec<&str> = props
        .elements(&cs_props::ALLOWED_SHARING_MODES)
        .unwrap()
        .iter()
        .map(|mode| mode.local_name())
        .collect();
    assert_eq!(modes, vec!["can-be-shared", "can-be-published"]);
}

#[test]
fn empty_property_in_later_propstat_is_empty_text() {
    let multistatus = parse_multistatus(CALENDAR_HOME).unwrap();
    let missing = &multistatus.responses[0].propstats[1];

    assert_eq!(missing.status.as_ref().unwrap().code(), Some(404));
    assert_eq!(
        missing.properties.get(&cs_props::SOURCE),
        Some(&PropertyValue::Text(String::new()))
    );
}

#[test]
fn rejects_non_multistatus_document() {
    let err = parse_multistatus(br#"<d:propfind xmlns:d="DAV:"><d:allprop/></d:propfind>"#)
        .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingElement);
}

#[test]
fn rejects_response_without_href() {
    let xml = br#"<d:multistatus xmlns:d="DAV:"><d:response><d:propstat/></d:response></d:multistatus>"#;
    let err = parse_multistatus(xml).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingElement);
}
