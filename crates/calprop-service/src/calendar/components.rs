//! Supported calendar component types.

use calprop_rfc::rfc::dav::core::{PropertySet, caldav_props};

use super::descriptor::ComponentSupport;

/// Reads `CALDAV:supported-calendar-component-set`.
///
/// Component names are matched case-insensitively. Unknown components and
/// entries without a `name` attribute are ignored.
#[must_use]
pub fn components(props: &PropertySet) -> ComponentSupport {
    let mut support = ComponentSupport::default();

    for comp in props.elements_or_empty(&caldav_props::SUPPORTED_CALENDAR_COMPONENT_SET) {
        let Some(name) = comp.attribute("name") else {
            tracing::trace!("Skipping component without name");
            continue;
        };

        match name.to_lowercase().as_str() {
            "vevent" => support.vevent = true,
            "vjournal" => support.vjournal = true,
            "vtodo" => support.vtodo = true,
            other => tracing::trace!(component = other, "Ignoring unsupported component"),
        }
    }

    support
}

#[cfg(test)]
mod tests {
    use calprop_rfc::rfc::dav::core::{CALDAV_NS, Element, QName};

    use super::*;

    fn comp(name: Option<&str>) -> Element {
        let comp = Element::new(QName::new(CALDAV_NS, "comp"));
        match name {
            Some(name) => comp.with_attribute("name", name),
            None => comp,
        }
    }

    fn component_set(comps: Vec<Element>) -> PropertySet {
        PropertySet::new().with(caldav_props::SUPPORTED_CALENDAR_COMPONENT_SET, comps)
    }

    #[test]
    fn known_components_case_insensitive() {
        let props = component_set(vec![comp(Some("VEVENT")), comp(Some("vTodo"))]);
        assert_eq!(
            components(&props),
            ComponentSupport {
                vevent: true,
                vjournal: false,
                vtodo: true,
            }
        );
    }

    #[test]
    fn unknown_and_unnamed_are_ignored() {
        let props = component_set(vec![comp(Some("VFREEBUSY")), comp(None), comp(Some("VJOURNAL"))]);
        assert_eq!(
            components(&props),
            ComponentSupport {
                vevent: false,
                vjournal: true,
                vtodo: false,
            }
        );
    }

    #[test]
    fn empty_input_is_all_false() {
        assert_eq!(components(&PropertySet::new()), ComponentSupport::default());
        assert_eq!(components(&component_set(vec![])), ComponentSupport::default());
    }
}
