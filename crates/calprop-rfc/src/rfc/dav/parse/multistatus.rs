//! Multistatus response parsing.

use super::error::{ParseError, ParseResult};
use super::tree::parse_element_tree;
use crate::rfc::dav::core::{
    Element, Href, Multistatus, PropertySet, PropertyValue, Propstat, PropstatResponse, Status,
    dav_props,
};

/// Parses a `DAV:multistatus` response body.
///
/// ## Summary
/// Every `DAV:response` yields its href and one [`Propstat`] per
/// `DAV:propstat`. Each child of `DAV:prop` becomes a property: element
/// children are kept as an element sequence, anything else is reduced to
/// its trimmed text.
///
/// ## Errors
/// Returns an error if the XML is malformed, the document element is not
/// `DAV:multistatus`, or a response has no href.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_multistatus(xml: &[u8]) -> ParseResult<Multistatus> {
    let root = parse_element_tree(xml)?;

    if *root.name() != dav_props::MULTISTATUS {
        return Err(ParseError::missing_element("multistatus"));
    }

    let responses = root
        .children_named(&dav_props::RESPONSE)
        .map(parse_response)
        .collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!(responses = responses.len(), "Parsed multistatus");

    Ok(Multistatus { responses })
}

fn parse_response(response: &Element) -> ParseResult<PropstatResponse> {
    let href = response
        .child(&dav_props::HREF)
        .map(Element::text)
        .ok_or_else(|| ParseError::missing_element("href"))?;

    let propstats = response
        .children_named(&dav_props::PROPSTAT)
        .map(parse_propstat)
        .collect();

    Ok(PropstatResponse {
        href: Href::new(href),
        propstats,
    })
}

fn parse_propstat(propstat: &Element) -> Propstat {
    let status = propstat
        .child(&dav_props::STATUS)
        .map(|status| Status(status.text()));

    let properties: PropertySet = propstat
        .child(&dav_props::PROP)
        .map(|prop| {
            prop.children()
                .map(|property| (property.name().clone(), property_value(property)))
                .collect()
        })
        .unwrap_or_default();

    Propstat { status, properties }
}

fn property_value(property: &Element) -> PropertyValue {
    if property.has_element_children() {
        PropertyValue::Elements(property.children().cloned().collect())
    } else {
        PropertyValue::Text(property.text())
    }
}
