//! Generic namespaced element tree parsing.

use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};

use super::error::{ParseError, ParseResult};
use crate::rfc::dav::core::{Attribute, DAV_NS, Element, Namespace, QName, XML_NS};

/// Namespace declarations of one element: `(prefix, uri)`, default namespace
/// under the empty prefix.
type Declarations = Vec<(String, String)>;

/// Parses an XML document into its root [`Element`].
///
/// ## Summary
/// Namespace prefixes are resolved with element scoping. Unprefixed element
/// names without a default namespace fall back to `DAV:`. Text, CDATA and
/// entity references are merged into text nodes.
///
/// ## Errors
/// Returns an error if the XML is malformed, uses an undeclared prefix or
/// has no document element.
#[tracing::instrument(skip(xml), fields(xml_len = xml.len()))]
pub fn parse_element_tree(xml: &[u8]) -> ParseResult<Element> {
    let mut reader = Reader::from_reader(xml);

    let mut buf = Vec::new();
    let mut scopes: Vec<Declarations> = Vec::new();
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let (element, declarations) = open_element(e, &scopes)?;
                scopes.push(declarations);
                open.push(element);
            }
            Ok(Event::Empty(ref e)) => {
                let (element, _) = open_element(e, &scopes)?;
                close_element(element, &mut open, &mut root)?;
            }
            Ok(Event::End(_)) => {
                scopes.pop();
                let element = open
                    .pop()
                    .ok_or_else(|| ParseError::xml("closing tag without opening tag"))?;
                close_element(element, &mut open, &mut root)?;
            }
            Ok(Event::Text(ref e)) => {
                if let Some(current) = open.last_mut() {
                    let decoded = reader.decoder().decode(e.as_ref())?;
                    current.push_text(&decoded);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(current) = open.last_mut() {
                    current.push_text(std::str::from_utf8(e.as_ref())?);
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                if let Some(current) = open.last_mut() {
                    let resolved = resolve_reference(e, &reader)?;
                    current.push_text(&resolved);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(ParseError::xml(format!(
            "unclosed element at end of document: {}",
            unclosed.name()
        )));
    }

    root.ok_or_else(|| ParseError::missing_element("document element"))
}

/// Builds an element from a start tag, returning it with its own declarations.
fn open_element(
    e: &BytesStart<'_>,
    scopes: &[Declarations],
) -> ParseResult<(Element, Declarations)> {
    let mut declarations = Declarations::new();
    let mut raw_attributes = Vec::new();

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_owned();
        let value = quick_xml::escape::unescape(std::str::from_utf8(&attr.value)?)?.into_owned();

        if let Some(prefix) = key.strip_prefix("xmlns:") {
            declarations.push((prefix.to_owned(), value));
        } else if key == "xmlns" {
            declarations.push((String::new(), value));
        } else {
            raw_attributes.push((key, value));
        }
    }

    let name_bytes = e.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;
    let (prefix, local_name) = split_name(name);

    let namespace = match resolve_namespace(prefix, &declarations, scopes) {
        Some(namespace) => namespace,
        None if prefix.is_empty() => DAV_NS.to_owned(),
        None => return Err(ParseError::unbound_prefix(prefix)),
    };

    let mut element = Element::new(QName::new(
        Namespace::new(namespace),
        local_name.to_owned(),
    ));

    for (key, value) in raw_attributes {
        let (prefix, local_name) = split_name(&key);
        let namespace = if prefix.is_empty() {
            None
        } else {
            let uri = resolve_namespace(prefix, &declarations, scopes)
                .ok_or_else(|| ParseError::unbound_prefix(prefix))?;
            Some(Namespace::new(uri))
        };

        element.push_attribute(Attribute {
            namespace,
            local_name: local_name.to_owned(),
            value,
        });
    }

    Ok((element, declarations))
}

/// Attaches a completed element to its parent, or makes it the root.
fn close_element(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> ParseResult<()> {
    if let Some(parent) = open.last_mut() {
        parent.push_child(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(ParseError::unexpected_element(&element.name().to_string()));
    }

    Ok(())
}

fn split_name(name: &str) -> (&str, &str) {
    name.split_once(':').unwrap_or(("", name))
}

/// Looks a prefix up in the element's own declarations, then in enclosing scopes.
fn resolve_namespace(
    prefix: &str,
    declarations: &[(String, String)],
    scopes: &[Declarations],
) -> Option<String> {
    if prefix == "xml" {
        return Some(XML_NS.to_owned());
    }

    declarations
        .iter()
        .rev()
        .chain(scopes.iter().rev().flat_map(|scope| scope.iter().rev()))
        .find(|(declared, _)| declared == prefix)
        .map(|(_, uri)| uri.clone())
}

/// Resolves a character or predefined entity reference to its text.
fn resolve_reference(e: &BytesRef<'_>, reader: &Reader<&[u8]>) -> ParseResult<String> {
    let name = reader.decoder().decode(e.as_ref())?;

    if let Some(code) = name.strip_prefix('#') {
        let value = if let Some(hex) = code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            u32::from_str_radix(hex, 16)
        } else {
            code.parse::<u32>()
        }
        .map_err(|err| {
            tracing::warn!(error = ?err, value = %name, "Invalid numeric character reference");
            ParseError::invalid_value("invalid numeric character reference")
        })?;

        return char::from_u32(value)
            .map(String::from)
            .ok_or_else(|| ParseError::invalid_value("invalid XML numeric character reference"));
    }

    quick_xml::escape::resolve_predefined_entity(&name)
        .map(str::to_owned)
        .ok_or_else(|| ParseError::invalid_value(format!("unknown entity reference: &{name};")))
}
