//! Namespaced XML element tree.
//!
//! Element-valued properties hold these nodes. The query surface is kept
//! narrow: direct element children, document-order descendants filtered by
//! [`QName`], attribute lookup by local name and text content.

use super::namespace::{Namespace, QName};

/// An attribute on an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Namespace of a prefixed attribute; unprefixed attributes have none.
    pub namespace: Option<Namespace>,
    pub local_name: String,
    pub value: String,
}

/// A child node of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A namespaced XML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: QName,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element without attributes or children.
    #[must_use]
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an unprefixed attribute.
    #[must_use]
    pub fn with_attribute(
        mut self,
        local_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.push_attribute(Attribute {
            namespace: None,
            local_name: local_name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.push_child(child);
        self
    }

    /// Adds a text node.
    #[must_use]
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.push_text(text.as_ref());
        self
    }

    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn push_child(&mut self, child: Self) {
        self.children.push(Node::Element(child));
    }

    /// Appends text, merging with a directly preceding text node.
    pub fn push_text(&mut self, text: &str) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_owned()));
        }
    }

    /// Returns the qualified name.
    #[must_use]
    pub fn name(&self) -> &QName {
        &self.name
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name.local_name()
    }

    /// Returns the value of the first attribute with the given local name.
    #[must_use]
    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.local_name == local_name)
            .map(|attr| attr.value.as_str())
    }

    /// Returns the direct element children.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Returns the direct element children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a QName) -> impl Iterator<Item = &'a Self> {
        self.children().filter(move |child| child.name == *name)
    }

    /// Returns the first direct element child with the given name.
    #[must_use]
    pub fn child(&self, name: &QName) -> Option<&Self> {
        self.children().find(|child| child.name == *name)
    }

    /// Returns whether the element has at least one element child.
    #[must_use]
    pub fn has_element_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// Returns all descendant elements in document order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children().rev().collect(),
        }
    }

    /// Returns the descendant elements with the given name in document order.
    pub fn descendants_named<'a>(&'a self, name: &'a QName) -> impl Iterator<Item = &'a Self> {
        self.descendants().filter(move |element| element.name == *name)
    }

    /// Returns the first descendant element with the given name.
    #[must_use]
    pub fn first_descendant(&self, name: &QName) -> Option<&Self> {
        self.descendants().find(|element| element.name == *name)
    }

    /// Returns the concatenated text of all descendant text nodes, trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text.trim().to_owned()
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }
}

/// Depth-first, document-order iterator over descendant elements.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children().rev());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::dav::core::namespace::dav_props;

    fn ace(href: &str, privileges: &[&str]) -> Element {
        let mut grant = Element::new(QName::dav("grant"));
        for privilege in privileges {
            grant = grant.with_child(
                Element::new(QName::dav("privilege")).with_child(Element::new(QName::dav(
                    (*privilege).to_owned(),
                ))),
            );
        }

        Element::new(QName::dav("ace"))
            .with_child(
                Element::new(QName::dav("principal"))
                    .with_child(Element::new(dav_props::HREF).with_text(href)),
            )
            .with_child(grant)
    }

    #[test]
    fn descendants_in_document_order() {
        let element = ace("/principals/alice/", &["read", "write"]);
        let names: Vec<&str> = element.descendants().map(Element::local_name).collect();
        assert_eq!(
            names,
            vec!["principal", "href", "grant", "privilege", "read", "privilege", "write"]
        );
    }

    #[test]
    fn first_descendant_finds_nested_element() {
        let element = ace("/principals/alice/", &["write"]);
        let href = element.first_descendant(&dav_props::HREF).unwrap();
        assert_eq!(href.text(), "/principals/alice/");
        assert!(element.first_descendant(&dav_props::WRITE).is_some());
        assert!(element.first_descendant(&QName::dav("bind")).is_none());
    }

    #[test]
    fn child_only_matches_direct_children() {
        let element = ace("/principals/alice/", &["write"]);
        let name = QName::dav("principal");
        let principal = element.child(&name).unwrap();
        assert_eq!(principal.text(), "/principals/alice/");
        assert!(element.child(&dav_props::HREF).is_none());
        assert_eq!(element.children_named(&name).count(), 1);
    }

    #[test]
    fn descendants_named_collects_every_match() {
        let element = ace("/principals/alice/", &["read", "write"]);
        let name = QName::dav("privilege");
        let privileges: Vec<&str> = element
            .descendants_named(&name)
            .flat_map(Element::children)
            .map(Element::local_name)
            .collect();
        assert_eq!(privileges, vec!["read", "write"]);
    }

    #[test]
    fn descendant_query_is_namespace_aware() {
        let element = Element::new(QName::dav("share"))
            .with_child(Element::new(QName::new("urn:other", "href")).with_text("x"));
        assert!(element.first_descendant(&dav_props::HREF).is_none());
    }

    #[test]
    fn text_merges_and_trims() {
        let element = Element::new(dav_props::HREF)
            .with_text("  /a &")
            .with_text(" b/ \n");
        assert_eq!(element.text(), "/a & b/");
        assert!(!element.has_element_children());
    }

    #[test]
    fn attribute_lookup_by_local_name() {
        let comp = Element::new(QName::new("urn:ietf:params:xml:ns:caldav", "comp"))
            .with_attribute("name", "VEVENT");
        assert_eq!(comp.attribute("name"), Some("VEVENT"));
        assert_eq!(comp.attribute("missing"), None);
    }
}
