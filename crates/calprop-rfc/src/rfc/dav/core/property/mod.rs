//! DAV property values and property sets.

use std::collections::HashMap;

use super::element::Element;
use super::namespace::QName;

/// A property value as delivered in a `PROPFIND` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Property without element children, reduced to its text.
    Text(String),
    /// Property with element children, in document order.
    Elements(Vec<Element>),
}

impl PropertyValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Elements(_) => None,
        }
    }

    /// Returns the value as an element sequence if applicable.
    #[must_use]
    pub fn as_elements(&self) -> Option<&[Element]> {
        match self {
            Self::Elements(elements) => Some(elements),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<Element>> for PropertyValue {
    fn from(value: Vec<Element>) -> Self {
        Self::Elements(value)
    }
}

/// Properties of one resource, keyed by qualified name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    properties: HashMap<QName, PropertyValue>,
}

impl PropertySet {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, replacing any previous value.
    pub fn insert(&mut self, name: QName, value: impl Into<PropertyValue>) {
        self.properties.insert(name, value.into());
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with(mut self, name: QName, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the raw value of a property.
    #[must_use]
    pub fn get(&self, name: &QName) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Returns the text value of a property, if it has one.
    #[must_use]
    pub fn text(&self, name: &QName) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_text)
    }

    /// Returns the element sequence of a property, if it has one.
    #[must_use]
    pub fn elements(&self, name: &QName) -> Option<&[Element]> {
        self.get(name).and_then(PropertyValue::as_elements)
    }

    /// Returns the element sequence of a property, empty when absent or text.
    #[must_use]
    pub fn elements_or_empty(&self, name: &QName) -> &[Element] {
        self.elements(name).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<(QName, PropertyValue)> for PropertySet {
    fn from_iter<T: IntoIterator<Item = (QName, PropertyValue)>>(iter: T) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}
