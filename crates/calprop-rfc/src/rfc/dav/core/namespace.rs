//! XML namespace and qualified name types.

use std::borrow::Cow;

/// `DAV:` namespace URI.
pub const DAV_NS: &str = "DAV:";

/// `CalDAV` namespace URI.
pub const CALDAV_NS: &str = "urn:ietf:params:xml:ns:caldav";

/// `CalendarServer` namespace URI.
pub const CS_NS: &str = "http://calendarserver.org/ns/";

/// Apple `iCal` namespace URI (calendar color and order).
pub const APPLE_ICAL_NS: &str = "http://apple.com/ns/ical/";

/// `ownCloud` namespace URI (enabled flag and sharing).
pub const OWNCLOUD_NS: &str = "http://owncloud.org/ns";

/// Namespace bound to the reserved `xml` prefix.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// An XML namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(pub Cow<'static, str>);

impl Namespace {
    /// `DAV:` namespace.
    pub const DAV: Self = Self(Cow::Borrowed(DAV_NS));

    /// Creates a new namespace from a string.
    #[must_use]
    pub fn new(uri: impl Into<Cow<'static, str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Namespace {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

/// A qualified XML name (namespace + local name).
///
/// Used as the key of a [`PropertySet`](super::PropertySet) and for
/// element queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// The namespace URI.
    pub namespace: Namespace,
    /// The local name.
    pub local_name: Cow<'static, str>,
}

impl QName {
    /// Creates a new qualified name.
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Creates a qualified name from static parts, usable in constants.
    #[must_use]
    pub const fn from_static(namespace: &'static str, local_name: &'static str) -> Self {
        Self {
            namespace: Namespace(Cow::Borrowed(namespace)),
            local_name: Cow::Borrowed(local_name),
        }
    }

    /// Creates a `DAV:` qualified name.
    #[must_use]
    pub fn dav(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::DAV,
            local_name: local_name.into(),
        }
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_str()
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace.as_str(), self.local_name)
    }
}

/// `DAV:` property and element names.
pub mod dav_props {
    use super::{DAV_NS, QName};

    pub const ACL: QName = QName::from_static(DAV_NS, "acl");
    pub const DISPLAYNAME: QName = QName::from_static(DAV_NS, "displayname");
    pub const OWNER: QName = QName::from_static(DAV_NS, "owner");
    pub const RESOURCETYPE: QName = QName::from_static(DAV_NS, "resourcetype");

    pub const HREF: QName = QName::from_static(DAV_NS, "href");
    pub const WRITE: QName = QName::from_static(DAV_NS, "write");

    pub const MULTISTATUS: QName = QName::from_static(DAV_NS, "multistatus");
    pub const RESPONSE: QName = QName::from_static(DAV_NS, "response");
    pub const PROPSTAT: QName = QName::from_static(DAV_NS, "propstat");
    pub const PROP: QName = QName::from_static(DAV_NS, "prop");
    pub const STATUS: QName = QName::from_static(DAV_NS, "status");
}

/// `CalDAV` property and element names.
pub mod caldav_props {
    use super::{CALDAV_NS, QName};

    pub const SUPPORTED_CALENDAR_COMPONENT_SET: QName =
        QName::from_static(CALDAV_NS, "supported-calendar-component-set");
    pub const CALENDAR: QName = QName::from_static(CALDAV_NS, "calendar");
}

/// `CalendarServer` property and element names.
pub mod cs_props {
    use super::{CS_NS, QName};

    pub const ALLOWED_SHARING_MODES: QName = QName::from_static(CS_NS, "allowed-sharing-modes");
    pub const PUBLISH_URL: QName = QName::from_static(CS_NS, "publish-url");
    pub const SOURCE: QName = QName::from_static(CS_NS, "source");
    pub const SUBSCRIBED: QName = QName::from_static(CS_NS, "subscribed");

    pub const CAN_BE_SHARED: &str = "can-be-shared";
    pub const CAN_BE_PUBLISHED: &str = "can-be-published";
}

/// Apple `iCal` property names.
pub mod apple_props {
    use super::{APPLE_ICAL_NS, QName};

    pub const CALENDAR_COLOR: QName = QName::from_static(APPLE_ICAL_NS, "calendar-color");
    pub const CALENDAR_ORDER: QName = QName::from_static(APPLE_ICAL_NS, "calendar-order");
}

/// `ownCloud` property and element names.
pub mod oc_props {
    use super::{OWNCLOUD_NS, QName};

    pub const CALENDAR_ENABLED: QName = QName::from_static(OWNCLOUD_NS, "calendar-enabled");
    pub const INVITE: QName = QName::from_static(OWNCLOUD_NS, "invite");
    pub const ACCESS: QName = QName::from_static(OWNCLOUD_NS, "access");
    pub const READ_WRITE: QName = QName::from_static(OWNCLOUD_NS, "read-write");
}
