//! Normalized descriptor types produced by the resolvers.

use serde::Serialize;

/// Which calendar component types a collection accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComponentSupport {
    pub vevent: bool,
    pub vjournal: bool,
    pub vtodo: bool,
}

/// One principal a calendar is shared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareEntry {
    pub id: String,
    /// Currently always equal to `id`; no directory lookup is done.
    pub displayname: String,
    pub writable: bool,
}

impl ShareEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, writable: bool) -> Self {
        let id = id.into();
        Self {
            displayname: id.clone(),
            id,
            writable,
        }
    }
}

/// Share entries split by principal type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Shares {
    pub users: Vec<ShareEntry>,
    pub groups: Vec<ShareEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SharingCapability {
    pub shareable: bool,
    pub publishable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishInfo {
    pub published: bool,
    /// Server-side publish URL.
    pub publishurl: Option<String>,
    /// Client-facing public link.
    pub publicurl: Option<String>,
}

/// Client-side view of a calendar collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDescriptor {
    pub color: String,
    pub displayname: Option<String>,
    pub components: ComponentSupport,
    pub order: Option<String>,
    pub writable: bool,
    pub owner: Option<String>,
    pub enabled: bool,
    pub shares: Shares,
    pub shareable: bool,
    pub publishable: bool,
    pub published: bool,
    pub publishurl: Option<String>,
    pub publicurl: Option<String>,
    /// Whether the current user may edit the calendar's own properties.
    pub writable_properties: bool,
}

/// Client-side view of a webcal subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebcalDescriptor {
    #[serde(flatten)]
    pub calendar: CalendarDescriptor,
    /// Subscription source URL.
    pub href: Option<String>,
}
