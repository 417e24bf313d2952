//! Multistatus response types.

use super::href::Href;
use super::property::PropertySet;

/// A parsed `DAV:multistatus` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multistatus {
    pub responses: Vec<PropstatResponse>,
}

/// One `DAV:response` of a multistatus document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropstatResponse {
    pub href: Href,
    pub propstats: Vec<Propstat>,
}

impl PropstatResponse {
    /// Returns the property set of the first propstat.
    #[must_use]
    pub fn properties(&self) -> Option<&PropertySet> {
        self.propstats.first().map(|propstat| &propstat.properties)
    }
}

/// One `DAV:propstat` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Propstat {
    pub status: Option<Status>,
    pub properties: PropertySet,
}

/// An HTTP status line such as `HTTP/1.1 200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status(pub String);

impl Status {
    /// Returns the numeric status code, if the line is well formed.
    #[must_use]
    pub fn code(&self) -> Option<u16> {
        self.0.split_whitespace().nth(1)?.parse().ok()
    }

    /// Returns whether the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code().is_some_and(|code| (200..300).contains(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code() {
        assert_eq!(Status("HTTP/1.1 200 OK".to_owned()).code(), Some(200));
        assert!(Status("HTTP/1.1 207 Multi-Status".to_owned()).is_success());
        assert!(!Status("HTTP/1.1 404 Not Found".to_owned()).is_success());
        assert_eq!(Status("garbage".to_owned()).code(), None);
    }

    #[test]
    fn properties_from_first_propstat() {
        let response = PropstatResponse {
            href: Href::new("/calendars/alice/work/"),
            propstats: vec![],
        };
        assert!(response.properties().is_none());
    }
}
