//! Conversion of multistatus responses into calendar resources.

use calprop_rfc::error::RfcError;
use calprop_rfc::rfc::dav::core::{Href, Multistatus, PropertySet, PropstatResponse};
use calprop_rfc::rfc::dav::parse::parse_multistatus;
use serde::Serialize;

use super::context::ResolveContext;
use super::descriptor::{CalendarDescriptor, WebcalDescriptor};
use super::kind::ResourceKind;
use super::skeleton::{skeleton, webcal_skeleton};
use crate::error::{ServiceError, ServiceResult};

/// A calendar collection and its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarResource {
    pub href: Href,
    pub descriptor: CalendarDescriptor,
}

/// A webcal subscription and its descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebcalResource {
    pub href: Href,
    pub descriptor: WebcalDescriptor,
}

/// A resource recognised by [`ResourceKind::classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DavResource {
    Calendar(CalendarResource),
    Webcal(WebcalResource),
}

impl DavResource {
    #[must_use]
    pub fn href(&self) -> &Href {
        match self {
            Self::Calendar(calendar) => &calendar.href,
            Self::Webcal(webcal) => &webcal.href,
        }
    }
}

/// Builds calendar resources from `PROPFIND` responses for one context.
#[derive(Debug, Clone)]
pub struct CalendarFactory {
    context: ResolveContext,
}

impl CalendarFactory {
    #[must_use]
    pub fn new(context: ResolveContext) -> Self {
        Self { context }
    }

    /// ## Summary
    /// Builds a calendar from the first propstat of `response`.
    ///
    /// ## Errors
    /// Returns [`ServiceError::MissingPropstat`] if the response has no propstat.
    pub fn calendar(&self, response: &PropstatResponse) -> ServiceResult<CalendarResource> {
        let props = properties(response)?;

        Ok(CalendarResource {
            href: response.href.clone(),
            descriptor: skeleton(props, &self.context),
        })
    }

    /// ## Summary
    /// Builds a webcal subscription from the first propstat of `response`.
    ///
    /// ## Errors
    /// Returns [`ServiceError::MissingPropstat`] if the response has no propstat.
    pub fn webcal(&self, response: &PropstatResponse) -> ServiceResult<WebcalResource> {
        let props = properties(response)?;

        Ok(WebcalResource {
            href: response.href.clone(),
            descriptor: webcal_skeleton(props, &self.context),
        })
    }

    /// ## Summary
    /// Classifies `response` and builds the matching resource.
    ///
    /// Returns `None` for responses that are neither calendars nor
    /// subscriptions, such as the calendar home itself.
    ///
    /// ## Errors
    /// Returns [`ServiceError::MissingPropstat`] if the response has no propstat.
    pub fn resource(&self, response: &PropstatResponse) -> ServiceResult<Option<DavResource>> {
        match ResourceKind::classify(properties(response)?) {
            ResourceKind::Calendar => Ok(Some(DavResource::Calendar(self.calendar(response)?))),
            ResourceKind::Webcal => Ok(Some(DavResource::Webcal(self.webcal(response)?))),
            ResourceKind::Other => {
                tracing::debug!(href = %response.href, "Skipping non-calendar resource");
                Ok(None)
            }
        }
    }

    /// ## Summary
    /// Builds every calendar and subscription of a multistatus document, in
    /// document order.
    ///
    /// ## Errors
    /// Returns an error if any response has no propstat.
    pub fn resources(&self, multistatus: &Multistatus) -> ServiceResult<Vec<DavResource>> {
        multistatus
            .responses
            .iter()
            .filter_map(|response| self.resource(response).transpose())
            .collect()
    }

    /// ## Summary
    /// Parses a multistatus body and builds its calendars and subscriptions.
    ///
    /// ## Errors
    /// Returns an error if the body is not a valid multistatus document or a
    /// response has no propstat.
    #[tracing::instrument(skip(self, xml), fields(xml_len = xml.len()))]
    pub fn parse(&self, xml: &[u8]) -> ServiceResult<Vec<DavResource>> {
        let multistatus = parse_multistatus(xml).map_err(RfcError::from)?;
        let resources = self.resources(&multistatus)?;

        tracing::info!(
            responses = multistatus.responses.len(),
            resources = resources.len(),
            "Resolved calendar resources"
        );

        Ok(resources)
    }
}

fn properties(response: &PropstatResponse) -> ServiceResult<&PropertySet> {
    let props = response
        .properties()
        .ok_or_else(|| ServiceError::MissingPropstat(response.href.to_string()))?;

    let status = response
        .propstats
        .first()
        .and_then(|propstat| propstat.status.as_ref());

    if let Some(status) = status.filter(|status| !status.is_success()) {
        tracing::warn!(
            href = %response.href,
            status = %status.0,
            "First propstat is not successful"
        );
    }

    Ok(props)
}

#[cfg(test)]
mod tests {
    use calprop_rfc::rfc::dav::core::{Element, Propstat, Status, caldav_props, dav_props};

    use super::*;

    fn response(href: &str, propstats: Vec<Propstat>) -> PropstatResponse {
        PropstatResponse {
            href: Href::new(href),
            propstats,
        }
    }

    fn calendar_propstat() -> Propstat {
        Propstat {
            status: Some(Status("HTTP/1.1 200 OK".to_owned())),
            properties: PropertySet::new()
                .with(dav_props::RESOURCETYPE, vec![Element::new(caldav_props::CALENDAR)]),
        }
    }

    fn factory() -> CalendarFactory {
        CalendarFactory::new(ResolveContext::new("/remote.php/dav/principals/users/alice/"))
    }

    #[test]
    fn missing_propstat_is_an_error() {
        let err = factory()
            .calendar(&response("/calendars/alice/personal/", vec![]))
            .unwrap_err();
        assert!(
            matches!(err, ServiceError::MissingPropstat(href) if href == "/calendars/alice/personal/")
        );
    }

    #[test]
    fn resource_dispatches_on_kind() {
        let factory = factory();

        let calendar = factory
            .resource(&response("/calendars/alice/personal/", vec![calendar_propstat()]))
            .unwrap();
        assert!(matches!(calendar, Some(DavResource::Calendar(_))));

        let home = factory
            .resource(&response("/calendars/alice/", vec![Propstat::default()]))
            .unwrap();
        assert_eq!(home, None);
    }

    #[test]
    fn only_first_propstat_is_used() {
        let mut second = calendar_propstat();
        second.properties.insert(dav_props::DISPLAYNAME, "Second");
        let first = Propstat {
            status: Some(Status("HTTP/1.1 404 Not Found".to_owned())),
            properties: PropertySet::new().with(dav_props::DISPLAYNAME, "First"),
        };

        let calendar = factory()
            .calendar(&response("/calendars/alice/personal/", vec![first, second]))
            .unwrap();
        assert_eq!(calendar.descriptor.displayname.as_deref(), Some("First"));
    }

    #[test]
    fn invalid_body_is_an_rfc_error() {
        let err = factory().parse(b"<d:multistatus xmlns:d=\"DAV:\">").unwrap_err();
        assert!(matches!(err, ServiceError::RfcError(_)));
    }
}
