//! Caller context that descriptors are resolved against.

use calprop_core::config::ContextConfig;
use calprop_core::constants::DEFAULT_CALENDAR_COLOR;
use calprop_core::error::CoreError;

use crate::error::ServiceError;

/// Who is asking and where the client is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    /// Principal URL matched against ACL hrefs.
    pub principal_url: String,
    /// User id matched against the resolved owner.
    pub current_user: Option<String>,
    pub public_mode: bool,
    /// Color used when the calendar carries none.
    pub default_color: String,
    /// Address the client is currently served from, used for public links.
    pub location: String,
}

impl ResolveContext {
    /// Creates a private-mode context for `principal_url` with no current user.
    #[must_use]
    pub fn new(principal_url: impl Into<String>) -> Self {
        Self {
            principal_url: principal_url.into(),
            current_user: None,
            public_mode: false,
            default_color: DEFAULT_CALENDAR_COLOR.to_owned(),
            location: String::new(),
        }
    }

    #[must_use]
    pub fn with_current_user(mut self, user: impl Into<String>) -> Self {
        self.current_user = Some(user.into());
        self
    }

    #[must_use]
    pub fn with_public_mode(mut self, public_mode: bool) -> Self {
        self.public_mode = public_mode;
        self
    }

    #[must_use]
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Returns whether `owner` is known and equal to the current user.
    #[must_use]
    pub fn is_current_user(&self, owner: Option<&str>) -> bool {
        matches!(
            (self.current_user.as_deref(), owner),
            (Some(user), Some(owner)) if user == owner
        )
    }
}

impl TryFrom<ContextConfig> for ResolveContext {
    type Error = ServiceError;

    fn try_from(config: ContextConfig) -> Result<Self, Self::Error> {
        if config.default_color.is_empty() {
            return Err(CoreError::ConfigError(
                "context.default_color must not be empty".to_owned(),
            )
            .into());
        }

        Ok(Self {
            principal_url: config.principal_url,
            current_user: config.current_user.filter(|user| !user.is_empty()),
            public_mode: config.public_mode,
            default_color: config.default_color,
            location: config.location,
        })
    }
}
