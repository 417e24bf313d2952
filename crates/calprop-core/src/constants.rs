//! Principal path and share prefix constants shared across crates.

/// Path segment that precedes the user id in an owner principal href.
pub const PRINCIPAL_USERS_PATH: &str = "/remote.php/dav/principals/users/";

/// Prefix of principal references inside share (invite) entries.
pub const SHARE_PRINCIPAL_PREFIX: &str = "principal:principals/";

pub const SHARE_USER_PREFIX: &str = const_str::concat!(SHARE_PRINCIPAL_PREFIX, "users/");
pub const SHARE_GROUP_PREFIX: &str = const_str::concat!(SHARE_PRINCIPAL_PREFIX, "groups/");

/// Path component appended to the current location to build a public link.
pub const PUBLIC_ROUTE_COMPONENT: &str = "public";
pub const PUBLIC_ROUTE_PREFIX: &str = const_str::concat!("/", PUBLIC_ROUTE_COMPONENT, "/");

/// Color used when neither the server nor the configuration provide one.
pub const DEFAULT_CALENDAR_COLOR: &str = "#1d2d44";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_prefixes() {
        assert_eq!(SHARE_USER_PREFIX, "principal:principals/users/");
        assert_eq!(SHARE_GROUP_PREFIX, "principal:principals/groups/");
    }

    #[test]
    fn public_prefix() {
        assert_eq!(PUBLIC_ROUTE_PREFIX, "/public/");
        assert_eq!(PRINCIPAL_USERS_PATH.len(), 33);
    }
}
