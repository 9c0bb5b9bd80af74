//! Route guard decisions.

/// Paths reachable without an authenticated session.
const PUBLIC_PATHS: &[&str] = &["/login"];

/// Outcome of a navigation guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Navigation may proceed.
    Allow,
    /// Send the user to the login screen first.
    RedirectToLogin,
}

/// Decides whether navigating to `path` is allowed.
///
/// Public paths are always allowed; everything else requires an
/// authenticated session.
#[must_use]
pub fn route_decision(path: &str, authenticated: bool) -> RouteDecision {
    if PUBLIC_PATHS.contains(&path) || authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectToLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_is_public() {
        assert_eq!(route_decision("/login", false), RouteDecision::Allow);
    }

    #[test]
    fn test_protected_path_requires_session() {
        assert_eq!(
            route_decision("/hotels", false),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(route_decision("/hotels", true), RouteDecision::Allow);
    }
}
