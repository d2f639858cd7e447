//! # Auth gate
//!
//! The routing table and the rule that guards it, kept free of Dioxus so it
//! can be checked directly. [`crate::Route`] mirrors [`Location`] one-to-one.
//!
//! | Path | Location | Needs token |
//! |------|----------|-------------|
//! | `/login` | [`Location::Login`] | no |
//! | `/register` | [`Location::Register`] | no |
//! | `/notes` | [`Location::Notes`] | yes |
//! | anything else | - | redirect to `/login` |
//!
//! Only the presence of a token is checked, never its validity or expiry.

/// A navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Login,
    Register,
    Notes,
}

impl Location {
    /// Map a path to a view. A trailing slash, query or fragment is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/notes" => Some(Self::Notes),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Notes => "/notes",
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Self::Notes)
    }
}

/// What to do with a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render(Location),
    Redirect(Location),
}

impl GateDecision {
    /// Where the user ends up.
    pub fn location(self) -> Location {
        match self {
            Self::Render(location) | Self::Redirect(location) => location,
        }
    }
}

/// Decide whether `requested` may render given whether a token is present.
pub fn check(requested: Option<Location>, has_token: bool) -> GateDecision {
    match requested {
        Some(location) if location.requires_session() && !has_token => {
            GateDecision::Redirect(Location::Login)
        }
        Some(location) => GateDecision::Render(location),
        None => GateDecision::Redirect(Location::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_roundtrip() {
        for location in [Location::Login, Location::Register, Location::Notes] {
            assert_eq!(Location::from_path(location.path()), Some(location));
        }
    }

    #[test]
    fn test_path_normalisation() {
        assert_eq!(Location::from_path("/notes/"), Some(Location::Notes));
        assert_eq!(Location::from_path("/login?next=/notes"), Some(Location::Login));
        assert_eq!(Location::from_path("/register#top"), Some(Location::Register));
        assert_eq!(Location::from_path("/"), None);
        assert_eq!(Location::from_path(""), None);
        assert_eq!(Location::from_path("/notes/3"), None);
        assert_eq!(Location::from_path("/Notes"), None);
    }

    #[test]
    fn test_notes_without_token_redirects() {
        assert_eq!(
            check(Some(Location::Notes), false),
            GateDecision::Redirect(Location::Login)
        );
        assert_eq!(
            check(Some(Location::Notes), true),
            GateDecision::Render(Location::Notes)
        );
    }

    #[test]
    fn test_public_views_always_render() {
        for has_token in [false, true] {
            assert_eq!(
                check(Some(Location::Login), has_token),
                GateDecision::Render(Location::Login)
            );
            assert_eq!(
                check(Some(Location::Register), has_token),
                GateDecision::Render(Location::Register)
            );
        }
    }

    #[test]
    fn test_unknown_paths_redirect_to_login() {
        for path in ["/", "/settings", "/notes/1/edit", "/../etc"] {
            for has_token in [false, true] {
                let decision = check(Location::from_path(path), has_token);
                assert_eq!(decision, GateDecision::Redirect(Location::Login));
                assert_eq!(decision.location().path(), "/login");
            }
        }
    }

    #[test]
    fn test_gate_is_idempotent_after_logout() {
        // Logged in, then logged out: every later visit to /notes is turned away
        assert_eq!(check(Some(Location::Notes), true).location(), Location::Notes);
        for _ in 0..3 {
            assert_eq!(
                check(Some(Location::Notes), false),
                GateDecision::Redirect(Location::Login)
            );
        }
    }
}
