//! Route metadata and the navigation guard decision.
//!
//! Every path maps to a `RouteMeta`. Routes without an explicit public
//! marking are protected: the default is fail-closed, so forgetting to
//! label a new route can never expose it. The guard itself is a pure
//! function over the metadata and token presence; `check_navigation`
//! binds it to the injected session manager.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::session::SessionManager;

/// Where the guard sends unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

/// Static per-route flags. `is_public` feeds the guard; `hide_chrome` is
/// a UI hint only and never influences the guard decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub is_public: bool,
    pub hide_chrome: bool,
}

/// Metadata for a path. Unknown paths get the protected default.
pub fn route_meta(path: &str) -> RouteMeta {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    match path {
        "/login" | "/register" => RouteMeta {
            is_public: true,
            hide_chrome: true,
        },
        _ => RouteMeta::default(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// The guard predicate. A present token counts as authenticated even if
/// it is stale; only the backend can tell, on the next request.
pub fn guard(meta: RouteMeta, authenticated: bool) -> GuardOutcome {
    if !meta.is_public && !authenticated {
        GuardOutcome::Redirect(LOGIN_PATH)
    } else {
        GuardOutcome::Allow
    }
}

/// Decide a transition to `path` against the current stored token.
pub fn check_navigation(session: &SessionManager, path: &str) -> GuardOutcome {
    guard(route_meta(path), session.is_authenticated())
}
