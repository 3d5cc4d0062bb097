//! The single owner of the authenticated session.
//!
//! Token and cached profile live in memory and in durable storage under
//! the keys below. Mutations persist first, then update the in-memory
//! snapshot and notify `on_change` listeners. The token is always read
//! back from storage, never from a captured copy, so a token set after a
//! reader was constructed is still honored.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::{Arc, RwLock};

use crate::net::types::UserProfile;
use crate::session::storage::SessionStorage;

pub const TOKEN_KEY: &str = "user_token";
pub const NAME_KEY: &str = "user_name";
pub const EMAIL_KEY: &str = "user_email";
pub const AVATAR_KEY: &str = "user_avatar";

/// Every storage key the session manager owns. Logout removes exactly
/// these and nothing else, so unrelated data under the same storage
/// mechanism survives.
pub const OWNED_KEYS: [&str; 4] = [TOKEN_KEY, NAME_KEY, EMAIL_KEY, AVATAR_KEY];

/// A point-in-time view of the session: token plus cached profile.
///
/// An absent token means unauthenticated. A present token is only a claim;
/// the backend decides validity on the next request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: UserProfile,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

type Listener = Box<dyn Fn(&Session) + Send + Sync>;

/// Owns the session state and its persistence.
///
/// Cheap to clone; all clones share the same state and storage backend.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Inner>,
}

struct Inner {
    storage: Arc<dyn SessionStorage>,
    state: RwLock<Session>,
    listeners: RwLock<Vec<Listener>>,
}

impl SessionManager {
    /// Build a manager over the given backend, hydrating the in-memory
    /// snapshot from whatever the backend already holds.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let state = Session {
            token: storage.get(TOKEN_KEY),
            user: UserProfile {
                name: storage.get(NAME_KEY).unwrap_or_default(),
                email: storage.get(EMAIL_KEY).unwrap_or_default(),
                avatar: storage.get(AVATAR_KEY),
            },
        };
        Self {
            inner: Arc::new(Inner {
                storage,
                state: RwLock::new(state),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Manager backed by browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(crate::session::storage::BrowserStorage))
    }

    /// Fresh read of the persisted token. The guard and the API client
    /// call this immediately before every decision/dispatch.
    pub fn token(&self) -> Option<String> {
        self.inner.storage.get(TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Clone of the current in-memory session.
    pub fn snapshot(&self) -> Session {
        self.inner
            .state
            .read()
            .expect("session lock poisoned")
            .clone()
    }

    /// Store a freshly issued token. No shape validation; subsequent
    /// requests through the API client become authorized.
    pub fn set_token(&self, token: &str) {
        self.inner.storage.set(TOKEN_KEY, token);
        self.mutate(|session| session.token = Some(token.to_owned()));
    }

    /// Overwrite all three profile fields at once and persist them.
    ///
    /// An absent avatar removes the stored avatar key rather than leaving
    /// a stale value behind.
    pub fn apply_profile(&self, profile: &UserProfile) {
        self.inner.storage.set(NAME_KEY, &profile.name);
        self.inner.storage.set(EMAIL_KEY, &profile.email);
        match &profile.avatar {
            Some(url) => self.inner.storage.set(AVATAR_KEY, url),
            None => self.inner.storage.remove(AVATAR_KEY),
        }
        self.mutate(|session| session.user = profile.clone());
    }

    /// Drop the token and profile, removing only the keys this manager
    /// owns from durable storage.
    pub fn logout(&self) {
        for key in OWNED_KEYS {
            self.inner.storage.remove(key);
        }
        self.mutate(|session| *session = Session::default());
    }

    /// Register a listener invoked with a snapshot after every mutation.
    pub fn on_change(&self, listener: impl Fn(&Session) + Send + Sync + 'static) {
        self.inner
            .listeners
            .write()
            .expect("session lock poisoned")
            .push(Box::new(listener));
    }

    fn mutate(&self, apply: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut state = self.inner.state.write().expect("session lock poisoned");
            apply(&mut state);
            state.clone()
        };
        for listener in self
            .inner
            .listeners
            .read()
            .expect("session lock poisoned")
            .iter()
        {
            listener(&snapshot);
        }
    }
}
