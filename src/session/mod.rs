//! Session ownership and persistence.
//!
//! DESIGN
//! ======
//! Everything that reads or writes persisted credentials goes through one
//! `SessionManager`. The navigation guard and the API client hold an
//! injected reference to it instead of touching `localStorage` on their
//! own, so there is exactly one place where the storage keys and their
//! lifecycle are defined.

pub mod manager;
pub mod storage;

pub use manager::{Session, SessionManager};
pub use storage::{BrowserStorage, MemoryStorage, SessionStorage};
