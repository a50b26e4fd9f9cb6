//! Session store port

use crate::domain::AuthSession;
use crate::error::DomainError;

/// Client-side persistence of the single [`AuthSession`].
///
/// The store is the sole source of truth for "is a user signed in"; the
/// refresh flow read-modify-writes it atomically from the caller's view.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Stored session, if any. A corrupt payload reads as signed-out.
    fn load(&self) -> Option<AuthSession>;

    fn save(&self, session: &AuthSession) -> Result<(), DomainError>;

    /// Remove the session. Best-effort and infallible: an explicit logout
    /// must never leave a session the UI still treats as valid.
    fn clear(&self);
}
