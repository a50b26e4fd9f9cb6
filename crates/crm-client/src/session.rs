//! Session stores
//!
//! Client-side persistence of the single [`AuthSession`]: a JSON file for
//! real consoles, an in-memory cell for tests and embedding.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use parking_lot::RwLock;
use tracing::warn;

use crm_core::domain::AuthSession;
use crm_core::error::DomainError;
use crm_core::repositories::SessionStore;

/// Stores the session as one JSON document on disk.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<AuthSession> {
        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(session) => Some(session),
            Err(e) => {
                // Unreadable state reads as signed-out rather than failing
                warn!("Stored session is unreadable, ignoring it: {}", e);
                None
            }
        }
    }

    fn save(&self, session: &AuthSession) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| DomainError::Storage(e.to_string()))?;
            }
        }
        let json =
            serde_json::to_string_pretty(session).map_err(|e| DomainError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                warn!("Failed to remove session file: {}", e);
            }
        }
    }
}

/// Ephemeral store backed by a shared cell.
#[derive(Default)]
pub struct MemorySessionStore {
    cell: RwLock<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<AuthSession> {
        self.cell.read().clone()
    }

    fn save(&self, session: &AuthSession) -> Result<(), DomainError> {
        *self.cell.write() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.cell.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            tenant_id: "t-1".into(),
            branch_id: "b-1".into(),
            group_id: "g-1".into(),
            position_id: "p-1".into(),
            role_ids: vec!["ADMIN".into()],
            permissions: vec!["MENU:MENUS:READ".into()],
            user_id: "admin".into(),
            username: "Administrator".into(),
            access_token: "acc".into(),
            refresh_token: "ref".into(),
        }
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));

        assert!(store.load().is_none());
        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), session());

        store.clear();
        assert!(store.load().is_none());
        // Clearing twice stays silent
        store.clear();
    }

    #[test]
    fn test_corrupt_file_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested/state/session.json"));
        store.save(&session()).unwrap();
        assert!(store.load().is_some());
    }

    #[test]
    fn test_memory_store_overwrites_in_place() {
        let store = MemorySessionStore::new();
        store.save(&session()).unwrap();

        let mut rotated = session();
        rotated.access_token = "acc-2".into();
        store.save(&rotated).unwrap();

        assert_eq!(store.load().unwrap().access_token, "acc-2");
        store.clear();
        assert!(store.load().is_none());
    }
}
