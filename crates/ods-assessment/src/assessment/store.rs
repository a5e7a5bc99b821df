use super::catalog::AssessmentCatalog;
use super::session::AssessmentSession;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

pub const DEFAULT_SESSION_FILE: &str = "ods_assessment_state.json";

/// Keeps one session document across restarts.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<AssessmentSession>, StoreError>;
    fn save(&self, session: &AssessmentSession) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;

    /// Falls back to a fresh session when nothing usable is stored for
    /// `catalog`.
    fn load_or_new(&self, catalog: &AssessmentCatalog) -> AssessmentSession {
        match self.load() {
            Ok(Some(session)) => match session.validate(catalog) {
                Ok(()) => session,
                Err(err) => {
                    warn!(error = %err, "discarding stale assessment state");
                    AssessmentSession::new()
                }
            },
            Ok(None) => AssessmentSession::new(),
            Err(err) => {
                warn!(error = %err, "discarding stored assessment state");
                AssessmentSession::new()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored session is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("session could not be encoded: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("session store i/o failed: {0}")]
    Io(#[source] std::io::Error),
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slot: Mutex<Option<AssessmentSession>>,
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<AssessmentSession>, StoreError> {
        let guard = self
            .slot
            .lock()
            .map_err(|_| StoreError::Unavailable("session mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &AssessmentSession) -> Result<(), StoreError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| StoreError::Unavailable("session mutex poisoned".to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| StoreError::Unavailable("session mutex poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Stores the session as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<Option<AssessmentSession>, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };
        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(StoreError::Corrupt)
    }

    fn save(&self, session: &AssessmentSession) -> Result<(), StoreError> {
        let raw = serde_json::to_vec_pretty(session).map_err(StoreError::Serialize)?;
        fs::write(&self.path, raw).map_err(StoreError::Io)
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_store_round_trips() {
        let store = InMemorySessionStore::default();
        assert!(store.load().expect("load").is_none());

        let mut session = AssessmentSession::new();
        session.start().expect("start");
        store.save(&session).expect("save");
        assert_eq!(store.load().expect("load"), Some(session));

        store.clear().expect("clear");
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn file_store_persists_and_clears() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileSessionStore::new(dir.path().join(DEFAULT_SESSION_FILE));
        assert!(store.load().expect("missing file is empty").is_none());

        let mut session = AssessmentSession::new();
        session.start().expect("start");
        store.save(&session).expect("save");

        let reopened = JsonFileSessionStore::new(store.path());
        assert_eq!(reopened.load().expect("load"), Some(session));

        reopened.clear().expect("clear");
        reopened.clear().expect("clearing twice is fine");
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_falls_back_to_a_new_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_SESSION_FILE);
        fs::write(&path, b"{not json").expect("write");

        let store = JsonFileSessionStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
        let catalog = AssessmentCatalog::standard();
        assert_eq!(store.load_or_new(&catalog), AssessmentSession::new());
    }

    #[test]
    fn out_of_range_section_falls_back_to_a_new_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_SESSION_FILE);
        let document = serde_json::json!({
            "step": "assessment",
            "company": {
                "size": "Pequeña (10-49)",
                "sector": "I. Hostelería",
                "location": "El Hierro",
                "role": "Otro"
            },
            "answers": { "g1": 3.0 },
            "current_section_index": 7
        });
        fs::write(&path, document.to_string()).expect("write");

        let store = JsonFileSessionStore::new(&path);
        assert!(store.load().expect("valid JSON").is_some());
        let catalog = AssessmentCatalog::standard();
        assert_eq!(store.load_or_new(&catalog), AssessmentSession::new());
    }

    #[test]
    fn encoding_failures_are_not_reported_as_corruption() {
        let source = serde_json::from_str::<u8>("\"x\"").expect_err("not a number");
        let message = StoreError::Serialize(source).to_string();
        assert!(message.starts_with("session could not be encoded"));
        assert!(!message.contains("not valid JSON"));
    }
}
