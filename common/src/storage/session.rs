use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::storage::types::session::SessionState;

/// In-memory session records, keyed by the caller-supplied session id.
///
/// `put` replaces any prior entry wholesale: only one turn of history is
/// retained per session, and concurrent turns on the same id resolve as
/// last-write-wins. Lifetime is the process lifetime; there is no expiry.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_id: &str) -> Option<SessionState> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()
    }

    pub fn put(&self, session_id: &str, state: SessionState) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id.to_string(), state);
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
