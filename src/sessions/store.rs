use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use super::models::form_session::FormSession;

/// In memory sessions. Guards are never held across an await.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, FormSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> FormSession {
        let session = FormSession::new();

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session.id.clone(), session.clone());

        session
    }

    pub fn get(&self, id: &str) -> Option<FormSession> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Runs `f` against the session under the write lock, `None` if it does not exist.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut FormSession) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        sessions.get_mut(id).map(f)
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

    /// Drops sessions last touched before `cutoff`, aborting their generations.
    pub fn evict_stale(&self, cutoff: u64) -> usize {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();

        sessions.retain(|_, session| {
            if session.updated_at >= cutoff {
                return true;
            }

            if let Some(abort_handle) = session.detach_task() {
                abort_handle.abort();
            }

            false
        });

        before - sessions.len()
    }
}
