//! In-memory session registry.

use dashmap::DashMap;
use std::sync::Arc;
use tallyboard_shared::types::SessionId;

use super::error::SessionError;
use super::types::FinanceSession;

/// Sharded map of live sessions.
///
/// Requests for different sessions never contend; requests for the same
/// session are serialized by the shard lock. Closures passed to
/// [`Self::with_session`] and [`Self::with_session_mut`] must not await.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<SessionId, FinanceSession>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session and returns its id.
    pub fn create(&self) -> SessionId {
        let session = FinanceSession::new();
        let id = session.id();
        self.sessions.insert(id, session);
        tracing::info!(session_id = %id, "Created session");
        id
    }

    /// Runs `f` against a shared view of the session.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&FinanceSession) -> T,
    ) -> Result<T, SessionError> {
        let session = self.sessions.get(&id).ok_or(SessionError::NotFound(id))?;
        Ok(f(&session))
    }

    /// Runs `f` against an exclusive view of the session.
    pub fn with_session_mut<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut FinanceSession) -> T,
    ) -> Result<T, SessionError> {
        let mut session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound(id))?;
        Ok(f(&mut session))
    }

    /// Removes a session, returning whether it existed.
    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}
