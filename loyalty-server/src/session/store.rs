//! Session store
//!
//! One entry per client in a `DashMap`. Each entry owns a cancellation token
//! for the simulated operations running on its behalf; logout and eviction
//! cancel it and install a fresh one.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use shared::{AppError, AppResult, ErrorCode};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::controller::{Session, SessionAction};
use super::latency::SimulatedOp;

struct SessionEntry {
    session: Session,
    token: CancellationToken,
    last_seen: Instant,
}

impl SessionEntry {
    fn new(session: Session) -> Self {
        Self {
            session,
            token: CancellationToken::new(),
            last_seen: Instant::now(),
        }
    }
}

/// Concurrent session map
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions_count", &self.sessions.len())
            .field("idle_timeout", &self.idle_timeout)
            .finish()
    }
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::new(ErrorCode::SessionNotFound).with_detail("session_id", id.to_string())
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            idle_timeout,
        }
    }

    /// Register a new session and return its handle
    pub fn create(&self, session: Session) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, SessionEntry::new(session));
        tracing::debug!(session_id = %id, "Session created");
        id
    }

    /// Snapshot of a session
    pub fn get(&self, id: Uuid) -> AppResult<Session> {
        let mut entry = self.sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        entry.last_seen = Instant::now();
        Ok(entry.session.clone())
    }

    /// Run one transition; the stored session is replaced only on success
    pub fn apply(&self, id: Uuid, action: SessionAction) -> AppResult<Session> {
        let mut entry = self.sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        let next = entry.session.apply(action)?;
        entry.session = next.clone();
        entry.last_seen = Instant::now();
        Ok(next)
    }

    /// Log out and cancel everything still running for this session
    pub fn logout(&self, id: Uuid) -> AppResult<Session> {
        let mut entry = self.sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        let next = entry.session.apply(SessionAction::Logout)?;
        entry.token.cancel();
        entry.token = CancellationToken::new();
        entry.session = next.clone();
        entry.last_seen = Instant::now();
        Ok(next)
    }

    /// Mark `op` pending and hand back a guard carrying the session's token
    pub fn begin(&self, id: Uuid, op: SimulatedOp) -> AppResult<PendingGuard> {
        let mut entry = self.sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        let next = entry.session.apply(SessionAction::Begin(op))?;
        entry.session = next;
        entry.last_seen = Instant::now();
        Ok(PendingGuard {
            store: self.clone(),
            id,
            op,
            token: entry.token.clone(),
            done: false,
        })
    }

    /// Clear the pending flag and apply `action` together, unless the
    /// session was torn down while the operation ran.
    fn complete(
        &self,
        id: Uuid,
        op: SimulatedOp,
        token: &CancellationToken,
        action: Option<SessionAction>,
    ) -> AppResult<Session> {
        let mut entry = self.sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        if token.is_cancelled() {
            return Err(AppError::cancelled(op.as_str()));
        }
        let mut next = entry.session.apply(SessionAction::Complete(op))?;
        if let Some(action) = action {
            next = next.apply(action)?;
        }
        entry.session = next.clone();
        entry.last_seen = Instant::now();
        Ok(next)
    }

    fn clear_pending(&self, id: Uuid, op: SimulatedOp) {
        if let Some(mut entry) = self.sessions.get_mut(&id)
            && let Ok(next) = entry.session.apply(SessionAction::Complete(op))
        {
            entry.session = next;
        }
    }

    /// Drop sessions idle longer than the timeout, cancelling their work
    pub fn sweep_idle(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|id, entry| {
            let keep = now.duration_since(entry.last_seen) < self.idle_timeout;
            if !keep {
                entry.token.cancel();
                tracing::debug!(session_id = %id, "Idle session evicted");
            }
            keep
        });
        before.saturating_sub(self.sessions.len())
    }

    /// Cancel every session's pending work (shutdown)
    pub fn cancel_all(&self) {
        for entry in self.sessions.iter() {
            entry.token.cancel();
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// A simulated operation in flight
///
/// Dropping the guard without committing (error, client gone) clears the
/// pending flag.
pub struct PendingGuard {
    store: SessionStore,
    id: Uuid,
    op: SimulatedOp,
    token: CancellationToken,
    done: bool,
}

impl PendingGuard {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn op(&self) -> SimulatedOp {
        self.op
    }

    /// Finish without changing anything else
    pub fn finish(mut self) -> AppResult<Session> {
        self.done = true;
        self.store.complete(self.id, self.op, &self.token, None)
    }

    /// Finish and apply `action` in the same write
    pub fn commit(mut self, action: SessionAction) -> AppResult<Session> {
        self.done = true;
        let result = self
            .store
            .complete(self.id, self.op, &self.token, Some(action));
        if result.is_err() {
            self.store.clear_pending(self.id, self.op);
        }
        result
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        if !self.done {
            self.store.clear_pending(self.id, self.op);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::navigation::View;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(3600))
    }

    #[test]
    fn test_unknown_session() {
        let err = store().get(Uuid::new_v4()).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn test_failed_action_keeps_session() {
        let store = store();
        let id = store.create(Session::anonymous("b1"));
        assert!(
            store
                .apply(id, SessionAction::Navigate(View::Wallet))
                .is_err()
        );
        assert_eq!(store.get(id).unwrap(), Session::anonymous("b1"));
    }

    #[test]
    fn test_guard_drop_clears_pending() {
        let store = store();
        let id = store.create(Session::anonymous("b1"));
        {
            let _guard = store.begin(id, SimulatedOp::OtpSend).unwrap();
            assert!(store.get(id).unwrap().pending.is_some());
        }
        assert!(store.get(id).unwrap().pending.is_none());
    }

    #[test]
    fn test_logout_cancels_in_flight_work() {
        let store = store();
        let id = store.create(Session::anonymous("b1"));
        let guard = store.begin(id, SimulatedOp::CampaignSend).unwrap();
        store.logout(id).unwrap();
        assert!(guard.token().is_cancelled());
        let err = guard.finish().unwrap_err();
        assert_eq!(err.code, ErrorCode::OperationCancelled);

        // the session keeps working with a fresh token
        let guard = store.begin(id, SimulatedOp::OtpSend).unwrap();
        assert!(!guard.token().is_cancelled());
        guard.finish().unwrap();
    }

    #[test]
    fn test_sweep_idle() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.create(Session::anonymous("b1"));
        let guard = store.begin(id, SimulatedOp::Payouts).unwrap();
        assert_eq!(store.sweep_idle(), 1);
        assert!(store.is_empty());
        assert!(guard.token().is_cancelled());
    }
}
