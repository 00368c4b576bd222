use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::{
    error::{Error, Result},
    types::Credential,
    utils,
};

/// Seconds a session may wait for its OAuth callback.
pub const PENDING_TTL_SECS: u64 = 600;
pub const DEFAULT_MAX_PENDING: usize = 10_000;

#[derive(Debug, Clone)]
pub enum Session {
    /// Redirected to the provider, callback not seen yet.
    Pending,
    Authorized(Credential),
}

#[derive(Debug)]
struct Entry {
    session: Session,
    created_at: u64,
    seq: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<String, Entry>,
    next_seq: u64,
}

impl Sessions {
    /// Drops pending sessions past their TTL and authorized ones whose
    /// credential expired.
    fn prune(&mut self, now: u64) {
        self.entries.retain(|_, entry| match &entry.session {
            Session::Pending => now < entry.created_at.saturating_add(PENDING_TTL_SECS),
            Session::Authorized(credential) => !credential.is_expired(now),
        });
    }

    /// Evicts the oldest pending sessions until fewer than `max` remain.
    fn evict_pending(&mut self, max: usize) {
        let mut pending: Vec<(u64, String)> = self
            .entries
            .iter()
            .filter(|(_, e)| matches!(e.session, Session::Pending))
            .map(|(id, e)| (e.seq, id.clone()))
            .collect();
        if pending.len() < max {
            return;
        }

        pending.sort_unstable();
        let excess = pending.len() + 1 - max;
        for (_, id) in pending.into_iter().take(excess) {
            self.entries.remove(&id);
        }
    }
}

/// Per-browser credential storage keyed by the OAuth `state` value.
///
/// Stale entries are pruned whenever a session starts or is authorized, and
/// the number of sessions waiting for a callback is capped.
#[derive(Debug)]
pub struct SessionManager {
    sessions: Mutex<Sessions>,
    max_pending: usize,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::with_max_pending(DEFAULT_MAX_PENDING)
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_pending(max_pending: usize) -> Self {
        Self {
            sessions: Mutex::new(Sessions::default()),
            max_pending: max_pending.max(1),
        }
    }

    /// Registers a new pending session and returns its ID.
    pub async fn begin(&self) -> String {
        let id = utils::generate_session_id();
        let mut sessions = self.sessions.lock().await;
        sessions.prune(utils::unix_now());
        sessions.evict_pending(self.max_pending);

        let seq = sessions.next_seq;
        sessions.next_seq += 1;
        sessions.entries.insert(
            id.clone(),
            Entry {
                session: Session::Pending,
                created_at: utils::unix_now(),
                seq,
            },
        );
        id
    }

    pub async fn has(&self, id: &str) -> bool {
        self.sessions.lock().await.entries.contains_key(id)
    }

    /// Stores the credential of a known session, replacing an older one.
    pub async fn authorize(&self, id: &str, credential: Credential) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.prune(utils::unix_now());
        match sessions.entries.get_mut(id) {
            Some(entry) => {
                entry.session = Session::Authorized(credential);
                Ok(())
            }
            None => Err(Error::UnknownSession),
        }
    }

    /// Returns a snapshot of the session's credential.
    ///
    /// The lock is released before the caller does any I/O, so a later
    /// callback for the same session does not affect work already started.
    pub async fn credential(&self, id: &str) -> Result<Credential> {
        let sessions = self.sessions.lock().await;
        let credential = match sessions.entries.get(id).map(|e| &e.session) {
            Some(Session::Authorized(c)) => c.clone(),
            Some(Session::Pending) => return Err(Error::NotAuthorized),
            None => return Err(Error::UnknownSession),
        };
        drop(sessions);

        if credential.is_expired(utils::unix_now()) {
            return Err(Error::AuthorizationExpired);
        }
        Ok(credential)
    }

    /// Removes stale sessions as of `now` (unix seconds).
    pub async fn prune(&self, now: u64) {
        self.sessions.lock().await.prune(now);
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
