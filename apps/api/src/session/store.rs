use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::session::Session;

/// Sessions untouched for this long are dropped.
pub const SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
/// Creating a session past this many evicts the least recently used one.
pub const MAX_SESSIONS: usize = 1024;

struct Entry {
    session: Session,
    touched: Instant,
}

impl Entry {
    fn new(session: Session) -> Self {
        Self {
            session,
            touched: Instant::now(),
        }
    }
}

/// In-memory sessions keyed by id. Each user gets their own `Session` value;
/// the store only holds them between requests.
///
/// Idle sessions expire after `idle_ttl` and at most `max_sessions` are kept.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(SESSION_IDLE_TTL, MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub async fn create(&self) -> (Uuid, Session) {
        let id = Uuid::new_v4();
        let session = Session::new();

        let mut map = self.inner.write().await;
        let ttl = self.idle_ttl;
        map.retain(|_, entry| entry.touched.elapsed() < ttl);
        while map.len() >= self.max_sessions {
            let oldest = map
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| *id);
            match oldest {
                Some(oldest) => {
                    debug!("Evicting session {oldest}: store full");
                    map.remove(&oldest);
                }
                None => break,
            }
        }
        map.insert(id, Entry::new(session.clone()));
        (id, session)
    }

    /// A snapshot of the session. Changes must be written back with `put`.
    /// An expired session is removed and reported as missing.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let mut map = self.inner.write().await;
        let entry = map.get_mut(&id)?;
        if entry.touched.elapsed() >= self.idle_ttl {
            debug!("Session {id} expired");
            map.remove(&id);
            return None;
        }
        entry.touched = Instant::now();
        Some(entry.session.clone())
    }

    /// Replaces an existing session. Returns false if it was removed meanwhile,
    /// in which case nothing is stored.
    pub async fn put(&self, id: Uuid, session: Session) -> bool {
        match self.inner.write().await.get_mut(&id) {
            Some(entry) => {
                *entry = Entry::new(session);
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }
}
