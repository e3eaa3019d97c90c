use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use dashmap::DashMap;

use super::session::ConversationSession;

// One mutex per session; submissions for the same id apply one at a time.
pub type SessionHandle = Arc<Mutex<ConversationSession>>;

pub trait SessionStore: Send + Sync {
    fn get(&self, session_id: &str) -> Option<SessionHandle>;

    fn get_or_create(&self, session_id: &str) -> SessionHandle;

    fn put(&self, session: ConversationSession) -> SessionHandle;

    fn evict(&self, session_id: &str) -> bool;

    fn evict_expired(&self, now: Instant) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct StoredSession {
    handle: SessionHandle,
    last_touched: Instant,
}

impl StoredSession {
    fn new(session: ConversationSession) -> Self {
        Self {
            handle: Arc::new(Mutex::new(session)),
            last_touched: Instant::now(),
        }
    }
}

pub struct InMemorySessionStore {
    sessions: DashMap<String, StoredSession>,
    ttl: Option<Duration>,
}

impl InMemorySessionStore {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.get_mut(session_id).map(|mut stored| {
            stored.last_touched = Instant::now();
            Arc::clone(&stored.handle)
        })
    }

    fn get_or_create(&self, session_id: &str) -> SessionHandle {
        let mut stored = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| StoredSession::new(ConversationSession::new(session_id)));
        stored.last_touched = Instant::now();
        Arc::clone(&stored.handle)
    }

    fn put(&self, session: ConversationSession) -> SessionHandle {
        let session_id = session.session_id().to_string();
        let stored = StoredSession::new(session);
        let handle = Arc::clone(&stored.handle);
        self.sessions.insert(session_id, stored);
        handle
    }

    fn evict(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    fn evict_expired(&self, now: Instant) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };

        let mut evicted = 0;
        self.sessions.retain(|_, stored| {
            let keep = now.saturating_duration_since(stored.last_touched) <= ttl;
            if !keep {
                evicted += 1;
            }
            keep
        });
        evicted
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
