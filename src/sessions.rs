use crate::responder::{Reply, Responder, Tuning};
use parking_lot::Mutex;
use std::collections::HashMap;
use uuid::Uuid;

struct Entry {
    responder: Responder,
    last_used: u64,
}

struct Inner {
    entries: HashMap<Uuid, Entry>,
    clock: u64,
}

/// Open conversations, each with its own responder and random source.
pub struct SessionStore {
    inner: Mutex<Inner>,
    tuning: Tuning,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(tuning: Tuning, max_sessions: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                clock: 0,
            }),
            tuning,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Answers `text` in the given session. An absent or unknown id opens
    /// a new conversation; the id actually used is returned with the reply.
    pub fn respond(&self, session_id: Option<Uuid>, text: &str) -> (Uuid, Reply) {
        let mut inner = self.inner.lock();
        inner.clock += 1;
        let now = inner.clock;

        let id = match session_id.filter(|id| inner.entries.contains_key(id)) {
            Some(id) => id,
            None => {
                if inner.entries.len() >= self.max_sessions {
                    Self::evict_stalest(&mut inner.entries);
                }
                let id = Uuid::new_v4();
                log::info!("Opening session {} ({} already open)", id, inner.entries.len());
                id
            }
        };

        let tuning = &self.tuning;
        let entry = inner.entries.entry(id).or_insert_with(|| Entry {
            responder: Responder::from_entropy(tuning.clone()),
            last_used: now,
        });
        entry.last_used = now;
        (id, entry.responder.respond(text))
    }

    /// Returns false when the session does not exist.
    pub fn reset(&self, session_id: Uuid) -> bool {
        match self.inner.lock().entries.get_mut(&session_id) {
            Some(entry) => {
                entry.responder.reset();
                true
            }
            None => false,
        }
    }

    pub fn end(&self, session_id: Uuid) -> bool {
        let removed = self.inner.lock().entries.remove(&session_id).is_some();
        if removed {
            log::info!("Closed session {}", session_id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turn count of a session, mostly useful for diagnostics.
    pub fn turn_count(&self, session_id: Uuid) -> Option<u32> {
        self.inner
            .lock()
            .entries
            .get(&session_id)
            .map(|entry| entry.responder.context().turn_count)
    }

    fn evict_stalest(entries: &mut HashMap<Uuid, Entry>) {
        let stalest = entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = stalest {
            entries.remove(&id);
            log::warn!("Session limit reached, dropped stalest session {}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ResponseCatalog;

    #[test]
    fn sessions_keep_separate_turn_counts() {
        let store = SessionStore::new(Tuning::default(), 8);
        let (a, _) = store.respond(None, "hello");
        let (a_again, _) = store.respond(Some(a), "I'm stressed");
        assert_eq!(a, a_again);
        let (b, reply) = store.respond(None, "I'm stressed");
        assert_ne!(a, b);
        assert!(ResponseCatalog.greetings().contains(&reply.content.as_str()));
        assert_eq!(store.turn_count(a), Some(2));
        assert_eq!(store.turn_count(b), Some(1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn unknown_id_opens_a_new_session() {
        let store = SessionStore::new(Tuning::default(), 8);
        let stranger = Uuid::new_v4();
        let (id, _) = store.respond(Some(stranger), "hi");
        assert_ne!(id, stranger);
        assert_eq!(store.turn_count(id), Some(1));
    }

    #[test]
    fn reset_and_end() {
        let store = SessionStore::new(Tuning::default(), 8);
        let (id, _) = store.respond(None, "hello");
        store.respond(Some(id), "sleep");
        assert!(store.reset(id));
        assert_eq!(store.turn_count(id), Some(0));
        assert!(!store.reset(Uuid::new_v4()));
        assert!(store.end(id));
        assert!(!store.end(id));
        assert!(store.is_empty());
    }

    #[test]
    fn stalest_session_is_evicted_at_capacity() {
        let store = SessionStore::new(Tuning::default(), 2);
        let (first, _) = store.respond(None, "hi");
        let (second, _) = store.respond(None, "hi");
        store.respond(Some(first), "still here");
        let (third, _) = store.respond(None, "hi");
        assert_eq!(store.len(), 2);
        assert!(store.turn_count(first).is_some());
        assert!(store.turn_count(second).is_none());
        assert!(store.turn_count(third).is_some());
    }
}
