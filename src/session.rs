//! In-memory session store linking a generated round to the persona that
//! produced it. State is volatile; rounds live until the process exits or the
//! store evicts them to stay under its cap.

use crate::generator::Persona;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Oldest rounds are evicted once the store reaches this many entries, so an
/// abandoned demo process cannot grow without bound.
const MAX_SESSIONS: usize = 4096;

/// One generated round awaiting a guess.
#[derive(Debug, Clone)]
pub struct Round {
    pub persona: Persona,
    pub prompt: String,
    pub text: String,
}

/// Concurrency-safe map from session id to round. Cloning shares the
/// underlying store.
#[derive(Clone, Default)]
pub struct SessionStore {
    shared: Arc<RwLock<SessionData>>,
}

#[derive(Default)]
struct SessionData {
    rounds: HashMap<String, StoredRound>,
    next_seq: u64,
}

struct StoredRound {
    round: Round,
    seq: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a round under the given id, evicting the oldest entry first if
    /// the store is full. An id collision overwrites the previous round.
    pub fn insert(&self, session_id: String, round: Round) {
        let mut guard = self.shared.write();
        if guard.rounds.len() >= MAX_SESSIONS && !guard.rounds.contains_key(&session_id) {
            if let Some(oldest) = oldest_session_key(&guard.rounds) {
                guard.rounds.remove(&oldest);
            }
        }
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.rounds.insert(session_id, StoredRound { round, seq });
    }

    pub fn get(&self, session_id: &str) -> Option<Round> {
        self.shared
            .read()
            .rounds
            .get(session_id)
            .map(|stored| stored.round.clone())
    }

    pub fn len(&self) -> usize {
        self.shared.read().rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.read().rounds.is_empty()
    }
}

fn oldest_session_key(rounds: &HashMap<String, StoredRound>) -> Option<String> {
    rounds
        .iter()
        .min_by_key(|(_, stored)| stored.seq)
        .map(|(key, _)| key.clone())
}
