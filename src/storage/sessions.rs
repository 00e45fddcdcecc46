use crate::game::errors::GameError;
use crate::game::models::GameEvent;
use crate::game::rounds::RoundGenerator;
use crate::game::session::{GameSession, SessionView};
use crate::storage::interface::{ISessionStorage, SessionGameFlowHandler, SessionRepo};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// Sessions are locked one by one, so sampling a round for one of them never stalls the rest.
#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, Arc<Mutex<SessionEntry>>>>>,
}

pub struct SessionEntry {
    session: GameSession,
    last_touched: Instant,
}

impl SessionEntry {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            last_touched: Instant::now(),
        }
    }

    fn touch(&mut self) -> &mut GameSession {
        self.last_touched = Instant::now();
        &mut self.session
    }
}

impl HashMapSessionsStorage {
    async fn entry(&self, session_id: &str) -> Result<Arc<Mutex<SessionEntry>>, GameError> {
        self.storage
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or(GameError::SessionNotFound)
    }
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self, rounds: Option<&RoundGenerator<'_>>) -> Result<SessionView, GameError> {
        let session_id = generate_session_id();
        let mut session = GameSession::new();
        session.catch_up(rounds, &mut rand::thread_rng())?;
        let view = session.view(&session_id);
        self.storage
            .write()
            .await
            .insert(session_id, Arc::new(Mutex::new(SessionEntry::new(session))));
        Ok(view)
    }

    async fn view(
        &self,
        session_id: &str,
        rounds: Option<&RoundGenerator<'_>>,
    ) -> Result<SessionView, GameError> {
        let shared = self.entry(session_id).await?;
        let mut entry = shared.lock().await;
        let session = entry.touch();
        session.catch_up(rounds, &mut rand::thread_rng())?;
        Ok(session.view(session_id))
    }

    async fn remove(&self, session_id: &str) -> bool {
        self.storage.write().await.remove(session_id).is_some()
    }

    async fn count(&self) -> usize {
        self.storage.read().await.len()
    }

    async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut storage = self.storage.write().await;
        let before = storage.len();
        // A session locked right now is in use, whatever its timestamp says.
        storage.retain(|_, shared| match shared.try_lock() {
            Ok(entry) => entry.last_touched.elapsed() < max_idle,
            Err(_) => true,
        });
        before - storage.len()
    }
}

impl SessionGameFlowHandler for HashMapSessionsStorage {
    async fn dispatch(
        &self,
        session_id: &str,
        event: GameEvent,
        rounds: Option<&RoundGenerator<'_>>,
    ) -> Result<SessionView, GameError> {
        let shared = self.entry(session_id).await?;
        let mut entry = shared.lock().await;
        let session = entry.touch();
        session.catch_up(rounds, &mut rand::thread_rng())?;
        session.handle(event, rounds, &mut rand::thread_rng())?;
        Ok(session.view(session_id))
    }
}

#[cfg(test)]
impl HashMapSessionsStorage {
    /// Holds one session's lock until the guard is dropped.
    pub async fn lock_session(
        &self,
        session_id: &str,
    ) -> Option<tokio::sync::OwnedMutexGuard<SessionEntry>> {
        let shared = self.entry(session_id).await.ok()?;
        Some(shared.lock_owned().await)
    }
}

fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}
