use super::model::Session;
use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

/// In-memory session store; idle sessions expire on their own
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<Uuid, Session>,
}

impl SessionStore {
    pub fn new(max_capacity: u64, idle_timeout: Duration) -> Self {
        Self {
            sessions: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_idle(idle_timeout)
                .build(),
        }
    }

    pub async fn create(&self) -> Session {
        let session = Session::new();
        self.sessions.insert(session.id, session.clone()).await;
        tracing::info!(session_id = %session.id, "Session created");
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions.get(&id).await
    }

    pub async fn save(&self, session: Session) {
        self.sessions.insert(session.id, session).await;
    }
}
