//! In-memory sessions with a sliding expiry
//!
//! A session lives for the configured TTL after its last use. Time comes
//! from an injected `Clock` so expiry can be driven in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use shared::UserProfile;
use tokio::sync::RwLock;
use uuid::Uuid;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Uuid,
    pub user: UserProfile,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl SessionStore {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    pub fn with_system_clock(ttl: Duration) -> Self {
        Self::new(ttl, Arc::new(SystemClock))
    }

    pub async fn create(&self, user: UserProfile) -> Session {
        let now = self.clock.now();
        let session = Session {
            token: Uuid::new_v4(),
            user,
            issued_at: now,
            expires_at: now + self.ttl,
        };

        self.sessions
            .write()
            .await
            .insert(session.token, session.clone());
        tracing::debug!("Session created for {}", session.user.email);
        session
    }

    /// The live session for `token`. An expired entry is removed on sight.
    pub async fn get(&self, token: Uuid) -> Option<Session> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;

        let session = sessions.get(&token)?;
        if session.expires_at >= now {
            return Some(session.clone());
        }

        sessions.remove(&token);
        None
    }

    /// Push the expiry of a live session to one TTL from now
    pub async fn extend(&self, token: Uuid) -> Option<Session> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;

        let session = sessions.get_mut(&token)?;
        if session.expires_at >= now {
            session.expires_at = now + self.ttl;
            return Some(session.clone());
        }

        sessions.remove(&token);
        None
    }

    /// Remove a session; returns whether one existed
    pub async fn clear(&self, token: Uuid) -> bool {
        self.sessions.write().await.remove(&token).is_some()
    }

    /// Drop every expired session, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at >= now);
        before - sessions.len()
    }
}
