//! Session state and its storage backends

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub type Attributes = HashMap<String, Value>;

/// Key/value state scoped to one client session
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    attributes: Attributes,
    is_new: bool,
}

impl Session {
    /// A session that has never been saved
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            attributes: Attributes::new(),
            is_new: true,
        }
    }

    /// A session previously saved under `id`
    pub fn restore(id: Uuid, attributes: Attributes) -> Self {
        Self {
            id,
            attributes,
            is_new: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// True until the session has been loaded back from a store
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Typed attribute lookup; a value of another type reads as absent
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> AppResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| AppError::Internal(format!("Unserializable session attribute '{}': {}", key, e)))?;
        self.attributes.insert(key.to_string(), value);
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Persistence for session attributes between requests
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Attributes saved under `id`, or `None` when unknown or expired
    async fn load(&self, id: Uuid) -> AppResult<Option<Attributes>>;

    /// Save the session and restart its idle timeout
    async fn save(&self, session: &Session) -> AppResult<()>;
}

struct Entry {
    attributes: Attributes,
    expires_at: Instant,
}

/// Sessions held in process memory
pub struct MemorySessionStore {
    ttl: Duration,
    entries: RwLock<HashMap<Uuid, Entry>>,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored, possibly expired, sessions
    pub async fn stored_sessions(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, id: Uuid) -> AppResult<Option<Attributes>> {
        {
            let entries = self.entries.read().await;
            match entries.get(&id) {
                None => return Ok(None),
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.attributes.clone()))
                }
                Some(_) => {}
            }
        }

        // Expired
        self.entries.write().await.remove(&id);
        Ok(None)
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            session.id(),
            Entry {
                attributes: session.attributes().clone(),
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }
}

/// Sessions held in Redis as JSON under `session:{id}`
#[derive(Clone)]
pub struct RedisSessionStore {
    client: Client,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Create a new Redis session store and check the connection
    pub async fn new(url: &str, ttl_seconds: u64) -> AppResult<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::Session(format!("Failed to create Redis client: {}", e)))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Session(format!("Failed to connect to Redis: {}", e)))?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| AppError::Session(format!("Redis connection test failed: {}", e)))?;

        Ok(Self { client, ttl_seconds })
    }

    fn key(id: Uuid) -> String {
        format!("session:{}", id)
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Session(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: Uuid) -> AppResult<Option<Attributes>> {
        let mut conn = self.connection().await?;

        let stored: Option<String> = conn
            .get(Self::key(id))
            .await
            .map_err(|e| AppError::Session(format!("Failed to read session from Redis: {}", e)))?;

        match stored {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(attributes) => Ok(Some(attributes)),
                Err(e) => {
                    tracing::warn!("Discarding unreadable session {}: {}", id, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> AppResult<()> {
        let raw = serde_json::to_string(session.attributes())
            .map_err(|e| AppError::Internal(format!("Failed to serialize session: {}", e)))?;

        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(Self::key(session.id()), raw, self.ttl_seconds)
            .await
            .map_err(|e| AppError::Session(format!("Failed to store session in Redis: {}", e)))?;

        Ok(())
    }
}

/// Opens and saves sessions over the configured store
#[derive(Clone)]
pub struct SessionsService {
    store: Arc<dyn SessionStore>,
}

impl SessionsService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The session saved under `id`, or a fresh one when there is none
    pub async fn open(&self, id: Option<Uuid>) -> AppResult<Session> {
        let Some(id) = id else {
            return Ok(Session::new());
        };

        match self.store.load(id).await? {
            Some(attributes) => Ok(Session::restore(id, attributes)),
            None => {
                tracing::debug!("Session {} unknown or expired, starting a new one", id);
                Ok(Session::new())
            }
        }
    }

    pub async fn save(&self, session: &Session) -> AppResult<()> {
        self.store.save(session).await
    }
}
