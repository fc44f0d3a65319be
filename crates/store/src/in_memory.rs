//! In-memory cart store — the default backend.
//!
//! Carts live in a session-keyed map behind a single async `RwLock`. Every
//! operation takes the write lock, so concurrent mutations of one session
//! serialize here and each cart's total stays consistent with its lines.
//!
//! The map is bounded: idle sessions expire after a TTL (swept
//! opportunistically on access) and, at capacity, the least recently
//! touched session is evicted to make room.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use garcon_core::error::StoreError;
use garcon_core::{Cart, CartStore, MenuItem, SessionId};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Growth bounds for [`InMemoryCartStore`].
#[derive(Debug, Clone, Copy)]
pub struct StoreLimits {
    /// Maximum number of live sessions before eviction kicks in.
    pub max_sessions: usize,
    /// Drop sessions idle for this long. `None` disables expiry.
    pub idle_ttl: Option<Duration>,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_sessions: 1024,
            idle_ttl: Some(Duration::from_secs(30 * 60)),
        }
    }
}

struct Entry {
    cart: Cart,
    last_touched: Instant,
}

impl Entry {
    fn fresh() -> Self {
        Self {
            cart: Cart::new(),
            last_touched: Instant::now(),
        }
    }
}

/// Session-keyed cart storage backed by a `HashMap`.
#[derive(Clone)]
pub struct InMemoryCartStore {
    sessions: Arc<RwLock<HashMap<SessionId, Entry>>>,
    limits: StoreLimits,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::with_limits(StoreLimits::default())
    }

    pub fn with_limits(limits: StoreLimits) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            limits,
        }
    }

    fn sweep_expired(&self, sessions: &mut HashMap<SessionId, Entry>) {
        let Some(ttl) = self.limits.idle_ttl else {
            return;
        };
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_touched.elapsed() < ttl);
        let dropped = before - sessions.len();
        if dropped > 0 {
            debug!(dropped, "expired idle sessions");
        }
    }

    fn evict_if_full(&self, sessions: &mut HashMap<SessionId, Entry>) {
        if sessions.len() < self.limits.max_sessions {
            return;
        }
        let oldest = sessions
            .iter()
            .min_by_key(|(_, entry)| entry.last_touched)
            .map(|(id, _)| id.clone());
        if let Some(id) = oldest {
            sessions.remove(&id);
            warn!(session = %id, "store at capacity, evicted least recently touched session");
        }
    }
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn read(&self, session: &SessionId) -> Result<Cart, StoreError> {
        let mut sessions = self.sessions.write().await;
        self.sweep_expired(&mut sessions);
        match sessions.get_mut(session) {
            Some(entry) => {
                entry.last_touched = Instant::now();
                Ok(entry.cart.clone())
            }
            // Reading never creates a session; unknown carts are empty.
            None => Ok(Cart::new()),
        }
    }

    async fn add_items(
        &self,
        session: &SessionId,
        items: &[MenuItem],
    ) -> Result<Cart, StoreError> {
        let mut sessions = self.sessions.write().await;
        self.sweep_expired(&mut sessions);
        if !sessions.contains_key(session) {
            self.evict_if_full(&mut sessions);
        }
        let entry = sessions.entry(session.clone()).or_insert_with(Entry::fresh);
        for item in items {
            entry.cart.add(item);
        }
        entry.last_touched = Instant::now();
        Ok(entry.cart.clone())
    }

    async fn take_order(&self, session: &SessionId) -> Result<Option<Cart>, StoreError> {
        let mut sessions = self.sessions.write().await;
        self.sweep_expired(&mut sessions);
        match sessions.get_mut(session) {
            Some(entry) if !entry.cart.is_empty() => {
                let snapshot = entry.cart.clone();
                entry.cart.reset();
                entry.last_touched = Instant::now();
                Ok(Some(snapshot))
            }
            Some(entry) => {
                entry.last_touched = Instant::now();
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn clear(&self, session: &SessionId) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        self.sweep_expired(&mut sessions);
        sessions.remove(session);
        Ok(())
    }

    async fn session_count(&self) -> Result<usize, StoreError> {
        let mut sessions = self.sessions.write().await;
        self.sweep_expired(&mut sessions);
        Ok(sessions.len())
    }
}
