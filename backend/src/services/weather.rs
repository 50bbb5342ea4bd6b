//! Weather service with a per-location snapshot cache

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::WeatherConfig;
use crate::models::WeatherSnapshot;

/// Cached synthesized snapshot
#[derive(Debug, Clone)]
struct CachedSnapshot {
    snapshot: WeatherSnapshot,
    expires_at: DateTime<Utc>,
}

/// Weather service for synthesizing and caching snapshots
#[derive(Clone)]
pub struct WeatherService {
    cache: Arc<RwLock<HashMap<String, CachedSnapshot>>>,
    ttl: Duration,
    default_location: String,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(config: &WeatherConfig) -> Self {
        let ttl_seconds = i64::try_from(config.cache_ttl_seconds).unwrap_or(i64::MAX);
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::try_seconds(ttl_seconds).unwrap_or(Duration::MAX),
            default_location: config.default_location.clone(),
        }
    }

    /// Requested location, or the configured default when blank
    pub fn resolve_location(&self, location: Option<&str>) -> String {
        match location.map(str::trim) {
            Some(location) if !location.is_empty() => location.to_string(),
            _ => self.default_location.clone(),
        }
    }

    /// Snapshot for `location`, reused until its cache entry expires
    pub async fn get_weather(&self, location: &str) -> WeatherSnapshot {
        let key = cache_key(location);
        let now = Utc::now();

        if let Some(entry) = self.cache.read().await.get(&key) {
            if entry.expires_at > now {
                tracing::debug!(location, "weather cache hit");
                return entry.snapshot.clone();
            }
        }

        let snapshot = shared::synthesize_weather(location);
        if self.ttl > Duration::zero() {
            let mut cache = self.cache.write().await;
            cache.retain(|_, entry| entry.expires_at > now);
            cache.insert(
                key,
                CachedSnapshot {
                    snapshot: snapshot.clone(),
                    expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
                },
            );
        }

        tracing::info!(
            location,
            temp = snapshot.current.temp,
            alerts = snapshot.alerts.len(),
            "synthesized weather"
        );
        snapshot
    }

    /// Number of live cache entries
    pub async fn cached_locations(&self) -> usize {
        let now = Utc::now();
        self.cache
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }
}

fn cache_key(location: &str) -> String {
    location.trim().to_lowercase()
}
