use redis::{Client, RedisError, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;

/// Redis read-through cache for the hot public views (leaderboard, hall of
/// fame). Writes that change a view delete its key.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn new(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    /// Get a value from cache.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> redis::RedisResult<Option<T>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        match value {
            Some(v) => {
                let deserialized = serde_json::from_str(&v).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Deserialization error",
                        e.to_string(),
                    ))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// Set a value in cache with a TTL.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> redis::RedisResult<()> {
        let serialized = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        redis::cmd("SET")
            .arg(key)
            .arg(serialized)
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Delete a key from cache (view invalidation).
    pub async fn delete(&self, key: &str) -> redis::RedisResult<()> {
        redis::cmd("DEL")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await
    }
}

/// Cache key generators.
pub mod keys {
    use uuid::Uuid;

    /// Key for a season's ranked leaderboard.
    pub fn leaderboard(season_id: Uuid) -> String {
        format!("leaderboard:{season_id}")
    }

    /// Key for the Hall of Fame view.
    pub fn hall_of_fame() -> String {
        "hall_of_fame".to_string()
    }
}

/// Cache TTLs, overridable per view from the environment.
pub struct CacheConfig {
    pub leaderboard_ttl: Duration,
    pub hall_of_fame_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            leaderboard_ttl: Duration::from_secs(60),
            hall_of_fame_ttl: Duration::from_secs(600),
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            leaderboard_ttl: parse_duration_secs("CACHE_TTL_LEADERBOARD", 60),
            hall_of_fame_ttl: parse_duration_secs("CACHE_TTL_HALL_OF_FAME", 600),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

/// Wrapper type for Actix-web app data.
pub type CacheData = Arc<RedisCache>;
