use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory TTL cache for decoded GET responses, keyed by full request URL.
///
/// Disabled by default; the connection consults it only when the
/// configuration opted in, so the default behavior stays one network call
/// per invocation.
#[derive(Debug)]
pub struct ResponseCache {
    enabled: bool,
    ttl_secs: u64,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    fetched_at: DateTime<Utc>,
}

impl ResponseCache {
    pub fn new(enabled: bool, ttl_secs: u64) -> Self {
        ResponseCache {
            enabled,
            ttl_secs,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn disabled() -> Self {
        ResponseCache::new(false, 0)
    }

    /// Returns the cached value for `key` if present and still fresh.
    pub fn lookup(&self, key: &str) -> Option<Value> {
        if !self.enabled {
            return None;
        }

        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;
        if is_stale(entry.fetched_at, self.ttl_secs) {
            return None;
        }
        Some(entry.value.clone())
    }

    pub fn store(&self, key: &str, value: &Value) {
        if !self.enabled {
            return;
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    value: value.clone(),
                    fetched_at: Utc::now(),
                },
            );
        }
    }
}

fn is_stale(fetched_at: DateTime<Utc>, ttl_secs: u64) -> bool {
    let age = Utc::now().signed_duration_since(fetched_at);
    age.num_seconds() > ttl_secs as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn disabled_cache_never_hits() {
        let cache = ResponseCache::disabled();
        cache.store("/api/versions.json", &json!(["14.1.1"]));

        assert_eq!(cache.lookup("/api/versions.json"), None);
    }

    #[test]
    fn enabled_cache_returns_fresh_entries() {
        let cache = ResponseCache::new(true, 3600);
        cache.store("/api/versions.json", &json!(["14.1.1"]));

        assert_eq!(
            cache.lookup("/api/versions.json"),
            Some(json!(["14.1.1"]))
        );
        assert_eq!(cache.lookup("/api/other.json"), None);
    }

    #[test]
    fn staleness_is_measured_against_ttl() {
        let now = Utc::now();

        assert!(is_stale(now - Duration::seconds(10), 5));
        assert!(!is_stale(now - Duration::seconds(10), 60));
    }
}
