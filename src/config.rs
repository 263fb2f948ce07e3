use std::env;

/// Settings captured by a [`crate::Client`] at construction time.
///
/// No field is validated; unparsable environment values fall back to the
/// defaults silently.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pin every client to this game version instead of fetching the latest.
    pub default_version: Option<String>,
    /// Language code used for CDN data paths.
    pub default_language: String,
    /// Turn on the in-memory TTL response cache.
    pub cache_enabled: bool,
    /// Cache entry lifetime in seconds.
    pub cache_ttl: u64,
    /// Per-attempt HTTP timeout in seconds.
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_version: None,
            default_language: "en_US".to_string(),
            cache_enabled: false,
            cache_ttl: 3600,
            timeout: 10,
        }
    }
}

impl Config {
    /// Build a config from `DDRAGON_*` environment variables, reading a
    /// `.env` file first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Config::default();

        if let Ok(version) = env::var("DDRAGON_DEFAULT_VERSION") {
            if !version.is_empty() {
                config.default_version = Some(version);
            }
        }
        if let Ok(language) = env::var("DDRAGON_LANGUAGE") {
            if !language.is_empty() {
                config.default_language = language;
            }
        }
        if let Ok(flag) = env::var("DDRAGON_CACHE_ENABLED") {
            config.cache_enabled = parse_flag(&flag);
        }
        if let Some(ttl) = env::var("DDRAGON_CACHE_TTL").ok().and_then(|v| parse_seconds(&v)) {
            config.cache_ttl = ttl;
        }
        if let Some(timeout) = env::var("DDRAGON_TIMEOUT").ok().and_then(|v| parse_seconds(&v)) {
            config.timeout = timeout;
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn parse_seconds(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();

        assert_eq!(config.default_version, None);
        assert_eq!(config.default_language, "en_US");
        assert!(!config.cache_enabled);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.timeout, 10);
    }

    #[test]
    fn flag_parsing_accepts_common_truthy_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn invalid_seconds_are_ignored() {
        assert_eq!(parse_seconds("30"), Some(30));
        assert_eq!(parse_seconds(" 45 "), Some(45));
        assert_eq!(parse_seconds("soon"), None);
        assert_eq!(parse_seconds("-5"), None);
    }
}
