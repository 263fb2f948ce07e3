use once_cell::sync::OnceCell;

use crate::api::{endpoints, Connection};
use crate::config::Config;
use crate::error::AppError;
use crate::resources::{Champions, Items, Skins, SummonerSpells, Versions};

/// Entry point for reading Data Dragon game data.
///
/// A client pins its game version and language at construction time; every
/// resource accessed through it observes the same patch for the client's
/// whole lifetime. Resolution order for both fields is: explicit override,
/// then the configuration default, then (for the version) the newest entry
/// of the remote version list.
#[derive(Debug)]
pub struct Client {
    version: String,
    language: String,
    config: Config,
    connection: OnceCell<Connection>,
}

impl Client {
    /// Build a client from environment-backed configuration.
    pub fn new(version: Option<&str>, language: Option<&str>) -> Result<Self, AppError> {
        Self::with_config(Config::from_env(), version, language)
    }

    /// Build a client from an explicit configuration value.
    ///
    /// Fails with `ConfigError` when no version is given, none is configured,
    /// and the latest version cannot be fetched from the remote endpoint.
    pub fn with_config(
        config: Config,
        version: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self, AppError> {
        Self::assemble(config, version, language, OnceCell::new())
    }

    fn assemble(
        config: Config,
        version: Option<&str>,
        language: Option<&str>,
        connection: OnceCell<Connection>,
    ) -> Result<Self, AppError> {
        let language = language
            .map(str::to_string)
            .unwrap_or_else(|| config.default_language.clone());

        let version = match version.map(str::to_string).or_else(|| config.default_version.clone()) {
            Some(version) => version,
            None => {
                let conn = connection.get_or_init(|| Connection::new(&config));
                fetch_latest_version(conn).map_err(|e| {
                    AppError::ConfigError(format!("failed to fetch latest version: {}", e))
                })?
            }
        };

        Ok(Client {
            version,
            language,
            config,
            connection,
        })
    }

    /// The game version this client is pinned to.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The language code used for data paths.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The HTTP access layer, created on first use.
    pub fn connection(&self) -> &Connection {
        self.connection.get_or_init(|| Connection::new(&self.config))
    }

    pub fn champions(&self) -> Champions<'_> {
        Champions::new(self)
    }

    pub fn items(&self) -> Items<'_> {
        Items::new(self)
    }

    pub fn skins(&self) -> Skins<'_> {
        Skins::new(self)
    }

    pub fn summoner_spells(&self) -> SummonerSpells<'_> {
        SummonerSpells::new(self)
    }

    pub fn versions(&self) -> Versions<'_> {
        Versions::new(self)
    }
}

fn fetch_latest_version(connection: &Connection) -> Result<String, AppError> {
    let body = connection.get(endpoints::VERSIONS_PATH, &[])?;
    let versions: Vec<String> = serde_json::from_value(body)
        .map_err(|e| AppError::ApiError(format!("unexpected version payload: {}", e)))?;
    versions
        .into_iter()
        .next()
        .ok_or_else(|| AppError::ApiError("version list is empty".to_string()))
}

#[cfg(test)]
impl Client {
    /// Client pinned to a version, wired to a fake transport. Test-only.
    pub(crate) fn stubbed(version: &str, transport: Box<dyn crate::api::connection::Transport>) -> Self {
        use crate::cache::ResponseCache;

        let connection = OnceCell::new();
        let _ = connection.set(Connection::with_transport(transport, ResponseCache::disabled()));
        Client {
            version: version.to_string(),
            language: "en_US".to_string(),
            config: Config::default(),
            connection,
        }
    }

    /// Run the full construction path against a fake transport. Test-only.
    pub(crate) fn stubbed_with_resolution(
        config: Config,
        version: Option<&str>,
        language: Option<&str>,
        transport: Box<dyn crate::api::connection::Transport>,
    ) -> Result<Self, AppError> {
        use crate::cache::ResponseCache;

        let connection = OnceCell::new();
        let _ = connection.set(Connection::with_transport(transport, ResponseCache::disabled()));
        Self::assemble(config, version, language, connection)
    }
}
