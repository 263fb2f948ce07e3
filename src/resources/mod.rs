//! Domain-specific accessors built on the HTTP access layer.
//!
//! Each resource borrows its [`Client`](crate::Client) for version, language,
//! and connection access; none of them owns any state of its own.

pub mod champions;
pub mod items;
pub mod skins;
pub mod summoner_spells;
pub mod versions;

pub use champions::Champions;
pub use items::Items;
pub use skins::{ChampionSkin, Skins};
pub use summoner_spells::SummonerSpells;
pub use versions::Versions;

use crate::api::endpoints;
use crate::client::Client;
use crate::error::AppError;
use serde_json::Value;

/// GET a CDN-relative path through the client's connection.
pub(crate) fn get(client: &Client, path: &str) -> Result<Value, AppError> {
    client.connection().get(path, &[])
}

/// CDN data path for `resource` under the client's version and language.
pub(crate) fn data_path(client: &Client, resource: &str) -> String {
    endpoints::cdn_data_path(client.version(), client.language(), resource)
}
