use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::api::endpoints;
use crate::client::Client;
use crate::error::AppError;

/// One champion skin, with splash and loading-screen image URLs built from
/// the champion's canonical name and the skin number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionSkin {
    pub id: String,
    pub num: i64,
    pub name: String,
    pub splash_url: String,
    pub loading_url: String,
    /// `false`, `true`, or the chroma record when the payload carries one.
    pub chromas: Value,
}

impl ChampionSkin {
    fn from_record(champion: &str, record: &Value) -> Self {
        let num = record.get("num").and_then(Value::as_i64).unwrap_or(0);
        ChampionSkin {
            id: record
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            num,
            name: record
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            splash_url: image_url("champion/splash", champion, num),
            loading_url: image_url("champion/loading", champion, num),
            chromas: record.get("chromas").cloned().unwrap_or(Value::Bool(false)),
        }
    }
}

fn image_url(kind: &str, champion: &str, num: i64) -> String {
    format!(
        "{}{}",
        endpoints::BASE_URL,
        endpoints::cdn_image_path(kind, &format!("{}_{}.jpg", champion, num))
    )
}

/// Champion skin data, derived from champion detail records.
pub struct Skins<'a> {
    client: &'a Client,
}

impl<'a> Skins<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Skins { client }
    }

    /// Skins for one champion, case-insensitive via the champion lookup.
    ///
    /// Fails with `NotFound` under the same conditions as
    /// [`Champions::find`](crate::resources::Champions::find).
    pub fn for_champion(&self, name: &str) -> Result<Vec<ChampionSkin>, AppError> {
        let detail = self.client.champions().find(name)?;
        let (canonical, champion) = detail
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| data.iter().next())
            .map(|(key, value)| (key.clone(), value.clone()))
            .ok_or_else(|| {
                AppError::ApiError(format!("malformed champion payload for '{}'", name))
            })?;

        let records = champion
            .get("skins")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(records
            .iter()
            .map(|record| ChampionSkin::from_record(&canonical, record))
            .collect())
    }

    /// Skins for every champion, keyed by canonical name.
    ///
    /// Champions whose detail lookup answers `NotFound` are skipped; one bad
    /// entry does not abort the sweep. Any other failure propagates.
    pub fn all(&self) -> Result<BTreeMap<String, Vec<ChampionSkin>>, AppError> {
        let overview = self.client.champions().all()?;
        let names: Vec<String> = overview
            .get("data")
            .and_then(Value::as_object)
            .map(|data| data.keys().cloned().collect())
            .unwrap_or_default();

        let mut skins = BTreeMap::new();
        for name in names {
            match self.for_champion(&name) {
                Ok(list) => {
                    skins.insert(name, list);
                }
                Err(AppError::NotFound(_)) => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(skins)
    }
}
