use serde_json::Value;

use crate::client::Client;
use crate::error::AppError;
use crate::resources;

/// Champion overview and detail data.
///
/// The remote endpoint is case-sensitive and keys champions by their
/// canonical PascalCase identifier ("Ahri", "MonkeyKing"). Name lookups here
/// are forgiving: [`find`](Champions::find) resolves the caller's casing
/// against the overview index before fetching the detail file.
pub struct Champions<'a> {
    client: &'a Client,
}

impl<'a> Champions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Champions { client }
    }

    /// The full per-version champion overview, keyed by canonical name under
    /// `data`.
    pub fn all(&self) -> Result<Value, AppError> {
        resources::get(self.client, &resources::data_path(self.client, "champion"))
    }

    /// Detailed record for one champion (spells, passive, lore, skins).
    ///
    /// Case-insensitive: costs one extra overview fetch to resolve the
    /// canonical name. Fails with `NotFound` before any detail request when
    /// no champion matches.
    pub fn find(&self, name: &str) -> Result<Value, AppError> {
        let canonical = self.normalize_name(name)?;
        let path = resources::data_path(self.client, &format!("champion/{}", canonical));
        resources::get(self.client, &path)
    }

    /// The passive-ability sub-record of [`find`](Champions::find), if any.
    pub fn passive(&self, name: &str) -> Result<Option<Value>, AppError> {
        let detail = self.find(name)?;
        Ok(detail
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| data.values().next())
            .and_then(|champion| champion.get("passive"))
            .cloned())
    }

    /// Canonical names of every champion.
    pub fn list_names(&self) -> Result<Vec<String>, AppError> {
        let overview = self.all()?;
        Ok(overview
            .get("data")
            .and_then(Value::as_object)
            .map(|data| data.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// The overview record whose `key` field equals `id`, if any.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Value>, AppError> {
        let overview = self.all()?;
        Ok(overview
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| {
                data.values()
                    .find(|champion| champion.get("key").and_then(Value::as_str) == Some(id))
            })
            .cloned())
    }

    /// Resolve user-supplied casing to the canonical overview key.
    fn normalize_name(&self, name: &str) -> Result<String, AppError> {
        let overview = self.all()?;
        let needle = name.to_lowercase();

        overview
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| data.keys().find(|key| key.to_lowercase() == needle))
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("champion '{}' (check the spelling)", name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::connection::testing::RoutedTransport;
    use serde_json::json;

    const OVERVIEW_URL: &str =
        "https://ddragon.leagueoflegends.com/cdn/14.1.1/data/en_US/champion.json";
    const AHRI_URL: &str =
        "https://ddragon.leagueoflegends.com/cdn/14.1.1/data/en_US/champion/Ahri.json";

    fn overview_body() -> String {
        json!({
            "type": "champion",
            "data": {
                "Ahri": { "name": "Ahri", "title": "the Nine-Tailed Fox", "key": "103" },
                "MonkeyKing": { "name": "Wukong", "title": "the Monkey King", "key": "62" }
            }
        })
        .to_string()
    }

    fn ahri_detail_body() -> String {
        json!({
            "data": {
                "Ahri": {
                    "name": "Ahri",
                    "title": "the Nine-Tailed Fox",
                    "lore": "Innately connected to the magic of the spirit realm...",
                    "passive": { "name": "Essence Theft", "description": "Takedowns restore..." },
                    "spells": [
                        { "name": "Orb of Deception", "description": "Sends out an orb..." }
                    ]
                }
            }
        })
        .to_string()
    }

    fn client() -> Client {
        Client::stubbed(
            "14.1.1",
            Box::new(
                RoutedTransport::new()
                    .route(OVERVIEW_URL, &overview_body())
                    .route(AHRI_URL, &ahri_detail_body()),
            ),
        )
    }

    #[test]
    fn find_is_case_insensitive() {
        let client = client();
        let champions = client.champions();

        let lower = champions.find("ahri").unwrap();
        let upper = champions.find("AHRI").unwrap();
        let canonical = champions.find("Ahri").unwrap();

        assert_eq!(lower, canonical);
        assert_eq!(upper, canonical);
        assert_eq!(canonical["data"]["Ahri"]["name"], "Ahri");
    }

    #[test]
    fn find_requests_the_canonical_detail_path() {
        let transport = std::sync::Arc::new(
            RoutedTransport::new()
                .route(OVERVIEW_URL, &overview_body())
                .route(AHRI_URL, &ahri_detail_body()),
        );
        let client = Client::stubbed("14.1.1", Box::new(transport.clone()));

        client.champions().find("aHrI").unwrap();

        assert_eq!(
            transport.requested_urls(),
            vec![OVERVIEW_URL.to_string(), AHRI_URL.to_string()]
        );
    }

    #[test]
    fn find_unknown_name_fails_before_any_detail_request() {
        let transport =
            std::sync::Arc::new(RoutedTransport::new().route(OVERVIEW_URL, &overview_body()));
        let client = Client::stubbed("14.1.1", Box::new(transport.clone()));

        let err = client.champions().find("NoSuchChampion12345").unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("NoSuchChampion12345"));
        assert!(err.to_string().contains("spelling"));
        assert_eq!(transport.requested_urls(), vec![OVERVIEW_URL.to_string()]);
    }

    #[test]
    fn passive_returns_the_sub_record() {
        let client = client();

        let passive = client.champions().passive("ahri").unwrap().unwrap();

        assert_eq!(passive["name"], "Essence Theft");
    }

    #[test]
    fn list_names_returns_canonical_keys() {
        let client = client();

        let mut names = client.champions().list_names().unwrap();
        names.sort();

        assert_eq!(names, vec!["Ahri", "MonkeyKing"]);
    }

    #[test]
    fn find_by_id_scans_the_overview() {
        let client = client();

        let ahri = client.champions().find_by_id("103").unwrap().unwrap();
        assert_eq!(ahri["name"], "Ahri");

        assert!(client.champions().find_by_id("999999").unwrap().is_none());
    }

    #[test]
    fn repeated_lookups_are_idempotent() {
        let client = client();

        let first = client.champions().find_by_id("62").unwrap();
        let second = client.champions().find_by_id("62").unwrap();

        assert_eq!(first, second);
    }
}
