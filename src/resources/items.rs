use serde_json::Value;

use crate::client::Client;
use crate::error::AppError;
use crate::resources;

/// Item data for the client's version and language.
pub struct Items<'a> {
    client: &'a Client,
}

impl<'a> Items<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Items { client }
    }

    /// The full item file, records keyed by item id under `data`.
    pub fn all(&self) -> Result<Value, AppError> {
        resources::get(self.client, &resources::data_path(self.client, "item"))
    }

    /// The record for one item id, if present.
    pub fn find(&self, id: &str) -> Result<Option<Value>, AppError> {
        let body = self.all()?;
        Ok(body.get("data").and_then(|data| data.get(id)).cloned())
    }

    /// Every item id.
    pub fn list_ids(&self) -> Result<Vec<String>, AppError> {
        let body = self.all()?;
        Ok(body
            .get("data")
            .and_then(Value::as_object)
            .map(|data| data.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Records whose name contains `query`, case-insensitively. An empty
    /// query matches everything.
    pub fn search(&self, query: &str) -> Result<Vec<Value>, AppError> {
        let body = self.all()?;
        let needle = query.to_lowercase();
        Ok(filter_by_name(&body, |name| name.contains(&needle)))
    }

    /// First record whose name equals `name` case-insensitively, if any.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Value>, AppError> {
        let body = self.all()?;
        let needle = name.to_lowercase();
        Ok(filter_by_name(&body, |candidate| candidate == needle)
            .into_iter()
            .next())
    }
}

/// Records under `data` whose lowercased `name` satisfies the predicate.
pub(crate) fn filter_by_name(body: &Value, matches: impl Fn(&str) -> bool) -> Vec<Value> {
    body.get("data")
        .and_then(Value::as_object)
        .map(|data| {
            data.values()
                .filter(|record| {
                    record
                        .get("name")
                        .and_then(Value::as_str)
                        .map(|name| matches(&name.to_lowercase()))
                        .unwrap_or(false)
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::connection::testing::RoutedTransport;
    use serde_json::json;

    const ITEMS_URL: &str = "https://ddragon.leagueoflegends.com/cdn/14.1.1/data/en_US/item.json";

    fn items_body() -> String {
        json!({
            "type": "item",
            "data": {
                "1001": { "name": "Boots", "gold": { "total": 300 } },
                "1036": { "name": "Long Sword", "gold": { "total": 350 } },
                "3070": { "name": "Tear of the Goddess", "gold": { "total": 400 } },
                "3508": { "name": "Essence Reaver", "gold": { "total": 2900 } }
            }
        })
        .to_string()
    }

    fn client() -> Client {
        Client::stubbed(
            "14.1.1",
            Box::new(RoutedTransport::new().route(ITEMS_URL, &items_body())),
        )
    }

    #[test]
    fn all_returns_the_data_map() {
        let client = client();

        let body = client.items().all().unwrap();

        assert_eq!(body["data"]["1001"]["name"], "Boots");
    }

    #[test]
    fn find_looks_up_by_id() {
        let client = client();

        let boots = client.items().find("1001").unwrap().unwrap();
        assert_eq!(boots["name"], "Boots");

        assert!(client.items().find("99999").unwrap().is_none());
    }

    #[test]
    fn list_ids_covers_every_item() {
        let client = client();

        let mut ids = client.items().list_ids().unwrap();
        ids.sort();

        assert_eq!(ids, vec!["1001", "1036", "3070", "3508"]);
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let client = client();

        let lower = client.items().search("sword").unwrap();
        let upper = client.items().search("SWORD").unwrap();

        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0]["name"], "Long Sword");
        assert_eq!(lower, upper);
    }

    #[test]
    fn empty_query_returns_all_items() {
        let client = client();

        let results = client.items().search("").unwrap();

        assert_eq!(results.len(), 4);
    }

    #[test]
    fn search_misses_return_an_empty_list() {
        let client = client();

        assert!(client.items().search("xyznonexistent").unwrap().is_empty());
    }

    #[test]
    fn find_by_name_is_an_exact_case_insensitive_match() {
        let client = client();

        let lower = client.items().find_by_name("boots").unwrap().unwrap();
        let upper = client.items().find_by_name("BOOTS").unwrap().unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower["name"], "Boots");

        // Absence is a value, not an error.
        assert!(client.items().find_by_name("Long").unwrap().is_none());
    }
}
