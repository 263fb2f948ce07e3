use serde_json::Value;

use crate::client::Client;
use crate::error::AppError;
use crate::resources;
use crate::resources::items::filter_by_name;

/// Summoner spell data; same contract shape as [`Items`](crate::resources::Items),
/// keyed by spell id.
pub struct SummonerSpells<'a> {
    client: &'a Client,
}

impl<'a> SummonerSpells<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        SummonerSpells { client }
    }

    pub fn all(&self) -> Result<Value, AppError> {
        resources::get(self.client, &resources::data_path(self.client, "summoner"))
    }

    pub fn find(&self, id: &str) -> Result<Option<Value>, AppError> {
        let body = self.all()?;
        Ok(body.get("data").and_then(|data| data.get(id)).cloned())
    }

    pub fn list_ids(&self) -> Result<Vec<String>, AppError> {
        let body = self.all()?;
        Ok(body
            .get("data")
            .and_then(Value::as_object)
            .map(|data| data.keys().cloned().collect())
            .unwrap_or_default())
    }

    /// Records whose name contains `query`, case-insensitively.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::connection::testing::RoutedTransport;
    use serde_json::json;

    const SPELLS_URL: &str =
        "https://ddragon.leagueoflegends.com/cdn/14.1.1/data/en_US/summoner.json";

    fn spells_body() -> String {
        json!({
            "type": "summoner",
            "data": {
                "SummonerFlash": { "name": "Flash", "description": "Teleports your champion..." },
                "SummonerDot": { "name": "Ignite", "description": "Ignites target enemy..." }
            }
        })
        .to_string()
    }

    fn client() -> Client {
        Client::stubbed(
            "14.1.1",
            Box::new(RoutedTransport::new().route(SPELLS_URL, &spells_body())),
        )
    }

    #[test]
    fn find_looks_up_by_spell_id() {
        let client = client();

        let flash = client.summoner_spells().find("SummonerFlash").unwrap().unwrap();
        assert_eq!(flash["name"], "Flash");

        assert!(client
            .summoner_spells()
            .find("NonExistentSpell")
            .unwrap()
            .is_none());
    }

    #[test]
    fn list_ids_covers_every_spell() {
        let client = client();

        let mut ids = client.summoner_spells().list_ids().unwrap();
        ids.sort();

        assert_eq!(ids, vec!["SummonerDot", "SummonerFlash"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let client = client();

        let lower = client.summoner_spells().search("flash").unwrap();
        let upper = client.summoner_spells().search("FLASH").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0]["name"], "Flash");
    }

    #[test]
    fn find_by_name_matches_exactly_ignoring_case() {
        let client = client();

        let spell = client.summoner_spells().find_by_name("flash").unwrap().unwrap();
        assert_eq!(spell["name"], "Flash");

        assert!(client
            .summoner_spells()
            .find_by_name("Fla")
            .unwrap()
            .is_none());
    }
}
