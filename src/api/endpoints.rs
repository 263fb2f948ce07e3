// Data Dragon endpoint definitions and CDN path builders.

pub const BASE_URL: &str = "https://ddragon.leagueoflegends.com";

/// Path of the newest-first version list.
pub const VERSIONS_PATH: &str = "/api/versions.json";

/// Path of one static JSON data file for a version/language/resource triple.
pub fn cdn_data_path(version: &str, language: &str, resource: &str) -> String {
    format!("/cdn/{}/data/{}/{}.json", version, language, resource)
}

/// Path of a CDN image, e.g. `cdn_image_path("champion/splash", "Ahri_0.jpg")`.
pub fn cdn_image_path(kind: &str, filename: &str) -> String {
    format!("/cdn/img/{}/{}", kind, filename)
}
