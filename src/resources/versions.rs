use serde_json::Value;

use crate::api::endpoints;
use crate::client::Client;
use crate::error::AppError;

/// Game version list, newest first.
pub struct Versions<'a> {
    client: &'a Client,
}

impl<'a> Versions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Versions { client }
    }

    /// All known versions, in the order the remote returns them
    /// (newest first).
    pub fn all(&self) -> Result<Vec<String>, AppError> {
        let body = self.client.connection().get(endpoints::VERSIONS_PATH, &[])?;
        parse_version_list(body)
    }

    /// The newest version.
    pub fn latest(&self) -> Result<String, AppError> {
        self.all()?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ApiError("version list is empty".to_string()))
    }

    /// Whether `version` appears in the version list.
    pub fn exists(&self, version: &str) -> Result<bool, AppError> {
        Ok(self.all()?.iter().any(|v| v == version))
    }
}

fn parse_version_list(body: Value) -> Result<Vec<String>, AppError> {
    serde_json::from_value(body)
        .map_err(|e| AppError::ApiError(format!("unexpected version payload: {}", e)))
}
