//! Row appends against the Sheets v4 values API.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::SheetsError;
use crate::auth::{ServiceAccountKey, TokenProvider};

const API_BASE: &str = "https://sheets.googleapis.com";

/// Anything that can persist one row of string cells to a named tab.
///
/// The endpoints depend on this seam rather than on [`SheetsClient`]
/// directly, so handler tests can substitute a recording sink.
#[async_trait]
pub trait RowSink: Send + Sync {
    async fn append_row(&self, tab: &str, values: Vec<String>) -> Result<(), SheetsError>;
}

/// Append-only client for one spreadsheet document.
pub struct SheetsClient {
    http: reqwest::Client,
    tokens: TokenProvider,
    spreadsheet_id: String,
    api_base: String,
}

impl SheetsClient {
    /// Create a client for the given spreadsheet and service account.
    pub fn new(spreadsheet_id: String, key: ServiceAccountKey) -> Self {
        let http = reqwest::Client::new();
        Self {
            tokens: TokenProvider::new(http.clone(), key),
            http,
            spreadsheet_id,
            api_base: API_BASE.to_string(),
        }
    }

    fn append_url(&self, tab: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}!A1:append\
             ?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS",
            self.api_base, self.spreadsheet_id, tab
        )
    }
}

#[async_trait]
impl RowSink for SheetsClient {
    /// Append one row of cells to the end of `tab`.
    ///
    /// Column order is whatever the caller passes; the sheet's existing
    /// header row is the only schema.
    async fn append_row(&self, tab: &str, values: Vec<String>) -> Result<(), SheetsError> {
        let token = self.tokens.bearer_token().await?;
        let url = self.append_url(tab);

        info!(tab = %tab, cells = values.len(), "appending row");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "values": [values] }))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetsError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        info!(tab = %tab, "row appended");
        Ok(())
    }
}
