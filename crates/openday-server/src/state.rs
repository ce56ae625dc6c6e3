use std::sync::Arc;

use openday_sheets::{RowSink, ServiceAccountKey, SheetsClient};

use crate::config::Config;

/// Shared state handed to every request handler.
///
/// Holds the row sink plus the two destination tab names. Handlers share
/// nothing else; each request is an independent append.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn RowSink>,
    pub survey_tab: Arc<str>,
    pub registration_tab: Arc<str>,
}

impl AppState {
    /// Build production state: a [`SheetsClient`] against the configured
    /// spreadsheet.
    pub fn from_config(config: &Config) -> Self {
        let client = SheetsClient::new(
            config.spreadsheet_id.clone(),
            ServiceAccountKey {
                client_email: config.client_email.clone(),
                private_key_pem: config.private_key.clone(),
            },
        );
        Self {
            sink: Arc::new(client),
            survey_tab: config.survey_tab.as_str().into(),
            registration_tab: config.registration_tab.as_str().into(),
        }
    }
}
