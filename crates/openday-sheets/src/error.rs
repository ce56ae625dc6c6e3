use thiserror::Error;

/// Failure taxonomy for the sheets pipeline.
///
/// Callers that only need the original site's behaviour can collapse all
/// variants to one generic failure, but the causes stay distinguishable.
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("auth error: {0}")]
    Auth(String),

    #[error("sheets API returned {status}: {body}")]
    RemoteApi { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
