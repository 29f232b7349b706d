use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error body returned by TMDB for non-success responses.
///
/// TMDB answers with `{status_code, status_message, success}` while proxies in
/// front of it may answer with `{error, message, status}`; unknown fields are
/// kept in `extra` so the parsed body round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ErrorMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Lines(Vec<String>),
}

impl ApiErrorBody {
    /// Best human-readable description of the failure.
    pub fn describe(&self) -> String {
        match &self.message {
            Some(ErrorMessage::Text(text)) => text.clone(),
            Some(ErrorMessage::Lines(lines)) => lines.join("; "),
            None => self
                .extra
                .get("status_message")
                .and_then(Value::as_str)
                .or(self.error.as_deref())
                .unwrap_or("unknown error")
                .to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("TMDB API error (HTTP {status}): {}", body.describe())]
    Api { status: u16, body: ApiErrorBody },
    #[error("TMDB API error (HTTP {status}): {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("TMDB request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("TMDB response for '{endpoint}' did not match the expected shape: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid TMDB URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Failure of a route loader. Parameter errors are raised before any upstream
/// call is made.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Unhandled case of mediaType: {0:?}")]
    UnknownMediaType(String),
    #[error("Unhandled case of listType: {list_type:?} for {media_type}")]
    UnknownListType {
        media_type: &'static str,
        list_type: String,
    },
    #[error("No movie found for id {0:?}")]
    InvalidMovieId(String),
    #[error(transparent)]
    Upstream(#[from] TmdbError),
}
