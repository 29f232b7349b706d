use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::{form_urlencoded, Url};

use crate::config::AppConfig;
use crate::error::{ApiErrorBody, TmdbError};

pub const TMDB_BASE: &str = "https://api.themoviedb.org/3/";

/// A single query parameter value. `Absent` entries are skipped when the
/// query string is rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
    Absent,
}

impl ParamValue {
    fn render(&self) -> Option<String> {
        match self {
            ParamValue::Text(s) => Some(s.clone()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Float(f) => Some(f.to_string()),
            ParamValue::Absent => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Absent)
    }
}

/// Ordered query parameters. Re-setting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn extend(&mut self, other: &QueryParams) {
        for (key, value) in &other.entries {
            self.set(key, value.clone());
        }
    }
}

/// Renders `params` as `?k=v&...`, dropping absent values.
pub fn convert_to_search_params(params: &QueryParams) -> String {
    format!("?{}", encode_pairs(params))
}

fn encode_pairs(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in &params.entries {
        if let Some(rendered) = value.render() {
            serializer.append_pair(key, &rendered);
        }
    }
    serializer.finish()
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: Url,
    api_key: String,
    diagnostics: bool,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: Url, diagnostics: bool) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
            diagnostics,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_base_url.clone(),
            config.diagnostics,
        )
    }

    fn request_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url, TmdbError> {
        let mut url = self.base_url.join(endpoint)?;
        let mut all = QueryParams::new().with("api_key", self.api_key.as_str());
        all.extend(params);
        url.set_query(Some(&encode_pairs(&all)));
        Ok(url)
    }

    /// Issues a single GET against `endpoint` and decodes the body as `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<T, TmdbError> {
        let url = self.request_url(endpoint, params)?;
        debug!(endpoint, "TMDB request");

        let res = self.client.get(url).send().await?;
        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            let err = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) => TmdbError::Api {
                    status: status.as_u16(),
                    body,
                },
                Err(_) => TmdbError::UnexpectedStatus {
                    status: status.as_u16(),
                    body: text,
                },
            };
            if self.diagnostics {
                error!(endpoint, status = status.as_u16(), error = %err, "TMDB request failed");
            } else {
                debug!(endpoint, status = status.as_u16(), "TMDB request failed");
            }
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|source| TmdbError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_absent_values_and_keeps_order() {
        let params = QueryParams::new()
            .with("query", "fight club")
            .with("page", 2u32)
            .with("region", None::<&str>)
            .with("year", Some(1999i64))
            .with("score", 7.5);
        assert_eq!(
            convert_to_search_params(&params),
            "?query=fight+club&page=2&year=1999&score=7.5"
        );
    }

    #[test]
    fn resetting_a_key_keeps_its_position() {
        let mut params = QueryParams::new().with("a", "1").with("b", "2");
        params.set("a", "3");
        assert_eq!(convert_to_search_params(&params), "?a=3&b=2");
    }

    #[test]
    fn request_url_puts_api_key_first() {
        let client = TmdbClient::new(
            "secret",
            Url::parse(TMDB_BASE).expect("base url"),
            false,
        );
        let url = client
            .request_url("movie/popular", &QueryParams::new().with("page", 3u32))
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/movie/popular?api_key=secret&page=3"
        );
    }

    #[test]
    fn empty_params_render_a_bare_question_mark() {
        assert_eq!(convert_to_search_params(&QueryParams::new()), "?");
    }
}
