use crate::config::AppConfig;
use crate::error::{RouteError, TmdbError};
use crate::hydration::{self, Hydration};
use crate::loaders::{self, Loaded};
use crate::params::RequestParams;
use crate::tmdb::{TmdbApi, TmdbClient};
use anyhow::Result;
use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::TypedHeader;
use headers::Host;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<dyn TmdbApi>,
    pub hydration: &'static Hydration,
}

impl AppState {
    pub fn new(tmdb: Arc<dyn TmdbApi>) -> Self {
        Self {
            tmdb,
            hydration: hydration::global(),
        }
    }
}

pub async fn run_server() -> Result<()> {
    let config = AppConfig::from_env()?;
    let tmdb: Arc<dyn TmdbApi> = Arc::new(TmdbClient::from_config(&config));
    let state = AppState::new(tmdb);
    let hydration = state.hydration;

    let app = build_router(state);

    info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    if hydration.mark_hydrated() {
        debug!("Server hydrated");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/media/:media_type/:list_type", get(media_list))
        .route("/movies/:movie_id", get(movie_detail))
        .route("/movies/:movie_id/credits", get(movie_credits))
        .route("/movies/:movie_id/reviews", get(movie_reviews))
        .route("/search", get(search))
        .route("/robots.txt", get(robots))
        .route("/sitemap.xml", get(sitemap))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.hydration.is_hydrated() {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "STARTING")
    }
}

impl<T: Serialize> IntoResponse for Loaded<T> {
    fn into_response(self) -> Response {
        (
            [(header::CACHE_CONTROL, self.cache_control.to_string())],
            Json(self.data),
        )
            .into_response()
    }
}

fn status_for(err: &RouteError) -> StatusCode {
    match err {
        RouteError::UnknownMediaType(_)
        | RouteError::UnknownListType { .. }
        | RouteError::InvalidMovieId(_) => StatusCode::BAD_REQUEST,
        RouteError::Upstream(TmdbError::Api { status, .. }) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        RouteError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            error!("Loader failed: {}", self);
        } else {
            warn!("Loader rejected request: {}", self);
        }
        let body = json!({
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.to_string(),
            "status": status.as_u16(),
        });
        (status, Json(body)).into_response()
    }
}

async fn home(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, RouteError> {
    let params = RequestParams::parse(query.as_deref());
    Ok(loaders::home::load(state.tmdb.as_ref(), &params)
        .await?
        .into_response())
}

async fn media_list(
    State(state): State<AppState>,
    Path((media_type, list_type)): Path<(String, String)>,
    RawQuery(query): RawQuery,
) -> Result<Response, RouteError> {
    let params = RequestParams::parse(query.as_deref());
    Ok(
        loaders::media_list::load(state.tmdb.as_ref(), &media_type, &list_type, &params)
            .await?
            .into_response(),
    )
}

async fn movie_detail(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Response, RouteError> {
    Ok(loaders::movie::load_detail(state.tmdb.as_ref(), &movie_id)
        .await?
        .into_response())
}

async fn movie_credits(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Response, RouteError> {
    Ok(loaders::movie::load_credits(state.tmdb.as_ref(), &movie_id)
        .await?
        .into_response())
}

async fn movie_reviews(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Response, RouteError> {
    Ok(loaders::movie::load_reviews(state.tmdb.as_ref(), &movie_id)
        .await?
        .into_response())
}

async fn search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, RouteError> {
    let params = RequestParams::parse(query.as_deref());
    Ok(loaders::search::load(state.tmdb.as_ref(), &params)
        .await?
        .into_response())
}

fn request_origin(headers: &HeaderMap, host: Option<TypedHeader<Host>>) -> String {
    let forwarded = headers
        .get("x-forwarded-host")
        .and_then(|v| v.to_str().ok());
    let host = host.map(|TypedHeader(h)| h.to_string());
    loaders::seo::site_origin(forwarded, host.as_deref())
}

fn text_response(loaded: Loaded<String>, content_type: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CACHE_CONTROL, loaded.cache_control.to_string()),
        ],
        loaded.data,
    )
        .into_response()
}

async fn robots(headers: HeaderMap, host: Option<TypedHeader<Host>>) -> Response {
    let origin = request_origin(&headers, host);
    text_response(loaders::seo::robots_txt(&origin), "text/plain; charset=utf-8")
}

async fn sitemap(headers: HeaderMap, host: Option<TypedHeader<Host>>) -> Response {
    let origin = request_origin(&headers, host);
    text_response(
        loaders::seo::sitemap_xml(&origin),
        "application/xml; charset=utf-8",
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        term.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Shutdown signal received (Ctrl+C)");
        }
        _ = terminate => {
            info!("Shutdown signal received (SIGTERM)");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorBody;

    #[test]
    fn upstream_status_is_forwarded() {
        let not_found = RouteError::Upstream(TmdbError::Api {
            status: 404,
            body: ApiErrorBody::default(),
        });
        assert_eq!(status_for(&not_found), StatusCode::NOT_FOUND);

        let garbled = RouteError::Upstream(TmdbError::UnexpectedStatus {
            status: 500,
            body: "<html>".into(),
        });
        assert_eq!(status_for(&garbled), StatusCode::BAD_GATEWAY);

        let bad_id = RouteError::InvalidMovieId("abc".into());
        assert_eq!(status_for(&bad_id), StatusCode::BAD_REQUEST);
    }
}
