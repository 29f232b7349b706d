use serde::Serialize;
use tracing::debug;

use super::Loaded;
use crate::error::RouteError;
use crate::format;
use crate::pagination::Pagination;
use crate::params::RequestParams;
use crate::tmdb::types::MovieResult;
use crate::tmdb::TmdbApi;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: u64,
    pub poster_path: Option<String>,
    pub title: String,
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

impl From<&MovieResult> for SearchHit {
    fn from(movie: &MovieResult) -> Self {
        Self {
            id: movie.id,
            poster_path: movie.poster_path.clone(),
            title: movie.title.clone(),
            release_date: movie.release_date.as_deref().and_then(format::medium_date),
            overview: movie.overview.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: String,
    pub movies: Vec<SearchHit>,
    pub pagination: Pagination,
}

/// `GET /search?query=&page=`. An empty query is still sent upstream.
pub async fn load(
    tmdb: &dyn TmdbApi,
    params: &RequestParams,
) -> Result<Loaded<SearchPage>, RouteError> {
    let query = params.get("query").unwrap_or_default().to_string();
    let page = params.page();
    debug!(%query, page, "Searching movies");

    let movies = tmdb.search_movies(&query, Some(page)).await?;

    Ok(Loaded::page(SearchPage {
        query,
        page,
        total_pages: movies.total_pages,
        total_results: format::compact_number(movies.total_results),
        movies: movies.results.iter().map(SearchHit::from).collect(),
        pagination: Pagination::new(page, movies.total_pages, params),
    }))
}
