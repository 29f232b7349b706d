use serde::Serialize;
use tracing::debug;

use super::{Loaded, MediaSummary};
use crate::category::MovieListType;
use crate::error::RouteError;
use crate::pagination::Pagination;
use crate::params::RequestParams;
use crate::tmdb::TmdbApi;

const DEFAULT_LIST: &str = "now-playing";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub list_type: MovieListType,
    pub label: &'static str,
    pub page: u32,
    pub total_pages: u32,
    pub movies: Vec<MediaSummary>,
    pub pagination: Pagination,
}

/// `GET /?listType=&page=`: one of the four movie lists, `now-playing` by
/// default.
pub async fn load(
    tmdb: &dyn TmdbApi,
    params: &RequestParams,
) -> Result<Loaded<HomePage>, RouteError> {
    let list_type: MovieListType = params.get("listType").unwrap_or(DEFAULT_LIST).parse()?;
    let page = params.page();
    debug!(list = list_type.slug(), page, "Loading home list");

    let movies = tmdb.movies(list_type, Some(page)).await?;

    Ok(Loaded::page(HomePage {
        list_type,
        label: list_type.label(),
        page,
        total_pages: movies.total_pages,
        movies: movies.results.iter().map(MediaSummary::from).collect(),
        pagination: Pagination::new(page, movies.total_pages, params),
    }))
}
