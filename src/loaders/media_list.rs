use serde::Serialize;
use tracing::debug;

use super::{Loaded, MediaSummary};
use crate::category::{ListType, MediaType, TimeWindow};
use crate::error::RouteError;
use crate::pagination::Pagination;
use crate::params::RequestParams;
use crate::tmdb::types::TrendingResult;
use crate::tmdb::TmdbApi;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListPage {
    pub media_type: MediaType,
    pub list_type: &'static str,
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub results: Vec<MediaSummary>,
    pub pagination: Pagination,
}

/// `GET /media/{mediaType}/{listType}?page=`.
///
/// Trending lists are a single page of today's results.
pub async fn load(
    tmdb: &dyn TmdbApi,
    media_type: &str,
    list_type: &str,
    params: &RequestParams,
) -> Result<Loaded<MediaListPage>, RouteError> {
    let media_type: MediaType = media_type.parse()?;
    let list = media_type.parse_list(list_type)?;
    let requested = params.page();
    debug!(media = %media_type, list = list.slug(), page = requested, "Loading media list");

    let (page, total_pages, total_results, results) = match list {
        ListType::Trending => {
            let trending = tmdb.trending(media_type, TimeWindow::Day).await?;
            let results: Vec<MediaSummary> = trending
                .results
                .iter()
                .map(|item| match item {
                    TrendingResult::Movie(movie) => MediaSummary::from(movie),
                    TrendingResult::Tv(show) => MediaSummary::from(show),
                })
                .collect();
            (1, 1, results.len() as u64, results)
        }
        ListType::Movies(list) => {
            let movies = tmdb.movies(list, Some(requested)).await?;
            (
                movies.page,
                movies.total_pages,
                movies.total_results,
                movies.results.iter().map(MediaSummary::from).collect(),
            )
        }
        ListType::TvShows(list) => {
            let shows = tmdb.tv_shows(list, Some(requested)).await?;
            (
                shows.page,
                shows.total_pages,
                shows.total_results,
                shows.results.iter().map(MediaSummary::from).collect(),
            )
        }
    };

    Ok(Loaded::page(MediaListPage {
        media_type,
        list_type: list.slug(),
        page,
        total_pages,
        total_results,
        results,
        pagination: Pagination::new(page, total_pages, params),
    }))
}
