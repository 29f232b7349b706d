//! Per-page loaders: parse request parameters, call TMDB, reshape the
//! responses into what the page shows.

use serde::Serialize;

use crate::cache::CacheControl;
use crate::error::RouteError;
use crate::format;
use crate::images;
use crate::tmdb::types::{MovieDetails, MovieResult, ReviewResult, TvResult};

pub mod home;
pub mod media_list;
pub mod movie;
pub mod search;
pub mod seo;

/// Loader output plus the cache policy the HTTP layer must forward.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub data: T,
    pub cache_control: CacheControl,
}

impl<T> Loaded<T> {
    pub fn page(data: T) -> Self {
        Self {
            data,
            cache_control: CacheControl::PAGE,
        }
    }
}

/// A list entry, shared by movie lists, TV lists and trending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSummary {
    pub id: u64,
    pub poster_path: Option<String>,
    pub title: String,
    pub vote_average: f64,
    pub release_date: Option<String>,
    pub vote_count: u64,
}

impl From<&MovieResult> for MediaSummary {
    fn from(movie: &MovieResult) -> Self {
        Self {
            id: movie.id,
            poster_path: movie.poster_path.clone(),
            title: movie.title.clone(),
            vote_average: movie.vote_average,
            release_date: movie.release_date.clone(),
            vote_count: movie.vote_count,
        }
    }
}

impl From<&TvResult> for MediaSummary {
    fn from(show: &TvResult) -> Self {
        Self {
            id: show.id,
            poster_path: show.poster_path.clone(),
            title: show.name.clone(),
            vote_average: show.vote_average,
            release_date: show.first_air_date.clone(),
            vote_count: show.vote_count,
        }
    }
}

/// Title block shown above the credits and reviews tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieHeader {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

impl From<&MovieDetails> for MovieHeader {
    fn from(movie: &MovieDetails) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            overview: movie.overview.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub avatar_path: Option<String>,
    pub avatar_url: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: String,
    pub author: ReviewAuthor,
    pub rating: Option<f64>,
    /// Rendered HTML.
    pub content: String,
    pub created_date: Option<String>,
}

impl From<&ReviewResult> for ReviewView {
    fn from(review: &ReviewResult) -> Self {
        let details = &review.author_details;
        let name = [details.name.as_deref(), details.username.as_deref()]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.trim().is_empty())
            .unwrap_or(&review.author)
            .to_string();

        Self {
            id: review.id.clone(),
            author: ReviewAuthor {
                avatar_path: details.avatar_path.clone(),
                avatar_url: details.avatar_path.as_deref().map(images::avatar_url),
                name,
            },
            rating: details.rating,
            content: format::markdown_to_html(&review.content),
            created_date: format::medium_date(&review.created_at),
        }
    }
}

pub(crate) fn parse_movie_id(raw: &str) -> Result<u64, RouteError> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RouteError::InvalidMovieId(raw.to_string())),
    }
}
