use async_trait::async_trait;

use crate::category::{MediaType, MovieListType, TimeWindow, TvListType};
use crate::error::TmdbError;

mod client;
mod services;
pub mod types;

pub use client::{convert_to_search_params, ParamValue, QueryParams, TmdbClient, TMDB_BASE};
use types::{
    Credits, ExternalIds, Images, Keywords, MovieDetails, MovieResult, Paged, ReviewResult,
    TrendingResult, TvResult, Videos,
};

/// One method per upstream TMDB resource used by the loaders.
#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn movies(
        &self,
        list: MovieListType,
        page: Option<u32>,
    ) -> Result<Paged<MovieResult>, TmdbError>;
    async fn movie(&self, id: u64) -> Result<MovieDetails, TmdbError>;
    async fn movie_credits(&self, id: u64) -> Result<Credits, TmdbError>;
    async fn movie_recommendations(&self, id: u64) -> Result<Paged<MovieResult>, TmdbError>;
    async fn movie_external_ids(&self, id: u64) -> Result<ExternalIds, TmdbError>;
    async fn movie_reviews(&self, id: u64) -> Result<Paged<ReviewResult>, TmdbError>;
    async fn movie_images(&self, id: u64) -> Result<Images, TmdbError>;
    async fn movie_videos(&self, id: u64) -> Result<Videos, TmdbError>;
    async fn movie_keywords(&self, id: u64) -> Result<Keywords, TmdbError>;
    async fn search_movies(
        &self,
        query: &str,
        page: Option<u32>,
    ) -> Result<Paged<MovieResult>, TmdbError>;
    async fn trending(
        &self,
        media: MediaType,
        window: TimeWindow,
    ) -> Result<Paged<TrendingResult>, TmdbError>;
    async fn tv_shows(
        &self,
        list: TvListType,
        page: Option<u32>,
    ) -> Result<Paged<TvResult>, TmdbError>;
}
