use async_trait::async_trait;

use super::types::{
    Credits, ExternalIds, Images, Keywords, MovieDetails, MovieResult, Paged, ReviewResult,
    TrendingResult, TvResult, Videos,
};
use super::{QueryParams, TmdbApi, TmdbClient};
use crate::category::{MediaType, MovieListType, TimeWindow, TvListType};
use crate::error::TmdbError;

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn movies(
        &self,
        list: MovieListType,
        page: Option<u32>,
    ) -> Result<Paged<MovieResult>, TmdbError> {
        let endpoint = format!("movie/{}", list.subcollection());
        self.query(&endpoint, &QueryParams::new().with("page", page))
            .await
    }

    async fn movie(&self, id: u64) -> Result<MovieDetails, TmdbError> {
        self.query(&format!("movie/{id}"), &QueryParams::new()).await
    }

    async fn movie_credits(&self, id: u64) -> Result<Credits, TmdbError> {
        self.query(&format!("movie/{id}/credits"), &QueryParams::new())
            .await
    }

    async fn movie_recommendations(&self, id: u64) -> Result<Paged<MovieResult>, TmdbError> {
        self.query(&format!("movie/{id}/recommendations"), &QueryParams::new())
            .await
    }

    async fn movie_external_ids(&self, id: u64) -> Result<ExternalIds, TmdbError> {
        self.query(&format!("movie/{id}/external_ids"), &QueryParams::new())
            .await
    }

    async fn movie_reviews(&self, id: u64) -> Result<Paged<ReviewResult>, TmdbError> {
        self.query(&format!("movie/{id}/reviews"), &QueryParams::new())
            .await
    }

    async fn movie_images(&self, id: u64) -> Result<Images, TmdbError> {
        let params = QueryParams::new().with("include_image_language", "en,null");
        self.query(&format!("movie/{id}/images"), &params).await
    }

    async fn movie_videos(&self, id: u64) -> Result<Videos, TmdbError> {
        let params = QueryParams::new().with("include_video_language", "en,null");
        self.query(&format!("movie/{id}/videos"), &params).await
    }

    async fn movie_keywords(&self, id: u64) -> Result<Keywords, TmdbError> {
        self.query(&format!("movie/{id}/keywords"), &QueryParams::new())
            .await
    }

    async fn search_movies(
        &self,
        query: &str,
        page: Option<u32>,
    ) -> Result<Paged<MovieResult>, TmdbError> {
        let params = QueryParams::new().with("query", query).with("page", page);
        self.query("search/movie", &params).await
    }

    async fn trending(
        &self,
        media: MediaType,
        window: TimeWindow,
    ) -> Result<Paged<TrendingResult>, TmdbError> {
        let endpoint = format!(
            "trending/{}/{}",
            media.trending_segment(),
            window.segment()
        );
        self.query(&endpoint, &QueryParams::new()).await
    }

    async fn tv_shows(
        &self,
        list: TvListType,
        page: Option<u32>,
    ) -> Result<Paged<TvResult>, TmdbError> {
        let endpoint = format!("tv/{}", list.subcollection());
        self.query(&endpoint, &QueryParams::new().with("page", page))
            .await
    }
}
