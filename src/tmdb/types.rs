//! Upstream TMDB response shapes. Only the fields the loaders read are
//! declared; optional upstream values are `Option` so a `null` never reaches
//! the views as a surprise.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    pub page: u32,
    pub results: Vec<T>,
    pub total_pages: u32,
    pub total_results: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieResult {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvResult {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "media_type", rename_all = "lowercase")]
pub enum TrendingResult {
    Movie(MovieResult),
    Tv(TvResult),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    pub original_language: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub department: String,
    pub job: String,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub facebook_id: Option<String>,
    #[serde(default)]
    pub instagram_id: Option<String>,
    #[serde(default)]
    pub twitter_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewResult {
    pub id: String,
    pub author: String,
    pub author_details: AuthorDetails,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_path: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub backdrops: Vec<ImageFile>,
    #[serde(default)]
    pub posters: Vec<ImageFile>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ImageFile {
    pub file_path: String,
    #[serde(default)]
    pub aspect_ratio: f64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default, skip_serializing)]
    pub iso_639_1: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keywords {
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Keyword {
    pub id: u64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trending_results_are_tagged_by_media_type() {
        let page: Paged<TrendingResult> = serde_json::from_value(json!({
            "page": 1,
            "total_pages": 10,
            "total_results": 200,
            "results": [
                { "media_type": "movie", "id": 1, "title": "Movie", "vote_average": 7.1 },
                { "media_type": "tv", "id": 2, "name": "Show", "first_air_date": "2020-01-01" }
            ]
        }))
        .expect("trending page");
        assert!(matches!(&page.results[0], TrendingResult::Movie(m) if m.title == "Movie"));
        assert!(matches!(&page.results[1], TrendingResult::Tv(t) if t.name == "Show"));
    }

    #[test]
    fn null_optional_fields_deserialize() {
        let detail: MovieDetails = serde_json::from_value(json!({
            "id": 550,
            "title": "Fight Club",
            "poster_path": null,
            "tagline": null,
            "runtime": null,
            "original_language": "en"
        }))
        .expect("movie detail");
        assert!(detail.poster_path.is_none());
        assert_eq!(detail.budget, 0);
        assert!(detail.genres.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let res = serde_json::from_value::<MovieDetails>(json!({ "id": 550 }));
        assert!(res.is_err());
    }
}
