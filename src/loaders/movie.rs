use serde::Serialize;
use tracing::{debug, instrument};

use super::{parse_movie_id, Loaded, MovieHeader, ReviewView};
use crate::credits::{CreditPerson, CrewByDepartment, MainCrew};
use crate::error::RouteError;
use crate::format;
use crate::images::youtube_embed_url;
use crate::tmdb::types::{Genre, ImageFile, Keyword, MovieDetails, Videos};
use crate::tmdb::TmdbApi;

const FEATURED_LIMIT: usize = 9;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieOverview {
    pub id: u64,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub title: String,
    pub homepage: Option<String>,
    pub vote_average: String,
    pub vote_count: String,
    pub release_date: Option<String>,
    pub runtime: Option<String>,
    pub genres: Vec<Genre>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<String>,
    pub original_language: String,
}

impl From<&MovieDetails> for MovieOverview {
    fn from(movie: &MovieDetails) -> Self {
        Self {
            id: movie.id,
            backdrop_path: movie.backdrop_path.clone(),
            poster_path: movie.poster_path.clone(),
            title: movie.title.clone(),
            homepage: movie.homepage.clone().filter(|url| !url.is_empty()),
            vote_average: format::vote_average(movie.vote_average),
            vote_count: format::compact_number(movie.vote_count),
            release_date: movie.release_date.clone(),
            runtime: movie.runtime.map(format::runtime),
            genres: movie.genres.clone(),
            tagline: movie.tagline.clone().filter(|line| !line.is_empty()),
            overview: movie.overview.clone(),
            status: movie.status.clone(),
            budget: (movie.budget != 0).then(|| format::currency_usd(movie.budget)),
            revenue: (movie.revenue != 0).then(|| format::currency_usd(movie.revenue)),
            original_language: format::language_name(&movie.original_language),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastCard {
    pub id: u64,
    pub profile_path: Option<String>,
    pub name: String,
    pub character: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailCredits {
    #[serde(flatten)]
    pub main_crew: MainCrew,
    pub top_cast: Vec<CastCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub featured_review: Option<ReviewView>,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: u64,
    pub backdrop_path: Option<String>,
    pub title: String,
    pub vote_average: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Gallery {
    pub count: usize,
    pub featured: Vec<ImageFile>,
}

impl Gallery {
    fn new(files: Vec<ImageFile>) -> Self {
        let count = files.len();
        Self {
            count,
            featured: files.into_iter().take(FEATURED_LIMIT).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialIds {
    #[serde(rename = "imdbID")]
    pub imdb: Option<String>,
    #[serde(rename = "facebookID")]
    pub facebook: Option<String>,
    #[serde(rename = "instagramID")]
    pub instagram: Option<String>,
    #[serde(rename = "twitterID")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailPage {
    pub movie: MovieOverview,
    #[serde(rename = "youtubeTrailerID")]
    pub youtube_trailer_id: Option<String>,
    /// Privacy-enhanced embed URL for the trailer player.
    pub youtube_trailer_url: Option<String>,
    pub credits: DetailCredits,
    pub reviews: ReviewSummary,
    pub recommendations: Vec<Recommendation>,
    pub posters: Gallery,
    pub backdrops: Gallery,
    #[serde(rename = "externalIDs")]
    pub external_ids: SocialIds,
    pub keywords: Vec<Keyword>,
}

fn youtube_trailer(videos: &Videos) -> Option<String> {
    videos
        .results
        .iter()
        .find(|video| video.video_type == "Trailer" && video.site == "YouTube")
        .map(|video| video.key.clone())
}

/// `GET /movies/{movieId}`: eight upstream calls issued together. The page
/// fails if any one of them fails.
#[instrument(skip(tmdb))]
pub async fn load_detail(
    tmdb: &dyn TmdbApi,
    movie_id: &str,
) -> Result<Loaded<MovieDetailPage>, RouteError> {
    let id = parse_movie_id(movie_id)?;

    let (movie, credits, recommendations, external_ids, reviews, images, videos, keywords) = tokio::try_join!(
        tmdb.movie(id),
        tmdb.movie_credits(id),
        tmdb.movie_recommendations(id),
        tmdb.movie_external_ids(id),
        tmdb.movie_reviews(id),
        tmdb.movie_images(id),
        tmdb.movie_videos(id),
        tmdb.movie_keywords(id),
    )?;
    debug!(
        cast = credits.cast.len(),
        crew = credits.crew.len(),
        reviews = reviews.total_results,
        "Movie detail fetched"
    );

    let trailer = youtube_trailer(&videos);
    let page = MovieDetailPage {
        movie: MovieOverview::from(&movie),
        youtube_trailer_url: trailer.as_deref().map(youtube_embed_url),
        youtube_trailer_id: trailer,
        credits: DetailCredits {
            main_crew: MainCrew::group(&credits.crew),
            top_cast: credits
                .cast
                .iter()
                .take(FEATURED_LIMIT)
                .map(|member| CastCard {
                    id: member.id,
                    profile_path: member.profile_path.clone(),
                    name: member.name.clone(),
                    character: member.character.clone(),
                })
                .collect(),
        },
        reviews: ReviewSummary {
            featured_review: reviews.results.first().map(ReviewView::from),
            count: reviews.total_results,
        },
        recommendations: recommendations
            .results
            .iter()
            .map(|item| Recommendation {
                id: item.id,
                backdrop_path: item.backdrop_path.clone(),
                title: item.title.clone(),
                vote_average: format::vote_average(item.vote_average),
            })
            .collect(),
        posters: Gallery::new(images.posters),
        backdrops: Gallery::new(images.backdrops),
        external_ids: SocialIds {
            imdb: external_ids.imdb_id.or(movie.imdb_id),
            facebook: external_ids.facebook_id,
            instagram: external_ids.instagram_id,
            twitter: external_ids.twitter_id,
        },
        keywords: keywords.keywords,
    };

    Ok(Loaded::page(page))
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieCreditsPage {
    pub movie: MovieHeader,
    pub cast: Vec<CreditPerson>,
    #[serde(flatten)]
    pub crew: CrewByDepartment,
}

/// `GET /movies/{movieId}/credits`.
#[instrument(skip(tmdb))]
pub async fn load_credits(
    tmdb: &dyn TmdbApi,
    movie_id: &str,
) -> Result<Loaded<MovieCreditsPage>, RouteError> {
    let id = parse_movie_id(movie_id)?;
    let (movie, credits) = tokio::try_join!(tmdb.movie(id), tmdb.movie_credits(id))?;

    let crew = CrewByDepartment::group(&credits.crew);
    if crew.member_count() < credits.crew.len() {
        debug!(
            dropped = credits.crew.len() - crew.member_count(),
            "Crew members outside the known departments were skipped"
        );
    }

    Ok(Loaded::page(MovieCreditsPage {
        movie: MovieHeader::from(&movie),
        cast: credits.cast.iter().map(CreditPerson::from).collect(),
        crew,
    }))
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieReviewsPage {
    pub movie: MovieHeader,
    pub count: u64,
    pub reviews: Vec<ReviewView>,
}

/// `GET /movies/{movieId}/reviews`.
#[instrument(skip(tmdb))]
pub async fn load_reviews(
    tmdb: &dyn TmdbApi,
    movie_id: &str,
) -> Result<Loaded<MovieReviewsPage>, RouteError> {
    let id = parse_movie_id(movie_id)?;
    let (movie, reviews) = tokio::try_join!(tmdb.movie(id), tmdb.movie_reviews(id))?;

    Ok(Loaded::page(MovieReviewsPage {
        movie: MovieHeader::from(&movie),
        count: reviews.total_results,
        reviews: reviews.results.iter().map(ReviewView::from).collect(),
    }))
}
