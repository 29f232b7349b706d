//! URL-facing category names and their upstream TMDB counterparts.
//!
//! URL segments use hyphens (`now-playing`), TMDB uses underscores
//! (`now_playing`). The mapping is a closed set written out per variant.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaType {
    #[serde(rename = "movies")]
    Movies,
    #[serde(rename = "tv-shows")]
    TvShows,
}

impl MediaType {
    pub const ALL: [MediaType; 2] = [MediaType::Movies, MediaType::TvShows];

    pub fn slug(self) -> &'static str {
        match self {
            MediaType::Movies => "movies",
            MediaType::TvShows => "tv-shows",
        }
    }

    /// Segment used by the `trending/{media}/{window}` endpoint.
    pub fn trending_segment(self) -> &'static str {
        match self {
            MediaType::Movies => "movie",
            MediaType::TvShows => "tv",
        }
    }

    pub fn parse_list(self, value: &str) -> Result<ListType, RouteError> {
        if value == "trending" {
            return Ok(ListType::Trending);
        }
        match self {
            MediaType::Movies => value.parse().map(ListType::Movies),
            MediaType::TvShows => value.parse().map(ListType::TvShows),
        }
    }

    /// Every list reachable under this media type, trending first.
    pub fn lists(self) -> Vec<ListType> {
        let mut lists = vec![ListType::Trending];
        match self {
            MediaType::Movies => lists.extend(MovieListType::ALL.map(ListType::Movies)),
            MediaType::TvShows => lists.extend(TvListType::ALL.map(ListType::TvShows)),
        }
        lists
    }
}

impl FromStr for MediaType {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movies" => Ok(MediaType::Movies),
            "tv-shows" => Ok(MediaType::TvShows),
            other => Err(RouteError::UnknownMediaType(other.to_string())),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovieListType {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl MovieListType {
    pub const ALL: [MovieListType; 4] = [
        MovieListType::NowPlaying,
        MovieListType::Popular,
        MovieListType::TopRated,
        MovieListType::Upcoming,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            MovieListType::NowPlaying => "now-playing",
            MovieListType::Popular => "popular",
            MovieListType::TopRated => "top-rated",
            MovieListType::Upcoming => "upcoming",
        }
    }

    pub fn subcollection(self) -> &'static str {
        match self {
            MovieListType::NowPlaying => "now_playing",
            MovieListType::Popular => "popular",
            MovieListType::TopRated => "top_rated",
            MovieListType::Upcoming => "upcoming",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MovieListType::NowPlaying => "Now Playing",
            MovieListType::Popular => "Popular",
            MovieListType::TopRated => "Top Rated",
            MovieListType::Upcoming => "Upcoming",
        }
    }
}

impl FromStr for MovieListType {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovieListType::ALL
            .into_iter()
            .find(|l| l.slug() == s)
            .ok_or_else(|| RouteError::UnknownListType {
                media_type: MediaType::Movies.slug(),
                list_type: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TvListType {
    AiringToday,
    OnTheAir,
    Popular,
    TopRated,
}

impl TvListType {
    pub const ALL: [TvListType; 4] = [
        TvListType::AiringToday,
        TvListType::OnTheAir,
        TvListType::Popular,
        TvListType::TopRated,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            TvListType::AiringToday => "airing-today",
            TvListType::OnTheAir => "on-the-air",
            TvListType::Popular => "popular",
            TvListType::TopRated => "top-rated",
        }
    }

    pub fn subcollection(self) -> &'static str {
        match self {
            TvListType::AiringToday => "airing_today",
            TvListType::OnTheAir => "on_the_air",
            TvListType::Popular => "popular",
            TvListType::TopRated => "top_rated",
        }
    }
}

impl FromStr for TvListType {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TvListType::ALL
            .into_iter()
            .find(|l| l.slug() == s)
            .ok_or_else(|| RouteError::UnknownListType {
                media_type: MediaType::TvShows.slug(),
                list_type: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Trending,
    Movies(MovieListType),
    TvShows(TvListType),
}

impl ListType {
    pub fn slug(self) -> &'static str {
        match self {
            ListType::Trending => "trending",
            ListType::Movies(l) => l.slug(),
            ListType::TvShows(l) => l.slug(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
    Week,
}

impl TimeWindow {
    pub fn segment(self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_lists_map_to_underscored_subcollections() {
        let mapped: Vec<_> = ["now-playing", "popular", "top-rated", "upcoming"]
            .into_iter()
            .map(|s| s.parse::<MovieListType>().expect("known list").subcollection())
            .collect();
        assert_eq!(mapped, ["now_playing", "popular", "top_rated", "upcoming"]);
    }

    #[test]
    fn tv_lists_map_to_underscored_subcollections() {
        let mapped: Vec<_> = ["airing-today", "on-the-air", "popular", "top-rated"]
            .into_iter()
            .map(|s| s.parse::<TvListType>().expect("known list").subcollection())
            .collect();
        assert_eq!(mapped, ["airing_today", "on_the_air", "popular", "top_rated"]);
    }

    #[test]
    fn subcollection_is_slug_with_underscores() {
        for list in MovieListType::ALL {
            assert_eq!(list.subcollection(), list.slug().replace('-', "_"));
        }
        for list in TvListType::ALL {
            assert_eq!(list.subcollection(), list.slug().replace('-', "_"));
        }
    }

    #[test]
    fn rejects_unknown_values_instead_of_defaulting() {
        for bad in ["", "now_playing", "Popular", "latest", "airing-today"] {
            assert!(matches!(
                bad.parse::<MovieListType>(),
                Err(RouteError::UnknownListType { .. })
            ));
        }
        assert!(matches!(
            "upcoming".parse::<TvListType>(),
            Err(RouteError::UnknownListType { .. })
        ));
        assert!(matches!(
            "people".parse::<MediaType>(),
            Err(RouteError::UnknownMediaType(_))
        ));
    }

    #[test]
    fn trending_is_accepted_for_both_media_types() {
        for media in MediaType::ALL {
            assert_eq!(media.parse_list("trending").expect("trending"), ListType::Trending);
            assert_eq!(media.lists().len(), 5);
        }
    }
}
