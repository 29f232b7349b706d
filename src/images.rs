pub const BASE_IMAGE_URL: &str = "https://image.tmdb.org/t/p/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropSize {
    Xs,
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Original,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSize {
    Xs,
    Sm,
    Md,
    Lg,
}

pub trait ImageSize {
    fn segment(self) -> &'static str;
}

impl ImageSize for BackdropSize {
    fn segment(self) -> &'static str {
        match self {
            BackdropSize::Xs => "w300",
            BackdropSize::Sm => "w780",
            BackdropSize::Md => "w1280",
            BackdropSize::Lg => "original",
        }
    }
}

impl ImageSize for PosterSize {
    fn segment(self) -> &'static str {
        match self {
            PosterSize::Xs => "w92",
            PosterSize::Sm => "w154",
            PosterSize::Md => "w185",
            PosterSize::Lg => "w342",
            PosterSize::Xl => "w500",
            PosterSize::Xl2 => "w780",
            PosterSize::Original => "original",
        }
    }
}

impl ImageSize for ProfileSize {
    fn segment(self) -> &'static str {
        match self {
            ProfileSize::Xs => "w45",
            ProfileSize::Sm => "w185",
            ProfileSize::Md => "h632",
            ProfileSize::Lg => "original",
        }
    }
}

/// `path` is a TMDB file path with its leading slash (`/abc.jpg`).
pub fn image_url(size: impl ImageSize, path: &str) -> String {
    format!("{BASE_IMAGE_URL}{}{path}", size.segment())
}

/// Review avatars are either TMDB files or absolute Gravatar URLs stored with
/// a leading slash (`/https://secure.gravatar.com/...`).
pub fn avatar_url(path: &str) -> String {
    if path.contains("gravatar") {
        path.strip_prefix('/').unwrap_or(path).to_string()
    } else {
        image_url(ProfileSize::Xs, path)
    }
}

pub fn youtube_embed_url(key: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{key}?controls=0")
}
