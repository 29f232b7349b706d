use std::fmt;
use std::time::Duration;

const MONTH: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// A `Cache-Control` policy set by a loader and forwarded verbatim on the
/// HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheControl {
    pub public: bool,
    pub max_age: Duration,
    pub stale_while_revalidate: Duration,
}

impl CacheControl {
    /// Policy for loader responses.
    pub const PAGE: CacheControl = CacheControl {
        public: true,
        max_age: Duration::from_secs(60),
        stale_while_revalidate: MONTH,
    };

    /// Policy for robots.txt and sitemap.xml.
    pub const SEO: CacheControl = CacheControl {
        public: true,
        max_age: Duration::from_secs(5 * 60),
        stale_while_revalidate: MONTH,
    };
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = if self.public { "public" } else { "private" };
        write!(
            f,
            "{visibility}, max-age={}, stale-while-revalidate={}",
            self.max_age.as_secs(),
            self.stale_while_revalidate.as_secs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_value() {
        assert_eq!(
            CacheControl::PAGE.to_string(),
            "public, max-age=60, stale-while-revalidate=2592000"
        );
        assert_eq!(
            CacheControl::SEO.to_string(),
            "public, max-age=300, stale-while-revalidate=2592000"
        );
    }
}
