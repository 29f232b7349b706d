//! `robots.txt` and `sitemap.xml`.

use axum::http::uri::Authority;
use quick_xml::escape::escape;
use tracing::debug;

use super::Loaded;
use crate::cache::CacheControl;
use crate::category::MediaType;

/// `host[:port]` when `raw` is a plain URI authority. Paths, queries and
/// user info are rejected.
fn authority_host(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains('@') {
        return None;
    }
    let authority: Authority = raw.parse().ok()?;
    Some(match authority.port_u16() {
        Some(port) => format!("{}:{port}", authority.host()),
        None => authority.host().to_string(),
    })
}

/// Public origin the crawler reached us on. A valid forwarded host wins over
/// the `Host` header; local hosts are served over plain http.
pub fn site_origin(forwarded_host: Option<&str>, host: Option<&str>) -> String {
    let forwarded = forwarded_host.and_then(|raw| {
        let parsed = authority_host(raw);
        if parsed.is_none() {
            debug!(forwarded_host = raw, "Ignoring malformed forwarded host");
        }
        parsed
    });
    let host = forwarded
        .or_else(|| host.and_then(authority_host))
        .unwrap_or_else(|| "localhost".to_string());
    let scheme = if host.contains("localhost") { "http" } else { "https" };
    format!("{scheme}://{host}")
}

pub fn robots_txt(origin: &str) -> Loaded<String> {
    Loaded {
        data: format!("User-agent: *\nAllow: /\n\nSitemap: {origin}/sitemap.xml\n"),
        cache_control: CacheControl::SEO,
    }
}

/// Every route that takes no path parameter besides the fixed list slugs.
pub fn sitemap_paths() -> Vec<String> {
    let mut paths = vec!["/".to_string(), "/search".to_string()];
    for media in MediaType::ALL {
        for list in media.lists() {
            paths.push(format!("/media/{}/{}", media.slug(), list.slug()));
        }
    }
    paths
}

pub fn sitemap_xml(origin: &str) -> Loaded<String> {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in sitemap_paths() {
        let loc = format!("{origin}{path}");
        xml.push_str(&format!("  <url><loc>{}</loc></url>\n", escape(loc.as_str())));
    }
    xml.push_str("</urlset>\n");

    Loaded {
        data: xml,
        cache_control: CacheControl::SEO,
    }
}
