use url::form_urlencoded;

/// Decoded query string of an incoming request, in original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `page` parameter; values that are not an unsigned integer read as 1.
    pub fn page(&self) -> u32 {
        self.get("page")
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1)
    }

    /// Copy with `key` set to `value`: the first occurrence is replaced in
    /// place and later duplicates removed, or the pair is appended.
    pub fn with(&self, key: &str, value: &str) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let mut replaced = false;
        for (k, v) in &self.pairs {
            if k == key {
                if !replaced {
                    pairs.push((k.clone(), value.to_string()));
                    replaced = true;
                }
            } else {
                pairs.push((k.clone(), v.clone()));
            }
        }
        if !replaced {
            pairs.push((key.to_string(), value.to_string()));
        }
        Self { pairs }
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(RequestParams::parse(None).page(), 1);
        assert_eq!(RequestParams::parse(Some("page=")).page(), 1);
        assert_eq!(RequestParams::parse(Some("page=abc")).page(), 1);
        assert_eq!(RequestParams::parse(Some("page=7")).page(), 7);
    }

    #[test]
    fn out_of_range_pages_are_not_clamped() {
        assert_eq!(RequestParams::parse(Some("page=9999")).page(), 9999);
        assert_eq!(RequestParams::parse(Some("page=0")).page(), 0);
        assert_eq!(RequestParams::parse(Some("page=-2")).page(), 1);
    }

    #[test]
    fn decodes_values() {
        let params = RequestParams::parse(Some("query=star+wars&x=%26"));
        assert_eq!(params.get("query"), Some("star wars"));
        assert_eq!(params.get("x"), Some("&"));
    }

    #[test]
    fn with_replaces_in_place_and_drops_duplicates() {
        let params = RequestParams::parse(Some("page=1&listType=popular&page=8"));
        assert_eq!(
            params.with("page", "2").to_query_string(),
            "page=2&listType=popular"
        );
        let params = RequestParams::parse(Some("query=dune"));
        assert_eq!(params.with("page", "2").to_query_string(), "query=dune&page=2");
    }
}
