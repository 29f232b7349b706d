use serde::Serialize;

use crate::params::RequestParams;

/// Previous/next navigation for a paged list. Only the two edges are guarded;
/// an out-of-range page typed into the URL is still served.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub previous: PageLink,
    pub next: PageLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLink {
    pub disabled: bool,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PageLink {
    fn new(target: u32, disabled: bool, current: &RequestParams) -> Self {
        let href = (!disabled).then(|| {
            let query = current.with("page", &target.to_string());
            format!("?{}", query.to_query_string())
        });
        Self {
            disabled,
            page: target,
            href,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, total_pages: u32, current: &RequestParams) -> Self {
        Self {
            previous: PageLink::new(page.saturating_sub(1), page <= 1, current),
            next: PageLink::new(page.saturating_add(1), page >= total_pages, current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: &str) -> RequestParams {
        RequestParams::parse(Some(raw))
    }

    #[test]
    fn first_page_disables_previous() {
        let p = Pagination::new(1, 5, &params("page=1"));
        assert!(p.previous.disabled);
        assert!(p.previous.href.is_none());
        assert!(!p.next.disabled);
        assert_eq!(p.next.page, 2);
        assert_eq!(p.next.href.as_deref(), Some("?page=2"));
    }

    #[test]
    fn last_page_disables_next() {
        let p = Pagination::new(5, 5, &params("page=5"));
        assert!(p.next.disabled);
        assert!(!p.previous.disabled);
        assert_eq!(p.previous.page, 4);
        assert_eq!(p.previous.href.as_deref(), Some("?page=4"));
    }

    #[test]
    fn middle_page_enables_both_and_keeps_other_params() {
        let p = Pagination::new(3, 5, &params("listType=top-rated&page=3&region=US"));
        assert_eq!(
            p.previous.href.as_deref(),
            Some("?listType=top-rated&page=2&region=US")
        );
        assert_eq!(
            p.next.href.as_deref(),
            Some("?listType=top-rated&page=4&region=US")
        );
    }

    #[test]
    fn missing_page_param_is_appended() {
        let p = Pagination::new(1, 3, &params("query=alien"));
        assert_eq!(p.next.href.as_deref(), Some("?query=alien&page=2"));
    }

    #[test]
    fn no_results_disables_both() {
        let p = Pagination::new(1, 0, &RequestParams::default());
        assert!(p.previous.disabled);
        assert!(p.next.disabled);
    }
}
