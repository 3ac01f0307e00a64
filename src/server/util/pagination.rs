//! Page-number pagination for catalog listings.
//!
//! Listings take `pn` (1-based page number) and `ps` (page size) query parameters
//! and answer with a `PaginationDto` whose links repeat the caller's query with
//! only `pn` changed.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::model::api::{
    PaginatedDto, PaginationDto, PaginationLinksDto, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

const MAX_PAGE_NUMBER: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

#[derive(Deserialize, IntoParams, Clone, Copy, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number, starting at 1
    pub pn: Option<u64>,
    /// Entries per page
    pub ps: Option<u64>,
}

impl PageParams {
    pub fn new(pn: u64, ps: u64) -> Self {
        Self {
            pn: Some(pn),
            ps: Some(ps),
        }
    }

    /// 1-based page number, never below 1 and small enough that the offset fits a
    /// SQL integer.
    pub fn page(&self) -> u64 {
        self.pn.unwrap_or(1).clamp(1, MAX_PAGE_NUMBER)
    }

    /// Page size within `1..=MAX_PAGE_SIZE`.
    pub fn page_size(&self) -> u64 {
        self.ps.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Number of entries skipped before this page.
    pub fn offset(&self) -> u64 {
        self.page_size().saturating_mul(self.page() - 1)
    }

    /// 0-based page index as used by SeaORM paginators.
    pub fn index(&self) -> u64 {
        self.page() - 1
    }
}

/// Request location the pagination links are built from.
#[derive(Clone, Debug, Default)]
pub struct PageLinkBase {
    pub path: String,
    pub query: Option<String>,
}

impl PageLinkBase {
    pub fn new(path: impl Into<String>, query: Option<&str>) -> Self {
        Self {
            path: path.into(),
            query: query.map(String::from),
        }
    }

    pub fn from_uri(uri: &axum::http::Uri) -> Self {
        Self::new(uri.path(), uri.query())
    }

    /// Link to `page`, keeping every other query parameter.
    fn link(&self, page: u64) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        let mut replaced = false;

        if let Some(query) = &self.query {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                if key == "pn" {
                    if !replaced {
                        serializer.append_pair("pn", &page.to_string());
                        replaced = true;
                    }
                } else {
                    serializer.append_pair(&key, &value);
                }
            }
        }
        if !replaced {
            serializer.append_pair("pn", &page.to_string());
        }

        format!("{}?{}", self.path, serializer.finish())
    }
}

/// Builds the pagination envelope metadata.
///
/// `prev` is present only after the first page and `next` only before the last.
/// `last` points at page 1 for an empty result.
pub fn build_pagination(
    base: &PageLinkBase,
    params: &PageParams,
    total_results: u64,
) -> PaginationDto {
    let page = params.page();
    let page_size = params.page_size();
    let total_pages = PaginationDto::page_count(total_results, page_size);

    let links = PaginationLinksDto {
        first: base.link(1),
        last: base.link(total_pages.max(1)),
        prev: (page > 1).then(|| base.link(page - 1)),
        next: (page < total_pages).then(|| base.link(page + 1)),
    };

    PaginationDto {
        page,
        page_size,
        total_results,
        total_pages,
        links,
    }
}

/// Wraps one page of data in the pagination envelope.
pub fn paginated<T>(
    data: Vec<T>,
    base: &PageLinkBase,
    params: &PageParams,
    total_results: u64,
) -> PaginatedDto<T> {
    PaginatedDto {
        data,
        pagination: build_pagination(base, params, total_results),
    }
}

/// Slices an in-memory list down to one page.
///
/// # Returns
/// The entries on the requested page and the total number of entries.
pub fn paginate_vec<T>(items: Vec<T>, params: &PageParams) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let page = items
        .into_iter()
        .skip(usize::try_from(params.offset()).unwrap_or(usize::MAX))
        .take(params.page_size() as usize)
        .collect();
    (page, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_clamp_to_one() {
        let params = PageParams::new(0, 0);
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), 1);
        assert_eq!(params.offset(), 0);

        let params = PageParams::new(3, 10);
        assert_eq!(params.offset(), 20);
        assert_eq!(params.index(), 2);

        let defaults = PageParams::default();
        assert_eq!(defaults.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn oversized_page_requests_do_not_overflow() {
        let params = PageParams::new(3, 9_223_372_036_854_775_808);
        assert_eq!(params.page_size(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), 2 * MAX_PAGE_SIZE);

        let params = PageParams::new(u64::MAX, u64::MAX);
        assert_eq!(params.page(), MAX_PAGE_NUMBER);
        assert!(params.offset() <= i64::MAX as u64);

        let (page, total) = paginate_vec(vec![1, 2, 3], &params);
        assert!(page.is_empty());
        assert_eq!(total, 3);
    }

    #[test]
    fn links_replace_page_and_keep_query() {
        let base = PageLinkBase::new("/api/v1.0/games/filter", Some("genre=Action&pn=2&ps=5"));
        let pagination = build_pagination(&base, &PageParams::new(2, 5), 12);

        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.links.first, "/api/v1.0/games/filter?genre=Action&pn=1&ps=5");
        assert_eq!(pagination.links.last, "/api/v1.0/games/filter?genre=Action&pn=3&ps=5");
        assert_eq!(
            pagination.links.prev.as_deref(),
            Some("/api/v1.0/games/filter?genre=Action&pn=1&ps=5")
        );
        assert_eq!(
            pagination.links.next.as_deref(),
            Some("/api/v1.0/games/filter?genre=Action&pn=3&ps=5")
        );
    }

    #[test]
    fn links_append_page_when_missing() {
        let base = PageLinkBase::new("/api/v1.0/games", None);
        let pagination = build_pagination(&base, &PageParams::default(), 0);

        assert_eq!(pagination.total_pages, 0);
        assert_eq!(pagination.links.first, "/api/v1.0/games?pn=1");
        assert_eq!(pagination.links.last, "/api/v1.0/games?pn=1");
        assert!(pagination.links.prev.is_none());
        assert!(pagination.links.next.is_none());
    }

    #[test]
    fn paginate_vec_slices_pages() {
        let items: Vec<u32> = (1..=7).collect();

        let (page, total) = paginate_vec(items.clone(), &PageParams::new(2, 3));
        assert_eq!(page, vec![4, 5, 6]);
        assert_eq!(total, 7);

        let (page, _) = paginate_vec(items, &PageParams::new(5, 3));
        assert!(page.is_empty());
    }
}
