use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Default number of entries per page for catalog listings.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page size a listing will serve.
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginationLinksDto {
    pub first: String,
    pub last: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Pagination envelope metadata. Pages are 1-indexed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginationDto {
    pub page: u64,
    pub page_size: u64,
    pub total_results: u64,
    pub total_pages: u64,
    #[serde(default)]
    pub links: PaginationLinksDto,
}

impl PaginationDto {
    /// Number of pages needed for `total_results` entries, never zero-division.
    pub fn page_count(total_results: u64, page_size: u64) -> u64 {
        if page_size == 0 {
            return 0;
        }
        total_results.div_ceil(page_size)
    }

    /// Clamps a requested page into `1..=total_pages`.
    pub fn clamp_page(&self, page: u64) -> u64 {
        page.clamp(1, self.total_pages.max(1))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedDto<T> {
    pub data: Vec<T>,
    pub pagination: PaginationDto,
}

/// Page-number pagination used by admin listings (`page`/`per_page`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PageInfoDto {
    pub page: u64,
    pub per_page: u64,
    pub total_results: u64,
    pub total_pages: u64,
}
