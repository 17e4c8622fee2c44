//! Pagination metadata carried by paginated envelopes.

use serde::{Deserialize, Serialize};

use crate::{PaginationError, PaginationParams};

/// Number of pages needed to hold `total` items at `limit` items per page.
///
/// A zero `limit` yields zero pages.
///
/// # Examples
/// ```
/// use pagination::total_pages_for;
///
/// assert_eq!(total_pages_for(0, 10), 0);
/// assert_eq!(total_pages_for(10, 10), 1);
/// assert_eq!(total_pages_for(11, 10), 2);
/// ```
#[must_use]
pub fn total_pages_for(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

/// Pagination block of a paginated response.
///
/// ## Invariants
/// - `limit >= 1` and `page >= 1`.
/// - `total_pages == ceil(total / limit)`.
/// - `page <= total_pages` when `total > 0`; otherwise `page == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaginationDto", into = "PaginationDto")]
pub struct Pagination {
    page: u32,
    limit: u32,
    total: u64,
    total_pages: u64,
}

impl Pagination {
    /// Build metadata for `page` of a collection holding `total` items.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] when `page` or `limit` is zero, or when
    /// `page` lies beyond the last page.
    ///
    /// # Examples
    /// ```
    /// use pagination::Pagination;
    ///
    /// let meta = Pagination::new(2, 10, 35).expect("valid");
    /// assert_eq!(meta.total_pages(), 4);
    /// assert!(meta.has_next());
    /// assert!(meta.has_previous());
    /// ```
    pub fn new(page: u32, limit: u32, total: u64) -> Result<Self, PaginationError> {
        if limit == 0 {
            return Err(PaginationError::ZeroLimit);
        }
        if page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        let total_pages = total_pages_for(total, limit);
        let last_page = total_pages.max(1);
        if u64::from(page) > last_page {
            return Err(PaginationError::PageOutOfRange { page, last_page });
        }
        Ok(Self {
            page,
            limit,
            total,
            total_pages,
        })
    }

    /// Build metadata for the page described by `params`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when the requested page lies
    /// beyond the last page for `total`.
    pub fn for_params(params: &PaginationParams, total: u64) -> Result<Self, PaginationError> {
        Self::new(params.page(), params.limit(), total)
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages, `ceil(total / limit)`.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationDto {
    page: u32,
    limit: u32,
    total: u64,
    total_pages: u64,
}

impl From<Pagination> for PaginationDto {
    fn from(value: Pagination) -> Self {
        Self {
            page: value.page,
            limit: value.limit,
            total: value.total,
            total_pages: value.total_pages,
        }
    }
}

impl TryFrom<PaginationDto> for Pagination {
    type Error = PaginationError;

    fn try_from(value: PaginationDto) -> Result<Self, Self::Error> {
        let expected = total_pages_for(value.total, value.limit);
        if value.limit > 0 && value.total_pages != expected {
            return Err(PaginationError::TotalPagesMismatch {
                expected,
                actual: value.total_pages,
            });
        }
        Self::new(value.page, value.limit, value.total)
    }
}
