//! Caller-supplied pagination parameters.

use serde::{Deserialize, Serialize};

use crate::PaginationError;

/// First page number; pages are one-based.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest page size a caller may request.
pub const MAX_LIMIT: u32 = 100;

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest values first.
    #[default]
    Asc,
    /// Largest values first.
    Desc,
}

/// Validated pagination request.
///
/// ## Invariants
/// - `page >= 1`.
/// - `1 <= limit <= MAX_LIMIT`.
/// - `sort_by`, when present, is non-blank.
///
/// # Examples
/// ```
/// use pagination::PaginationParams;
///
/// let params: PaginationParams = serde_json::from_str(r#"{"page": 3}"#).expect("valid");
/// assert_eq!(params.page(), 3);
/// assert_eq!(params.limit(), pagination::DEFAULT_LIMIT);
/// assert_eq!(params.offset(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaginationParamsDto", into = "PaginationParamsDto")]
pub struct PaginationParams {
    page: u32,
    limit: u32,
    sort_by: Option<String>,
    sort_order: Option<SortOrder>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl PaginationParams {
    /// Validate a page number and page size.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] when `page` or `limit` is zero, or when
    /// `limit` exceeds [`MAX_LIMIT`].
    pub const fn new(page: u32, limit: u32) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::ZeroPage);
        }
        if limit == 0 {
            return Err(PaginationError::ZeroLimit);
        }
        if limit > MAX_LIMIT {
            return Err(PaginationError::LimitTooLarge {
                max: MAX_LIMIT,
                actual: limit,
            });
        }
        Ok(Self {
            page,
            limit,
            sort_by: None,
            sort_order: None,
        })
    }

    /// Attach a sort key and direction. A blank key clears sorting.
    #[must_use]
    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        let sort_by = sort_by.into();
        if sort_by.trim().is_empty() {
            self.sort_by = None;
            self.sort_order = None;
        } else {
            self.sort_by = Some(sort_by);
            self.sort_order = Some(sort_order);
        }
        self
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

    /// Field to sort by, if any.
    #[must_use]
    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    /// Sort direction, if any.
    #[must_use]
    pub const fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    /// Number of items preceding the first item of this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationParamsDto {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort_order: Option<SortOrder>,
}

const fn default_page() -> u32 {
    DEFAULT_PAGE
}

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl From<PaginationParams> for PaginationParamsDto {
    fn from(value: PaginationParams) -> Self {
        let PaginationParams {
            page,
            limit,
            sort_by,
            sort_order,
        } = value;
        Self {
            page,
            limit,
            sort_by,
            sort_order,
        }
    }
}

impl TryFrom<PaginationParamsDto> for PaginationParams {
    type Error = PaginationError;

    fn try_from(value: PaginationParamsDto) -> Result<Self, Self::Error> {
        let params = Self::new(value.page, value.limit)?;
        Ok(match value.sort_by {
            Some(sort_by) => params.with_sort(sort_by, value.sort_order.unwrap_or_default()),
            None => params,
        })
    }
}
