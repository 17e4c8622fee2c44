//! Error types for pagination parameters and envelope metadata.

use thiserror::Error;

/// Errors raised when pagination inputs or metadata violate their invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Pages are numbered from one.
    #[error("page must be at least 1")]
    ZeroPage,

    /// A page must hold at least one item.
    #[error("limit must be at least 1")]
    ZeroLimit,

    /// The requested page size exceeds the supported maximum.
    #[error("limit must be at most {max}, got {actual}")]
    LimitTooLarge {
        /// Largest accepted page size.
        max: u32,
        /// Page size supplied by the caller.
        actual: u32,
    },

    /// The page lies beyond the last page for the reported total.
    #[error("page {page} is out of range; last page is {last_page}")]
    PageOutOfRange {
        /// Requested page.
        page: u32,
        /// Last valid page for the total (1 when the total is zero).
        last_page: u64,
    },

    /// The reported page count disagrees with `ceil(total / limit)`.
    #[error("totalPages must be {expected} for the reported total, got {actual}")]
    TotalPagesMismatch {
        /// Page count derived from `total` and `limit`.
        expected: u64,
        /// Page count carried by the payload.
        actual: u64,
    },
}
