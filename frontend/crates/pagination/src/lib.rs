//! Offset pagination primitives shared by TalentLink list views.
//!
//! The crate covers three concerns:
//!
//! - [`PaginationParams`]: validated `page`/`limit`/sort input with defaults
//! - [`Pagination`]: the metadata block of a paginated envelope, whose
//!   `totalPages` must equal `ceil(total / limit)`
//! - page links built from a base [`url::Url`]
//!
//! It carries no knowledge of the envelope payload so that any response type
//! can embed the metadata.
//!
//! # Example
//!
//! ```
//! use pagination::{Pagination, PaginationParams};
//!
//! let params = PaginationParams::new(3, 25).expect("valid params");
//! let meta = Pagination::for_params(&params, 60).expect("page in range");
//!
//! assert_eq!(meta.total_pages(), 3);
//! assert!(!meta.has_next());
//! ```

mod error;
mod links;
mod meta;
mod params;

pub use error::PaginationError;
pub use meta::{Pagination, total_pages_for};
pub use params::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT, PaginationParams, SortOrder};
