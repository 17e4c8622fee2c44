//! Shared domain contracts.
//!
//! These are the shapes any API client must honour when exchanging data with
//! page components. Raw payloads are validated at the deserialisation
//! boundary, so a value of one of these types always satisfies its
//! invariants.

mod entity;
mod response;
mod role;
mod user;

pub use entity::{BaseEntity, EntityId, EntityValidationError};
pub use pagination::{Pagination, PaginationError, PaginationParams, SortOrder};
pub use response::{ApiFailure, ApiResponse, PaginatedResponse, ResponseValidationError};
pub use role::{UnknownUserRole, UserRole};
pub use user::{EmailAddress, NAME_MAX, User, UserValidationError};
