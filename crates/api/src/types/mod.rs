//! Shared HTTP types.

mod pagination;

pub use pagination::{Paginated, PaginatedUsers, PaginationMeta, PaginationParams};
