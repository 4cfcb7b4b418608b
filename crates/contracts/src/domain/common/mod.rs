//! Types shared by every catalog endpoint

pub mod pagination;

pub use pagination::{PageMetadata, Paged};
