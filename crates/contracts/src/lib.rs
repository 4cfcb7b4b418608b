//! Wire contracts shared by the DegreeCompass frontend and its backend API.
//!
//! Everything here is plain Rust (no browser APIs) so it can be unit tested
//! natively.

pub mod domain;
pub mod shared;
pub mod system;
