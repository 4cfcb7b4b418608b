pub mod aggregate;
pub mod comparison;
pub mod featured;
pub mod request;

pub use aggregate::{
    AskContext, AskRequest, AskResponse, IntroContent, IntroResponse, MajorId, MajorSummary,
    MajorsPage, QaEntry,
};
pub use request::{CatalogRequest, ListingFilter};
