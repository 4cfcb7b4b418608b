//! Major details page
//!
//! MVVM split:
//! - model.rs: pure helpers (links, related list, ask outcome)
//! - view_model.rs: signals and load/ask commands
//! - view.rs: page component
//! - qa.rs / ask.rs: Q&A accordion and ask-AI card

mod ask;
mod model;
mod qa;
mod view;
mod view_model;

pub use view::MajorDetail;
