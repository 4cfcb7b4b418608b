pub mod compare;
pub mod details;
pub mod featured;
pub mod list;
