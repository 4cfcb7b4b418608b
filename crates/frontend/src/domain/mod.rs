pub mod a001_major;
pub mod a002_category;
pub mod a003_resource;
