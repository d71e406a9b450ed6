pub mod catalog;
pub mod models;

pub use models::*;
