// Service exports
pub mod languages;

pub use languages::{CatalogError, LanguagesClient};
