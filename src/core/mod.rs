// Core state exports
pub mod catalog;
pub mod state;

pub use catalog::{CatalogStatus, LanguageCatalog};
pub use state::{FilterState, AGE_LOWER_BOUND, AGE_UPPER_BOUND};
