//! Community Filter - filter-state core for the member discovery screen
//!
//! This library owns the in-memory filter criteria (native language, age
//! range, gender) behind the community filter form: seeding from
//! caller-supplied defaults, mutation and reset rules, the asynchronous
//! language catalog with its loading/error/retry states, and the one-shot
//! payload handed back to the caller on commit. Rendering is out of scope;
//! a presentation layer observes [`FilterState`] and the catalog status and
//! forwards UI events to them.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CatalogStatus, FilterState, LanguageCatalog};
pub use crate::models::{FilterCriteria, Gender, InitialFilters};
pub use crate::services::{CatalogError, LanguagesClient};
pub use crate::session::FilterSession;
