// Model exports
pub mod domain;

pub use domain::{FilterCriteria, Gender, InitialFilters};
