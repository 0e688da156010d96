use serde::{Deserialize, Serialize};

/// Gender preference option.
///
/// The wire form is lowercase to match the backend; UI labels are title case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All selectable options, in display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Parse a gender from caller-supplied text.
    ///
    /// Accepts any casing ("Female", "female", "FEMALE"). Unknown values
    /// return `None` rather than an error: initial filters may echo back
    /// externally-sourced data, and this layer clamps instead of failing.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| value.eq_ignore_ascii_case(g.as_str()))
    }

    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// The title-case display label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Finalized filter criteria handed back to the caller on commit.
///
/// Absent `gender` / `nativeLanguage` mean "any" and are omitted from the
/// serialized payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub min_age: u8,
    pub max_age: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_language: Option<String>,
}

/// Caller-supplied defaults for a new filter session.
///
/// Every key is optional; missing keys fall back to the hard defaults
/// (18, 100, any, any). Ages accept both JSON integers and floats.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialFilters {
    #[serde(default)]
    pub min_age: Option<f64>,
    #[serde(default)]
    pub max_age: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub native_language: Option<String>,
}
