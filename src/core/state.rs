use crate::models::{FilterCriteria, Gender, InitialFilters};

/// Youngest selectable age.
pub const AGE_LOWER_BOUND: f64 = 18.0;
/// Oldest selectable age.
pub const AGE_UPPER_BOUND: f64 = 100.0;

/// Mutable filter state owned by the hosting form session.
///
/// Ages stay floating point while the form is open (the UI binds them to a
/// dual-handle range slider) and are truncated to integers on commit. The
/// invariant `min_age <= max_age` holds after every operation, never only
/// eventually.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    min_age: f64,
    max_age: f64,
    gender: Option<Gender>,
    native_language: Option<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            min_age: AGE_LOWER_BOUND,
            max_age: AGE_UPPER_BOUND,
            gender: None,
            native_language: None,
        }
    }
}

impl FilterState {
    /// Seed state from caller-supplied defaults.
    ///
    /// Missing keys take the hard defaults (18, 100, any, any). Ages are
    /// clamped into [18, 100] even though callers are trusted, since initial
    /// filters may echo back externally-sourced data; if the clamped bounds
    /// arrive inverted, `min_age` is lowered to `max_age`. An unrecognized
    /// gender string coerces to "any".
    pub fn new(initial: &InitialFilters) -> Self {
        let max_age = clamp_age(initial.max_age.unwrap_or(AGE_UPPER_BOUND));
        let min_age = clamp_age(initial.min_age.unwrap_or(AGE_LOWER_BOUND)).min(max_age);

        Self {
            min_age,
            max_age,
            gender: initial.gender.as_deref().and_then(Gender::parse),
            native_language: initial.native_language.clone(),
        }
    }

    pub fn min_age(&self) -> f64 {
        self.min_age
    }

    pub fn max_age(&self) -> f64 {
        self.max_age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn native_language(&self) -> Option<&str> {
        self.native_language.as_deref()
    }

    /// Set both age bounds from a single gesture.
    ///
    /// This is one atomic transition: the pair is ordered and clamped before
    /// either field is written, so `min_age > max_age` is never observable.
    pub fn set_age_range(&mut self, min: f64, max: f64) {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.min_age = clamp_age(lo);
        self.max_age = clamp_age(hi);
    }

    /// Overwrite the gender preference; `None` means "any".
    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    /// Overwrite the native-language selection; `None` means "any".
    ///
    /// The value is not checked against the catalog here: a selection that a
    /// later catalog reload no longer contains is deliberately left in place
    /// (see the known-gap note in DESIGN.md).
    pub fn set_native_language(&mut self, language: Option<String>) {
        self.native_language = language;
    }

    /// Restore the hard defaults (18, 100, any, any).
    ///
    /// Reset means "clear", not "undo": the original caller-supplied
    /// defaults are not restored.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Convert the current state to the payload handed to the caller.
    ///
    /// Ages are integer-truncated, gender takes its lowercase wire form, the
    /// language passes through unchanged. Reads state without consuming it,
    /// so repeated commits without intervening mutation are structurally
    /// equal. Never gated on catalog status.
    pub fn commit(&self) -> FilterCriteria {
        FilterCriteria {
            min_age: self.min_age as u8,
            max_age: self.max_age as u8,
            gender: self.gender,
            native_language: self.native_language.clone(),
        }
    }
}

fn clamp_age(age: f64) -> f64 {
    age.clamp(AGE_LOWER_BOUND, AGE_UPPER_BOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.min_age(), 18.0);
        assert_eq!(state.max_age(), 100.0);
        assert_eq!(state.gender(), None);
        assert_eq!(state.native_language(), None);
    }

    #[test]
    fn test_new_with_empty_initial_filters_equals_default() {
        let state = FilterState::new(&InitialFilters::default());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_initialize_then_commit_echoes_values() {
        let initial = InitialFilters {
            min_age: Some(25.0),
            max_age: Some(40.0),
            gender: Some("Female".to_string()),
            native_language: Some("Korean".to_string()),
        };

        let criteria = FilterState::new(&initial).commit();

        assert_eq!(criteria.min_age, 25);
        assert_eq!(criteria.max_age, 40);
        assert_eq!(criteria.gender, Some(Gender::Female));
        assert_eq!(criteria.native_language.as_deref(), Some("Korean"));
    }

    #[test]
    fn test_initialize_clamps_untrusted_ages() {
        let initial = InitialFilters {
            min_age: Some(5.0),
            max_age: Some(250.0),
            ..InitialFilters::default()
        };

        let state = FilterState::new(&initial);
        assert_eq!(state.min_age(), 18.0);
        assert_eq!(state.max_age(), 100.0);
    }

    #[test]
    fn test_initialize_orders_inverted_bounds() {
        let initial = InitialFilters {
            min_age: Some(60.0),
            max_age: Some(30.0),
            ..InitialFilters::default()
        };

        let state = FilterState::new(&initial);
        assert!(state.min_age() <= state.max_age());
        assert_eq!(state.max_age(), 30.0);
    }

    #[test]
    fn test_initialize_coerces_unknown_gender_to_any() {
        let initial = InitialFilters {
            gender: Some("dragon".to_string()),
            ..InitialFilters::default()
        };

        assert_eq!(FilterState::new(&initial).gender(), None);
    }

    #[test]
    fn test_age_range_invariant_holds_after_every_call() {
        let mut state = FilterState::default();

        for (a, b) in [(18.0, 100.0), (30.0, 30.0), (25.0, 99.0), (18.0, 19.0)] {
            state.set_age_range(a, b);
            assert!(state.min_age() <= state.max_age());
            assert_eq!(state.min_age(), a);
            assert_eq!(state.max_age(), b);
        }
    }

    #[test]
    fn test_age_range_clamps_and_orders() {
        let mut state = FilterState::default();

        state.set_age_range(10.0, 120.0);
        assert_eq!(state.min_age(), 18.0);
        assert_eq!(state.max_age(), 100.0);

        state.set_age_range(50.0, 20.0);
        assert_eq!(state.min_age(), 20.0);
        assert_eq!(state.max_age(), 50.0);
    }

    #[test]
    fn test_degenerate_single_age_range() {
        let mut state = FilterState::default();
        state.set_age_range(18.0, 18.0);

        let criteria = state.commit();
        assert_eq!(criteria.min_age, 18);
        assert_eq!(criteria.max_age, 18);
    }

    #[test]
    fn test_reset_clears_to_hard_defaults() {
        let initial = InitialFilters {
            min_age: Some(25.0),
            max_age: Some(40.0),
            gender: Some("Female".to_string()),
            native_language: Some("Korean".to_string()),
        };

        let mut state = FilterState::new(&initial);
        state.reset();

        // Hard defaults, not the initial filters.
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_gender_cleared_is_absent_from_payload() {
        let mut state = FilterState::default();
        state.set_gender(Some(Gender::Other));
        state.set_gender(None);

        let json = serde_json::to_value(state.commit()).unwrap();
        assert!(json.get("gender").is_none());
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut state = FilterState::default();
        state.set_age_range(21.0, 35.0);
        state.set_gender(Some(Gender::Male));
        state.set_native_language(Some("Spanish".to_string()));

        assert_eq!(state.commit(), state.commit());
    }

    #[test]
    fn test_commit_truncates_fractional_ages() {
        let mut state = FilterState::default();
        state.set_age_range(21.9, 35.2);

        let criteria = state.commit();
        assert_eq!(criteria.min_age, 21);
        assert_eq!(criteria.max_age, 35);
    }
}
