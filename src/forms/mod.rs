// src/forms/mod.rs
//
// Form layer
//
// Forms own the raw text the user typed. `submit` is the only way a
// domain record is built from it:
// - Validation is ordered and stops at the first failure
// - Fields are reset only after a record was produced
// - Errors go back to the caller, nothing is logged

pub mod coffee_form;
pub mod shot_form;

pub use coffee_form::{CoffeeForm, CoffeeValidationError};
pub use shot_form::{ShotForm, ShotValidationError};

/// Parse a user-entered decimal.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a finite, non-negative number (`"abc"`, `"-2"`, `"inf"`, `"NaN"`).
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    // f64::from_str also accepts "inf"/"nan" spellings
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse an optional decimal field: blank means 0
pub fn parse_decimal_or_zero(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        Some(0.0)
    } else {
        parse_decimal(text)
    }
}

/// Error currently shown under a form.
///
/// The last submission decides: a failure replaces whatever was shown,
/// a success clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState<E> {
    error: Option<E>,
}

impl<E> Default for FormState<E> {
    fn default() -> Self {
        Self { error: None }
    }
}

impl<E: Clone> FormState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a submission and hand it back unchanged
    pub fn record<T>(&mut self, outcome: Result<T, E>) -> Result<T, E> {
        match &outcome {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.clone()),
        }
        outcome
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    pub fn clear(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_decimal_accepts_numbers() {
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal("36"), Some(36.0));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal(" 28 "), Some(28.0));
        assert_eq!(parse_decimal("1e2"), Some(100.0));
        assert_eq!(parse_decimal("0"), Some(0.0));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("12,5"), None);
        assert_eq!(parse_decimal("-2"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("1e400"), None);
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(parse_decimal_or_zero(""), Some(0.0));
        assert_eq!(parse_decimal_or_zero("   "), Some(0.0));
        assert_eq!(parse_decimal_or_zero("x"), None);
    }

    #[test]
    fn test_form_state_keeps_latest_error_only() {
        let mut state: FormState<&'static str> = FormState::new();
        assert!(state.record::<()>(Err("first")).is_err());
        assert!(state.record::<()>(Err("second")).is_err());
        assert_eq!(state.error(), Some(&"second"));

        assert!(state.record(Ok(1)).is_ok());
        assert_eq!(state.error(), None);
    }

    proptest! {
        #[test]
        fn test_formatted_non_negative_values_parse(value in 0.0f64..1.0e9) {
            let text = format!("{}", value);
            prop_assert_eq!(parse_decimal(&text), Some(value));
        }

        #[test]
        fn test_letters_never_parse(text in "[a-df-zA-DF-Z]{1,12}") {
            prop_assert_eq!(parse_decimal(&text), None);
        }
    }
}
