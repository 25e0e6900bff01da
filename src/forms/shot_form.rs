// src/forms/shot_form.rs
//
// "Log a shot" form: raw text fields plus the selected coffee in, Shot out.

use serde::Serialize;
use thiserror::Error;

use super::parse_decimal_or_zero;
use crate::domain::{BrewMethod, Coffee, Shot, Stars};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShotValidationError {
    #[error("Please enter a valid grams in value")]
    GramsInInvalid,

    #[error("Please enter a valid grams out value")]
    GramsOutInvalid,

    #[error("Please enter a valid time value")]
    TimeInvalid,

    #[error("Please select a coffee to log the shot to")]
    NoCoffeeSelected,
}

/// Working state of the log-a-shot form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotForm {
    pub brew_method: BrewMethod,
    pub grams_in: String,
    pub grams_out: String,
    /// Seconds
    pub time: String,
    pub rating: Stars,
    pub notes: String,
}

impl ShotForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the fields and build a Shot owned by `selected`.
    ///
    /// Without a selected coffee nothing else is looked at. Blank numeric
    /// fields count as 0. The caller still has to hand the shot to the store.
    pub fn submit(&mut self, selected: Option<&Coffee>) -> Result<Shot, ShotValidationError> {
        let coffee = selected.ok_or(ShotValidationError::NoCoffeeSelected)?;

        let grams_in =
            parse_decimal_or_zero(&self.grams_in).ok_or(ShotValidationError::GramsInInvalid)?;
        let grams_out =
            parse_decimal_or_zero(&self.grams_out).ok_or(ShotValidationError::GramsOutInvalid)?;
        let time_seconds =
            parse_decimal_or_zero(&self.time).ok_or(ShotValidationError::TimeInvalid)?;

        let shot = Shot::new(
            self.brew_method,
            grams_in,
            grams_out,
            time_seconds,
            self.rating,
            std::mem::take(&mut self.notes),
        )
        .assign_to(coffee.id);

        self.reset();
        Ok(shot)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples::sample_coffees;
    use chrono::Utc;
    use proptest::prelude::*;

    fn coffee() -> Coffee {
        sample_coffees().remove(3)
    }

    #[test]
    fn test_submit_builds_shot() {
        let c = coffee();
        let mut form = ShotForm {
            grams_in: "12.5".to_string(),
            grams_out: "36".to_string(),
            time: "28".to_string(),
            rating: Stars::new(5).unwrap(),
            notes: "bright".to_string(),
            ..ShotForm::default()
        };

        let before = Utc::now();
        let shot = form.submit(Some(&c)).unwrap();

        assert_eq!(shot.grams_in, 12.5);
        assert_eq!(shot.grams_out, 36.0);
        assert_eq!(shot.time_seconds, 28.0);
        assert_eq!(shot.rating.value(), 5);
        assert_eq!(shot.notes, "bright");
        assert_eq!(shot.coffee_id, Some(c.id));
        assert!(shot.created_at >= before && shot.created_at <= Utc::now());

        assert_eq!(form, ShotForm::default());
    }

    #[test]
    fn test_blank_fields_are_zero() {
        let mut form = ShotForm::new();
        let shot = form.submit(Some(&coffee())).unwrap();
        assert_eq!(shot.grams_in, 0.0);
        assert_eq!(shot.grams_out, 0.0);
        assert_eq!(shot.time_seconds, 0.0);
        assert_eq!(shot.rating, Stars::MIN);
    }

    #[test]
    fn test_no_coffee_wins_over_bad_fields() {
        let mut form = ShotForm {
            grams_in: "x".to_string(),
            ..ShotForm::default()
        };
        assert_eq!(form.submit(None), Err(ShotValidationError::NoCoffeeSelected));
    }

    #[test]
    fn test_field_order() {
        let c = coffee();
        let mut form = ShotForm {
            grams_in: "a".to_string(),
            grams_out: "b".to_string(),
            time: "c".to_string(),
            ..ShotForm::default()
        };
        assert_eq!(form.submit(Some(&c)), Err(ShotValidationError::GramsInInvalid));

        form.grams_in = "18".to_string();
        assert_eq!(form.submit(Some(&c)), Err(ShotValidationError::GramsOutInvalid));

        form.grams_out = "36".to_string();
        assert_eq!(form.submit(Some(&c)), Err(ShotValidationError::TimeInvalid));

        form.time = "30".to_string();
        assert!(form.submit(Some(&c)).is_ok());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = ShotForm {
            grams_in: "18".to_string(),
            time: "soon".to_string(),
            notes: "sour".to_string(),
            ..ShotForm::default()
        };
        let before = form.clone();
        assert!(form.submit(Some(&coffee())).is_err());
        assert_eq!(form, before);
    }

    proptest! {
        #[test]
        fn test_no_selection_always_fails(
            grams_in in "[0-9]{0,3}",
            grams_out in "[0-9]{0,3}",
            time in "[0-9]{0,3}",
            notes in ".*",
        ) {
            let mut form = ShotForm { grams_in, grams_out, time, notes, ..ShotForm::default() };
            prop_assert_eq!(form.submit(None), Err(ShotValidationError::NoCoffeeSelected));
        }
    }
}
