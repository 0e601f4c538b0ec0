//! Client-side form validation

pub mod errors;
pub mod rules;

pub use errors::{FormErrors, FormModel};
pub use rules::{parse_date_input, FieldFormat, ValidationRules};

use chrono::NaiveDate;

/// Inclusive day count of `from..=to`; `None` when `from > to`
pub fn inclusive_day_count(from: NaiveDate, to: NaiveDate) -> Option<i64> {
    if from > to {
        return None;
    }
    Some((to - from).num_days() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_inclusive_day_count() {
        assert_eq!(inclusive_day_count(d(2024, 1, 1), d(2024, 1, 5)), Some(5));
        assert_eq!(inclusive_day_count(d(2024, 1, 1), d(2024, 1, 1)), Some(1));
        assert_eq!(inclusive_day_count(d(2024, 2, 28), d(2024, 3, 1)), Some(3));
        assert_eq!(inclusive_day_count(d(2024, 1, 5), d(2024, 1, 1)), None);
    }
}
