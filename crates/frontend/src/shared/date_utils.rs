//! Browser-side date helpers

use chrono::NaiveDate;

/// Build a date from the parts JS `Date` reports (month is 0-based)
pub fn date_from_js_parts(year: u32, month0: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year as i32, month0 + 1, day)
}

/// Today's local date according to the browser
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    date_from_js_parts(now.get_full_year(), now.get_month(), now.get_date())
}

/// Human readable stamp for notices, e.g. "Wed, 01 May 2024"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_month_is_zero_based() {
        assert_eq!(
            date_from_js_parts(2024, 0, 31),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert_eq!(date_from_js_parts(2024, 1, 30), None);
    }

    #[test]
    fn test_format_long() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_long(d), "Wed, 01 May 2024");
    }
}
