use chrono::{Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

/// Wire format of `<input type="date">` values.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A from/to date pair picked in the filter bar.
///
/// Display-only: nothing here is written to the URL. Ordering of the bounds
/// is left to the picker widget.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// `today - days` through `today`.
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        let from = TimeDelta::try_days(days)
            .and_then(|delta| today.checked_sub_signed(delta))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to: today }
    }

    /// Initial range for a freshly mounted filter bar, ending today in local time.
    pub fn default_for_today(lookback_days: i64) -> Self {
        Self::last_days(Local::now().date_naive(), lookback_days)
    }

    pub fn with_from(self, from: NaiveDate) -> Self {
        Self { from, ..self }
    }

    pub fn with_to(self, to: NaiveDate) -> Self {
        Self { to, ..self }
    }
}

/// Format a date for an `<input type="date">` value.
pub fn format_input_date(date: &NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Parse an `<input type="date">` value.
pub fn parse_input_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), DATE_INPUT_FORMAT)?)
}

/// Replace the `from` bound. With no range held, both bounds become `from`.
pub fn replace_from(range: Option<DateRange>, from: NaiveDate) -> DateRange {
    match range {
        Some(range) => range.with_from(from),
        None => DateRange::new(from, from),
    }
}

/// Replace the `to` bound. With no range held, both bounds become `to`.
pub fn replace_to(range: Option<DateRange>, to: NaiveDate) -> DateRange {
    match range {
        Some(range) => range.with_to(to),
        None => DateRange::new(to, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_last_seven_days() {
        let range = DateRange::last_days(ymd(2024, 3, 5), 7);
        assert_eq!(range.from, ymd(2024, 2, 27));
        assert_eq!(range.to, ymd(2024, 3, 5));
    }

    #[test]
    fn test_last_days_crosses_year_boundary() {
        let range = DateRange::last_days(ymd(2023, 1, 3), 7);
        assert_eq!(range.from, ymd(2022, 12, 27));
    }

    #[test]
    fn test_default_for_today_spans_lookback() {
        let range = DateRange::default_for_today(7);
        assert_eq!((range.to - range.from).num_days(), 7);
    }

    #[test]
    fn test_bounds_are_not_reordered() {
        let range = DateRange::last_days(ymd(2024, 3, 5), 7).with_from(ymd(2024, 4, 1));
        assert_eq!(range.from, ymd(2024, 4, 1));
        assert_eq!(range.to, ymd(2024, 3, 5));
    }

    #[test]
    fn test_replace_bounds_without_range() {
        let day = ymd(2024, 6, 1);
        assert_eq!(replace_from(None, day), DateRange::new(day, day));
        assert_eq!(replace_to(None, day), DateRange::new(day, day));

        let range = DateRange::new(ymd(2024, 5, 1), ymd(2024, 5, 8));
        assert_eq!(replace_to(Some(range), day).from, ymd(2024, 5, 1));
    }

    #[test]
    fn test_format_and_parse() {
        let date = ymd(2023, 6, 15);
        let formatted = format_input_date(&date);
        assert_eq!(formatted, "2023-06-15");
        assert_eq!(parse_input_date(&formatted).unwrap(), date);
        assert!(parse_input_date("").is_err());
        assert!(parse_input_date("15/06/2023").is_err());
    }
}
