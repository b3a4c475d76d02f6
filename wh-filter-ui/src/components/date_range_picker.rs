//! Date range picker with from and to date inputs.

use dioxus::prelude::*;
use wh_filter::date_range::{format_input_date, parse_input_date, replace_from, replace_to};
use wh_filter::DateRange;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangePickerProps {
    /// Currently selected range; `None` renders empty inputs
    pub range: Option<DateRange>,
    pub on_change: EventHandler<Option<DateRange>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bound {
    From,
    To,
}

/// Date range picker for the filter bar. Holds no state of its own.
#[component]
pub fn DateRangePicker(props: DateRangePickerProps) -> Element {
    let range = props.range;
    let on_change = props.on_change;
    let from = range.map(|r| format_input_date(&r.from)).unwrap_or_default();
    let to = range.map(|r| format_input_date(&r.to)).unwrap_or_default();

    let on_from_change = move |evt: Event<FormData>| {
        if let Some(next) = apply_input(range, Bound::From, &evt.value()) {
            on_change.call(Some(next));
        }
    };

    let on_to_change = move |evt: Event<FormData>| {
        if let Some(next) = apply_input(range, Bound::To, &evt.value()) {
            on_change.call(Some(next));
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            label {
                style: "font-size: 13px;",
                "De "
                input {
                    r#type: "date",
                    value: "{from}",
                    onchange: on_from_change,
                }
            }
            label {
                style: "font-size: 13px;",
                "Até "
                input {
                    r#type: "date",
                    value: "{to}",
                    onchange: on_to_change,
                }
            }
            if range.is_some() {
                button {
                    r#type: "button",
                    style: "border: none; background: none; cursor: pointer; color: #666;",
                    onclick: move |_| on_change.call(None),
                    "✕"
                }
            }
        }
    }
}

/// Next range after one input changed, or `None` to keep the current one.
fn apply_input(current: Option<DateRange>, bound: Bound, raw: &str) -> Option<DateRange> {
    match parse_input_date(raw) {
        Ok(date) => Some(match bound {
            Bound::From => replace_from(current, date),
            Bound::To => replace_to(current, date),
        }),
        Err(e) => {
            log::warn!("ignoring date input {raw:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_input_replaces_one_bound() {
        let current = Some(DateRange::new(ymd(2024, 5, 1), ymd(2024, 5, 8)));
        let next = apply_input(current, Bound::From, "2024-04-20").unwrap();
        assert_eq!(next, DateRange::new(ymd(2024, 4, 20), ymd(2024, 5, 8)));

        let next = apply_input(current, Bound::To, "2024-05-31").unwrap();
        assert_eq!(next, DateRange::new(ymd(2024, 5, 1), ymd(2024, 5, 31)));
    }

    #[test]
    fn empty_or_garbage_input_keeps_current() {
        let current = Some(DateRange::new(ymd(2024, 5, 1), ymd(2024, 5, 8)));
        assert_eq!(apply_input(current, Bound::From, ""), None);
        assert_eq!(apply_input(current, Bound::To, "31/05/2024"), None);
    }

    #[test]
    fn input_without_range_sets_both_bounds() {
        let next = apply_input(None, Bound::To, "2024-05-31").unwrap();
        assert_eq!(next, DateRange::new(ymd(2024, 5, 31), ymd(2024, 5, 31)));
    }
}
