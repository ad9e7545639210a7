/// Utilities for date formatting
///
/// The UI speaks Polish, so day labels are hand-formatted here instead of
/// going through a locale API the WASM target does not have.
use chrono::{Datelike, NaiveDate};

const MONTHS_GENITIVE: [&str; 12] = [
    "stycznia",
    "lutego",
    "marca",
    "kwietnia",
    "maja",
    "czerwca",
    "lipca",
    "sierpnia",
    "września",
    "października",
    "listopada",
    "grudnia",
];

const WEEKDAYS: [&str; 7] = [
    "poniedziałek",
    "wtorek",
    "środa",
    "czwartek",
    "piątek",
    "sobota",
    "niedziela",
];

/// Human label for a selected day: "Dzisiaj (5 sierpnia)", "Wczoraj (…)" or
/// the full "wtorek, 5 sierpnia 2025". Unparseable input is shown as-is.
pub fn display_day_label(selected: &str, today: NaiveDate) -> String {
    let Ok(date) = NaiveDate::parse_from_str(selected, "%Y-%m-%d") else {
        return selected.to_string();
    };
    let day_month = format!("{} {}", date.day(), MONTHS_GENITIVE[date.month0() as usize]);
    if date == today {
        format!("Dzisiaj ({})", day_month)
    } else if today.pred_opt() == Some(date) {
        format!("Wczoraj ({})", day_month)
    } else {
        format!(
            "{}, {} {}",
            WEEKDAYS[date.weekday().num_days_from_monday() as usize],
            day_month,
            date.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn labels_today_and_yesterday() {
        let today = day("2024-08-07");
        assert_eq!(display_day_label("2024-08-07", today), "Dzisiaj (7 sierpnia)");
        assert_eq!(display_day_label("2024-08-06", today), "Wczoraj (6 sierpnia)");
    }

    #[test]
    fn labels_other_days_with_weekday_and_year() {
        let today = day("2024-08-07");
        // 2024-01-05 was a Friday.
        assert_eq!(
            display_day_label("2024-01-05", today),
            "piątek, 5 stycznia 2024"
        );
    }

    #[test]
    fn passes_through_unparseable_input() {
        let today = day("2024-08-07");
        assert_eq!(display_day_label("garbage", today), "garbage");
    }
}
