use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today_local() -> NaiveDate {
    now_local().date()
}

pub fn current_hour() -> u32 {
    now_local().hour()
}

/// Clock time as shown next to a marked row, e.g. `09:05 AM`.
pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%I:%M %p").to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long form used in headings, e.g. `Thursday, 02 Jan 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %d %b %Y").to_string()
}

/// Short stamp for feed entries, e.g. `09:05 AM | Jan 02`.
pub fn format_stamp(at: &NaiveDateTime) -> String {
    at.format("%I:%M %p | %b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_marked_time_in_twelve_hour_clock() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(14, 7, 0)
            .unwrap();
        assert_eq!(format_time(&at), "02:07 PM");
    }

    #[test]
    fn formats_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(format_long_date(date), "Thursday, 02 Jan 2025");
        let at = date.and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format_stamp(&at), "09:05 AM | Jan 02");
        assert_eq!(format_date(date), "2025-01-02");
    }
}
