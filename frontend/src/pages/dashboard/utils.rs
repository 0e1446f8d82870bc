use crate::api::SummaryStats;

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Morning",
        12..=17 => "Afternoon",
        _ => "Evening",
    }
}

/// Present today as a share of all employees, rounded to whole percent.
pub fn attendance_rate(summary: &SummaryStats) -> u32 {
    if summary.total_employees == 0 {
        return 0;
    }
    ((summary.present_today as f64 / summary.total_employees as f64) * 100.0).round() as u32
}

/// Marked employees who have not been recorded either way yet.
pub fn unmarked_today(summary: &SummaryStats) -> u32 {
    summary
        .total_employees
        .saturating_sub(summary.present_today + summary.absent_today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_follows_local_hour() {
        assert_eq!(greeting(0), "Morning");
        assert_eq!(greeting(11), "Morning");
        assert_eq!(greeting(12), "Afternoon");
        assert_eq!(greeting(17), "Afternoon");
        assert_eq!(greeting(18), "Evening");
        assert_eq!(greeting(23), "Evening");
    }

    #[test]
    fn rate_handles_empty_directory() {
        assert_eq!(attendance_rate(&SummaryStats::default()), 0);
        let summary = SummaryStats {
            total_employees: 3,
            present_today: 2,
            absent_today: 0,
        };
        assert_eq!(attendance_rate(&summary), 67);
        assert_eq!(unmarked_today(&summary), 1);
    }
}
