use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee},
    utils::filter::DepartmentFilter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Moves by `delta` months, wrapping across years.
    pub fn shift(self, delta: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(self) -> NaiveDate {
        self.shift(1)
            .first_day()
            .pred_opt()
            .unwrap_or_else(|| self.first_day())
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        Self::containing(date) == self
    }

    pub fn days(self) -> Vec<NaiveDate> {
        let last = self.last_day();
        self.first_day()
            .iter_days()
            .take_while(|day| *day <= last)
            .collect()
    }

    /// Days shown in the grid: whole weeks from the Sunday on or before the
    /// first through the Saturday on or after the last.
    pub fn grid(self) -> Vec<NaiveDate> {
        let first = self.first_day();
        let last = self.last_day();
        let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
        let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);
        start.iter_days().take_while(|day| *day <= end).collect()
    }

    pub fn title(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayStats {
    pub present: usize,
    pub absent: usize,
}

impl DayStats {
    pub fn has_data(&self) -> bool {
        self.present + self.absent > 0
    }

    pub fn present_percentage(&self) -> u32 {
        if !self.has_data() {
            return 0;
        }
        ((self.present * 100) as f64 / (self.present + self.absent) as f64).round() as u32
    }
}

/// Raw per-day `employee_id -> status` maps for one month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthAttendance {
    days: BTreeMap<NaiveDate, BTreeMap<String, AttendanceStatus>>,
}

impl MonthAttendance {
    pub fn from_days(days: Vec<(NaiveDate, Vec<AttendanceRecord>)>) -> Self {
        let days = days
            .into_iter()
            .map(|(date, records)| {
                let statuses = records
                    .into_iter()
                    .map(|record| (record.employee_id, record.status))
                    .collect();
                (date, statuses)
            })
            .collect();
        Self { days }
    }

    pub fn status(&self, date: NaiveDate, employee_id: &str) -> Option<AttendanceStatus> {
        self.days.get(&date)?.get(employee_id).copied()
    }

    /// Counts only employees that pass `filter`; records for anyone else are
    /// ignored even when present for that day.
    pub fn day_stats(
        &self,
        date: NaiveDate,
        employees: &[Employee],
        filter: &DepartmentFilter,
    ) -> DayStats {
        let mut stats = DayStats::default();
        let Some(day) = self.days.get(&date) else {
            return stats;
        };
        for employee in employees.iter().filter(|e| filter.matches(&e.department)) {
            match day.get(&employee.employee_id) {
                Some(AttendanceStatus::Present) => stats.present += 1,
                Some(AttendanceStatus::Absent) => stats.absent += 1,
                None => {}
            }
        }
        stats
    }
}
