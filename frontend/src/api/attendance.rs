use chrono::NaiveDate;

use super::{
    client::{segment, ApiClient},
    types::{
        ApiError, AttendanceRecord, MarkAttendanceRequest, RecentActivity, SummaryStats,
        WeeklyStat,
    },
};

impl ApiClient {
    pub async fn mark_attendance(
        &self,
        request: &MarkAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        self.post_json("/attendance/", request).await
    }

    pub async fn get_attendance_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(&format!("/attendance/date/{}", date.format("%Y-%m-%d")))
            .await
    }

    pub async fn get_attendance_history(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_json(&format!("/attendance/{}", segment(employee_id)))
            .await
    }

    pub async fn get_summary_stats(&self) -> Result<SummaryStats, ApiError> {
        self.get_json("/attendance/stats/summary").await
    }

    pub async fn get_weekly_stats(&self) -> Result<Vec<WeeklyStat>, ApiError> {
        self.get_json("/attendance/stats/weekly").await
    }

    pub async fn get_recent_activity(&self) -> Result<Vec<RecentActivity>, ApiError> {
        self.get_json("/attendance/stats/recent").await
    }
}
