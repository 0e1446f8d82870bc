use futures::future::try_join_all;

use crate::api::{ApiClient, ApiError, Employee};

use super::utils::{MonthAttendance, MonthKey};

pub async fn fetch_roster(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

/// One request per calendar day of `month`, issued together.
pub async fn fetch_month(api: &ApiClient, month: MonthKey) -> Result<MonthAttendance, ApiError> {
    let days = try_join_all(month.days().into_iter().map(|day| async move {
        api.get_attendance_by_date(day)
            .await
            .map(|records| (day, records))
    }))
    .await?;
    Ok(MonthAttendance::from_days(days))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::AttendanceStatus;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_month_requests_every_day() {
        let server = MockServer::start_async().await;
        let days = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/api/attendance/date/2025-02-");
                then.status(200).json_body(json!([{
                    "employee_id": "E1",
                    "date": "2025-02-01",
                    "status": "Present"
                }]));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let month = fetch_month(&api, MonthKey { year: 2025, month: 2 })
            .await
            .unwrap();
        days.assert_hits_async(28).await;

        let last = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        assert_eq!(month.status(last, "E1"), Some(AttendanceStatus::Present));
        assert_eq!(month.status(last, "E2"), None);
    }

    #[tokio::test]
    async fn failed_day_fails_the_month() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/api/attendance/date/");
                then.status(503).json_body(json!({ "detail": "maintenance" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = fetch_month(&api, MonthKey { year: 2025, month: 2 })
            .await
            .unwrap_err();
        assert_eq!(err.code, "HTTP_503");
        assert_eq!(err.error, "maintenance");
    }
}
