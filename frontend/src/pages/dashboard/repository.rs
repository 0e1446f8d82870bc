use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::{
        ApiClient, ApiError, AttendanceStatus, MarkAttendanceRequest, RecentActivity,
        SummaryStats, WeeklyStat,
    },
    state::settings::SettingsStore,
    utils::storage::StorageError,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: SummaryStats,
    pub weekly: Vec<WeeklyStat>,
    pub recent: Vec<RecentActivity>,
}

pub async fn fetch_dashboard(api: &ApiClient) -> Result<DashboardData, ApiError> {
    let (summary, weekly, recent) = futures::try_join!(
        api.get_summary_stats(),
        api.get_weekly_stats(),
        api.get_recent_activity()
    )?;
    Ok(DashboardData {
        summary,
        weekly,
        recent,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfMarkOutcome {
    /// Written to the server and stored locally.
    Synced,
    /// Stored locally only: no linked employee id, or the server write failed.
    LocalOnly,
}

/// Marks the admin for `date`. The local record is written regardless of the
/// server outcome; only a storage failure is an error.
pub async fn self_mark(
    api: &ApiClient,
    store: &SettingsStore,
    employee_id: Option<&str>,
    date: NaiveDate,
    status: AttendanceStatus,
) -> Result<SelfMarkOutcome, StorageError> {
    let outcome = match employee_id {
        Some(employee_id) => {
            let request = MarkAttendanceRequest {
                employee_id: employee_id.to_string(),
                date,
                status,
            };
            match api.mark_attendance(&request).await {
                Ok(_) => SelfMarkOutcome::Synced,
                Err(err) => {
                    log::warn!("Self mark for {} not synced, keeping local copy: {}", date, err);
                    SelfMarkOutcome::LocalOnly
                }
            }
        }
        None => SelfMarkOutcome::LocalOnly,
    };
    store.record_self_mark(date, status)?;
    Ok(outcome)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    #[test]
    fn dashboard_data_survives_resource_serialization() {
        let data = DashboardData {
            summary: SummaryStats {
                total_employees: 4,
                present_today: 3,
                absent_today: 1,
            },
            ..DashboardData::default()
        };
        let encoded = serde_json::to_string(&data).unwrap();
        let decoded: DashboardData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[tokio::test]
    async fn fetch_dashboard_combines_three_endpoints() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendance/stats/summary");
                then.status(200).json_body(json!({
                    "total_employees": 4, "present_today": 3, "absent_today": 1
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendance/stats/weekly");
                then.status(200).json_body(json!([
                    { "day": "Thu", "date": "2025-01-02", "present": 75, "absent": 25 }
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendance/stats/recent");
                then.status(200).json_body(json!([
                    { "user": "Alice", "action": "Marked Present", "time": "09:30 AM", "initial": "A" }
                ]));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let data = fetch_dashboard(&api).await.unwrap();
        assert_eq!(data.summary.present_today, 3);
        assert_eq!(data.weekly[0].present, 75);
        assert_eq!(data.recent[0].user, "Alice");
    }

    #[tokio::test]
    async fn fetch_dashboard_fails_when_any_endpoint_fails() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendance/stats/summary");
                then.status(500).json_body(json!({ "detail": "stats offline" }));
            })
            .await;
        for path in ["/api/attendance/stats/weekly", "/api/attendance/stats/recent"] {
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200).json_body(json!([]));
                })
                .await;
        }

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = fetch_dashboard(&api).await.unwrap_err();
        assert_eq!(err.code, "HTTP_500");
    }

    #[tokio::test]
    async fn self_mark_keeps_local_record_when_server_rejects() {
        let server = MockServer::start_async().await;
        let write = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/attendance/")
                    .json_body(json!({ "employee_id": "E7", "date": "2025-01-02", "status": "Present" }));
                then.status(404).json_body(json!({ "detail": "Employee not found" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let store = SettingsStore::new(Rc::new(MemoryStorage::new()));
        let outcome = self_mark(&api, &store, Some("E7"), today(), AttendanceStatus::Present)
            .await
            .unwrap();
        assert_eq!(outcome, SelfMarkOutcome::LocalOnly);
        write.assert_hits_async(1).await;
        assert_eq!(store.self_mark(today()), Some(AttendanceStatus::Present));
    }

    #[tokio::test]
    async fn self_mark_without_employee_id_skips_server() {
        let server = MockServer::start_async().await;
        let write = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(201);
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let store = SettingsStore::new(Rc::new(MemoryStorage::new()));
        let outcome = self_mark(&api, &store, None, today(), AttendanceStatus::Absent)
            .await
            .unwrap();
        assert_eq!(outcome, SelfMarkOutcome::LocalOnly);
        write.assert_hits_async(0).await;
        assert_eq!(store.self_mark(today()), Some(AttendanceStatus::Absent));
    }

    #[tokio::test]
    async fn self_mark_syncs_linked_admin() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/attendance/");
                then.status(201).json_body(json!({
                    "employee_id": "E7", "date": "2025-01-02", "status": "Present"
                }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let store = SettingsStore::new(Rc::new(MemoryStorage::new()));
        let outcome = self_mark(&api, &store, Some("E7"), today(), AttendanceStatus::Present)
            .await
            .unwrap();
        assert_eq!(outcome, SelfMarkOutcome::Synced);
    }
}
