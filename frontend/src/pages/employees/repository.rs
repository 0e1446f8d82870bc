use crate::api::{ApiClient, ApiError, AttendanceRecord, CreateEmployee, Employee};

pub async fn fetch_employees(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn add_employee(api: &ApiClient, request: CreateEmployee) -> Result<Employee, ApiError> {
    api.add_employee(&request).await
}

pub async fn remove_employee(api: &ApiClient, employee_id: String) -> Result<String, ApiError> {
    api.delete_employee(&employee_id).await?;
    Ok(employee_id)
}

pub async fn fetch_history(
    api: &ApiClient,
    employee_id: &str,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.get_attendance_history(employee_id).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Department;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn add_employee_surfaces_server_detail() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/employees/");
                then.status(400)
                    .json_body(json!({ "detail": "Employee ID already exists" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = add_employee(
            &api,
            CreateEmployee {
                employee_id: "E1".into(),
                full_name: "Alice".into(),
                email: "alice@example.com".into(),
                department: Department::Hr,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Employee ID already exists");
        assert_eq!(err.code, "HTTP_400");
    }

    #[tokio::test]
    async fn remove_employee_returns_the_removed_id() {
        let server = MockServer::start_async().await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/employees/E7");
                then.status(200).json_body(json!({ "message": "Employee deleted" }));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let removed = remove_employee(&api, "E7".into()).await.unwrap();
        assert_eq!(removed, "E7");
        delete.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn history_lists_records_for_one_employee() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/attendance/E1");
                then.status(200).json_body(json!([
                    { "employee_id": "E1", "date": "2025-01-02", "status": "Present" },
                    { "employee_id": "E1", "date": "2025-01-03", "status": "Absent" }
                ]));
            })
            .await;

        let api = ApiClient::new_with_base_url(server.url("/api"));
        let history = fetch_history(&api, "E1").await.unwrap();
        assert_eq!(history.len(), 2);
    }
}
