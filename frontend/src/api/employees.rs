use super::{
    client::{segment, ApiClient},
    types::{ApiError, CreateEmployee, Employee, MessageResponse},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees/").await
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        self.get_json(&format!("/employees/{}", segment(employee_id)))
            .await
    }

    pub async fn add_employee(&self, request: &CreateEmployee) -> Result<Employee, ApiError> {
        self.post_json("/employees/", request).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<MessageResponse, ApiError> {
        self.delete_json(&format!("/employees/{}", segment(employee_id)))
            .await
    }
}
