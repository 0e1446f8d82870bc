use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Departments offered by the directory. Values outside the fixed set are
/// kept verbatim so a server-side rename never breaks deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Department {
    #[default]
    Engineering,
    Marketing,
    Sales,
    Hr,
    Design,
    Support,
    Other(String),
}

impl Department {
    pub const ALL: [Department; 6] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Design,
        Department::Support,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Design => "Design",
            Department::Support => "Support",
            Department::Other(name) => name.as_str(),
        }
    }
}

impl From<String> for Department {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Engineering" => Department::Engineering,
            "Marketing" => Department::Marketing,
            "Sales" => Department::Sales,
            "HR" => Department::Hr,
            "Design" => Department::Design,
            "Support" => Department::Support,
            _ => Department::Other(value),
        }
    }
}

impl From<Department> for String {
    fn from(value: Department) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub marked_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    #[serde(other)]
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(default)]
    pub total_employees: u32,
    #[serde(default)]
    pub present_today: u32,
    #[serde(default)]
    pub absent_today: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStat {
    pub day: String,
    pub date: NaiveDate,
    /// Share of all employees marked present, in percent.
    pub present: u32,
    pub absent: u32,
    #[serde(default)]
    pub present_count: u32,
    #[serde(default)]
    pub absent_count: u32,
    #[serde(default)]
    pub total_marked: u32,
    #[serde(default)]
    pub is_holiday: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub user: String,
    pub action: String,
    pub time: String,
    #[serde(default)]
    pub initial: Option<String>,
}

/// Accepts both naive timestamps and RFC 3339 strings; the server emits
/// either depending on how the record was stored.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(with_offset.naive_utc()));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(Some)
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
            details: None,
        }
    }

    /// Builds an error from a rejected response. The server reports problems
    /// as `{"detail": ...}` where `detail` is a message or a list of
    /// validation entries carrying `msg`.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let detail = body.as_ref().and_then(|b| b.get("detail")).cloned();
        let error = match &detail {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Array(entries)) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if messages.is_empty() {
                    format!("Request rejected ({status})")
                } else {
                    messages.join("; ")
                }
            }
            _ => format!("Request rejected ({status})"),
        };
        Self {
            error,
            code: format!("HTTP_{status}"),
            details: detail.filter(|d| d.is_array()),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        assert_eq!(ApiError::unknown("something failed").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("network error").code, "REQUEST_FAILED");
        assert_eq!(ApiError::parse("bad json").code, "PARSE_ERROR");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_reads_string_detail() {
        let error = ApiError::from_response(404, Some(json!({ "detail": "Employee not found" })));
        assert_eq!(error.error, "Employee not found");
        assert_eq!(error.code, "HTTP_404");
        assert!(error.details.is_none());
    }

    #[test]
    fn api_error_joins_validation_detail_entries() {
        let error = ApiError::from_response(
            422,
            Some(json!({
                "detail": [
                    { "loc": ["body", "email"], "msg": "value is not a valid email address" },
                    { "loc": ["body", "employee_id"], "msg": "field required" }
                ]
            })),
        );
        assert_eq!(
            error.error,
            "value is not a valid email address; field required"
        );
        assert!(error.details.is_some());
    }

    #[test]
    fn api_error_falls_back_to_status_without_body() {
        let error = ApiError::from_response(500, None);
        assert_eq!(error.error, "Request rejected (500)");
    }

    #[test]
    fn department_round_trips_known_and_unknown_names() {
        let hr: Department = serde_json::from_value(json!("HR")).unwrap();
        assert_eq!(hr, Department::Hr);
        assert_eq!(serde_json::to_value(&hr).unwrap(), json!("HR"));

        let legal: Department = serde_json::from_value(json!("Legal")).unwrap();
        assert_eq!(legal, Department::Other("Legal".into()));
        assert_eq!(legal.to_string(), "Legal");
    }

    #[test]
    fn deserialize_attendance_record_with_naive_and_offset_timestamps() {
        let naive: AttendanceRecord = serde_json::from_value(json!({
            "_id": "a1",
            "employee_id": "E1",
            "date": "2025-03-04",
            "status": "Present",
            "marked_at": "2025-03-04T09:15:30.123456"
        }))
        .unwrap();
        assert_eq!(naive.status, AttendanceStatus::Present);
        assert_eq!(
            naive.marked_at.unwrap().format("%H:%M").to_string(),
            "09:15"
        );

        let offset: AttendanceRecord = serde_json::from_value(json!({
            "employee_id": "E2",
            "date": "2025-03-04",
            "status": "Absent",
            "marked_at": "2025-03-04T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(offset.status, AttendanceStatus::Absent);
        assert!(offset.marked_at.is_some());
        assert!(offset.id.is_none());
    }

    #[test]
    fn notification_kind_falls_back_to_info() {
        let notification: Notification = serde_json::from_value(json!({
            "_id": "n1",
            "title": "Heads up",
            "message": "Something happened",
            "type": "critical",
            "is_read": false,
            "created_at": "2025-03-04T10:00:00"
        }))
        .unwrap();
        assert_eq!(notification.kind, NotificationKind::Info);
        assert!(!notification.is_read);
    }

    #[test]
    fn mark_attendance_request_serializes_wire_shape() {
        let request = MarkAttendanceRequest {
            employee_id: "E1".into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            status: AttendanceStatus::Absent,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "employee_id": "E1", "date": "2025-03-04", "status": "Absent" })
        );
    }
}
