use serde_json::json;

use crate::{
    api::{ApiError, AttendanceRecord, AttendanceStatus, CreateEmployee, Department, Employee},
    utils::filter::{matches_query, DepartmentFilter},
};

/// Employees matching both the search text and the department, in server
/// order.
pub fn filter_employees(
    employees: &[Employee],
    query: &str,
    department: &DepartmentFilter,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| department.matches(&e.department))
        .filter(|e| matches_query(query, &e.full_name, &e.employee_id))
        .cloned()
        .collect()
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// One-based page slice. Pages past the end are empty.
pub fn paginate(employees: &[Employee], page: usize, page_size: usize) -> Vec<Employee> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    employees
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect()
}

/// Page number to display: never below 1, never past the last page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: Department,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

impl EmployeeForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks every field and returns the trimmed request, or a validation
    /// error listing each problem.
    pub fn validate(&self) -> Result<CreateEmployee, ApiError> {
        let employee_id = self.employee_id.trim();
        let full_name = self.full_name.trim();
        let email = self.email.trim();

        let mut problems = Vec::new();
        if employee_id.is_empty() {
            problems.push("Employee ID is required");
        }
        if full_name.is_empty() {
            problems.push("Full name is required");
        }
        if email.is_empty() {
            problems.push("Email is required");
        } else if !looks_like_email(email) {
            problems.push("Email address is not valid");
        }

        if !problems.is_empty() {
            let mut error = ApiError::validation("Please fix the highlighted fields");
            error.details = Some(json!({ "errors": problems }));
            return Err(error);
        }

        Ok(CreateEmployee {
            employee_id: employee_id.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            department: self.department.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub present: usize,
    pub absent: usize,
}

impl HistorySummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut summary, record| {
                match record.status {
                    AttendanceStatus::Present => summary.present += 1,
                    AttendanceStatus::Absent => summary.absent += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.present + self.absent
    }

    pub fn attendance_rate(&self) -> u32 {
        if self.total() == 0 {
            return 0;
        }
        ((self.present as f64 / self.total() as f64) * 100.0).round() as u32
    }
}

/// Newest records first, at most `limit`.
pub fn recent_records(records: &[AttendanceRecord], limit: usize) -> Vec<AttendanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}
