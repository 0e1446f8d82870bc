use std::fmt;

use crate::api::Department;

/// Department selector shared by the directory and the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    pub fn matches(&self, department: &Department) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(wanted) => wanted == department,
        }
    }

    /// Parses the value of a `<select>`. An empty value or `All` means
    /// `All`; any other value selects that department, unknown names
    /// included.
    pub fn from_select_value(value: &str) -> Self {
        if value.is_empty() || value == "All" {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Only(Department::from(value.to_string()))
        }
    }

    pub fn select_value(&self) -> String {
        match self {
            DepartmentFilter::All => "All".into(),
            DepartmentFilter::Only(department) => department.as_str().to_string(),
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentFilter::All => f.write_str("All Departments"),
            DepartmentFilter::Only(department) => department.fmt(f),
        }
    }
}

/// Case-insensitive substring match on either the name or the id. An empty
/// query matches everything.
pub fn matches_query(query: &str, full_name: &str, employee_id: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    full_name.to_lowercase().contains(&needle) || employee_id.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_name_or_id_ignoring_case() {
        assert!(matches_query("ali", "Alice", "E1"));
        assert!(matches_query("e2", "Bob", "E2"));
        assert!(matches_query("  ", "Bob", "E2"));
        assert!(!matches_query("zed", "Alice", "E1"));
    }

    #[test]
    fn department_filter_round_trips_select_values() {
        assert_eq!(DepartmentFilter::from_select_value("All"), DepartmentFilter::All);
        let hr = DepartmentFilter::from_select_value("HR");
        assert_eq!(hr, DepartmentFilter::Only(Department::Hr));
        assert_eq!(hr.select_value(), "HR");
        assert!(hr.matches(&Department::Hr));
        assert!(!hr.matches(&Department::Sales));
        assert!(DepartmentFilter::All.matches(&Department::Sales));
    }
}
