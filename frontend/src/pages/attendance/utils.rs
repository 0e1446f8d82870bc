use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee, MarkAttendanceRequest},
    utils::filter::matches_query,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceDraft {
    pub status: AttendanceStatus,
    pub marked_at: Option<NaiveDateTime>,
    pub is_dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowState {
    Unsaved,
    Marked(Option<NaiveDateTime>),
    AwaitingSync,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCounts {
    pub present: usize,
    pub absent: usize,
    pub unmarked: usize,
    pub dirty: usize,
}

/// Roster plus the per-employee drafts for one day.
///
/// Drafts exist only for employees the server returned a record for, or
/// whose status was changed locally. A dirty draft stays dirty until the
/// board is replaced by a fresh load.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceBoard {
    date: NaiveDate,
    employees: Vec<Employee>,
    drafts: BTreeMap<String, AttendanceDraft>,
}

impl AttendanceBoard {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            employees: Vec::new(),
            drafts: BTreeMap::new(),
        }
    }

    pub fn from_server(
        date: NaiveDate,
        employees: Vec<Employee>,
        records: Vec<AttendanceRecord>,
    ) -> Self {
        let drafts = records
            .into_iter()
            .map(|record| {
                (
                    record.employee_id,
                    AttendanceDraft {
                        status: record.status,
                        marked_at: record.marked_at,
                        is_dirty: false,
                    },
                )
            })
            .collect();
        Self {
            date,
            employees,
            drafts,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn draft(&self, employee_id: &str) -> Option<&AttendanceDraft> {
        self.drafts.get(employee_id)
    }

    /// Always marks the draft dirty, even when the status is unchanged.
    pub fn set_status(&mut self, employee_id: &str, status: AttendanceStatus) {
        self.drafts
            .entry(employee_id.to_string())
            .and_modify(|draft| {
                draft.status = status;
                draft.is_dirty = true;
            })
            .or_insert(AttendanceDraft {
                status,
                marked_at: None,
                is_dirty: true,
            });
    }

    /// Applies `status` to every loaded employee; search filters do not
    /// narrow this.
    pub fn bulk_set_status(&mut self, status: AttendanceStatus) {
        let ids: Vec<String> = self
            .employees
            .iter()
            .map(|employee| employee.employee_id.clone())
            .collect();
        for id in ids {
            self.set_status(&id, status);
        }
    }

    pub fn has_changes(&self) -> bool {
        self.drafts.values().any(|draft| draft.is_dirty)
    }

    /// One write per dirty draft, ordered by employee id.
    pub fn dirty_requests(&self) -> Vec<MarkAttendanceRequest> {
        self.drafts
            .iter()
            .filter(|(_, draft)| draft.is_dirty)
            .map(|(employee_id, draft)| MarkAttendanceRequest {
                employee_id: employee_id.clone(),
                date: self.date,
                status: draft.status,
            })
            .collect()
    }

    pub fn visible(&self, query: &str) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|employee| matches_query(query, &employee.full_name, &employee.employee_id))
            .cloned()
            .collect()
    }

    pub fn row_state(&self, employee_id: &str) -> RowState {
        match self.drafts.get(employee_id) {
            Some(draft) if draft.is_dirty => RowState::Unsaved,
            Some(draft) => RowState::Marked(draft.marked_at),
            None => RowState::AwaitingSync,
        }
    }

    pub fn counts(&self) -> BoardCounts {
        let mut counts = BoardCounts::default();
        for employee in &self.employees {
            match self.drafts.get(&employee.employee_id) {
                Some(draft) => {
                    match draft.status {
                        AttendanceStatus::Present => counts.present += 1,
                        AttendanceStatus::Absent => counts.absent += 1,
                    }
                    if draft.is_dirty {
                        counts.dirty += 1;
                    }
                }
                None => counts.unmarked += 1,
            }
        }
        counts
    }
}
