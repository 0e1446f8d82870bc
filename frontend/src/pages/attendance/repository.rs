use chrono::NaiveDate;
use futures::future::{join_all, try_join};

use crate::api::{ApiClient, ApiError};

use super::utils::AttendanceBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    NoChanges,
    Saved { count: usize },
}

/// Fetches the roster and the day's records together.
pub async fn load_day(api: &ApiClient, date: NaiveDate) -> Result<AttendanceBoard, ApiError> {
    let (employees, records) =
        try_join(api.list_employees(), api.get_attendance_by_date(date)).await?;
    Ok(AttendanceBoard::from_server(date, employees, records))
}

/// Writes every dirty draft concurrently. All writes are issued even when
/// some fail; the first failure is returned and the board is not touched.
pub async fn commit_drafts(
    api: &ApiClient,
    board: &AttendanceBoard,
) -> Result<CommitOutcome, ApiError> {
    let requests = board.dirty_requests();
    if requests.is_empty() {
        return Ok(CommitOutcome::NoChanges);
    }

    let results = join_all(requests.iter().map(|request| api.mark_attendance(request))).await;
    let total = results.len();
    let mut failures = results.into_iter().filter_map(Result::err);
    match failures.next() {
        Some(first) => {
            let failed = 1 + failures.count();
            log::error!(
                "Attendance commit for {} failed for {} of {} records: {}",
                board.date(),
                failed,
                total,
                first
            );
            Err(first)
        }
        None => Ok(CommitOutcome::Saved { count: total }),
    }
}
