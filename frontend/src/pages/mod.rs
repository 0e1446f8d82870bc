pub mod attendance;
pub mod calendar;
pub mod dashboard;
pub mod employees;
