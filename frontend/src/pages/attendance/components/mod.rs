pub mod roster;
pub mod toolbar;

pub use roster::RosterTable;
pub use toolbar::AttendanceToolbar;
