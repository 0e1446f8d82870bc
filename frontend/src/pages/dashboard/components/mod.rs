pub mod activity;
pub mod self_mark;
pub mod stats;

pub use activity::RecentActivityList;
pub use self_mark::{SelfMarkCard, WelcomeBanner};
pub use stats::{StatsGrid, WeeklyTrend};
