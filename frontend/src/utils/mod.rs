pub mod download;
pub mod filter;
pub mod storage;
pub mod time;

pub use download::trigger_download;
