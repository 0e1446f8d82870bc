mod attendance;
pub mod client;
mod employees;
mod notifications;
pub mod types;

pub use client::*;
pub use types::*;
