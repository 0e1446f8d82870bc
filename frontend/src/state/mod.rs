pub mod notifications;
pub mod profile;
pub mod request_generation;
pub mod settings;
pub mod toast;
