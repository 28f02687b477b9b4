pub mod api;
pub mod common;
pub mod dashboard;
pub mod gui;
pub mod logging;
pub mod notifications;
pub mod settings;
pub mod toast_log;
