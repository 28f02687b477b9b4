pub mod client;
pub mod dispatch;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use dispatch::{ApiReply, ApiRequest, HttpDispatcher, RequestSink};
pub use error::FetchError;
pub use types::{
    Activity, ActivityCategory, DashboardStats, Notification, NotificationCategory,
    NotificationId,
};
