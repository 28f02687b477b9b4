use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned notification identifier. The server may hand out numeric
/// or string ids; the client only echoes them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationId::Number(n) => write!(f, "{n}"),
            NotificationId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NotificationId {
    fn from(value: i64) -> Self {
        NotificationId::Number(value)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        NotificationId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Maintenance,
    Warranty,
    License,
    System,
    Security,
    #[default]
    Info,
    Warning,
    Danger,
    Success,
    /// Any category this client does not know about.
    #[serde(other)]
    Other,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Maintenance => "maintenance",
            NotificationCategory::Warranty => "warranty",
            NotificationCategory::License => "license",
            NotificationCategory::System => "system",
            NotificationCategory::Security => "security",
            NotificationCategory::Info => "info",
            NotificationCategory::Warning => "warning",
            NotificationCategory::Danger => "danger",
            NotificationCategory::Success => "success",
            NotificationCategory::Other => "other",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub category: NotificationCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Create,
    Update,
    Delete,
    Maintenance,
    Assignment,
    Login,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub category: ActivityCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Aggregate counters. Every field is optional; a missing field leaves the
/// corresponding display untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_assets: Option<u64>,
    pub active_assets: Option<u64>,
    pub maintenance_count: Option<u64>,
    pub users_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivitiesResponse {
    #[serde(default)]
    pub activities: Option<Vec<Activity>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnreadCountResponse {
    #[serde(default)]
    pub unread_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationsResponse {
    #[serde(default)]
    pub notifications: Option<Vec<Notification>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaintenanceAlertsResponse {
    #[serde(default)]
    pub urgent_maintenance: Option<Vec<serde_json::Value>>,
}
