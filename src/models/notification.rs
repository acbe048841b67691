use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{
    NotificationStatus, NotificationTarget, notification_entity as notifications,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationResponse {
    pub id: String,
    pub title: String,
    pub message: String,
    pub target_type: NotificationTarget,
    pub target_users: Option<Vec<String>>,
    pub segment: Option<String>,
    pub status: NotificationStatus,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<notifications::Model> for NotificationResponse {
    fn from(m: notifications::Model) -> Self {
        let target_users = m
            .target_users
            .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok());
        Self {
            id: m.id,
            title: m.title,
            message: m.message,
            target_type: m.target_type,
            target_users,
            segment: m.segment,
            status: m.status,
            sent_at: m.sent_at,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendNotificationRequest {
    pub title: String,
    pub message: String,
    pub target_type: NotificationTarget,
    /// target_type = specific 时必填
    pub target_users: Option<Vec<String>>,
    /// target_type = segment 时必填（目前支持 "active"）
    pub segment: Option<String>,
}
