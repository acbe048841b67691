use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::task_entity as tasks;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub coins: i64,
    pub action_url: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl From<tasks::Model> for TaskResponse {
    fn from(m: tasks::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            coins: m.coins,
            action_url: m.action_url,
            category: m.category,
            is_active: m.is_active,
            priority: m.priority,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub coins: i64,
    pub action_url: Option<String>,
    pub category: String,
    pub is_active: Option<bool>,
    pub priority: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub coins: Option<i64>,
    pub action_url: Option<String>,
    pub category: Option<String>,
    pub priority: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskCompleteResponse {
    pub reward: i64,
    pub coins: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleActiveRequest {
    pub is_active: bool,
}
