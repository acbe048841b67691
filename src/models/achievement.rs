use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::achievement_entity as achievements;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub coins: i64,
    pub requirement: i64,
    pub requirement_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<achievements::Model> for AchievementResponse {
    fn from(m: achievements::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            icon: m.icon,
            coins: m.coins,
            requirement: m.requirement,
            requirement_type: m.requirement_type,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAchievementRequest {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub coins: i64,
    pub requirement: i64,
    pub requirement_type: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAchievementRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub coins: Option<i64>,
    pub requirement: Option<i64>,
    pub requirement_type: Option<String>,
}
