use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::offer_entity as offers;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OfferResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub coins: i64,
    pub image_url: Option<String>,
    pub action_url: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

impl From<offers::Model> for OfferResponse {
    fn from(m: offers::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            coins: m.coins,
            image_url: m.image_url,
            action_url: m.action_url,
            category: m.category,
            is_active: m.is_active,
            priority: m.priority,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOfferRequest {
    pub title: String,
    pub description: String,
    pub coins: i64,
    pub image_url: Option<String>,
    pub action_url: Option<String>,
    pub category: String,
    pub is_active: Option<bool>,
    pub priority: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOfferRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub coins: Option<i64>,
    pub image_url: Option<String>,
    pub action_url: Option<String>,
    pub category: Option<String>,
    pub priority: Option<i32>,
}
