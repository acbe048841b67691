use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::app_user_entity as app_users;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub coins: i64,
    pub total_earned: i64,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub referral_code: String,
    pub referred_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<app_users::Model> for UserResponse {
    fn from(m: app_users::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            coins: m.coins,
            total_earned: m.total_earned,
            is_banned: m.is_banned,
            ban_reason: m.ban_reason,
            referral_code: m.referral_code,
            referred_by: m.referred_by,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UserListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// 按用户名或邮箱模糊匹配
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BanUserRequest {
    pub ban: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDeviceTokenRequest {
    pub device_token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    pub coins: i64,
    pub total_earned: i64,
    /// 等级 = coins / 1000 + 1
    pub level: i64,
    pub next_level_coins: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: String,
    pub username: String,
    pub total_earned: i64,
}
