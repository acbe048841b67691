use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::promo_code_entity as promo_codes;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromoCodeResponse {
    pub id: String,
    pub code: String,
    pub coins: i64,
    pub max_uses: i64,
    pub used_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<promo_codes::Model> for PromoCodeResponse {
    fn from(m: promo_codes::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            coins: m.coins,
            max_uses: m.max_uses,
            used_count: m.used_count,
            expires_at: m.expires_at,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromoCodeRequest {
    /// 不提供则自动生成
    pub code: Option<String>,
    pub coins: i64,
    /// 0 表示不限次数
    pub max_uses: Option<i64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RedeemPromoCodeRequest {
    #[schema(example = "SUMMER2024")]
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RedeemPromoCodeResponse {
    pub reward: i64,
    pub coins: i64,
}
