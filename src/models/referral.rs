use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::referral_entity as referrals;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferralResponse {
    pub id: String,
    pub referrer_id: String,
    pub referred_id: String,
    pub coins_earned: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<referrals::Model> for ReferralResponse {
    fn from(m: referrals::Model) -> Self {
        Self {
            id: m.id,
            referrer_id: m.referrer_id,
            referred_id: m.referred_id,
            coins_earned: m.coins_earned,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReferralCodeResponse {
    pub code: String,
    pub share_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReferralStatsResponse {
    pub total_referrals: i64,
    pub earned_coins: i64,
    pub recent: Vec<ReferralResponse>,
}
