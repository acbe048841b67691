use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyBonusStatusResponse {
    pub claimed_today: bool,
    pub streak: i64,
    /// 本次（或下次）可领取的金额
    pub next_reward: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyBonusClaimResponse {
    pub reward: i64,
    pub streak: i64,
    pub coins: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpinStatusResponse {
    pub spins_remaining: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpinClaimResponse {
    pub reward: i64,
    pub spins_remaining: i64,
    pub coins: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScratchStatusResponse {
    pub cards_remaining: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScratchClaimResponse {
    pub reward: i64,
    pub cards_remaining: i64,
    pub coins: i64,
}
