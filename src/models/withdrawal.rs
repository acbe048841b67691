use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{WithdrawalStatus, withdrawal_entity as withdrawals};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WithdrawalResponse {
    pub id: String,
    pub user_id: String,
    pub amount: i64,
    pub method: String,
    pub account_details: String,
    pub status: WithdrawalStatus,
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl From<withdrawals::Model> for WithdrawalResponse {
    fn from(m: withdrawals::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            amount: m.amount,
            method: m.method,
            account_details: m.account_details,
            status: m.status,
            admin_note: m.admin_note,
            created_at: m.created_at,
            processed_at: m.processed_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWithdrawalRequest {
    #[schema(example = 500)]
    pub amount: i64,
    #[schema(example = "upi")]
    pub method: String,
    #[schema(example = "fan@upi")]
    pub account_details: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WithdrawalListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<WithdrawalStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProcessWithdrawalRequest {
    /// approved 或 rejected
    pub status: WithdrawalStatus,
    pub admin_note: Option<String>,
}
