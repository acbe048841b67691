use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{
    TransactionKind, TransactionStatus, transaction_entity as transactions,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: String,
    pub user_id: String,
    pub kind: TransactionKind,
    /// 带符号金额：入账为正，出账为负
    pub amount: i64,
    pub description: String,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(m: transactions::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            kind: m.kind,
            amount: m.amount,
            description: m.description,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransactionListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdjustCoinsRequest {
    pub user_id: String,
    /// 带符号金额：正数加币，负数扣币
    #[schema(example = 100)]
    pub amount: i64,
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkCreditRequest {
    #[schema(example = 50)]
    pub amount: i64,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkCreditResponse {
    /// 实际入账的用户数
    pub count: u64,
}
