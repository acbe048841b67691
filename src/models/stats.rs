use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 管理后台首页统计
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_users: i64,
    pub active_users: i64,
    pub banned_users: i64,
    pub total_transactions: i64,
    /// 所有用户当前余额之和（流通金币）
    pub total_coins: i64,
    pub pending_withdrawals: i64,
    pub today_signups: i64,
    /// 今日账本净变动
    pub today_coins: i64,
    pub open_tickets: i64,
}
