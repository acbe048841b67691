use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "auto_ban_rule_type")]
#[serde(rename_all = "snake_case")]
pub enum AutoBanRuleType {
    /// 单日入账金币超过阈值
    #[sea_orm(string_value = "daily_earn_limit")]
    DailyEarnLimit,
    /// 余额超过阈值
    #[sea_orm(string_value = "balance_limit")]
    BalanceLimit,
}

impl std::fmt::Display for AutoBanRuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutoBanRuleType::DailyEarnLimit => write!(f, "daily_earn_limit"),
            AutoBanRuleType::BalanceLimit => write!(f, "balance_limit"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "auto_ban_rules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub rule_name: String,
    pub rule_type: AutoBanRuleType,
    pub threshold: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
