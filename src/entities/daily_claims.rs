use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "claim_type")]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    #[sea_orm(string_value = "daily_bonus")]
    DailyBonus,
    #[sea_orm(string_value = "spin")]
    Spin,
    #[sea_orm(string_value = "scratch")]
    Scratch,
}

impl std::fmt::Display for ClaimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimType::DailyBonus => write!(f, "daily_bonus"),
            ClaimType::Spin => write!(f, "spin"),
            ClaimType::Scratch => write!(f, "scratch"),
        }
    }
}

/// 领取窗口计数：每 (用户, 类型, 日期) 一行，唯一索引兜底并发重复领取
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "daily_claims")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub claim_type: ClaimType,
    pub claim_date: NaiveDate,
    /// 当日已使用次数（每日奖励恒为 1）
    pub uses: i64,
    /// 连续天数（仅每日奖励使用）
    pub streak: i64,
    /// 当日通过该入口发放的金币合计
    pub coins_awarded: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
