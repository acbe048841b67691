use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{AutoBanRuleType, auto_ban_rule_entity as auto_ban_rules};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AutoBanRuleResponse {
    pub id: String,
    pub rule_name: String,
    pub rule_type: AutoBanRuleType,
    pub threshold: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<auto_ban_rules::Model> for AutoBanRuleResponse {
    fn from(m: auto_ban_rules::Model) -> Self {
        Self {
            id: m.id,
            rule_name: m.rule_name,
            rule_type: m.rule_type,
            threshold: m.threshold,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAutoBanRuleRequest {
    pub rule_name: String,
    pub rule_type: AutoBanRuleType,
    pub threshold: i64,
    pub is_active: Option<bool>,
}
