use crate::entities::{
    AutoBanRuleType, TransactionKind, TransactionStatus, app_user_entity as app_users,
    auto_ban_rule_entity as auto_ban_rules, transaction_entity as transactions,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect, Set,
};
use uuid::Uuid;

/// 自动封禁：规则由管理端维护，入账路径在每次 credit 后调用 enforce，
/// 后台任务定期 sweep 全量用户兜底。
#[derive(Clone)]
pub struct AutoBanService {
    pool: DatabaseConnection,
}

impl AutoBanService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_rules(&self) -> AppResult<Vec<AutoBanRuleResponse>> {
        let models = auto_ban_rules::Entity::find().all(&self.pool).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn create_rule(
        &self,
        request: CreateAutoBanRuleRequest,
    ) -> AppResult<AutoBanRuleResponse> {
        if request.threshold <= 0 {
            return Err(AppError::ValidationError(
                "Threshold must be positive".to_string(),
            ));
        }

        let model = auto_ban_rules::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            rule_name: Set(request.rule_name),
            rule_type: Set(request.rule_type),
            threshold: Set(request.threshold),
            is_active: Set(request.is_active.unwrap_or(true)),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn toggle_rule(
        &self,
        rule_id: &str,
        request: ToggleActiveRequest,
    ) -> AppResult<AutoBanRuleResponse> {
        let rule = auto_ban_rules::Entity::find_by_id(rule_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Auto-ban rule not found".to_string()))?;

        let mut model = rule.into_active_model();
        model.is_active = Set(request.is_active);
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn delete_rule(&self, rule_id: &str) -> AppResult<()> {
        let result = auto_ban_rules::Entity::delete_by_id(rule_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Auto-ban rule not found".to_string()));
        }
        Ok(())
    }

    /// 入账后检查该用户是否触发任一启用规则，触发则封禁。
    /// 返回是否发生了封禁。与入账同事务执行：账先记，封禁随后生效。
    pub async fn enforce<C: ConnectionTrait>(&self, db: &C, user_id: &str) -> AppResult<bool> {
        let rules = auto_ban_rules::Entity::find()
            .filter(auto_ban_rules::Column::IsActive.eq(true))
            .all(db)
            .await?;
        if rules.is_empty() {
            return Ok(false);
        }

        let user = match app_users::Entity::find_by_id(user_id).one(db).await? {
            Some(u) if !u.is_banned => u,
            _ => return Ok(false),
        };

        for rule in &rules {
            let violated = match rule.rule_type {
                AutoBanRuleType::BalanceLimit => user.coins > rule.threshold,
                AutoBanRuleType::DailyEarnLimit => {
                    let today = Utc::now().date_naive();
                    self.earned_on(db, user_id, today).await? > rule.threshold
                }
            };

            if violated {
                let mut model = user.into_active_model();
                model.is_banned = Set(true);
                model.ban_reason = Set(Some(format!(
                    "Automatic ban: rule '{}' exceeded (threshold {})",
                    rule.rule_name, rule.threshold
                )));
                model.update(db).await?;
                log::warn!(
                    "User {user_id} auto-banned by rule {} ({})",
                    rule.rule_name,
                    rule.rule_type
                );
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// 定期全量检查，补上未经过入账路径的漏网用户
    pub async fn sweep(&self) -> AppResult<u64> {
        let users: Vec<String> = app_users::Entity::find()
            .filter(app_users::Column::IsBanned.eq(false))
            .select_only()
            .column(app_users::Column::Id)
            .into_tuple()
            .all(&self.pool)
            .await?;

        let mut banned = 0u64;
        for user_id in &users {
            if self.enforce(&self.pool, user_id).await? {
                banned += 1;
            }
        }
        if banned > 0 {
            log::info!("Auto-ban sweep banned {banned} users");
        }
        Ok(banned)
    }

    /// 当日收入合计（仅正向入账，退款不算收入）
    async fn earned_on<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<i64> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct SumRow {
            total: Option<i64>,
        }
        let start = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| AppError::InternalError("Invalid date".to_string()))?;
        let end = start + chrono::Duration::days(1);

        let sum = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .filter(transactions::Column::Status.eq(TransactionStatus::Completed))
            .filter(transactions::Column::Kind.is_in([
                TransactionKind::Earn,
                TransactionKind::Bonus,
                TransactionKind::Referral,
            ]))
            .filter(transactions::Column::CreatedAt.gte(start))
            .filter(transactions::Column::CreatedAt.lt(end))
            .select_only()
            .column_as(Expr::col(transactions::Column::Amount).sum(), "total")
            .into_model::<SumRow>()
            .one(db)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0);
        Ok(sum)
    }
}
