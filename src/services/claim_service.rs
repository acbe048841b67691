use crate::config::RewardsConfig;
use crate::entities::{
    ClaimType, TransactionKind, app_user_entity as app_users, daily_claim_entity as daily_claims,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{AutoBanService, LedgerService};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

/// 转盘奖品表（万分比权重，合计 10000）
const SPIN_PRIZES: &[(i64, u32)] = &[
    (10, 4000),
    (20, 2500),
    (30, 1500),
    (50, 1200),
    (100, 600),
    (200, 200),
];

/// 刮刮卡奖品表
const SCRATCH_PRIZES: &[(i64, u32)] = &[
    (5, 3500),
    (10, 3000),
    (15, 1800),
    (25, 1000),
    (50, 500),
    (100, 200),
];

/// 连续签到加成封顶天数
const STREAK_CAP: i64 = 6;

/// 每日领取：签到、转盘、刮刮卡。
///
/// 领取窗口以数据库里的 daily_claims 行为准，客户端倒计时只是展示。
/// 所有领取方法都有 *_on(date) 变体，测试用它驱动跨天逻辑。
#[derive(Clone)]
pub struct ClaimService {
    pool: DatabaseConnection,
    ledger_service: LedgerService,
    auto_ban_service: AutoBanService,
    rewards: RewardsConfig,
}

impl ClaimService {
    pub fn new(
        pool: DatabaseConnection,
        ledger_service: LedgerService,
        auto_ban_service: AutoBanService,
        rewards: RewardsConfig,
    ) -> Self {
        Self {
            pool,
            ledger_service,
            auto_ban_service,
            rewards,
        }
    }

    // -----------------------------
    // 每日签到
    // -----------------------------

    pub async fn daily_bonus_status(&self, user_id: &str) -> AppResult<DailyBonusStatusResponse> {
        self.daily_bonus_status_on(user_id, Utc::now().date_naive())
            .await
    }

    pub async fn daily_bonus_status_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<DailyBonusStatusResponse> {
        let today_claim = self
            .find_claim(&self.pool, user_id, ClaimType::DailyBonus, today)
            .await?;

        if let Some(claim) = today_claim {
            return Ok(DailyBonusStatusResponse {
                claimed_today: true,
                streak: claim.streak,
                next_reward: self.bonus_amount(claim.streak + 1),
            });
        }

        let next_streak = self.next_streak(&self.pool, user_id, today).await?;
        Ok(DailyBonusStatusResponse {
            claimed_today: false,
            streak: next_streak - 1,
            next_reward: self.bonus_amount(next_streak),
        })
    }

    pub async fn claim_daily_bonus(&self, user_id: &str) -> AppResult<DailyBonusClaimResponse> {
        self.claim_daily_bonus_on(user_id, Utc::now().date_naive())
            .await
    }

    pub async fn claim_daily_bonus_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<DailyBonusClaimResponse> {
        let txn = self.pool.begin().await?;

        if self
            .find_claim(&txn, user_id, ClaimType::DailyBonus, today)
            .await?
            .is_some()
        {
            return Err(AppError::ValidationError(
                "Daily bonus already claimed today".to_string(),
            ));
        }

        let streak = self.next_streak(&txn, user_id, today).await?;
        let reward = self.bonus_amount(streak);

        self.ledger_service
            .credit(
                &txn,
                user_id,
                reward,
                TransactionKind::Bonus,
                &format!("Daily bonus (day {streak})"),
            )
            .await?;

        daily_claims::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            claim_type: Set(ClaimType::DailyBonus),
            claim_date: Set(today),
            uses: Set(1),
            streak: Set(streak),
            coins_awarded: Set(reward),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        self.auto_ban_service.enforce(&txn, user_id).await?;
        let coins = self.current_coins(&txn, user_id).await?;
        txn.commit().await?;

        Ok(DailyBonusClaimResponse {
            reward,
            streak,
            coins,
        })
    }

    // -----------------------------
    // 幸运转盘
    // -----------------------------

    pub async fn spin_status(&self, user_id: &str) -> AppResult<SpinStatusResponse> {
        self.spin_status_on(user_id, Utc::now().date_naive()).await
    }

    pub async fn spin_status_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<SpinStatusResponse> {
        let used = self.uses_today(&self.pool, user_id, ClaimType::Spin, today).await?;
        Ok(SpinStatusResponse {
            spins_remaining: (self.rewards.daily_spins - used).max(0),
        })
    }

    pub async fn claim_spin(&self, user_id: &str) -> AppResult<SpinClaimResponse> {
        self.claim_spin_on(user_id, Utc::now().date_naive()).await
    }

    pub async fn claim_spin_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<SpinClaimResponse> {
        let txn = self.pool.begin().await?;

        let used = self
            .consume_use(
                &txn,
                user_id,
                ClaimType::Spin,
                today,
                self.rewards.daily_spins,
                "No spins remaining today",
            )
            .await?;

        let reward = pick_prize(SPIN_PRIZES);
        self.ledger_service
            .credit(
                &txn,
                user_id,
                reward,
                TransactionKind::Earn,
                "Lucky spin reward",
            )
            .await?;
        self.bump_awarded(&txn, user_id, ClaimType::Spin, today, reward)
            .await?;

        self.auto_ban_service.enforce(&txn, user_id).await?;
        let coins = self.current_coins(&txn, user_id).await?;
        txn.commit().await?;

        Ok(SpinClaimResponse {
            reward,
            spins_remaining: (self.rewards.daily_spins - used).max(0),
            coins,
        })
    }

    // -----------------------------
    // 刮刮卡
    // -----------------------------

    pub async fn scratch_status(&self, user_id: &str) -> AppResult<ScratchStatusResponse> {
        self.scratch_status_on(user_id, Utc::now().date_naive())
            .await
    }

    pub async fn scratch_status_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<ScratchStatusResponse> {
        let used = self
            .uses_today(&self.pool, user_id, ClaimType::Scratch, today)
            .await?;
        Ok(ScratchStatusResponse {
            cards_remaining: (self.rewards.daily_scratch_cards - used).max(0),
        })
    }

    pub async fn claim_scratch(&self, user_id: &str) -> AppResult<ScratchClaimResponse> {
        self.claim_scratch_on(user_id, Utc::now().date_naive())
            .await
    }

    pub async fn claim_scratch_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<ScratchClaimResponse> {
        let txn = self.pool.begin().await?;

        let used = self
            .consume_use(
                &txn,
                user_id,
                ClaimType::Scratch,
                today,
                self.rewards.daily_scratch_cards,
                "No scratch cards remaining today",
            )
            .await?;

        let reward = pick_prize(SCRATCH_PRIZES);
        self.ledger_service
            .credit(
                &txn,
                user_id,
                reward,
                TransactionKind::Earn,
                "Scratch card reward",
            )
            .await?;
        self.bump_awarded(&txn, user_id, ClaimType::Scratch, today, reward)
            .await?;

        self.auto_ban_service.enforce(&txn, user_id).await?;
        let coins = self.current_coins(&txn, user_id).await?;
        txn.commit().await?;

        Ok(ScratchClaimResponse {
            reward,
            cards_remaining: (self.rewards.daily_scratch_cards - used).max(0),
            coins,
        })
    }

    // -----------------------------
    // 内部辅助方法
    // -----------------------------

    fn bonus_amount(&self, streak: i64) -> i64 {
        self.rewards.daily_bonus_base + (streak - 1).min(STREAK_CAP) * 10
    }

    /// 今天领取时应得的连续天数：昨天领过则 +1，否则重新从 1 开始
    async fn next_streak<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<i64> {
        let yesterday = today - chrono::Duration::days(1);
        let previous = self
            .find_claim(db, user_id, ClaimType::DailyBonus, yesterday)
            .await?;
        Ok(previous.map(|c| c.streak + 1).unwrap_or(1))
    }

    async fn find_claim<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        claim_type: ClaimType,
        date: NaiveDate,
    ) -> AppResult<Option<daily_claims::Model>> {
        Ok(daily_claims::Entity::find()
            .filter(daily_claims::Column::UserId.eq(user_id))
            .filter(daily_claims::Column::ClaimType.eq(claim_type))
            .filter(daily_claims::Column::ClaimDate.eq(date))
            .one(db)
            .await?)
    }

    async fn uses_today<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        claim_type: ClaimType,
        date: NaiveDate,
    ) -> AppResult<i64> {
        Ok(self
            .find_claim(db, user_id, claim_type, date)
            .await?
            .map(|c| c.uses)
            .unwrap_or(0))
    }

    /// 占用一次当日配额并返回已用次数。
    /// 已有记录时用条件 UPDATE (uses < limit) 自增，并发下不会超发。
    async fn consume_use(
        &self,
        txn: &DatabaseTransaction,
        user_id: &str,
        claim_type: ClaimType,
        today: NaiveDate,
        limit: i64,
        exhausted_message: &str,
    ) -> AppResult<i64> {
        match self.find_claim(txn, user_id, claim_type, today).await? {
            Some(claim) => {
                let result = daily_claims::Entity::update_many()
                    .col_expr(
                        daily_claims::Column::Uses,
                        Expr::col(daily_claims::Column::Uses).add(1),
                    )
                    .col_expr(
                        daily_claims::Column::UpdatedAt,
                        Expr::value(Utc::now()),
                    )
                    .filter(daily_claims::Column::Id.eq(&claim.id))
                    .filter(daily_claims::Column::Uses.lt(limit))
                    .exec(txn)
                    .await?;
                if result.rows_affected == 0 {
                    return Err(AppError::ValidationError(exhausted_message.to_string()));
                }
                Ok(claim.uses + 1)
            }
            None => {
                if limit < 1 {
                    return Err(AppError::ValidationError(exhausted_message.to_string()));
                }
                daily_claims::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    user_id: Set(user_id.to_string()),
                    claim_type: Set(claim_type),
                    claim_date: Set(today),
                    uses: Set(1),
                    streak: Set(0),
                    coins_awarded: Set(0),
                    created_at: Set(Utc::now()),
                    updated_at: Set(Utc::now()),
                }
                .insert(txn)
                .await?;
                Ok(1)
            }
        }
    }

    async fn bump_awarded(
        &self,
        txn: &DatabaseTransaction,
        user_id: &str,
        claim_type: ClaimType,
        today: NaiveDate,
        amount: i64,
    ) -> AppResult<()> {
        daily_claims::Entity::update_many()
            .col_expr(
                daily_claims::Column::CoinsAwarded,
                Expr::col(daily_claims::Column::CoinsAwarded).add(amount),
            )
            .filter(daily_claims::Column::UserId.eq(user_id))
            .filter(daily_claims::Column::ClaimType.eq(claim_type))
            .filter(daily_claims::Column::ClaimDate.eq(today))
            .exec(txn)
            .await?;
        Ok(())
    }

    async fn current_coins<C: ConnectionTrait>(&self, db: &C, user_id: &str) -> AppResult<i64> {
        let user = app_users::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.coins)
    }
}

/// 按万分比权重随机取奖，权重表合计 10000
fn pick_prize(table: &[(i64, u32)]) -> i64 {
    let total: u32 = table.iter().map(|(_, w)| w).sum();
    let mut roll = rand::thread_rng().gen_range(0..total);
    for (amount, weight) in table {
        if roll < *weight {
            return *amount;
        }
        roll -= weight;
    }
    table.last().map(|(a, _)| *a).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_prize_in_table() {
        for _ in 0..100 {
            let prize = pick_prize(SPIN_PRIZES);
            assert!(SPIN_PRIZES.iter().any(|(a, _)| *a == prize));
        }
    }

    #[test]
    fn test_prize_weights_sum_to_basis() {
        let spin: u32 = SPIN_PRIZES.iter().map(|(_, w)| w).sum();
        let scratch: u32 = SCRATCH_PRIZES.iter().map(|(_, w)| w).sum();
        assert_eq!(spin, 10000);
        assert_eq!(scratch, 10000);
    }
}
