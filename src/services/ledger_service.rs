use crate::entities::{
    TransactionKind, TransactionStatus, app_user_entity as app_users,
    transaction_entity as transactions,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

/// 账本服务：余额的唯一变更入口。
///
/// 任何余额变动都必须经过 credit / debit / refund 之一：
/// 先对 app_users.coins 做条件原子更新，再追加一条 transactions 记录，
/// 两者始终在调用方的数据库事务中完成。
#[derive(Clone)]
pub struct LedgerService {
    pool: DatabaseConnection,
}

impl LedgerService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 收入入账（earn / bonus / referral），同时累加 total_earned。
    /// 被封禁用户不允许入账。
    pub async fn credit<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        amount: i64,
        kind: TransactionKind,
        description: &str,
    ) -> AppResult<transactions::Model> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "Credit amount must be positive".to_string(),
            ));
        }
        if !matches!(
            kind,
            TransactionKind::Earn | TransactionKind::Bonus | TransactionKind::Referral
        ) {
            return Err(AppError::InternalError(format!(
                "Invalid credit kind: {kind}"
            )));
        }

        let result = app_users::Entity::update_many()
            .col_expr(
                app_users::Column::Coins,
                Expr::col(app_users::Column::Coins).add(amount),
            )
            .col_expr(
                app_users::Column::TotalEarned,
                Expr::col(app_users::Column::TotalEarned).add(amount),
            )
            .filter(app_users::Column::Id.eq(user_id))
            .filter(app_users::Column::IsBanned.eq(false))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(self.classify_update_failure(db, user_id).await?);
        }

        self.record(db, user_id, amount, kind, description).await
    }

    /// 支出出账（spend / withdrawal），余额不足时拒绝。
    /// 扣减条件写在 UPDATE 的 WHERE 里，并发下不会出现负余额。
    pub async fn debit<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        amount: i64,
        kind: TransactionKind,
        description: &str,
    ) -> AppResult<transactions::Model> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "Debit amount must be positive".to_string(),
            ));
        }
        if !matches!(kind, TransactionKind::Spend | TransactionKind::Withdrawal) {
            return Err(AppError::InternalError(format!(
                "Invalid debit kind: {kind}"
            )));
        }

        let result = app_users::Entity::update_many()
            .col_expr(
                app_users::Column::Coins,
                Expr::col(app_users::Column::Coins).sub(amount),
            )
            .filter(app_users::Column::Id.eq(user_id))
            .filter(app_users::Column::Coins.gte(amount))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            let exists = app_users::Entity::find_by_id(user_id).one(db).await?;
            return match exists {
                None => Err(AppError::NotFound("User not found".to_string())),
                Some(_) => Err(AppError::ValidationError(
                    "Insufficient balance".to_string(),
                )),
            };
        }

        self.record(db, user_id, -amount, kind, description).await
    }

    /// 退款（提现被拒时返还余额）。不计入 total_earned，也不受封禁限制：
    /// 用户被封后其未完成提现仍要能退回。
    pub async fn refund<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        amount: i64,
        description: &str,
    ) -> AppResult<transactions::Model> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "Refund amount must be positive".to_string(),
            ));
        }

        let result = app_users::Entity::update_many()
            .col_expr(
                app_users::Column::Coins,
                Expr::col(app_users::Column::Coins).add(amount),
            )
            .filter(app_users::Column::Id.eq(user_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        self.record(db, user_id, amount, TransactionKind::Withdrawal, description)
            .await
    }

    /// 管理员手工调整：正数按 bonus 入账，负数按 spend 出账
    pub async fn adjust_coins(&self, request: AdjustCoinsRequest) -> AppResult<TransactionResponse> {
        if request.amount == 0 {
            return Err(AppError::ValidationError(
                "Adjustment amount must not be zero".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let model = if request.amount > 0 {
            self.credit(
                &txn,
                &request.user_id,
                request.amount,
                TransactionKind::Bonus,
                &request.description,
            )
            .await?
        } else {
            self.debit(
                &txn,
                &request.user_id,
                -request.amount,
                TransactionKind::Spend,
                &request.description,
            )
            .await?
        };

        txn.commit().await?;
        Ok(model.into())
    }

    /// 批量发放：对所有未封禁用户各入账一次。
    /// 整个操作在单个数据库事务内，要么全部成功要么全部回滚。
    pub async fn bulk_credit(&self, request: BulkCreditRequest) -> AppResult<BulkCreditResponse> {
        if request.amount <= 0 {
            return Err(AppError::ValidationError(
                "Bulk credit amount must be positive".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let users: Vec<String> = app_users::Entity::find()
            .filter(app_users::Column::IsBanned.eq(false))
            .select_only()
            .column(app_users::Column::Id)
            .into_tuple()
            .all(&txn)
            .await?;

        let mut count = 0u64;
        for user_id in &users {
            self.credit(
                &txn,
                user_id,
                request.amount,
                TransactionKind::Bonus,
                &request.description,
            )
            .await?;
            count += 1;
        }

        txn.commit().await?;

        log::info!("Bulk credited {} coins to {} users", request.amount, count);
        Ok(BulkCreditResponse { count })
    }

    /// 交易列表（管理端，可按用户过滤）
    pub async fn list_transactions(
        &self,
        query: &TransactionListQuery,
    ) -> AppResult<PaginatedResponse<TransactionResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let mut base = transactions::Entity::find();
        if let Some(user_id) = &query.user_id {
            base = base.filter(transactions::Column::UserId.eq(user_id));
        }

        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(transactions::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<TransactionResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    /// 用户自己的账单
    pub async fn user_history(
        &self,
        user_id: &str,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<TransactionResponse>> {
        let base = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id));

        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(transactions::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<TransactionResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    /// 已完成交易的带符号合计；账本不变式要求它恒等于 app_users.coins
    pub async fn completed_sum<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
    ) -> AppResult<i64> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct SumRow {
            total: Option<i64>,
        }
        let sum = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .filter(transactions::Column::Status.eq(TransactionStatus::Completed))
            .select_only()
            .column_as(Expr::col(transactions::Column::Amount).sum(), "total")
            .into_model::<SumRow>()
            .one(db)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0);
        Ok(sum)
    }

    // -----------------------------
    // 内部辅助方法
    // -----------------------------

    async fn record<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
        amount: i64,
        kind: TransactionKind,
        description: &str,
    ) -> AppResult<transactions::Model> {
        let model = transactions::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            kind: Set(kind),
            amount: Set(amount),
            description: Set(description.to_string()),
            status: Set(TransactionStatus::Completed),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;
        Ok(model)
    }

    async fn classify_update_failure<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: &str,
    ) -> AppResult<AppError> {
        let user = app_users::Entity::find_by_id(user_id).one(db).await?;
        Ok(match user {
            None => AppError::NotFound("User not found".to_string()),
            Some(_) => AppError::ValidationError("User is banned".to_string()),
        })
    }
}
