use crate::config::RewardsConfig;
use crate::entities::{TransactionKind, WithdrawalStatus, withdrawal_entity as withdrawals};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::LedgerService;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

/// 提现：申请时立即全额扣款，审批只改状态，拒绝时原路退回。
/// 这样 pending 金额不会被重复花掉，也无需余额冻结字段。
#[derive(Clone)]
pub struct WithdrawalService {
    pool: DatabaseConnection,
    ledger_service: LedgerService,
    rewards: RewardsConfig,
}

impl WithdrawalService {
    pub fn new(
        pool: DatabaseConnection,
        ledger_service: LedgerService,
        rewards: RewardsConfig,
    ) -> Self {
        Self {
            pool,
            ledger_service,
            rewards,
        }
    }

    pub async fn request(
        &self,
        user_id: &str,
        request: CreateWithdrawalRequest,
    ) -> AppResult<WithdrawalResponse> {
        if request.amount < self.rewards.min_withdrawal {
            return Err(AppError::ValidationError(format!(
                "Minimum withdrawal is {} coins",
                self.rewards.min_withdrawal
            )));
        }
        if request.method.trim().is_empty() || request.account_details.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Payment method and account details are required".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let withdrawal_id = Uuid::new_v4().to_string();
        self.ledger_service
            .debit(
                &txn,
                user_id,
                request.amount,
                TransactionKind::Withdrawal,
                &format!("Withdrawal request {withdrawal_id}"),
            )
            .await?;

        let model = withdrawals::ActiveModel {
            id: Set(withdrawal_id),
            user_id: Set(user_id.to_string()),
            amount: Set(request.amount),
            method: Set(request.method.trim().to_string()),
            account_details: Set(request.account_details.trim().to_string()),
            status: Set(WithdrawalStatus::Pending),
            admin_note: Set(None),
            created_at: Set(Utc::now()),
            processed_at: Set(None),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        log::info!(
            "Withdrawal {} requested by {user_id} for {} coins",
            model.id,
            model.amount
        );
        Ok(model.into())
    }

    /// 审批。只允许 pending -> approved/rejected，拒绝时退款。
    pub async fn process(
        &self,
        withdrawal_id: &str,
        request: ProcessWithdrawalRequest,
    ) -> AppResult<WithdrawalResponse> {
        if request.status == WithdrawalStatus::Pending {
            return Err(AppError::ValidationError(
                "Withdrawal can only be approved or rejected".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let withdrawal = withdrawals::Entity::find_by_id(withdrawal_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Withdrawal not found".to_string()))?;

        if withdrawal.status != WithdrawalStatus::Pending {
            return Err(AppError::ValidationError(format!(
                "Withdrawal already {}",
                withdrawal.status
            )));
        }

        if request.status == WithdrawalStatus::Rejected {
            self.ledger_service
                .refund(
                    &txn,
                    &withdrawal.user_id,
                    withdrawal.amount,
                    &format!("Withdrawal {withdrawal_id} rejected"),
                )
                .await?;
        }

        let mut model: withdrawals::ActiveModel = withdrawal.into();
        model.status = Set(request.status);
        model.admin_note = Set(request.admin_note);
        model.processed_at = Set(Some(Utc::now()));
        let updated = model.update(&txn).await?;

        txn.commit().await?;

        log::info!("Withdrawal {withdrawal_id} {}", updated.status);
        Ok(updated.into())
    }

    /// 管理端列表，可按状态过滤
    pub async fn list(
        &self,
        status: Option<WithdrawalStatus>,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<WithdrawalResponse>> {
        let mut base = withdrawals::Entity::find();
        if let Some(status) = status {
            base = base.filter(withdrawals::Column::Status.eq(status));
        }

        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(withdrawals::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<WithdrawalResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    /// 用户自己的提现记录
    pub async fn list_for_user(
        &self,
        user_id: &str,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<WithdrawalResponse>> {
        let base = withdrawals::Entity::find()
            .filter(withdrawals::Column::UserId.eq(user_id));

        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(withdrawals::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<WithdrawalResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, params, total))
    }
}
