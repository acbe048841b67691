use crate::entities::{
    TransactionKind, app_user_entity as app_users, promo_code_entity as promo_codes,
    promo_redemption_entity as promo_redemptions,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::{AutoBanService, LedgerService};
use crate::utils::generate_promo_code;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct PromoCodeService {
    pool: DatabaseConnection,
    ledger_service: LedgerService,
    auto_ban_service: AutoBanService,
}

impl PromoCodeService {
    pub fn new(
        pool: DatabaseConnection,
        ledger_service: LedgerService,
        auto_ban_service: AutoBanService,
    ) -> Self {
        Self {
            pool,
            ledger_service,
            auto_ban_service,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<PromoCodeResponse>> {
        let models = promo_codes::Entity::find().all(&self.pool).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreatePromoCodeRequest) -> AppResult<PromoCodeResponse> {
        if request.coins <= 0 {
            return Err(AppError::ValidationError(
                "Promo code reward must be positive".to_string(),
            ));
        }
        let max_uses = request.max_uses.unwrap_or(0);
        if max_uses < 0 {
            return Err(AppError::ValidationError(
                "max_uses must not be negative".to_string(),
            ));
        }

        let code = match request.code {
            Some(code) => {
                let code = code.trim().to_uppercase();
                if code.is_empty() {
                    return Err(AppError::ValidationError(
                        "Promo code must not be empty".to_string(),
                    ));
                }
                let exists = promo_codes::Entity::find()
                    .filter(promo_codes::Column::Code.eq(&code))
                    .count(&self.pool)
                    .await?;
                if exists > 0 {
                    return Err(AppError::ValidationError(
                        "Promo code already exists".to_string(),
                    ));
                }
                code
            }
            None => generate_promo_code(&self.pool).await?,
        };

        let model = promo_codes::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            code: Set(code),
            coins: Set(request.coins),
            max_uses: Set(max_uses),
            used_count: Set(0),
            expires_at: Set(request.expires_at),
            is_active: Set(request.is_active.unwrap_or(true)),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        log::info!("Promo code {} created ({} coins)", model.code, model.coins);
        Ok(model.into())
    }

    pub async fn toggle(
        &self,
        promo_id: &str,
        request: ToggleActiveRequest,
    ) -> AppResult<PromoCodeResponse> {
        let promo = promo_codes::Entity::find_by_id(promo_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Promo code not found".to_string()))?;

        let mut model: promo_codes::ActiveModel = promo.into();
        model.is_active = Set(request.is_active);
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn delete(&self, promo_id: &str) -> AppResult<()> {
        let result = promo_codes::Entity::delete_by_id(promo_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Promo code not found".to_string()));
        }
        Ok(())
    }

    /// 兑换。单个事务内完成四步：
    /// 1. 查码并校验状态/有效期
    /// 2. 检查该用户未兑换过（唯一索引兜底并发）
    /// 3. 条件 UPDATE 占用一个使用名额（used_count < max_uses）
    /// 4. 入账并写兑换记录
    pub async fn redeem(
        &self,
        user_id: &str,
        request: RedeemPromoCodeRequest,
    ) -> AppResult<RedeemPromoCodeResponse> {
        let code = request.code.trim().to_uppercase();
        let txn = self.pool.begin().await?;

        let promo = promo_codes::Entity::find()
            .filter(promo_codes::Column::Code.eq(&code))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Promo code not found".to_string()))?;

        if !promo.is_redeemable(Utc::now()) {
            return Err(AppError::ValidationError(
                "Promo code is no longer valid".to_string(),
            ));
        }

        let already = promo_redemptions::Entity::find()
            .filter(promo_redemptions::Column::PromoId.eq(&promo.id))
            .filter(promo_redemptions::Column::UserId.eq(user_id))
            .count(&txn)
            .await?;
        if already > 0 {
            return Err(AppError::ValidationError(
                "Promo code already redeemed".to_string(),
            ));
        }

        // max_uses = 0 不限次数，否则占用名额失败即视为已被抢光
        let result = promo_codes::Entity::update_many()
            .col_expr(
                promo_codes::Column::UsedCount,
                Expr::col(promo_codes::Column::UsedCount).add(1),
            )
            .filter(promo_codes::Column::Id.eq(&promo.id))
            .filter(
                Condition::any()
                    .add(promo_codes::Column::MaxUses.eq(0))
                    .add(
                        Expr::col(promo_codes::Column::UsedCount)
                            .lt(Expr::col(promo_codes::Column::MaxUses)),
                    ),
            )
            .exec(&txn)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::ValidationError(
                "Promo code usage limit reached".to_string(),
            ));
        }

        promo_redemptions::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            promo_id: Set(promo.id.clone()),
            user_id: Set(user_id.to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        self.ledger_service
            .credit(
                &txn,
                user_id,
                promo.coins,
                TransactionKind::Bonus,
                &format!("Promo code {code}"),
            )
            .await?;

        self.auto_ban_service.enforce(&txn, user_id).await?;

        let user = app_users::Entity::find_by_id(user_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        txn.commit().await?;

        log::info!("User {user_id} redeemed promo code {code}");
        Ok(RedeemPromoCodeResponse {
            reward: promo.coins,
            coins: user.coins,
        })
    }
}
