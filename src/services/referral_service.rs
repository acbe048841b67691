use crate::entities::{app_user_entity as app_users, referral_entity as referrals};
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

const SHARE_URL_BASE: &str = "https://earnzy.app/invite";

#[derive(Clone)]
pub struct ReferralService {
    pool: DatabaseConnection,
}

impl ReferralService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_code(&self, user_id: &str) -> AppResult<ReferralCodeResponse> {
        let user = app_users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(ReferralCodeResponse {
            share_url: format!("{SHARE_URL_BASE}/{}", user.referral_code),
            code: user.referral_code,
        })
    }

    pub async fn get_stats(&self, user_id: &str) -> AppResult<ReferralStatsResponse> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct SumRow {
            total: Option<i64>,
        }

        let base = referrals::Entity::find()
            .filter(referrals::Column::ReferrerId.eq(user_id));

        let total_referrals = base.clone().count(&self.pool).await? as i64;

        let earned_coins = base
            .clone()
            .select_only()
            .column_as(Expr::col(referrals::Column::CoinsEarned).sum(), "total")
            .into_model::<SumRow>()
            .one(&self.pool)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0);

        let recent = base
            .order_by_desc(referrals::Column::CreatedAt)
            .limit(10)
            .all(&self.pool)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ReferralStatsResponse {
            total_referrals,
            earned_coins,
            recent,
        })
    }

    /// 管理端全量列表
    pub async fn list(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ReferralResponse>> {
        let base = referrals::Entity::find();
        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(referrals::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<ReferralResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, params, total))
    }
}
