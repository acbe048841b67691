use crate::entities::app_user_entity as app_users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<UserResponse> {
        let user = app_users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }

    pub async fn get_balance(&self, user_id: &str) -> AppResult<BalanceResponse> {
        let user = app_users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let level = user.coins / 1000 + 1;
        Ok(BalanceResponse {
            coins: user.coins,
            total_earned: user.total_earned,
            level,
            next_level_coins: level * 1000,
        })
    }

    /// 用户列表（管理端，支持用户名/邮箱模糊搜索）
    pub async fn list_users(
        &self,
        query: &UserListQuery,
    ) -> AppResult<PaginatedResponse<UserResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);

        let mut base = app_users::Entity::find();
        if let Some(search) = &query.search
            && !search.is_empty()
        {
            let pattern = format!("%{search}%");
            base = base.filter(
                Condition::any()
                    .add(app_users::Column::Username.like(&pattern))
                    .add(app_users::Column::Email.like(&pattern)),
            );
        }

        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(app_users::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<UserResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, &params, total))
    }

    /// 封禁/解封。对已封禁用户重复封禁是幂等操作：
    /// 只有显式携带新理由时才覆盖 ban_reason。
    pub async fn set_ban(&self, user_id: &str, request: BanUserRequest) -> AppResult<UserResponse> {
        let user = app_users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if request.ban {
            if user.is_banned && request.reason.is_none() {
                return Ok(user.into());
            }
            let reason = request
                .reason
                .clone()
                .or(user.ban_reason.clone())
                .unwrap_or_else(|| "Banned by admin".to_string());
            let mut model = user.into_active_model();
            model.is_banned = Set(true);
            model.ban_reason = Set(Some(reason));
            let updated = model.update(&self.pool).await?;
            log::info!("User {user_id} banned");
            Ok(updated.into())
        } else {
            if !user.is_banned {
                return Ok(user.into());
            }
            let mut model = user.into_active_model();
            model.is_banned = Set(false);
            model.ban_reason = Set(None);
            let updated = model.update(&self.pool).await?;
            log::info!("User {user_id} unbanned");
            Ok(updated.into())
        }
    }

    /// 排行榜：按累计收入取前 N 名。同分同名次（密集排名）。
    pub async fn leaderboard(&self, limit: u64) -> AppResult<Vec<LeaderboardEntry>> {
        let models = app_users::Entity::find()
            .filter(app_users::Column::IsBanned.eq(false))
            .order_by_desc(app_users::Column::TotalEarned)
            .limit(limit)
            .all(&self.pool)
            .await?;

        let mut entries = Vec::with_capacity(models.len());
        let mut rank = 0u32;
        let mut last_score = None;
        for u in models {
            if last_score != Some(u.total_earned) {
                rank += 1;
                last_score = Some(u.total_earned);
            }
            entries.push(LeaderboardEntry {
                rank,
                user_id: u.id,
                username: u.username,
                total_earned: u.total_earned,
            });
        }
        Ok(entries)
    }

    pub async fn update_device_token(
        &self,
        user_id: &str,
        device_token: Option<String>,
    ) -> AppResult<()> {
        let user = app_users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let mut model = user.into_active_model();
        model.device_token = Set(device_token);
        model.update(&self.pool).await?;
        Ok(())
    }
}
