use crate::entities::achievement_entity as achievements;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct AchievementService {
    pool: DatabaseConnection,
}

impl AchievementService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<AchievementResponse>> {
        let models = achievements::Entity::find()
            .order_by_asc(achievements::Column::Requirement)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn list_active(&self) -> AppResult<Vec<AchievementResponse>> {
        let models = achievements::Entity::find()
            .filter(achievements::Column::IsActive.eq(true))
            .order_by_asc(achievements::Column::Requirement)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateAchievementRequest) -> AppResult<AchievementResponse> {
        if request.coins <= 0 || request.requirement <= 0 {
            return Err(AppError::ValidationError(
                "Achievement reward and requirement must be positive".to_string(),
            ));
        }

        let model = achievements::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(request.title),
            description: Set(request.description),
            icon: Set(request.icon),
            coins: Set(request.coins),
            requirement: Set(request.requirement),
            requirement_type: Set(request.requirement_type),
            is_active: Set(request.is_active.unwrap_or(true)),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn update(
        &self,
        achievement_id: &str,
        request: UpdateAchievementRequest,
    ) -> AppResult<AchievementResponse> {
        let achievement = achievements::Entity::find_by_id(achievement_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Achievement not found".to_string()))?;

        let mut model: achievements::ActiveModel = achievement.into();
        if let Some(title) = request.title {
            model.title = Set(title);
        }
        if let Some(description) = request.description {
            model.description = Set(description);
        }
        if let Some(icon) = request.icon {
            model.icon = Set(icon);
        }
        if let Some(coins) = request.coins {
            if coins <= 0 {
                return Err(AppError::ValidationError(
                    "Achievement reward must be positive".to_string(),
                ));
            }
            model.coins = Set(coins);
        }
        if let Some(requirement) = request.requirement {
            if requirement <= 0 {
                return Err(AppError::ValidationError(
                    "Achievement requirement must be positive".to_string(),
                ));
            }
            model.requirement = Set(requirement);
        }
        if let Some(requirement_type) = request.requirement_type {
            model.requirement_type = Set(requirement_type);
        }
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn toggle(
        &self,
        achievement_id: &str,
        request: ToggleActiveRequest,
    ) -> AppResult<AchievementResponse> {
        let achievement = achievements::Entity::find_by_id(achievement_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Achievement not found".to_string()))?;

        let mut model: achievements::ActiveModel = achievement.into();
        model.is_active = Set(request.is_active);
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn delete(&self, achievement_id: &str) -> AppResult<()> {
        let result = achievements::Entity::delete_by_id(achievement_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Achievement not found".to_string()));
        }
        Ok(())
    }
}
