use crate::entities::banner_entity as banners;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct BannerService {
    pool: DatabaseConnection,
}

impl BannerService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<BannerResponse>> {
        let models = banners::Entity::find()
            .order_by_desc(banners::Column::Priority)
            .order_by_desc(banners::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn list_active(&self) -> AppResult<Vec<BannerResponse>> {
        let models = banners::Entity::find()
            .filter(banners::Column::IsActive.eq(true))
            .order_by_desc(banners::Column::Priority)
            .order_by_desc(banners::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateBannerRequest) -> AppResult<BannerResponse> {
        if request.image_url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Banner image URL is required".to_string(),
            ));
        }

        let model = banners::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(request.title),
            image_url: Set(request.image_url),
            link_url: Set(request.link_url),
            is_active: Set(request.is_active.unwrap_or(true)),
            priority: Set(request.priority.unwrap_or(0)),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn update(
        &self,
        banner_id: &str,
        request: UpdateBannerRequest,
    ) -> AppResult<BannerResponse> {
        let banner = banners::Entity::find_by_id(banner_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Banner not found".to_string()))?;

        let mut model: banners::ActiveModel = banner.into();
        if let Some(title) = request.title {
            model.title = Set(title);
        }
        if let Some(image_url) = request.image_url {
            model.image_url = Set(image_url);
        }
        if let Some(link_url) = request.link_url {
            model.link_url = Set(Some(link_url));
        }
        if let Some(priority) = request.priority {
            model.priority = Set(priority);
        }
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn toggle(
        &self,
        banner_id: &str,
        request: ToggleActiveRequest,
    ) -> AppResult<BannerResponse> {
        let banner = banners::Entity::find_by_id(banner_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Banner not found".to_string()))?;

        let mut model: banners::ActiveModel = banner.into();
        model.is_active = Set(request.is_active);
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn delete(&self, banner_id: &str) -> AppResult<()> {
        let result = banners::Entity::delete_by_id(banner_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Banner not found".to_string()));
        }
        Ok(())
    }
}
