use crate::entities::offer_entity as offers;
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct OfferService {
    pool: DatabaseConnection,
}

impl OfferService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> AppResult<Vec<OfferResponse>> {
        let models = offers::Entity::find()
            .order_by_desc(offers::Column::Priority)
            .order_by_desc(offers::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn list_active(&self) -> AppResult<Vec<OfferResponse>> {
        let models = offers::Entity::find()
            .filter(offers::Column::IsActive.eq(true))
            .order_by_desc(offers::Column::Priority)
            .order_by_desc(offers::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateOfferRequest) -> AppResult<OfferResponse> {
        if request.coins <= 0 {
            return Err(AppError::ValidationError(
                "Offer reward must be positive".to_string(),
            ));
        }

        let model = offers::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(request.title),
            description: Set(request.description),
            coins: Set(request.coins),
            image_url: Set(request.image_url),
            action_url: Set(request.action_url),
            category: Set(request.category),
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
        offer_id: &str,
        request: UpdateOfferRequest,
    ) -> AppResult<OfferResponse> {
        let offer = offers::Entity::find_by_id(offer_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        if let Some(coins) = request.coins
            && coins <= 0
        {
            return Err(AppError::ValidationError(
                "Offer reward must be positive".to_string(),
            ));
        }

        let mut model: offers::ActiveModel = offer.into();
        if let Some(title) = request.title {
            model.title = Set(title);
        }
        if let Some(description) = request.description {
            model.description = Set(description);
        }
        if let Some(coins) = request.coins {
            model.coins = Set(coins);
        }
        if let Some(image_url) = request.image_url {
            model.image_url = Set(Some(image_url));
        }
        if let Some(action_url) = request.action_url {
            model.action_url = Set(Some(action_url));
        }
        if let Some(category) = request.category {
            model.category = Set(category);
        }
        if let Some(priority) = request.priority {
            model.priority = Set(priority);
        }
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn toggle(
        &self,
        offer_id: &str,
        request: ToggleActiveRequest,
    ) -> AppResult<OfferResponse> {
        let offer = offers::Entity::find_by_id(offer_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

        let mut model: offers::ActiveModel = offer.into();
        model.is_active = Set(request.is_active);
        Ok(model.update(&self.pool).await?.into())
    }

    pub async fn delete(&self, offer_id: &str) -> AppResult<()> {
        let result = offers::Entity::delete_by_id(offer_id)
            .exec(&self.pool)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Offer not found".to_string()));
        }
        Ok(())
    }
}
