use crate::entities::{
    NotificationStatus, NotificationTarget, app_user_entity as app_users,
    notification_entity as notifications,
};
use crate::error::{AppError, AppResult};
use crate::external::FcmService;
use crate::models::*;
use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

/// segment = "active"：最近 N 天注册或领取过奖励的用户。
/// 目前只按注册时间近似，领取活跃度并入会拖慢全表扫描。
const ACTIVE_SEGMENT_DAYS: i64 = 30;

#[derive(Clone)]
pub struct NotificationService {
    pool: DatabaseConnection,
    fcm_service: FcmService,
}

impl NotificationService {
    pub fn new(pool: DatabaseConnection, fcm_service: FcmService) -> Self {
        Self { pool, fcm_service }
    }

    pub async fn list(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<NotificationResponse>> {
        let base = notifications::Entity::find();
        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(notifications::Column::CreatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<NotificationResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    /// 创建并立即发送。推送失败不回滚通知记录，状态仍标记为 sent，
    /// 失败详情走日志。
    pub async fn send(&self, request: SendNotificationRequest) -> AppResult<NotificationResponse> {
        if request.title.trim().is_empty() || request.message.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title and message are required".to_string(),
            ));
        }

        let target_users = match request.target_type {
            NotificationTarget::Specific => {
                let users = request.target_users.clone().unwrap_or_default();
                if users.is_empty() {
                    return Err(AppError::ValidationError(
                        "target_users is required for specific notifications".to_string(),
                    ));
                }
                Some(users)
            }
            NotificationTarget::Segment => {
                match request.segment.as_deref() {
                    Some("active") => None,
                    _ => {
                        return Err(AppError::ValidationError(
                            "Unknown segment".to_string(),
                        ));
                    }
                }
            }
            NotificationTarget::All => None,
        };

        let tokens = self
            .resolve_device_tokens(request.target_type, target_users.as_deref())
            .await?;

        let model = notifications::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(request.title.trim().to_string()),
            message: Set(request.message.trim().to_string()),
            target_type: Set(request.target_type),
            target_users: Set(target_users
                .as_ref()
                .map(|u| serde_json::json!(u))),
            segment: Set(request.segment),
            status: Set(NotificationStatus::Sent),
            sent_at: Set(Some(Utc::now())),
            created_at: Set(Utc::now()),
        }
        .insert(&self.pool)
        .await?;

        if let Err(e) = self
            .fcm_service
            .send_push(&tokens, &model.title, &model.message)
            .await
        {
            log::error!("Notification {} push delivery failed: {e}", model.id);
        }

        Ok(model.into())
    }

    async fn resolve_device_tokens(
        &self,
        target_type: NotificationTarget,
        target_users: Option<&[String]>,
    ) -> AppResult<Vec<String>> {
        let mut query = app_users::Entity::find()
            .filter(app_users::Column::IsBanned.eq(false))
            .filter(app_users::Column::DeviceToken.is_not_null());

        match target_type {
            NotificationTarget::All => {}
            NotificationTarget::Segment => {
                let cutoff = Utc::now() - Duration::days(ACTIVE_SEGMENT_DAYS);
                query = query.filter(app_users::Column::CreatedAt.gte(cutoff));
            }
            NotificationTarget::Specific => {
                let ids = target_users.unwrap_or_default();
                query = query.filter(app_users::Column::Id.is_in(ids.iter().cloned()));
            }
        }

        let tokens: Vec<Option<String>> = query
            .select_only()
            .column(app_users::Column::DeviceToken)
            .into_tuple()
            .all(&self.pool)
            .await?;

        Ok(tokens.into_iter().flatten().collect())
    }
}
