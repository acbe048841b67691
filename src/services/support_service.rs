use crate::entities::{
    SenderType, TicketStatus, support_ticket_entity as tickets,
    ticket_message_entity as ticket_messages,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct SupportService {
    pool: DatabaseConnection,
}

impl SupportService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 创建工单并写入首条消息
    pub async fn create_ticket(
        &self,
        user_id: &str,
        request: CreateTicketRequest,
    ) -> AppResult<TicketResponse> {
        if request.subject.trim().is_empty() || request.message.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Subject and message are required".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let now = Utc::now();
        let ticket = tickets::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            subject: Set(request.subject.trim().to_string()),
            status: Set(TicketStatus::Open),
            priority: Set(request.priority.unwrap_or_else(|| "normal".to_string())),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        ticket_messages::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            ticket_id: Set(ticket.id.clone()),
            sender_id: Set(user_id.to_string()),
            sender_type: Set(SenderType::User),
            message: Set(request.message.trim().to_string()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(ticket.into())
    }

    /// 用户自己的工单
    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<TicketResponse>> {
        let models = tickets::Entity::find()
            .filter(tickets::Column::UserId.eq(user_id))
            .order_by_desc(tickets::Column::UpdatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// 管理端列表，可按状态过滤
    pub async fn list(
        &self,
        status: Option<TicketStatus>,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<TicketResponse>> {
        let mut base = tickets::Entity::find();
        if let Some(status) = status {
            base = base.filter(tickets::Column::Status.eq(status));
        }

        let total = base.clone().count(&self.pool).await? as i64;

        let models = base
            .order_by_desc(tickets::Column::UpdatedAt)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        let items: Vec<TicketResponse> = models.into_iter().map(Into::into).collect();
        Ok(PaginatedResponse::new(items, params, total))
    }

    /// 工单会话。requester_id 为 None 表示管理端访问，否则校验归属。
    pub async fn get_messages(
        &self,
        ticket_id: &str,
        requester_id: Option<&str>,
    ) -> AppResult<Vec<TicketMessageResponse>> {
        let ticket = self.find_ticket(ticket_id).await?;
        if let Some(requester_id) = requester_id
            && ticket.user_id != requester_id
        {
            return Err(AppError::Forbidden);
        }

        let models = ticket_messages::Entity::find()
            .filter(ticket_messages::Column::TicketId.eq(ticket_id))
            .order_by_asc(ticket_messages::Column::CreatedAt)
            .all(&self.pool)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    /// 追加消息。用户只能回自己的工单；管理员回复会把 open 工单推进到 in_progress。
    pub async fn post_message(
        &self,
        ticket_id: &str,
        sender_id: &str,
        sender_type: SenderType,
        request: PostMessageRequest,
    ) -> AppResult<TicketMessageResponse> {
        if request.message.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Message must not be empty".to_string(),
            ));
        }

        let txn = self.pool.begin().await?;

        let ticket = tickets::Entity::find_by_id(ticket_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        if sender_type == SenderType::User && ticket.user_id != sender_id {
            return Err(AppError::Forbidden);
        }
        if ticket.status == TicketStatus::Closed {
            return Err(AppError::ValidationError(
                "Ticket is closed".to_string(),
            ));
        }

        let message = ticket_messages::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            ticket_id: Set(ticket_id.to_string()),
            sender_id: Set(sender_id.to_string()),
            sender_type: Set(sender_type),
            message: Set(request.message.trim().to_string()),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        let mut model: tickets::ActiveModel = ticket.clone().into();
        if sender_type == SenderType::Admin && ticket.status == TicketStatus::Open {
            model.status = Set(TicketStatus::InProgress);
        }
        model.updated_at = Set(Utc::now());
        model.update(&txn).await?;

        txn.commit().await?;
        Ok(message.into())
    }

    pub async fn update_status(
        &self,
        ticket_id: &str,
        request: UpdateTicketStatusRequest,
    ) -> AppResult<TicketResponse> {
        let ticket = self.find_ticket(ticket_id).await?;

        let mut model: tickets::ActiveModel = ticket.into();
        model.status = Set(request.status);
        model.updated_at = Set(Utc::now());
        Ok(model.update(&self.pool).await?.into())
    }

    async fn find_ticket(&self, ticket_id: &str) -> AppResult<tickets::Model> {
        tickets::Entity::find_by_id(ticket_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))
    }
}
