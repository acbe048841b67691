use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{
    SenderType, TicketStatus, support_ticket_entity as tickets,
    ticket_message_entity as messages,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponse {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub status: TicketStatus,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<tickets::Model> for TicketResponse {
    fn from(m: tickets::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            subject: m.subject,
            status: m.status,
            priority: m.priority,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketMessageResponse {
    pub id: String,
    pub ticket_id: String,
    pub sender_id: String,
    pub sender_type: SenderType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<messages::Model> for TicketMessageResponse {
    fn from(m: messages::Model) -> Self {
        Self {
            id: m.id,
            ticket_id: m.ticket_id,
            sender_id: m.sender_id,
            sender_type: m.sender_type,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    pub subject: String,
    pub message: String,
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostMessageRequest {
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTicketStatusRequest {
    pub status: TicketStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TicketListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<TicketStatus>,
}
