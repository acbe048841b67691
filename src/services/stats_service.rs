use crate::entities::{
    TicketStatus, TransactionStatus, WithdrawalStatus, app_user_entity as app_users,
    support_ticket_entity as tickets, transaction_entity as transactions,
    withdrawal_entity as withdrawals,
};
use crate::error::AppResult;
use crate::models::*;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

#[derive(Clone)]
pub struct StatsService {
    pool: DatabaseConnection,
}

#[derive(Debug, sea_orm::FromQueryResult)]
struct SumRow {
    total: Option<i64>,
}

impl StatsService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let today_start = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .unwrap_or_else(Utc::now);

        let total_users = app_users::Entity::find().count(&self.pool).await? as i64;
        let banned_users = app_users::Entity::find()
            .filter(app_users::Column::IsBanned.eq(true))
            .count(&self.pool)
            .await? as i64;

        let total_transactions = transactions::Entity::find().count(&self.pool).await? as i64;

        let total_coins = app_users::Entity::find()
            .select_only()
            .column_as(Expr::col(app_users::Column::Coins).sum(), "total")
            .into_model::<SumRow>()
            .one(&self.pool)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0);

        let pending_withdrawals = withdrawals::Entity::find()
            .filter(withdrawals::Column::Status.eq(WithdrawalStatus::Pending))
            .count(&self.pool)
            .await? as i64;

        let today_signups = app_users::Entity::find()
            .filter(app_users::Column::CreatedAt.gte(today_start))
            .count(&self.pool)
            .await? as i64;

        let today_coins = transactions::Entity::find()
            .filter(transactions::Column::Status.eq(TransactionStatus::Completed))
            .filter(transactions::Column::CreatedAt.gte(today_start))
            .select_only()
            .column_as(Expr::col(transactions::Column::Amount).sum(), "total")
            .into_model::<SumRow>()
            .one(&self.pool)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0);

        let open_tickets = tickets::Entity::find()
            .filter(
                Condition::any()
                    .add(tickets::Column::Status.eq(TicketStatus::Open))
                    .add(tickets::Column::Status.eq(TicketStatus::InProgress)),
            )
            .count(&self.pool)
            .await? as i64;

        Ok(DashboardStats {
            total_users,
            active_users: total_users - banned_users,
            banned_users,
            total_transactions,
            total_coins,
            pending_withdrawals,
            today_signups,
            today_coins,
            open_tickets,
        })
    }
}
