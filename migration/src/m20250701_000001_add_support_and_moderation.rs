use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum SupportTickets {
    Table,
    Id,
    UserId,
    Subject,
    Status,
    Priority,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TicketMessages {
    Table,
    Id,
    TicketId,
    SenderId,
    SenderType,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    Title,
    Message,
    TargetType,
    TargetUsers,
    Segment,
    Status,
    SentAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AutoBanRules {
    Table,
    Id,
    RuleName,
    RuleType,
    Threshold,
    IsActive,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SupportTickets::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SupportTickets::UserId).string().not_null())
                    .col(ColumnDef::new(SupportTickets::Subject).string().not_null())
                    .col(ColumnDef::new(SupportTickets::Status).string().not_null())
                    .col(
                        ColumnDef::new(SupportTickets::Priority)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SupportTickets::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_support_tickets_user_id")
                    .table(SupportTickets::Table)
                    .col(SupportTickets::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TicketMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TicketMessages::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TicketMessages::TicketId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TicketMessages::SenderId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TicketMessages::SenderType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TicketMessages::Message).string().not_null())
                    .col(
                        ColumnDef::new(TicketMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_messages_ticket_id")
                    .table(TicketMessages::Table)
                    .col(TicketMessages::TicketId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).string().not_null())
                    .col(
                        ColumnDef::new(Notifications::TargetType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notifications::TargetUsers).json().null())
                    .col(ColumnDef::new(Notifications::Segment).string().null())
                    .col(ColumnDef::new(Notifications::Status).string().not_null())
                    .col(
                        ColumnDef::new(Notifications::SentAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AutoBanRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AutoBanRules::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AutoBanRules::RuleName).string().not_null())
                    .col(ColumnDef::new(AutoBanRules::RuleType).string().not_null())
                    .col(
                        ColumnDef::new(AutoBanRules::Threshold)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AutoBanRules::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AutoBanRules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutoBanRules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TicketMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupportTickets::Table).to_owned())
            .await
    }
}
