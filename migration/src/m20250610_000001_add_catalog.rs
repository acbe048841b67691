use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Title,
    Description,
    Coins,
    ActionUrl,
    Category,
    IsActive,
    Priority,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    Title,
    Description,
    Coins,
    ImageUrl,
    ActionUrl,
    Category,
    IsActive,
    Priority,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Banners {
    Table,
    Id,
    Title,
    ImageUrl,
    LinkUrl,
    IsActive,
    Priority,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    Title,
    Description,
    Icon,
    Coins,
    Requirement,
    RequirementType,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TaskCompletions {
    Table,
    Id,
    TaskId,
    UserId,
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
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tasks::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Tasks::Title).string().not_null())
                    .col(ColumnDef::new(Tasks::Description).string().not_null())
                    .col(ColumnDef::new(Tasks::Coins).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::ActionUrl).string().null())
                    .col(ColumnDef::new(Tasks::Category).string().not_null())
                    .col(
                        ColumnDef::new(Tasks::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tasks::Priority)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tasks::CreatedAt)
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
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Offers::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Offers::Title).string().not_null())
                    .col(ColumnDef::new(Offers::Description).string().not_null())
                    .col(ColumnDef::new(Offers::Coins).big_integer().not_null())
                    .col(ColumnDef::new(Offers::ImageUrl).string().null())
                    .col(ColumnDef::new(Offers::ActionUrl).string().null())
                    .col(ColumnDef::new(Offers::Category).string().not_null())
                    .col(
                        ColumnDef::new(Offers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Offers::Priority)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
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
                    .table(Banners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Banners::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Banners::Title).string().not_null())
                    .col(ColumnDef::new(Banners::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Banners::LinkUrl).string().null())
                    .col(
                        ColumnDef::new(Banners::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Banners::Priority)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Banners::CreatedAt)
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
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Achievements::Title).string().not_null())
                    .col(
                        ColumnDef::new(Achievements::Description)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Icon).string().not_null())
                    .col(ColumnDef::new(Achievements::Coins).big_integer().not_null())
                    .col(
                        ColumnDef::new(Achievements::Requirement)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::RequirementType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Achievements::CreatedAt)
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
                    .table(TaskCompletions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaskCompletions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TaskCompletions::TaskId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaskCompletions::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaskCompletions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 每任务每用户只能完成一次
        manager
            .create_index(
                Index::create()
                    .name("idx_task_completions_task_user")
                    .table(TaskCompletions::Table)
                    .col(TaskCompletions::TaskId)
                    .col(TaskCompletions::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskCompletions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Banners::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}
