use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum PromoCodes {
    Table,
    Id,
    Code,
    Coins,
    MaxUses,
    UsedCount,
    ExpiresAt,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PromoRedemptions {
    Table,
    Id,
    PromoId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DailyClaims {
    Table,
    Id,
    UserId,
    ClaimType,
    ClaimDate,
    Uses,
    Streak,
    CoinsAwarded,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Withdrawals {
    Table,
    Id,
    UserId,
    Amount,
    Method,
    AccountDetails,
    Status,
    AdminNote,
    CreatedAt,
    ProcessedAt,
}

#[derive(DeriveIden)]
enum Referrals {
    Table,
    Id,
    ReferrerId,
    ReferredId,
    CoinsEarned,
    Status,
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
                    .table(PromoCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromoCodes::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PromoCodes::Code).string().not_null())
                    .col(ColumnDef::new(PromoCodes::Coins).big_integer().not_null())
                    .col(
                        ColumnDef::new(PromoCodes::MaxUses)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PromoCodes::UsedCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PromoCodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PromoCodes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PromoCodes::CreatedAt)
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
                    .name("idx_promo_codes_code")
                    .table(PromoCodes::Table)
                    .col(PromoCodes::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PromoRedemptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromoRedemptions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PromoRedemptions::PromoId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromoRedemptions::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PromoRedemptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 每码每用户一次
        manager
            .create_index(
                Index::create()
                    .name("idx_promo_redemptions_promo_user")
                    .table(PromoRedemptions::Table)
                    .col(PromoRedemptions::PromoId)
                    .col(PromoRedemptions::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DailyClaims::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyClaims::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DailyClaims::UserId).string().not_null())
                    .col(ColumnDef::new(DailyClaims::ClaimType).string().not_null())
                    .col(ColumnDef::new(DailyClaims::ClaimDate).date().not_null())
                    .col(
                        ColumnDef::new(DailyClaims::Uses)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DailyClaims::Streak)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DailyClaims::CoinsAwarded)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DailyClaims::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DailyClaims::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 每 (用户, 类型, 日期) 一行，并发重复领取由该索引兜底
        manager
            .create_index(
                Index::create()
                    .name("idx_daily_claims_user_type_date")
                    .table(DailyClaims::Table)
                    .col(DailyClaims::UserId)
                    .col(DailyClaims::ClaimType)
                    .col(DailyClaims::ClaimDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Withdrawals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Withdrawals::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Withdrawals::UserId).string().not_null())
                    .col(
                        ColumnDef::new(Withdrawals::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Withdrawals::Method).string().not_null())
                    .col(
                        ColumnDef::new(Withdrawals::AccountDetails)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Withdrawals::Status).string().not_null())
                    .col(ColumnDef::new(Withdrawals::AdminNote).string().null())
                    .col(
                        ColumnDef::new(Withdrawals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Withdrawals::ProcessedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_withdrawals_user_id")
                    .table(Withdrawals::Table)
                    .col(Withdrawals::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_withdrawals_status")
                    .table(Withdrawals::Table)
                    .col(Withdrawals::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Referrals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Referrals::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Referrals::ReferrerId).string().not_null())
                    .col(ColumnDef::new(Referrals::ReferredId).string().not_null())
                    .col(
                        ColumnDef::new(Referrals::CoinsEarned)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Referrals::Status).string().not_null())
                    .col(
                        ColumnDef::new(Referrals::CreatedAt)
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
                    .name("idx_referrals_referrer_id")
                    .table(Referrals::Table)
                    .col(Referrals::ReferrerId)
                    .to_owned(),
            )
            .await?;

        // 一个用户只能被推荐一次
        manager
            .create_index(
                Index::create()
                    .name("idx_referrals_referred_id")
                    .table(Referrals::Table)
                    .col(Referrals::ReferredId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Referrals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Withdrawals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DailyClaims::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PromoRedemptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PromoCodes::Table).to_owned())
            .await
    }
}
