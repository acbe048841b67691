use chrono::Utc;
use earnzy_backend::config::RewardsConfig;
use earnzy_backend::entities::app_user_entity as app_users;
use earnzy_backend::services::*;
use earnzy_backend::utils::JwtService;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use uuid::Uuid;

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None).await.expect("Failed to migrate");
    db
}

pub fn rewards() -> RewardsConfig {
    RewardsConfig::default()
}

pub fn jwt_service() -> JwtService {
    JwtService::new("test-secret", 3600, 86400)
}

pub fn ledger(db: &DatabaseConnection) -> LedgerService {
    LedgerService::new(db.clone())
}

pub fn auto_ban(db: &DatabaseConnection) -> AutoBanService {
    AutoBanService::new(db.clone())
}

pub fn auth(db: &DatabaseConnection) -> AuthService {
    AuthService::new(db.clone(), jwt_service(), ledger(db), rewards())
}

pub fn claims(db: &DatabaseConnection) -> ClaimService {
    ClaimService::new(db.clone(), ledger(db), auto_ban(db), rewards())
}

pub fn promos(db: &DatabaseConnection) -> PromoCodeService {
    PromoCodeService::new(db.clone(), ledger(db), auto_ban(db))
}

pub fn withdrawals(db: &DatabaseConnection) -> WithdrawalService {
    WithdrawalService::new(db.clone(), ledger(db), rewards())
}

pub fn tasks(db: &DatabaseConnection) -> TaskService {
    TaskService::new(db.clone(), ledger(db), auto_ban(db))
}

/// 直接插入用户行，跳过注册流程
pub async fn create_user(db: &DatabaseConnection, username: &str) -> String {
    let id = Uuid::new_v4().to_string();
    app_users::ActiveModel {
        id: Set(id.clone()),
        username: Set(username.to_string()),
        email: Set(format!("{username}@example.com")),
        password_hash: Set("not-a-real-hash".to_string()),
        coins: Set(0),
        total_earned: Set(0),
        is_banned: Set(false),
        ban_reason: Set(None),
        device_token: Set(None),
        referral_code: Set(format!("REF{}", &id[..8].to_uppercase())),
        referred_by: Set(None),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("Failed to insert test user");
    id
}

pub async fn get_user(db: &DatabaseConnection, user_id: &str) -> app_users::Model {
    use sea_orm::EntityTrait;
    app_users::Entity::find_by_id(user_id)
        .one(db)
        .await
        .expect("query failed")
        .expect("user missing")
}

/// 账本不变式：余额必须等于已完成交易的带符号合计
pub async fn assert_reconciled(db: &DatabaseConnection, user_id: &str) {
    let user = get_user(db, user_id).await;
    let sum = ledger(db)
        .completed_sum(db, user_id)
        .await
        .expect("sum failed");
    assert_eq!(
        user.coins, sum,
        "ledger out of balance for {user_id}: coins={} sum={}",
        user.coins, sum
    );
}
