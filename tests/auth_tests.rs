mod common;

use common::*;
use earnzy_backend::entities::{TransactionKind, transaction_entity as transactions};
use earnzy_backend::models::{
    AdminLoginRequest, BanUserRequest, LoginRequest, RefreshTokenRequest, RegisterRequest,
};
use earnzy_backend::services::UserService;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

fn register_request(username: &str, referral_code: Option<&str>) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "Password123".to_string(),
        referral_code: referral_code.map(str::to_string),
        device_token: None,
    }
}

#[tokio::test]
async fn register_returns_tokens_and_user() {
    let db = setup_db().await;
    let auth = auth(&db);

    let response = auth.register(register_request("alice", None)).await.unwrap();
    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());

    let user = response.user.expect("user payload missing");
    assert_eq!(user.username, "alice");
    assert_eq!(user.coins, 0);
    assert!(!user.referral_code.is_empty());
}

#[tokio::test]
async fn register_rejects_duplicates() {
    let db = setup_db().await;
    let auth = auth(&db);
    auth.register(register_request("bob", None)).await.unwrap();

    let err = auth
        .register(register_request("bob", None))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Username already taken"));

    let mut request = register_request("bob2", None);
    request.email = "bob@example.com".to_string();
    let err = auth.register(request).await.unwrap_err();
    assert!(err.to_string().contains("Email already registered"));
}

#[tokio::test]
async fn register_with_referral_credits_referrer() {
    let db = setup_db().await;
    let auth = auth(&db);

    let referrer = auth
        .register(register_request("carol", None))
        .await
        .unwrap()
        .user
        .unwrap();

    auth.register(register_request("dave", Some(&referrer.referral_code)))
        .await
        .unwrap();

    let model = get_user(&db, &referrer.id).await;
    assert_eq!(model.coins, 50);
    assert_eq!(model.total_earned, 50);

    let referral_txns = transactions::Entity::find()
        .filter(transactions::Column::UserId.eq(&referrer.id))
        .filter(transactions::Column::Kind.eq(TransactionKind::Referral))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(referral_txns.len(), 1);
    assert_reconciled(&db, &referrer.id).await;
}

#[tokio::test]
async fn register_rejects_invalid_or_banned_referral_code() {
    let db = setup_db().await;
    let auth = auth(&db);

    let err = auth
        .register(register_request("erin", Some("NOPE1234")))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid referral code"));

    let referrer = auth
        .register(register_request("frank", None))
        .await
        .unwrap()
        .user
        .unwrap();
    UserService::new(db.clone())
        .set_ban(
            &referrer.id,
            BanUserRequest {
                ban: true,
                reason: Some("fraud".to_string()),
            },
        )
        .await
        .unwrap();

    let err = auth
        .register(register_request("grace", Some(&referrer.referral_code)))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid referral code"));
}

#[tokio::test]
async fn login_checks_password_and_ban() {
    let db = setup_db().await;
    let auth = auth(&db);
    let user = auth
        .register(register_request("heidi", None))
        .await
        .unwrap()
        .user
        .unwrap();

    let err = auth
        .login(LoginRequest {
            email: "heidi@example.com".to_string(),
            password: "WrongPass1".to_string(),
            device_token: None,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid email or password"));

    let response = auth
        .login(LoginRequest {
            email: "heidi@example.com".to_string(),
            password: "Password123".to_string(),
            device_token: Some("device-abc".to_string()),
        })
        .await
        .unwrap();
    assert!(response.user.is_some());
    assert_eq!(
        get_user(&db, &user.id).await.device_token.as_deref(),
        Some("device-abc")
    );

    UserService::new(db.clone())
        .set_ban(
            &user.id,
            BanUserRequest {
                ban: true,
                reason: None,
            },
        )
        .await
        .unwrap();

    let err = auth
        .login(LoginRequest {
            email: "heidi@example.com".to_string(),
            password: "Password123".to_string(),
            device_token: None,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Forbidden"));
}

#[tokio::test]
async fn refresh_round_trip_rejects_banned_user() {
    let db = setup_db().await;
    let auth = auth(&db);
    let response = auth.register(register_request("ivan", None)).await.unwrap();
    let user_id = response.user.unwrap().id;

    let refreshed = auth
        .refresh(RefreshTokenRequest {
            refresh_token: response.refresh_token.clone(),
        })
        .await
        .unwrap();
    assert!(!refreshed.access_token.is_empty());

    UserService::new(db.clone())
        .set_ban(
            &user_id,
            BanUserRequest {
                ban: true,
                reason: None,
            },
        )
        .await
        .unwrap();

    let err = auth
        .refresh(RefreshTokenRequest {
            refresh_token: response.refresh_token,
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Forbidden"));
}

#[tokio::test]
async fn bootstrap_admin_runs_once() {
    let db = setup_db().await;
    let auth = auth(&db);

    auth.bootstrap_admin("admin@example.com", "ChangeMe123")
        .await
        .unwrap();
    // 已有管理员后不再覆盖
    auth.bootstrap_admin("other@example.com", "Other123")
        .await
        .unwrap();

    auth.admin_login(AdminLoginRequest {
        email: "admin@example.com".to_string(),
        password: "ChangeMe123".to_string(),
    })
    .await
    .unwrap();

    let err = auth
        .admin_login(AdminLoginRequest {
            email: "other@example.com".to_string(),
            password: "Other123".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Invalid email or password"));
}
