mod common;

use chrono::{Duration, Utc};
use common::*;
use earnzy_backend::models::{CreatePromoCodeRequest, RedeemPromoCodeRequest, ToggleActiveRequest};

fn create_request(code: &str, coins: i64, max_uses: i64) -> CreatePromoCodeRequest {
    CreatePromoCodeRequest {
        code: Some(code.to_string()),
        coins,
        max_uses: Some(max_uses),
        expires_at: None,
        is_active: None,
    }
}

fn redeem_request(code: &str) -> RedeemPromoCodeRequest {
    RedeemPromoCodeRequest {
        code: code.to_string(),
    }
}

#[tokio::test]
async fn redeem_credits_user_once() {
    let db = setup_db().await;
    let user_id = create_user(&db, "alice").await;
    let promos = promos(&db);

    promos.create(create_request("WELCOME", 75, 0)).await.unwrap();

    let result = promos
        .redeem(&user_id, redeem_request("welcome"))
        .await
        .unwrap();
    assert_eq!(result.reward, 75);
    assert_eq!(result.coins, 75);

    // 同一用户不能兑换两次
    let err = promos
        .redeem(&user_id, redeem_request("WELCOME"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already redeemed"));

    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn redeem_respects_usage_limit() {
    let db = setup_db().await;
    let promos = promos(&db);
    promos.create(create_request("LIMITED", 30, 2)).await.unwrap();

    for name in ["bob", "carol"] {
        let user_id = create_user(&db, name).await;
        promos
            .redeem(&user_id, redeem_request("LIMITED"))
            .await
            .unwrap();
    }

    let third = create_user(&db, "dave").await;
    let err = promos
        .redeem(&third, redeem_request("LIMITED"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("usage limit reached"));
    assert_eq!(get_user(&db, &third).await.coins, 0);
}

#[tokio::test]
async fn zero_max_uses_means_unlimited() {
    let db = setup_db().await;
    let promos = promos(&db);
    promos.create(create_request("OPEN", 10, 0)).await.unwrap();

    for name in ["erin", "frank", "grace", "heidi"] {
        let user_id = create_user(&db, name).await;
        let result = promos
            .redeem(&user_id, redeem_request("OPEN"))
            .await
            .unwrap();
        assert_eq!(result.reward, 10);
    }
}

#[tokio::test]
async fn expired_or_disabled_code_is_rejected() {
    let db = setup_db().await;
    let user_id = create_user(&db, "ivan").await;
    let promos = promos(&db);

    promos
        .create(CreatePromoCodeRequest {
            code: Some("EXPIRED".to_string()),
            coins: 40,
            max_uses: None,
            expires_at: Some(Utc::now() - Duration::hours(1)),
            is_active: None,
        })
        .await
        .unwrap();

    let err = promos
        .redeem(&user_id, redeem_request("EXPIRED"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no longer valid"));

    let disabled = promos.create(create_request("PAUSED", 40, 0)).await.unwrap();
    promos
        .toggle(&disabled.id, ToggleActiveRequest { is_active: false })
        .await
        .unwrap();
    let err = promos
        .redeem(&user_id, redeem_request("PAUSED"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no longer valid"));

    assert_eq!(get_user(&db, &user_id).await.coins, 0);
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let db = setup_db().await;
    let user_id = create_user(&db, "judy").await;

    let err = promos(&db)
        .redeem(&user_id, redeem_request("NOSUCHCODE"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn create_validates_input() {
    let db = setup_db().await;
    let promos = promos(&db);

    let err = promos.create(create_request("BAD", 0, 0)).await.unwrap_err();
    assert!(err.to_string().contains("positive"));

    promos.create(create_request("DUP", 10, 0)).await.unwrap();
    let err = promos.create(create_request("dup", 10, 0)).await.unwrap_err();
    assert!(err.to_string().contains("already exists"));

    // 不指定 code 时自动生成
    let generated = promos
        .create(CreatePromoCodeRequest {
            code: None,
            coins: 20,
            max_uses: None,
            expires_at: None,
            is_active: None,
        })
        .await
        .unwrap();
    assert!(!generated.code.is_empty());
}
