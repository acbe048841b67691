mod common;

use common::*;
use earnzy_backend::entities::TransactionKind;
use earnzy_backend::models::{AdjustCoinsRequest, BanUserRequest, BulkCreditRequest};
use earnzy_backend::services::UserService;

#[tokio::test]
async fn credit_updates_balance_and_total_earned() {
    let db = setup_db().await;
    let user_id = create_user(&db, "alice").await;
    let ledger = ledger(&db);

    ledger
        .credit(&db, &user_id, 100, TransactionKind::Earn, "Task reward")
        .await
        .unwrap();

    let user = get_user(&db, &user_id).await;
    assert_eq!(user.coins, 100);
    assert_eq!(user.total_earned, 100);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn debit_requires_sufficient_balance() {
    let db = setup_db().await;
    let user_id = create_user(&db, "bob").await;
    let ledger = ledger(&db);

    ledger
        .credit(&db, &user_id, 50, TransactionKind::Bonus, "Seed")
        .await
        .unwrap();

    let err = ledger
        .debit(&db, &user_id, 80, TransactionKind::Spend, "Too much")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Insufficient balance"));

    // 余额未被动过
    let user = get_user(&db, &user_id).await;
    assert_eq!(user.coins, 50);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn debit_does_not_touch_total_earned() {
    let db = setup_db().await;
    let user_id = create_user(&db, "carol").await;
    let ledger = ledger(&db);

    ledger
        .credit(&db, &user_id, 200, TransactionKind::Earn, "Seed")
        .await
        .unwrap();
    ledger
        .debit(&db, &user_id, 150, TransactionKind::Spend, "Purchase")
        .await
        .unwrap();

    let user = get_user(&db, &user_id).await;
    assert_eq!(user.coins, 50);
    assert_eq!(user.total_earned, 200);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn banned_user_cannot_earn() {
    let db = setup_db().await;
    let user_id = create_user(&db, "dave").await;
    let user_service = UserService::new(db.clone());

    user_service
        .set_ban(
            &user_id,
            BanUserRequest {
                ban: true,
                reason: Some("fraud".to_string()),
            },
        )
        .await
        .unwrap();

    let err = ledger(&db)
        .credit(&db, &user_id, 10, TransactionKind::Earn, "Blocked")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("banned"));

    let user = get_user(&db, &user_id).await;
    assert_eq!(user.coins, 0);
}

#[tokio::test]
async fn ban_is_idempotent_and_keeps_reason() {
    let db = setup_db().await;
    let user_id = create_user(&db, "erin").await;
    let user_service = UserService::new(db.clone());

    user_service
        .set_ban(
            &user_id,
            BanUserRequest {
                ban: true,
                reason: Some("abuse".to_string()),
            },
        )
        .await
        .unwrap();

    // 无理由的重复封禁不能清掉原理由
    let user = user_service
        .set_ban(&user_id, BanUserRequest { ban: true, reason: None })
        .await
        .unwrap();
    assert!(user.is_banned);
    assert_eq!(user.ban_reason.as_deref(), Some("abuse"));

    // 解封清空理由
    let user = user_service
        .set_ban(&user_id, BanUserRequest { ban: false, reason: None })
        .await
        .unwrap();
    assert!(!user.is_banned);
    assert!(user.ban_reason.is_none());
}

#[tokio::test]
async fn adjust_coins_signed_amounts() {
    let db = setup_db().await;
    let user_id = create_user(&db, "frank").await;
    let ledger = ledger(&db);

    ledger
        .adjust_coins(AdjustCoinsRequest {
            user_id: user_id.clone(),
            amount: 300,
            description: "Manual grant".to_string(),
        })
        .await
        .unwrap();

    ledger
        .adjust_coins(AdjustCoinsRequest {
            user_id: user_id.clone(),
            amount: -120,
            description: "Correction".to_string(),
        })
        .await
        .unwrap();

    let user = get_user(&db, &user_id).await;
    assert_eq!(user.coins, 180);
    assert_eq!(user.total_earned, 300);
    assert_reconciled(&db, &user_id).await;

    let err = ledger
        .adjust_coins(AdjustCoinsRequest {
            user_id: user_id.clone(),
            amount: 0,
            description: "No-op".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("zero"));
}

#[tokio::test]
async fn bulk_credit_skips_banned_users() {
    let db = setup_db().await;
    let a = create_user(&db, "grace").await;
    let b = create_user(&db, "heidi").await;
    let banned = create_user(&db, "ivan").await;

    UserService::new(db.clone())
        .set_ban(
            &banned,
            BanUserRequest {
                ban: true,
                reason: Some("bot".to_string()),
            },
        )
        .await
        .unwrap();

    let result = ledger(&db)
        .bulk_credit(BulkCreditRequest {
            amount: 25,
            description: "Event reward".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.count, 2);
    assert_eq!(get_user(&db, &a).await.coins, 25);
    assert_eq!(get_user(&db, &b).await.coins, 25);
    assert_eq!(get_user(&db, &banned).await.coins, 0);
    assert_reconciled(&db, &a).await;
    assert_reconciled(&db, &b).await;
}

#[tokio::test]
async fn leaderboard_gives_ties_the_same_rank() {
    let db = setup_db().await;
    let ledger = ledger(&db);
    for (name, earned) in [("kim", 100), ("liam", 100), ("mona", 40)] {
        let user_id = create_user(&db, name).await;
        ledger
            .credit(&db, &user_id, earned, TransactionKind::Earn, "Seed")
            .await
            .unwrap();
    }

    let board = UserService::new(db.clone()).leaderboard(10).await.unwrap();
    assert_eq!(board.len(), 3);
    // 并列 100 分共享第 1 名，下一档是第 2 名
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[1].rank, 1);
    assert_eq!(board[2].rank, 2);
    assert_eq!(board[2].total_earned, 40);
}

#[tokio::test]
async fn user_history_is_paginated_desc() {
    let db = setup_db().await;
    let user_id = create_user(&db, "judy").await;
    let ledger = ledger(&db);

    for i in 1..=5 {
        ledger
            .credit(&db, &user_id, i * 10, TransactionKind::Earn, "Reward")
            .await
            .unwrap();
    }

    let params = earnzy_backend::models::PaginationParams::new(Some(1), Some(3));
    let page = ledger.user_history(&user_id, &params).await.unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.total_pages, 2);
}
