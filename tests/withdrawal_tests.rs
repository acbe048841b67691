mod common;

use common::*;
use earnzy_backend::entities::{TransactionKind, WithdrawalStatus};
use earnzy_backend::models::{CreateWithdrawalRequest, PaginationParams, ProcessWithdrawalRequest};

fn request(amount: i64) -> CreateWithdrawalRequest {
    CreateWithdrawalRequest {
        amount,
        method: "upi".to_string(),
        account_details: "fan@upi".to_string(),
    }
}

async fn seed(db: &sea_orm::DatabaseConnection, user_id: &str, amount: i64) {
    ledger(db)
        .credit(db, user_id, amount, TransactionKind::Earn, "Seed")
        .await
        .unwrap();
}

#[tokio::test]
async fn request_debits_immediately() {
    let db = setup_db().await;
    let user_id = create_user(&db, "alice").await;
    seed(&db, &user_id, 1000).await;

    let withdrawal = withdrawals(&db)
        .request(&user_id, request(500))
        .await
        .unwrap();
    assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
    assert_eq!(withdrawal.amount, 500);

    let user = get_user(&db, &user_id).await;
    assert_eq!(user.coins, 500);
    assert_eq!(user.total_earned, 1000);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn approve_keeps_balance() {
    let db = setup_db().await;
    let user_id = create_user(&db, "bob").await;
    seed(&db, &user_id, 1000).await;
    let service = withdrawals(&db);

    let withdrawal = service.request(&user_id, request(300)).await.unwrap();
    let processed = service
        .process(
            &withdrawal.id,
            ProcessWithdrawalRequest {
                status: WithdrawalStatus::Approved,
                admin_note: Some("paid".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(processed.status, WithdrawalStatus::Approved);
    assert!(processed.processed_at.is_some());
    assert_eq!(get_user(&db, &user_id).await.coins, 700);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn reject_refunds_without_bumping_total_earned() {
    let db = setup_db().await;
    let user_id = create_user(&db, "carol").await;
    seed(&db, &user_id, 1000).await;
    let service = withdrawals(&db);

    let withdrawal = service.request(&user_id, request(400)).await.unwrap();
    service
        .process(
            &withdrawal.id,
            ProcessWithdrawalRequest {
                status: WithdrawalStatus::Rejected,
                admin_note: Some("invalid account".to_string()),
            },
        )
        .await
        .unwrap();

    let user = get_user(&db, &user_id).await;
    assert_eq!(user.coins, 1000);
    assert_eq!(user.total_earned, 1000);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn request_validates_amount_and_balance() {
    let db = setup_db().await;
    let user_id = create_user(&db, "dave").await;
    seed(&db, &user_id, 200).await;
    let service = withdrawals(&db);

    // 低于最低限额（100）
    let err = service.request(&user_id, request(50)).await.unwrap_err();
    assert!(err.to_string().contains("Minimum withdrawal"));

    // 余额不足
    let err = service.request(&user_id, request(500)).await.unwrap_err();
    assert!(err.to_string().contains("Insufficient balance"));

    assert_eq!(get_user(&db, &user_id).await.coins, 200);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn process_rejects_non_pending() {
    let db = setup_db().await;
    let user_id = create_user(&db, "erin").await;
    seed(&db, &user_id, 1000).await;
    let service = withdrawals(&db);

    let withdrawal = service.request(&user_id, request(200)).await.unwrap();

    // 不能把状态改回 pending
    let err = service
        .process(
            &withdrawal.id,
            ProcessWithdrawalRequest {
                status: WithdrawalStatus::Pending,
                admin_note: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("approved or rejected"));

    service
        .process(
            &withdrawal.id,
            ProcessWithdrawalRequest {
                status: WithdrawalStatus::Approved,
                admin_note: None,
            },
        )
        .await
        .unwrap();

    // 已处理的单子不能再处理
    let err = service
        .process(
            &withdrawal.id,
            ProcessWithdrawalRequest {
                status: WithdrawalStatus::Rejected,
                admin_note: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already approved"));
}

#[tokio::test]
async fn lists_filter_by_status_and_user() {
    let db = setup_db().await;
    let a = create_user(&db, "frank").await;
    let b = create_user(&db, "grace").await;
    seed(&db, &a, 1000).await;
    seed(&db, &b, 1000).await;
    let service = withdrawals(&db);

    let w1 = service.request(&a, request(100)).await.unwrap();
    service.request(&a, request(150)).await.unwrap();
    service.request(&b, request(200)).await.unwrap();

    service
        .process(
            &w1.id,
            ProcessWithdrawalRequest {
                status: WithdrawalStatus::Approved,
                admin_note: None,
            },
        )
        .await
        .unwrap();

    let params = PaginationParams::new(Some(1), Some(20));
    let pending = service
        .list(Some(WithdrawalStatus::Pending), &params)
        .await
        .unwrap();
    assert_eq!(pending.pagination.total, 2);

    let all = service.list(None, &params).await.unwrap();
    assert_eq!(all.pagination.total, 3);

    let mine = service.list_for_user(&a, &params).await.unwrap();
    assert_eq!(mine.pagination.total, 2);
    assert!(mine.items.iter().all(|w| w.user_id == a));
}
