mod common;

use chrono::NaiveDate;
use common::*;
use earnzy_backend::entities::{AutoBanRuleType, TransactionKind, WithdrawalStatus};
use earnzy_backend::models::{
    CreateAutoBanRuleRequest, CreateTaskRequest, CreateWithdrawalRequest,
    ProcessWithdrawalRequest, ToggleActiveRequest,
};

fn rule(name: &str, rule_type: AutoBanRuleType, threshold: i64) -> CreateAutoBanRuleRequest {
    CreateAutoBanRuleRequest {
        rule_name: name.to_string(),
        rule_type,
        threshold,
        is_active: None,
    }
}

#[tokio::test]
async fn balance_limit_bans_on_credit() {
    let db = setup_db().await;
    let user_id = create_user(&db, "alice").await;
    let auto_ban = auto_ban(&db);
    auto_ban
        .create_rule(rule("whale", AutoBanRuleType::BalanceLimit, 40))
        .await
        .unwrap();

    // 入账仍然成立，封禁发生在入账之后
    let claims = claims(&db);
    let result = claims
        .claim_daily_bonus_on(&user_id, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        .await
        .unwrap();
    assert_eq!(result.reward, 50);

    let user = get_user(&db, &user_id).await;
    assert!(user.is_banned);
    assert!(user.ban_reason.unwrap().contains("whale"));
    assert_eq!(user.coins, 50);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn daily_earn_limit_triggers_on_task_completion() {
    let db = setup_db().await;
    let user_id = create_user(&db, "bob").await;
    let auto_ban = auto_ban(&db);
    auto_ban
        .create_rule(rule("grinder", AutoBanRuleType::DailyEarnLimit, 150))
        .await
        .unwrap();

    let tasks = tasks(&db);
    let t1 = tasks
        .create(CreateTaskRequest {
            title: "Watch video".to_string(),
            description: "Watch a sponsored video".to_string(),
            coins: 100,
            action_url: None,
            category: "video".to_string(),
            is_active: None,
            priority: None,
        })
        .await
        .unwrap();
    let t2 = tasks
        .create(CreateTaskRequest {
            title: "Install app".to_string(),
            description: "Install the partner app".to_string(),
            coins: 100,
            action_url: None,
            category: "install".to_string(),
            is_active: None,
            priority: None,
        })
        .await
        .unwrap();

    tasks.complete(&user_id, &t1.id).await.unwrap();
    assert!(!get_user(&db, &user_id).await.is_banned);

    // 第二单把当日收入推到 200 > 150
    tasks.complete(&user_id, &t2.id).await.unwrap();
    let user = get_user(&db, &user_id).await;
    assert!(user.is_banned);
    assert_eq!(user.coins, 200);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn inactive_rule_is_ignored() {
    let db = setup_db().await;
    let user_id = create_user(&db, "carol").await;
    let auto_ban = auto_ban(&db);
    let created = auto_ban
        .create_rule(rule("paused", AutoBanRuleType::BalanceLimit, 10))
        .await
        .unwrap();
    auto_ban
        .toggle_rule(&created.id, ToggleActiveRequest { is_active: false })
        .await
        .unwrap();

    claims(&db)
        .claim_daily_bonus_on(&user_id, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        .await
        .unwrap();
    assert!(!get_user(&db, &user_id).await.is_banned);
}

#[tokio::test]
async fn sweep_bans_over_threshold_users() {
    let db = setup_db().await;
    let over = create_user(&db, "dave").await;
    let under = create_user(&db, "erin").await;
    let ledger = ledger(&db);

    // 直接入账不触发规则检查，交给后台巡检
    ledger
        .credit(&db, &over, 500, TransactionKind::Earn, "Seed")
        .await
        .unwrap();
    ledger
        .credit(&db, &under, 50, TransactionKind::Earn, "Seed")
        .await
        .unwrap();

    let auto_ban = auto_ban(&db);
    auto_ban
        .create_rule(rule("sweep", AutoBanRuleType::BalanceLimit, 100))
        .await
        .unwrap();
    auto_ban.sweep().await.unwrap();

    assert!(get_user(&db, &over).await.is_banned);
    assert!(!get_user(&db, &under).await.is_banned);
}

#[tokio::test]
async fn withdrawal_refund_does_not_count_as_income() {
    let db = setup_db().await;
    let user_id = create_user(&db, "frank").await;
    ledger(&db)
        .credit(&db, &user_id, 100, TransactionKind::Earn, "Task reward")
        .await
        .unwrap();

    // 提现被拒：退款 +100 回到账上，但不是收入
    let service = withdrawals(&db);
    let withdrawal = service
        .request(
            &user_id,
            CreateWithdrawalRequest {
                amount: 100,
                method: "upi".to_string(),
                account_details: "fan@upi".to_string(),
            },
        )
        .await
        .unwrap();
    service
        .process(
            &withdrawal.id,
            ProcessWithdrawalRequest {
                status: WithdrawalStatus::Rejected,
                admin_note: None,
            },
        )
        .await
        .unwrap();

    let auto_ban = auto_ban(&db);
    auto_ban
        .create_rule(rule("grinder", AutoBanRuleType::DailyEarnLimit, 150))
        .await
        .unwrap();
    auto_ban.sweep().await.unwrap();

    // 实际收入 100 <= 150，不应触发封禁
    let user = get_user(&db, &user_id).await;
    assert!(!user.is_banned);
    assert_eq!(user.coins, 100);
    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn create_rule_requires_positive_threshold() {
    let db = setup_db().await;
    let err = auto_ban(&db)
        .create_rule(rule("bad", AutoBanRuleType::BalanceLimit, 0))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("positive"));
}
