mod common;

use chrono::NaiveDate;
use common::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).expect("bad date")
}

#[tokio::test]
async fn daily_bonus_claim_once_per_day() {
    let db = setup_db().await;
    let user_id = create_user(&db, "alice").await;
    let claims = claims(&db);

    let result = claims.claim_daily_bonus_on(&user_id, day(1)).await.unwrap();
    assert_eq!(result.streak, 1);
    assert_eq!(result.reward, 50);
    assert_eq!(result.coins, 50);

    let err = claims
        .claim_daily_bonus_on(&user_id, day(1))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("already claimed"));

    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn daily_bonus_streak_grows_and_resets() {
    let db = setup_db().await;
    let user_id = create_user(&db, "bob").await;
    let claims = claims(&db);

    // 连续三天：50, 60, 70
    for (d, expected) in [(1, 50), (2, 60), (3, 70)] {
        let result = claims.claim_daily_bonus_on(&user_id, day(d)).await.unwrap();
        assert_eq!(result.reward, expected);
    }

    // 中断一天后重新从 1 开始
    let result = claims.claim_daily_bonus_on(&user_id, day(5)).await.unwrap();
    assert_eq!(result.streak, 1);
    assert_eq!(result.reward, 50);

    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn daily_bonus_streak_is_capped() {
    let db = setup_db().await;
    let user_id = create_user(&db, "carol").await;
    let claims = claims(&db);

    // 第 7 天起加成封顶在 +60
    for d in 1..=9 {
        let result = claims.claim_daily_bonus_on(&user_id, day(d)).await.unwrap();
        if d >= 7 {
            assert_eq!(result.reward, 110, "day {d}");
        }
    }
}

#[tokio::test]
async fn daily_bonus_status_reflects_claim() {
    let db = setup_db().await;
    let user_id = create_user(&db, "dave").await;
    let claims = claims(&db);

    let status = claims
        .daily_bonus_status_on(&user_id, day(1))
        .await
        .unwrap();
    assert!(!status.claimed_today);
    assert_eq!(status.next_reward, 50);

    claims.claim_daily_bonus_on(&user_id, day(1)).await.unwrap();

    let status = claims
        .daily_bonus_status_on(&user_id, day(1))
        .await
        .unwrap();
    assert!(status.claimed_today);
    assert_eq!(status.streak, 1);
    assert_eq!(status.next_reward, 60);
}

#[tokio::test]
async fn spin_quota_is_enforced_per_day() {
    let db = setup_db().await;
    let user_id = create_user(&db, "erin").await;
    let claims = claims(&db);

    let status = claims.spin_status_on(&user_id, day(1)).await.unwrap();
    assert_eq!(status.spins_remaining, 5);

    for i in (0..5).rev() {
        let result = claims.claim_spin_on(&user_id, day(1)).await.unwrap();
        assert!(result.reward > 0);
        assert_eq!(result.spins_remaining, i);
    }

    let err = claims.claim_spin_on(&user_id, day(1)).await.unwrap_err();
    assert!(err.to_string().contains("No spins remaining"));

    // 第二天配额恢复
    let status = claims.spin_status_on(&user_id, day(2)).await.unwrap();
    assert_eq!(status.spins_remaining, 5);

    assert_reconciled(&db, &user_id).await;
}

#[tokio::test]
async fn scratch_quota_is_enforced_per_day() {
    let db = setup_db().await;
    let user_id = create_user(&db, "frank").await;
    let claims = claims(&db);

    for _ in 0..3 {
        claims.claim_scratch_on(&user_id, day(1)).await.unwrap();
    }
    let err = claims.claim_scratch_on(&user_id, day(1)).await.unwrap_err();
    assert!(err.to_string().contains("No scratch cards remaining"));

    let user = get_user(&db, &user_id).await;
    assert!(user.coins > 0);
    assert_eq!(user.coins, user.total_earned);
    assert_reconciled(&db, &user_id).await;
}
