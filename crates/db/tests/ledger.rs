//! Integration tests for the coin ledger.

mod common;

use common::{seed_hierarchy, seed_user};
use inkstone_db::models::transaction::{CreateTransaction, TransactionStatus, TransactionType};
use inkstone_db::models::user::UserRole;
use inkstone_db::repositories::{TransactionRepo, UserRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn entries_are_created_pending(pool: PgPool) {
    let user = seed_user(&pool, "buyer", UserRole::Reader).await;

    let input = CreateTransaction {
        user_id: user.id,
        kind: TransactionType::CoinPurchase,
        amount: Decimal::new(499, 2), // 4.99
        coin_amount: Decimal::from(50),
        reference_id: Some("stripe_ch_123".to_string()),
        novel_id: None,
        chapter_id: None,
    };
    let created = TransactionRepo::create(&pool, &input).await.unwrap();

    assert_eq!(created.status, TransactionStatus::Pending);
    assert_eq!(created.kind, TransactionType::CoinPurchase);
    assert_eq!(created.amount, Decimal::new(499, 2));
    assert_eq!(created.coin_amount, Decimal::from(50));
    assert_eq!(created.reference_id.as_deref(), Some("stripe_ch_123"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn creating_an_entry_never_touches_the_balance(pool: PgPool) {
    let user = seed_user(&pool, "spender", UserRole::Reader).await;
    let (_, _, novel) = seed_hierarchy(&pool, "ledger").await;

    let input = CreateTransaction {
        user_id: user.id,
        kind: TransactionType::ChapterUnlock,
        amount: Decimal::new(100, 2),
        coin_amount: Decimal::from(10),
        reference_id: None,
        novel_id: Some(novel.id),
        chapter_id: None,
    };
    TransactionRepo::create(&pool, &input).await.unwrap();

    // Settlement belongs to a separate component; the balance stays put.
    let user = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(user.coin_balance, Decimal::ZERO);
}

#[sqlx::test(migrations = "../../migrations")]
async fn listing_returns_newest_first(pool: PgPool) {
    let user = seed_user(&pool, "lister", UserRole::Reader).await;

    for coins in [10i64, 20, 30] {
        let input = CreateTransaction {
            user_id: user.id,
            kind: TransactionType::CoinPurchase,
            amount: Decimal::from(coins),
            coin_amount: Decimal::from(coins),
            reference_id: None,
            novel_id: None,
            chapter_id: None,
        };
        TransactionRepo::create(&pool, &input).await.unwrap();
    }

    let entries = TransactionRepo::list_by_user(&pool, user.id).await.unwrap();
    assert_eq!(entries.len(), 3);
    for pair in entries.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}
