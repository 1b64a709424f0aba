//! Integration tests for dashboard aggregation.

mod common;

use chrono::{Duration, Local, Utc};
use common::{seed_chapter, seed_hierarchy, seed_user};
use inkstone_core::stats::today_window;
use inkstone_db::models::chapter::ChapterStatus;
use inkstone_db::models::transaction::{CreateTransaction, TransactionType};
use inkstone_db::models::user::UserRole;
use inkstone_db::repositories::{StatsRepo, TransactionRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

fn purchase(user_id: i64, amount: Decimal) -> CreateTransaction {
    CreateTransaction {
        user_id,
        kind: TransactionType::CoinPurchase,
        amount,
        coin_amount: amount,
        reference_id: None,
        novel_id: None,
        chapter_id: None,
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn counts_and_revenue_reflect_source_tables(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "dash").await;
    seed_chapter(&pool, novel.id, 1, "published words", ChapterStatus::Published).await;
    seed_chapter(&pool, novel.id, 2, "draft words", ChapterStatus::Draft).await;

    let buyer = seed_user(&pool, "dash_buyer", UserRole::Reader).await;
    let completed = TransactionRepo::create(&pool, &purchase(buyer.id, Decimal::new(1000, 2)))
        .await
        .unwrap();
    TransactionRepo::create(&pool, &purchase(buyer.id, Decimal::new(250, 2)))
        .await
        .unwrap();

    // Settle one entry externally; only completed revenue counts.
    sqlx::query("UPDATE transactions SET status = 'completed' WHERE id = $1")
        .bind(completed.id)
        .execute(&pool)
        .await
        .unwrap();

    let (start, end) = today_window(Local::now());
    let stats = StatsRepo::collect(&pool, start, end).await.unwrap();

    // The hierarchy seeds one writer, plus the buyer.
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.total_novels, 1);
    assert_eq!(stats.total_chapters, 2);
    assert_eq!(stats.total_transactions, 2);
    assert_eq!(stats.total_revenue, Decimal::new(1000, 2));

    // Everything was created inside today's window.
    assert_eq!(stats.new_users_today, 2);
    assert_eq!(stats.active_users_today, 1);
    assert_eq!(stats.chapters_published_today, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn revenue_is_zero_with_no_completed_transactions(pool: PgPool) {
    let (start, end) = today_window(Local::now());
    let stats = StatsRepo::collect(&pool, start, end).await.unwrap();

    assert_eq!(stats.total_revenue, Decimal::ZERO);
    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.active_users_today, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn today_window_excludes_older_rows(pool: PgPool) {
    let user = seed_user(&pool, "night_owl", UserRole::Reader).await;
    TransactionRepo::create(&pool, &purchase(user.id, Decimal::from(5)))
        .await
        .unwrap();

    // Backdate the user and the transaction to well before today.
    let last_week = Utc::now() - Duration::days(7);
    sqlx::query("UPDATE users SET created_at = $1 WHERE id = $2")
        .bind(last_week)
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE transactions SET created_at = $1 WHERE user_id = $2")
        .bind(last_week)
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let (start, end) = today_window(Local::now());
    let stats = StatsRepo::collect(&pool, start, end).await.unwrap();

    // Global counts still see the rows; today's figures do not.
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.total_transactions, 1);
    assert_eq!(stats.new_users_today, 0);
    assert_eq!(stats.active_users_today, 0);
}
