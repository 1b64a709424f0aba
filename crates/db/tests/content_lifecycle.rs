//! Integration tests for chapter lifecycle and the novel chapter counter.

mod common;

use common::{seed_chapter, seed_hierarchy};
use inkstone_db::models::chapter::{ChapterStatus, CreateChapter, UpdateChapter};
use inkstone_db::repositories::{ChapterRepo, NovelRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn create_chapter_derives_word_count_and_bumps_counter(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "wc").await;
    assert_eq!(novel.total_chapters, 0);

    let chapter = seed_chapter(&pool, novel.id, 1, "a b c", ChapterStatus::Draft).await;
    assert_eq!(chapter.word_count, 3);
    assert_eq!(chapter.published_at, None);

    let novel = NovelRepo::find_by_id(&pool, novel.id).await.unwrap().unwrap();
    assert_eq!(novel.total_chapters, 1);

    seed_chapter(&pool, novel.id, 2, "  four   words  in here ", ChapterStatus::Draft).await;
    let novel = NovelRepo::find_by_id(&pool, novel.id).await.unwrap().unwrap();
    assert_eq!(novel.total_chapters, 2);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chapters WHERE novel_id = $1")
        .bind(novel.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, novel.total_chapters as i64);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_chapter_number_rolls_back_counter(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "dup").await;
    seed_chapter(&pool, novel.id, 1, "first version", ChapterStatus::Draft).await;

    let input = CreateChapter {
        novel_id: novel.id,
        chapter_number: 1,
        title: "Duplicate".to_string(),
        content: "second version".to_string(),
        status: ChapterStatus::Draft,
        is_premium: false,
        coin_cost: Decimal::ZERO,
    };
    let err = ChapterRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_chapters_novel_number"));
        }
        other => panic!("expected unique violation, got {other}"),
    }

    // The failed insert must not leave a counter bump behind.
    let novel = NovelRepo::find_by_id(&pool, novel.id).await.unwrap().unwrap();
    assert_eq!(novel.total_chapters, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn chapter_created_published_gets_timestamp(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "pub").await;
    let chapter = seed_chapter(&pool, novel.id, 1, "out now", ChapterStatus::Published).await;
    assert!(chapter.published_at.is_some());
}

#[sqlx::test(migrations = "../../migrations")]
async fn publication_state_machine_drives_published_at(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "sm").await;
    let chapter = seed_chapter(&pool, novel.id, 1, "draft text", ChapterStatus::Draft).await;
    assert_eq!(chapter.published_at, None);

    // draft -> published stamps the clock.
    let published = ChapterRepo::update(
        &pool,
        chapter.id,
        &UpdateChapter {
            status: Some(ChapterStatus::Published),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    let stamp = published.published_at.expect("published_at set on publish");

    // Editing another field while published leaves the stamp alone.
    let retitled = ChapterRepo::update(
        &pool,
        chapter.id,
        &UpdateChapter {
            title: Some("New title".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(retitled.published_at, Some(stamp));
    assert_eq!(retitled.title, "New title");

    // Re-supplying published while already published keeps the stamp.
    let republished = ChapterRepo::update(
        &pool,
        chapter.id,
        &UpdateChapter {
            status: Some(ChapterStatus::Published),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(republished.published_at, Some(stamp));

    // published -> draft clears the stamp.
    let unpublished = ChapterRepo::update(
        &pool,
        chapter.id,
        &UpdateChapter {
            status: Some(ChapterStatus::Draft),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(unpublished.published_at, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn word_count_recomputed_only_when_content_supplied(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "rewc").await;
    let chapter = seed_chapter(&pool, novel.id, 1, "one two three", ChapterStatus::Draft).await;
    assert_eq!(chapter.word_count, 3);

    let retitled = ChapterRepo::update(
        &pool,
        chapter.id,
        &UpdateChapter {
            title: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(retitled.word_count, 3);

    let rewritten = ChapterRepo::update(
        &pool,
        chapter.id,
        &UpdateChapter {
            content: Some("now five words are here".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(rewritten.word_count, 5);

    let emptied = ChapterRepo::update(
        &pool,
        chapter.id,
        &UpdateChapter {
            content: Some("   ".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(emptied.word_count, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_missing_chapter_returns_none(pool: PgPool) {
    let updated = ChapterRepo::update(&pool, 424242, &UpdateChapter::default())
        .await
        .unwrap();
    assert!(updated.is_none());
}
