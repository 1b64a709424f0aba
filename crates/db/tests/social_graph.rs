//! Integration tests for follow edges and threaded comments.

mod common;

use common::{seed_chapter, seed_hierarchy, seed_user};
use inkstone_db::models::chapter::ChapterStatus;
use inkstone_db::models::comment::CreateComment;
use inkstone_db::models::follow::CreateFollow;
use inkstone_db::models::user::UserRole;
use inkstone_db::repositories::{CommentRepo, FollowRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_follow_edge_is_rejected(pool: PgPool) {
    let follower = seed_user(&pool, "fan", UserRole::Reader).await;
    let author = seed_user(&pool, "idol", UserRole::Writer).await;

    let input = CreateFollow {
        follower_id: follower.id,
        following_id: author.id,
    };
    FollowRepo::create(&pool, &input).await.unwrap();

    let err = FollowRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_follows_edge"));
        }
        other => panic!("expected unique violation, got {other}"),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn opposite_direction_is_a_distinct_edge(pool: PgPool) {
    let a = seed_user(&pool, "mutual_a", UserRole::Reader).await;
    let b = seed_user(&pool, "mutual_b", UserRole::Writer).await;

    FollowRepo::create(
        &pool,
        &CreateFollow {
            follower_id: a.id,
            following_id: b.id,
        },
    )
    .await
    .unwrap();

    // b following a back is a different edge, not a duplicate.
    FollowRepo::create(
        &pool,
        &CreateFollow {
            follower_id: b.id,
            following_id: a.id,
        },
    )
    .await
    .unwrap();

    assert!(FollowRepo::find_edge(&pool, a.id, b.id).await.unwrap().is_some());
    assert!(FollowRepo::find_edge(&pool, b.id, a.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../migrations")]
async fn reply_parent_must_share_the_chapter(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "thread").await;
    let ch1 = seed_chapter(&pool, novel.id, 1, "chapter one", ChapterStatus::Published).await;
    let ch2 = seed_chapter(&pool, novel.id, 2, "chapter two", ChapterStatus::Published).await;
    let reader = seed_user(&pool, "commenter", UserRole::Reader).await;

    let top_level = CommentRepo::create(
        &pool,
        &CreateComment {
            user_id: reader.id,
            chapter_id: ch1.id,
            content: "loved this one".to_string(),
            parent_id: None,
        },
    )
    .await
    .unwrap();

    // The parent resolves on its own chapter...
    let found = CommentRepo::find_reply_parent(&pool, top_level.id, ch1.id)
        .await
        .unwrap();
    assert!(found.is_some());

    // ...but not from another chapter, so cross-chapter replies fail the
    // existence check.
    let cross = CommentRepo::find_reply_parent(&pool, top_level.id, ch2.id)
        .await
        .unwrap();
    assert!(cross.is_none());

    let reply = CommentRepo::create(
        &pool,
        &CreateComment {
            user_id: reader.id,
            chapter_id: ch1.id,
            content: "same here".to_string(),
            parent_id: Some(top_level.id),
        },
    )
    .await
    .unwrap();
    assert_eq!(reply.parent_id, Some(top_level.id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn soft_deleted_comments_are_hidden_from_listing(pool: PgPool) {
    let (_, _, novel) = seed_hierarchy(&pool, "softdel").await;
    let chapter = seed_chapter(&pool, novel.id, 1, "chapter", ChapterStatus::Published).await;
    let reader = seed_user(&pool, "ghost", UserRole::Reader).await;

    let comment = CommentRepo::create(
        &pool,
        &CreateComment {
            user_id: reader.id,
            chapter_id: chapter.id,
            content: "now you see me".to_string(),
            parent_id: None,
        },
    )
    .await
    .unwrap();

    sqlx::query("UPDATE comments SET is_deleted = true WHERE id = $1")
        .bind(comment.id)
        .execute(&pool)
        .await
        .unwrap();

    let visible = CommentRepo::list_by_chapter(&pool, chapter.id).await.unwrap();
    assert!(visible.is_empty());
}
