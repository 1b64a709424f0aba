//! Shared seed helpers for repository integration tests.

#![allow(dead_code)]

use sqlx::PgPool;

use inkstone_db::models::chapter::{Chapter, ChapterStatus, CreateChapter};
use inkstone_db::models::genre::{CreateGenre, Genre};
use inkstone_db::models::novel::{CreateNovel, Novel, NovelStatus};
use inkstone_db::models::user::{CreateUser, User, UserRole};
use inkstone_db::repositories::{ChapterRepo, GenreRepo, NovelRepo, UserRepo};

/// Insert a user with the given username and role.
pub async fn seed_user(pool: &PgPool, username: &str, role: UserRole) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "secret".to_string(),
        role,
        display_name: None,
    };
    UserRepo::create(pool, &input, "hashed_secret")
        .await
        .expect("seed user")
}

/// Insert a genre with the given slug.
pub async fn seed_genre(pool: &PgPool, slug: &str) -> Genre {
    let input = CreateGenre {
        name: slug.to_string(),
        slug: slug.to_string(),
        description: None,
    };
    GenreRepo::create(pool, &input).await.expect("seed genre")
}

/// Insert a draft novel owned by the given author.
pub async fn seed_novel(pool: &PgPool, author_id: i64, genre_id: i64, slug: &str) -> Novel {
    let input = CreateNovel {
        title: slug.to_string(),
        slug: slug.to_string(),
        description: None,
        cover_image_url: None,
        author_id,
        status: NovelStatus::Draft,
        genre_id,
        is_premium: false,
    };
    NovelRepo::create(pool, &input).await.expect("seed novel")
}

/// Insert a chapter with the given number and content.
pub async fn seed_chapter(
    pool: &PgPool,
    novel_id: i64,
    chapter_number: i32,
    content: &str,
    status: ChapterStatus,
) -> Chapter {
    let input = CreateChapter {
        novel_id,
        chapter_number,
        title: format!("Chapter {chapter_number}"),
        content: content.to_string(),
        status,
        is_premium: false,
        coin_cost: rust_decimal::Decimal::ZERO,
    };
    ChapterRepo::create(pool, &input).await.expect("seed chapter")
}

/// Seed a full writer -> genre -> novel hierarchy and return the novel.
pub async fn seed_hierarchy(pool: &PgPool, tag: &str) -> (User, Genre, Novel) {
    let author = seed_user(pool, &format!("writer_{tag}"), UserRole::Writer).await;
    let genre = seed_genre(pool, &format!("genre-{tag}")).await;
    let novel = seed_novel(pool, author.id, genre.id, &format!("novel-{tag}")).await;
    (author, genre, novel)
}
