//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Operations that touch
//! more than one row (chapter create + novel counter bump, rating upsert
//! + average recompute) run inside a single transaction.

pub mod chapter_repo;
pub mod comment_repo;
pub mod follow_repo;
pub mod genre_repo;
pub mod library_repo;
pub mod notification_repo;
pub mod novel_repo;
pub mod rating_repo;
pub mod reading_progress_repo;
pub mod stats_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use chapter_repo::ChapterRepo;
pub use comment_repo::CommentRepo;
pub use follow_repo::FollowRepo;
pub use genre_repo::GenreRepo;
pub use library_repo::LibraryRepo;
pub use notification_repo::NotificationRepo;
pub use novel_repo::NovelRepo;
pub use rating_repo::RatingRepo;
pub use reading_progress_repo::ReadingProgressRepo;
pub use stats_repo::StatsRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
