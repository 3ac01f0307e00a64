//! Shared helpers for the factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter, used to keep generated keys unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game and one review per rating.
///
/// Reviews are created oldest first, one minute apart, so the last rating is the
/// newest review.
///
/// # Arguments
/// - `db` - Database connection
/// - `ratings` - Rating of each review to create
///
/// # Returns
/// - `Ok((game, reviews))` - The game and its reviews in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_game_with_reviews(
    db: &DatabaseConnection,
    ratings: &[i32],
) -> Result<(entity::game::Model, Vec<entity::review::Model>), DbErr> {
    let game = crate::factory::game::create_game(db).await?;

    let now = chrono::Utc::now();
    let count = ratings.len() as i64;
    let mut reviews = Vec::with_capacity(ratings.len());
    for (i, rating) in ratings.iter().enumerate() {
        let review = crate::factory::review::ReviewFactory::new(db, game.appid)
            .rating(*rating)
            .created_at(now - chrono::Duration::minutes(count - i as i64))
            .build()
            .await?;
        reviews.push(review);
    }

    Ok((game, reviews))
}
