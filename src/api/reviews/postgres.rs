use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::ReviewRepository;
use crate::{api::CustomError, models::Review};

pub struct PgReviewRepository {
	db: Pool<Postgres>,
}

impl PgReviewRepository {
	/// Wraps the pool and makes sure the `reviews` table exists.
	pub async fn new(db: Pool<Postgres>) -> Result<Self, CustomError> {
		sqlx::query(
			"CREATE TABLE IF NOT EXISTS reviews (
				review_id TEXT PRIMARY KEY,
				movie_info_id BIGINT NOT NULL,
				comment TEXT NOT NULL,
				rating DOUBLE PRECISION NOT NULL
			)",
		)
		.execute(&db)
		.await?;

		sqlx::query("CREATE INDEX IF NOT EXISTS reviews_movie_info_id_idx ON reviews (movie_info_id)")
			.execute(&db)
			.await?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
	async fn save(&self, review: Review) -> Result<Review, CustomError> {
		let saved = sqlx::query_as::<_, Review>(
			"INSERT INTO reviews (review_id, movie_info_id, comment, rating)
			VALUES ($1, $2, $3, $4)
			ON CONFLICT (review_id) DO UPDATE
			SET movie_info_id = EXCLUDED.movie_info_id,
				comment = EXCLUDED.comment,
				rating = EXCLUDED.rating
			RETURNING *",
		)
		.bind(&review.review_id)
		.bind(review.movie_info_id)
		.bind(&review.comment)
		.bind(review.rating)
		.fetch_one(&self.db)
		.await?;

		Ok(saved)
	}

	async fn find_all(&self) -> Result<Vec<Review>, CustomError> {
		let reviews = sqlx::query_as::<_, Review>("SELECT * FROM reviews")
			.fetch_all(&self.db)
			.await?;

		Ok(reviews)
	}

	async fn find_by_movie_info_id(&self, movie_info_id: i64) -> Result<Vec<Review>, CustomError> {
		let reviews = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE movie_info_id = $1")
			.bind(movie_info_id)
			.fetch_all(&self.db)
			.await?;

		Ok(reviews)
	}

	async fn find_by_id(&self, review_id: &str) -> Result<Option<Review>, CustomError> {
		let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE review_id = $1")
			.bind(review_id)
			.fetch_optional(&self.db)
			.await?;

		Ok(review)
	}

	async fn delete_by_id(&self, review_id: &str) -> Result<(), CustomError> {
		sqlx::query("DELETE FROM reviews WHERE review_id = $1")
			.bind(review_id)
			.execute(&self.db)
			.await?;

		Ok(())
	}
}
