use async_trait::async_trait;

use crate::{api::CustomError, models::Review};

/// Storage gateway for the review collection.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
	/// Insert or replace a review, keyed by `review_id`.
	async fn save(&self, review: Review) -> Result<Review, CustomError>;

	async fn find_all(&self) -> Result<Vec<Review>, CustomError>;

	async fn find_by_movie_info_id(&self, movie_info_id: i64) -> Result<Vec<Review>, CustomError>;

	async fn find_by_id(&self, review_id: &str) -> Result<Option<Review>, CustomError>;

	/// Removing an id that does not exist is not an error.
	async fn delete_by_id(&self, review_id: &str) -> Result<(), CustomError>;
}
