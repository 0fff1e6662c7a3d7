use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::ReviewRepository;
use crate::{api::CustomError, models::Review};

/// In-process review collection, kept in insertion order.
#[derive(Default)]
pub struct InMemoryReviewRepository {
	reviews: Mutex<Vec<Review>>,
}

impl InMemoryReviewRepository {
	pub fn new() -> Self {
		Self::default()
	}

	#[cfg(test)]
	pub fn with_reviews(reviews: Vec<Review>) -> Self {
		Self {
			reviews: Mutex::new(reviews),
		}
	}

	fn lock(&self) -> MutexGuard<'_, Vec<Review>> {
		// a panicking writer leaves the vec intact, so keep serving it
		self.reviews.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
	async fn save(&self, review: Review) -> Result<Review, CustomError> {
		let mut reviews = self.lock();
		match reviews.iter_mut().find(|r| r.review_id == review.review_id) {
			Some(existing) => *existing = review.clone(),
			None => reviews.push(review.clone()),
		}
		Ok(review)
	}

	async fn find_all(&self) -> Result<Vec<Review>, CustomError> {
		Ok(self.lock().clone())
	}

	async fn find_by_movie_info_id(&self, movie_info_id: i64) -> Result<Vec<Review>, CustomError> {
		Ok(self
			.lock()
			.iter()
			.filter(|r| r.movie_info_id == movie_info_id)
			.cloned()
			.collect())
	}

	async fn find_by_id(&self, review_id: &str) -> Result<Option<Review>, CustomError> {
		Ok(self.lock().iter().find(|r| r.review_id == review_id).cloned())
	}

	async fn delete_by_id(&self, review_id: &str) -> Result<(), CustomError> {
		self.lock().retain(|r| r.review_id != review_id);
		Ok(())
	}
}
