use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone, PartialEq)]
pub struct Review {
	pub review_id: String,
	pub movie_info_id: i64,
	pub comment: String,
	pub rating: f64,
}

impl Review {
	/// Overwrites the mutable part of a review. `review_id` and `movie_info_id`
	/// are fixed at creation.
	pub fn update(&mut self, body: &UpdateReviewSchema) {
		self.comment = body.comment.to_owned();
		self.rating = body.rating;
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "rating_is_number", skip_on_field_errors = false))]
pub struct AddReviewSchema {
	pub review_id: String,
	// nullable on the wire so validation can report it
	#[serde(default)]
	#[validate(required(message = "movieInfoId must not be null"))]
	pub movie_info_id: Option<i64>,
	#[serde(default)]
	pub comment: String,
	#[validate(range(min = 0.0, message = "rating must not be negative"))]
	pub rating: f64,
}

// `range` lets NaN through
fn rating_is_number(body: &AddReviewSchema) -> Result<(), ValidationError> {
	if body.rating.is_nan() {
		let mut error = ValidationError::new("rating");
		error.message = Some(Cow::from("rating must not be negative"));
		return Err(error);
	}
	Ok(())
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewSchema {
	#[serde(default)]
	pub comment: String,
	pub rating: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilteredReview {
	pub review_id: String,
	pub movie_info_id: i64,
	pub comment: String,
	pub rating: f64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsFilterOptions {
	pub movie_info_id: Option<i64>,
}
