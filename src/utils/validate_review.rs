use validator::Validate;

use crate::{
	api::CustomError,
	models::{AddReviewSchema, Review},
};

pub const MOVIE_INFO_ID_REQUIRED: &str = "movieInfoId must not be null";
pub const RATING_NOT_NEGATIVE: &str = "rating must not be negative";

/// Applies the `Validate` rules of [`AddReviewSchema`] before a review is
/// created.
///
/// Every rule is checked, so a request breaking several of them gets all the
/// messages back at once, sorted and joined with `", "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewValidator;

impl ReviewValidator {
	pub fn new() -> Self {
		Self
	}

	pub fn violations(&self, body: &AddReviewSchema) -> Vec<String> {
		let mut violations: Vec<String> = match body.validate() {
			Ok(()) => Vec::new(),
			Err(errors) => errors
				.field_errors()
				.values()
				.flat_map(|errors| errors.iter())
				.map(|error| match &error.message {
					Some(message) => message.to_string(),
					None => error.code.to_string(),
				})
				.collect(),
		};

		violations.sort_unstable();
		violations.dedup();
		violations
	}

	pub fn validate(&self, body: &AddReviewSchema) -> Result<Review, CustomError> {
		let violations = self.violations(body);
		log::info!("review field violations: {:?}", violations);

		match body.movie_info_id {
			Some(movie_info_id) if violations.is_empty() => Ok(Review {
				review_id: body.review_id.to_owned(),
				movie_info_id,
				comment: body.comment.to_owned(),
				rating: body.rating,
			}),
			_ => Err(CustomError::Validation(violations.join(", "))),
		}
	}
}
