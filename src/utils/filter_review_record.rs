use crate::models::{FilteredReview, Review};

pub fn filter_review_record(review: &Review) -> FilteredReview {
	FilteredReview {
		review_id: review.review_id.to_owned(),
		movie_info_id: review.movie_info_id,
		comment: review.comment.to_owned(),
		rating: review.rating,
	}
}
