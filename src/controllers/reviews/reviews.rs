use crate::{
	api::CustomError,
	models::{AddReviewSchema, FilteredReview, ReviewsFilterOptions, UpdateReviewSchema},
	AppState,
};
use actix_web::{
	delete, get,
	http::header,
	post, put,
	web::{self, Bytes, Path},
	HttpResponse,
};
use futures::StreamExt;

use crate::utils::filter_review_record;

#[post("/reviews")]
pub async fn add_review_handler(
	body: web::Json<AddReviewSchema>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review = data.validator.validate(&body)?;

	let saved = filter_review_record(&data.reviews.save(review).await?);
	data.stream.publish(saved.clone());

	Ok(HttpResponse::Created().json(saved))
}

#[get("/reviews")]
pub async fn get_reviews_handler(
	opts: web::Query<ReviewsFilterOptions>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let reviews = match opts.movie_info_id {
		Some(movie_info_id) => data.reviews.find_by_movie_info_id(movie_info_id).await?,
		None => data.reviews.find_all().await?,
	};

	Ok(HttpResponse::Ok().json(
		reviews
			.iter()
			.map(filter_review_record)
			.collect::<Vec<FilteredReview>>(),
	))
}

// Only comment and rating change, and the create rules are not re-applied.
// An unknown id is answered before the body is looked at.
#[put("/reviews/{id}")]
pub async fn update_review_handler(
	path: Path<String>,
	body: Result<web::Json<UpdateReviewSchema>, actix_web::Error>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review_id = path.into_inner();
	log::info!("update review id = {}", review_id);

	let Some(mut review) = data.reviews.find_by_id(&review_id).await? else {
		return Ok(HttpResponse::NotFound().finish());
	};

	let body = body.map_err(|err| CustomError::Validation(err.to_string()))?;
	review.update(&body);
	let saved = data.reviews.save(review).await?;

	Ok(HttpResponse::Ok().json(filter_review_record(&saved)))
}

#[delete("/reviews/{id}")]
pub async fn delete_review_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review_id = path.into_inner();
	log::info!("delete review id = {}", review_id);

	if data.reviews.find_by_id(&review_id).await?.is_none() {
		return Ok(HttpResponse::NotFound().finish());
	}

	data.reviews.delete_by_id(&review_id).await?;

	Ok(HttpResponse::NoContent().finish())
}

/// Server-sent events, one `data:` frame per created review. Runs until the
/// client goes away.
#[get("/reviews/stream")]
pub async fn get_reviews_stream_handler(data: web::Data<AppState>) -> HttpResponse {
	let events = data.stream.subscribe().map(|review| {
		serde_json::to_string(&review).map(|json| Bytes::from(format!("data: {}\n\n", json)))
	});
	log::info!(
		"review stream subscribed, {} active",
		data.stream.subscriber_count()
	);

	HttpResponse::Ok()
		.content_type("text/event-stream")
		.insert_header((header::CACHE_CONTROL, "no-cache"))
		.streaming(events)
}
