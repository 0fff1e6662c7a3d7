use actix_web::web;

use crate::api::CustomError;
use crate::controllers::reviews::{
	add_review_handler, delete_review_handler, get_reviews_handler, get_reviews_stream_handler,
	update_review_handler,
};

pub fn config(conf: &mut web::ServiceConfig) {
	// undecodable bodies and query strings answer like failed validation
	let json_config = web::JsonConfig::default()
		.error_handler(|err, _req| CustomError::Validation(err.to_string()).into());
	let query_config = web::QueryConfig::default()
		.error_handler(|err, _req| CustomError::Validation(err.to_string()).into());

	// the stream route goes before `/reviews/{id}`
	let scope = web::scope("/v1")
		.app_data(json_config)
		.app_data(query_config)
		.service(get_reviews_stream_handler)
		.service(add_review_handler)
		.service(get_reviews_handler)
		.service(update_review_handler)
		.service(delete_review_handler);

	conf.service(scope);
}
