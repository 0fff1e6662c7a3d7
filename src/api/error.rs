use actix_web::{
	http::{header::ContentType, StatusCode},
	HttpResponse, ResponseError,
};
use thiserror::Error;

/// Every failure a review handler can surface.
///
/// Bodies are the plain-text message, never JSON. A missing review is not an
/// error: handlers answer `404` with an empty body themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CustomError {
	/// One or more field rules failed on create, or the request could not be
	/// decoded at all.
	#[error("{0}")]
	Validation(String),

	/// The storage layer failed.
	#[error("{0}")]
	Storage(String),
}

impl From<sqlx::Error> for CustomError {
	fn from(err: sqlx::Error) -> Self {
		CustomError::Storage(err.to_string())
	}
}

impl ResponseError for CustomError {
	fn status_code(&self) -> StatusCode {
		match self {
			CustomError::Validation(_) => StatusCode::BAD_REQUEST,
			CustomError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if status.is_server_error() {
			log::error!("request failed: {:?}", self);
		} else {
			log::warn!("request rejected: {}", self);
		}

		HttpResponse::build(status)
			.insert_header(ContentType::plaintext())
			.body(self.to_string())
	}
}
