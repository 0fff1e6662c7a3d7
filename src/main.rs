mod api;
mod config;
mod controllers;
mod models;
mod utils;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;

use crate::api::{InMemoryReviewRepository, PgReviewRepository, ReviewRepository, ReviewStream};
use crate::utils::ReviewValidator;

pub struct AppState {
	reviews: Arc<dyn ReviewRepository>,
	stream: ReviewStream,
	validator: ReviewValidator,
}

impl AppState {
	pub fn new(reviews: Arc<dyn ReviewRepository>, stream: ReviewStream) -> Self {
		AppState {
			reviews,
			stream,
			validator: ReviewValidator::new(),
		}
	}
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	if std::env::var_os("RUST_LOG").is_none() {
		std::env::set_var("RUST_LOG", "actix_web=info,movie_reviews=info");
	}
	dotenv().ok();
	env_logger::init();

	let config = Config::init();

	let reviews: Arc<dyn ReviewRepository> = match &config.database_url {
		Some(database_url) => {
			let pool = match PgPoolOptions::new()
				.max_connections(config.max_connections)
				.connect(database_url)
				.await
			{
				Ok(pool) => {
					log::info!("✅ Connection to the database is successful!");
					pool
				}
				Err(err) => {
					log::error!("🔥 Failed to connect to the database: {:?}", err);
					std::process::exit(1);
				}
			};

			match PgReviewRepository::new(pool).await {
				Ok(repository) => Arc::new(repository),
				Err(err) => {
					log::error!("🔥 Failed to prepare the reviews table: {}", err);
					std::process::exit(1);
				}
			}
		}
		None => {
			log::warn!("DATABASE_URL is not set, reviews are kept in memory");
			Arc::new(InMemoryReviewRepository::new())
		}
	};

	let state = web::Data::new(AppState::new(
		reviews,
		ReviewStream::new(config.stream_capacity),
	));

	log::info!(
		"🚀 Server started successfully on {}:{}",
		config.host,
		config.port
	);

	HttpServer::new(move || {
		App::new()
			.app_data(state.clone())
			.configure(controllers::config)
			.wrap(Cors::permissive())
			.wrap(Logger::default())
	})
	.bind((config.host.as_str(), config.port))?
	.run()
	.await
}
