use std::{env, str::FromStr};

use crate::api::DEFAULT_STREAM_CAPACITY;

#[derive(Debug, Clone)]
pub struct Config {
	/// Absent means reviews are kept in process memory.
	pub database_url: Option<String>,
	pub max_connections: u32,
	pub host: String,
	pub port: u16,
	pub stream_capacity: usize,
}

impl Config {
	pub fn init() -> Config {
		let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
		let max_connections = parse_or("DATABASE_MAX_CONNECTIONS", 10);
		let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
		let port = parse_or("PORT", 8000);
		let stream_capacity = parse_or("STREAM_CAPACITY", DEFAULT_STREAM_CAPACITY);

		Config {
			database_url,
			max_connections,
			host,
			port,
			stream_capacity,
		}
	}
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
	match env::var(key) {
		Ok(value) => value.parse().unwrap_or_else(|_| {
			log::warn!("{} = {:?} is not valid, using {}", key, value, default);
			default
		}),
		Err(_) => default,
	}
}
