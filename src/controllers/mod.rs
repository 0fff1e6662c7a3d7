pub mod config;
pub mod reviews;

pub use self::config::config;
