pub mod memory;
pub mod postgres;
pub mod repository;

pub use self::memory::InMemoryReviewRepository;
pub use self::postgres::PgReviewRepository;
pub use self::repository::ReviewRepository;
