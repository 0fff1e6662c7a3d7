pub mod filter_review_record;
pub mod validate_review;

pub use self::filter_review_record::filter_review_record;
pub use self::validate_review::ReviewValidator;
