pub mod reviews;

pub use self::reviews::*;
