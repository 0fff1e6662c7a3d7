pub mod error;
pub mod reviews;
pub mod stream;

pub use self::error::*;
pub use self::reviews::*;
pub use self::stream::*;
