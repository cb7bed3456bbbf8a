//! Type-safe wrappers for lottery draw data.

pub mod ball;
pub mod category;

pub use ball::BallNumber;
pub use category::Category;
