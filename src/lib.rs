pub mod error;
pub mod model;
pub mod score;

pub use error::CoreError;
