pub mod display;
pub mod hole;
pub mod round;
pub mod scorecard;

pub use display::*;
pub use hole::*;
pub use round::*;
pub use scorecard::*;
