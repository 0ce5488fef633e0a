pub mod handicap;
pub mod hole;
pub mod placement;
pub mod round;
pub mod scorecard;

pub use handicap::*;
pub use hole::*;
pub use placement::*;
pub use round::*;
pub use scorecard::*;
