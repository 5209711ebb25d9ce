pub mod ai;
pub mod animation;
pub mod collision;
pub mod input;
pub mod movement;
pub mod pulse;
pub mod scoring;

pub use ai::*;
pub use animation::*;
pub use collision::*;
pub use input::*;
pub use movement::*;
pub use pulse::*;
pub use scoring::*;
