//! Bevy ECS Systems - The zombify coordinator, its five handlers and the systems around it

mod ai;
mod appearance;
mod cleanup;
mod cloning;
mod combat;
mod mind;
mod movement;
mod physiology;
mod transform;
mod triggers;

pub use ai::*;
pub use appearance::*;
pub use cleanup::*;
pub use cloning::*;
pub use combat::*;
pub use mind::*;
pub use movement::*;
pub use physiology::*;
pub use transform::*;
pub use triggers::*;
