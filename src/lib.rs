extern crate self as phase_pipeline;

pub mod systems;
pub mod world;
pub mod listeners;
pub mod error;
pub mod clock;
pub mod pipeline;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::world::*;
	pub use crate::clock::{FrameClock, FrameStats};
	pub use crate::pipeline::Pipeline;
	pub use crate::error::PipelineError;
	pub use crate::listeners::{shared_listener, PipelineListener, SharedListener};
}

#[cfg(test)]
mod tests;
