//! The [World] is the shared store of entities and components every [System](crate::systems::System)
//! operates on.
//!
//! The pipeline never owns a [World]: the caller hands it a [WorldHandle] at construction
//! and the pipeline only ever asks it to flush queued structural changes.

mod injector;
mod world_handle;

pub use injector::*;
pub use world_handle::*;

/// The storage side of the simulation, as seen by the pipeline.
pub trait World: Send + 'static {
	/// Applies every structural change (entity/component add/remove) queued since the last call.
	///
	/// Called after each individual system hook, so it must be cheap when nothing is queued.
	fn process_deferred_mutations(&mut self);
}
