//! Observers notified when a [Pipeline](crate::pipeline::Pipeline) is destroyed.

mod listener_set;

pub(crate) use listener_set::*;

use parking_lot::Mutex;
use std::sync::Arc;

/// A listener shared between the caller and the pipeline. Identity is the allocation.
pub type SharedListener = Arc<Mutex<dyn PipelineListener>>;

pub trait PipelineListener: Send + 'static {
	/// Fired once, at the start of [`destroy`](crate::pipeline::Pipeline::destroy),
	/// before any system is torn down.
	fn on_destroyed(&mut self);
}

/// Wraps `listener` into a [SharedListener].
pub fn shared_listener<L: PipelineListener>(listener: L) -> SharedListener {
	Arc::new(Mutex::new(listener))
}
