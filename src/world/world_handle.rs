use parking_lot::{Mutex, MutexGuard};
use crate::world::World;
use std::sync::Arc;

/// A shared, cloneable reference to a [World].
///
/// Every clone points at the same world; the lifetime of the world is managed by whoever
/// holds the handles, never by the pipeline.
pub struct WorldHandle<W> {
	inner: Arc<Mutex<W>>,
}

impl<W: World> WorldHandle<W> {
	pub fn new(world: W) -> Self {
		Self {
			inner: Arc::new(Mutex::new(world)),
		}
	}

	/// Locks the world for the duration of the returned guard.
	///
	/// The lock is not re-entrant: a hook must release its guard before returning.
	#[inline(always)]
	pub fn lock(&self) -> MutexGuard<'_, W> {
		self.inner.lock()
	}

	/// Returns true if both handles refer to the same world.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}

	pub(crate) fn flush(&self) {
		log::trace!("flushing deferred world mutations");
		self.inner.lock().process_deferred_mutations();
	}
}

impl<W> Clone for WorldHandle<W> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<W: World> From<Arc<Mutex<W>>> for WorldHandle<W> {
	fn from(inner: Arc<Mutex<W>>) -> Self {
		Self { inner }
	}
}
