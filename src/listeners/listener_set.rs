use crate::error::{PipelineError, Result};
use crate::listeners::SharedListener;
use std::sync::Arc;

/// Registration-ordered listeners without duplicates.
#[derive(Default)]
pub(crate) struct ListenerSet {
	listeners: Vec<SharedListener>,
}

impl ListenerSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, listener: SharedListener) -> Result<()> {
		if self.contains(&listener) {
			return Err(PipelineError::ListenerAlreadyExists);
		}
		self.listeners.push(listener);
		Ok(())
	}

	/// Removes `listener` if present; returns whether it was.
	pub fn remove(&mut self, listener: &SharedListener) -> bool {
		match self.listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
			Some(index) => {
				self.listeners.remove(index);
				true
			},
			None => false,
		}
	}

	pub fn contains(&self, listener: &SharedListener) -> bool {
		self.listeners.iter().any(|l| Arc::ptr_eq(l, listener))
	}

	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	/// Notifies every listener, most recently registered first.
	pub fn notify_destroyed(&self) {
		log::debug!("notifying {} listeners of destruction", self.listeners.len());
		for listener in self.listeners.iter().rev() {
			listener.lock().on_destroyed();
		}
	}

	pub fn clear(&mut self) {
		self.listeners.clear();
	}
}
