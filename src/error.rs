//! Errors reported by the [Pipeline](crate::pipeline::Pipeline).
//!
//! Contract violations are programmer errors and are returned immediately; nothing is
//! retried or logged by the pipeline itself.

use crate::systems::PipelineState;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
	#[error("cannot {operation} while the pipeline is {state}")]
	IllegalState {
		operation: &'static str,
		state: PipelineState,
	},

	#[error("listener is already registered")]
	ListenerAlreadyExists,

	/// A system hook failed. The error is passed through untouched.
	#[error(transparent)]
	System(#[from] anyhow::Error),
}

impl PipelineError {
	pub(crate) fn illegal_state(operation: &'static str, state: PipelineState) -> Self {
		PipelineError::IllegalState { operation, state }
	}
}

/// Result type alias for [Pipeline](crate::pipeline::Pipeline) operations
pub type Result<T> = std::result::Result<T, PipelineError>;
