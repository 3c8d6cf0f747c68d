//! Fixed-timestep frame driver for a [Pipeline].

use crate::pipeline::Pipeline;
use crate::error::Result;
use crate::world::World;

const DEFAULT_FIXED_TIMESTEP: f64 = 1.0 / 60.0;
const DEFAULT_MAX_FRAME_TIME: f64 = 0.25;

/// What a single [`FrameClock::advance`] call did.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct FrameStats {
	/// Number of fixed update steps consumed this frame.
	pub fixed_steps: u32,
}

/// Accumulates frame time and ticks a [Pipeline] once per frame, running as many
/// fixed updates as the accumulated time allows before the update and late update phases.
#[derive(Debug, Clone)]
pub struct FrameClock {
	/// Fixed timestep interval in seconds, always finite and positive
	fixed_timestep: f64,
	/// Upper bound applied to a single frame's delta in seconds, always finite and non-negative
	max_frame_time: f64,
	/// Total elapsed time in seconds
	total_time: f64,
	accumulator: f64,
}

impl Default for FrameClock {
	fn default() -> Self {
		Self {
			fixed_timestep: DEFAULT_FIXED_TIMESTEP,
			max_frame_time: DEFAULT_MAX_FRAME_TIME,
			total_time: 0.0,
			accumulator: 0.0,
		}
	}
}

impl FrameClock {
	/// Creates a clock stepping every `fixed_timestep` seconds.
	///
	/// Panics unless `fixed_timestep` is finite and positive.
	pub fn new(fixed_timestep: f64) -> Self {
		let mut clock = Self::default();
		clock.set_fixed_timestep(fixed_timestep);
		clock
	}

	/// Panics unless `hz` is finite and positive.
	pub fn with_fixed_rate(hz: f64) -> Self {
		assert!(hz.is_finite() && hz > 0.0, "Fixed rate must be finite and positive, got {hz}");
		Self::new(1.0 / hz)
	}

	pub fn fixed_timestep(&self) -> f64 {
		self.fixed_timestep
	}

	/// Panics unless `fixed_timestep` is finite and positive.
	pub fn set_fixed_timestep(&mut self, fixed_timestep: f64) {
		assert!(
			fixed_timestep.is_finite() && fixed_timestep > 0.0,
			"Fixed timestep must be finite and positive, got {fixed_timestep}"
		);
		self.fixed_timestep = fixed_timestep;
	}

	pub fn max_frame_time(&self) -> f64 {
		self.max_frame_time
	}

	/// Panics unless `max_frame_time` is finite and non-negative.
	pub fn set_max_frame_time(&mut self, max_frame_time: f64) {
		assert!(
			max_frame_time.is_finite() && max_frame_time >= 0.0,
			"Max frame time must be finite and non-negative, got {max_frame_time}"
		);
		self.max_frame_time = max_frame_time;
	}

	pub fn total_time(&self) -> f64 {
		self.total_time
	}

	/// Advances the clock by `dt` seconds and ticks `pipeline`.
	///
	/// Negative or non-finite deltas count as zero. Errors from the pipeline are returned
	/// as-is; time already accumulated is kept.
	pub fn advance<W: World>(&mut self, pipeline: &mut Pipeline<W>, dt: f64) -> Result<FrameStats> {
		let dt = if dt.is_finite() { dt } else { 0.0 };
		// Clamp to avoid a spiral of death after a long stall
		let dt = dt.max(0.0).min(self.max_frame_time);
		self.total_time += dt;
		self.accumulator += dt;

		let mut stats = FrameStats::default();
		while self.accumulator >= self.fixed_timestep {
			self.accumulator -= self.fixed_timestep;
			pipeline.run_fixed_update()?;
			stats.fixed_steps += 1;
		}

		pipeline.run_update()?;
		pipeline.run_late_update()?;
		Ok(stats)
	}

	/// How far the clock is between the last fixed step and the next one, in `[0, 1)`.
	pub fn interpolation_alpha(&self) -> f64 {
		self.accumulator / self.fixed_timestep
	}
}
