use crate::systems::{Phase, SharedSystem};
use crate::error::{PipelineError, Result};
use crate::world::{World, WorldHandle};
use std::fmt::{Display, Formatter};

/// Lifecycle of a [Pipeline](crate::pipeline::Pipeline).
///
/// Only ever moves forward. The transient `Initializing`/`Destroying` states are held
/// while hooks execute; a failing hook leaves the pipeline parked in them.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub enum PipelineState {
	#[default]
	Constructed,
	Initializing,
	Initialized,
	Destroying,
	Destroyed,
}

impl Display for PipelineState {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		std::fmt::Debug::fmt(self, f)
	}
}

/// Per-phase ordered collections of systems, filed by capability at registration time.
pub(crate) struct SystemStore<W: World> {
	state: PipelineState,
	pre_init: Vec<SharedSystem<W>>,
	init: Vec<SharedSystem<W>>,
	run: [Vec<SharedSystem<W>>; 3],
}

impl<W: World> SystemStore<W> {
	pub fn new() -> Self {
		Self {
			state: PipelineState::default(),
			pre_init: Vec::default(),
			init: Vec::default(),
			run: Default::default(),
		}
	}

	#[inline(always)]
	pub fn state(&self) -> PipelineState {
		self.state
	}

	/// Files `system` into every collection matching its capabilities.
	/// The system must already have been injected.
	pub fn add_system(&mut self, system: SharedSystem<W>) {
		let (name, pre_init, init, phase) = {
			let mut guard = system.lock();
			let pre_init = guard.as_pre_init().is_some();
			let init = guard.as_init().is_some();
			let phase = guard.as_run().map(|run| run.phase());
			(guard.name(), pre_init, init, phase)
		};

		log::trace!("filing system {name}: pre_init={pre_init} init={init} run={phase:?}");

		if pre_init {
			self.pre_init.push(system.clone());
		}
		if init {
			self.init.push(system.clone());
		}
		if let Some(phase) = phase {
			self.run[phase.index()].push(system);
		}
	}

	pub fn pre_init_systems(&self) -> &[SharedSystem<W>] {
		&self.pre_init
	}

	pub fn init_systems(&self) -> &[SharedSystem<W>] {
		&self.init
	}

	pub fn run_systems(&self, phase: Phase) -> &[SharedSystem<W>] {
		&self.run[phase.index()]
	}

	pub fn setup_systems(&mut self, world: &WorldHandle<W>) -> Result<()> {
		match self.state {
			PipelineState::Constructed => {
				self.state = PipelineState::Initializing;
				log::debug!(
					"initializing {} pre-init and {} init systems",
					self.pre_init.len(),
					self.init.len()
				);

				for system in &self.pre_init {
					let mut guard = system.lock();
					let name = guard.name();
					if let Some(hook) = guard.as_pre_init() {
						log::trace!("pre-initializing {name}");
						hook.pre_initialize()?;
					} else {
						capability_lost(name, "pre-init");
					}
					drop(guard);
					world.flush();
				}

				for system in &self.init {
					let mut guard = system.lock();
					let name = guard.name();
					if let Some(hook) = guard.as_init() {
						log::trace!("initializing {name}");
						hook.initialize()?;
					} else {
						capability_lost(name, "init");
					}
					drop(guard);
					world.flush();
				}

				self.state = PipelineState::Initialized;
				log::debug!("pipeline initialized");
				Ok(())
			},
			state => Err(PipelineError::illegal_state("initialize", state)),
		}
	}

	/// Fails unless the pipeline is [`Initialized`](PipelineState::Initialized).
	pub fn ensure_initialized(&self, operation: &'static str) -> Result<()> {
		match self.state {
			PipelineState::Initialized => Ok(()),
			state => Err(PipelineError::illegal_state(operation, state)),
		}
	}

	pub fn run_systems_in(&mut self, phase: Phase, world: &WorldHandle<W>) -> Result<()> {
		for system in &self.run[phase.index()] {
			let mut guard = system.lock();
			let name = guard.name();
			if let Some(hook) = guard.as_run() {
				log::trace!("running {name} ({phase})");
				hook.run()?;
			} else {
				capability_lost(name, "run");
			}
			drop(guard);
			world.flush();
		}
		Ok(())
	}

	/// Tears down init systems, then pre-init systems, each in registration order.
	/// Listeners must already have been notified.
	pub fn destroy_systems(&mut self) -> Result<()> {
		self.ensure_initialized("destroy")?;
		self.state = PipelineState::Destroying;
		log::debug!(
			"destroying {} init and {} pre-init systems",
			self.init.len(),
			self.pre_init.len()
		);

		for system in &self.init {
			let mut guard = system.lock();
			let name = guard.name();
			if let Some(hook) = guard.as_init() {
				log::trace!("destroying {name}");
				hook.destroy()?;
			} else {
				capability_lost(name, "init");
			}
		}

		for system in &self.pre_init {
			let mut guard = system.lock();
			let name = guard.name();
			if let Some(hook) = guard.as_pre_init() {
				log::trace!("pre-destroying {name}");
				hook.pre_destroy()?;
			} else {
				capability_lost(name, "pre-init");
			}
		}

		self.init.clear();
		self.run.iter_mut().for_each(Vec::clear);
		self.state = PipelineState::Destroyed;
		log::debug!("pipeline destroyed");
		Ok(())
	}
}

/// The system no longer exposes a capability it was filed under at registration time.
/// Its hook is skipped; the flush that follows it still runs.
fn capability_lost(name: &str, capability: &str) {
	log::warn!("system {name} no longer exposes its {capability} capability, skipping its hook");
}
