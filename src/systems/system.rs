use crate::world::{World, WorldHandle};
use crate::systems::Phase;
use parking_lot::Mutex;
use std::sync::Arc;

/// A [System] shared between the caller and every collection it was filed into.
pub type SharedSystem<W> = Arc<Mutex<dyn System<W>>>;

/// The result every system hook returns. Failures are opaque to the pipeline.
pub type HookResult = anyhow::Result<()>;

/// It provides the logic for modifying the state of a [World].
///
/// A system opts into lifecycle phases by returning `Some(self)` from the matching
/// capability cast; any combination is allowed. `#[derive(System)]` generates these casts:
///
/// ```ignore
/// #[derive(System)]
/// #[system(init, run)]
/// struct Movement;
/// ```
pub trait System<W: World>: Send + 'static {
	/// Human-readable name, used for logging only.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Receives the world handle before the system is filed.
	/// **This function should not be called by user code.**
	fn inject(&mut self, _world: &WorldHandle<W>) {}

	fn as_pre_init(&mut self) -> Option<&mut dyn PreInitSystem> {
		None
	}

	fn as_init(&mut self) -> Option<&mut dyn InitSystem> {
		None
	}

	fn as_run(&mut self) -> Option<&mut dyn RunSystem> {
		None
	}
}

/// Setup that must happen before any [InitSystem] runs.
pub trait PreInitSystem {
	fn pre_initialize(&mut self) -> HookResult;

	/// Called after every [`InitSystem::destroy`] has completed.
	fn pre_destroy(&mut self) -> HookResult;
}

pub trait InitSystem {
	fn initialize(&mut self) -> HookResult;
	fn destroy(&mut self) -> HookResult;
}

pub trait RunSystem {
	/// The phase this system ticks in. Queried once, when the system is added.
	fn phase(&self) -> Phase;

	/// Executes the system.
	fn run(&mut self) -> HookResult;
}

/// Wraps `system` into a [SharedSystem].
pub fn shared<W: World, S: System<W>>(system: S) -> SharedSystem<W> {
	Arc::new(Mutex::new(system))
}
