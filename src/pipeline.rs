use crate::systems::{shared, Phase, PipelineState, SharedSystem, System, SystemStore};
use crate::world::{HookInjector, Injector, World, WorldHandle};
use crate::listeners::{ListenerSet, SharedListener};
use crate::error::Result;
use paste::paste;

/// Drives registered [systems](System) through their lifecycle phases over one [World].
///
/// Systems are filed by capability when [added](Pipeline::add), set up once by
/// [`initialize`](Pipeline::initialize), ticked by the `run_*` entry points any number of
/// times, and torn down by [`destroy`](Pipeline::destroy). The world's deferred mutations are
/// flushed after every single hook invocation of the setup and run phases.
pub struct Pipeline<W: World> {
	world: WorldHandle<W>,
	injector: Box<dyn Injector<W>>,
	system_store: SystemStore<W>,
	listeners: ListenerSet,
	active: bool,
}

macro_rules! impl_run_phase {
    ($($phase: ident),*) => {
        paste! {
            impl<W: World> Pipeline<W> {
                $(
                    #[doc = "Runs every [`" $phase "`](Phase::" $phase ") system in registration order."]
                    #[doc = ""]
                    #[doc = "Fails unless the pipeline is initialized; does nothing while inactive."]
                    #[inline]
                    pub fn [<run_ $phase:snake>](&mut self) -> Result<()> {
                        self.run(Phase::$phase)
                    }
                )*
            }
        }
    };
}

impl_run_phase!(Update, FixedUpdate, LateUpdate);

impl<W: World> Pipeline<W> {
	/// Creates a pipeline bound to `world`, using the [HookInjector].
	pub fn new(world: WorldHandle<W>) -> Self {
		Self::with_injector(world, HookInjector)
	}

	pub fn with_injector(world: WorldHandle<W>, injector: impl Injector<W> + 'static) -> Self {
		Self {
			world,
			injector: Box::new(injector),
			system_store: SystemStore::new(),
			listeners: ListenerSet::new(),
			active: true,
		}
	}

	pub fn world(&self) -> &WorldHandle<W> {
		&self.world
	}

	pub fn state(&self) -> PipelineState {
		self.system_store.state()
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Gates the `run_*` entry points. Lifecycle checks still apply while inactive.
	pub fn set_active(&mut self, active: bool) {
		self.active = active;
	}

	/// Injects `system` and files it into every phase it takes part in.
	///
	/// Adding the same handle twice files it twice.
	pub fn add(&mut self, system: SharedSystem<W>) -> &mut Self {
		if self.state() != PipelineState::Constructed {
			log::debug!("system added after initialization; its setup hooks will not run");
		}
		self.injector.inject(&self.world, &mut *system.lock());
		self.system_store.add_system(system);
		self
	}

	/// Wraps `system` in a [SharedSystem] and [adds](Pipeline::add) it.
	pub fn add_system<S: System<W>>(&mut self, system: S) -> &mut Self {
		self.add(shared(system))
	}

	/// Fails with [`ListenerAlreadyExists`](crate::error::PipelineError::ListenerAlreadyExists)
	/// if the same listener is already registered.
	pub fn add_listener(&mut self, listener: SharedListener) -> Result<()> {
		self.listeners.add(listener)
	}

	/// Unregisters `listener`. Unknown listeners are ignored; returns whether it was registered.
	pub fn remove_listener(&mut self, listener: &SharedListener) -> bool {
		self.listeners.remove(listener)
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.len()
	}

	/// Replaces the contents of `out` with the pre-init systems, in registration order.
	pub fn get_pre_init_systems(&self, out: Option<&mut Vec<SharedSystem<W>>>) {
		copy_into(self.system_store.pre_init_systems(), out);
	}

	/// Replaces the contents of `out` with the init systems, in registration order.
	pub fn get_init_systems(&self, out: Option<&mut Vec<SharedSystem<W>>>) {
		copy_into(self.system_store.init_systems(), out);
	}

	/// Replaces the contents of `out` with the systems of `phase`, in registration order.
	pub fn get_run_systems(&self, phase: Phase, out: Option<&mut Vec<SharedSystem<W>>>) {
		copy_into(self.system_store.run_systems(phase), out);
	}

	/// Runs every pre-init hook, then every init hook. Must be called exactly once,
	/// before any other lifecycle operation.
	pub fn initialize(&mut self) -> Result<()> {
		self.system_store.setup_systems(&self.world)
	}

	/// Runs every system of `phase` in registration order.
	pub fn run(&mut self, phase: Phase) -> Result<()> {
		self.system_store.ensure_initialized("run")?;
		if !self.active {
			return Ok(());
		}
		self.system_store.run_systems_in(phase, &self.world)
	}

	/// Notifies listeners (newest first), then tears down init systems and
	/// pre-init systems in registration order.
	pub fn destroy(&mut self) -> Result<()> {
		self.system_store.ensure_initialized("destroy")?;
		self.listeners.notify_destroyed();
		self.system_store.destroy_systems()?;
		self.listeners.clear();
		Ok(())
	}
}

fn copy_into<W: World>(systems: &[SharedSystem<W>], out: Option<&mut Vec<SharedSystem<W>>>) {
	if let Some(out) = out {
		out.clear();
		out.extend(systems.iter().cloned());
	}
}
