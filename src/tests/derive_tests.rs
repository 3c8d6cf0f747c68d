use crate::tests::fakes::{new_trace, take, FakeWorld};
use crate::systems::{HookResult, InitSystem, Phase, PreInitSystem, RunSystem, System};
use crate::world::{World, WorldHandle};
use crate::pipeline::Pipeline;

#[derive(System)]
#[system(init, run, world = "crate::tests::fakes::FakeWorld")]
struct Spawner {
	#[inject]
	world: Option<WorldHandle<FakeWorld>>,
	next: u32,
}

impl InitSystem for Spawner {
	fn initialize(&mut self) -> HookResult {
		self.spawn()
	}

	fn destroy(&mut self) -> HookResult {
		Ok(())
	}
}

impl RunSystem for Spawner {
	fn phase(&self) -> Phase {
		Phase::FixedUpdate
	}

	fn run(&mut self) -> HookResult {
		self.spawn()
	}
}

impl Spawner {
	fn spawn(&mut self) -> HookResult {
		let world = self
			.world
			.as_ref()
			.ok_or_else(|| anyhow::anyhow!("world was not injected"))?;
		self.next += 1;
		world.lock().spawn(self.next);
		Ok(())
	}
}

/// Generic over any world.
#[derive(System)]
#[system(pre_init)]
struct Marker;

impl PreInitSystem for Marker {
	fn pre_initialize(&mut self) -> HookResult {
		Ok(())
	}

	fn pre_destroy(&mut self) -> HookResult {
		Ok(())
	}
}

struct NullWorld;

impl World for NullWorld {
	fn process_deferred_mutations(&mut self) {}
}

#[test]
pub fn derived_capabilities_are_filed() {
	let trace = new_trace();
	let world = FakeWorld::handle(&trace);
	let mut pipeline = Pipeline::new(world.clone());
	pipeline
		.add_system(Spawner { world: None, next: 0 })
		.add_system(Marker);

	let mut out = Vec::new();
	pipeline.get_pre_init_systems(Some(&mut out));
	assert_eq!(out.len(), 1);
	pipeline.get_init_systems(Some(&mut out));
	assert_eq!(out.len(), 1);
	pipeline.get_run_systems(Phase::FixedUpdate, Some(&mut out));
	assert_eq!(out.len(), 1);
	pipeline.get_run_systems(Phase::Update, Some(&mut out));
	assert!(out.is_empty());

	pipeline.initialize().unwrap();
	pipeline.run_fixed_update().unwrap();
	assert_eq!(world.lock().entities, [1, 2], "Injected world handle was not used");
	assert_eq!(take(&trace).len(), 3, "Expected one flush per hook");
}

#[test]
pub fn derived_system_is_generic_without_world() {
	let mut pipeline = Pipeline::new(WorldHandle::new(NullWorld));
	pipeline.add_system(Marker);
	pipeline.initialize().unwrap();
	pipeline.destroy().unwrap();

	let mut marker = Marker;
	assert!(System::<NullWorld>::as_pre_init(&mut marker).is_some());
	assert!(System::<NullWorld>::as_init(&mut marker).is_none());
	assert!(System::<NullWorld>::as_run(&mut marker).is_none());
	assert!(System::<NullWorld>::name(&marker).ends_with("Marker"));
}
