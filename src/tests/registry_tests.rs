use crate::tests::fakes::{labels, new_trace, FakeWorld, Recorder};
use crate::systems::{Phase, SharedSystem};
use crate::pipeline::Pipeline;
use crate::world::WorldHandle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

fn collect(pipeline: &Pipeline<FakeWorld>) -> [Vec<&'static str>; 5] {
	let mut out = Vec::new();
	pipeline.get_pre_init_systems(Some(&mut out));
	let pre_init = labels(&out);
	pipeline.get_init_systems(Some(&mut out));
	let init = labels(&out);
	pipeline.get_run_systems(Phase::Update, Some(&mut out));
	let update = labels(&out);
	pipeline.get_run_systems(Phase::FixedUpdate, Some(&mut out));
	let fixed = labels(&out);
	pipeline.get_run_systems(Phase::LateUpdate, Some(&mut out));
	let late = labels(&out);
	[pre_init, init, update, fixed, late]
}

#[test]
pub fn systems_are_filed_by_capability() {
	let trace = new_trace();
	let mut pipeline = Pipeline::new(FakeWorld::handle(&trace));
	pipeline
		.add_system(Recorder::new("a", &trace).pre_init().init().run(Phase::Update))
		.add_system(Recorder::new("b", &trace).init())
		.add_system(Recorder::new("c", &trace).run(Phase::FixedUpdate))
		.add_system(Recorder::new("d", &trace).pre_init().run(Phase::LateUpdate))
		.add_system(Recorder::new("e", &trace).run(Phase::Update));

	let [pre_init, init, update, fixed, late] = collect(&pipeline);
	assert_eq!(pre_init, ["a", "d"], "Pre-init systems do not match");
	assert_eq!(init, ["a", "b"], "Init systems do not match");
	assert_eq!(update, ["a", "e"], "Update systems do not match");
	assert_eq!(fixed, ["c"], "Fixed update systems do not match");
	assert_eq!(late, ["d"], "Late update systems do not match");
}

#[test]
pub fn full_capability_system_appears_once_per_collection() {
	let trace = new_trace();
	let mut pipeline = Pipeline::new(FakeWorld::handle(&trace));
	let system = Recorder::new("all", &trace).pre_init().init().run(Phase::FixedUpdate).shared();
	pipeline.add(system.clone());

	let [pre_init, init, update, fixed, late] = collect(&pipeline);
	assert_eq!(pre_init, ["all"]);
	assert_eq!(init, ["all"]);
	assert_eq!(fixed, ["all"]);
	assert!(update.is_empty() && late.is_empty(), "System was filed into more than one phase");

	let mut out = Vec::new();
	pipeline.get_init_systems(Some(&mut out));
	let expected: SharedSystem<FakeWorld> = system;
	assert!(Arc::ptr_eq(&out[0], &expected), "Returned handle is not the added system");
}

#[test]
pub fn adding_twice_files_twice() {
	let trace = new_trace();
	let mut pipeline = Pipeline::new(FakeWorld::handle(&trace));
	let system = Recorder::new("twice", &trace).init().run(Phase::Update).shared();
	pipeline.add(system.clone()).add(system.clone());

	let [_, init, update, ..] = collect(&pipeline);
	assert_eq!(init, ["twice", "twice"]);
	assert_eq!(update, ["twice", "twice"]);

	pipeline.initialize().unwrap();
	pipeline.run_update().unwrap();
	assert_eq!(system.lock().runs, 2, "Duplicate registration should run twice");
	assert_eq!(system.lock().injections, 2, "Each add should inject once");
}

#[test]
pub fn accessors_hand_out_copies() {
	let trace = new_trace();
	let mut pipeline = Pipeline::new(FakeWorld::handle(&trace));
	pipeline.add_system(Recorder::new("a", &trace).pre_init().init().run(Phase::Update));

	let mut out = Vec::new();
	pipeline.get_run_systems(Phase::Update, Some(&mut out));
	out.clear();
	pipeline.get_init_systems(Some(&mut out));
	out.push(out[0].clone());

	let [pre_init, init, update, ..] = collect(&pipeline);
	assert_eq!(pre_init, ["a"]);
	assert_eq!(init, ["a"]);
	assert_eq!(update, ["a"], "Mutating a snapshot changed the pipeline");
}

#[test]
pub fn accessors_replace_existing_contents() {
	let trace = new_trace();
	let mut pipeline = Pipeline::new(FakeWorld::handle(&trace));
	pipeline.add_system(Recorder::new("a", &trace).init());

	let stale: SharedSystem<FakeWorld> = Recorder::new("stale", &trace).shared();
	let mut out = vec![stale; 3];
	pipeline.get_init_systems(Some(&mut out));
	assert_eq!(labels(&out), ["a"]);

	pipeline.get_run_systems(Phase::LateUpdate, Some(&mut out));
	assert!(out.is_empty());

	// no container is a no-op
	pipeline.get_pre_init_systems(None);
	pipeline.get_init_systems(None);
	pipeline.get_run_systems(Phase::Update, None);
}

#[test]
pub fn injection_happens_before_classification() {
	let trace = new_trace();
	let world = FakeWorld::handle(&trace);
	let calls = Rc::new(Cell::new(0));

	let counter = calls.clone();
	let injector = move |world: &WorldHandle<FakeWorld>, system: &mut dyn crate::systems::System<FakeWorld>| {
		counter.set(counter.get() + 1);
		// classification must see what injection configured
		system.inject(world);
		assert!(system.as_init().is_some());
	};

	let mut pipeline = Pipeline::with_injector(world.clone(), injector);
	let system = Recorder::new("a", &trace).init().shared();
	pipeline.add(system.clone());

	assert_eq!(calls.get(), 1, "Injector should run exactly once per add");
	let guard = system.lock();
	assert!(guard.world.as_ref().map_or(false, |w| w.ptr_eq(&world)));
}

#[test]
pub fn default_injector_hands_out_the_pipeline_world() {
	let trace = new_trace();
	let world = FakeWorld::handle(&trace);
	let mut pipeline = Pipeline::new(world.clone());
	let system = Recorder::new("a", &trace).run(Phase::Update).shared();
	pipeline.add(system.clone());

	assert_eq!(system.lock().injections, 1);
	assert!(pipeline.world().ptr_eq(&world));
	assert!(system.lock().world.as_ref().map_or(false, |w| w.ptr_eq(&world)));
}

#[test]
pub fn random_registrations_preserve_order() {
	const NAMES: [&str; 8] = ["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7"];
	let mut rng = StdRng::seed_from_u64(0x5eed);

	for _ in 0..64 {
		let trace = new_trace();
		let mut pipeline = Pipeline::new(FakeWorld::handle(&trace));
		let mut expected: [Vec<&'static str>; 5] = Default::default();

		for _ in 0..rng.gen_range(0..24) {
			let label = NAMES[rng.gen_range(0..NAMES.len())];
			let mut system = Recorder::new(label, &trace);
			if rng.gen_bool(0.5) {
				system = system.pre_init();
				expected[0].push(label);
			}
			if rng.gen_bool(0.5) {
				system = system.init();
				expected[1].push(label);
			}
			match rng.gen_range(0..4) {
				0 => {},
				n => {
					let phase = Phase::ALL[n - 1];
					system = system.run(phase);
					expected[2 + phase as usize].push(label);
				},
			}
			pipeline.add_system(system);
		}

		assert_eq!(collect(&pipeline), expected, "Collections do not match registration order");
	}
}
