use crate::world::{World, WorldHandle};
use crate::systems::System;

/// Wires world-derived references into a [System] before it is filed into the pipeline.
///
/// Invoked exactly once per [`add`](crate::pipeline::Pipeline::add) call, synchronously,
/// before the system's capabilities are inspected.
pub trait Injector<W: World> {
	fn inject(&self, world: &WorldHandle<W>, system: &mut dyn System<W>);
}

/// The default [Injector]: forwards to the system's own [`System::inject`] hook.
#[derive(Default, Copy, Clone, Debug)]
pub struct HookInjector;

impl<W: World> Injector<W> for HookInjector {
	#[inline(always)]
	fn inject(&self, world: &WorldHandle<W>, system: &mut dyn System<W>) {
		system.inject(world);
	}
}

impl<W, F> Injector<W> for F
where
	W: World,
	F: Fn(&WorldHandle<W>, &mut dyn System<W>),
{
	fn inject(&self, world: &WorldHandle<W>, system: &mut dyn System<W>) {
		self(world, system)
	}
}
