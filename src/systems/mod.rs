//! [Systems](System) provide the per-frame logic that operates over a shared [World](crate::world::World).
//!
//! A [System] must be manually added to a [Pipeline](crate::pipeline::Pipeline)
//! for it to take part in any lifecycle phase. What it takes part in is decided once,
//! at registration time, by the capabilities it exposes:
//! - [PreInitSystem]: runs before every [InitSystem] and is torn down last.
//! - [InitSystem]: one-time setup and teardown.
//! - [RunSystem]: ticked every time its [Phase] runs.

mod phase;
mod system;
mod system_store;

pub use phase::*;
pub use system::*;
pub use system_store::PipelineState;
pub(crate) use system_store::SystemStore;
pub use phase_pipeline_derive::System;
