use std::fmt::{Display, Formatter};

/// The repeating phases a [RunSystem](crate::systems::RunSystem) can be ticked in.
///
/// The pipeline imposes no ordering between phases; the host loop decides how often
/// each one runs (e.g. several [`FixedUpdate`](Phase::FixedUpdate)s per frame).
#[derive(Debug, Hash, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
	Update,
	FixedUpdate,
	LateUpdate,
}

impl Phase {
	pub const ALL: [Phase; 3] = [Phase::Update, Phase::FixedUpdate, Phase::LateUpdate];

	#[inline(always)]
	pub(crate) const fn index(self) -> usize {
		self as usize
	}
}

impl Display for Phase {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Phase::Update => "update",
			Phase::FixedUpdate => "fixed update",
			Phase::LateUpdate => "late update",
		};
		f.write_str(name)
	}
}
