use serde::{Deserialize, Serialize};

/// An invertible capability: assumed on every nominal type unless suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
	/// Values may be implicitly copied.
	Duplication,
	/// Values may leave the scope that created them.
	Locality,
}

bitflags::bitflags! {
	/// A set of invertible capabilities.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
	pub struct CapabilitySet: u8 {
		/// Values may be implicitly copied.
		const DUPLICATION = 1 << 0;
		/// Values may leave the scope that created them.
		const LOCALITY = 1 << 1;
	}
}

impl Capability {
	/// Every capability, in diagnostic order.
	pub const ALL: [Capability; 2] = [Self::Duplication, Self::Locality];

	/// Returns the bitflag for this capability.
	pub const fn as_set(self) -> CapabilitySet {
		match self {
			Self::Duplication => CapabilitySet::DUPLICATION,
			Self::Locality => CapabilitySet::LOCALITY,
		}
	}

	/// Protocol name as written in source, without the `~` prefix.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Duplication => "Duplication",
			Self::Locality => "Locality",
		}
	}

	/// Spelling of the suppression annotation, e.g. `~Duplication`.
	pub fn inverse_spelling(self) -> String {
		format!("~{}", self.name())
	}
}

impl std::fmt::Display for Capability {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl CapabilitySet {
	/// Returns `true` if `cap` is in the set.
	pub const fn has(self, cap: Capability) -> bool {
		self.contains(cap.as_set())
	}

	/// Iterates the capabilities in the set in [`Capability::ALL`] order.
	pub fn capabilities(self) -> impl Iterator<Item = Capability> {
		Capability::ALL.into_iter().filter(move |cap| self.has(*cap))
	}
}

impl From<Capability> for CapabilitySet {
	fn from(cap: Capability) -> Self {
		cap.as_set()
	}
}

impl FromIterator<Capability> for CapabilitySet {
	fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
		let mut set = CapabilitySet::empty();
		for cap in iter {
			set |= cap.as_set();
		}
		set
	}
}
