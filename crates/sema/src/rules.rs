//! Per-capability rule table.
//!
//! Duplication and Locality are checked by parallel rules that differ in two
//! places: only Duplication is disqualified by a destructor, and each has its
//! own member test.

use tilde_model::{Capability, ResolvedType};

/// How one capability constrains the declarations that claim it.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityRule {
	pub capability: Capability,
	/// A user-defined destructor makes the claim invalid.
	pub destructor_disqualifies: bool,
	/// Returns `true` when a member of this type disqualifies the container.
	pub member_fails: fn(&ResolvedType) -> bool,
}

/// A duplicable container cannot hold a non-duplicable member, and a
/// destructor makes implicit copies unsound.
pub const DUPLICATION: CapabilityRule = CapabilityRule {
	capability: Capability::Duplication,
	destructor_disqualifies: true,
	member_fails: lacks_duplication,
};

/// A container whose values may escape cannot hold a scope-bound member.
pub const LOCALITY: CapabilityRule = CapabilityRule {
	capability: Capability::Locality,
	destructor_disqualifies: false,
	member_fails: lacks_locality,
};

/// Rule governing `capability`.
pub const fn rule_for(capability: Capability) -> &'static CapabilityRule {
	match capability {
		Capability::Duplication => &DUPLICATION,
		Capability::Locality => &LOCALITY,
	}
}

fn lacks_duplication(ty: &ResolvedType) -> bool {
	!ty.has(Capability::Duplication)
}

fn lacks_locality(ty: &ResolvedType) -> bool {
	!ty.has(Capability::Locality)
}
