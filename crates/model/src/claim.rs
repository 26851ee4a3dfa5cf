use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::loc::SourceLoc;
use crate::shape::DeclId;

/// How a conformance came to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOrigin {
	/// Assumed by default because the capability is not suppressed.
	Implicit,
	/// Written in source, possibly guarded by conditional requirements.
	Explicit {
		/// Requirements such as `T: Duplication`, as written.
		conditional_requirements: Vec<String>,
	},
}

/// A claimed conformance of a nominal to one invertible capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceClaim {
	pub capability: Capability,
	pub decl: DeclId,
	pub origin: ClaimOrigin,
	/// Where the conformance is written; `None` for implicit claims.
	pub loc: Option<SourceLoc>,
}

impl ConformanceClaim {
	/// A default conformance assumed by the type system.
	pub fn implicit(capability: Capability, decl: DeclId) -> Self {
		Self {
			capability,
			decl,
			origin: ClaimOrigin::Implicit,
			loc: None,
		}
	}

	/// An explicit conformance with no conditional requirements.
	pub fn explicit(capability: Capability, decl: DeclId, loc: SourceLoc) -> Self {
		Self::conditional(capability, decl, loc, Vec::new())
	}

	/// An explicit conformance guarded by `requirements`.
	pub fn conditional(capability: Capability, decl: DeclId, loc: SourceLoc, requirements: Vec<String>) -> Self {
		Self {
			capability,
			decl,
			origin: ClaimOrigin::Explicit {
				conditional_requirements: requirements,
			},
			loc: Some(loc),
		}
	}

	/// Returns `true` for a recorded conformance that holds with no generic preconditions.
	///
	/// Implicit defaults are never unconditional in this sense: they exist only
	/// because nothing suppressed the capability.
	pub fn is_unconditional(&self) -> bool {
		matches!(&self.origin, ClaimOrigin::Explicit { conditional_requirements } if conditional_requirements.is_empty())
	}
}
