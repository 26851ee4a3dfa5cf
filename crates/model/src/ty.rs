//! Resolved member types as seen from inside the enclosing declaration.

use serde::{Deserialize, Serialize};

use crate::capability::{Capability, CapabilitySet};
use crate::loc::{SourceLoc, UnitId};
use crate::shape::DeclId;

/// Where a resolved type comes from, used to explain missing capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeOrigin {
	/// A generic parameter of some declaration, viewed as an archetype.
	GenericParam(GenericParamRef),
	/// A nominal declaration.
	Nominal(NominalRef),
	/// Anything else: builtins, tuples, functions.
	Structural,
}

/// Declaring context of a generic parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParamRef {
	/// Parameter name.
	pub name: String,
	/// Compilation unit that declares the parameter.
	pub unit: UnitId,
	/// Declaration site, if it has one.
	pub loc: Option<SourceLoc>,
}

/// Reference to a nominal declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominalRef {
	/// Declaration handle.
	pub decl: DeclId,
	/// Declared name.
	pub name: String,
	/// Declaration site; `None` for declarations loaded from a binary module.
	pub loc: Option<SourceLoc>,
}

/// A member type mapped into the generic context of its enclosing declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
	/// Printable spelling of the type.
	pub display: String,
	/// Invertible capabilities the type has.
	pub capabilities: CapabilitySet,
	/// Set when the type failed to resolve; such members are never diagnosed.
	pub has_error: bool,
	/// Origin used for explanatory notes.
	pub origin: TypeOrigin,
}

impl ResolvedType {
	/// A builtin or structural type.
	pub fn structural(display: impl Into<String>, capabilities: CapabilitySet) -> Self {
		Self {
			display: display.into(),
			capabilities,
			has_error: false,
			origin: TypeOrigin::Structural,
		}
	}

	/// A nominal type.
	pub fn nominal(nominal: NominalRef, capabilities: CapabilitySet) -> Self {
		Self {
			display: nominal.name.clone(),
			capabilities,
			has_error: false,
			origin: TypeOrigin::Nominal(nominal),
		}
	}

	/// A generic parameter archetype.
	pub fn generic_param(param: GenericParamRef, capabilities: CapabilitySet) -> Self {
		Self {
			display: param.name.clone(),
			capabilities,
			has_error: false,
			origin: TypeOrigin::GenericParam(param),
		}
	}

	/// A type that failed to resolve.
	pub fn error(display: impl Into<String>) -> Self {
		Self {
			display: display.into(),
			capabilities: CapabilitySet::all(),
			has_error: true,
			origin: TypeOrigin::Structural,
		}
	}

	/// Returns `true` if the type has `cap`.
	pub fn has(&self, cap: Capability) -> bool {
		self.capabilities.has(cap)
	}
}
