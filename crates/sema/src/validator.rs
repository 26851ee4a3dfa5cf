//! Validity rules for one claimed conformance to an invertible capability.

use serde::Serialize;
use tilde_model::{Capability, CapabilitySet, ConformanceClaim, DeclId, NominalKind, NominalShape, ResolvedType, SourceLoc};

use crate::annotations::suppressed_capabilities;
use crate::diagnostic::DiagnosticSink;
use crate::options::LangOptions;
use crate::remediation;
use crate::rules::rule_for;
use crate::storage::{self, StorageKind};

/// A detected inconsistency between a conformance claim and its declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Violation {
	/// The capability is suppressed and also claimed unconditionally.
	Contradiction {
		capability: Capability,
		nominal: DeclId,
		/// Location of the conformance.
		loc: Option<SourceLoc>,
	},
	/// Duplication is claimed on a type with a user-defined destructor.
	Destructor {
		nominal: DeclId,
		/// Location of the destructor.
		loc: SourceLoc,
	},
	/// A stored field or payload lacks the claimed capability.
	Storage {
		capability: Capability,
		nominal: DeclId,
		member: String,
		member_ty: ResolvedType,
		storage: StorageKind,
		/// Location of the member.
		loc: Option<SourceLoc>,
	},
}

impl Violation {
	/// Capability whose claim is violated.
	pub fn capability(&self) -> Capability {
		match self {
			Self::Contradiction { capability, .. } | Self::Storage { capability, .. } => *capability,
			Self::Destructor { .. } => Capability::Duplication,
		}
	}

	/// Declaration the violation was found on.
	pub fn nominal(&self) -> DeclId {
		match self {
			Self::Contradiction { nominal, .. } | Self::Destructor { nominal, .. } | Self::Storage { nominal, .. } => *nominal,
		}
	}
}

/// Whether remediation may attach a new `~capability` to the declaration.
///
/// False once the capability is suppressed or unconditionally claimed: the
/// suggestion would either repeat itself or contradict the claim.
pub fn can_add_inverse(claim: &ConformanceClaim, annotations: CapabilitySet) -> bool {
	!annotations.has(claim.capability) && !claim.is_unconditional()
}

/// Checks `claim` against `shape`, computing the declaration's suppressions first.
pub fn check_conformance(claim: &ConformanceClaim, shape: &NominalShape, options: &LangOptions, sink: &mut dyn DiagnosticSink) -> Vec<Violation> {
	validate(claim, shape, suppressed_capabilities(shape), options, sink)
}

/// Checks `claim` against `shape` given its suppressed capabilities.
///
/// Every violation is reported to `sink` together with its remediation before
/// it is returned. The contradiction, destructor and storage rules are
/// independent; the storage rule reports at most one member.
pub fn validate(
	claim: &ConformanceClaim,
	shape: &NominalShape,
	annotations: CapabilitySet,
	options: &LangOptions,
	sink: &mut dyn DiagnosticSink,
) -> Vec<Violation> {
	let rule = rule_for(claim.capability);
	let suppressed = annotations.has(claim.capability);
	let unconditional = claim.is_unconditional();
	let add_inverse = can_add_inverse(claim, annotations);
	let is_class = shape.kind == NominalKind::Class;

	tracing::debug!(
		nominal = %shape.name,
		capability = ?claim.capability,
		suppressed,
		unconditional,
		"checking invertible conformance"
	);

	let mut violations = Vec::new();
	let mut report = |violation: Violation, sink: &mut dyn DiagnosticSink| {
		tracing::debug!(nominal = %shape.name, ?violation, "invertible conformance violation");
		remediation::advise(&violation, shape, add_inverse, sink);
		violations.push(violation);
	};

	if (!is_class || options.reference_type_suppression) && suppressed && unconditional {
		report(
			Violation::Contradiction {
				capability: claim.capability,
				nominal: shape.decl,
				loc: claim.loc,
			},
			sink,
		);
	}

	// Reference types can store anything.
	if is_class {
		return violations;
	}

	if rule.destructor_disqualifies
		&& let Some(destructor) = shape.destructor
	{
		report(
			Violation::Destructor {
				nominal: shape.decl,
				loc: destructor.loc,
			},
			sink,
		);
	}

	let failing = storage::find(shape, |member| {
		if member.ty.has_error {
			tracing::trace!(nominal = %shape.name, member = member.name, "skipping member with invalid type");
			return false;
		}
		tracing::trace!(nominal = %shape.name, member = member.name, ty = %member.ty.display, "visiting member");
		(rule.member_fails)(member.ty)
	});
	if let Some(member) = failing {
		report(
			Violation::Storage {
				capability: claim.capability,
				nominal: shape.decl,
				member: member.name.to_string(),
				member_ty: member.ty.clone(),
				storage: member.kind,
				loc: member.loc,
			},
			sink,
		);
	}

	violations
}
