//! Machine-checkable invariants of the conformance checks.

use proptest::prelude::*;
use tilde_model::{Capability, CapabilitySet, ConformanceClaim, DeclAttribute, DeclId, InheritedEntry, NominalKind, ResolvedType};

use crate::diagnostic::{DiagnosticBuffer, DiagnosticKind};
use crate::options::LangOptions;
use crate::test_fixtures::{decl, loc};
use crate::validator::{Violation, can_add_inverse, check_conformance};

fn capability() -> impl Strategy<Value = Capability> {
	prop_oneof![Just(Capability::Duplication), Just(Capability::Locality)]
}

fn capability_set() -> impl Strategy<Value = CapabilitySet> {
	(0u8..4).prop_map(CapabilitySet::from_bits_truncate)
}

fn member_type() -> impl Strategy<Value = ResolvedType> {
	(capability_set(), any::<bool>()).prop_map(|(caps, broken)| {
		if broken {
			ResolvedType::error("<<error>>")
		} else {
			ResolvedType::structural(format!("M{}", caps.bits()), caps)
		}
	})
}

/// Invariant: classes never produce destructor or storage violations.
fn inv_class_exemption(cap: Capability, members: Vec<ResolvedType>, destructor: bool, explicit: bool, flag: bool) -> Result<(), TestCaseError> {
	let mut shape = decl(NominalKind::Class, "Ref");
	for (i, ty) in members.into_iter().enumerate() {
		shape = shape.with_field(format!("f{i}"), ty, None);
	}
	if destructor {
		shape = shape.with_destructor(loc(30, 3));
	}
	let claim = if explicit {
		ConformanceClaim::explicit(cap, DeclId(1), loc(20, 1))
	} else {
		ConformanceClaim::implicit(cap, DeclId(1))
	};
	let options = LangOptions::default().with_reference_type_suppression(flag);
	let violations = check_conformance(&claim, &shape, &options, &mut DiagnosticBuffer::new());
	prop_assert!(
		violations
			.iter()
			.all(|v| matches!(v, Violation::Contradiction { .. })),
		"class produced {violations:?}"
	);
	Ok(())
}

/// Invariant: at most one storage violation, naming the first failing member.
fn inv_short_circuit(cap: Capability, members: Vec<ResolvedType>) -> Result<(), TestCaseError> {
	let rule = crate::rules::rule_for(cap);
	let expected = members.iter().position(|ty| !ty.has_error && (rule.member_fails)(ty));

	let mut shape = decl(NominalKind::Struct, "S");
	for (i, ty) in members.into_iter().enumerate() {
		shape = shape.with_field(format!("f{i}"), ty, None);
	}
	let mut sink = DiagnosticBuffer::new();
	let violations = check_conformance(&ConformanceClaim::implicit(cap, DeclId(1)), &shape, &LangOptions::default(), &mut sink);

	let storage: Vec<_> = violations
		.iter()
		.filter_map(|v| match v {
			Violation::Storage { member, .. } => Some(member.clone()),
			_ => None,
		})
		.collect();
	prop_assert_eq!(storage, expected.map(|i| format!("f{i}")).into_iter().collect::<Vec<_>>());
	let primaries = sink
		.diagnostics()
		.iter()
		.filter(|d| matches!(d.kind, DiagnosticKind::MemberLacksCapability { .. }))
		.count();
	prop_assert!(primaries <= 1);
	Ok(())
}

/// Invariant: suppression plus unconditional claim yields exactly one
/// contradiction whatever the storage holds.
fn inv_contradiction_symmetry(cap: Capability, members: Vec<ResolvedType>, legacy: bool) -> Result<(), TestCaseError> {
	let mut shape = decl(NominalKind::Struct, "S");
	shape = if legacy {
		shape.with_attribute(match cap {
			Capability::Duplication => DeclAttribute::MoveOnly,
			Capability::Locality => DeclAttribute::NonEscapable,
		})
	} else {
		shape.inherits(InheritedEntry::Suppression(cap), Some(loc(10, 20)))
	};
	for (i, ty) in members.into_iter().enumerate() {
		shape = shape.with_field(format!("f{i}"), ty, None);
	}
	let mut sink = DiagnosticBuffer::new();
	let claim = ConformanceClaim::explicit(cap, DeclId(1), loc(20, 1));
	let violations = check_conformance(&claim, &shape, &LangOptions::default(), &mut sink);

	let contradictions = violations.iter().filter(|v| matches!(v, Violation::Contradiction { .. })).count();
	prop_assert_eq!(contradictions, 1);
	prop_assert!(sink.diagnostics().iter().all(|d| d.fixits.is_empty()));
	Ok(())
}

/// Invariant: remediation may add an inverse iff the capability is neither
/// suppressed nor unconditionally claimed.
fn inv_remediation_gating(cap: Capability, suppressed: CapabilitySet, explicit: bool) -> Result<(), TestCaseError> {
	let claim = if explicit {
		ConformanceClaim::explicit(cap, DeclId(1), loc(20, 1))
	} else {
		ConformanceClaim::implicit(cap, DeclId(1))
	};
	prop_assert_eq!(can_add_inverse(&claim, suppressed), !suppressed.has(cap) && !explicit);
	Ok(())
}

/// Invariant: a destructor with conforming storage yields exactly one
/// violation for Duplication and none for Locality.
#[cfg_attr(test, test)]
fn inv_destructor_independence() {
	let shape = decl(NominalKind::Struct, "S")
		.with_field("a", ResolvedType::structural("Int", CapabilitySet::all()), None)
		.with_destructor(loc(30, 3));
	let options = LangOptions::default();

	let dup = check_conformance(
		&ConformanceClaim::implicit(Capability::Duplication, DeclId(1)),
		&shape,
		&options,
		&mut DiagnosticBuffer::new(),
	);
	assert_eq!(dup, vec![Violation::Destructor {
		nominal: DeclId(1),
		loc: loc(30, 3),
	}]);

	let local = check_conformance(
		&ConformanceClaim::implicit(Capability::Locality, DeclId(1)),
		&shape,
		&options,
		&mut DiagnosticBuffer::new(),
	);
	assert!(local.is_empty());
}

proptest! {
	#[test]
	fn class_exemption(
		cap in capability(),
		members in prop::collection::vec(member_type(), 0..6),
		destructor in any::<bool>(),
		explicit in any::<bool>(),
		flag in any::<bool>(),
	) {
		inv_class_exemption(cap, members, destructor, explicit, flag)?;
	}

	#[test]
	fn short_circuit(cap in capability(), members in prop::collection::vec(member_type(), 0..8)) {
		inv_short_circuit(cap, members)?;
	}

	#[test]
	fn contradiction_symmetry(
		cap in capability(),
		members in prop::collection::vec(member_type(), 0..6),
		legacy in any::<bool>(),
	) {
		inv_contradiction_symmetry(cap, members, legacy)?;
	}

	#[test]
	fn remediation_gating(cap in capability(), suppressed in capability_set(), explicit in any::<bool>()) {
		inv_remediation_gating(cap, suppressed, explicit)?;
	}
}
