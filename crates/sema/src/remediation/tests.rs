use pretty_assertions::assert_eq;
use tilde_model::{CapabilitySet, InheritedEntry, NominalKind, UnitId};

use super::*;
use crate::diagnostic::{DiagnosticBuffer, FixIt, Placement};
use crate::storage::StorageKind;
use crate::test_fixtures::{decl, loc, non_duplicable, param, plain};

fn storage_violation(member_ty: ResolvedType) -> Violation {
	Violation::Storage {
		capability: Capability::Duplication,
		nominal: tilde_model::DeclId(1),
		member: "x".into(),
		member_ty,
		storage: StorageKind::Field,
		loc: Some(loc(11, 9)),
	}
}

#[test]
fn inverse_fixit_goes_before_body_without_clause() {
	let shape = decl(NominalKind::Struct, "Box");
	let mut sink = DiagnosticBuffer::new();
	suggest_inverse(Capability::Duplication, true, &shape, &mut sink);

	let note = &sink.diagnostics()[0];
	assert_eq!(note.loc, Some(loc(10, 8)));
	assert_eq!(note.fixits.as_slice(), &[FixIt {
		loc: loc(10, 12),
		placement: Placement::At,
		text: ": ~Duplication".into(),
	}]);
}

#[test]
fn inverse_fixit_extends_existing_clause() {
	let shape = decl(NominalKind::Enum, "E").inherits(InheritedEntry::Conformance("Hashable".into()), Some(loc(10, 16)));
	let mut sink = DiagnosticBuffer::new();
	suggest_inverse(Capability::Locality, true, &shape, &mut sink);

	assert_eq!(sink.diagnostics()[0].fixits.as_slice(), &[FixIt {
		loc: loc(10, 16),
		placement: Placement::After,
		text: ", ~Locality".into(),
	}]);
}

#[test]
fn inverse_note_without_insertion_point_has_no_fixit() {
	let mut shape = decl(NominalKind::Struct, "Box");
	shape.body_open = None;
	let mut sink = DiagnosticBuffer::new();
	suggest_inverse(Capability::Duplication, true, &shape, &mut sink);

	assert_eq!(sink.len(), 1);
	assert!(sink.diagnostics()[0].fixits.is_empty());
}

#[test]
fn no_suggestion_when_inverse_cannot_be_added() {
	let mut sink = DiagnosticBuffer::new();
	suggest_inverse(Capability::Duplication, false, &decl(NominalKind::Struct, "Box"), &mut sink);
	assert!(sink.is_empty());
}

#[test]
fn explains_nominal_origin() {
	let mut sink = DiagnosticBuffer::new();
	advise(&storage_violation(non_duplicable()), &decl(NominalKind::Struct, "Box"), true, &mut sink);

	let kinds: Vec<_> = sink.diagnostics().iter().map(|d| (d.loc, d.kind.clone())).collect();
	assert_eq!(kinds.len(), 3);
	assert!(matches!(kinds[0].1, DiagnosticKind::MemberLacksCapability { ref member, .. } if member == "x"));
	assert!(matches!(kinds[1].1, DiagnosticKind::AddInverse { .. }));
	assert_eq!(kinds[2], (Some(loc(1, 8)), DiagnosticKind::NominalPreventsConformance {
		nominal: "NonDuplicable".into(),
		capability: Capability::Duplication,
	}));
}

#[test]
fn explains_generic_param_in_same_unit() {
	let mut sink = DiagnosticBuffer::new();
	let ty = param(crate::test_fixtures::UNIT, CapabilitySet::LOCALITY);
	explain_missing_capability(Capability::Duplication, &ty, &decl(NominalKind::Struct, "Box"), &mut sink);

	assert_eq!(sink.len(), 1);
	assert_eq!(sink.diagnostics()[0].kind, DiagnosticKind::ParamPreventsConformance {
		param: "T".into(),
		capability: Capability::Duplication,
	});
}

#[test]
fn foreign_generic_param_is_not_traced() {
	let mut sink = DiagnosticBuffer::new();
	let ty = param(UnitId(7), CapabilitySet::LOCALITY);
	explain_missing_capability(Capability::Duplication, &ty, &decl(NominalKind::Struct, "Box"), &mut sink);
	assert!(sink.is_empty());
}

#[test]
fn untraceable_origins_stay_silent() {
	let mut sink = DiagnosticBuffer::new();
	let shape = decl(NominalKind::Struct, "Box");
	explain_missing_capability(Capability::Duplication, &plain("Builtin.RawPointer"), &shape, &mut sink);

	let mut binary = non_duplicable();
	if let TypeOrigin::Nominal(nominal) = &mut binary.origin {
		nominal.loc = None;
	}
	explain_missing_capability(Capability::Duplication, &binary, &shape, &mut sink);
	assert!(sink.is_empty());
}

#[test]
fn primary_diagnostic_is_always_emitted() {
	let mut sink = DiagnosticBuffer::new();
	let violation = Violation::Contradiction {
		capability: Capability::Locality,
		nominal: tilde_model::DeclId(1),
		loc: Some(loc(12, 1)),
	};
	advise(&violation, &decl(NominalKind::Struct, "Box"), false, &mut sink);

	assert_eq!(sink.len(), 1);
	assert_eq!(sink.diagnostics()[0].loc, Some(loc(12, 1)));
	assert!(sink.diagnostics()[0].fixits.is_empty());
}
