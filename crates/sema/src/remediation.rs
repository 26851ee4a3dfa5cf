//! Diagnostics and fix-its for conformance violations.

use tilde_model::{Capability, NominalShape, ResolvedType, TypeOrigin};

use crate::diagnostic::{DiagnosticHandle, DiagnosticKind, DiagnosticSink, NominalLabel};
use crate::validator::Violation;

/// Reports `violation` and whatever remediation applies to it.
///
/// The primary diagnostic is always emitted. The suppression note is emitted
/// only when `can_add_inverse` holds, and storage violations additionally
/// point at the declaration that removed the capability from the member type.
pub fn advise(violation: &Violation, shape: &NominalShape, can_add_inverse: bool, sink: &mut dyn DiagnosticSink) {
	emit_primary(violation, shape, sink);
	suggest_inverse(violation.capability(), can_add_inverse, shape, sink);
	if let Violation::Storage { capability, member_ty, .. } = violation {
		explain_missing_capability(*capability, member_ty, shape, sink);
	}
}

fn emit_primary(violation: &Violation, shape: &NominalShape, sink: &mut dyn DiagnosticSink) -> DiagnosticHandle {
	let nominal = NominalLabel::of(shape);
	match violation {
		Violation::Contradiction { capability, loc, .. } => sink.diagnose(*loc, DiagnosticKind::InverseButAlsoConforms {
			nominal,
			capability: *capability,
		}),
		Violation::Destructor { loc, .. } => sink.diagnose(Some(*loc), DiagnosticKind::IllegalDestructor {
			nominal,
			capability: Capability::Duplication,
		}),
		Violation::Storage {
			capability,
			member,
			member_ty,
			storage,
			loc,
			..
		} => sink.diagnose(*loc, DiagnosticKind::MemberLacksCapability {
			member: member.clone(),
			member_ty: member_ty.display.clone(),
			storage: *storage,
			nominal,
			capability: *capability,
		}),
	}
}

/// Suggests `~capability` on the declaration, with an insertion edit when
/// there is a place to put it.
pub fn suggest_inverse(capability: Capability, can_add_inverse: bool, shape: &NominalShape, sink: &mut dyn DiagnosticSink) {
	if !can_add_inverse {
		return;
	}
	let note = sink.diagnose(shape.loc, DiagnosticKind::AddInverse {
		nominal: NominalLabel::of(shape),
		capability,
	});
	let inverse = capability.inverse_spelling();
	if shape.inheritance.is_empty() {
		match shape.body_open {
			Some(brace) => sink.insert_at(note, brace, format!(": {inverse}")),
			None => tracing::trace!(nominal = %shape.name, "no body location for suppression fix-it"),
		}
	} else {
		match shape.inheritance.end {
			Some(end) => sink.insert_after(note, end, format!(", {inverse}")),
			None => tracing::trace!(nominal = %shape.name, "no inheritance clause end for suppression fix-it"),
		}
	}
}

/// Points at the generic parameter or nominal that keeps `member_ty` from
/// having `capability`. Silent when the origin cannot be traced.
pub fn explain_missing_capability(capability: Capability, member_ty: &ResolvedType, shape: &NominalShape, sink: &mut dyn DiagnosticSink) {
	match &member_ty.origin {
		TypeOrigin::GenericParam(param) => {
			if param.unit == shape.unit
				&& let Some(loc) = param.loc
			{
				sink.diagnose(Some(loc), DiagnosticKind::ParamPreventsConformance {
					param: member_ty.display.clone(),
					capability,
				});
			}
		}
		TypeOrigin::Nominal(nominal) => {
			if let Some(loc) = nominal.loc {
				sink.diagnose(Some(loc), DiagnosticKind::NominalPreventsConformance {
					nominal: nominal.name.clone(),
					capability,
				});
			}
		}
		TypeOrigin::Structural => {}
	}
}

#[cfg(test)]
mod tests;
