//! Diagnostics produced by the conformance checks and the sink they go to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tilde_model::{Capability, NominalKind, NominalShape, SourceLoc};

use crate::storage::StorageKind;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
	Error,
	Note,
}

/// A nominal declaration as named in messages, e.g. `struct 'Box'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominalLabel {
	pub kind: NominalKind,
	pub name: String,
}

impl NominalLabel {
	pub fn of(shape: &NominalShape) -> Self {
		Self {
			kind: shape.kind,
			name: shape.name.clone(),
		}
	}
}

impl std::fmt::Display for NominalLabel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} '{}'", self.kind.keyword(), self.name)
	}
}

/// Diagnostic code plus arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
	/// The declaration suppresses `capability` and also claims it unconditionally.
	InverseButAlsoConforms { nominal: NominalLabel, capability: Capability },
	/// A destructor is declared in a type claiming Duplication.
	IllegalDestructor { nominal: NominalLabel, capability: Capability },
	/// A stored field or payload lacks the capability its container claims.
	MemberLacksCapability {
		member: String,
		member_ty: String,
		storage: StorageKind,
		nominal: NominalLabel,
		capability: Capability,
	},
	/// Suggests suppressing `capability` on the declaration.
	AddInverse { nominal: NominalLabel, capability: Capability },
	/// A generic parameter carries the suppression that blocks the conformance.
	ParamPreventsConformance { param: String, capability: Capability },
	/// A nominal declaration carries the suppression that blocks the conformance.
	NominalPreventsConformance { nominal: String, capability: Capability },
}

impl DiagnosticKind {
	pub const fn severity(&self) -> Severity {
		match self {
			Self::InverseButAlsoConforms { .. } | Self::IllegalDestructor { .. } | Self::MemberLacksCapability { .. } => Severity::Error,
			Self::AddInverse { .. } | Self::ParamPreventsConformance { .. } | Self::NominalPreventsConformance { .. } => Severity::Note,
		}
	}
}

impl std::fmt::Display for DiagnosticKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InverseButAlsoConforms { nominal, capability } => {
				write!(f, "{nominal} is required to be '{capability}' but is marked with '~{capability}'")
			}
			Self::IllegalDestructor { nominal, capability } => {
				write!(f, "destructor cannot be declared in {nominal} that conforms to '{capability}'")
			}
			Self::MemberLacksCapability {
				member,
				member_ty,
				storage,
				nominal,
				capability,
			} => {
				let what = match storage {
					StorageKind::Field => "stored field",
					StorageKind::VariantPayload => "payload of case",
				};
				write!(f, "{what} '{member}' of '{capability}'-conforming {nominal} has non-{capability} type '{member_ty}'")
			}
			Self::AddInverse { nominal, capability } => write!(f, "consider adding '~{capability}' to {nominal}"),
			Self::ParamPreventsConformance { param, capability } => {
				write!(f, "'{param}' has '~{capability}' constraint preventing implicit '{capability}' conformance")
			}
			Self::NominalPreventsConformance { nominal, capability } => {
				write!(f, "'{nominal}' has '~{capability}' constraint preventing '{capability}' conformance")
			}
		}
	}
}

/// Where a fix-it puts its text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
	/// At the anchor, before the token there.
	At,
	/// Just past the token at the anchor.
	After,
}

/// A text insertion attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixIt {
	pub loc: SourceLoc,
	pub placement: Placement,
	pub text: String,
}

/// A diagnostic as recorded by [`DiagnosticBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub loc: Option<SourceLoc>,
	pub kind: DiagnosticKind,
	pub fixits: SmallVec<[FixIt; 1]>,
}

impl Diagnostic {
	pub fn severity(&self) -> Severity {
		self.kind.severity()
	}
}

/// Handle to a diagnostic previously handed to a [`DiagnosticSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticHandle(pub usize);

/// Receiver of checker diagnostics.
///
/// Rendering is the host's business; the checker only reports codes,
/// arguments, locations and insertion edits.
pub trait DiagnosticSink {
	/// Records a diagnostic. `loc` is `None` when the anchor has no source position.
	fn diagnose(&mut self, loc: Option<SourceLoc>, kind: DiagnosticKind) -> DiagnosticHandle;

	/// Attaches an edit inserting `text` at `loc`.
	fn insert_at(&mut self, diag: DiagnosticHandle, loc: SourceLoc, text: String);

	/// Attaches an edit inserting `text` just past the token at `loc`.
	fn insert_after(&mut self, diag: DiagnosticHandle, loc: SourceLoc, text: String);
}

/// Sink that keeps every diagnostic in emission order.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticBuffer {
	diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	pub fn into_diagnostics(self) -> Vec<Diagnostic> {
		self.diagnostics
	}

	/// Diagnostics of error severity.
	pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
		self.diagnostics.iter().filter(|d| d.severity() == Severity::Error)
	}

	/// Diagnostics of note severity.
	pub fn notes(&self) -> impl Iterator<Item = &Diagnostic> {
		self.diagnostics.iter().filter(|d| d.severity() == Severity::Note)
	}

	pub fn len(&self) -> usize {
		self.diagnostics.len()
	}

	pub fn is_empty(&self) -> bool {
		self.diagnostics.is_empty()
	}

	fn attach(&mut self, diag: DiagnosticHandle, fixit: FixIt) {
		match self.diagnostics.get_mut(diag.0) {
			Some(d) => d.fixits.push(fixit),
			None => tracing::warn!(handle = diag.0, "fix-it attached to unknown diagnostic"),
		}
	}
}

impl DiagnosticSink for DiagnosticBuffer {
	fn diagnose(&mut self, loc: Option<SourceLoc>, kind: DiagnosticKind) -> DiagnosticHandle {
		self.diagnostics.push(Diagnostic {
			loc,
			kind,
			fixits: SmallVec::new(),
		});
		DiagnosticHandle(self.diagnostics.len() - 1)
	}

	fn insert_at(&mut self, diag: DiagnosticHandle, loc: SourceLoc, text: String) {
		self.attach(diag, FixIt {
			loc,
			placement: Placement::At,
			text,
		});
	}

	fn insert_after(&mut self, diag: DiagnosticHandle, loc: SourceLoc, text: String) {
		self.attach(diag, FixIt {
			loc,
			placement: Placement::After,
			text,
		});
	}
}
