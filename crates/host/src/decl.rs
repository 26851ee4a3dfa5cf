//! Declarations as recorded by the in-memory model, before resolution.

use tilde_model::{Capability, CapabilitySet, DeclAttribute, DeclId, InheritedEntry, InheritanceClause, NominalKind, SourceLoc, UnitId};

/// A type as written in a member declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
	/// Another nominal declaration of the table.
	Nominal(DeclId),
	/// Generic parameter of the enclosing declaration, by index.
	Param(usize),
	/// A builtin type registered with [`crate::DeclTable::add_builtin`].
	Builtin(String),
	/// A type that failed to resolve, with its printable spelling.
	Error(String),
}

/// Generic parameter with its own suppressions (`T: ~Duplication`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParamDecl {
	pub name: String,
	pub suppressed: CapabilitySet,
	pub loc: Option<SourceLoc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
	pub name: String,
	pub ty: TypeExpr,
	pub loc: Option<SourceLoc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDecl {
	pub name: String,
	pub payload: Option<TypeExpr>,
	pub loc: Option<SourceLoc>,
}

/// A conformance written in source, e.g. `extension Box: Duplication where T: Duplication`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitConformance {
	pub capability: Capability,
	pub loc: SourceLoc,
	pub conditional_requirements: Vec<String>,
}

/// A nominal declaration of the in-memory model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalDecl {
	pub name: String,
	pub kind: NominalKind,
	pub unit: UnitId,
	pub loc: Option<SourceLoc>,
	pub body_open: Option<SourceLoc>,
	pub generic_params: Vec<GenericParamDecl>,
	pub inheritance: InheritanceClause,
	pub attributes: Vec<DeclAttribute>,
	pub fields: Vec<FieldDecl>,
	pub cases: Vec<CaseDecl>,
	pub destructor: Option<SourceLoc>,
	pub conformances: Vec<ExplicitConformance>,
}

impl NominalDecl {
	pub fn new(name: impl Into<String>, kind: NominalKind, unit: UnitId) -> Self {
		Self {
			name: name.into(),
			kind,
			unit,
			loc: None,
			body_open: None,
			generic_params: Vec::new(),
			inheritance: InheritanceClause::default(),
			attributes: Vec::new(),
			fields: Vec::new(),
			cases: Vec::new(),
			destructor: None,
			conformances: Vec::new(),
		}
	}

	/// Sets the name and body-open locations.
	pub fn at(mut self, loc: SourceLoc, body_open: SourceLoc) -> Self {
		self.loc = Some(loc);
		self.body_open = Some(body_open);
		self
	}

	pub fn generic_param(mut self, name: impl Into<String>, suppressed: CapabilitySet, loc: Option<SourceLoc>) -> Self {
		self.generic_params.push(GenericParamDecl {
			name: name.into(),
			suppressed,
			loc,
		});
		self
	}

	/// Appends an inheritance entry ending at `end`.
	pub fn inherits(mut self, entry: InheritedEntry, end: Option<SourceLoc>) -> Self {
		self.inheritance.entries.push(entry);
		self.inheritance.end = end;
		self
	}

	pub fn attribute(mut self, attr: DeclAttribute) -> Self {
		self.attributes.push(attr);
		self
	}

	pub fn field(mut self, name: impl Into<String>, ty: TypeExpr, loc: Option<SourceLoc>) -> Self {
		self.fields.push(FieldDecl { name: name.into(), ty, loc });
		self
	}

	pub fn case(mut self, name: impl Into<String>, payload: Option<TypeExpr>, loc: Option<SourceLoc>) -> Self {
		self.cases.push(CaseDecl {
			name: name.into(),
			payload,
			loc,
		});
		self
	}

	pub fn destructor(mut self, loc: SourceLoc) -> Self {
		self.destructor = Some(loc);
		self
	}

	/// Records an explicit conformance; `requirements` empty means unconditional.
	pub fn conforms(mut self, capability: Capability, loc: SourceLoc, requirements: Vec<String>) -> Self {
		self.conformances.push(ExplicitConformance {
			capability,
			loc,
			conditional_requirements: requirements,
		});
		self
	}

	/// Whether the declaration can carry storage and conformances at all.
	pub(crate) fn is_type(&self) -> bool {
		matches!(self.kind, NominalKind::Struct | NominalKind::Enum | NominalKind::Class)
	}
}
