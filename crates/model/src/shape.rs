//! The checker's read-only view of a nominal declaration.
//!
//! Hosts build a [`NominalShape`] fresh for every check from their own
//! declaration graph. Member types are already mapped into the declaration's
//! generic context, so the checker never needs ambient compiler state.

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::loc::{SourceLoc, UnitId};
use crate::ty::{NominalRef, ResolvedType};

/// Opaque handle to a declaration in the host's model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeclId(pub u32);

/// Category of a nominal declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NominalKind {
	/// Value type with stored fields.
	Struct,
	/// Value type with cases, some carrying payloads.
	Enum,
	/// Heap-allocated reference type with stored fields.
	Class,
	/// Protocol declaration; has no storage.
	Protocol,
	/// Any other nominal the host models (e.g. builtin tuples); has no storage.
	Other,
}

impl NominalKind {
	/// Keyword used when naming the declaration in messages.
	pub const fn keyword(self) -> &'static str {
		match self {
			Self::Struct => "struct",
			Self::Enum => "enum",
			Self::Class => "class",
			Self::Protocol => "protocol",
			Self::Other => "type",
		}
	}
}

/// One entry of a declaration's inheritance clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InheritedEntry {
	/// A protocol or superclass, by name.
	Conformance(String),
	/// An explicit `~Capability` suppression.
	Suppression(Capability),
}

/// The `: A, B, ~C` clause after a declaration's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritanceClause {
	/// Entries in source order.
	pub entries: Vec<InheritedEntry>,
	/// Location just past the last entry.
	pub end: Option<SourceLoc>,
}

impl InheritanceClause {
	/// Returns `true` when nothing is written after the declaration name.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Declaration attributes the checker understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclAttribute {
	/// Legacy spelling of `~Duplication`.
	MoveOnly,
	/// Legacy spelling of `~Locality`.
	NonEscapable,
	/// Any attribute irrelevant to invertible capabilities.
	Other(String),
}

/// A stored field of a struct or class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredField {
	pub name: String,
	pub ty: ResolvedType,
	pub loc: Option<SourceLoc>,
}

/// A case of an enum; `payload` is `None` for cases without associated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
	pub name: String,
	pub payload: Option<ResolvedType>,
	pub loc: Option<SourceLoc>,
}

/// A user-defined destructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destructor {
	pub loc: SourceLoc,
}

/// Read-only view of a nominal declaration under check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominalShape {
	/// Handle back to the host declaration.
	pub decl: DeclId,
	pub name: String,
	pub kind: NominalKind,
	/// Compilation unit the declaration belongs to.
	pub unit: UnitId,
	/// Location of the declaration name.
	pub loc: Option<SourceLoc>,
	/// Location of the opening brace of the body.
	pub body_open: Option<SourceLoc>,
	pub inheritance: InheritanceClause,
	pub attributes: Vec<DeclAttribute>,
	/// Stored fields in declaration order (structs and classes).
	pub fields: Vec<StoredField>,
	/// Cases in declaration order (enums).
	pub cases: Vec<EnumCase>,
	pub destructor: Option<Destructor>,
}

impl NominalShape {
	/// Creates an empty shape with no storage, annotations or destructor.
	pub fn new(decl: DeclId, name: impl Into<String>, kind: NominalKind, unit: UnitId) -> Self {
		Self {
			decl,
			name: name.into(),
			kind,
			unit,
			loc: None,
			body_open: None,
			inheritance: InheritanceClause::default(),
			attributes: Vec::new(),
			fields: Vec::new(),
			cases: Vec::new(),
			destructor: None,
		}
	}

	/// Sets the declaration and body-open locations.
	pub fn at(mut self, loc: SourceLoc, body_open: SourceLoc) -> Self {
		self.loc = Some(loc);
		self.body_open = Some(body_open);
		self
	}

	/// Appends an inheritance entry; `end` becomes the clause end location.
	pub fn inherits(mut self, entry: InheritedEntry, end: Option<SourceLoc>) -> Self {
		self.inheritance.entries.push(entry);
		self.inheritance.end = end;
		self
	}

	/// Appends a declaration attribute.
	pub fn with_attribute(mut self, attr: DeclAttribute) -> Self {
		self.attributes.push(attr);
		self
	}

	/// Appends a stored field.
	pub fn with_field(mut self, name: impl Into<String>, ty: ResolvedType, loc: Option<SourceLoc>) -> Self {
		self.fields.push(StoredField { name: name.into(), ty, loc });
		self
	}

	/// Appends an enum case.
	pub fn with_case(mut self, name: impl Into<String>, payload: Option<ResolvedType>, loc: Option<SourceLoc>) -> Self {
		self.cases.push(EnumCase {
			name: name.into(),
			payload,
			loc,
		});
		self
	}

	/// Sets the user-defined destructor.
	pub fn with_destructor(mut self, loc: SourceLoc) -> Self {
		self.destructor = Some(Destructor { loc });
		self
	}

	/// Returns `true` if the declaration defines a destructor.
	pub fn has_destructor(&self) -> bool {
		self.destructor.is_some()
	}

	/// Reference to this declaration usable as a type origin.
	pub fn as_nominal_ref(&self) -> NominalRef {
		NominalRef {
			decl: self.decl,
			name: self.name.clone(),
			loc: self.loc,
		}
	}
}
