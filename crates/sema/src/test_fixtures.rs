use tilde_model::{CapabilitySet, DeclId, GenericParamRef, NominalKind, NominalRef, NominalShape, ResolvedType, SourceLoc, UnitId};

pub(crate) const UNIT: UnitId = UnitId(0);

pub(crate) fn loc(line: u32, column: u32) -> SourceLoc {
	SourceLoc::new(UNIT, line, column)
}

/// A type with every capability.
pub(crate) fn plain(name: &str) -> ResolvedType {
	ResolvedType::structural(name, CapabilitySet::all())
}

/// Nominal type declared at line 1 that suppresses Duplication.
pub(crate) fn non_duplicable() -> ResolvedType {
	ResolvedType::nominal(
		NominalRef {
			decl: DeclId(100),
			name: "NonDuplicable".into(),
			loc: Some(loc(1, 8)),
		},
		CapabilitySet::LOCALITY,
	)
}

/// Nominal type declared at line 2 that suppresses Locality.
pub(crate) fn non_local() -> ResolvedType {
	ResolvedType::nominal(
		NominalRef {
			decl: DeclId(101),
			name: "NonLocal".into(),
			loc: Some(loc(2, 8)),
		},
		CapabilitySet::DUPLICATION,
	)
}

/// Generic parameter `T` declared in `unit` with the given capabilities.
pub(crate) fn param(unit: UnitId, capabilities: CapabilitySet) -> ResolvedType {
	ResolvedType::generic_param(
		GenericParamRef {
			name: "T".into(),
			unit,
			loc: Some(SourceLoc::new(unit, 10, 12)),
		},
		capabilities,
	)
}

/// Declaration at line 10 with its body brace at column 12.
pub(crate) fn decl(kind: NominalKind, name: &str) -> NominalShape {
	NominalShape::new(DeclId(1), name, kind, UNIT).at(loc(10, 8), loc(10, 12))
}
