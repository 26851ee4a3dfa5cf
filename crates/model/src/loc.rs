use serde::{Deserialize, Serialize};

/// Identifies one compilation unit (module) of the program under check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// A position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLoc {
	/// Compilation unit owning the text.
	pub unit: UnitId,
	/// One-based line.
	pub line: u32,
	/// One-based column.
	pub column: u32,
}

impl SourceLoc {
	/// Creates a new source location.
	pub const fn new(unit: UnitId, line: u32, column: u32) -> Self {
		Self { unit, line, column }
	}
}

impl std::fmt::Display for SourceLoc {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "unit{}:{}:{}", self.unit.0, self.line, self.column)
	}
}
