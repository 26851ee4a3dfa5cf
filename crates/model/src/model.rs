use crate::claim::ConformanceClaim;
use crate::error::Result;
use crate::shape::{DeclId, NominalShape};

/// Host adapter exposing declarations to the conformance checker.
///
/// Implementations map member types into each declaration's generic context
/// while building the shape, and report both implicit and explicit claims.
pub trait DeclModel {
	/// Nominal declarations to check, in source order.
	fn nominals(&self) -> Vec<DeclId>;

	/// Builds the read-only view of `decl`.
	fn shape(&self, decl: DeclId) -> Result<NominalShape>;

	/// Every Duplication/Locality conformance claimed by `decl`.
	fn conformances(&self, decl: DeclId) -> Result<Vec<ConformanceClaim>>;
}
