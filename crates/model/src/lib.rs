//! Declaration views consumed by the invertible capability checker.
//!
//! Everything here is a plain, read-only value built by the host compiler for a
//! single check. The checker itself lives in `tilde-sema`.

/// Invertible capabilities and capability sets.
pub mod capability;
/// Conformance claims under test.
pub mod claim;
/// Model adapter errors.
pub mod error;
/// Source locations.
pub mod loc;
/// Host declaration model adapter.
pub mod model;
/// Nominal declaration views.
pub mod shape;
/// Resolved member types.
pub mod ty;

pub use capability::{Capability, CapabilitySet};
pub use claim::{ClaimOrigin, ConformanceClaim};
pub use error::{ModelError, Result};
pub use loc::{SourceLoc, UnitId};
pub use model::DeclModel;
pub use shape::{DeclAttribute, DeclId, Destructor, EnumCase, InheritanceClause, InheritedEntry, NominalKind, NominalShape, StoredField};
pub use ty::{GenericParamRef, NominalRef, ResolvedType, TypeOrigin};
