//! In-memory declaration model for the invertible conformance checker.
//!
//! [`DeclTable`] stands in for a compiler's declaration graph: it records
//! nominal declarations with unresolved member types and hands the checker
//! resolved [`tilde_model::NominalShape`] views and conformance claims through
//! the [`tilde_model::DeclModel`] trait.

pub mod decl;
pub mod table;

pub use decl::{CaseDecl, ExplicitConformance, FieldDecl, GenericParamDecl, NominalDecl, TypeExpr};
pub use table::DeclTable;
