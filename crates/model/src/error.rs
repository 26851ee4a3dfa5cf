//! Errors raised by declaration model adapters.

use thiserror::Error;

use crate::shape::DeclId;

/// Failures looking up or resolving declarations in a host model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
	/// No declaration exists for the handle.
	#[error("unknown declaration {0:?}")]
	UnknownDecl(DeclId),

	/// A declared type refers to a generic parameter the declaration does not have.
	#[error("{decl} has no generic parameter at index {index}")]
	UnknownGenericParam {
		/// Name of the declaration being resolved.
		decl: String,
		/// Parameter index that was out of range.
		index: usize,
	},

	/// A declared type names a builtin the model does not know.
	#[error("unknown builtin type `{0}`")]
	UnknownBuiltin(String),

	/// A declaration with this name is already registered.
	#[error("duplicate declaration `{0}`")]
	DuplicateDecl(String),
}

/// Result type for declaration model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
