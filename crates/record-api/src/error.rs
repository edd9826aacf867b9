use thiserror::Error;

use crate::types::RecordId;

/// Errors raised when an operation targets a record that is not in the collection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
	/// The record was deleted or never existed.
	#[error("record {id} does not exist")]
	NotFound { id: RecordId },
}

/// Errors raised while building filters or sort criteria from user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
	/// The filter or sort named a field the screen does not declare.
	#[error("unknown field '{field}'")]
	UnknownField { field: String },

	/// A `recent:<name>` sort named a flag the screen does not declare.
	#[error("unknown recent flag '{name}'")]
	UnknownRecentFlag { name: String },

	/// A sort key carried a direction other than `asc` or `desc`.
	#[error("invalid sort direction '{direction}' for field '{field}' (expected asc or desc)")]
	InvalidDirection { field: String, direction: String },

	/// A filter assignment was missing its `=` separator.
	#[error("filter '{raw}' must look like field=value")]
	MalformedFilter { raw: String },
}

/// Errors that can occur when mutating the [`ScreenRegistry`](crate::ScreenRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	/// A screen attempted to register an identifier that already exists in the registry.
	#[error("screen id '{id}' is already registered")]
	DuplicateId { id: &'static str },
}
