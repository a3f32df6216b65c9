use thiserror::Error;

/// Errors that can occur in the content types system
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ContentTypeError {
	/// Row cursor has no column with the requested name
	#[error("Column not found: {column}")]
	ColumnNotFound { column: String },

	/// Column value cannot be converted to the requested type
	#[error("Invalid value for column '{column}': expected {expected}, found {found}")]
	InvalidValue {
		column: String,
		expected: &'static str,
		found: String,
	},

	/// Content type failed validation before a write
	#[error("Validation error: {0}")]
	Validation(String),

	/// Content type not found
	#[error("Content type not found: {0}")]
	NotFound(i32),

	/// A content type with the same name already exists in the portal scope
	#[error("Duplicate content type '{name}' in portal {portal_id:?}")]
	Duplicate {
		name: String,
		portal_id: Option<i32>,
	},

	/// Error reported by a repository backend
	#[error("Repository error: {0}")]
	Repository(String),

	/// Configuration error
	#[error("Configuration error: {0}")]
	Config(String),

	/// IO error while reading configuration
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for content type operations
pub type Result<T> = std::result::Result<T, ContentTypeError>;
