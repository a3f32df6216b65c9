//! Row cursor abstraction
//!
//! A [`DataRow`] is a single result row indexable by column name. Backends
//! implement it over their native row type; [`MapRow`] is an in-memory row used
//! by the reference controller, fixtures and JSON imports.

use crate::error::{ContentTypeError, Result};
use crate::null::RawValue;
use serde_json::Value;
use std::collections::HashMap;

/// A result row indexable by column name
pub trait DataRow {
	/// Returns the raw value stored in `column`
	///
	/// Implementations return [`ContentTypeError::ColumnNotFound`] (or their own
	/// error) when the row has no such column.
	fn value(&self, column: &str) -> Result<RawValue>;
}

/// In-memory row keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRow {
	columns: HashMap<String, RawValue>,
}

impl MapRow {
	/// Creates an empty row
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a column, builder style
	///
	/// # Example
	///
	/// ```rust
	/// use portico_contenttypes::row::{DataRow, MapRow};
	/// use portico_contenttypes::null::RawValue;
	///
	/// let row = MapRow::new()
	///     .with("ContentTypeID", 5)
	///     .with("ContentType", "Module");
	/// assert_eq!(row.value("ContentTypeID").unwrap(), RawValue::Integer(5));
	/// ```
	pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
		self.set(column, value);
		self
	}

	/// Sets a column value, replacing any previous one
	pub fn set(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
		self.columns.insert(column.into(), value.into());
	}

	/// Returns `true` if the row has the column
	pub fn contains(&self, column: &str) -> bool {
		self.columns.contains_key(column)
	}

	/// Number of columns in the row
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Returns `true` if the row has no columns
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Builds a row from a JSON object
	///
	/// Returns [`ContentTypeError::InvalidValue`] when `value` is not an object.
	pub fn from_json(value: &Value) -> Result<Self> {
		let object = value
			.as_object()
			.ok_or_else(|| ContentTypeError::InvalidValue {
				column: String::new(),
				expected: "object",
				found: value.to_string(),
			})?;

		Ok(Self {
			columns: object
				.iter()
				.map(|(k, v)| (k.clone(), RawValue::from_json(v)))
				.collect(),
		})
	}
}

impl DataRow for MapRow {
	fn value(&self, column: &str) -> Result<RawValue> {
		self.columns
			.get(column)
			.cloned()
			.ok_or_else(|| ContentTypeError::ColumnNotFound {
				column: column.to_string(),
			})
	}
}

impl DataRow for HashMap<String, RawValue> {
	fn value(&self, column: &str) -> Result<RawValue> {
		self.get(column)
			.cloned()
			.ok_or_else(|| ContentTypeError::ColumnNotFound {
				column: column.to_string(),
			})
	}
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for MapRow {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			columns: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}
