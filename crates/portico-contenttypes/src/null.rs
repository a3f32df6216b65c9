//! Null sentinel conventions
//!
//! The storage layer and the legacy row API represent "no value" with reserved
//! sentinels instead of an optional type: `-1` for integers, `""` for strings and
//! `false` for booleans. In memory, records use `Option` and these helpers
//! translate at the boundary.
//!
//! # Example
//!
//! ```rust
//! use portico_contenttypes::null::{self, RawValue};
//!
//! assert_eq!(null::set_null_integer("ContentTypeID", &RawValue::Null).unwrap(), -1);
//! assert_eq!(null::set_null_string(&RawValue::Null), "");
//! assert_eq!(null::optional_integer("ContentTypeID", &RawValue::from(5)).unwrap(), Some(5));
//! ```

use crate::error::{ContentTypeError, Result};
use serde_json::Value;
use std::fmt;

/// Null integer sentinel
pub const NULL_INTEGER: i32 = -1;

/// Null string sentinel
pub const NULL_STRING: &str = "";

/// Null boolean sentinel
pub const NULL_BOOLEAN: bool = false;

/// Raw, untyped column value as yielded by a row cursor
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
	/// Database null
	#[default]
	Null,
	/// Integer column value
	Integer(i64),
	/// Text column value
	Text(String),
	/// Boolean column value
	Boolean(bool),
}

impl RawValue {
	/// Returns `true` for a database null
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Name of the value's kind, used in conversion errors
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Integer(_) => "integer",
			Self::Text(_) => "text",
			Self::Boolean(_) => "boolean",
		}
	}

	/// Converts a JSON value into a raw column value
	///
	/// Numbers that do not fit an `i64` and nested arrays or objects are kept as
	/// their JSON text.
	pub fn from_json(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Boolean(*b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => Self::Integer(i),
				None => Self::Text(n.to_string()),
			},
			Value::String(s) => Self::Text(s.clone()),
			other => Self::Text(other.to_string()),
		}
	}
}

impl fmt::Display for RawValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => write!(f, "NULL"),
			Self::Integer(i) => write!(f, "{}", i),
			Self::Text(s) => write!(f, "{:?}", s),
			Self::Boolean(b) => write!(f, "{}", b),
		}
	}
}

impl From<i32> for RawValue {
	fn from(value: i32) -> Self {
		Self::Integer(i64::from(value))
	}
}

impl From<i64> for RawValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<bool> for RawValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<&str> for RawValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for RawValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

fn invalid(column: &str, expected: &'static str, raw: &RawValue) -> ContentTypeError {
	ContentTypeError::InvalidValue {
		column: column.to_string(),
		expected,
		found: raw.to_string(),
	}
}

/// Maps the integer sentinel to `None`
pub fn integer_from_sentinel(value: i32) -> Option<i32> {
	(value != NULL_INTEGER).then_some(value)
}

/// Maps `None` to the integer sentinel
pub fn integer_to_sentinel(value: Option<i32>) -> i32 {
	value.unwrap_or(NULL_INTEGER)
}

/// Converts a raw value into an optional integer
///
/// Nulls and the `-1` sentinel become `None`. Text is parsed after trimming and
/// booleans convert to `1`/`0`.
pub fn optional_integer(column: &str, raw: &RawValue) -> Result<Option<i32>> {
	let value = match raw {
		RawValue::Null => return Ok(None),
		RawValue::Integer(i) => i32::try_from(*i).map_err(|_| invalid(column, "i32", raw))?,
		RawValue::Text(s) => s
			.trim()
			.parse::<i32>()
			.map_err(|_| invalid(column, "i32", raw))?,
		RawValue::Boolean(b) => i32::from(*b),
	};
	Ok(integer_from_sentinel(value))
}

/// Converts a raw value into an integer, using [`NULL_INTEGER`] for nulls
pub fn set_null_integer(column: &str, raw: &RawValue) -> Result<i32> {
	optional_integer(column, raw).map(integer_to_sentinel)
}

/// Converts a raw value into an optional string
///
/// Only a database null yields `None`; text is kept verbatim.
pub fn optional_string(raw: &RawValue) -> Option<String> {
	match raw {
		RawValue::Null => None,
		RawValue::Integer(i) => Some(i.to_string()),
		RawValue::Text(s) => Some(s.clone()),
		RawValue::Boolean(b) => Some(b.to_string()),
	}
}

/// Converts a raw value into a string, using [`NULL_STRING`] for nulls
pub fn set_null_string(raw: &RawValue) -> String {
	optional_string(raw).unwrap_or_else(|| NULL_STRING.to_string())
}

/// Converts a raw value into an optional boolean
///
/// Integers are true when non-zero. Text accepts `true`/`false`/`1`/`0`
/// case-insensitively.
pub fn optional_boolean(column: &str, raw: &RawValue) -> Result<Option<bool>> {
	match raw {
		RawValue::Null => Ok(None),
		RawValue::Boolean(b) => Ok(Some(*b)),
		RawValue::Integer(i) => Ok(Some(*i != 0)),
		RawValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
			"true" | "1" => Ok(Some(true)),
			"false" | "0" => Ok(Some(false)),
			_ => Err(invalid(column, "bool", raw)),
		},
	}
}

/// Converts a raw value into a boolean, using [`NULL_BOOLEAN`] for nulls
pub fn set_null_boolean(column: &str, raw: &RawValue) -> Result<bool> {
	optional_boolean(column, raw).map(|b| b.unwrap_or(NULL_BOOLEAN))
}
