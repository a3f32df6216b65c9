//! Unit tests for the deprecated hydration API

#![allow(deprecated)]

use portico_contenttypes::null::RawValue;
use portico_contenttypes::row::MapRow;
use portico_contenttypes::{ContentType, ContentTypeError, DataRow, Hydratable, Result};

/// Test fill copies id and name and leaves the other fields untouched
#[test]
fn test_fill_sets_id_and_name() {
	// Arrange
	let mut ct = ContentType::default().with_portal_id(3).with_structured(true);
	let row = MapRow::new()
		.with("ContentTypeID", 5)
		.with("ContentType", "Module");

	// Act
	ct.fill(&row).unwrap();

	// Assert
	assert_eq!(ct.id, Some(5));
	assert_eq!(ct.name(), "Module");
	assert_eq!(ct.portal_id, Some(3));
	assert!(ct.is_structured);
}

/// Test fill on a default record leaves portal and structured flag at defaults
#[test]
fn test_fill_default_record() {
	// Arrange
	let mut ct = ContentType::default();
	let row = MapRow::new()
		.with("ContentTypeID", 5)
		.with("ContentType", "Module")
		.with("PortalID", 9)
		.with("IsStructured", true);

	// Act
	ct.fill(&row).unwrap();

	// Assert
	assert_eq!(ct.id, Some(5));
	assert_eq!(ct.name(), "Module");
	assert_eq!(ct.portal_id, None);
	assert!(!ct.is_structured);
}

/// Test fill converts database nulls to unset values
#[test]
fn test_fill_with_nulls() {
	// Arrange
	let mut ct = ContentType::new("Tab").with_id(3);
	let row = MapRow::new()
		.with("ContentTypeID", RawValue::Null)
		.with("ContentType", RawValue::Null);

	// Act
	ct.fill(&row).unwrap();

	// Assert
	assert_eq!(ct.id, None);
	assert_eq!(ct.name, None);
	assert_eq!(ct.key_id(), -1);
}

/// Test a missing column propagates the row error
#[test]
fn test_fill_missing_column() {
	// Arrange
	let mut ct = ContentType::default();
	let row = MapRow::new().with("ContentTypeID", 5);

	// Act
	let err = ct.fill(&row).unwrap_err();

	// Assert
	assert!(matches!(
		err,
		ContentTypeError::ColumnNotFound { ref column } if column == "ContentType"
	));
}

/// Row cursor raising its own error for every access
struct ClosedReader;

impl DataRow for ClosedReader {
	fn value(&self, _column: &str) -> Result<RawValue> {
		Err(ContentTypeError::Repository("reader is closed".to_string()))
	}
}

/// Test errors raised by a custom row cursor are not translated
#[test]
fn test_fill_propagates_custom_row_error() {
	// Arrange
	let mut ct = ContentType::default();

	// Act
	let err = ct.fill(&ClosedReader).unwrap_err();

	// Assert
	assert!(matches!(err, ContentTypeError::Repository(ref msg) if msg == "reader is closed"));
	assert_eq!(ct, ContentType::default());
}

/// Test key_id is an alias of id
#[test]
fn test_key_id_alias() {
	// Arrange
	let mut ct = ContentType::new("Module");

	// Act
	ct.set_key_id(11);

	// Assert
	assert_eq!(ct.id, Some(11));
	assert_eq!(ct.key_id(), 11);
}
