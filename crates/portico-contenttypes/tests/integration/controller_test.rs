//! In-memory controller tests
//!
//! **Test Coverage:**
//! - Add, update and delete
//! - Name validation and portal-scoped uniqueness
//! - Portal filtering
//! - Row round trip through the controller

use portico_contenttypes::{
	ContentType, ContentTypeController, ContentTypeError, ContentTypeRepository, MapRow,
};
use rstest::*;

#[fixture]
fn controller() -> ContentTypeController {
	ContentTypeController::with_defaults()
}

/// Test add assigns sequential ids after the seeded rows
#[rstest]
fn test_add_assigns_ids(controller: ContentTypeController) {
	// Act
	let first = controller
		.add_content_type(ContentType::new("Article"))
		.unwrap();
	let second = controller
		.add_content_type(ContentType::new("Event").with_portal_id(0))
		.unwrap();

	// Assert
	assert_eq!(first, 4);
	assert_eq!(second, 5);
	assert_eq!(controller.len(), 5);

	let stored = controller.get_content_types().unwrap();
	assert_eq!(stored[3].name(), "Article");
	assert_eq!(stored[4].portal_id, Some(0));
}

/// Test add rejects empty and unset names
#[rstest]
#[case(ContentType::new(""))]
#[case(ContentType::default())]
fn test_add_rejects_empty_name(controller: ContentTypeController, #[case] ct: ContentType) {
	// Act
	let err = controller.add_content_type(ct).unwrap_err();

	// Assert
	assert!(matches!(err, ContentTypeError::Validation(_)));
	assert_eq!(controller.len(), 3);
}

/// Test names are unique within a portal scope only
#[rstest]
fn test_uniqueness_is_portal_scoped(controller: ContentTypeController) {
	// Duplicate global name
	let err = controller
		.add_content_type(ContentType::new("Tab"))
		.unwrap_err();
	assert!(matches!(
		err,
		ContentTypeError::Duplicate { ref name, portal_id: None } if name == "Tab"
	));

	// Same name in a portal scope is allowed once
	controller
		.add_content_type(ContentType::new("Tab").with_portal_id(1))
		.unwrap();
	let err = controller
		.add_content_type(ContentType::new("Tab").with_portal_id(1))
		.unwrap_err();
	assert!(matches!(err, ContentTypeError::Duplicate { portal_id: Some(1), .. }));
}

/// Test update replaces the stored row
#[rstest]
fn test_update(controller: ContentTypeController) {
	// Arrange
	let id = controller
		.add_content_type(ContentType::new("Article"))
		.unwrap();
	let updated = ContentType::new("Blog Post")
		.with_id(id)
		.with_structured(true);

	// Act
	controller.update_content_type(&updated).unwrap();

	// Assert
	let stored = controller.get_content_types().unwrap();
	assert_eq!(stored.last(), Some(&updated));
}

/// Test update validates id, existence, name and uniqueness
#[rstest]
fn test_update_errors(controller: ContentTypeController) {
	let err = controller
		.update_content_type(&ContentType::new("Tab"))
		.unwrap_err();
	assert!(matches!(err, ContentTypeError::Validation(_)));

	let err = controller
		.update_content_type(&ContentType::new("Tab").with_id(42))
		.unwrap_err();
	assert!(matches!(err, ContentTypeError::NotFound(42)));

	let err = controller
		.update_content_type(&ContentType::new("").with_id(1))
		.unwrap_err();
	assert!(matches!(err, ContentTypeError::Validation(_)));

	let err = controller
		.update_content_type(&ContentType::new("Tab").with_id(1))
		.unwrap_err();
	assert!(matches!(err, ContentTypeError::Duplicate { .. }));
}

/// Test updating a row to its own name is not a duplicate
#[rstest]
fn test_update_keeps_own_name(controller: ContentTypeController) {
	let ct = ContentType::new("Module").with_id(2).with_structured(true);
	controller.update_content_type(&ct).unwrap();
	assert!(controller.get_content_types().unwrap()[1].is_structured);
}

/// Test delete removes the row and keeps the order of the others
#[rstest]
fn test_delete(controller: ContentTypeController) {
	// Act
	controller
		.delete_content_type(&ContentType::new("Module").with_id(2))
		.unwrap();

	// Assert
	let names: Vec<String> = controller
		.get_content_types()
		.unwrap()
		.iter()
		.map(ToString::to_string)
		.collect();
	assert_eq!(names, vec!["DesktopModule", "Tab"]);

	let err = controller
		.delete_content_type(&ContentType::new("Module").with_id(2))
		.unwrap_err();
	assert!(matches!(err, ContentTypeError::NotFound(2)));
}

/// Test delete requires an id
#[rstest]
fn test_delete_requires_id(controller: ContentTypeController) {
	let err = controller
		.delete_content_type(&ContentType::new("Tab"))
		.unwrap_err();
	assert!(matches!(err, ContentTypeError::Validation(_)));
}

/// Test portal filtering returns global types plus the portal's own
#[rstest]
fn test_get_content_types_for_portal(controller: ContentTypeController) {
	// Arrange
	controller
		.add_content_type(ContentType::new("Gallery").with_portal_id(0))
		.unwrap();
	controller
		.add_content_type(ContentType::new("Wiki").with_portal_id(1))
		.unwrap();

	// Act
	let portal_zero: Vec<String> = controller
		.get_content_types_for_portal(0)
		.iter()
		.map(ToString::to_string)
		.collect();

	// Assert
	assert_eq!(portal_zero, vec!["DesktopModule", "Module", "Tab", "Gallery"]);
}

/// Test stored rows survive conversion to and from storage rows
#[rstest]
fn test_rows_from_controller(controller: ContentTypeController) {
	// Arrange
	controller
		.add_content_type(ContentType::new("Survey").with_portal_id(4).with_structured(true))
		.unwrap();

	// Act
	let rows: Vec<MapRow> = controller
		.get_content_types()
		.unwrap()
		.iter()
		.map(ContentType::to_row)
		.collect();
	let restored: Vec<ContentType> = rows
		.iter()
		.map(|row| ContentType::from_row(row).unwrap())
		.collect();

	// Assert
	assert_eq!(restored, controller.get_content_types().unwrap());
}

/// Test the null portal sentinel is stored as a global scope
///
/// **Test Intent**: Verify a `-1` portal id cannot create a second global
/// content type with a reserved name
#[rstest]
fn test_portal_sentinel_is_global_scope(controller: ContentTypeController) {
	// Arrange
	let mut sentinel_scoped = ContentType::new("Tab");
	sentinel_scoped.portal_id = Some(-1);

	// Act
	let err = controller.add_content_type(sentinel_scoped).unwrap_err();

	// Assert
	assert!(matches!(
		err,
		ContentTypeError::Duplicate { ref name, portal_id: None } if name == "Tab"
	));
	assert_eq!(controller.len(), 3);
}

/// Test add and update store sentinel ids as unset
#[rstest]
fn test_sentinel_ids_are_normalized(controller: ContentTypeController) {
	// Arrange
	let mut ct = ContentType::new("Survey");
	ct.portal_id = Some(-1);
	let id = controller.add_content_type(ct).unwrap();

	let mut updated = ContentType::new("Survey").with_id(id).with_structured(true);
	updated.portal_id = Some(-1);

	// Act
	controller.update_content_type(&updated).unwrap();

	// Assert
	let stored = controller.get_content_types().unwrap();
	let survey = stored.last().unwrap();
	assert!(survey.is_global());
	assert!(survey.is_structured);
	assert_eq!(ContentType::from_row(&survey.to_row()).unwrap(), *survey);
}
