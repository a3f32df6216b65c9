//! Content type repositories
//!
//! [`ContentTypeRepository`] is the seam between content type lookups and the
//! storage layer. [`ContentTypeController`] is the in-memory reference
//! implementation used by tests, fixtures and embedded deployments.

use crate::error::{ContentTypeError, Result};
use crate::model::{ContentType, Entity};
use crate::null;
use crate::well_known::ReservedContentType;
use parking_lot::RwLock;

/// Source of content type records
pub trait ContentTypeRepository: Send + Sync {
	/// Returns every known content type
	///
	/// The order must be stable between calls; lookups that scan the result pick
	/// the first match.
	fn get_content_types(&self) -> Result<Vec<ContentType>>;
}

/// In-memory content type controller
///
/// Rows are kept in insertion order. Ids are assigned sequentially starting at 1
/// and are never reused.
///
/// # Example
///
/// ```rust
/// use portico_contenttypes::{ContentType, ContentTypeController, ContentTypeRepository};
///
/// let controller = ContentTypeController::new();
/// let id = controller.add_content_type(ContentType::new("Article")).unwrap();
///
/// let all = controller.get_content_types().unwrap();
/// assert_eq!(all[0].id, Some(id));
/// ```
#[derive(Debug, Default)]
pub struct ContentTypeController {
	state: RwLock<ControllerState>,
}

#[derive(Debug, Default)]
struct ControllerState {
	rows: Vec<ContentType>,
	last_id: i32,
}

impl ControllerState {
	fn position(&self, id: i32) -> Option<usize> {
		self.rows.iter().position(|ct| ct.id == Some(id))
	}

	fn ensure_unique(&self, ct: &ContentType) -> Result<()> {
		let duplicate = self
			.rows
			.iter()
			.any(|row| row.id != ct.id && row.name == ct.name && row.portal_id == ct.portal_id);
		if duplicate {
			return Err(ContentTypeError::Duplicate {
				name: ct.name().to_string(),
				portal_id: ct.portal_id,
			});
		}
		Ok(())
	}
}

/// Clears ids holding the null integer sentinel so they match the storage boundary
fn normalize(mut ct: ContentType) -> ContentType {
	ct.id = ct.id.and_then(null::integer_from_sentinel);
	ct.portal_id = ct.portal_id.and_then(null::integer_from_sentinel);
	ct
}

fn require_name(ct: &ContentType) -> Result<()> {
	if ct.name().is_empty() {
		return Err(ContentTypeError::Validation(
			"content type name must not be empty".to_string(),
		));
	}
	Ok(())
}

fn require_id(ct: &ContentType) -> Result<i32> {
	ct.id.ok_or_else(|| {
		ContentTypeError::Validation(format!(
			"content type '{}' has no {}",
			ct.name(),
			ContentType::primary_key_field()
		))
	})
}

impl ContentTypeController {
	/// Creates an empty controller
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a controller seeded with the reserved global content types
	///
	/// `DesktopModule`, `Module` and `Tab` receive ids 1, 2 and 3.
	pub fn with_defaults() -> Self {
		let controller = Self::new();
		{
			let mut state = controller.state.write();
			for kind in ReservedContentType::ALL {
				state.last_id += 1;
				let id = state.last_id;
				state.rows.push(ContentType::new(kind.name()).with_id(id));
			}
		}
		controller
	}

	/// Adds a content type and returns its assigned id
	///
	/// Any id already set on `ct` is replaced. Fails with
	/// [`ContentTypeError::Validation`] for an empty name and
	/// [`ContentTypeError::Duplicate`] when the name is taken in the same portal
	/// scope.
	pub fn add_content_type(&self, ct: ContentType) -> Result<i32> {
		let mut ct = normalize(ct);
		require_name(&ct)?;
		let mut state = self.state.write();
		ct.id = None;
		state.ensure_unique(&ct)?;

		state.last_id += 1;
		let id = state.last_id;
		ct.set_primary_key(id);
		tracing::debug!(id, name = ct.name(), portal_id = ?ct.portal_id, "Added content type");
		state.rows.push(ct);
		Ok(id)
	}

	/// Replaces the stored row with the same id
	pub fn update_content_type(&self, ct: &ContentType) -> Result<()> {
		let ct = normalize(ct.clone());
		let id = require_id(&ct)?;
		require_name(&ct)?;
		let mut state = self.state.write();
		let index = state.position(id).ok_or(ContentTypeError::NotFound(id))?;
		state.ensure_unique(&ct)?;

		state.rows[index] = ct.clone();
		tracing::debug!(id, name = ct.name(), "Updated content type");
		Ok(())
	}

	/// Removes the stored row with the same id
	pub fn delete_content_type(&self, ct: &ContentType) -> Result<()> {
		let id = require_id(ct)?;
		let mut state = self.state.write();
		let index = state.position(id).ok_or(ContentTypeError::NotFound(id))?;

		state.rows.remove(index);
		tracing::debug!(id, "Deleted content type");
		Ok(())
	}

	/// Returns the global content types plus those scoped to `portal_id`
	pub fn get_content_types_for_portal(&self, portal_id: i32) -> Vec<ContentType> {
		self.state
			.read()
			.rows
			.iter()
			.filter(|ct| ct.is_global() || ct.portal_id == Some(portal_id))
			.cloned()
			.collect()
	}

	/// Number of stored content types
	pub fn len(&self) -> usize {
		self.state.read().rows.len()
	}

	/// Returns `true` if no content types are stored
	pub fn is_empty(&self) -> bool {
		self.state.read().rows.is_empty()
	}
}

impl ContentTypeRepository for ContentTypeController {
	fn get_content_types(&self) -> Result<Vec<ContentType>> {
		Ok(self.state.read().rows.clone())
	}
}
