//! Deprecated manual hydration API
//!
//! Before row materialization moved into the repository layer, entities were
//! populated field by field from a raw row cursor and exposed a generic integer
//! key. [`Hydratable`] keeps that surface available for older callers.
//! New code should use [`ContentType::from_row`] and the `id` field.

#![allow(deprecated)]

use crate::error::Result;
use crate::model::{COLUMN_ID, COLUMN_NAME, ContentType};
use crate::null;
use crate::row::DataRow;

/// Entity that can be populated from a raw row cursor
#[deprecated(
	since = "0.1.0-alpha.1",
	note = "repositories materialize rows with `ContentType::from_row`; use the `id` field and `from_row` instead"
)]
pub trait Hydratable {
	/// Generic integer key, the null integer sentinel when unset
	fn key_id(&self) -> i32;

	/// Sets the generic integer key; the null integer sentinel clears it
	fn set_key_id(&mut self, value: i32);

	/// Copies the legacy columns from `row` into this entity
	fn fill(&mut self, row: &dyn DataRow) -> Result<()>;
}

impl Hydratable for ContentType {
	fn key_id(&self) -> i32 {
		null::integer_to_sentinel(self.id)
	}

	fn set_key_id(&mut self, value: i32) {
		self.id = null::integer_from_sentinel(value);
	}

	/// Sets `id` from `ContentTypeID` and `name` from `ContentType`.
	///
	/// `portal_id` and `is_structured` are left untouched. Errors raised by the
	/// row, such as a missing column, are returned unchanged.
	fn fill(&mut self, row: &dyn DataRow) -> Result<()> {
		self.id = null::optional_integer(COLUMN_ID, &row.value(COLUMN_ID)?)?;
		self.name = null::optional_string(&row.value(COLUMN_NAME)?);
		Ok(())
	}
}
