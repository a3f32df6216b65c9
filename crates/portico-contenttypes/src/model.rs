//! Content type record and its persistence metadata
//!
//! A content type tells the framework what kind of module or functionality a
//! content item belongs to. Modules that want their content categorized by the
//! taxonomy or folksonomy systems register their own content type.

use crate::error::Result;
use crate::null::{self, RawValue};
use crate::row::{DataRow, MapRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Column holding the content type id
pub const COLUMN_ID: &str = "ContentTypeID";
/// Column holding the content type name
pub const COLUMN_NAME: &str = "ContentType";
/// Column holding the owning portal id
pub const COLUMN_PORTAL_ID: &str = "PortalID";
/// Column holding the structured flag
pub const COLUMN_IS_STRUCTURED: &str = "IsStructured";

/// Priority hint for the external cache layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePriority {
	Low,
	BelowNormal,
	#[default]
	Normal,
	AboveNormal,
	High,
	NotRemovable,
}

/// Cache parameters an entity advertises to the external cache layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheSettings {
	/// Cache key the entity's collection is stored under
	pub key: String,
	/// Eviction priority
	pub priority: CachePriority,
	/// Entry lifetime in minutes
	pub timeout_minutes: u64,
}

impl CacheSettings {
	/// Creates cache settings
	pub fn new(key: impl Into<String>, priority: CachePriority, timeout_minutes: u64) -> Self {
		Self {
			key: key.into(),
			priority,
			timeout_minutes,
		}
	}

	/// Entry lifetime as a [`Duration`], saturating at `u64::MAX` seconds
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_minutes.saturating_mul(60))
	}
}

/// Persistence mapping metadata for a row-mapped entity
///
/// Consumed by the data access and cache layers; this crate only declares it.
pub trait Entity {
	/// Primary key type
	type PrimaryKey;

	/// Logical table name
	fn table_name() -> &'static str;

	/// Primary key column
	fn primary_key_field() -> &'static str;

	/// Mapped columns, in storage order
	fn columns() -> &'static [&'static str];

	/// Declared cache parameters, if the entity is cacheable
	///
	/// Deployment overrides are applied on top of this value by
	/// [`ContentTypeSettings::cache`](crate::ContentTypeSettings::cache).
	fn cache_settings() -> Option<CacheSettings> {
		None
	}

	/// Current primary key, `None` until assigned by storage
	fn primary_key(&self) -> Option<Self::PrimaryKey>;

	/// Assigns the primary key
	fn set_primary_key(&mut self, value: Self::PrimaryKey);
}

/// Content type of a content item
///
/// Serialized with the legacy member names (`ContentTypeId`, `ContentType`,
/// `PortalID`, `IsStructured`) that older clients bind to.
///
/// # Example
///
/// ```rust
/// use portico_contenttypes::ContentType;
///
/// let ct = ContentType::new("Module");
/// assert_eq!(ct.to_string(), "Module");
/// assert!(ct.id.is_none());
/// assert!(ct.portal_id.is_none());
/// assert!(!ct.is_structured);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentType {
	/// Content type id, assigned by storage on insert
	#[serde(rename = "ContentTypeId", default)]
	pub id: Option<i32>,
	/// Content type name
	#[serde(rename = "ContentType", default)]
	pub name: Option<String>,
	/// Owning portal, `None` for global content types
	#[serde(rename = "PortalID", default)]
	pub portal_id: Option<i32>,
	/// Whether content of this type follows a structured schema
	#[serde(rename = "IsStructured", default)]
	pub is_structured: bool,
}

impl ContentType {
	/// Creates a content type with the given name
	///
	/// The name is stored verbatim; empty names are accepted.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Sets the id, builder style
	///
	/// The null integer sentinel leaves the id unset.
	pub fn with_id(mut self, id: i32) -> Self {
		self.id = null::integer_from_sentinel(id);
		self
	}

	/// Scopes the content type to a portal, builder style
	///
	/// The null integer sentinel makes the content type global.
	pub fn with_portal_id(mut self, portal_id: i32) -> Self {
		self.portal_id = null::integer_from_sentinel(portal_id);
		self
	}

	/// Sets the structured flag, builder style
	pub fn with_structured(mut self, is_structured: bool) -> Self {
		self.is_structured = is_structured;
		self
	}

	/// Name as a string slice, the null string when unset
	pub fn name(&self) -> &str {
		self.name.as_deref().unwrap_or(null::NULL_STRING)
	}

	/// Returns `true` if the name equals `name` exactly (case-sensitive)
	///
	/// An unset name never matches.
	pub fn has_name(&self, name: &str) -> bool {
		self.name.as_deref() == Some(name)
	}

	/// Returns `true` if the content type is not scoped to a portal
	pub fn is_global(&self) -> bool {
		self.portal_id.is_none()
	}

	/// Materializes a content type from a storage row
	///
	/// Reads all four mapped columns, translating null sentinels.
	///
	/// # Example
	///
	/// ```rust
	/// use portico_contenttypes::ContentType;
	/// use portico_contenttypes::row::MapRow;
	///
	/// let row = MapRow::new()
	///     .with("ContentTypeID", 3)
	///     .with("ContentType", "Tab")
	///     .with("PortalID", -1)
	///     .with("IsStructured", false);
	/// let ct = ContentType::from_row(&row).unwrap();
	/// assert_eq!(ct.id, Some(3));
	/// assert!(ct.is_global());
	/// ```
	pub fn from_row(row: &dyn DataRow) -> Result<Self> {
		Ok(Self {
			id: null::optional_integer(COLUMN_ID, &row.value(COLUMN_ID)?)?,
			name: null::optional_string(&row.value(COLUMN_NAME)?),
			portal_id: null::optional_integer(COLUMN_PORTAL_ID, &row.value(COLUMN_PORTAL_ID)?)?,
			is_structured: null::set_null_boolean(
				COLUMN_IS_STRUCTURED,
				&row.value(COLUMN_IS_STRUCTURED)?,
			)?,
		})
	}

	/// Converts the content type into a storage row
	///
	/// Unset integers are written as the null integer sentinel and an unset name
	/// as a database null.
	pub fn to_row(&self) -> MapRow {
		MapRow::new()
			.with(COLUMN_ID, null::integer_to_sentinel(self.id))
			.with(COLUMN_NAME, RawValue::from(self.name.clone()))
			.with(COLUMN_PORTAL_ID, null::integer_to_sentinel(self.portal_id))
			.with(COLUMN_IS_STRUCTURED, self.is_structured)
	}
}

impl fmt::Display for ContentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl Entity for ContentType {
	type PrimaryKey = i32;

	fn table_name() -> &'static str {
		"ContentTypes"
	}

	fn primary_key_field() -> &'static str {
		COLUMN_ID
	}

	fn columns() -> &'static [&'static str] {
		&[COLUMN_ID, COLUMN_NAME, COLUMN_PORTAL_ID, COLUMN_IS_STRUCTURED]
	}

	fn cache_settings() -> Option<CacheSettings> {
		Some(CacheSettings::new("ContentTypes", CachePriority::AboveNormal, 20))
	}

	fn primary_key(&self) -> Option<i32> {
		self.id
	}

	fn set_primary_key(&mut self, value: i32) {
		self.id = Some(value);
	}
}
