//! Well-known content types
//!
//! `DesktopModule`, `Module` and `Tab` are reserved content type names used by
//! the framework itself. [`WellKnownContentTypes`] resolves each of them from a
//! repository on first use and keeps the record for the registry's lifetime.
//!
//! Only successful lookups are memoized. When the repository has no record with
//! a reserved name, the accessor returns `None` and the next call queries the
//! repository again.
//!
//! The check, query and store steps are not performed atomically. Two threads
//! hitting an empty slot at the same time may both query the repository and both
//! store a record; the stored records are equivalent, so the only cost is the
//! duplicate query.
//!
//! # Example
//!
//! ```rust
//! use portico_contenttypes::{ContentTypeController, WellKnownContentTypes};
//! use std::sync::Arc;
//!
//! let registry = WellKnownContentTypes::new(Arc::new(ContentTypeController::with_defaults()));
//! let tab = registry.tab().unwrap().unwrap();
//! assert_eq!(tab.to_string(), "Tab");
//! ```

use crate::error::Result;
use crate::model::ContentType;
use crate::repository::ContentTypeRepository;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Reserved content type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservedContentType {
	DesktopModule,
	Module,
	Tab,
}

impl ReservedContentType {
	/// All reserved content types, in registration order
	pub const ALL: [ReservedContentType; 3] = [Self::DesktopModule, Self::Module, Self::Tab];

	/// The reserved name
	pub const fn name(self) -> &'static str {
		match self {
			Self::DesktopModule => "DesktopModule",
			Self::Module => "Module",
			Self::Tab => "Tab",
		}
	}

	/// Looks up a reserved content type by exact name
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}
}

impl fmt::Display for ReservedContentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Memoizing registry for the reserved content types
pub struct WellKnownContentTypes {
	repository: Arc<dyn ContentTypeRepository>,
	desktop_module: RwLock<Option<Arc<ContentType>>>,
	module: RwLock<Option<Arc<ContentType>>>,
	tab: RwLock<Option<Arc<ContentType>>>,
}

impl WellKnownContentTypes {
	/// Creates a registry backed by `repository`
	pub fn new(repository: Arc<dyn ContentTypeRepository>) -> Self {
		Self {
			repository,
			desktop_module: RwLock::new(None),
			module: RwLock::new(None),
			tab: RwLock::new(None),
		}
	}

	/// The `DesktopModule` content type
	pub fn desktop_module(&self) -> Result<Option<Arc<ContentType>>> {
		self.get(ReservedContentType::DesktopModule)
	}

	/// The `Module` content type
	pub fn module(&self) -> Result<Option<Arc<ContentType>>> {
		self.get(ReservedContentType::Module)
	}

	/// The `Tab` content type
	pub fn tab(&self) -> Result<Option<Arc<ContentType>>> {
		self.get(ReservedContentType::Tab)
	}

	/// Resolves a reserved content type
	///
	/// Returns the memoized record when present. Otherwise queries the
	/// repository, takes the first record whose name matches exactly and
	/// memoizes it. A miss returns `Ok(None)` and leaves the slot empty.
	/// Repository errors are returned unchanged.
	pub fn get(&self, kind: ReservedContentType) -> Result<Option<Arc<ContentType>>> {
		let slot = self.slot(kind);
		if let Some(cached) = slot.read().as_ref() {
			tracing::trace!(content_type = %kind, "Well-known content type cache hit");
			return Ok(Some(Arc::clone(cached)));
		}

		tracing::debug!(content_type = %kind, "Querying repository for well-known content type");
		let found = self
			.repository
			.get_content_types()?
			.into_iter()
			.find(|ct| ct.has_name(kind.name()));

		match found {
			Some(ct) => {
				let ct = Arc::new(ct);
				*slot.write() = Some(Arc::clone(&ct));
				Ok(Some(ct))
			}
			None => {
				tracing::debug!(content_type = %kind, "Well-known content type not found");
				Ok(None)
			}
		}
	}

	/// Returns `true` if `kind` has been resolved and memoized
	pub fn is_cached(&self, kind: ReservedContentType) -> bool {
		self.slot(kind).read().is_some()
	}

	/// Forgets every memoized record
	pub fn reset(&self) {
		for kind in ReservedContentType::ALL {
			*self.slot(kind).write() = None;
		}
	}

	fn slot(&self, kind: ReservedContentType) -> &RwLock<Option<Arc<ContentType>>> {
		match kind {
			ReservedContentType::DesktopModule => &self.desktop_module,
			ReservedContentType::Module => &self.module,
			ReservedContentType::Tab => &self.tab,
		}
	}
}

impl fmt::Debug for WellKnownContentTypes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WellKnownContentTypes")
			.field("desktop_module", &*self.desktop_module.read())
			.field("module", &*self.module.read())
			.field("tab", &*self.tab.read())
			.finish_non_exhaustive()
	}
}
