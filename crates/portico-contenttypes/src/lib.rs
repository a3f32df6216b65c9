//! # portico-contenttypes
//!
//! Content type records for the Portico content management framework.
//!
//! A content type tells the framework what kind of content (a module, a tab, a
//! desktop module, or anything a module defines) a content item belongs to, so
//! generic subsystems such as taxonomy and folksonomy tagging can categorize
//! heterogeneous content.
//!
//! ## Features
//!
//! - `ContentType` record mapped to the `ContentTypes` table
//! - Null sentinel conversion at the row boundary
//! - `WellKnownContentTypes`: memoized lookups for `DesktopModule`, `Module` and `Tab`
//! - `ContentTypeController`: in-memory repository with add/update/delete
//! - Deprecated `Hydratable` API (`key_id`, `fill`) for older callers
//! - TOML settings for the cache parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use portico_contenttypes::prelude::*;
//! use std::sync::Arc;
//!
//! let controller = Arc::new(ContentTypeController::with_defaults());
//! controller.add_content_type(ContentType::new("Article").with_portal_id(0)).unwrap();
//!
//! let registry = WellKnownContentTypes::new(controller.clone());
//! let module = registry.module().unwrap().unwrap();
//! assert_eq!(module.to_string(), "Module");
//! ```

pub mod error;
pub mod legacy;
pub mod model;
pub mod null;
pub mod repository;
pub mod row;
pub mod settings;
pub mod well_known;

pub use error::{ContentTypeError, Result};
#[allow(deprecated)]
pub use legacy::Hydratable;
pub use model::{CachePriority, CacheSettings, ContentType, Entity};
pub use repository::{ContentTypeController, ContentTypeRepository};
pub use row::{DataRow, MapRow};
pub use settings::ContentTypeSettings;
pub use well_known::{ReservedContentType, WellKnownContentTypes};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::error::{ContentTypeError, Result};
	pub use crate::model::{ContentType, Entity};
	pub use crate::repository::{ContentTypeController, ContentTypeRepository};
	pub use crate::row::{DataRow, MapRow};
	pub use crate::well_known::{ReservedContentType, WellKnownContentTypes};
}
