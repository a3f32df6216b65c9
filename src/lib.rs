//! # Portico
//!
//! Content management framework building blocks.
//!
//! ## Feature Flags
//!
//! - `contenttypes` (default) - Content type records, the well-known content type
//!   registry and the in-memory content type controller
//!
//! ## Quick Example
//!
//! ```rust
//! use portico::contenttypes::{ContentTypeController, WellKnownContentTypes};
//! use std::sync::Arc;
//!
//! let registry = WellKnownContentTypes::new(Arc::new(ContentTypeController::with_defaults()));
//! assert_eq!(registry.desktop_module().unwrap().unwrap().to_string(), "DesktopModule");
//! ```

pub mod contenttypes;

#[cfg(feature = "contenttypes")]
pub use portico_contenttypes::{ContentType, ContentTypeError, WellKnownContentTypes};

/// Prelude module for convenient imports
pub mod prelude {
	#[cfg(feature = "contenttypes")]
	pub use portico_contenttypes::prelude::*;
}
