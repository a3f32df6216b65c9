//! Content types module.
//!
//! This module provides the content type record used by taxonomy and tagging to
//! categorize heterogeneous content.
//!
//! # Examples
//!
//! ```rust,no_run
//! use portico::contenttypes::{ContentType, ContentTypeController};
//! ```

#[cfg(feature = "contenttypes")]
pub use portico_contenttypes::*;
