//! Content type settings
//!
//! Deployments may override the cache parameters advertised by
//! [`ContentType`](crate::ContentType) through a TOML document:
//!
//! ```toml
//! [cache]
//! key = "ContentTypes"
//! priority = "above_normal"
//! timeout_minutes = 20
//! ```
//!
//! Every key is optional; missing keys fall back to the entity defaults.
//!
//! [`Entity::cache_settings`](crate::Entity::cache_settings) is the declared,
//! compile-time value. The cache layer that stores the content type collection
//! reads the effective parameters from [`ContentTypeSettings::cache`] instead.

use crate::error::{ContentTypeError, Result};
use crate::model::{CachePriority, CacheSettings, ContentType, Entity};
use serde::Deserialize;
use std::path::Path;

/// Settings for the content types system
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentTypeSettings {
	/// Cache parameter overrides
	pub cache: CacheOverrides,
}

/// Optional overrides for [`CacheSettings`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheOverrides {
	pub key: Option<String>,
	pub priority: Option<CachePriority>,
	pub timeout_minutes: Option<u64>,
}

impl ContentTypeSettings {
	/// Parses settings from a TOML string
	///
	/// # Example
	///
	/// ```rust
	/// use portico_contenttypes::settings::ContentTypeSettings;
	///
	/// let settings = ContentTypeSettings::from_toml_str("[cache]\ntimeout_minutes = 5").unwrap();
	/// assert_eq!(settings.cache().timeout_minutes, 5);
	/// assert_eq!(settings.cache().key, "ContentTypes");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| ContentTypeError::Config(e.to_string()))
	}

	/// Reads settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		tracing::debug!(path = %path.display(), "Loaded content type settings");
		Self::from_toml_str(&source)
	}

	/// Effective cache parameters
	///
	/// Starts from the entity's declared cache settings and applies overrides.
	pub fn cache(&self) -> CacheSettings {
		let mut settings = ContentType::cache_settings().unwrap_or_else(|| {
			CacheSettings::new(ContentType::table_name(), CachePriority::default(), 0)
		});
		if let Some(key) = &self.cache.key {
			settings.key = key.clone();
		}
		if let Some(priority) = self.cache.priority {
			settings.priority = priority;
		}
		if let Some(timeout) = self.cache.timeout_minutes {
			settings.timeout_minutes = timeout;
		}
		settings
	}
}
