//! # Locations
//!
//! A [`Location`] is one addressable content entry produced by the asset
//! build: a set of keys (the first is the primary key), a resource type, an
//! internal load path, the keys it depends on, the provider that loads it and
//! an opaque provider-specific data blob.
//!
//! Locations are stored in a [`LocationArena`] and addressed by
//! [`LocationId`]. Catalog descriptors hold ids rather than copies, so a
//! location shared by two catalogs is the same id in both, and "visited"
//! bookkeeping during dependency closure is a set of ids.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Declared resource type of a location.
///
/// Only bundle files are treated specially: their load path is rewritten to
/// the destination catalog's runtime load directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    /// A packaged binary bundle file.
    Bundle,
    /// Any other resource type, kept by name.
    Other(String),
}

impl ResourceType {
    /// Canonical name of the bundle resource type.
    pub const BUNDLE: &'static str = "bundle";
    /// Name used by the asset build for bundle resources.
    pub const BUNDLE_RESOURCE: &'static str = "IAssetBundleResource";

    pub fn is_bundle(&self) -> bool {
        matches!(self, ResourceType::Bundle)
    }
}

impl From<String> for ResourceType {
    fn from(value: String) -> Self {
        if value == Self::BUNDLE || value == Self::BUNDLE_RESOURCE {
            ResourceType::Bundle
        } else {
            ResourceType::Other(value)
        }
    }
}

impl From<&str> for ResourceType {
    fn from(value: &str) -> Self {
        ResourceType::from(value.to_string())
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        match value {
            ResourceType::Bundle => ResourceType::BUNDLE.to_string(),
            ResourceType::Other(name) => name,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Bundle => f.write_str(ResourceType::BUNDLE),
            ResourceType::Other(name) => f.write_str(name),
        }
    }
}

/// An addressable content entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Ordered keys; the first one is the primary key.
    #[serde(default)]
    pub keys: Vec<String>,
    pub resource_type: ResourceType,
    /// Internal load path, possibly containing the build-root placeholder.
    pub internal_id: String,
    /// Identifier of the provider that loads this location.
    #[serde(default)]
    pub provider: String,
    /// Keys of the locations this one depends on.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Opaque provider-specific data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Location {
    /// Create a location with no dependencies, provider or data.
    pub fn new(
        keys: Vec<String>,
        resource_type: impl Into<ResourceType>,
        internal_id: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            resource_type: resource_type.into(),
            internal_id: internal_id.into(),
            provider: String::new(),
            dependencies: Vec::new(),
            data: None,
        }
    }

    /// Set the dependency keys.
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Set the provider identifier.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set the provider data blob.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The first key, if the location has any keys.
    pub fn primary_key(&self) -> Option<&str> {
        self.keys.first().map(String::as_str)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Copy of this location loaded from a different path.
    ///
    /// Keys, provider, dependencies and data are carried over unchanged.
    pub fn relocated(&self, internal_id: impl Into<String>) -> Self {
        Self {
            keys: self.keys.clone(),
            resource_type: self.resource_type.clone(),
            internal_id: internal_id.into(),
            provider: self.provider.clone(),
            dependencies: self.dependencies.clone(),
            data: self.data.clone(),
        }
    }
}

/// Handle of a location stored in a [`LocationArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only storage for locations.
#[derive(Debug, Clone, Default)]
pub struct LocationArena {
    locations: Vec<Location>,
}

impl LocationArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a location and return its handle.
    pub fn push(&mut self, location: Location) -> LocationId {
        self.locations.push(location);
        LocationId(self.locations.len() - 1)
    }

    pub fn get(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    /// Handles of every stored location, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = LocationId> {
        (0..self.locations.len()).map(LocationId)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromIterator<Location> for LocationArena {
    fn from_iter<T: IntoIterator<Item = Location>>(iter: T) -> Self {
        Self {
            locations: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<LocationId> for LocationArena {
    type Output = Location;

    fn index(&self, id: LocationId) -> &Location {
        self.get(id)
    }
}

/// Parse a JSON array of locations.
pub fn parse(content: &str) -> Result<Vec<Location>> {
    serde_json::from_str(content).map_err(|e| Error::LocationInput {
        message: e.to_string(),
    })
}

/// Read a JSON array of locations from a file.
pub fn from_file(path: &Path) -> Result<Vec<Location>> {
    let content = fs::read_to_string(path).map_err(|e| Error::LocationInput {
        message: format!("Failed to read '{}': {}", path.display(), e),
    })?;
    parse(&content)
}
