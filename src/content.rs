//! Content groups and the registry group rules are evaluated against.

use serde::{Deserialize, Serialize};

/// One registered asset inside a content group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    /// Unique id of the asset; matched against location keys.
    pub guid: String,
    /// Internal id of the bundle file the asset was packed into.
    #[serde(default)]
    pub bundle_file_id: Option<String>,
    /// Whether the entry is a folder whose contents are addressable.
    #[serde(default)]
    pub folder: bool,
    /// Unique ids of the assets inside a folder entry.
    #[serde(default)]
    pub sub_assets: Vec<String>,
}

impl AssetEntry {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            bundle_file_id: None,
            folder: false,
            sub_assets: Vec::new(),
        }
    }

    /// Folder entry containing `sub_assets`.
    pub fn folder<I, S>(guid: impl Into<String>, sub_assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guid: guid.into(),
            bundle_file_id: None,
            folder: true,
            sub_assets: sub_assets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn in_bundle(mut self, bundle_file_id: impl Into<String>) -> Self {
        self.bundle_file_id = Some(bundle_file_id.into());
        self
    }

    fn packed_into(&self, internal_id: &str) -> bool {
        self.bundle_file_id.as_deref() == Some(internal_id)
    }

    /// Whether this entry claims a location with the given keys.
    ///
    /// Folders claim their sub-assets as well as themselves.
    pub fn claims_any(&self, keys: &[String]) -> bool {
        let claims_sub_asset = self.folder && self.sub_assets.iter().any(|a| keys.contains(a));
        claims_sub_asset || keys.contains(&self.guid)
    }
}

/// A named set of asset entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentGroup {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<AssetEntry>,
}

impl ContentGroup {
    pub fn new(name: impl Into<String>, entries: Vec<AssetEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Whether a folder entry of this group was packed into `internal_id`.
    pub fn has_folder_in_bundle(&self, internal_id: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.folder && e.packed_into(internal_id))
    }

    /// Whether any entry of this group claims a location with `keys`.
    pub fn claims_any(&self, keys: &[String]) -> bool {
        self.entries.iter().any(|e| e.claims_any(keys))
    }
}

/// Registry of content groups for one build.
///
/// Folder entries are expanded into their sub-assets by the asset build and
/// have no record of their own in the gathered entry index, so
/// [`BuildContext::entry_for_bundle`] never returns one.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    groups: Vec<ContentGroup>,
}

impl BuildContext {
    pub fn new(groups: Vec<ContentGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[ContentGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&ContentGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// First gathered entry packed into `internal_id`, with its owning group.
    pub fn entry_for_bundle(&self, internal_id: &str) -> Option<(&ContentGroup, &AssetEntry)> {
        self.groups.iter().find_map(|group| {
            group
                .entries
                .iter()
                .find(|e| !e.folder && e.packed_into(internal_id))
                .map(|entry| (group, entry))
        })
    }
}
