//! # Catalog Rules
//!
//! A [`CatalogRule`] names a target catalog and decides which locations
//! belong to it. Two flavors exist:
//!
//! - **Group rules** claim the locations produced from a set of registered
//!   content groups.
//! - **Prefix rules** claim the locations whose primary key starts with a
//!   given string.
//!
//! Rules are evaluated in declaration order and the first match wins; that
//! ordering is applied by the partition phase, not here. A rule with nothing
//! configured (no groups, or an empty prefix) matches nothing.

use crate::content::BuildContext;
use crate::location::Location;

/// Membership test of a catalog rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatcher {
    /// Location belongs if it was produced from one of these content groups.
    Groups(Vec<String>),
    /// Location belongs if its primary key starts with this prefix.
    Prefix(String),
}

/// A named catalog and the predicate deciding its membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRule {
    /// Catalog identifier.
    pub name: String,
    /// File name of the emitted catalog.
    pub filename: String,
    /// Whether the catalog is loaded automatically at startup.
    pub register: bool,
    /// Directory the catalog and its bundles are deployed to at build time.
    /// May contain profile variables.
    pub build_path: String,
    /// Directory bundles of this catalog are loaded from at runtime.
    /// May contain profile variables.
    pub runtime_load_path: String,
    pub matcher: RuleMatcher,
}

impl CatalogRule {
    /// Rule claiming the locations of `groups`.
    pub fn groups<I, S>(name: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_matcher(
            name.into(),
            RuleMatcher::Groups(groups.into_iter().map(Into::into).collect()),
        )
    }

    /// Rule claiming the locations whose primary key starts with `prefix`.
    ///
    /// The catalog is named after the prefix; its file name drops any
    /// trailing separator so `UI/` is written as `UI.json`.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let stem = prefix.trim_end_matches(['/', '\\']).to_string();
        Self::with_matcher(prefix.clone(), RuleMatcher::Prefix(prefix))
            .with_filename(format!("{}.json", stem))
    }

    fn with_matcher(name: String, matcher: RuleMatcher) -> Self {
        Self {
            filename: format!("{}.json", name),
            name,
            register: false,
            build_path: String::new(),
            runtime_load_path: String::new(),
            matcher,
        }
    }

    pub fn with_paths(
        mut self,
        build_path: impl Into<String>,
        runtime_load_path: impl Into<String>,
    ) -> Self {
        self.build_path = build_path.into();
        self.runtime_load_path = runtime_load_path.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_register(mut self, register: bool) -> Self {
        self.register = register;
        self
    }

    /// Whether the rule has anything to match against.
    pub fn is_configured(&self) -> bool {
        match &self.matcher {
            RuleMatcher::Groups(groups) => !groups.is_empty(),
            RuleMatcher::Prefix(prefix) => !prefix.is_empty(),
        }
    }

    /// Whether `location` belongs to this rule's catalog.
    pub fn matches(&self, location: &Location, context: &BuildContext) -> bool {
        if !self.is_configured() {
            return false;
        }
        match &self.matcher {
            RuleMatcher::Groups(groups) => matches_groups(groups, location, context),
            RuleMatcher::Prefix(prefix) => location
                .primary_key()
                .is_some_and(|key| key.starts_with(prefix.as_str())),
        }
    }
}

fn matches_groups(groups: &[String], location: &Location, context: &BuildContext) -> bool {
    let mut configured = groups.iter().filter_map(|name| context.group(name));

    if location.resource_type.is_bundle() {
        if let Some((owner, _)) = context.entry_for_bundle(&location.internal_id) {
            return groups.iter().any(|name| *name == owner.name);
        }
        // Folder assets have no gathered entry of their own.
        return configured.any(|group| group.has_folder_in_bundle(&location.internal_id));
    }

    configured.any(|group| group.claims_any(&location.keys))
}
