//! Layered settings with scope precedence
//!
//! Mirrors how the editor merges configuration: defaults, then the user's
//! settings, then the workspace's, then explicit overrides. Later scopes
//! override earlier ones key by key.

use crate::{ConfigurationStore, Result, Settings, WORKSPACE_SETTINGS_PATH};
use serde_json::Value;
use std::path::Path;

/// Where a settings layer comes from. Ordering is merge precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingsScope {
    Default,
    User,
    Workspace,
    Override,
}

impl SettingsScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::User => "user",
            Self::Workspace => "workspace",
            Self::Override => "override",
        }
    }
}

impl std::fmt::Display for SettingsScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings documents merged by scope.
#[derive(Debug, Clone, Default)]
pub struct LayeredSettings {
    /// Sorted by scope; layers of equal scope keep insertion order.
    layers: Vec<(SettingsScope, Settings)>,
}

impl LayeredSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer. A later layer of the same scope overrides an earlier one.
    pub fn push(&mut self, scope: SettingsScope, settings: Settings) {
        let idx = self.layers.partition_point(|(existing, _)| *existing <= scope);
        self.layers.insert(idx, (scope, settings));
    }

    /// Builder form of [`LayeredSettings::push`].
    pub fn with_layer(mut self, scope: SettingsScope, settings: Settings) -> Self {
        self.push(scope, settings);
        self
    }

    /// Load the user settings file and the workspace's `.vscode/settings.json`.
    ///
    /// Missing files are skipped. Unparseable files are errors.
    pub fn discover(user_settings: Option<&Path>, workspace_root: Option<&Path>) -> Result<Self> {
        let mut layered = Self::new();

        if let Some(path) = user_settings {
            if let Some(settings) = Settings::load_optional(path)? {
                tracing::debug!(?path, "Loaded user settings");
                layered.push(SettingsScope::User, settings);
            }
        }

        if let Some(root) = workspace_root {
            let path = root.join(WORKSPACE_SETTINGS_PATH);
            if let Some(settings) = Settings::load_optional(&path)? {
                tracing::debug!(?path, "Loaded workspace settings");
                layered.push(SettingsScope::Workspace, settings);
            }
        }

        Ok(layered)
    }

    /// The scope whose layer provides `key`, if any.
    pub fn scope_of(&self, key: &str) -> Option<SettingsScope> {
        self.layers
            .iter()
            .rev()
            .find(|(_, settings)| settings.get(key).is_some())
            .map(|(scope, _)| *scope)
    }

    pub fn layers(&self) -> impl Iterator<Item = (SettingsScope, &Settings)> {
        self.layers.iter().map(|(scope, settings)| (*scope, settings))
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ConfigurationStore for LayeredSettings {
    fn get(&self, key: &str) -> Option<&Value> {
        self.layers
            .iter()
            .rev()
            .find_map(|(_, settings)| settings.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "groovy.additional.libraries";

    #[test]
    fn workspace_overrides_user() {
        let layered = LayeredSettings::new()
            .with_layer(SettingsScope::Workspace, Settings::empty().with(KEY, "/ws"))
            .with_layer(SettingsScope::User, Settings::empty().with(KEY, "/user"));

        assert_eq!(layered.get_str(KEY), Some("/ws"));
        assert_eq!(layered.scope_of(KEY), Some(SettingsScope::Workspace));
    }

    #[test]
    fn lower_layer_fills_missing_key() {
        let layered = LayeredSettings::new()
            .with_layer(SettingsScope::User, Settings::empty().with(KEY, "/user"))
            .with_layer(
                SettingsScope::Workspace,
                Settings::empty().with("groovy.java.home", "/jdk"),
            );

        assert_eq!(layered.get_str(KEY), Some("/user"));
        assert_eq!(layered.scope_of(KEY), Some(SettingsScope::User));
    }

    #[test]
    fn same_scope_later_layer_wins() {
        let layered = LayeredSettings::new()
            .with_layer(SettingsScope::User, Settings::empty().with(KEY, "/first"))
            .with_layer(SettingsScope::User, Settings::empty().with(KEY, "/second"));

        assert_eq!(layered.get_str(KEY), Some("/second"));
    }

    #[test]
    fn override_beats_everything() {
        let layered = LayeredSettings::new()
            .with_layer(SettingsScope::Override, Settings::empty().with(KEY, "/cli"))
            .with_layer(SettingsScope::Workspace, Settings::empty().with(KEY, "/ws"))
            .with_layer(SettingsScope::Default, Settings::empty().with(KEY, "/default"));

        assert_eq!(layered.get_str(KEY), Some("/cli"));
        let scopes: Vec<_> = layered.layers().map(|(scope, _)| scope).collect();
        assert_eq!(
            scopes,
            vec![
                SettingsScope::Default,
                SettingsScope::Workspace,
                SettingsScope::Override
            ]
        );
    }

    #[test]
    fn empty_layers_have_no_values() {
        let layered = LayeredSettings::new();
        assert!(layered.is_empty());
        assert!(layered.get(KEY).is_none());
        assert!(layered.scope_of(KEY).is_none());
    }
}
