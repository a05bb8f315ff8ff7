//! The configuration provider boundary.
//!
//! A [`ConfigProvider`] is the one boundary that can set several cascades at
//! once. Only the keys it names take effect; everything else is inherited.
//!
//! Providers can be loaded from TOML:
//!
//! ```
//! use horizon_cascade_core::scope::{ConfigProvider, Direction, Scopes, SizeType};
//!
//! let provider = ConfigProvider::from_toml_str(r#"
//! prefix_cls = "my"
//! direction = "rtl"
//! component_size = "large"
//! "#)?;
//!
//! let size = provider.provide(&Scopes::root(), |scopes| {
//!     assert_eq!(scopes.config().direction(), Direction::Rtl);
//!     scopes.size()
//! });
//! assert_eq!(size, Some(SizeType::Large));
//! # Ok::<(), horizon_cascade_core::Error>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::config::Direction;
use super::scopes::Scopes;
use super::size::SizeType;
use crate::error::{Error, Result};

/// Overrides applied by a configuration boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigProvider {
    /// Root name prefix for every component below the boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_cls: Option<String>,
    /// Text direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Auto-insert a space between two CJK characters in button text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_insert_space: Option<bool>,
    /// General component size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_size: Option<SizeType>,
    /// Disable every component below the boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_disabled: Option<bool>,
}

impl ConfigProvider {
    /// A provider that overrides nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a provider from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let provider: Self = toml::from_str(text)?;
        tracing::debug!(target: "horizon_cascade_core::config", ?provider, "loaded config provider");
        Ok(provider)
    }

    /// Read and parse a provider from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Serialize the provider back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Builder: override the name prefix.
    pub fn with_prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix_cls.into());
        self
    }

    /// Builder: override the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Builder: override the auto-insert-space rule.
    pub fn with_auto_insert_space(mut self, auto_insert_space: bool) -> Self {
        self.auto_insert_space = Some(auto_insert_space);
        self
    }

    /// Builder: set the component size.
    pub fn with_component_size(mut self, size: SizeType) -> Self {
        self.component_size = Some(size);
        self
    }

    /// Builder: set the disabled flag.
    pub fn with_component_disabled(mut self, disabled: bool) -> Self {
        self.component_disabled = Some(disabled);
        self
    }

    /// The scopes seen by this boundary's subtree.
    pub fn apply(&self, scopes: &Scopes) -> Scopes {
        let mut next = scopes.clone();

        if self.prefix_cls.is_some() || self.direction.is_some() || self.auto_insert_space.is_some() {
            let inherited = scopes.config();
            let config = inherited
                .clone()
                .with_prefix_cls(
                    self.prefix_cls
                        .clone()
                        .unwrap_or_else(|| inherited.prefix_cls().to_owned()),
                )
                .with_direction(self.direction.unwrap_or(inherited.direction()))
                .with_auto_insert_space(
                    self.auto_insert_space
                        .unwrap_or(inherited.auto_insert_space()),
                );
            next = next.with_config(config);
        }
        if let Some(size) = self.component_size {
            next = next.with_size(Some(size));
        }
        if let Some(disabled) = self.component_disabled {
            next = next.with_disabled(disabled);
        }

        crate::cascade_debug!(
            prefix_cls = next.config().prefix_cls(),
            size = ?next.size(),
            disabled = next.disabled(),
            "config provider applied"
        );
        next
    }

    /// Run `subtree` under this boundary.
    pub fn provide<R>(&self, scopes: &Scopes, subtree: impl FnOnce(&Scopes) -> R) -> R {
        subtree(&self.apply(scopes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_provider_changes_nothing() {
        let scopes = Scopes::root().with_size(Some(SizeType::Small));
        let applied = ConfigProvider::new().apply(&scopes);
        assert_eq!(applied, scopes);
    }

    #[test]
    fn only_named_config_keys_override() {
        let outer = ConfigProvider::new()
            .with_prefix_cls("outer")
            .with_auto_insert_space(false);
        let inner = ConfigProvider::new().with_direction(Direction::Rtl);

        let config = outer.provide(&Scopes::root(), |scopes| {
            inner.provide(scopes, |scopes| scopes.config().clone())
        });

        assert_eq!(config.prefix_cls(), "outer");
        assert_eq!(config.direction(), Direction::Rtl);
        assert!(!config.auto_insert_space());
    }

    #[test]
    fn component_disabled_cannot_be_lifted() {
        let outer = ConfigProvider::new().with_component_disabled(true);
        let inner = ConfigProvider::new().with_component_disabled(false);

        let disabled = outer.provide(&Scopes::root(), |scopes| {
            inner.provide(scopes, |scopes| scopes.disabled())
        });
        assert!(disabled);
    }

    #[test]
    fn parses_toml() {
        let provider = ConfigProvider::from_toml_str(
            r#"
            prefix_cls = "my"
            direction = "rtl"
            auto_insert_space = false
            component_size = "large"
            component_disabled = true
            "#,
        )
        .unwrap();

        assert_eq!(
            provider,
            ConfigProvider::new()
                .with_prefix_cls("my")
                .with_direction(Direction::Rtl)
                .with_auto_insert_space(false)
                .with_component_size(SizeType::Large)
                .with_component_disabled(true)
        );
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        assert!(matches!(
            ConfigProvider::from_toml_str("colour = \"red\""),
            Err(Error::Config { .. })
        ));
        assert!(ConfigProvider::from_toml_str("component_size = \"huge\"").is_err());
    }

    #[test]
    fn toml_round_trip_keeps_named_keys() {
        let provider = ConfigProvider::new().with_component_size(SizeType::Small);
        let text = provider.to_toml_string().unwrap();
        assert_eq!(ConfigProvider::from_toml_str(&text).unwrap(), provider);
    }
}
