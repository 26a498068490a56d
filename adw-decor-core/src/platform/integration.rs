// SPDX-License-Identifier: LGPL-3.0-only

//! Platform integration factory.

use std::ffi::CString;
use std::rc::Rc;

use super::backing_store::{BackingStore, FullDamageBackingStore};
use super::environment::{Backend, IntegrationConfig, PlatformEnvironment, WaylandOptions};
use crate::error::{IntegrationError, IntegrationResult};

/// Keys this plugin answers to.
pub const INTEGRATION_KEYS: [&str; 2] = ["gnome", "adwaita"];
/// Key of the backend constructed when no Wayland display is available.
pub const FALLBACK_KEY: &str = "xcb";
/// Theme preferred over the base integration's default.
pub const PREFERRED_THEME: &str = "gnome";

/// Identifies a window owned by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// A platform theme (standard palettes, fonts and dialogs) provided by the host toolkit.
pub trait PlatformTheme {
    /// Theme name.
    fn name(&self) -> &str;
}

/// Creates platform themes by name.
pub trait ThemeFactory {
    /// Create the theme called `name`, if one is available.
    fn create(&self, name: &str) -> Option<Box<dyn PlatformTheme>>;
}

/// A constructed windowing backend.
pub trait PlatformIntegration {
    /// Backend name.
    fn name(&self) -> &str;

    /// Create the backing store of `window`.
    fn create_backing_store(&self, window: WindowId) -> Box<dyn BackingStore>;

    /// Create the platform theme for `name`.
    fn create_theme(&self, name: &str) -> Option<Box<dyn PlatformTheme>>;
}

/// Constructs the host's Wayland integration.
pub trait WaylandBackend {
    /// Create the integration with `options` in effect.
    fn create(&self, options: &WaylandOptions) -> Box<dyn PlatformIntegration>;
}

/// The host's generic integration factory, used for the fallback backend.
pub trait FallbackFactory {
    /// Create the integration registered under `key`, passing `params` and the process
    /// arguments on.
    fn create(
        &self,
        key: &str,
        params: &[String],
        argv: &[CString],
    ) -> Option<Box<dyn PlatformIntegration>>;
}

/// The Wayland integration with Adwaita adjustments.
///
/// Delegates to the host's Wayland integration, but wraps every backing store in a
/// [FullDamageBackingStore] and prefers the [PREFERRED_THEME] platform theme.
pub struct AdwaitaIntegration {
    base: Box<dyn PlatformIntegration>,
    themes: Rc<dyn ThemeFactory>,
}

impl AdwaitaIntegration {
    /// Wrap `base`, looking themes up in `themes` first.
    pub fn new(base: Box<dyn PlatformIntegration>, themes: Rc<dyn ThemeFactory>) -> Self {
        Self { base, themes }
    }
}

impl PlatformIntegration for AdwaitaIntegration {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn create_backing_store(&self, window: WindowId) -> Box<dyn BackingStore> {
        Box::new(FullDamageBackingStore::new(self.base.create_backing_store(window)))
    }

    fn create_theme(&self, name: &str) -> Option<Box<dyn PlatformTheme>> {
        if let Some(theme) = self.themes.create(PREFERRED_THEME) {
            return Some(theme);
        }
        log::debug!("No '{}' platform theme, using the default for '{}'", PREFERRED_THEME, name);
        self.base.create_theme(name)
    }
}

/// Convert process arguments into C strings for the fallback backend.
pub fn marshal_args(args: &[String]) -> IntegrationResult<Vec<CString>> {
    args.iter()
        .enumerate()
        .map(|(index, arg)| {
            CString::new(arg.as_str())
                .map_err(|source| IntegrationError::InvalidArgument { index, source })
        })
        .collect()
}

/// Selects and constructs the active windowing backend.
pub struct IntegrationPlugin {
    wayland: Box<dyn WaylandBackend>,
    fallback: Box<dyn FallbackFactory>,
    themes: Rc<dyn ThemeFactory>,
}

impl IntegrationPlugin {
    /// Create the plugin over the host's backend factories.
    pub fn new(
        wayland: Box<dyn WaylandBackend>,
        fallback: Box<dyn FallbackFactory>,
        themes: Rc<dyn ThemeFactory>,
    ) -> Self {
        Self {
            wayland,
            fallback,
            themes,
        }
    }

    /// The keys this plugin answers to.
    pub fn keys() -> &'static [&'static str] {
        &INTEGRATION_KEYS
    }

    /// Construct the integration for `key` as described by `config`.
    pub fn create(
        &self,
        key: &str,
        params: &[String],
        config: &IntegrationConfig,
    ) -> IntegrationResult<Box<dyn PlatformIntegration>> {
        if !INTEGRATION_KEYS.contains(&key) {
            return Err(IntegrationError::UnknownKey(key.to_string()));
        }

        match config.backend {
            Backend::Wayland => {
                log::info!(
                    "Using the Wayland backend (DPI {}, decoration {})",
                    config.wayland.force_dpi,
                    config.wayland.decoration
                );
                let base = self.wayland.create(&config.wayland);
                Ok(Box::new(AdwaitaIntegration::new(base, Rc::clone(&self.themes))))
            },
            Backend::Fallback => {
                log::info!("No Wayland display, using the {} backend", FALLBACK_KEY);
                let argv = marshal_args(&config.args)?;
                self.fallback
                    .create(FALLBACK_KEY, params, &argv)
                    .ok_or_else(|| IntegrationError::FallbackUnavailable(FALLBACK_KEY.to_string()))
            },
        }
    }

    /// Construct the integration for `key` from the process environment.
    ///
    /// On Wayland the default DPI and decoration are exported first, unless overridden.
    pub fn create_from_env(
        &self,
        key: &str,
        params: &[String],
    ) -> IntegrationResult<Box<dyn PlatformIntegration>> {
        let mut env = PlatformEnvironment::from_env();
        if env.backend() == Backend::Wayland && INTEGRATION_KEYS.contains(&key) {
            env.apply_wayland_defaults();
        }
        self.create(key, params, &IntegrationConfig::from_environment(&env))
    }
}

