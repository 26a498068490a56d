// SPDX-License-Identifier: LGPL-3.0-only

//! Backend selection from the process environment.
//!
//! [PlatformEnvironment::from_env] is the only place that reads environment variables
//! or process arguments. Everything downstream works on the captured values, so the
//! selection logic can be driven with explicit configuration.

/// Set by Wayland compositors for their clients.
pub const WAYLAND_DISPLAY_ENV: &str = "WAYLAND_DISPLAY";
/// Overrides the logical DPI forced on the Wayland backend.
pub const FORCE_DPI_ENV: &str = "ADW_DECOR_FORCE_DPI";
/// Overrides the decoration used by the Wayland backend.
pub const DECORATION_ENV: &str = "ADW_DECOR_DECORATION";

/// Logical DPI forced when no override is set.
pub const DEFAULT_FORCE_DPI: &str = "96";
/// Decoration used when no override is set.
pub const DEFAULT_DECORATION: &str = "adwaita";

/// The windowing backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Wayland, with the Adwaita decoration and full-damage backing store.
    Wayland,
    /// The generic fallback backend (X11).
    Fallback,
}

/// Options handed to the Wayland backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaylandOptions {
    /// Logical DPI, as understood by the backend (a number or `physical`).
    pub force_dpi: String,
    /// Decoration key.
    pub decoration: String,
}

impl Default for WaylandOptions {
    fn default() -> Self {
        Self {
            force_dpi: DEFAULT_FORCE_DPI.to_string(),
            decoration: DEFAULT_DECORATION.to_string(),
        }
    }
}

/// Environment signals captured at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformEnvironment {
    /// Value of `WAYLAND_DISPLAY`, if set (even to an empty string).
    pub wayland_display: Option<String>,
    /// Value of [FORCE_DPI_ENV], if set.
    pub force_dpi: Option<String>,
    /// Value of [DECORATION_ENV], if set.
    pub decoration: Option<String>,
    /// Process arguments, program name first.
    pub args: Vec<String>,
}

impl PlatformEnvironment {
    /// Capture the environment of the current process.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned());
        Self {
            wayland_display: var(WAYLAND_DISPLAY_ENV),
            force_dpi: var(FORCE_DPI_ENV),
            decoration: var(DECORATION_ENV),
            args: std::env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }

    /// The backend these signals select: Wayland whenever a display is advertised.
    pub fn backend(&self) -> Backend {
        if self.wayland_display.is_some() {
            Backend::Wayland
        } else {
            Backend::Fallback
        }
    }

    /// Wayland options, with the overrides applied on top of the defaults.
    pub fn wayland_options(&self) -> WaylandOptions {
        let defaults = WaylandOptions::default();
        WaylandOptions {
            force_dpi: self.force_dpi.clone().unwrap_or(defaults.force_dpi),
            decoration: self.decoration.clone().unwrap_or(defaults.decoration),
        }
    }

    /// Export the default DPI and decoration to the process environment, each only if
    /// no override was set, so the rest of the toolkit sees the same values.
    pub fn apply_wayland_defaults(&mut self) -> WaylandOptions {
        if self.force_dpi.is_none() {
            log::info!("{} not set, forcing {} DPI", FORCE_DPI_ENV, DEFAULT_FORCE_DPI);
            std::env::set_var(FORCE_DPI_ENV, DEFAULT_FORCE_DPI);
            self.force_dpi = Some(DEFAULT_FORCE_DPI.to_string());
        }
        if self.decoration.is_none() {
            log::info!("{} not set, using the {} decoration", DECORATION_ENV, DEFAULT_DECORATION);
            std::env::set_var(DECORATION_ENV, DEFAULT_DECORATION);
            self.decoration = Some(DEFAULT_DECORATION.to_string());
        }
        self.wayland_options()
    }
}

/// Explicit integration configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationConfig {
    /// Backend to construct.
    pub backend: Backend,
    /// Options for the Wayland backend.
    pub wayland: WaylandOptions,
    /// Arguments passed through to the fallback backend.
    pub args: Vec<String>,
}

impl IntegrationConfig {
    /// Select the Wayland backend.
    pub fn wayland(options: WaylandOptions) -> Self {
        Self {
            backend: Backend::Wayland,
            wayland: options,
            args: Vec::new(),
        }
    }

    /// Select the fallback backend with `args`.
    pub fn fallback(args: Vec<String>) -> Self {
        Self {
            backend: Backend::Fallback,
            wayland: WaylandOptions::default(),
            args,
        }
    }

    /// Build the configuration the captured signals describe.
    pub fn from_environment(env: &PlatformEnvironment) -> Self {
        Self {
            backend: env.backend(),
            wayland: env.wayland_options(),
            args: env.args.clone(),
        }
    }
}
