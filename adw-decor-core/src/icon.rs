// SPDX-License-Identifier: LGPL-3.0-only

//! Titlebar button icons.
//!
//! Icons are resolved once, when the decoration is created. Each button first asks for
//! the `-symbolic` variant of its icon and falls back to the plain name. In the dark
//! variant the resolved pixels are inverted so the glyphs stay readable on the dark
//! title bar.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use vello::peniko::{Blob, ImageAlphaType, ImageBrush, ImageData, ImageFormat};

use crate::decoration::state::Button;

/// Edge length of the titlebar button icons, in logical pixels.
pub const ICON_SIZE: u32 = 16;

/// Looks icons up by name in an icon theme.
pub trait IconResolver {
    /// Find `name` in `theme` at roughly `size` pixels, or `None` if the theme (and
    /// its fallbacks) have no such icon.
    fn lookup(&self, theme: &str, name: &str, size: u32) -> Option<RgbaImage>;
}

/// An [IconResolver] that never finds anything. Buttons are then drawn without glyphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconResolver for NoIcons {
    fn lookup(&self, _theme: &str, _name: &str, _size: u32) -> Option<RgbaImage> {
        None
    }
}

/// Resolve `base_name`, preferring `<base_name>-symbolic`, scaled to `size`×`size`.
pub fn resolve_icon(
    resolver: &dyn IconResolver,
    theme: &str,
    base_name: &str,
    size: u32,
) -> Option<RgbaImage> {
    let symbolic = format!("{}-symbolic", base_name);
    let image = resolver.lookup(theme, &symbolic, size).or_else(|| {
        log::debug!("No '{}' in icon theme '{}', trying '{}'", symbolic, theme, base_name);
        resolver.lookup(theme, base_name, size)
    })?;

    if image.dimensions() == (size, size) {
        Some(image)
    } else {
        Some(imageops::resize(&image, size, size, FilterType::Triangle))
    }
}

/// Invert the color channels of every pixel, keeping alpha.
pub fn invert_pixels(image: &RgbaImage) -> RgbaImage {
    let mut inverted = image.clone();
    imageops::invert(&mut inverted);
    inverted
}

fn to_brush(image: &RgbaImage) -> ImageBrush {
    let image_data = ImageData {
        data: Blob::from(image.as_raw().clone()),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width: image.width(),
        height: image.height(),
    };
    ImageBrush::new(image_data)
}

/// The resolved glyphs of the titlebar buttons.
#[derive(Clone, Default)]
pub struct ButtonPixmaps {
    close: Option<ImageBrush>,
    maximize: Option<ImageBrush>,
    minimize: Option<ImageBrush>,
    restore: Option<ImageBrush>,
}

impl ButtonPixmaps {
    /// Resolve all button icons from `theme`, inverting them when `invert` is set.
    pub fn resolve(resolver: &dyn IconResolver, theme: &str, invert: bool) -> Self {
        let load = |button: Button| -> Option<ImageBrush> {
            let name = button.icon_name();
            match resolve_icon(resolver, theme, name, ICON_SIZE) {
                Some(image) if invert => Some(to_brush(&invert_pixels(&image))),
                Some(image) => Some(to_brush(&image)),
                None => {
                    log::warn!("Icon '{}' not found in theme '{}'", name, theme);
                    None
                },
            }
        };

        Self {
            close: load(Button::Close),
            maximize: load(Button::Maximize),
            minimize: load(Button::Minimize),
            restore: load(Button::Restore),
        }
    }

    /// The glyph drawn for `button`, if its icon was found.
    pub fn get(&self, button: Button) -> Option<&ImageBrush> {
        match button {
            Button::Close => self.close.as_ref(),
            Button::Maximize => self.maximize.as_ref(),
            Button::Minimize => self.minimize.as_ref(),
            Button::Restore => self.restore.as_ref(),
        }
    }
}

#[cfg(feature = "xdg-icons")]
pub use xdg_resolver::XdgIconResolver;

#[cfg(feature = "xdg-icons")]
mod xdg_resolver {
    use std::fs;
    use std::path::{Path, PathBuf};

    use image::RgbaImage;
    use resvg::{tiny_skia, usvg};

    use super::IconResolver;

    const FALLBACK_THEMES: [&str; 2] = ["hicolor", "Adwaita"];

    /// File extensions tried in each theme directory, in order of preference.
    const EXTENSIONS: [&str; 2] = ["svg", "png"];

    /// Finds SVG and PNG icons in the icon themes installed in the XDG data directories.
    ///
    /// SVG icons are rasterized at the requested size.
    ///
    /// Themes are searched in `~/.icons`, `$XDG_DATA_HOME/icons` and every
    /// `$XDG_DATA_DIRS/icons`, then `/usr/share/pixmaps`. A missing icon is looked up
    /// again in `hicolor`, then in `Adwaita`.
    pub struct XdgIconResolver {
        search_paths: Vec<PathBuf>,
    }

    impl XdgIconResolver {
        /// Create a resolver over the standard search paths.
        pub fn new() -> Self {
            let mut search_paths = Vec::new();

            if let Some(home) = std::env::var_os("HOME") {
                search_paths.push(PathBuf::from(home).join(".icons"));
            }

            match xdg::BaseDirectories::new() {
                Ok(dirs) => {
                    search_paths.push(dirs.get_data_home().join("icons"));
                    search_paths.extend(dirs.get_data_dirs().into_iter().map(|d| d.join("icons")));
                },
                Err(e) => {
                    log::warn!("XDG base directories unavailable: {}", e);
                    search_paths.push(PathBuf::from("/usr/share/icons"));
                },
            }

            search_paths.push(PathBuf::from("/usr/share/pixmaps"));
            Self::with_search_paths(search_paths)
        }

        /// Create a resolver over explicit search paths.
        pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
            Self { search_paths }
        }

        /// The directories icon themes are looked up in.
        pub fn search_paths(&self) -> &[PathBuf] {
            &self.search_paths
        }

        /// Locate the icon file of `name` in `theme`.
        pub fn find(&self, theme: &str, name: &str, size: u32) -> Option<PathBuf> {
            if let Some(path) = self.find_in_search_paths(theme, name, size) {
                log::debug!("Found icon '{}' at {:?}", name, path);
                return Some(path);
            }

            log::debug!("Icon '{}' not in theme '{}', trying fallback themes", name, theme);
            FALLBACK_THEMES
                .iter()
                .filter(|fallback| **fallback != theme)
                .find_map(|fallback| self.find_in_search_paths(fallback, name, size))
        }

        fn find_in_search_paths(&self, theme: &str, name: &str, size: u32) -> Option<PathBuf> {
            self.search_paths
                .iter()
                .map(|search_path| search_path.join(theme))
                .filter(|theme_root| theme_root.is_dir())
                .find_map(|theme_root| find_in_theme(&theme_root, name, size))
        }
    }

    impl Default for XdgIconResolver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IconResolver for XdgIconResolver {
        fn lookup(&self, theme: &str, name: &str, size: u32) -> Option<RgbaImage> {
            let path = self.find(theme, name, size)?;
            if path.extension().is_some_and(|ext| ext == "svg") {
                return rasterize_svg(&path, size);
            }
            match image::open(&path) {
                Ok(image) => Some(image.into_rgba8()),
                Err(e) => {
                    log::warn!("Failed to load icon {:?}: {}", path, e);
                    None
                },
            }
        }
    }

    /// Render the SVG at `path` into a `size`×`size` image, stretched to fill it.
    fn rasterize_svg(path: &Path, size: u32) -> Option<RgbaImage> {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Failed to read icon {:?}: {}", path, e);
                return None;
            },
        };
        let tree = match usvg::Tree::from_data(&data, &usvg::Options::default()) {
            Ok(tree) => tree,
            Err(e) => {
                log::warn!("Failed to parse SVG icon {:?}: {}", path, e);
                return None;
            },
        };

        let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
        let view = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            size as f32 / view.width(),
            size as f32 / view.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        RgbaImage::from_raw(size, size, pixels)
    }

    fn find_file(dir: &Path, name: &str) -> Option<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", name, ext)))
            .find(|candidate| candidate.is_file())
    }

    /// Search the size directories of a theme, `NxN` first, one context level deep.
    fn find_in_theme(theme_root: &Path, name: &str, size: u32) -> Option<PathBuf> {
        let exact = format!("{}x{}", size, size);
        let mut dirs: Vec<PathBuf> = fs::read_dir(theme_root)
            .ok()?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort_by_key(|dir| dir.file_name().map_or(true, |n| n.to_string_lossy() != exact));

        for dir in dirs {
            if let Some(direct) = find_file(&dir, name) {
                return Some(direct);
            }
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for context in entries.filter_map(|entry| entry.ok().map(|e| e.path())) {
                if let Some(candidate) = find_file(&context, name) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}
