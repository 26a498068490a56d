//! Recording fakes for the decoration's collaborators.

#![allow(dead_code)]

use std::collections::HashMap;

use adw_decor_core::decoration::Decoration;
use adw_decor_core::host::{CursorShape, DeviceId, Edges, WindowHost, WindowStates};
use adw_decor_core::icon::IconResolver;
use adw_decor_core::vgi::{Graphics, TextPainter};
use adw_decor_theme::hints::{FontSpec, StaticHints};
use adw_decor_theme::settings::{DecorationSettings, SettingsFile};
use image::{Rgba, RgbaImage};
use vello::kurbo::{Affine, BezPath, Point, Rect, Shape, Size, Stroke};
use vello::peniko::{Brush, Color, Fill, ImageBrush, Mix};

/// A request the decoration made to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostAction {
    Close,
    SetStates(WindowStates),
    Move,
    Resize(Edges),
    Cursor(CursorShape),
    RestoreCursor,
    Configure,
}

pub struct FakeHost {
    pub size: Size,
    pub active: bool,
    pub states: WindowStates,
    pub title: String,
    pub actions: Vec<HostAction>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            size: Size::new(800.0, 600.0),
            active: true,
            states: WindowStates::empty(),
            title: "Files".to_string(),
            actions: Vec::new(),
        }
    }

    pub fn take_actions(&mut self) -> Vec<HostAction> {
        std::mem::take(&mut self.actions)
    }

    pub fn count(&self, action: &HostAction) -> usize {
        self.actions.iter().filter(|a| *a == action).count()
    }
}

impl WindowHost for FakeHost {
    fn size(&self) -> Size {
        self.size
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn window_states(&self) -> WindowStates {
        self.states
    }

    fn set_window_states(&mut self, states: WindowStates) {
        self.states = states;
        self.actions.push(HostAction::SetStates(states));
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn request_close(&mut self) {
        self.actions.push(HostAction::Close);
    }

    fn start_move(&mut self, _device: DeviceId) {
        self.actions.push(HostAction::Move);
    }

    fn start_resize(&mut self, _device: DeviceId, edges: Edges) {
        self.actions.push(HostAction::Resize(edges));
    }

    fn set_cursor(&mut self, _device: DeviceId, cursor: CursorShape) {
        self.actions.push(HostAction::Cursor(cursor));
    }

    fn restore_cursor(&mut self, _device: DeviceId) {
        self.actions.push(HostAction::RestoreCursor);
    }

    fn apply_configure_when_possible(&mut self) {
        self.actions.push(HostAction::Configure);
    }
}

/// A draw call on the recording surface.
#[derive(Debug, Clone)]
pub enum DrawOp {
    Fill { brush: Brush, path: BezPath },
    Stroke { width: f64, brush: Brush, path: BezPath },
    Image { width: u32, transform: Affine },
    PushClip(BezPath),
    PopLayer,
}

impl DrawOp {
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            DrawOp::Fill { path, .. } | DrawOp::Stroke { path, .. } | DrawOp::PushClip(path) => {
                Some(path.bounding_box())
            },
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct RecordingGraphics {
    pub ops: Vec<DrawOp>,
}

impl Graphics for RecordingGraphics {
    fn fill(
        &mut self,
        _fill_rule: Fill,
        _transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.ops.push(DrawOp::Fill {
            brush: brush.clone(),
            path: shape.clone(),
        });
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        _transform: Affine,
        brush: &Brush,
        _brush_transform: Option<Affine>,
        shape: &BezPath,
    ) {
        self.ops.push(DrawOp::Stroke {
            width: style.width,
            brush: brush.clone(),
            path: shape.clone(),
        });
    }

    fn draw_image(&mut self, image: &ImageBrush, transform: Affine) {
        self.ops.push(DrawOp::Image {
            width: image.image.width,
            transform,
        });
    }

    fn push_layer(&mut self, _mix: Mix, _alpha: f32, _transform: Affine, shape: &BezPath) {
        self.ops.push(DrawOp::PushClip(shape.clone()));
    }

    fn pop_layer(&mut self) {
        self.ops.push(DrawOp::PopLayer);
    }
}

/// Measures every character as 10×20 and records what it draws.
#[derive(Default)]
pub struct FixedTextPainter {
    pub measured: usize,
    pub drawn: Vec<(String, Point, Color)>,
}

impl TextPainter for FixedTextPainter {
    fn measure(&mut self, text: &str, _font: &FontSpec) -> Size {
        self.measured += 1;
        Size::new(text.chars().count() as f64 * 10.0, 20.0)
    }

    fn draw(
        &mut self,
        _graphics: &mut dyn Graphics,
        text: &str,
        _font: &FontSpec,
        origin: Point,
        color: Color,
    ) {
        self.drawn.push((text.to_string(), origin, color));
    }
}

/// Serves solid 16×16 icons for a fixed set of names.
pub struct MapIcons(pub HashMap<String, RgbaImage>);

impl MapIcons {
    /// Symbolic variants of all four button icons.
    pub fn adwaita() -> Self {
        let names = ["window-close", "window-maximize", "window-minimize", "window-restore"];
        Self(
            names
                .iter()
                .map(|name| {
                    (
                        format!("{}-symbolic", name),
                        RgbaImage::from_pixel(16, 16, Rgba([0x2e, 0x34, 0x36, 0xff])),
                    )
                })
                .collect(),
        )
    }
}

impl IconResolver for MapIcons {
    fn lookup(&self, _theme: &str, name: &str, _size: u32) -> Option<RgbaImage> {
        self.0.get(name).cloned()
    }
}

pub fn settings(toml: &str) -> DecorationSettings {
    SettingsFile::from_toml(toml).unwrap().decoration
}

pub fn decoration_with(hints: StaticHints, toml: &str) -> Decoration {
    Decoration::new(Box::new(hints), &settings(toml), &MapIcons::adwaita()).unwrap()
}

pub fn decoration() -> Decoration {
    decoration_with(StaticHints::new(), "")
}
