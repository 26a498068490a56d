//! Backend selection and the full-damage backing store

use std::cell::RefCell;
use std::ffi::CString;
use std::rc::Rc;

use adw_decor_core::platform::environment::{
    PlatformEnvironment, WaylandOptions, DECORATION_ENV, DEFAULT_DECORATION,
};
use adw_decor_core::platform::integration::{marshal_args, FALLBACK_KEY};
use adw_decor_core::platform::{
    BackingStore, FallbackFactory, FullDamageBackingStore, IntegrationConfig, IntegrationPlugin,
    PlatformIntegration, PlatformTheme, Region, ThemeFactory, WaylandBackend, WindowId,
};
use adw_decor_core::IntegrationError;
use vello::kurbo::{Point, Rect};

type Flushes = Rc<RefCell<Vec<Region>>>;

struct RecordingStore {
    flushes: Flushes,
}

impl BackingStore for RecordingStore {
    fn flush(&mut self, _window: Option<Rect>, region: &Region, _offset: Point) {
        self.flushes.borrow_mut().push(region.clone());
    }
}

struct NamedTheme(&'static str);

impl PlatformTheme for NamedTheme {
    fn name(&self) -> &str {
        self.0
    }
}

struct FakeIntegration {
    name: &'static str,
    flushes: Flushes,
}

impl PlatformIntegration for FakeIntegration {
    fn name(&self) -> &str {
        self.name
    }

    fn create_backing_store(&self, _window: WindowId) -> Box<dyn BackingStore> {
        Box::new(RecordingStore {
            flushes: Rc::clone(&self.flushes),
        })
    }

    fn create_theme(&self, _name: &str) -> Option<Box<dyn PlatformTheme>> {
        Some(Box::new(NamedTheme("default")))
    }
}

struct FakeWayland {
    flushes: Flushes,
    options: Rc<RefCell<Option<WaylandOptions>>>,
}

impl WaylandBackend for FakeWayland {
    fn create(&self, options: &WaylandOptions) -> Box<dyn PlatformIntegration> {
        *self.options.borrow_mut() = Some(options.clone());
        Box::new(FakeIntegration {
            name: "wayland",
            flushes: Rc::clone(&self.flushes),
        })
    }
}

#[derive(Default)]
struct FakeFallback {
    available: bool,
    calls: Rc<RefCell<Vec<(String, Vec<String>, Vec<CString>)>>>,
}

impl FallbackFactory for FakeFallback {
    fn create(
        &self,
        key: &str,
        params: &[String],
        argv: &[CString],
    ) -> Option<Box<dyn PlatformIntegration>> {
        self.calls
            .borrow_mut()
            .push((key.to_string(), params.to_vec(), argv.to_vec()));
        if !self.available {
            return None;
        }
        Some(Box::new(FakeIntegration {
            name: "xcb",
            flushes: Flushes::default(),
        }))
    }
}

struct Themes {
    has_gnome: bool,
}

impl ThemeFactory for Themes {
    fn create(&self, name: &str) -> Option<Box<dyn PlatformTheme>> {
        (self.has_gnome && name == "gnome").then(|| Box::new(NamedTheme("gnome")) as Box<dyn PlatformTheme>)
    }
}

struct Fixture {
    plugin: IntegrationPlugin,
    flushes: Flushes,
    options: Rc<RefCell<Option<WaylandOptions>>>,
    calls: Rc<RefCell<Vec<(String, Vec<String>, Vec<CString>)>>>,
}

fn fixture(fallback_available: bool, has_gnome: bool) -> Fixture {
    let flushes = Flushes::default();
    let options = Rc::new(RefCell::new(None));
    let fallback = FakeFallback {
        available: fallback_available,
        ..Default::default()
    };
    let calls = Rc::clone(&fallback.calls);
    let plugin = IntegrationPlugin::new(
        Box::new(FakeWayland {
            flushes: Rc::clone(&flushes),
            options: Rc::clone(&options),
        }),
        Box::new(fallback),
        Rc::new(Themes { has_gnome }),
    );
    Fixture {
        plugin,
        flushes,
        options,
        calls,
    }
}

#[test]
fn test_wayland_integration_flushes_whole_window() {
    let fixture = fixture(true, true);
    let integration = fixture
        .plugin
        .create("gnome", &[], &IntegrationConfig::wayland(WaylandOptions::default()))
        .unwrap();
    assert_eq!(integration.name(), "wayland");
    assert_eq!(
        fixture.options.borrow().as_ref().map(|o| o.force_dpi.clone()),
        Some("96".to_string())
    );

    let mut store = integration.create_backing_store(WindowId(1));
    let damage = Rect::new(10.0, 10.0, 30.0, 20.0);
    let window = Rect::new(0.0, 0.0, 640.0, 480.0);
    store.flush(Some(window), &Region::from_rect(damage), Point::ZERO);
    store.flush(None, &Region::from_rect(damage), Point::ZERO);

    let flushes = fixture.flushes.borrow();
    assert!(flushes[0].contains_rect(damage));
    assert!(flushes[0].contains_rect(window));
    assert_eq!(flushes[0].bounding_rect(), window);
    assert_eq!(flushes[1], Region::from_rect(damage));
}

#[test]
fn test_full_damage_is_superset_of_request() {
    let window = Rect::new(100.0, 50.0, 500.0, 350.0);
    let mut damage = Region::from_rect(Rect::new(0.0, 0.0, 20.0, 20.0));
    damage.add(Rect::new(120.0, 60.0, 140.0, 80.0));

    let flushed = FullDamageBackingStore::expand_damage(Some(window), &damage);
    for rect in damage.rects() {
        assert!(flushed.contains_rect(*rect));
    }
    assert!(flushed.contains_rect(window));
}

#[test]
fn test_theme_prefers_gnome() {
    let with_gnome = fixture(true, true);
    let integration = with_gnome
        .plugin
        .create("adwaita", &[], &IntegrationConfig::wayland(WaylandOptions::default()))
        .unwrap();
    assert_eq!(integration.create_theme("fusion").unwrap().name(), "gnome");

    let without_gnome = fixture(true, false);
    let integration = without_gnome
        .plugin
        .create("adwaita", &[], &IntegrationConfig::wayland(WaylandOptions::default()))
        .unwrap();
    assert_eq!(integration.create_theme("fusion").unwrap().name(), "default");
}

#[test]
fn test_fallback_receives_arguments() {
    let fixture = fixture(true, true);
    let args = vec!["files".to_string(), "--sync".to_string()];
    let params = vec!["nodpi".to_string()];

    let integration = fixture
        .plugin
        .create("gnome", &params, &IntegrationConfig::fallback(args))
        .unwrap();
    assert_eq!(integration.name(), "xcb");

    let calls = fixture.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, FALLBACK_KEY);
    assert_eq!(calls[0].1, params);
    assert_eq!(
        calls[0].2,
        vec![CString::new("files").unwrap(), CString::new("--sync").unwrap()]
    );
    assert!(fixture.options.borrow().is_none());
}

#[test]
fn test_fallback_failures() {
    let unavailable = fixture(false, true);
    let result = unavailable
        .plugin
        .create("gnome", &[], &IntegrationConfig::fallback(vec!["files".to_string()]));
    assert!(matches!(result, Err(IntegrationError::FallbackUnavailable(_))));

    let fixture = fixture(true, true);
    let result = fixture.plugin.create(
        "gnome",
        &[],
        &IntegrationConfig::fallback(vec!["files".to_string(), "bad\0arg".to_string()]),
    );
    assert!(matches!(result, Err(IntegrationError::InvalidArgument { index: 1, .. })));
    assert!(fixture.calls.borrow().is_empty());
}

#[test]
fn test_unknown_key() {
    let fixture = fixture(true, true);
    let result = fixture
        .plugin
        .create("xcb", &[], &IntegrationConfig::wayland(WaylandOptions::default()));
    assert!(matches!(result, Err(IntegrationError::UnknownKey(key)) if key == "xcb"));
    assert!(IntegrationPlugin::keys().contains(&"gnome"));
}

#[test]
fn test_marshal_args() {
    let argv = marshal_args(&["a".to_string(), "b c".to_string()]).unwrap();
    assert_eq!(argv[1].to_str().unwrap(), "b c");
}

#[test]
fn test_apply_wayland_defaults_keeps_overrides() {
    let mut env = PlatformEnvironment {
        wayland_display: Some("wayland-0".to_string()),
        force_dpi: Some("120".to_string()),
        decoration: None,
        args: Vec::new(),
    };

    let options = env.apply_wayland_defaults();
    assert_eq!(options.force_dpi, "120");
    assert_eq!(options.decoration, DEFAULT_DECORATION);
    assert_eq!(std::env::var(DECORATION_ENV).unwrap(), DEFAULT_DECORATION);
    assert_eq!(IntegrationConfig::from_environment(&env).wayland, options);
}
