// SPDX-License-Identifier: LGPL-3.0-only

use vello::kurbo::{Point, Rect};

use super::region::Region;

/// The pixel buffer a window's contents are composited into before presentation.
pub trait BackingStore {
    /// Present `region` of the buffer.
    ///
    /// `window` is the geometry of the window being flushed, if it still exists.
    fn flush(&mut self, window: Option<Rect>, region: &Region, offset: Point);
}

/// A [BackingStore] that always presents the whole window.
///
/// Every flush adds the full window rectangle to the damage before handing it to the
/// wrapped store, so partial repaints never leave stale decoration pixels behind.
pub struct FullDamageBackingStore {
    inner: Box<dyn BackingStore>,
}

impl FullDamageBackingStore {
    /// Wrap `inner`.
    pub fn new(inner: Box<dyn BackingStore>) -> Self {
        Self { inner }
    }

    /// The region actually flushed for `region` on `window`.
    pub fn expand_damage(window: Option<Rect>, region: &Region) -> Region {
        match window {
            Some(geometry) => region.united(&Region::from_rect(geometry)),
            None => region.clone(),
        }
    }
}

impl BackingStore for FullDamageBackingStore {
    fn flush(&mut self, window: Option<Rect>, region: &Region, offset: Point) {
        let damage = Self::expand_damage(window, region);
        self.inner.flush(window, &damage, offset);
    }
}
