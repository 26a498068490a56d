// SPDX-License-Identifier: LGPL-3.0-only

use vello::kurbo::{Point, Rect};

/// A damage region: a set of rectangles in window coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// An empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// A region covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add(rect);
        region
    }

    /// Add `rect` to the region. Empty rectangles are ignored.
    pub fn add(&mut self, rect: Rect) {
        if rect.area() > 0.0 && !self.contains_rect(rect) {
            self.rects.push(rect);
        }
    }

    /// The union of this region and `other`.
    pub fn united(&self, other: &Region) -> Region {
        let mut region = self.clone();
        for rect in &other.rects {
            region.add(*rect);
        }
        region
    }

    /// The rectangles making up the region.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Whether the region covers nothing.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The smallest rectangle enclosing the region, or [Rect::ZERO] if it is empty.
    pub fn bounding_rect(&self) -> Rect {
        self.rects
            .iter()
            .copied()
            .reduce(|acc, rect| acc.union(rect))
            .unwrap_or(Rect::ZERO)
    }

    /// Whether `rect` lies entirely inside one rectangle of the region.
    pub fn contains_rect(&self, rect: Rect) -> bool {
        self.rects.iter().any(|r| {
            r.x0 <= rect.x0 && r.y0 <= rect.y0 && r.x1 >= rect.x1 && r.y1 >= rect.y1
        })
    }

    /// Whether `point` lies inside the region.
    pub fn contains(&self, point: Point) -> bool {
        self.rects.iter().any(|r| r.contains(point))
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Region::from_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_bounds() {
        let a = Region::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = Region::from_rect(Rect::new(20.0, 5.0, 30.0, 15.0));
        let region = a.united(&b);

        assert_eq!(region.rects().len(), 2);
        assert_eq!(region.bounding_rect(), Rect::new(0.0, 0.0, 30.0, 15.0));
        assert!(region.contains(Point::new(25.0, 10.0)));
        assert!(!region.contains(Point::new(15.0, 10.0)));
    }

    #[test]
    fn test_covered_rects_are_not_duplicated() {
        let mut region = Region::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        region.add(Rect::new(10.0, 10.0, 20.0, 20.0));
        region.add(Rect::new(5.0, 5.0, 5.0, 50.0));

        assert_eq!(region.rects().len(), 1);
        assert!(Region::new().is_empty());
        assert_eq!(Region::new().bounding_rect(), Rect::ZERO);
    }
}
