/// Hit-testing primitives for the menu system
///
/// This module provides the AABB (Axis-Aligned Bounding Box) type used for
/// both widget layout and mouse hit-testing. Widgets store an `AABB` and the
/// menu controller tests click positions against it.
///
/// # Architecture
///
/// - `AABB`: Immutable rectangle (top-left corner + size)
/// - Pure functions/methods: stateless containment and intersection checks
///
/// # Rust Learning Notes
///
/// This module demonstrates:
/// - **Small Copy value types**: A tiny struct instead of raw tuples
/// - **Pure functions**: Hit-testing has no side effects, easy to unit test
use sdl2::rect::Rect;

/// An axis-aligned bounding box: top-left corner plus size.
///
/// Immutable once constructed. The unsigned size fields enforce the
/// non-negative width/height invariant at the type level.
///
/// # Coordinate convention
///
/// `AABB` uses the same screen-space pixel coordinates as SDL2 mouse events,
/// with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AABB {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl AABB {
    /// Creates a new bounding box from its top-left corner and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        AABB { x, y, w, h }
    }

    /// Checks whether a point lies inside this box.
    ///
    /// Uses the **half-open** convention: a point is inside iff
    /// `x <= px < x + w` and `y <= py < y + h`. Points on the top/left
    /// edges are inside; points on the bottom/right edges are outside.
    /// This keeps adjacent boxes from both claiming their shared edge.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && px < self.x + self.w as i32
            && py >= self.y
            && py < self.y + self.h as i32
    }

    /// Returns the center point of the box.
    ///
    /// Used by buttons to center their label text.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w as i32 / 2, self.y + self.h as i32 / 2)
    }

    /// Converts to an SDL2 `Rect` for draw calls.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Kept for overlap diagnostics (widgets are not supposed to overlap by
/// design; when they do, earliest-registered wins the hit-test).
///
/// # Performance
///
/// This is an O(1) operation - just a few integer comparisons.
#[allow(dead_code)] // Reserved for layout overlap diagnostics
pub fn aabb_intersect(a: &AABB, b: &AABB) -> bool {
    let x_overlap = a.x < b.x + b.w as i32 && a.x + a.w as i32 > b.x;
    let y_overlap = a.y < b.y + b.h as i32 && a.y + a.h as i32 > b.y;

    x_overlap && y_overlap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_interior() {
        let b = AABB::new(200, 200, 180, 40);
        assert!(b.contains_point(210, 210));
        assert!(b.contains_point(200, 200)); // top-left corner is inside
        assert!(b.contains_point(379, 239)); // last interior pixel
    }

    #[test]
    fn test_contains_point_half_open_edges() {
        let b = AABB::new(10, 10, 20, 20);

        // Min edges are inside
        assert!(b.contains_point(10, 15));
        assert!(b.contains_point(15, 10));

        // Max edges are outside
        assert!(!b.contains_point(30, 15));
        assert!(!b.contains_point(15, 30));
        assert!(!b.contains_point(30, 30));
    }

    #[test]
    fn test_contains_point_outside() {
        let b = AABB::new(200, 200, 180, 40);
        assert!(!b.contains_point(10, 10));
        assert!(!b.contains_point(199, 210));
        assert!(!b.contains_point(210, 199));
    }

    #[test]
    fn test_zero_size_contains_nothing() {
        let b = AABB::new(50, 50, 0, 0);
        assert!(!b.contains_point(50, 50));
    }

    #[test]
    fn test_center() {
        let b = AABB::new(200, 200, 180, 40);
        assert_eq!(b.center(), (290, 220));
    }

    #[test]
    fn test_adjacent_boxes_share_no_point() {
        // Two buttons stacked with touching edges: the shared row belongs
        // to the lower one only.
        let top = AABB::new(0, 0, 100, 40);
        let bottom = AABB::new(0, 40, 100, 40);
        assert!(!top.contains_point(50, 40));
        assert!(bottom.contains_point(50, 40));
    }

    #[test]
    fn test_aabb_intersect() {
        let a = AABB::new(0, 0, 100, 40);
        let b = AABB::new(50, 20, 100, 40);
        let c = AABB::new(200, 200, 10, 10);
        assert!(aabb_intersect(&a, &b));
        assert!(!aabb_intersect(&a, &c));
        // Touching edges do not intersect
        let d = AABB::new(100, 0, 50, 40);
        assert!(!aabb_intersect(&a, &d));
    }
}
