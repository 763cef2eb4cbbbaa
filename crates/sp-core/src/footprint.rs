//! Room footprints.
//!
//! A footprint is the shape an agent claims on the floor plane: a circle of
//! some radius, or an axis-aligned rectangle.  Rectangles are usually derived
//! from a programme area plus an aspect ratio; the *contact radius* of a
//! rectangle is its circumradius, so clustering treats it as the circle that
//! just encloses it while collision keeps the true per-axis extents.

use crate::rect::Rect;
use crate::vec2::Vec2;

/// Lower bound for sampled aspect ratios when a room leaves the aspect blank.
pub const ASPECT_MIN: f64 = 0.36;
/// Upper bound for sampled aspect ratios when a room leaves the aspect blank.
pub const ASPECT_MAX: f64 = 1.44;

/// Shape of a single room, centered on its agent's position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Footprint {
    /// Circular room of the given radius.
    Circle { radius: f64 },
    /// Rectangular room stored as half extents per axis.
    Rect { half_w: f64, half_h: f64 },
}

impl Footprint {
    /// Circular footprint.
    ///
    /// # Panics
    /// Panics in debug mode if `radius` is not finite and positive.
    pub fn circle(radius: f64) -> Self {
        debug_assert!(radius.is_finite() && radius > 0.0, "radius must be positive");
        Footprint::Circle { radius }
    }

    /// Rectangular footprint from full width and height.
    ///
    /// # Panics
    /// Panics in debug mode if either dimension is not finite and positive.
    pub fn rect(width: f64, height: f64) -> Self {
        debug_assert!(width.is_finite() && width > 0.0, "width must be positive");
        debug_assert!(height.is_finite() && height > 0.0, "height must be positive");
        Footprint::Rect { half_w: width * 0.5, half_h: height * 0.5 }
    }

    /// Rectangular footprint of the given `area` with `aspect = width / height`.
    ///
    /// # Panics
    /// Panics in debug mode if `area` or `aspect` is not finite and positive.
    pub fn rect_from_area(area: f64, aspect: f64) -> Self {
        debug_assert!(area.is_finite() && area > 0.0, "area must be positive");
        debug_assert!(aspect.is_finite() && aspect > 0.0, "aspect must be positive");
        let width = (area * aspect).sqrt();
        let height = (area / aspect).sqrt();
        Footprint::rect(width, height)
    }

    /// Distance from the center at which another footprint "touches" this one
    /// during clustering: the radius for circles, the circumradius for
    /// rectangles.
    #[inline]
    pub fn contact_radius(self) -> f64 {
        match self {
            Footprint::Circle { radius } => radius,
            Footprint::Rect { half_w, half_h } => half_w.hypot(half_h),
        }
    }

    /// Half extent along the x axis (the radius for circles).
    #[inline]
    pub fn half_extent_x(self) -> f64 {
        match self {
            Footprint::Circle { radius } => radius,
            Footprint::Rect { half_w, .. } => half_w,
        }
    }

    /// Half extent along the y axis (the radius for circles).
    #[inline]
    pub fn half_extent_y(self) -> f64 {
        match self {
            Footprint::Circle { radius } => radius,
            Footprint::Rect { half_h, .. } => half_h,
        }
    }

    /// Claimed floor area.
    pub fn area(self) -> f64 {
        match self {
            Footprint::Circle { radius } => std::f64::consts::PI * radius * radius,
            Footprint::Rect { half_w, half_h } => 4.0 * half_w * half_h,
        }
    }

    /// Axis-aligned bounding box when centered at `center`.
    pub fn bbox_at(self, center: Vec2) -> Rect {
        Rect::from_center(center, self.half_extent_x(), self.half_extent_y())
    }

    /// Short label for output rows: `"circle"` or `"rect"`.
    pub fn kind(self) -> &'static str {
        match self {
            Footprint::Circle { .. } => "circle",
            Footprint::Rect { .. } => "rect",
        }
    }
}
