//! Mapping from a [`LayoutState`] to a concrete window rectangle.
//!
//! All arithmetic is integer.  The left/top piece of a split gets
//! `extent / 2`, the right/bottom piece starts there and takes the rest,
//! so two halves always tile the work area exactly even for odd sizes.

use crate::layout::{Edge, LayoutState};
use serde::{Deserialize, Serialize};

/// Usable work area of the primary display, in logical pixels.
///
/// `(x, y)` is the top-left corner of the area on the virtual desktop;
/// it is non-zero when a bar reserves space on the top or left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    /// Work area anchored at the desktop origin.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Whether the area is non-empty and its far corner is representable.
    pub fn is_usable(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.x.checked_add(self.width).is_some()
            && self.y.checked_add(self.height).is_some()
    }
}

/// Target position and size of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Split `extent` along one axis.
///
/// Returns `(offset, length)` of the near piece (`near == true`), the far
/// piece, or the whole extent when the axis is unconstrained.
fn split(extent: i32, side: Option<bool>) -> (i32, i32) {
    let near = extent / 2;
    match side {
        None => (0, extent),
        Some(true) => (0, near),
        Some(false) => (near, extent - near),
    }
}

/// Rectangle occupied by `state` inside `screen`.
pub fn geometry_for(state: LayoutState, screen: ScreenBounds) -> Geometry {
    let horizontal = if state.contains(Edge::Left) {
        Some(true)
    } else if state.contains(Edge::Right) {
        Some(false)
    } else {
        None
    };
    let vertical = if state.contains(Edge::Top) {
        Some(true)
    } else if state.contains(Edge::Bottom) {
        Some(false)
    } else {
        None
    };

    let (dx, width) = split(screen.width, horizontal);
    let (dy, height) = split(screen.height, vertical);
    Geometry::new(
        screen.x.saturating_add(dx),
        screen.y.saturating_add(dy),
        width,
        height,
    )
}
