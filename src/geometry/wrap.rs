use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Visible area in screen pixels; origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Toroidal wrap driven by the rendered bounding box.
///
/// Once the box has fully left one edge the position is shifted by exactly
/// the viewport width or height. Returns `None` when no wrap happened.
pub fn wrap_position(position: DVec2, half_extents: DVec2, viewport: &Viewport) -> Option<DVec2> {
    let mut wrapped = position;

    if viewport.width > 0.0 {
        if position.x - half_extents.x >= viewport.width {
            wrapped.x -= viewport.width;
        } else if position.x + half_extents.x <= 0.0 {
            wrapped.x += viewport.width;
        }
    }

    if viewport.height > 0.0 {
        if position.y - half_extents.y >= viewport.height {
            wrapped.y -= viewport.height;
        } else if position.y + half_extents.y <= 0.0 {
            wrapped.y += viewport.height;
        }
    }

    (wrapped != position).then_some(wrapped)
}
