//! Layout Engine - pure geometry for pictogram screens
//!
//! Nothing here touches storage or the renderer. Inputs are counts, sizes
//! and ratios; outputs are shapes and positions the host turns into nodes.
//! Coordinates follow the host engine: the origin is bottom-left and y grows
//! upward.

pub mod breadcrumb;
pub mod gallery;
pub mod grid;
pub mod screen;

use serde::{Deserialize, Serialize};

pub use breadcrumb::{fit_breadcrumbs, BreadcrumbBar, BreadcrumbItem, BreadcrumbMetrics, CrumbEntry};
pub use gallery::{gallery_layout, swipe_outcome, GalleryLayout, Swipe};
pub use grid::{compute_grid, layout_grid, GridLayout, GridShape};
pub use screen::ScreenLayout;

/// A position in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size with width and height
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn max_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

/// A rectangle defined by its bottom-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + 0.5 * self.size.width,
            self.origin.y + 0.5 * self.size.height,
        )
    }
}
