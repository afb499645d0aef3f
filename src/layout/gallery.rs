//! Gallery geometry: one pictogram at a time, with its siblings parked
//! one screen to the left and right for swiping.

use serde::Serialize;

use super::{Point, Rect, Size};

/// Where the current pictogram and its neighbours sit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GalleryLayout {
    pub item_size: Size,
    pub current: Point,
    pub previous: Point,
    pub next: Point,
}

/// Result of releasing a horizontal drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Swipe {
    /// Snap back to the current pictogram
    Stay,
    Next,
    Previous,
}

/// Largest item of `aspect_ratio` (height / width) inside `bounds` with
/// `margin` on every side, plus neighbour positions one width away.
pub fn gallery_layout(bounds: Rect, aspect_ratio: f32, margin: f32) -> GalleryLayout {
    let width = bounds.size.width - 2.0 * margin;
    let height = (bounds.size.height - 2.0 * margin).min(width * aspect_ratio);
    let item_size = Size::new(height / aspect_ratio, height);

    let current = bounds.center();
    GalleryLayout {
        item_size,
        current,
        previous: Point::new(current.x - bounds.size.width, current.y),
        next: Point::new(current.x + bounds.size.width, current.y),
    }
}

/// Decide what a drag of `dx` (content offset) means on a screen `width` wide.
///
/// Dragging less than half the screen snaps back. Content dragged left
/// (negative offset) brings in the next sibling.
pub fn swipe_outcome(dx: f32, width: f32) -> Swipe {
    if dx.abs() < 0.5 * width {
        Swipe::Stay
    } else if dx < 0.0 {
        Swipe::Next
    } else {
        Swipe::Previous
    }
}
