//! Screen partition shared by the grid and gallery screens

use serde::Serialize;

use super::{BreadcrumbMetrics, Point, Rect, Size};

/// Average glyph width relative to the font size
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Top navigation bar, optional bottom back-button bar, and the content
/// area between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenLayout {
    pub top_bar: Rect,
    pub bottom_bar: Option<Rect>,
    pub content: Rect,
    /// Spacing between content items
    pub margin: f32,
}

impl ScreenLayout {
    /// Split the visible area for a path of `depth` entries.
    ///
    /// The back button bar only exists below the root.
    pub fn new(origin: Point, visible: Size, depth: usize) -> Self {
        let top_height = 0.1 * visible.min_side();
        let bottom_height = if depth > 1 { 0.2 * visible.min_side() } else { 0.0 };

        let top_bar = Rect::new(
            Point::new(origin.x, origin.y + visible.height - top_height),
            Size::new(visible.width, top_height),
        );
        let bottom_bar = (bottom_height > 0.0)
            .then(|| Rect::new(origin, Size::new(visible.width, bottom_height)));

        let content_size = Size::new(visible.width, visible.height - top_height - bottom_height);
        let content = Rect::new(Point::new(origin.x, origin.y + bottom_height), content_size);

        Self {
            top_bar,
            bottom_bar,
            content,
            margin: 0.02 * content_size.max_side(),
        }
    }

    /// Navigation bar icons are square, as tall as the bar
    pub fn icon_width(&self) -> f32 {
        self.top_bar.size.height
    }

    /// Label font size used in the navigation bar
    pub fn font_size(&self) -> f32 {
        0.4 * self.top_bar.size.height
    }

    /// Approximate width of one navigation bar character
    pub fn char_width(&self) -> f32 {
        GLYPH_WIDTH_RATIO * self.font_size()
    }

    /// Breadcrumb chrome sizes for this screen's navigation bar
    pub fn breadcrumb_metrics(&self) -> BreadcrumbMetrics {
        let char_width = self.char_width();
        BreadcrumbMetrics {
            bar_width: self.top_bar.size.width,
            icon_width: self.icon_width(),
            separator_width: char_width,
            ellipsis_width: 3.0 * char_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_screen_has_no_bottom_bar() {
        let screen = ScreenLayout::new(Point::default(), Size::new(1000.0, 600.0), 1);
        assert!(screen.bottom_bar.is_none());
        assert_eq!(screen.top_bar.size.height, 60.0);
        assert_eq!(screen.top_bar.origin.y, 540.0);
        assert_eq!(screen.content.size, Size::new(1000.0, 540.0));
        assert_eq!(screen.margin, 20.0);
    }

    #[test]
    fn test_nested_screen_reserves_back_bar() {
        let screen = ScreenLayout::new(Point::default(), Size::new(1000.0, 600.0), 3);
        let bottom = screen.bottom_bar.unwrap();
        assert_eq!(bottom.size.height, 120.0);
        assert_eq!(screen.content.origin.y, 120.0);
        assert_eq!(screen.content.size.height, 420.0);
        assert_eq!(screen.icon_width(), 60.0);
        assert_eq!(screen.font_size(), 24.0);

        let metrics = screen.breadcrumb_metrics();
        assert_eq!(metrics.bar_width, 1000.0);
        assert_eq!(metrics.icon_width, 60.0);
        assert!((metrics.separator_width - 14.4).abs() < 1e-4);
        assert!((metrics.ellipsis_width - 43.2).abs() < 1e-4);
    }
}
