//! Screen plans - everything the host needs to build a screen
//!
//! A [`ScreenPlan`] combines the repository and the layout engine into
//! plain data: bar rectangles, breadcrumb items, and one placed item per
//! pictogram with its display label and assets. The host instantiates its
//! own nodes from it.

use serde::Serialize;

use crate::label::label_text;
use crate::layout::{
    fit_breadcrumbs, gallery_layout, layout_grid, BreadcrumbBar, GalleryLayout, GridLayout, Point,
    ScreenLayout, Size,
};
use crate::navigation::{breadcrumb_entries, Screen};
use crate::pictogram::PictogramRecord;
use crate::repository::PictogramRepository;

/// Height / width of a pictogram tile
pub const TILE_ASPECT_RATIO: f32 = 1.0;

/// A pictogram placed on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPictogram {
    pub id: String,
    pub label: String,
    pub image: String,
    pub sound: String,
    pub center: Point,
    pub size: Size,
    /// Drilling in opens another grid rather than the gallery
    pub has_children: bool,
}

/// Content-specific geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentLayout {
    Grid(GridLayout),
    Gallery(GalleryLayout),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenPlan {
    pub screen: Screen,
    pub layout: ScreenLayout,
    pub breadcrumbs: BreadcrumbBar,
    pub content: ContentLayout,
    /// Grid tiles in order, or the gallery's previous, current and next
    pub items: Vec<PlacedPictogram>,
}

/// Display options taken from the user settings
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    pub origin: Point,
    pub visible: Size,
    pub use_capitals: bool,
}

impl ScreenPlan {
    pub fn build(
        screen: &Screen,
        repo: &PictogramRepository,
        locale: &str,
        options: PlanOptions,
    ) -> Self {
        let path = screen.path();
        let layout = ScreenLayout::new(options.origin, options.visible, path.depth());

        let metrics = layout.breadcrumb_metrics();
        let entries = breadcrumb_entries(path, repo, locale, layout.char_width(), options.use_capitals);
        let breadcrumbs = fit_breadcrumbs(&entries, &metrics);

        let place = |record: &PictogramRecord, center: Point, size: Size| PlacedPictogram {
            id: record.id.clone(),
            label: label_text(&record.name, options.use_capitals),
            image: record.image.clone(),
            sound: record.sound.clone(),
            center,
            size,
            has_children: repo.has_children(&record.id),
        };

        let (content, items) = match screen {
            Screen::Grid(_) => {
                let children = repo.get_children(path.current(), locale);
                let grid = layout_grid(children.len(), layout.content, TILE_ASPECT_RATIO, layout.margin);
                let items: Vec<PlacedPictogram> = children
                    .iter()
                    .zip(&grid.cells)
                    .map(|(record, &center)| place(record, center, grid.item_size))
                    .collect();
                (ContentLayout::Grid(grid), items)
            }
            Screen::Gallery(_) => {
                let gallery = gallery_layout(layout.content, TILE_ASPECT_RATIO, layout.margin);
                let siblings = repo.siblings(path, locale);
                let items = match siblings.iter().position(|s| s.id == path.current()) {
                    Some(i) => {
                        let len = siblings.len();
                        let previous = &siblings[(i + len - 1) % len];
                        let next = &siblings[(i + 1) % len];
                        vec![
                            place(previous, gallery.previous, gallery.item_size),
                            place(&siblings[i], gallery.current, gallery.item_size),
                            place(next, gallery.next, gallery.item_size),
                        ]
                    }
                    None => {
                        tracing::warn!("{} is not among its parent's children", path.current());
                        Vec::new()
                    }
                };
                (ContentLayout::Gallery(gallery), items)
            }
        };

        Self { screen: screen.clone(), layout, breadcrumbs, content, items }
    }
}
