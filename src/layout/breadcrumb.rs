//! Breadcrumb fit-and-ellipsize for the navigation bar
//!
//! The bar shows a home button (the root), then as many trailing path
//! entries as fit. Entries that do not fit collapse into one "..." item.

use serde::Serialize;

/// One path entry as the layout sees it
#[derive(Debug, Clone, PartialEq)]
pub struct CrumbEntry {
    pub id: String,
    /// Position in the path, counting the root as 1
    pub depth: usize,
    /// Rendered width of the entry's label
    pub label_width: f32,
    pub has_children: bool,
}

impl CrumbEntry {
    pub fn new(id: impl Into<String>, depth: usize, label_width: f32, has_children: bool) -> Self {
        Self { id: id.into(), depth, label_width, has_children }
    }
}

/// Fixed sizes of the navigation bar chrome
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreadcrumbMetrics {
    pub bar_width: f32,
    /// Width of an entry icon; the home and trailing buttons use the same size
    pub icon_width: f32,
    /// Width of the ">" separator
    pub separator_width: f32,
    /// Width of the "..." label
    pub ellipsis_width: f32,
}

impl BreadcrumbMetrics {
    /// Width left for entries once the home and trailing buttons and their
    /// separators are accounted for
    pub fn available_width(&self) -> f32 {
        self.bar_width - 2.0 * self.icon_width - 2.0 * self.separator_width
    }
}

/// An item shown in the navigation bar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreadcrumbItem {
    /// Collapsed entries; activating it truncates the path to `depth`
    Ellipsis { id: String, depth: usize, x: f32 },
    /// A path entry; activating it truncates the path to `depth`
    Entry { id: String, depth: usize, x: f32, enabled: bool },
}

impl BreadcrumbItem {
    pub fn id(&self) -> &str {
        match self {
            BreadcrumbItem::Ellipsis { id, .. } | BreadcrumbItem::Entry { id, .. } => id,
        }
    }

    /// Path depth to truncate to when the item is activated
    pub fn depth(&self) -> usize {
        match self {
            BreadcrumbItem::Ellipsis { depth, .. } | BreadcrumbItem::Entry { depth, .. } => *depth,
        }
    }

    pub fn x(&self) -> f32 {
        match self {
            BreadcrumbItem::Ellipsis { x, .. } | BreadcrumbItem::Entry { x, .. } => *x,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            BreadcrumbItem::Ellipsis { .. } => true,
            BreadcrumbItem::Entry { enabled, .. } => *enabled,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, BreadcrumbItem::Ellipsis { .. })
    }
}

/// Items to draw, left to right
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BreadcrumbBar {
    pub items: Vec<BreadcrumbItem>,
    /// How many trailing entries fit without ellipsizing
    pub fitted: usize,
}

/// Fit `path` (root first) into the bar described by `metrics`.
///
/// The root is the home button and never appears as an item. Entries may
/// skip depths (unresolvable pictograms are left out by the caller); items
/// carry the entry's own depth.
pub fn fit_breadcrumbs(path: &[CrumbEntry], metrics: &BreadcrumbMetrics) -> BreadcrumbBar {
    let n = path.len();
    if n <= 1 {
        return BreadcrumbBar::default();
    }

    let mut available = metrics.available_width();
    let mut fitted = 0;
    let mut ellipsized = false;

    for entry in path[1..].iter().rev() {
        let width = metrics.icon_width + entry.label_width + metrics.separator_width;
        if width <= available {
            available -= width;
            fitted += 1;
        } else {
            ellipsized = true;
            break;
        }
    }

    let mut items = Vec::with_capacity(fitted + 1);
    let mut x = metrics.icon_width + metrics.separator_width;

    if ellipsized {
        let target = &path[n - fitted - 1];
        items.push(BreadcrumbItem::Ellipsis {
            id: target.id.clone(),
            depth: target.depth,
            x,
        });
        x += metrics.icon_width + metrics.ellipsis_width + metrics.separator_width;
    }

    for (index, entry) in path.iter().enumerate().skip(n - fitted) {
        let is_last = index == n - 1;

        // A leaf is where we are, not somewhere to go back to
        if is_last && !entry.has_children {
            continue;
        }

        items.push(BreadcrumbItem::Entry {
            id: entry.id.clone(),
            depth: entry.depth,
            x,
            enabled: !is_last,
        });

        x += metrics.icon_width + entry.label_width;
        if !is_last {
            x += metrics.separator_width;
        }
    }

    tracing::debug!("Breadcrumbs: {} of {} entries fit, ellipsized={}", fitted, n - 1, ellipsized);
    BreadcrumbBar { items, fitted }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(bar_width: f32) -> BreadcrumbMetrics {
        BreadcrumbMetrics {
            bar_width,
            icon_width: 10.0,
            separator_width: 5.0,
            ellipsis_width: 15.0,
        }
    }

    fn path(n: usize) -> Vec<CrumbEntry> {
        (1..=n).map(|i| CrumbEntry::new(format!("entry{i}"), i, 20.0, true)).collect()
    }

    #[test]
    fn test_root_only_has_no_items() {
        let bar = fit_breadcrumbs(&path(1), &metrics(500.0));
        assert!(bar.items.is_empty());
    }

    #[test]
    fn test_everything_fits() {
        // available = 500 - 20 - 10 = 470; each entry takes 35
        let bar = fit_breadcrumbs(&path(4), &metrics(500.0));
        assert_eq!(bar.fitted, 3);
        let ids: Vec<&str> = bar.items.iter().map(BreadcrumbItem::id).collect();
        assert_eq!(ids, vec!["entry2", "entry3", "entry4"]);
        assert!(!bar.items.iter().any(BreadcrumbItem::is_ellipsis));
        assert!(!bar.items[2].is_enabled());
        assert!(bar.items[0].is_enabled());
    }

    #[test]
    fn test_five_entries_two_fit() {
        // available = 100 - 30 = 70: two entries of 35 fit, the third does not
        let bar = fit_breadcrumbs(&path(5), &metrics(100.0));
        assert_eq!(bar.fitted, 2);
        assert_eq!(bar.items.len(), 3);

        assert_eq!(bar.items[0], BreadcrumbItem::Ellipsis { id: "entry3".into(), depth: 3, x: 15.0 });
        assert_eq!(bar.items[1].id(), "entry4");
        assert_eq!(bar.items[1].depth(), 4);
        assert!(bar.items[1].is_enabled());
        assert_eq!(bar.items[2].id(), "entry5");
        assert!(!bar.items[2].is_enabled());
    }

    #[test]
    fn test_item_positions() {
        let bar = fit_breadcrumbs(&path(5), &metrics(100.0));
        // ellipsis at 15, advances 10 + 15 + 5; entry4 advances 10 + 20 + 5
        let xs: Vec<f32> = bar.items.iter().map(BreadcrumbItem::x).collect();
        assert_eq!(xs, vec![15.0, 45.0, 80.0]);
    }

    #[test]
    fn test_last_leaf_is_omitted() {
        let mut entries = path(3);
        entries[2].has_children = false;
        let bar = fit_breadcrumbs(&entries, &metrics(500.0));
        let ids: Vec<&str> = bar.items.iter().map(BreadcrumbItem::id).collect();
        assert_eq!(ids, vec!["entry2"]);
        assert!(bar.items[0].is_enabled());
    }

    #[test]
    fn test_depth_comes_from_entry() {
        let entries = vec![
            CrumbEntry::new("root", 1, 20.0, true),
            CrumbEntry::new("b", 3, 20.0, true),
            CrumbEntry::new("c", 4, 20.0, true),
        ];
        let bar = fit_breadcrumbs(&entries, &metrics(500.0));
        let depths: Vec<usize> = bar.items.iter().map(BreadcrumbItem::depth).collect();
        assert_eq!(depths, vec![3, 4]);
    }

    #[test]
    fn test_nothing_fits() {
        let bar = fit_breadcrumbs(&path(3), &metrics(40.0));
        assert_eq!(bar.fitted, 0);
        assert_eq!(bar.items.len(), 1);
        assert_eq!(bar.items[0].depth(), 3);
        assert!(bar.items[0].is_ellipsis());
    }
}
