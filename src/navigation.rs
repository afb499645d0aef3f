//! Navigation - screen transitions as command values
//!
//! Input handling produces a [`NavCommand`]; the host loop hands it to a
//! [`Navigator`], which returns the [`Screen`] to show next. Drilling into a
//! pictogram with children opens another grid; drilling into a leaf opens
//! the gallery, where horizontal swipes move between siblings.

use serde::Serialize;

use crate::label::{approx_label_width, label_text};
use crate::layout::{BreadcrumbItem, CrumbEntry, Swipe};
use crate::pictogram::BreadcrumbPath;
use crate::repository::PictogramRepository;

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum NavCommand {
    /// Back to the root grid
    Home,
    /// One level up
    Back,
    /// Truncate the path to `depth` entries (breadcrumb or ellipsis item)
    JumpTo { depth: usize },
    /// Drill into a child of the current pictogram
    Open(String),
    /// Released horizontal drag on the gallery
    Swipe(Swipe),
}

impl From<&BreadcrumbItem> for NavCommand {
    fn from(item: &BreadcrumbItem) -> Self {
        NavCommand::JumpTo { depth: item.depth() }
    }
}

/// Screen to display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", content = "path", rename_all = "snake_case")]
pub enum Screen {
    /// Grid of the current pictogram's children
    Grid(BreadcrumbPath),
    /// Single pictogram with its siblings one swipe away
    Gallery(BreadcrumbPath),
}

impl Screen {
    pub fn path(&self) -> &BreadcrumbPath {
        match self {
            Screen::Grid(path) | Screen::Gallery(path) => path,
        }
    }

    pub fn is_gallery(&self) -> bool {
        matches!(self, Screen::Gallery(_))
    }
}

/// Current screen plus the locale used to resolve sibling lists
pub struct Navigator {
    screen: Screen,
    locale: String,
}

impl Navigator {
    /// Start on the root grid
    pub fn new(locale: impl Into<String>) -> Self {
        Self::at(Screen::Grid(BreadcrumbPath::root()), locale)
    }

    pub fn at(screen: Screen, locale: impl Into<String>) -> Self {
        Self { screen, locale: locale.into() }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Apply `command` and return the new screen
    pub fn dispatch(&mut self, repo: &PictogramRepository, command: NavCommand) -> &Screen {
        let mut path = self.screen.path().clone();

        let next = match command {
            NavCommand::Home => Screen::Grid(BreadcrumbPath::root()),
            NavCommand::Back => {
                path.pop();
                Screen::Grid(path)
            }
            NavCommand::JumpTo { depth } => {
                path.truncate(depth);
                Screen::Grid(path)
            }
            NavCommand::Open(id) => match &self.screen {
                Screen::Grid(_) => {
                    let has_children = repo.has_children(&id);
                    path.push(id);
                    if has_children { Screen::Grid(path) } else { Screen::Gallery(path) }
                }
                // A leaf has nothing to open
                Screen::Gallery(_) => Screen::Gallery(path),
            },
            NavCommand::Swipe(swipe) => match &self.screen {
                Screen::Gallery(_) => {
                    if let Some(sibling) = self.sibling(repo, swipe) {
                        path.replace_current(sibling);
                    }
                    Screen::Gallery(path)
                }
                Screen::Grid(_) => Screen::Grid(path),
            },
        };

        tracing::debug!("Navigation: {:?}", next);
        self.screen = next;
        &self.screen
    }

    /// Identifier of the neighbour in `swipe` direction, wrapping around
    fn sibling(&self, repo: &PictogramRepository, swipe: Swipe) -> Option<String> {
        let path = self.screen.path();
        let siblings = repo.siblings(path, &self.locale);
        let len = siblings.len();
        let i = siblings.iter().position(|s| s.id == path.current())?;

        let j = match swipe {
            Swipe::Stay => return None,
            Swipe::Next => (i + 1) % len,
            Swipe::Previous => (i + len - 1) % len,
        };
        Some(siblings[j].id.clone())
    }
}

/// Layout inputs for the breadcrumb bar of `path`.
///
/// The root is always kept (it is the home button). Other entries whose
/// pictogram cannot be resolved are left out. Label widths assume every
/// character is `char_width` wide.
pub fn breadcrumb_entries(
    path: &BreadcrumbPath,
    repo: &PictogramRepository,
    locale: &str,
    char_width: f32,
    use_capitals: bool,
) -> Vec<CrumbEntry> {
    path.iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let has_children = repo.has_children(id);
            match repo.get_pictogram(id, locale) {
                Some(record) => {
                    let label = label_text(&record.name, use_capitals);
                    Some(CrumbEntry::new(id, index + 1, approx_label_width(&label, char_width), has_children))
                }
                None if index == 0 => Some(CrumbEntry::new(id, 1, 0.0, has_children)),
                None => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pictogram::{PictogramRecord, ROOT_ID};
    use crate::storage::PictogramStore;

    /// root -> animals -> {dog, cat, cow}; root -> food (leaf)
    fn repo() -> PictogramRepository {
        let store = PictogramStore::open_in_memory().unwrap();
        for (id, name) in [(ROOT_ID, "home"), ("animals", "animales"), ("dog", "perro"), ("cat", "gato"), ("cow", "vaca"), ("food", "comida")] {
            store.insert_pictogram(&PictogramRecord::new(id, "es", name, format!("{id}.png"), format!("{id}.mp3"))).unwrap();
        }
        store.insert_relationship(ROOT_ID, "animals").unwrap();
        store.insert_relationship(ROOT_ID, "food").unwrap();
        for child in ["dog", "cat", "cow"] {
            store.insert_relationship("animals", child).unwrap();
        }
        PictogramRepository::new(store)
    }

    fn ids(screen: &Screen) -> Vec<&str> {
        screen.path().iter().collect()
    }

    #[test]
    fn test_open_chooses_grid_or_gallery() {
        let repo = repo();
        let mut nav = Navigator::new("es");

        let screen = nav.dispatch(&repo, NavCommand::Open("animals".into()));
        assert!(matches!(screen, Screen::Grid(_)));

        let screen = nav.dispatch(&repo, NavCommand::Open("cat".into()));
        assert!(screen.is_gallery());
        assert_eq!(ids(screen), vec![ROOT_ID, "animals", "cat"]);
    }

    #[test]
    fn test_back_home_and_jump() {
        let repo = repo();
        let mut nav = Navigator::new("es");
        nav.dispatch(&repo, NavCommand::Open("animals".into()));
        nav.dispatch(&repo, NavCommand::Open("dog".into()));

        let screen = nav.dispatch(&repo, NavCommand::Back);
        assert_eq!(screen, &Screen::Grid(BreadcrumbPath::from_ids([ROOT_ID, "animals"]).unwrap()));

        let screen = nav.dispatch(&repo, NavCommand::JumpTo { depth: 1 });
        assert_eq!(screen, &Screen::Grid(BreadcrumbPath::root()));

        // Back at the root stays at the root
        let screen = nav.dispatch(&repo, NavCommand::Back);
        assert!(screen.path().is_root());

        nav.dispatch(&repo, NavCommand::Open("food".into()));
        assert_eq!(nav.dispatch(&repo, NavCommand::Home), &Screen::Grid(BreadcrumbPath::root()));
    }

    #[test]
    fn test_swipe_wraps_around_siblings() {
        let repo = repo();
        let mut nav = Navigator::new("es");
        nav.dispatch(&repo, NavCommand::Open("animals".into()));
        nav.dispatch(&repo, NavCommand::Open("cow".into()));

        let screen = nav.dispatch(&repo, NavCommand::Swipe(Swipe::Next));
        assert_eq!(screen.path().current(), "dog");

        let screen = nav.dispatch(&repo, NavCommand::Swipe(Swipe::Previous));
        assert_eq!(screen.path().current(), "cow");

        let screen = nav.dispatch(&repo, NavCommand::Swipe(Swipe::Stay));
        assert_eq!(screen.path().current(), "cow");
        assert!(screen.is_gallery());
    }

    #[test]
    fn test_swipe_ignored_on_grid() {
        let repo = repo();
        let mut nav = Navigator::new("es");
        let screen = nav.dispatch(&repo, NavCommand::Swipe(Swipe::Next));
        assert_eq!(screen, &Screen::Grid(BreadcrumbPath::root()));
    }

    #[test]
    fn test_open_ignored_on_gallery() {
        let repo = repo();
        let mut nav = Navigator::new("es");
        nav.dispatch(&repo, NavCommand::Open("animals".into()));
        nav.dispatch(&repo, NavCommand::Open("dog".into()));

        let screen = nav.dispatch(&repo, NavCommand::Open("cat".into()));
        assert!(screen.is_gallery());
        assert_eq!(ids(screen), vec![ROOT_ID, "animals", "dog"]);
    }

    #[test]
    fn test_breadcrumb_item_becomes_jump() {
        let item = BreadcrumbItem::Ellipsis { id: "animals".into(), depth: 2, x: 0.0 };
        assert_eq!(NavCommand::from(&item), NavCommand::JumpTo { depth: 2 });
    }

    #[test]
    fn test_breadcrumb_entries() {
        let repo = repo();
        let path = BreadcrumbPath::from_ids([ROOT_ID, "animals", "ghost", "dog"]).unwrap();
        let entries = breadcrumb_entries(&path, &repo, "es", 10.0, true);

        let summary: Vec<(&str, usize, f32, bool)> = entries
            .iter()
            .map(|e| (e.id.as_str(), e.depth, e.label_width, e.has_children))
            .collect();
        assert_eq!(summary, vec![
            (ROOT_ID, 1, 40.0, true),
            ("animals", 2, 80.0, true),
            ("dog", 4, 50.0, false),
        ]);
    }
}
