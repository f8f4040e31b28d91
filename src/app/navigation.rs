// src/app/navigation.rs
//! Navigation state: current folder, breadcrumb trail and view filters.
//!
//! Every operation returns a fresh [`NavigationState`] rather than mutating
//! the existing one, so a state value always describes one consistent view.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::drive::{Drive, Item, ROOT_ID, ROOT_NAME};

/// Presentation of the current folder's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    #[default]
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Which kinds of items are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Folders,
    Files,
}

impl Category {
    /// Tab order.
    pub const ALL: [Category; 3] = [Category::All, Category::Folders, Category::Files];

    pub fn matches(self, item: &Item) -> bool {
        match self {
            Category::All => true,
            Category::Folders => item.is_folder(),
            Category::Files => !item.is_folder(),
        }
    }

    pub fn next(self) -> Self {
        match self {
            Category::All => Category::Folders,
            Category::Folders => Category::Files,
            Category::Files => Category::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Category::All => Category::Files,
            Category::Folders => Category::All,
            Category::Files => Category::Folders,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::All => "All",
            Category::Folders => "Folders",
            Category::Files => "Files",
        };
        write!(f, "{}", s)
    }
}

/// One entry of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: String,
    pub name: String,
}

impl Breadcrumb {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Immutable snapshot of where the user is and how the view is filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_folder_id: String,
    breadcrumbs: Vec<Breadcrumb>,
    view_mode: ViewMode,
    category: Category,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(ViewMode::default(), Category::default())
    }
}

impl NavigationState {
    /// State at the root folder with a single breadcrumb.
    pub fn new(view_mode: ViewMode, category: Category) -> Self {
        Self {
            current_folder_id: ROOT_ID.to_string(),
            breadcrumbs: vec![Breadcrumb::new(ROOT_ID, ROOT_NAME)],
            view_mode,
            category,
        }
    }

    pub fn current_folder_id(&self) -> &str {
        &self.current_folder_id
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_at_root(&self) -> bool {
        self.current_folder_id == ROOT_ID
    }

    /// Move to `folder_id`.
    ///
    /// If the folder is already on the trail, the trail is cut back to that
    /// entry; otherwise the folder is appended. Unknown ids are accepted and
    /// simply show an empty folder.
    pub fn navigate_to_folder(&self, folder_id: &str, folder_name: &str) -> Self {
        let breadcrumbs = match self.breadcrumbs.iter().position(|b| b.id == folder_id) {
            Some(index) => self.breadcrumbs[..=index].to_vec(),
            None => {
                let mut trail = self.breadcrumbs.clone();
                trail.push(Breadcrumb::new(folder_id, folder_name));
                trail
            }
        };

        Self {
            current_folder_id: folder_id.to_string(),
            breadcrumbs,
            ..self.clone()
        }
    }

    /// Step back to the previous breadcrumb. Returns `None` at the root.
    pub fn back(&self) -> Option<Self> {
        let len = self.breadcrumbs.len();
        if len < 2 {
            return None;
        }
        let target = &self.breadcrumbs[len - 2];
        Some(self.navigate_to_folder(&target.id, &target.name))
    }

    /// Jump back to the root folder.
    pub fn home(&self) -> Self {
        self.navigate_to_folder(ROOT_ID, ROOT_NAME)
    }

    pub fn with_view_mode(&self, view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..self.clone()
        }
    }

    pub fn toggle_view_mode(&self) -> Self {
        self.with_view_mode(self.view_mode.toggled())
    }

    pub fn with_category(&self, category: Category) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    /// Every item whose parent is the current folder.
    pub fn current_folder_contents<'a>(&self, drive: &'a Drive) -> Vec<&'a Item> {
        drive.children_of(&self.current_folder_id)
    }

    /// Current folder contents narrowed by the active category.
    pub fn visible_items<'a>(&self, drive: &'a Drive) -> Vec<&'a Item> {
        self.current_folder_contents(drive)
            .into_iter()
            .filter(|item| self.category.matches(item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(state: &NavigationState) -> Vec<&str> {
        state.breadcrumbs().iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn starts_at_root() {
        let state = NavigationState::default();
        assert_eq!(state.current_folder_id(), ROOT_ID);
        assert_eq!(state.breadcrumbs(), &[Breadcrumb::new("root", "My Drive")]);
        assert_eq!(state.view_mode(), ViewMode::List);
        assert_eq!(state.category(), Category::All);
    }

    #[test]
    fn descending_appends_to_trail() {
        let state = NavigationState::default().navigate_to_folder("documents", "Documents");
        assert_eq!(trail(&state), vec!["root", "documents"]);
        assert_eq!(state.current_folder_id(), "documents");
    }

    #[test]
    fn revisiting_truncates_trail() {
        let state = NavigationState::default()
            .navigate_to_folder("documents", "Documents")
            .navigate_to_folder("doc-sub", "Sub");
        assert_eq!(trail(&state), vec!["root", "documents", "doc-sub"]);

        let back_home = state.navigate_to_folder("root", "My Drive");
        assert_eq!(trail(&back_home), vec!["root"]);
        assert_eq!(back_home.current_folder_id(), "root");

        let middle = state.navigate_to_folder("documents", "Documents");
        assert_eq!(trail(&middle), vec!["root", "documents"]);
    }

    #[test]
    fn navigation_leaves_previous_state_untouched() {
        let start = NavigationState::default();
        let next = start.navigate_to_folder("images", "Images");
        assert_eq!(trail(&start), vec!["root"]);
        assert_eq!(trail(&next), vec!["root", "images"]);
    }

    #[test]
    fn back_steps_one_breadcrumb() {
        let state = NavigationState::default()
            .navigate_to_folder("projects", "Projects")
            .navigate_to_folder("project1", "Website Redesign");
        let back = state.back().expect("not at root");
        assert_eq!(back.current_folder_id(), "projects");
        assert_eq!(trail(&back), vec!["root", "projects"]);
        assert!(NavigationState::default().back().is_none());
    }

    #[test]
    fn home_resets_trail() {
        let state = NavigationState::default()
            .navigate_to_folder("projects", "Projects")
            .navigate_to_folder("project2", "Mobile App")
            .home();
        assert!(state.is_at_root());
        assert_eq!(trail(&state), vec!["root"]);
    }

    #[test]
    fn contents_match_parent_for_every_folder() {
        let drive = Drive::sample();
        for folder in drive.items().iter().filter(|i| i.is_folder()) {
            let state = NavigationState::default().navigate_to_folder(&folder.id, &folder.name);
            let expected: Vec<&Item> = drive
                .items()
                .iter()
                .filter(|i| i.parent.as_deref() == Some(folder.id.as_str()))
                .collect();
            assert_eq!(state.current_folder_contents(&drive), expected);
        }
    }

    #[test]
    fn unknown_folder_is_empty() {
        let drive = Drive::sample();
        let state = NavigationState::default().navigate_to_folder("ghost", "Ghost");
        assert!(state.current_folder_contents(&drive).is_empty());
        assert_eq!(trail(&state), vec!["root", "ghost"]);
    }

    #[test]
    fn view_mode_does_not_change_contents() {
        let drive = Drive::sample();
        let list = NavigationState::default();
        let grid = list.toggle_view_mode();
        assert_eq!(grid.view_mode(), ViewMode::Grid);
        assert_eq!(list.visible_items(&drive), grid.visible_items(&drive));
        assert_eq!(grid.toggle_view_mode().view_mode(), ViewMode::List);
    }

    #[test]
    fn category_filters() {
        let drive = Drive::sample();
        let state = NavigationState::default();
        let all = state.visible_items(&drive);
        let folders = state.with_category(Category::Folders).visible_items(&drive);
        let files = state.with_category(Category::Files).visible_items(&drive);

        assert_eq!(folders.len(), 3);
        assert!(folders.iter().all(|i| i.is_folder()));
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|i| !i.is_folder()));
        assert_eq!(all.len(), folders.len() + files.len());
        assert_eq!(all, state.current_folder_contents(&drive));
    }

    #[test]
    fn category_cycles() {
        assert_eq!(Category::All.next(), Category::Folders);
        assert_eq!(Category::Files.next(), Category::All);
        assert_eq!(Category::All.prev(), Category::Files);
        for c in Category::ALL {
            assert_eq!(c.next().prev(), c);
        }
    }
}
