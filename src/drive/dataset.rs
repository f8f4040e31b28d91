// src/drive/dataset.rs
//! The static drive contents and lookups over them.

use super::item::Item;

/// Id of the root folder. Items directly under it have no parent.
pub const ROOT_ID: &str = "root";
/// Display name of the root folder.
pub const ROOT_NAME: &str = "My Drive";

/// Immutable collection of items, keyed by parent back-reference.
#[derive(Debug, Clone)]
pub struct Drive {
    items: Vec<Item>,
}

impl Drive {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The built-in demo drive.
    pub fn sample() -> Self {
        let root = None;
        Self::new(vec![
            Item::folder("documents", "Documents", root),
            Item::folder("images", "Images", root),
            Item::folder("projects", "Projects", root),
            Item::file("file1", "Quarterly Report.pdf", "pdf", "2.4 MB", "May 26, 2023", root),
            Item::file("file2", "Meeting Notes.docx", "docx", "1.2 MB", "Jun 12, 2023", root),
            Item::file("doc1", "Resume.pdf", "pdf", "1.8 MB", "Apr 15, 2023", Some("documents")),
            Item::file("doc2", "Contract.docx", "docx", "3.5 MB", "May 3, 2023", Some("documents")),
            Item::file("doc3", "Instructions.txt", "txt", "0.1 MB", "Jun 20, 2023", Some("documents")),
            Item::file("img1", "Vacation.jpg", "jpg", "4.2 MB", "Jul 8, 2023", Some("images")),
            Item::file("img2", "Profile.png", "png", "1.5 MB", "Jul 10, 2023", Some("images")),
            Item::folder("project1", "Website Redesign", Some("projects")),
            Item::folder("project2", "Mobile App", Some("projects")),
            Item::file("website1", "Homepage Mockup.fig", "fig", "8.7 MB", "Jun 5, 2023", Some("project1")),
            Item::file("website2", "Style Guide.pdf", "pdf", "2.1 MB", "Jun 8, 2023", Some("project1")),
            Item::file("app1", "App Wireframes.sketch", "sketch", "5.3 MB", "May 22, 2023", Some("project2")),
        ])
    }

    /// All items in dataset order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose parent is `folder_id`, in dataset order.
    /// The root folder maps to items with no parent; unknown ids yield nothing.
    pub fn children_of(&self, folder_id: &str) -> Vec<&Item> {
        let parent = if folder_id == ROOT_ID {
            None
        } else {
            Some(folder_id)
        };
        self.items
            .iter()
            .filter(|item| item.parent.as_deref() == parent)
            .collect()
    }
}

impl Default for Drive {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn root_lists_top_level_items_in_order() {
        let drive = Drive::sample();
        assert_eq!(
            names(&drive.children_of(ROOT_ID)),
            vec![
                "Documents",
                "Images",
                "Projects",
                "Quarterly Report.pdf",
                "Meeting Notes.docx"
            ]
        );
    }

    #[test]
    fn nested_folder_contents() {
        let drive = Drive::sample();
        assert_eq!(
            names(&drive.children_of("projects")),
            vec!["Website Redesign", "Mobile App"]
        );
        assert_eq!(names(&drive.children_of("project2")), vec!["App Wireframes.sketch"]);
    }

    #[test]
    fn unknown_and_file_ids_have_no_children() {
        let drive = Drive::sample();
        assert!(drive.children_of("nope").is_empty());
        assert!(drive.children_of("file1").is_empty());
    }

    #[test]
    fn every_parent_is_a_known_folder() {
        let drive = Drive::sample();
        for item in drive.items() {
            if let Some(parent) = &item.parent {
                let folder = drive.get(parent).expect("parent exists");
                assert!(folder.is_folder(), "{} has non-folder parent", item.id);
            }
        }
    }
}
