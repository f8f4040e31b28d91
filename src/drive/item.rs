// src/drive/item.rs
//! Item records and file type classification.

/// Whether an item is a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Folder,
    File,
}

/// High-level file categories, derived from the `file_type` tag.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FileCategory {
    Pdf,
    Document,
    Text,
    Image,
    Figma,
    Sketch,
    Other,
}

impl FileCategory {
    /// Classify a lowercase file type tag such as `"pdf"` or `"png"`.
    pub fn from_file_type(file_type: &str) -> Self {
        match file_type {
            "pdf" => FileCategory::Pdf,
            "doc" | "docx" => FileCategory::Document,
            "txt" | "md" => FileCategory::Text,
            "jpg" | "jpeg" | "png" | "gif" => FileCategory::Image,
            "fig" => FileCategory::Figma,
            "sketch" => FileCategory::Sketch,
            _ => FileCategory::Other,
        }
    }
}

/// A single folder or file in the drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    /// Lowercase type tag for files (`pdf`, `docx`, ...)
    pub file_type: Option<String>,
    /// Human readable size, e.g. `"2.4 MB"`
    pub size: Option<String>,
    /// Human readable modification date
    pub modified: Option<String>,
    /// Parent folder id; `None` for top-level items
    pub parent: Option<String>,
}

impl Item {
    /// Create a folder record.
    pub fn folder(id: &str, name: &str, parent: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::Folder,
            file_type: None,
            size: None,
            modified: None,
            parent: parent.map(str::to_string),
        }
    }

    /// Create a file record.
    pub fn file(
        id: &str,
        name: &str,
        file_type: &str,
        size: &str,
        modified: &str,
        parent: Option<&str>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ItemKind::File,
            file_type: Some(file_type.to_string()),
            size: Some(size.to_string()),
            modified: Some(modified.to_string()),
            parent: parent.map(str::to_string),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    /// Category used for icons and colours. Folders report `Other`.
    pub fn category(&self) -> FileCategory {
        self.file_type
            .as_deref()
            .map(FileCategory::from_file_type)
            .unwrap_or(FileCategory::Other)
    }

    /// Label for the "Type" column.
    pub fn type_label(&self) -> String {
        match (self.kind, self.file_type.as_deref()) {
            (ItemKind::Folder, _) => "Folder".to_string(),
            (ItemKind::File, Some(ft)) if !ft.is_empty() => ft.to_uppercase(),
            (ItemKind::File, _) => "File".to_string(),
        }
    }

    /// Label for the "Size" column.
    pub fn size_label(&self) -> &str {
        match (&self.size, self.kind) {
            (Some(size), _) => size.as_str(),
            (None, ItemKind::Folder) => "—",
            (None, ItemKind::File) => "0 KB",
        }
    }

    /// Label for the "Modified" column.
    pub fn modified_label(&self) -> &str {
        self.modified.as_deref().unwrap_or("—")
    }
}
