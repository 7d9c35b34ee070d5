//! Explicit configuration for one sidebar attachment.
//!
//! The original presentation layer read these values from globals (the
//! module-level root-path variable and the document location); here every
//! input is passed in, so the matching and expansion logic stays pure.

/// Document name substituted when the location path denotes a directory.
pub const DEFAULT_INDEX: &str = "index.html";

const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
const DEFAULT_ROW_HEIGHT: u32 = 24;

/// Inputs for one attachment of the sidebar navigator.
#[derive(Debug, Clone)]
pub struct SidebarConfig {
    /// Resolved URL of the currently displayed document.
    pub location: String,
    /// Relative path segment from the current document back to the book
    /// root, prepended to relative link targets (e.g. `../../`).
    pub path_to_root: String,
    /// Document name appended when the location path ends with `/`.
    pub default_index: String,
    /// Height of the sidebar container, in pixels.
    pub viewport_height: u32,
    /// Height of one rendered entry row, in pixels.
    pub row_height: u32,
}

impl SidebarConfig {
    pub fn new(location: impl Into<String>, path_to_root: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            path_to_root: path_to_root.into(),
            default_index: DEFAULT_INDEX.to_string(),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }

    /// Overrides the container geometry used for scroll calculations.
    pub fn with_geometry(mut self, viewport_height: u32, row_height: u32) -> Self {
        self.viewport_height = viewport_height;
        self.row_height = row_height;
        self
    }
}
