use serde::{Deserialize, Serialize};

/// One sidebar link entry: a human-readable title plus the link target the
/// book generator emitted for it (relative to the book root).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Text displayed for the entry.
    pub title: String,
    /// Link target relative to the book root (e.g. `get-started/intro.html`).
    /// May also be a fragment-only or absolute URL, which the navigator
    /// leaves untouched.
    pub href: String,
}

/// A navigation tree node: an entry plus the nested section beneath it.
///
/// Nodes with children are collapsible sections; leaf nodes are plain
/// entries. The tree is baked in by the generator and never recomputed at
/// runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    #[serde(flatten)]
    pub entry: NavEntry,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
}

impl NavNode {
    /// Whether this node heads a collapsible section.
    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The book's full table of contents as emitted by the generator.
///
/// Document order is preorder over the tree; "the first link" of the book is
/// preorder index 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTree {
    #[serde(default)]
    pub items: Vec<NavNode>,
}

impl NavTree {
    /// Parses the JSON tree encoding produced by the generator.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Total number of entries across all nesting levels.
    pub fn entry_count(&self) -> usize {
        fn count(node: &NavNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }
        self.items.iter().map(count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
