//! Sidebar view-model.
//!
//! The static navigation tree is flattened into document (preorder) order,
//! with explicit `active` and `expanded` booleans per node instead of
//! class-based presentation state. Matching and expansion mutate only these
//! flags; the rendering layer projects them onto markup afterwards.

use booknav_types::{NavNode, NavTree};
use booknav_util::links::rewrite_href;

use crate::identity::PageIdentity;

/// Index of a node in document (preorder) order.
pub type NodeId = usize;

/// One flattened navigation node with its presentation state.
#[derive(Debug, Clone)]
pub struct NodeView {
    /// Text displayed for the entry.
    pub title: String,
    /// Link target as emitted by the generator.
    pub href: String,
    /// Link target after root-path rewriting.
    pub target: String,
    /// Nesting depth; root entries sit at depth 0.
    pub depth: usize,
    /// Enclosing section entry, if any.
    pub parent: Option<NodeId>,
    /// Child nodes in document order.
    pub children: Vec<NodeId>,
    /// Whether this entry corresponds to the displayed page.
    pub active: bool,
    /// Whether this section's children are revealed.
    pub expanded: bool,
}

impl NodeView {
    /// Whether this node heads a collapsible section.
    pub fn is_section(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Flattened, mutable view of the navigation tree.
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    nodes: Vec<NodeView>,
    roots: Vec<NodeId>,
    active: Option<NodeId>,
}

impl SidebarState {
    /// Flattens the static tree into document order, rewriting link targets
    /// against the root-path prefix.
    pub fn from_tree(tree: &NavTree, path_to_root: &str) -> Self {
        let mut state = Self::default();
        for node in &tree.items {
            let id = state.push_node(node, path_to_root, None, 0);
            state.roots.push(id);
        }
        state
    }

    fn push_node(&mut self, node: &NavNode, path_to_root: &str, parent: Option<NodeId>, depth: usize) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(NodeView {
            title: node.entry.title.clone(),
            href: node.entry.href.clone(),
            target: rewrite_href(path_to_root, &node.entry.href),
            depth,
            parent,
            children: Vec::new(),
            active: false,
            expanded: false,
        });
        for child in &node.children {
            let child_id = self.push_node(child, path_to_root, Some(id), depth + 1);
            self.nodes[id].children.push(child_id);
        }
        id
    }

    pub fn nodes(&self) -> &[NodeView] {
        &self.nodes
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeView> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Entry resolved as active during the last attachment, if any.
    pub fn active_id(&self) -> Option<NodeId> {
        self.active
    }

    /// Resolves and marks the active entry.
    ///
    /// The active entry is the first link in document order whose resolved
    /// address equals the page identity. When no exact match exists
    /// anywhere, the very first link stands in for the index page, but only
    /// when the book is served from its root (empty root-path prefix). At
    /// most one node is marked.
    pub fn resolve_active(&mut self, identity: &PageIdentity, path_to_root: &str, default_index: &str) -> Option<NodeId> {
        let exact = self
            .nodes
            .iter()
            .position(|node| !node.target.is_empty() && identity.matches(&node.target));
        let id = exact.or_else(|| {
            let index_alias = !self.nodes.is_empty() && path_to_root.is_empty() && identity.is_index(default_index);
            index_alias.then_some(0)
        })?;
        self.nodes[id].active = true;
        self.active = Some(id);
        Some(id)
    }

    /// Marks the active node and every structural ancestor expanded so the
    /// active entry is visible even inside sections collapsed by default.
    /// Monotonic: flags are only set, never cleared.
    pub fn expand_active_chain(&mut self) {
        let Some(mut id) = self.active else {
            return;
        };
        self.nodes[id].expanded = true;
        while let Some(parent) = self.nodes[id].parent {
            self.nodes[parent].expanded = true;
            id = parent;
        }
    }

    /// Flips the expanded state of a section. Leaf entries carry no toggle
    /// control, so they are left alone.
    pub fn toggle(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(id)
            && !node.children.is_empty()
        {
            node.expanded = !node.expanded;
        }
    }

    /// Number of rows currently visible; collapsed sections hide their
    /// subtree.
    pub fn visible_len(&self) -> usize {
        let mut count = 0;
        self.walk_visible(|_| count += 1);
        count
    }

    /// Visible row index of a node, or `None` while it is hidden inside a
    /// collapsed section.
    pub fn visible_row(&self, id: NodeId) -> Option<usize> {
        let mut row = 0;
        let mut found = None;
        self.walk_visible(|visible| {
            if visible == id && found.is_none() {
                found = Some(row);
            }
            row += 1;
        });
        found
    }

    fn walk_visible<F: FnMut(NodeId)>(&self, mut visit: F) {
        fn descend<F: FnMut(NodeId)>(state: &SidebarState, id: NodeId, visit: &mut F) {
            visit(id);
            if state.nodes[id].expanded {
                for &child in &state.nodes[id].children {
                    descend(state, child, visit);
                }
            }
        }
        for &root in &self.roots {
            descend(self, root, &mut visit);
        }
    }
}
