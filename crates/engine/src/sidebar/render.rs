//! Projects the sidebar view-model onto the generated book's markup shape.
//!
//! The projection is one-way: matching and expansion run on the view-model,
//! and this module emits the `<ol class="chapter">` tree with `expanded` and
//! `active` class markers plus the rewritten link targets.

use crate::sidebar::state::{NodeId, SidebarState};

/// Renders the sidebar container markup.
pub fn render_markup(state: &SidebarState) -> String {
    let mut out = String::new();
    out.push_str("<ol class=\"chapter\">");
    for &root in state.roots() {
        render_node(state, root, &mut out);
    }
    out.push_str("</ol>");
    out
}

fn render_node(state: &SidebarState, id: NodeId, out: &mut String) {
    let node = &state.nodes()[id];

    out.push_str("<li class=\"chapter-item");
    if node.expanded {
        out.push_str(" expanded");
    }
    out.push_str("\"><a href=\"");
    out.push_str(&escape_attr(&node.target));
    out.push('"');
    if node.active {
        out.push_str(" class=\"active\"");
    }
    out.push('>');
    out.push_str(&escape_text(&node.title));
    out.push_str("</a>");
    if node.is_section() {
        out.push_str("<a class=\"toggle\"><div>\u{276f}</div></a>");
    }
    out.push_str("</li>");

    // Children live in a sibling list item so collapsing the section hides
    // the whole block.
    if node.is_section() {
        out.push_str("<li><ol class=\"section\">");
        for &child in &node.children {
            render_node(state, child, out);
        }
        out.push_str("</ol></li>");
    }
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}
