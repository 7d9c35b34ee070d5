//! The sidebar navigator component.
//!
//! Owns the view-model, the scroll geometry, and the injected session store,
//! and runs the attachment contract once per page load: resolve the current
//! page, highlight the matching entry, expand its ancestor sections, and
//! restore or center the scroll position. Interaction after attachment goes
//! through [`SidebarEvent`] dispatch.

use booknav_types::NavTree;
use booknav_util::session::SessionStore;
use tracing::{debug, warn};

use crate::config::SidebarConfig;
use crate::error::NavError;
use crate::identity::PageIdentity;
use crate::scroll::ScrollArea;
use crate::sidebar::state::{NodeId, NodeView, SidebarState};

/// Storage key holding the container scroll offset between page loads.
pub const SCROLL_STATE_KEY: &str = "sidebar-scroll";

/// Interaction events dispatched to the navigator after attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// A navigation link was clicked; the page is about to be left.
    LinkActivated { id: NodeId },
    /// A section toggle control was clicked.
    ToggleClicked { id: NodeId },
}

/// Sidebar navigator for one displayed page of the book.
pub struct SidebarNavigator {
    config: SidebarConfig,
    state: SidebarState,
    scroll: ScrollArea,
    store: Box<dyn SessionStore>,
}

impl SidebarNavigator {
    /// Builds the view-model from the static tree. Link targets are
    /// rewritten here; matching happens during [`attach`](Self::attach).
    pub fn new(tree: &NavTree, config: SidebarConfig, store: Box<dyn SessionStore>) -> Self {
        let state = SidebarState::from_tree(tree, &config.path_to_root);
        let mut scroll = ScrollArea::default();
        scroll.update_viewport_height(config.viewport_height);
        Self {
            config,
            state,
            scroll,
            store,
        }
    }

    /// Runs the one-shot attachment contract.
    ///
    /// Absence conditions (no matching link, no stored offset, store
    /// failures) skip the corresponding step; only an unparsable location
    /// URL is an error.
    pub fn attach(&mut self) -> Result<(), NavError> {
        let identity = PageIdentity::resolve(&self.config.location, &self.config.default_index)?;
        match self
            .state
            .resolve_active(&identity, &self.config.path_to_root, &self.config.default_index)
        {
            Some(id) => debug!(id, "resolved active sidebar entry"),
            None => debug!(location = %identity.as_str(), "no sidebar entry matches the current page"),
        }
        self.state.expand_active_chain();
        self.refresh_content_height();
        self.restore_scroll();
        Ok(())
    }

    pub fn state(&self) -> &SidebarState {
        &self.state
    }

    pub fn scroll(&self) -> &ScrollArea {
        &self.scroll
    }

    pub fn config(&self) -> &SidebarConfig {
        &self.config
    }

    /// The injected session store.
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Entry resolved as active during attachment, if any.
    pub fn active_entry(&self) -> Option<&NodeView> {
        self.state.active_id().and_then(|id| self.state.node(id))
    }

    /// Records the container offset reported by the embedder as the user
    /// scrolls, clamped to content bounds.
    pub fn set_scroll_offset(&mut self, offset: u32) {
        self.scroll.set_offset(offset);
    }

    /// Dispatches an interaction event to its handler.
    pub fn handle_event(&mut self, event: SidebarEvent) {
        match event {
            SidebarEvent::LinkActivated { id } => self.on_link_activated(id),
            SidebarEvent::ToggleClicked { id } => self.on_toggle_clicked(id),
        }
    }

    /// Saves the current container scroll offset before navigation leaves
    /// the page. Every click overwrites the previous value.
    pub fn on_link_activated(&mut self, id: NodeId) {
        debug!(id, offset = self.scroll.offset(), "sidebar link activated");
        if let Err(error) = self.store.set(SCROLL_STATE_KEY, &self.scroll.offset().to_string()) {
            warn!(error = %error, "failed to persist sidebar scroll offset");
        }
    }

    /// Flips the expanded state of a section, independent of navigation.
    pub fn on_toggle_clicked(&mut self, id: NodeId) {
        self.state.toggle(id);
        self.refresh_content_height();
    }

    fn refresh_content_height(&mut self) {
        let rows = self.state.visible_len() as u32;
        self.scroll.update_content_height(rows.saturating_mul(self.config.row_height));
    }

    /// Applies the stored offset (read-once) or centers the active entry.
    ///
    /// The stored value is cleared even when unparsable, matching the
    /// read-once contract; with neither a stored offset nor an active entry
    /// the offset is left alone.
    fn restore_scroll(&mut self) {
        if let Some(offset) = self.take_stored_offset() {
            self.scroll.set_offset(offset);
            return;
        }
        if let Some(id) = self.state.active_id()
            && let Some(row) = self.state.visible_row(id)
        {
            let row_top = (row as u32).saturating_mul(self.config.row_height);
            self.scroll.center_on(row_top, self.config.row_height);
        }
    }

    fn take_stored_offset(&mut self) -> Option<u32> {
        let stored = match self.store.get(SCROLL_STATE_KEY) {
            Ok(value) => value,
            Err(error) => {
                warn!(error = %error, "failed to read stored sidebar scroll offset");
                None
            }
        };
        if let Err(error) = self.store.delete(SCROLL_STATE_KEY) {
            warn!(error = %error, "failed to clear stored sidebar scroll offset");
        }
        stored.and_then(|raw| raw.parse::<u32>().ok())
    }
}

#[cfg(test)]
mod tests {
    use booknav_types::NavTree;
    use booknav_util::session::{MemorySessionStore, SessionStore};

    use super::{SCROLL_STATE_KEY, SidebarEvent, SidebarNavigator};
    use crate::config::SidebarConfig;

    fn sample_tree() -> NavTree {
        NavTree::from_json(
            r#"{
                "items": [
                    { "title": "Introduction", "href": "index.html" },
                    {
                        "title": "Guide",
                        "href": "guide/intro.html",
                        "children": [
                            { "title": "Setup", "href": "guide/setup.html" },
                            { "title": "Usage", "href": "guide/usage.html" },
                            { "title": "Tips", "href": "guide/tips.html" }
                        ]
                    },
                    { "title": "Reference", "href": "reference.html" }
                ]
            }"#,
        )
        .expect("sample tree parses")
    }

    fn navigator_for(location: &str) -> SidebarNavigator {
        // Pages in the sample book sit one level below the root.
        let config = SidebarConfig::new(location, "../").with_geometry(48, 24);
        SidebarNavigator::new(&sample_tree(), config, Box::new(MemorySessionStore::new()))
    }

    #[test]
    fn attach_highlights_and_reveals_the_current_page() {
        let mut navigator = navigator_for("https://docs.example.com/guide/usage.html");
        navigator.attach().expect("attach succeeds");

        let active = navigator.active_entry().expect("an entry is active");
        assert_eq!(active.title, "Usage");
        assert!(navigator.state().nodes()[1].expanded, "enclosing section revealed");
    }

    #[test]
    fn stored_offset_is_applied_and_consumed() {
        let store = MemorySessionStore::new();
        store.set(SCROLL_STATE_KEY, "24").expect("seed offset");
        let config = SidebarConfig::new("https://docs.example.com/guide/setup.html", "../").with_geometry(48, 24);
        let mut navigator = SidebarNavigator::new(&sample_tree(), config, Box::new(store));
        navigator.attach().expect("attach succeeds");

        assert_eq!(navigator.scroll().offset(), 24);
        assert!(
            navigator.store().get(SCROLL_STATE_KEY).expect("get succeeds").is_none(),
            "offset is read-once"
        );
    }

    #[test]
    fn stored_offset_is_clamped_to_content_bounds() {
        let store = MemorySessionStore::new();
        store.set(SCROLL_STATE_KEY, "100000").expect("seed offset");
        let config = SidebarConfig::new("https://docs.example.com/guide/setup.html", "../").with_geometry(48, 24);
        let mut navigator = SidebarNavigator::new(&sample_tree(), config, Box::new(store));
        navigator.attach().expect("attach succeeds");

        // Six visible rows at 24px against a 48px viewport.
        assert_eq!(navigator.scroll().offset(), navigator.scroll().max_offset());
        assert_eq!(navigator.scroll().offset(), 96);
    }

    #[test]
    fn without_a_stored_offset_the_active_entry_is_centered() {
        let mut navigator = navigator_for("https://docs.example.com/guide/tips.html");
        navigator.attach().expect("attach succeeds");

        // "Tips" sits on visible row 4: top 96px, midpoint 108px; centering
        // against a 48px viewport lands on 84, within the 96px bound.
        assert_eq!(navigator.scroll().offset(), 84);
    }

    #[test]
    fn without_a_match_no_scroll_action_occurs() {
        let mut navigator = navigator_for("https://docs.example.com/missing.html");
        navigator.attach().expect("attach succeeds");

        assert!(navigator.active_entry().is_none());
        assert_eq!(navigator.scroll().offset(), 0);
    }

    #[test]
    fn link_activation_writes_the_current_offset() {
        let mut navigator = navigator_for("https://docs.example.com/guide/setup.html");
        navigator.attach().expect("attach succeeds");
        navigator.set_scroll_offset(30);

        navigator.handle_event(SidebarEvent::LinkActivated { id: 5 });
        assert_eq!(
            navigator.store().get(SCROLL_STATE_KEY).expect("get succeeds").as_deref(),
            Some("30")
        );

        // A later click overwrites the stored value.
        navigator.set_scroll_offset(0);
        navigator.handle_event(SidebarEvent::LinkActivated { id: 0 });
        assert_eq!(
            navigator.store().get(SCROLL_STATE_KEY).expect("get succeeds").as_deref(),
            Some("0")
        );
    }

    #[test]
    fn toggling_updates_the_scrollable_content_height() {
        let mut navigator = navigator_for("https://docs.example.com/guide/setup.html");
        navigator.attach().expect("attach succeeds");
        assert_eq!(navigator.scroll().content_height(), 6 * 24);

        navigator.handle_event(SidebarEvent::ToggleClicked { id: 1 });
        assert_eq!(navigator.scroll().content_height(), 3 * 24);
    }

    #[test]
    fn unparsable_stored_offset_falls_back_to_centering() {
        let store = MemorySessionStore::new();
        store.set(SCROLL_STATE_KEY, "not-a-number").expect("seed offset");
        let config = SidebarConfig::new("https://docs.example.com/guide/tips.html", "../").with_geometry(48, 24);
        let mut navigator = SidebarNavigator::new(&sample_tree(), config, Box::new(store));
        navigator.attach().expect("attach succeeds");

        assert_eq!(navigator.scroll().offset(), 84);
        assert!(
            navigator.store().get(SCROLL_STATE_KEY).expect("get succeeds").is_none(),
            "bad value is still cleared"
        );
    }
}
