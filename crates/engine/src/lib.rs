//! # Booknav Engine
//!
//! Resolves which sidebar entry corresponds to the currently displayed page
//! of a generated documentation book, expands the sections that reveal it,
//! and persists the sidebar scroll offset across page loads within one
//! browsing session.
//!
//! ## Architecture
//!
//! - **`config`**: explicit per-attachment configuration (location URL,
//!   root-path prefix, viewport geometry)
//! - **`identity`**: normalized current-page identity and link resolution
//! - **`sidebar`**: the navigator component, its view-model, and the markup
//!   projection
//! - **`scroll`**: clamped scroll geometry for the sidebar container
//!
//! ## Usage
//!
//! ```rust
//! use booknav_engine::{SidebarConfig, SidebarNavigator, render_markup};
//! use booknav_types::NavTree;
//! use booknav_util::MemorySessionStore;
//!
//! let tree = NavTree::from_json(r#"{"items":[{"title":"Intro","href":"index.html"}]}"#)?;
//! let config = SidebarConfig::new("https://docs.example.com/book/", "");
//! let mut navigator = SidebarNavigator::new(&tree, config, Box::new(MemorySessionStore::new()));
//! navigator.attach()?;
//!
//! assert!(navigator.active_entry().is_some());
//! println!("{}", render_markup(navigator.state()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod identity;
pub mod scroll;
pub mod sidebar;

// Re-export commonly used types for convenience
pub use config::SidebarConfig;
pub use error::NavError;
pub use identity::PageIdentity;
pub use scroll::ScrollArea;
pub use sidebar::{NodeId, NodeView, SCROLL_STATE_KEY, SidebarEvent, SidebarNavigator, SidebarState, render_markup};
