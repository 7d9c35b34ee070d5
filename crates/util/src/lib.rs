pub mod links;
pub mod session;

pub use links::{is_external, is_fragment, rewrite_href};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SessionStoreError};
