use thiserror::Error;

/// Errors surfaced while attaching the sidebar navigator.
///
/// Session-store failures are deliberately absent: storage problems degrade
/// to the no-store behavior with a logged warning instead of failing the
/// attachment.
#[derive(Debug, Error)]
pub enum NavError {
    /// The configured page location is not a valid absolute URL.
    #[error("invalid page location: {0}")]
    InvalidLocation(#[from] url::ParseError),
}
