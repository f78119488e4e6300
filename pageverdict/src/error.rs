//! Error types for outcome extraction.
//!
//! These errors are routing signals between strategies and the
//! orchestrator: a failed strategy makes the orchestrator move on to the
//! next one. They never reach the caller of [`interpret`](crate::interpret),
//! which always returns a [`ParsedOutcome`](crate::ParsedOutcome).

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur inside an extraction strategy.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A CSS selector failed to compile when building the tree strategy.
    #[error("selector failed to compile: {0}")]
    InvalidSelector(String),

    /// Tree construction or traversal failed (including a caught panic).
    #[error("document traversal failed: {0}")]
    Traversal(String),
}
