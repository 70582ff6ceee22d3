//! Error handling for the routing engine.
//!
//! The routing algorithms themselves are infallible by design: empty inputs
//! produce empty tables, degenerate markets are skipped, and exhausted hop
//! budgets silently stop a branch. Errors exist only at the edges of the
//! crate, where configuration is loaded and validated, and in lookup
//! accessors that can be asked about tokens or chains the tables do not
//! contain.
//!
//! The error system is organized into domain-specific error types:
//!
//! - **`GraphError`**: failed lookups against the graph or the per-chain cache
//! - **`ConfigError`**: market catalog validation failures
//!
//! `RoutingError` is the top-level enum with automatic conversion from the
//! domain errors and from external library errors.

pub mod config;
pub mod graph;

// Re-export error types for convenience
pub use config::ConfigError;
pub use graph::GraphError;

/// Main result type for the library
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Top-level error enum encompassing all errors in the routing engine.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// Failed lookup against the graph or the per-chain routing tables.
    #[error("Graph operation failed: {0}")]
    Graph(#[from] GraphError),

    /// Market catalog validation failure.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization or deserialization error while loading a catalog.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for cases not covered by specific error types.
    #[error("Generic error: {0}")]
    Other(#[from] anyhow::Error),
}
