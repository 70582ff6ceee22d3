//! Builder patterns for complex object construction.
//!
//! Builders offer a fluent alternative to constructors with many parameters,
//! consuming themselves on `build` to prevent reuse.

pub mod graph;

// Re-export builders for convenience
pub use graph::MarketGraphBuilder;
