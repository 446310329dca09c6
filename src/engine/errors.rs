//! Error types for sessions and algorithm inputs
//!
//! This module defines [`VisualizerError`]. Every variant is locally
//! recoverable: the operation that produced it is refused and the session is
//! left exactly as it was.
//!
//! Expected algorithmic outcomes (target not found, negative cycle, cyclic
//! graph in a topological sort) are terminal phases of the state machines and
//! never show up here.

use thiserror::Error;

/// Errors reported at the session boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualizerError {
    /// Search target is not a number
    #[error("Invalid search target '{input}': please enter a valid number")]
    InvalidTarget { input: String },

    /// Heap insert beyond capacity
    #[error("Cannot add: heap is full (max {capacity} nodes)")]
    HeapFull { capacity: usize },

    /// Heap extract on an empty heap
    #[error("Cannot extract: heap is empty")]
    HeapEmpty,

    /// A heap operation is still sifting
    #[error("Another operation is still in progress")]
    OperationInProgress,

    /// Configuration rejected before any state was built
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Radix sort only handles non-negative values
    #[error("Radix sort cannot handle negative value {value}")]
    NegativeValue { value: i64 },

    /// Start or end node not present in the graph
    #[error("Unknown node '{id}'")]
    UnknownNode { id: String },

    /// Unrecognised algorithm name
    #[error("Unknown algorithm '{name}'")]
    UnknownAlgorithm { name: String },

    /// Operation not offered by this session's algorithm
    #[error("{operation} is not available for {kind}")]
    WrongAlgorithm {
        operation: &'static str,
        kind: &'static str,
    },
}
