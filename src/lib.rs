//! # Introduction
//!
//! AlgoTTY animates classic algorithms one observable step at a time in the
//! terminal. Every algorithm is an explicit state machine: a step takes the
//! current state and returns its successor, and a timer-driven session decides
//! when the next step happens.
//!
//! ## Pipeline
//!
//! ```text
//! Generator → ProblemInstance → StepMachine states → Session (timer, history) → TUI
//! ```
//!
//! 1. [`model`]: arrays, trees and weighted graphs, plus the seeded random
//!    [`model::generate::InstanceGenerator`].
//! 2. [`algorithms`]: sorting, searching, tree traversal, heap operations and
//!    graph algorithms, all implementing [`algorithms::StepMachine`].
//! 3. [`snapshot`]: bounded history of replaced states for stepping back.
//! 4. [`engine`]: the [`engine::StepTimer`], per-algorithm configuration and
//!    the [`engine::Session`] controller.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorts: bubble, insertion, selection, quick (Lomuto), merge (2-way and
//! 3-way), heap, count, radix.
//! Search: linear, binary.
//! Trees: inorder, preorder, postorder, level order.
//! Heaps: min/max insert and extract with sift animation.
//! Graphs: Dijkstra, Bellman-Ford with negative cycle detection, Kruskal,
//! Kahn's topological sort with cycle reporting.

pub mod algorithms;
pub mod engine;
pub mod model;
pub mod snapshot;
pub mod ui;
