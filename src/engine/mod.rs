//! Session orchestration
//!
//! - [`timer`]: the [`StepTimer`](timer::StepTimer) that paces playback
//! - [`config`]: [`AlgorithmKind`](config::AlgorithmKind), per-algorithm
//!   defaults and command-line parsing
//! - [`session`]: the [`Session`](session::Session) controller
//! - [`errors`]: the crate error type
//! - [`constants`]: value ranges and clamps

pub mod config;
pub mod constants;
pub mod errors;
pub mod session;
pub mod timer;

pub use config::{AlgorithmKind, SessionConfig};
pub use errors::VisualizerError;
pub use session::Session;
pub use timer::StepTimer;
