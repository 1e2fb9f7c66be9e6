// Domain layer - grid and the generation rule
pub mod domain;

// Application layer - loop state, configuration, pacing
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

mod error;

// Re-exports for convenience
pub use domain::{Cell, Grid};
pub use application::{Config, GameState, LoopState, PaintMode};
pub use error::{Error, Result};
