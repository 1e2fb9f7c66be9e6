pub mod config;
mod game_state;
mod pacer;

pub use config::{Config, PaintMode};
pub use game_state::{GameState, LoopState};
pub use pacer::Pacer;
