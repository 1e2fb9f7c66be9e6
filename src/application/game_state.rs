use crate::domain::{Grid, step_into};
use crate::error::Result;
use crate::input::{self, Command, Frame};
use crate::rendering::SnapshotSink;

use super::Config;

/// Lifecycle of the main loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Generations advance every tick
    Active,
    /// Grid only changes through user edits
    Paused,
    /// Terminal; no further ticks run
    Terminated,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    /// Generation currently shown
    grid: Grid,
    /// Back buffer the next generation is written into
    scratch: Grid,
    state: LoopState,
    generation: u64,
}

impl GameState {
    /// Fresh, paused simulation with an empty grid sized from `config`
    pub fn new(config: &Config) -> Result<Self> {
        let grid = Grid::new(config.grid_width, config.grid_height)?;
        Ok(Self::from_grid(grid))
    }

    /// Paused simulation starting from `grid`
    pub fn from_grid(grid: Grid) -> Self {
        let scratch = grid.clone();
        Self {
            grid,
            scratch,
            state: LoopState::Paused,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.state == LoopState::Paused
    }

    /// False once the loop has terminated
    pub fn is_running(&self) -> bool {
        self.state != LoopState::Terminated
    }

    /// Flip between Active and Paused. Has no effect after termination.
    pub fn toggle_paused(&mut self) {
        self.state = match self.state {
            LoopState::Active => LoopState::Paused,
            LoopState::Paused => LoopState::Active,
            LoopState::Terminated => LoopState::Terminated,
        };
        log::info!(
            "simulation {} at generation {}",
            if self.is_paused() { "paused" } else { "resumed" },
            self.generation
        );
    }

    pub fn quit(&mut self) {
        self.state = LoopState::Terminated;
        log::info!("quitting after {} generations", self.generation);
    }

    /// Compute the next generation into the back buffer and swap it in
    pub fn advance(&mut self) {
        step_into(&self.grid, &mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
        log::debug!(
            "generation {}: {} alive",
            self.generation,
            self.grid.count_alive()
        );
    }

    /// Carry out one command
    pub fn apply<S: SnapshotSink + ?Sized>(&mut self, command: Command, sink: &mut S) -> Result<()> {
        match command {
            Command::Quit => self.quit(),
            Command::TogglePause => self.toggle_paused(),
            Command::Snapshot => {
                sink.capture(&self.grid)?;
            }
            // The mapper only knows the configured canvas; the grid owned here is authoritative
            Command::ToggleCell { x, y } if self.grid.contains(x, y) => self.grid.toggle(x, y),
            Command::ToggleCell { x, y } => {
                log::trace!("ignoring toggle at ({}, {}) outside the grid", x, y);
            }
        }
        Ok(())
    }

    /// Run one tick: discrete events, then the held-pointer edit, then
    /// a generation step when active. Quitting ends the tick at once.
    pub fn tick<S: SnapshotSink + ?Sized>(
        &mut self,
        frame: &Frame,
        config: &Config,
        sink: &mut S,
    ) -> Result<()> {
        if !self.is_running() {
            return Ok(());
        }

        for event in &frame.events {
            if let Some(command) = input::map_event(event, config) {
                self.apply(command, sink)?;
                if !self.is_running() {
                    return Ok(());
                }
            }
        }

        if let Some(command) = input::map_pointer_hold(&frame.pointer, config) {
            self.apply(command, sink)?;
        }

        if self.state == LoopState::Active {
            self.advance();
        }

        Ok(())
    }
}
