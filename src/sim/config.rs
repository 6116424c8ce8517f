use bevy::prelude::Resource;
use std::ops::Range;

/// Damping coefficient; velocities are scaled by `1 - DAMPING_COEF` each step
pub const DAMPING_COEF: f32 = 0.99995;

/// Step applied by speed up / slow down
pub const TIME_STEP_DELTA: f32 = 0.1;

pub const DEFAULT_TIME_STEP: f32 = 1.0;

/// World-system layout grid
pub const WORLD_SYSTEM_SPACING: f32 = 300.0;
pub const WORLD_SYSTEM_ROW_SPACING: f32 = 50.0;
pub const WORLD_SYSTEM_RAISED_DEPTH: f32 = 100.0;

/// Per-axis range for the randomised layout
pub const RANDOM_LAYOUT_RANGE: Range<f32> = 100.0..1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverState {
    #[default]
    Disabled,
    Enabled,
}

impl SolverState {
    pub fn toggled(self) -> Self {
        match self {
            SolverState::Disabled => SolverState::Enabled,
            SolverState::Enabled => SolverState::Disabled,
        }
    }
}

/// Runtime solver settings, passed explicitly to every tick
#[derive(Debug, Clone, Resource)]
pub struct SimulationConfig {
    pub state: SolverState,
    /// Time-step scalar, no bounds enforced
    pub time_step: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            state: SolverState::Disabled,
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl SimulationConfig {
    pub fn is_enabled(&self) -> bool {
        self.state == SolverState::Enabled
    }

    pub fn enable(&mut self) {
        self.state = SolverState::Enabled;
    }

    pub fn disable(&mut self) {
        self.state = SolverState::Disabled;
    }

    pub fn toggle(&mut self) -> SolverState {
        self.state = self.state.toggled();
        self.state
    }

    /// Shrinks the time step: the stored velocity shrinks while each step's
    /// displacement is unchanged
    pub fn speed_up(&mut self) {
        self.time_step -= TIME_STEP_DELTA;
    }

    pub fn slow_down(&mut self) {
        self.time_step += TIME_STEP_DELTA;
    }
}
