//! Spring-mass layout solver
//!
//! Pure functions over `Graph`; the Bevy side only calls `driver::tick`
//! and the layout presets.

pub mod config;
pub mod driver;
pub mod forces;
pub mod integrate;
pub mod layout;
pub mod vector;

pub use config::{SimulationConfig, SolverState};
pub use driver::tick;
pub use layout::{LayoutPreset, apply_preset};
