pub mod controls;
pub mod edges;
pub mod grid;
pub mod nodes;
pub mod physics;
pub mod plugin;
pub mod setup;
