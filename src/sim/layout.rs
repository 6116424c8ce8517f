use super::config::{
    RANDOM_LAYOUT_RANGE, SimulationConfig, WORLD_SYSTEM_RAISED_DEPTH, WORLD_SYSTEM_ROW_SPACING,
    WORLD_SYSTEM_SPACING,
};
use super::vector::random_vec3;
use crate::graph::{Graph, Node};
use bevy::math::Vec3;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

/// Fixed arrangements the user can reset the layout to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPreset {
    /// Positions as imported
    Default,
    /// Grid grouped by world system
    WorldSystem,
    Random,
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutPreset::Default => write!(f, "default"),
            LayoutPreset::WorldSystem => write!(f, "world system"),
            LayoutPreset::Random => write!(f, "randomised"),
        }
    }
}

/// Depth of a world-system row: groups 1 and 3 sit raised, the rest at zero
pub fn world_system_depth(world_system: u32) -> f32 {
    match world_system {
        1 | 3 => WORLD_SYSTEM_RAISED_DEPTH,
        _ => 0.0,
    }
}

/// Compute every node's world-system slot, once, after the graph is loaded
///
/// x is the group times the column spacing, y stacks nodes of the same group
/// in visit order, z comes from `world_system_depth`.
pub fn assign_world_system_positions(graph: &mut Graph) {
    let mut counters: HashMap<u32, u32> = HashMap::new();

    graph.for_each_node_mut(|node| {
        let count = counters.entry(node.world_system).or_insert(0);

        node.world_system_position = Vec3::new(
            WORLD_SYSTEM_SPACING * node.world_system as f32,
            WORLD_SYSTEM_ROW_SPACING * *count as f32,
            world_system_depth(node.world_system),
        );
        *count += 1;
    });
}

pub fn copy_default_to_current(node: &mut Node) {
    node.position = node.default_position;
}

pub fn copy_world_system_to_current(node: &mut Node) {
    node.position = node.world_system_position;
}

pub fn randomise_position<R: Rng>(node: &mut Node, rng: &mut R) {
    node.position = random_vec3(rng, RANDOM_LAYOUT_RANGE);
}

/// Move every node to a preset arrangement and stop the solver
///
/// Only positions change; velocities and forces are left as they were.
pub fn apply_preset<R: Rng>(
    preset: LayoutPreset,
    graph: &mut Graph,
    config: &mut SimulationConfig,
    rng: &mut R,
) {
    match preset {
        LayoutPreset::Default => graph.for_each_node_mut(copy_default_to_current),
        LayoutPreset::WorldSystem => graph.for_each_node_mut(copy_world_system_to_current),
        LayoutPreset::Random => {
            graph.for_each_node_mut(|node| randomise_position(node, &mut *rng))
        }
    }
    config.disable();

    log::info!("Switched to {} layout, solver disabled", preset);
}
