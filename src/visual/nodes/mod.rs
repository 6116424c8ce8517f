pub mod shapes;

use crate::graph::NodeId;
use bevy::prelude::*;

pub use shapes::{NodeShape, node_mesh};

/// Links a rendered entity to its node in the graph
#[derive(Component)]
pub struct GraphNode {
    pub node_id: NodeId,
}

pub fn continent_color(continent: u32) -> Color {
    match continent {
        1 => Color::srgb(0.29, 0.0, 0.51), // Indigo
        2 => Color::srgb(0.7, 0.7, 0.7),   // Gray
        3 => Color::srgb(0.0, 0.0, 1.0),   // Blue
        4 => Color::srgb(1.0, 0.0, 0.0),   // Red
        5 => Color::srgb(0.0, 1.0, 0.0),   // Green
        6 => Color::srgb(1.0, 0.5, 0.0),   // Orange
        _ => Color::WHITE,
    }
}
