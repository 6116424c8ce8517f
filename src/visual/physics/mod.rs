use bevy::prelude::*;

use crate::{
    graph::Graph,
    sim::{self, SimulationConfig},
    visual::nodes::GraphNode,
};

/// Core solver system: one tick per frame
pub fn run_solver(mut graph: ResMut<Graph>, config: Res<SimulationConfig>) {
    if !config.is_enabled() {
        return;
    }
    sim::tick(&mut graph, &config);
}

/// Copy solved positions onto the rendered entities
pub fn sync_node_transforms(graph: Res<Graph>, mut nodes: Query<(&GraphNode, &mut Transform)>) {
    if !graph.is_changed() {
        return;
    }

    for (graph_node, mut transform) in &mut nodes {
        if let Some(node) = graph.node(graph_node.node_id) {
            transform.translation = node.position;
        }
    }
}
