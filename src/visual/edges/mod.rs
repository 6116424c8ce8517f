use bevy::prelude::*;

use crate::graph::Graph;

const ARC_START_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const ARC_END_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Draw every arc as a line fading from its `from` end to its `to` end
pub fn draw_arcs(graph: Res<Graph>, mut gizmos: Gizmos) {
    graph.for_each_arc(|_, node0, node1| {
        gizmos.line_gradient(node0.position, node1.position, ARC_START_COLOR, ARC_END_COLOR);
    });
}
