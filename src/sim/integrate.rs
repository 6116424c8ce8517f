use super::config::DAMPING_COEF;
use crate::graph::{Graph, Node};
use bevy::math::Vec3;

/// Turn a node's accumulated force into a new velocity and position
///
/// Damped-impulse update, not textbook Euler: the velocity is re-derived
/// from `(v + a)` every step and scaled by `time_step * (1 - DAMPING_COEF)`,
/// so almost none of the previous velocity survives. The displacement is
/// the new velocity divided by `time_step`.
///
/// A zero time step would divide zero by zero; the displacement then takes
/// the limit `(v + a) * (1 - DAMPING_COEF)` and the velocity is zero.
pub fn integrate(node: &mut Node, time_step: f32) {
    let acceleration = node.force / node.mass;
    let impulse = node.velocity + acceleration;

    let displacement = if time_step == 0.0 {
        node.velocity = Vec3::ZERO;
        impulse * (1.0 - DAMPING_COEF)
    } else {
        node.velocity = impulse * time_step * (1.0 - DAMPING_COEF);
        node.velocity / time_step
    };

    node.position += displacement;
}

/// Integration phase over the whole graph
pub fn integrate_all(graph: &mut Graph, time_step: f32) {
    graph.for_each_node_mut(|node| integrate(node, time_step));
}
