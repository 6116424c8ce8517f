use super::vector::unit_or_zero;
use crate::graph::{Arc, Graph, Node};
use bevy::math::Vec3;

/// Zero a node's accumulated force
pub fn reset_force(node: &mut Node) {
    node.force = Vec3::ZERO;
}

/// Hookean spring force acting on `node0` (the arc's `from` end)
///
/// Pulls the ends together when stretched past the ideal length and pushes
/// them apart when compressed. Co-located ends give zero force. Magnitude is
/// not clamped.
pub fn spring_force(arc: &Arc, node0: &Node, node1: &Node) -> Vec3 {
    let delta = node1.position - node0.position;
    let distance = delta.length();

    let direction = unit_or_zero(delta);
    let extension = distance - arc.ideal_length;

    direction * extension * arc.spring_coef
}

/// Add an arc's spring force to both endpoints, equal and opposite
pub fn accumulate_spring_force(arc: &Arc, node0: &mut Node, node1: &mut Node) {
    let force = spring_force(arc, node0, node1);

    node0.apply_force(force);
    node1.apply_force(-force);
}

/// Reset phase: every node's accumulator back to zero
pub fn reset_forces(graph: &mut Graph) {
    graph.for_each_node_mut(reset_force);
}

/// Accumulation phase: every arc contributes to its two endpoints
pub fn accumulate_spring_forces(graph: &mut Graph) {
    graph.for_each_arc_mut(accumulate_spring_force);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    fn pair(p0: Vec3, p1: Vec3) -> (Node, Node) {
        (Node::new("a", p0, 1.0), Node::new("b", p1, 1.0))
    }

    fn arc(ideal_length: f32, spring_coef: f32) -> Arc {
        Arc::new(NodeId(0), NodeId(1), ideal_length, spring_coef)
    }

    #[test]
    fn test_no_force_at_ideal_length() {
        let (mut n0, mut n1) = pair(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        accumulate_spring_force(&arc(5.0, 2.0), &mut n0, &mut n1);

        assert!(n0.force.length() < 1e-6);
        assert!(n1.force.length() < 1e-6);
    }

    #[test]
    fn test_stretched_spring_pulls_together() {
        let (mut n0, mut n1) = pair(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        accumulate_spring_force(&arc(5.0, 1.0), &mut n0, &mut n1);

        assert_eq!(n0.force, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(n1.force, Vec3::new(-5.0, 0.0, 0.0));
    }

    #[test]
    fn test_compressed_spring_pushes_apart() {
        let (mut n0, mut n1) = pair(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        accumulate_spring_force(&arc(5.0, 0.5), &mut n0, &mut n1);

        assert_eq!(n0.force, Vec3::new(0.0, -1.5, 0.0));
        assert_eq!(n1.force, Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_forces_are_exact_negations() {
        let (mut n0, mut n1) = pair(Vec3::new(1.3, -7.1, 2.2), Vec3::new(-4.9, 3.3, 8.8));
        accumulate_spring_force(&arc(2.7, 0.37), &mut n0, &mut n1);

        assert_eq!(n0.force, -n1.force);
        assert!(n0.force.length() > 0.0);
    }

    #[test]
    fn test_co_located_nodes_give_zero_force() {
        let p = Vec3::new(4.0, 4.0, 4.0);
        let (mut n0, mut n1) = pair(p, p);
        accumulate_spring_force(&arc(5.0, 1.0), &mut n0, &mut n1);

        assert_eq!(n0.force, Vec3::ZERO);
        assert_eq!(n1.force, Vec3::ZERO);
        assert!(n0.force.is_finite());
    }

    #[test]
    fn test_forces_from_several_arcs_add_up() {
        let mut graph = Graph::new();
        let hub = graph.add_node(Node::new("hub", Vec3::ZERO, 1.0)).unwrap();
        let left = graph
            .add_node(Node::new("left", Vec3::new(-10.0, 0.0, 0.0), 1.0))
            .unwrap();
        let up = graph
            .add_node(Node::new("up", Vec3::new(0.0, 10.0, 0.0), 1.0))
            .unwrap();
        graph.add_arc(Arc::new(hub, left, 5.0, 1.0)).unwrap();
        graph.add_arc(Arc::new(hub, up, 5.0, 1.0)).unwrap();

        accumulate_spring_forces(&mut graph);

        assert_eq!(graph.node(hub).unwrap().force, Vec3::new(-5.0, 5.0, 0.0));
        assert_eq!(graph.node(left).unwrap().force, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(graph.node(up).unwrap().force, Vec3::new(0.0, -5.0, 0.0));
    }

    #[test]
    fn test_reset_forces_clears_every_node() {
        let mut graph = Graph::new();
        for i in 0..3 {
            let mut node = Node::new(format!("n{}", i), Vec3::ZERO, 1.0);
            node.force = Vec3::splat(i as f32 + 1.0);
            graph.add_node(node).unwrap();
        }

        reset_forces(&mut graph);

        graph.for_each_node(|_, node| assert_eq!(node.force, Vec3::ZERO));
    }
}
