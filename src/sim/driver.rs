use super::config::SimulationConfig;
use super::forces::{accumulate_spring_forces, reset_forces};
use super::integrate::integrate_all;
use crate::graph::Graph;

/// Run one simulation tick over the whole graph
///
/// No-op while the solver is disabled. Otherwise the three phases run
/// strictly in order, each over every node or arc before the next starts:
/// reset forces, accumulate spring forces, integrate.
pub fn tick(graph: &mut Graph, config: &SimulationConfig) {
    if !config.is_enabled() {
        return;
    }

    reset_forces(graph);
    accumulate_spring_forces(graph);
    integrate_all(graph, config.time_step);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Arc, Node, NodeId};
    use bevy::math::Vec3;

    fn spring_pair() -> Graph {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new("a", Vec3::ZERO, 1.0)).unwrap();
        let b = graph
            .add_node(Node::new("b", Vec3::new(10.0, 0.0, 0.0), 1.0))
            .unwrap();
        graph.add_arc(Arc::new(a, b, 5.0, 1.0)).unwrap();
        graph
    }

    fn enabled() -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.enable();
        config
    }

    fn position(graph: &Graph, i: usize) -> Vec3 {
        graph.node(NodeId(i)).unwrap().position
    }

    #[test]
    fn test_disabled_tick_changes_nothing() {
        let mut graph = spring_pair();
        graph.for_each_node_mut(|node| {
            node.velocity = Vec3::new(1.0, 2.0, 3.0);
            node.force = Vec3::new(-1.0, 0.5, 0.0);
        });
        let before = graph.clone();
        let config = SimulationConfig::default();

        for _ in 0..100 {
            tick(&mut graph, &config);
        }

        assert_eq!(graph.nodes(), before.nodes());
        assert_eq!(position(&graph, 0), Vec3::ZERO);
        assert_eq!(position(&graph, 1), Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_enabled_tick_moves_nodes_together() {
        let mut graph = spring_pair();

        tick(&mut graph, &enabled());

        assert!(position(&graph, 0).x > 0.0);
        assert!(position(&graph, 1).x < 10.0);
        assert_eq!(graph.node(NodeId(0)).unwrap().force, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(graph.node(NodeId(1)).unwrap().force, Vec3::new(-5.0, 0.0, 0.0));
    }

    #[test]
    fn test_forces_do_not_carry_over_between_ticks() {
        let mut graph = spring_pair();
        graph.for_each_node_mut(|node| node.force = Vec3::splat(1000.0));

        tick(&mut graph, &enabled());

        // Only this tick's spring force remains
        let force = graph.node(NodeId(0)).unwrap().force;
        assert!((force.x - 5.0).abs() < 1e-6);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_midpoint_is_conserved() {
        let mut graph = spring_pair();
        let config = enabled();

        for _ in 0..500 {
            tick(&mut graph, &config);
            let midpoint = (position(&graph, 0) + position(&graph, 1)) * 0.5;
            assert!(midpoint.distance(Vec3::new(5.0, 0.0, 0.0)) < 1e-3);
        }
    }

    #[test]
    fn test_converges_toward_ideal_length() {
        let mut graph = spring_pair();
        let config = enabled();
        let mut previous = 10.0;

        for _ in 0..1000 {
            tick(&mut graph, &config);
            let distance = position(&graph, 0).distance(position(&graph, 1));

            assert!(distance.is_finite());
            assert!(distance <= previous, "distance grew: {} > {}", distance, previous);
            assert!(distance > 5.0, "overshot ideal length: {}", distance);
            previous = distance;
        }

        assert!(previous < 10.0);
        // Motion stays on the arc's axis
        assert_eq!(position(&graph, 0).y, 0.0);
        assert_eq!(position(&graph, 1).z, 0.0);
    }

    #[test]
    fn test_pair_at_rest_length_stays_put() {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new("a", Vec3::ZERO, 1.0)).unwrap();
        let b = graph
            .add_node(Node::new("b", Vec3::new(0.0, 0.0, 5.0), 1.0))
            .unwrap();
        graph.add_arc(Arc::new(a, b, 5.0, 1.0)).unwrap();

        tick(&mut graph, &enabled());

        assert_eq!(position(&graph, 0), Vec3::ZERO);
        assert_eq!(position(&graph, 1), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_co_located_arc_does_not_poison_graph() {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new("a", Vec3::ONE, 1.0)).unwrap();
        let b = graph.add_node(Node::new("b", Vec3::ONE, 1.0)).unwrap();
        let c = graph
            .add_node(Node::new("c", Vec3::new(20.0, 1.0, 1.0), 1.0))
            .unwrap();
        graph.add_arc(Arc::new(a, b, 5.0, 1.0)).unwrap();
        graph.add_arc(Arc::new(b, c, 5.0, 1.0)).unwrap();

        tick(&mut graph, &enabled());

        graph.for_each_node(|_, node| assert!(node.position.is_finite()));
        assert_eq!(position(&graph, 0), Vec3::ONE);
        assert!(position(&graph, 1).x > 1.0);
    }

    #[test]
    fn test_time_step_change_applies_next_tick() {
        let mut a = spring_pair();
        let mut b = spring_pair();
        let mut config = enabled();

        tick(&mut a, &config);
        config.slow_down();
        tick(&mut b, &config);

        let va = a.node(NodeId(0)).unwrap().velocity.x;
        let vb = b.node(NodeId(0)).unwrap().velocity.x;
        assert!((vb - va * 1.1).abs() < 1e-7);
    }

    #[test]
    fn test_empty_graph_ticks() {
        let mut graph = Graph::new();
        tick(&mut graph, &enabled());
        assert!(graph.is_empty());
    }
}
