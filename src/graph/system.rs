use super::arc::Arc;
use super::node::{Node, NodeId};
use bevy::prelude::Resource;
use std::fmt;

/// Error types for graph construction
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    InvalidMass { name: String, mass: f32 },
    UnknownNode(NodeId),
    SelfLoop(NodeId),
    InvalidIdealLength { from: NodeId, to: NodeId, length: f32 },
    InvalidSpringCoef { from: NodeId, to: NodeId, coef: f32 },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidMass { name, mass } => {
                write!(f, "Node '{}' has invalid mass {} (must be > 0)", name, mass)
            }
            GraphError::UnknownNode(n) => write!(f, "Node {} does not exist", n),
            GraphError::SelfLoop(n) => write!(f, "Arc from node {} to itself", n),
            GraphError::InvalidIdealLength { from, to, length } => {
                write!(f, "Arc {}-{} has invalid ideal length {}", from, to, length)
            }
            GraphError::InvalidSpringCoef { from, to, coef } => {
                write!(f, "Arc {}-{} has invalid spring coefficient {}", from, to, coef)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// The simulated graph: owns every node and arc
/// Traversal is always in insertion order
#[derive(Debug, Clone, Default, Resource)]
pub struct Graph {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, rejecting non-positive or non-finite mass
    pub fn add_node(&mut self, node: Node) -> Result<NodeId, GraphError> {
        if !(node.mass.is_finite() && node.mass > 0.0) {
            return Err(GraphError::InvalidMass {
                name: node.name,
                mass: node.mass,
            });
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    /// Add an arc between two existing, distinct nodes
    pub fn add_arc(&mut self, arc: Arc) -> Result<(), GraphError> {
        for id in [arc.from, arc.to] {
            if id.index() >= self.nodes.len() {
                return Err(GraphError::UnknownNode(id));
            }
        }
        if arc.from == arc.to {
            return Err(GraphError::SelfLoop(arc.from));
        }
        if !(arc.ideal_length.is_finite() && arc.ideal_length >= 0.0) {
            return Err(GraphError::InvalidIdealLength {
                from: arc.from,
                to: arc.to,
                length: arc.ideal_length,
            });
        }
        if !arc.spring_coef.is_finite() {
            return Err(GraphError::InvalidSpringCoef {
                from: arc.from,
                to: arc.to,
                coef: arc.spring_coef,
            });
        }

        self.arcs.push(arc);
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Visit every node in insertion order
    pub fn for_each_node(&self, mut f: impl FnMut(NodeId, &Node)) {
        for (i, node) in self.nodes.iter().enumerate() {
            f(NodeId(i), node);
        }
    }

    /// Visit every node mutably in insertion order
    pub fn for_each_node_mut(&mut self, mut f: impl FnMut(&mut Node)) {
        for node in &mut self.nodes {
            f(node);
        }
    }

    /// Visit every arc with its two endpoints, in insertion order
    pub fn for_each_arc(&self, mut f: impl FnMut(&Arc, &Node, &Node)) {
        for arc in &self.arcs {
            f(arc, &self.nodes[arc.from.index()], &self.nodes[arc.to.index()]);
        }
    }

    /// Visit every arc with mutable access to both endpoints
    pub fn for_each_arc_mut(&mut self, mut f: impl FnMut(&Arc, &mut Node, &mut Node)) {
        for arc in &self.arcs {
            let (node0, node1) = pair_mut(&mut self.nodes, arc.from.index(), arc.to.index());
            f(arc, node0, node1);
        }
    }
}

/// Two distinct mutable elements of a slice, in the order asked for
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
