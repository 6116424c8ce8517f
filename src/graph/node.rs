use bevy::math::Vec3;
use std::fmt;

/// Handle into the graph's node arena (insertion index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A graph vertex with its physical simulation state and display tags
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    /// Colour tag (1-6 in the bundled data)
    pub continent: u32,
    /// Group tag: picks the shape and the slot in the world-system layout
    pub world_system: u32,
    /// Current position
    pub position: Vec3,
    pub velocity: Vec3,
    /// Accumulated forces this tick
    pub force: Vec3,
    /// Always > 0, enforced by `Graph::add_node`
    pub mass: f32,
    /// Position as imported
    pub default_position: Vec3,
    /// Grid slot derived from `world_system`, filled in after load
    pub world_system_position: Vec3,
}

impl Node {
    /// Create a node at rest at its imported position
    pub fn new(name: impl Into<String>, position: Vec3, mass: f32) -> Self {
        Node {
            name: name.into(),
            continent: 0,
            world_system: 0,
            position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            mass,
            default_position: position,
            world_system_position: Vec3::ZERO,
        }
    }

    pub fn with_continent(mut self, continent: u32) -> Self {
        self.continent = continent;
        self
    }

    pub fn with_world_system(mut self, world_system: u32) -> Self {
        self.world_system = world_system;
        self
    }

    /// Add a force to the accumulator
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }
}
