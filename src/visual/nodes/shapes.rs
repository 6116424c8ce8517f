use bevy::prelude::*;
use std::f32::consts::PI;

/// Tube radius of the torus used for world system 3
const TORUS_TUBE_RADIUS: f32 = 5.0;
const SPHERE_SEGMENTS: u32 = 15;

/// Mesh shape picked from a node's world system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Cube,
    Sphere,
    Torus,
}

impl NodeShape {
    pub fn for_world_system(world_system: u32) -> Self {
        match world_system {
            1 => NodeShape::Cube,
            3 => NodeShape::Torus,
            _ => NodeShape::Sphere,
        }
    }
}

/// Edge of a cube holding `volume`
pub fn cube_edge_from_volume(volume: f32) -> f32 {
    volume.cbrt()
}

/// Radius of a sphere holding `volume`
pub fn sphere_radius_from_volume(volume: f32) -> f32 {
    (3.0 * volume / (4.0 * PI)).cbrt()
}

/// Mesh for a node, sized so its mass reads as a volume
pub fn node_mesh(shape: NodeShape, mass: f32) -> Mesh {
    match shape {
        NodeShape::Cube => Cuboid::from_length(cube_edge_from_volume(mass)).into(),
        NodeShape::Sphere => Sphere::new(sphere_radius_from_volume(mass))
            .mesh()
            .uv(SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        NodeShape::Torus => Torus {
            minor_radius: TORUS_TUBE_RADIUS,
            major_radius: sphere_radius_from_volume(mass),
        }
        .into(),
    }
}
