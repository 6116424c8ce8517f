use bevy::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::{
    graph::{Graph, loader},
    visual::nodes::{GraphNode, NodeShape, continent_color, node_mesh},
};

const CLEAR_COLOR: Color = Color::srgb(0.06, 0.06, 0.09);

/// Where the graph comes from
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// Bundled demo graph
    Demo,
    File(PathBuf),
}

/// Load the graph before anything else; exits the app when it cannot
pub fn load_graph(
    mut commands: Commands,
    source: Res<GraphSource>,
    mut exit: MessageWriter<AppExit>,
) {
    let result = match &*source {
        GraphSource::Demo => loader::load_demo(),
        GraphSource::File(path) => loader::load_file(path),
    };

    match result {
        Ok(graph) => {
            info!("✓ Graph loaded from {:?}:", *source);
            info!("  - {} nodes", graph.node_count());
            info!("  - {} arcs", graph.arc_count());
            if graph.is_empty() {
                warn!("Graph has no nodes, nothing to simulate");
            }
            commands.insert_resource(graph);
        }
        Err(e) => {
            error!("Failed to load graph: {}", e);
            exit.write(AppExit::error());
        }
    }
}

/// Spawn one mesh per node plus the lights
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    graph: Res<Graph>,
) {
    commands.insert_resource(ClearColor(CLEAR_COLOR));

    let mut continent_materials: HashMap<u32, Handle<StandardMaterial>> = HashMap::new();

    graph.for_each_node(|node_id, node| {
        let material = continent_materials
            .entry(node.continent)
            .or_insert_with(|| {
                materials.add(StandardMaterial {
                    base_color: continent_color(node.continent),
                    perceptual_roughness: 0.6,
                    ..default()
                })
            })
            .clone();
        let shape = NodeShape::for_world_system(node.world_system);

        commands.spawn((
            Mesh3d(meshes.add(node_mesh(shape, node.mass))),
            MeshMaterial3d(material),
            Transform::from_translation(node.position),
            GraphNode { node_id },
        ));
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(400.0, 1000.0, 800.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 2_000.0,
            ..default()
        },
        Transform::from_xyz(-600.0, 300.0, -800.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Scene created with {} node meshes", graph.node_count());
}
