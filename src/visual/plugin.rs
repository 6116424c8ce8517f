use crate::graph::Graph;
use crate::visual::controls::handle_control_actions;
use crate::visual::edges::draw_arcs;
use crate::visual::grid::{GridDisplay, draw_grid};
use crate::visual::physics::{run_solver, sync_node_transforms};
use crate::visual::setup::{load_graph, setup_scene};
use bevy::prelude::*;

pub struct GraphPlugin;

impl Plugin for GraphPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GridDisplay>()
            // Load the graph first, then build the scene from it
            .add_systems(
                Startup,
                (load_graph, setup_scene.run_if(resource_exists::<Graph>)).chain(),
            )
            .add_systems(
                Update,
                (
                    handle_control_actions,
                    // Physics
                    run_solver,
                    // Visual updates
                    sync_node_transforms,
                    draw_arcs,
                    draw_grid,
                )
                    .chain()
                    .run_if(resource_exists::<Graph>),
            );
    }
}
