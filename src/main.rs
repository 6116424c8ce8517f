use bevy::prelude::*;
use clap::Parser;

mod camera;
mod cli;
mod graph;
mod input;
mod sim;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use cli::Args;
use input::InputPlugin;
use sim::{SimulationConfig, SolverState};
use visual::setup::GraphSource;

use crate::visual::plugin::GraphPlugin;

fn main() -> AppExit {
    let args = Args::parse();

    let source = match args.input {
        Some(path) => GraphSource::File(path),
        None => GraphSource::Demo,
    };
    let config = SimulationConfig {
        state: if args.solver {
            SolverState::Enabled
        } else {
            SolverState::Disabled
        },
        time_step: args.time_step,
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Spring Graph".into(),
            resolution: WindowResolution::new(1280, 720),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(source)
    .insert_resource(config)
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(GraphPlugin);

    app.run()
}
