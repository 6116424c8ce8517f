use bevy::prelude::*;
use rand::Rng;

use crate::{
    graph::Graph,
    input::ControlAction,
    sim::{SimulationConfig, apply_preset},
    visual::grid::GridDisplay,
};

/// Apply one control action to the simulation state
pub fn apply_action<R: Rng>(
    action: ControlAction,
    graph: &mut Graph,
    config: &mut SimulationConfig,
    grid: &mut GridDisplay,
    rng: &mut R,
) {
    match action {
        ControlAction::ToggleGrid => {
            grid.visible = !grid.visible;
            info!("Grid {}", if grid.visible { "shown" } else { "hidden" });
        }
        ControlAction::ToggleSolver => {
            let state = config.toggle();
            info!("Solver {:?}", state);
        }
        ControlAction::Layout(preset) => apply_preset(preset, graph, config, rng),
        ControlAction::SpeedUp => {
            config.speed_up();
            info!("Time step now {:.2}", config.time_step);
        }
        ControlAction::SlowDown => {
            config.slow_down();
            info!("Time step now {:.2}", config.time_step);
        }
        // Handled by the camera plugin
        ControlAction::PrintCamera => {}
    }
}

pub fn handle_control_actions(
    mut actions: MessageReader<ControlAction>,
    mut graph: ResMut<Graph>,
    mut config: ResMut<SimulationConfig>,
    mut grid: ResMut<GridDisplay>,
) {
    let mut rng = rand::rng();
    for action in actions.read() {
        apply_action(*action, &mut graph, &mut config, &mut grid, &mut rng);
    }
}
