use bevy::prelude::*;

use crate::sim::LayoutPreset;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlAction>()
            .add_systems(Update, collect_control_actions);
    }
}

/// A user command from the control surface
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    ToggleGrid,
    ToggleSolver,
    Layout(LayoutPreset),
    /// Shrink the time step
    SpeedUp,
    /// Grow the time step
    SlowDown,
    PrintCamera,
}

/// Key bindings
/// G grid, Space solver, 1/2/3 layouts, = and - speed, C camera
pub fn action_for_key(key: KeyCode) -> Option<ControlAction> {
    match key {
        KeyCode::KeyG => Some(ControlAction::ToggleGrid),
        KeyCode::Space => Some(ControlAction::ToggleSolver),
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(ControlAction::Layout(LayoutPreset::Default)),
        KeyCode::Digit2 | KeyCode::Numpad2 => {
            Some(ControlAction::Layout(LayoutPreset::WorldSystem))
        }
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(ControlAction::Layout(LayoutPreset::Random)),
        KeyCode::Equal | KeyCode::NumpadAdd => Some(ControlAction::SpeedUp),
        KeyCode::Minus | KeyCode::NumpadSubtract => Some(ControlAction::SlowDown),
        KeyCode::KeyC => Some(ControlAction::PrintCamera),
        _ => None,
    }
}

fn collect_control_actions(keys: Res<ButtonInput<KeyCode>>, mut out: MessageWriter<ControlAction>) {
    for key in keys.get_just_pressed() {
        if let Some(action) = action_for_key(*key) {
            out.write(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_keys() {
        assert_eq!(
            action_for_key(KeyCode::Digit1),
            Some(ControlAction::Layout(LayoutPreset::Default))
        );
        assert_eq!(
            action_for_key(KeyCode::Numpad2),
            Some(ControlAction::Layout(LayoutPreset::WorldSystem))
        );
        assert_eq!(
            action_for_key(KeyCode::Digit3),
            Some(ControlAction::Layout(LayoutPreset::Random))
        );
    }

    #[test]
    fn test_toggle_and_speed_keys() {
        assert_eq!(action_for_key(KeyCode::Space), Some(ControlAction::ToggleSolver));
        assert_eq!(action_for_key(KeyCode::KeyG), Some(ControlAction::ToggleGrid));
        assert_eq!(action_for_key(KeyCode::Equal), Some(ControlAction::SpeedUp));
        assert_eq!(action_for_key(KeyCode::Minus), Some(ControlAction::SlowDown));
    }

    #[test]
    fn test_camera_travel_keys_are_not_actions() {
        assert_eq!(action_for_key(KeyCode::KeyW), None);
        assert_eq!(action_for_key(KeyCode::KeyS), None);
        assert_eq!(action_for_key(KeyCode::ArrowUp), None);
    }
}
