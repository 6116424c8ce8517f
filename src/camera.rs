use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::input::ControlAction;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (mouse_look_and_pan, travel, print_camera));
    }
}

/// Tuning for the free-roaming camera
#[derive(Resource, Debug, Clone)]
pub struct CameraSettings {
    /// Radians per pixel of mouse motion
    pub look_sensitivity: f32,
    /// World units per pixel of middle-drag
    pub pan_speed: f32,
    /// World units per second while a travel key is held
    pub travel_speed: f32,
    /// World units per scroll line
    pub scroll_step: f32,
    pub start_position: Vec3,
    pub start_target: Vec3,
    pub far_clip: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_sensitivity: 0.004,
            pan_speed: 1.5,
            travel_speed: 400.0,
            scroll_step: 60.0,
            start_position: Vec3::new(300.0, 400.0, 1400.0),
            start_target: Vec3::new(300.0, 50.0, 0.0),
            far_clip: 20_000.0,
        }
    }
}

/// Orientation state of the free-roaming camera
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
}

/// Pitch stays short of straight up/down so yaw keeps its meaning
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

impl FlyCamera {
    /// Orientation facing along `direction`
    pub fn looking(direction: Vec3) -> Self {
        let dir = direction.normalize_or(Vec3::NEG_Z);
        Self {
            yaw: (-dir.x).atan2(-dir.z),
            pitch: dir.y.clamp(-1.0, 1.0).asin().clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    /// Turn by a mouse delta (pixels), y down on screen
    pub fn rotate(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

#[derive(Component)]
pub struct MainCamera;

fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    let fly = FlyCamera::looking(settings.start_target - settings.start_position);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            far: settings.far_clip,
            ..default()
        }),
        Transform::from_translation(settings.start_position).with_rotation(fly.rotation()),
        fly,
        MainCamera,
    ));
}

/// Left drag turns the camera, middle drag pans it
fn mouse_look_and_pan(
    settings: Res<CameraSettings>,
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    mut camera: Query<(&mut Transform, &mut FlyCamera), With<MainCamera>>,
) {
    let delta = motion.delta;
    if delta == Vec2::ZERO {
        return;
    }
    let Ok((mut transform, mut fly)) = camera.single_mut() else {
        return;
    };

    if buttons.pressed(MouseButton::Left) {
        fly.rotate(delta, settings.look_sensitivity);
        transform.rotation = fly.rotation();
    } else if buttons.pressed(MouseButton::Middle) {
        let right = *transform.right();
        let up = *transform.up();
        transform.translation += (-right * delta.x + up * delta.y) * settings.pan_speed;
    }
}

/// W/S or Up/Down move along the view direction, as does the scroll wheel
fn travel(
    time: Res<Time>,
    settings: Res<CameraSettings>,
    keys: Res<ButtonInput<KeyCode>>,
    scroll: Res<AccumulatedMouseScroll>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let mut amount = 0.0;
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        amount += settings.travel_speed * time.delta_secs();
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        amount -= settings.travel_speed * time.delta_secs();
    }
    amount += scroll.delta.y * settings.scroll_step;

    if amount == 0.0 {
        return;
    }
    if let Ok(mut transform) = camera.single_mut() {
        let forward = *transform.forward();
        transform.translation += forward * amount;
    }
}

fn print_camera(
    mut actions: MessageReader<ControlAction>,
    camera: Query<(&Transform, &FlyCamera), With<MainCamera>>,
) {
    for action in actions.read() {
        if *action != ControlAction::PrintCamera {
            continue;
        }
        if let Ok((transform, fly)) = camera.single() {
            info!(
                "Camera at {:?}, yaw={:.3}, pitch={:.3}, forward={:?}",
                transform.translation,
                fly.yaw,
                fly.pitch,
                *transform.forward()
            );
        }
    }
}
