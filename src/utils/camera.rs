use bevy::prelude::*;

use crate::utils::config::CubeConfig;
use crate::utils::objects::{CameraZoom, CubeCamera, CubeRoot, SceneOrbit};

impl SceneOrbit {
    /// Adds a drag delta; pitch is clamped to `±pitch_limit`.
    pub fn orbit(&mut self, dx: f32, dy: f32, sensitivity: f32, pitch_limit: f32) {
        self.yaw += dx * sensitivity;
        self.pitch = (self.pitch + dy * sensitivity).clamp(-pitch_limit, pitch_limit);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

impl CameraZoom {
    /// Moves the camera by `delta`. Steps that would leave `min..=max` are dropped.
    pub fn zoom(&mut self, delta: f32, min: f32, max: f32) -> bool {
        let distance = self.0 + delta;
        if (min..=max).contains(&distance) {
            self.0 = distance;
            true
        } else {
            false
        }
    }

    /// Camera transform on the corner diagonal, looking at the cube center.
    pub fn camera_transform(&self) -> Transform {
        Transform::from_translation(Vec3::ONE.normalize() * self.0).looking_at(Vec3::ZERO, Vec3::Y)
    }
}

/// Rotates the cube root group to the current scene orbit.
pub fn apply_scene_orbit(orbit: Res<SceneOrbit>, mut root_query: Query<&mut Transform, With<CubeRoot>>) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = root_query.single_mut() else {
        return;
    };
    transform.rotation = orbit.rotation();
}

/// Places the camera at the current zoom distance.
pub fn apply_camera_zoom(
    zoom: Res<CameraZoom>,
    mut camera_query: Query<&mut Transform, (With<CubeCamera>, Without<CubeRoot>)>,
) {
    if !zoom.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = zoom.camera_transform();
}

/// Keyboard fallback for desktops without a touchpad: arrow keys orbit, W/S zoom.
pub fn camera_keyboard_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    timer: Res<Time>,
    config: Res<CubeConfig>,
    mut orbit: ResMut<SceneOrbit>,
    mut zoom: ResMut<CameraZoom>,
) {
    // Pixels of virtual drag per second of key press
    let speed = 200.0 * timer.delta_secs();

    let mut dx = 0.0;
    let mut dy = 0.0;
    if keyboard.pressed(KeyCode::ArrowLeft) {
        dx -= speed;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        dx += speed;
    }
    if keyboard.pressed(KeyCode::ArrowUp) {
        dy -= speed;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        dy += speed;
    }
    if dx != 0.0 || dy != 0.0 {
        orbit.orbit(dx, dy, config.orbit_sensitivity, config.orbit_pitch_limit);
    }

    let zoom_step = 4.0 * timer.delta_secs();
    if keyboard.pressed(KeyCode::KeyW) {
        zoom.zoom(-zoom_step, config.min_zoom, config.max_zoom);
    }
    if keyboard.pressed(KeyCode::KeyS) {
        zoom.zoom(zoom_step, config.min_zoom, config.max_zoom);
    }
}
