//! Systems logic: the order in which input, turns and rendering state are updated.

use crate::utils::camera::{apply_camera_zoom, apply_scene_orbit, camera_keyboard_inputs};
use crate::utils::game_functions::{
    advance_rotation, apply_gesture_intents, check_solved, record_level_completion,
    register_cube_pieces, sync_piece_transforms,
};
use crate::utils::objects::{PuzzleSolved, RotationCompleted};
use crate::utils::setup::setup;
use crate::utils::touch_inputs::GestureInputPlugin;
use bevy::prelude::*;

// Plugin for managing all the game systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the systems to the app.
    fn build(&self, app: &mut App) {
        app.add_plugins(GestureInputPlugin)
            .add_message::<RotationCompleted>()
            .add_message::<PuzzleSolved>()
            .add_systems(Startup, setup)
            .add_systems(
                Update,
                (
                    register_cube_pieces,
                    (apply_gesture_intents, camera_keyboard_inputs),
                    advance_rotation,
                    sync_piece_transforms,
                    check_solved,
                    record_level_completion,
                    (apply_scene_orbit, apply_camera_zoom),
                )
                    .chain()
                    // Gestures recognised this frame are applied this frame
                    .after(crate::utils::touch_inputs::track_wheel_zoom),
            );
    }
}
