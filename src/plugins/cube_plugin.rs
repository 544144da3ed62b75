use std::time::Duration;

use bevy::prelude::*;

use crate::utils::config::CubeConfig;
use crate::utils::debug_functions::DebugFunctionsPlugin;
use crate::utils::gesture::{GestureInterpreter, GestureSettings};
use crate::utils::levels::LevelProgress;
use crate::utils::objects::{CameraZoom, CubeResource, GameSession, RandomGen, SceneOrbit};
use crate::utils::rubiks_cube::RubiksCube;
use crate::utils::systems_logic::SystemsLogicPlugin;
use crate::utils::touch_inputs::GestureInput;

/// Plugins
pub struct RubiksCubePlugin;

impl Plugin for RubiksCubePlugin {
    fn build(&self, app: &mut App) {
        // A config inserted before the plugin wins over the defaults
        let config = app
            .world()
            .get_resource::<CubeConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(CubeResource(RubiksCube::new(Duration::from_millis(
            config.animation_duration_ms,
        ))))
        .insert_resource(GestureInput(GestureInterpreter::new(
            GestureSettings::from(&config),
            Vec2::ZERO,
        )))
        .insert_resource(CameraZoom(config.camera_distance))
        .insert_resource(RandomGen::from_seed(config.seed))
        .init_resource::<SceneOrbit>()
        .init_resource::<GameSession>()
        .init_resource::<LevelProgress>()
        .insert_resource(config)
        .add_plugins((SystemsLogicPlugin, DebugFunctionsPlugin));
    }
}
