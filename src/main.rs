use bevy::prelude::*;

use rubiks_cube_game::plugins::cube_plugin::RubiksCubePlugin;
use rubiks_cube_game::utils::config::CubeConfig;
#[cfg(not(target_arch = "wasm32"))]
use rubiks_cube_game::utils::constants::game_constants::CONFIG_FILE_NAME;

/// Main application function
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let config = CubeConfig::load_or_default(CONFIG_FILE_NAME);
    #[cfg(target_arch = "wasm32")]
    let config = CubeConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rubik's Cube".into(),
                fit_canvas_to_parent: true,
                // Keep touch and wheel events from scrolling the page
                prevent_default_event_handling: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins(RubiksCubePlugin)
        .run();
}
