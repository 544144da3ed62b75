//! Debug functions for the game.
use bevy::prelude::*;

use crate::utils::config::CubeConfig;
use crate::utils::levels::LevelProgress;
use crate::utils::objects::{CubeResource, GameSession, RandomGen};
use crate::utils::rotation_engine::EngineState;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (debug_scramble, log_cube_state, next_level, log_level_stats),
        );
    }
}

/// Scrambles the cube with instant turns when 'R' is pressed, starting a new session.
fn debug_scramble(
    input: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<CubeConfig>,
    mut cube: ResMut<CubeResource>,
    mut random_gen: ResMut<RandomGen>,
    mut session: ResMut<GameSession>,
) {
    if !input.just_pressed(KeyCode::KeyR) {
        return;
    }

    let turns = cube.scramble(config.debug_scramble_moves, &mut random_gen.random_gen);
    if turns.is_empty() {
        return;
    }
    *session = GameSession {
        start_time: Some(time.elapsed()),
        ..default()
    };
    info!("SCRAMBLED: {} turns", turns.len());
}

/// Logs the facelet grids when 'P' is pressed.
fn log_cube_state(input: Res<ButtonInput<KeyCode>>, cube: Res<CubeResource>) {
    if !input.just_pressed(KeyCode::KeyP) {
        return;
    }

    let state = cube.cube_state();
    match state.to_toml() {
        Ok(snapshot) => info!("CUBE STATE:\n{snapshot}"),
        Err(err) => warn!("Could not format cube state: {err}"),
    }
    info!("SOLVED: {}", state.is_solved());
}

/// Starts the next level when 'N' is pressed, if it is unlocked.
fn next_level(
    input: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    config: Res<CubeConfig>,
    mut levels: ResMut<LevelProgress>,
    mut cube: ResMut<CubeResource>,
    mut random_gen: ResMut<RandomGen>,
    mut session: ResMut<GameSession>,
) {
    if !input.just_pressed(KeyCode::KeyN) {
        return;
    }
    if cube.engine_state() != EngineState::Idle {
        return;
    }

    let now = time.elapsed();
    let next = levels.current_level() + 1;
    match levels.select_level(next, now) {
        Ok(level) => info!("LEVEL {}: {}", level.number, level.name),
        Err(err) => {
            warn!("{err}");
            return;
        }
    }
    cube.scramble(config.debug_scramble_moves, &mut random_gen.random_gen);
    *session = GameSession {
        start_time: Some(now),
        ..default()
    };
}

/// Logs level totals when 'L' is pressed.
fn log_level_stats(input: Res<ButtonInput<KeyCode>>, levels: Res<LevelProgress>) {
    if input.just_pressed(KeyCode::KeyL) {
        info!("LEVELS: {:?}", levels.all_stats());
    }
}
