//! Core game logic: feeding intents to the cube and keeping the scene in step with it.
use bevy::prelude::*;

use crate::utils::config::CubeConfig;
use crate::utils::gesture::GestureIntent;
use crate::utils::levels::LevelProgress;
use crate::utils::objects::{
    CameraZoom, CubePiece, CubeResource, GameSession, PuzzleSolved, RandomGen, RotationCompleted,
    SceneOrbit,
};
use crate::utils::rotation_engine::EngineState;
use crate::utils::touch_inputs::GestureMessage;

/// Registers newly spawned pieces with the cube. The first batch also starts the session
/// with the configured scramble.
pub fn register_cube_pieces(
    pieces: Query<(Entity, &Name, &Transform), Added<CubePiece>>,
    time: Res<Time>,
    config: Res<CubeConfig>,
    mut cube: ResMut<CubeResource>,
    mut random_gen: ResMut<RandomGen>,
    mut session: ResMut<GameSession>,
) {
    if pieces.is_empty() {
        return;
    }

    for (entity, name, transform) in &pieces {
        if let Err(err) = cube.register_piece(name.as_str(), entity, *transform) {
            warn!("Skipping piece: {err}");
        }
    }
    info!("Registered {} cube pieces", cube.registry().len());

    if session.start_time.is_none() {
        let turns = cube.scramble(config.initial_scramble_moves, &mut random_gen.random_gen);
        debug!("Initial scramble: {turns:?}");
        session.start_time = Some(time.elapsed());
    }
}

/// Routes recognised gestures to the cube, the scene orbit and the camera zoom.
pub fn apply_gesture_intents(
    mut intents: MessageReader<GestureMessage>,
    time: Res<Time>,
    config: Res<CubeConfig>,
    mut cube: ResMut<CubeResource>,
    mut orbit: ResMut<SceneOrbit>,
    mut zoom: ResMut<CameraZoom>,
    mut session: ResMut<GameSession>,
) {
    let now = time.elapsed();
    for GestureMessage(intent) in intents.read() {
        match *intent {
            GestureIntent::Orbit { dx, dy } => {
                orbit.orbit(dx, dy, config.orbit_sensitivity, config.orbit_pitch_limit);
            }
            GestureIntent::RotateFace { face, direction } => {
                if cube.rotate_face(face, direction, now) {
                    session.move_count += 1;
                    debug!("Turning {face} {direction:?}");
                }
            }
            GestureIntent::RotateSlice { slice, direction } => {
                if cube.rotate_slice(slice, direction, now) {
                    session.move_count += 1;
                    debug!("Turning {slice} slice {direction:?}");
                }
            }
            GestureIntent::Zoom { delta } => {
                zoom.zoom(delta, config.min_zoom, config.max_zoom);
            }
        }
    }
}

/// Steps the turn in progress and reports the turn that finished this frame.
pub fn advance_rotation(
    time: Res<Time>,
    mut cube: ResMut<CubeResource>,
    mut completed: MessageWriter<RotationCompleted>,
) {
    if cube.engine_state() == EngineState::Idle {
        return;
    }
    if let Some(request) = cube.update(time.elapsed()) {
        completed.write(RotationCompleted { request });
    }
}

/// Copies the cube-frame transform of every registered piece onto its entity.
pub fn sync_piece_transforms(
    cube: Res<CubeResource>,
    mut pieces: Query<&mut Transform, With<CubePiece>>,
) {
    if !cube.is_changed() {
        return;
    }
    for (entity, transform) in cube.piece_transforms() {
        if let Ok(mut piece_transform) = pieces.get_mut(*entity) {
            // Avoid triggering change detection on untouched pieces
            piece_transform.set_if_neq(transform);
        }
    }
}

/// Ends the session the first time a finished turn leaves the cube solved.
pub fn check_solved(
    mut completed: MessageReader<RotationCompleted>,
    time: Res<Time>,
    cube: Res<CubeResource>,
    levels: Res<LevelProgress>,
    mut session: ResMut<GameSession>,
    mut solved: MessageWriter<PuzzleSolved>,
) {
    if completed.read().count() == 0 || session.is_solved() || !cube.is_solved() {
        return;
    }

    session.solved_time = Some(time.elapsed());
    let elapsed = session.elapsed().unwrap_or_default();
    info!(
        "Cube solved in {} moves ({:.1}s)",
        session.move_count,
        elapsed.as_secs_f32()
    );
    solved.write(PuzzleSolved {
        level: levels.current_level(),
        moves: session.move_count,
        elapsed,
    });
}

/// Records each solved level and unlocks the one after it.
pub fn record_level_completion(
    mut solved: MessageReader<PuzzleSolved>,
    time: Res<Time>,
    mut levels: ResMut<LevelProgress>,
) {
    for PuzzleSolved {
        level,
        moves,
        elapsed,
    } in solved.read()
    {
        if let Some(unlocked) = levels.complete_level(*level, *moves, *elapsed, time.elapsed()) {
            info!("Level {unlocked} unlocked!");
        }
        if let Some(stats) = levels.level_stats(*level) {
            debug!("Level {level} stats: {stats:?}");
        }
    }
}
