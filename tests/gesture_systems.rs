use std::time::Duration;

use bevy::prelude::*;

use rubiks_cube_game::utils::config::CubeConfig;
use rubiks_cube_game::utils::game_functions::apply_gesture_intents;
use rubiks_cube_game::utils::gesture::{GestureIntent, GestureInterpreter, GestureSettings};
use rubiks_cube_game::utils::objects::{
    CameraZoom, CubeResource, Direction, Face, GameSession, SceneOrbit, Slice,
};
use rubiks_cube_game::utils::rotation_engine::EngineState;
use rubiks_cube_game::utils::touch_inputs::GestureMessage;

/// App with just the intent router and the resources it touches.
fn intent_app() -> App {
    let mut app = App::new();
    app.add_message::<GestureMessage>()
        .init_resource::<Time>()
        .init_resource::<CubeConfig>()
        .init_resource::<CubeResource>()
        .init_resource::<SceneOrbit>()
        .init_resource::<CameraZoom>()
        .init_resource::<GameSession>()
        .add_systems(Update, apply_gesture_intents);

    let top_piece = app.world_mut().spawn_empty().id();
    let front_piece = app.world_mut().spawn_empty().id();
    let mut cube = app.world_mut().resource_mut::<CubeResource>();
    cube.register_piece("a1", top_piece, Transform::from_xyz(-1.0, 1.0, -1.0))
        .unwrap();
    cube.register_piece("b1", front_piece, Transform::from_xyz(-1.0, 0.0, -1.0))
        .unwrap();
    app
}

fn send(app: &mut App, intent: GestureIntent) {
    app.world_mut().write_message(GestureMessage(intent));
}

#[test]
fn only_accepted_turns_count_as_moves() {
    let mut app = intent_app();
    send(
        &mut app,
        GestureIntent::RotateFace {
            face: Face::Top,
            direction: Direction::Clockwise,
        },
    );
    send(
        &mut app,
        GestureIntent::RotateSlice {
            slice: Slice::Middle,
            direction: Direction::Clockwise,
        },
    );
    app.update();

    let world = app.world();
    assert_eq!(world.resource::<GameSession>().move_count, 1);
    assert_eq!(
        world.resource::<CubeResource>().engine_state(),
        EngineState::Animating
    );
}

#[test]
fn orbit_and_zoom_update_the_view() {
    let mut app = intent_app();
    let before = *app.world().resource::<SceneOrbit>();
    send(&mut app, GestureIntent::Orbit { dx: 10.0, dy: 5.0 });
    send(&mut app, GestureIntent::Zoom { delta: 0.3 });
    send(&mut app, GestureIntent::Zoom { delta: 100.0 });
    app.update();

    let world = app.world();
    let orbit = world.resource::<SceneOrbit>();
    assert!((orbit.yaw - before.yaw - 0.1).abs() < 1e-5);
    assert!((orbit.pitch - before.pitch - 0.05).abs() < 1e-5);
    assert!((world.resource::<CameraZoom>().0 - 8.3).abs() < 1e-5);
    assert_eq!(world.resource::<GameSession>().move_count, 0);
}

#[test]
fn quick_swipe_turns_the_cube() {
    let mut app = intent_app();
    let mut gestures =
        GestureInterpreter::new(GestureSettings::default(), Vec2::new(1000.0, 800.0));

    // Upward swipe on the cube
    gestures.pointer_down(Vec2::new(500.0, 450.0), Duration::ZERO);
    let intent = gestures.pointer_up(Vec2::new(500.0, 380.0), Duration::from_millis(120));
    assert_eq!(
        intent,
        Some(GestureIntent::RotateFace {
            face: Face::Top,
            direction: Direction::CounterClockwise,
        })
    );

    send(&mut app, intent.unwrap());
    app.update();
    assert_eq!(app.world().resource::<GameSession>().move_count, 1);
}

#[test]
fn config_file_overrides_thresholds() {
    let config = CubeConfig::from_toml_str(
        r#"
        swipe_min_distance = 10.0
        animation_duration_ms = 150
        "#,
    )
    .unwrap();
    let settings = GestureSettings::from(&config);
    assert_eq!(settings.swipe_min_distance, 10.0);
    assert_eq!(settings.swipe_max_duration, Duration::from_millis(300));
    assert_eq!(config.animation_duration_ms, 150);
    assert_eq!(config.max_zoom, CubeConfig::default().max_zoom);
}
