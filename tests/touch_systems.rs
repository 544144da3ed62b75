use bevy::input::touch::{TouchInput, TouchPhase, touch_screen_input_system};
use bevy::prelude::*;

use rubiks_cube_game::utils::gesture::{
    GestureIntent, GestureInterpreter, GestureSettings, GestureState,
};
use rubiks_cube_game::utils::touch_inputs::{GestureInput, GestureMessage, track_touch_gestures};

#[derive(Resource, Default)]
struct Recorded(Vec<GestureIntent>);

fn record_intents(mut intents: MessageReader<GestureMessage>, mut recorded: ResMut<Recorded>) {
    recorded
        .0
        .extend(intents.read().map(|GestureMessage(intent)| *intent));
}

/// Touch tracking on top of Bevy's `Touches` bookkeeping, without a window.
fn touch_app() -> App {
    let mut app = App::new();
    app.add_message::<TouchInput>()
        .add_message::<GestureMessage>()
        .init_resource::<Touches>()
        .init_resource::<Time>()
        .init_resource::<Recorded>()
        .insert_resource(GestureInput(GestureInterpreter::new(
            GestureSettings::default(),
            Vec2::new(1000.0, 800.0),
        )))
        .add_systems(PreUpdate, touch_screen_input_system)
        .add_systems(Update, (track_touch_gestures, record_intents).chain());
    app
}

fn touch(app: &mut App, id: u64, phase: TouchPhase, x: f32, y: f32) {
    app.world_mut().write_message(TouchInput {
        phase,
        position: Vec2::new(x, y),
        window: Entity::PLACEHOLDER,
        force: None,
        id,
    });
}

fn state(app: &App) -> GestureState {
    *app.world().resource::<GestureInput>().state()
}

#[test]
fn pinch_then_release_to_one_contact_then_cancel() {
    let mut app = touch_app();

    // Ids arrive out of order; the pinch distance does not depend on it
    touch(&mut app, 7, TouchPhase::Started, 400.0, 400.0);
    touch(&mut app, 3, TouchPhase::Started, 600.0, 400.0);
    app.update();
    assert_eq!(
        state(&app),
        GestureState::Pinching {
            start_distance: 200.0
        }
    );

    touch(&mut app, 7, TouchPhase::Moved, 370.0, 400.0);
    app.update();
    let recorded = &app.world().resource::<Recorded>().0;
    assert_eq!(recorded.len(), 1);
    let GestureIntent::Zoom { delta } = recorded[0] else {
        panic!("expected a zoom, got {:?}", recorded[0]);
    };
    assert!((delta - 0.3).abs() < 1e-4);

    // Lifting one finger hands the gesture to the one still down
    touch(&mut app, 3, TouchPhase::Ended, 600.0, 400.0);
    app.update();
    let GestureState::Dragging(session) = state(&app) else {
        panic!("expected a drag, got {:?}", state(&app));
    };
    assert_eq!(session.start, Vec2::new(370.0, 400.0));

    touch(&mut app, 7, TouchPhase::Canceled, 370.0, 400.0);
    app.update();
    assert_eq!(state(&app), GestureState::Idle);
    assert_eq!(app.world().resource::<Recorded>().0.len(), 1);
}

#[test]
fn single_touch_drag_on_the_cube_turns_a_slice() {
    let mut app = touch_app();

    touch(&mut app, 1, TouchPhase::Started, 500.0, 250.0);
    app.update();
    touch(&mut app, 1, TouchPhase::Moved, 540.0, 252.0);
    app.update();
    touch(&mut app, 1, TouchPhase::Ended, 540.0, 252.0);
    app.update();

    let recorded = &app.world().resource::<Recorded>().0;
    assert_eq!(
        recorded.first(),
        Some(&GestureIntent::RotateSlice {
            slice: rubiks_cube_game::utils::objects::Slice::Top,
            direction: rubiks_cube_game::utils::objects::Direction::Clockwise,
        })
    );
    assert_eq!(state(&app), GestureState::Idle);
}
