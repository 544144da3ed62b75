//! Mouse, touch and wheel handling.
//! Raw input is fed to the gesture interpreter; recognised intents are written as messages.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::utils::constants::gesture_constants::WHEEL_LINE_PIXELS;
use crate::utils::gesture::{GestureIntent, GestureInterpreter};

/// Resource holding the gesture state machine
#[derive(Resource, Default, Deref, DerefMut)]
pub struct GestureInput(pub GestureInterpreter);

/// Message carrying one recognised intent (using Message trait for Bevy 0.17)
#[derive(Message, Clone, Copy, Debug)]
pub struct GestureMessage(pub GestureIntent);

/// Plugin for pointer, touch and wheel input handling
pub struct GestureInputPlugin;

impl Plugin for GestureInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GestureInput>()
            .add_message::<GestureMessage>()
            .add_systems(
                Update,
                (
                    update_viewport,
                    track_mouse_gestures,
                    track_touch_gestures,
                    track_wheel_zoom,
                )
                    .chain(),
            );
    }
}

/// Keeps the screen-space regions in line with the window size
pub fn update_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gestures: ResMut<GestureInput>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());
    if gestures.viewport() != viewport {
        gestures.set_viewport(viewport);
    }
}

/// System to track left mouse button drags
pub fn track_mouse_gestures(
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: MessageReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
    mut gestures: ResMut<GestureInput>,
    mut intents: MessageWriter<GestureMessage>,
) {
    let now = time.elapsed();
    let cursor = windows.single().ok().and_then(Window::cursor_position);

    if buttons.just_pressed(MouseButton::Left) {
        if let Some(position) = cursor {
            gestures.pointer_down(position, now);
        }
    }

    for moved in cursor_moved.read() {
        if let Some(intent) = gestures.pointer_move(moved.position) {
            intents.write(GestureMessage(intent));
        }
    }

    if buttons.just_released(MouseButton::Left) {
        // The cursor may have left the window; fall back to the last drag point
        let Some(position) = cursor.or_else(|| gestures.drag_position()) else {
            return;
        };
        if let Some(intent) = gestures.pointer_up(position, now) {
            intents.write(GestureMessage(intent));
        }
    }
}

/// System to track touch contacts, including pinch detection
pub fn track_touch_gestures(
    touches: Res<Touches>,
    time: Res<Time>,
    mut gestures: ResMut<GestureInput>,
    mut intents: MessageWriter<GestureMessage>,
) {
    let now = time.elapsed();

    // Stable contact order so the pinch distance does not depend on map order
    let mut contacts: Vec<(u64, Vec2)> = touches
        .iter()
        .map(|touch| (touch.id(), touch.position()))
        .collect();
    contacts.sort_by_key(|(id, _)| *id);
    let positions: Vec<Vec2> = contacts.into_iter().map(|(_, position)| position).collect();

    let intent = if touches.iter_just_pressed().next().is_some() {
        gestures.touch_start(&positions, now);
        None
    } else if touches.iter_just_released().next().is_some()
        || touches.iter_just_canceled().next().is_some()
    {
        gestures.touch_end(&positions, now)
    } else if touches.iter().any(|touch| touch.delta() != Vec2::ZERO) {
        gestures.touch_move(&positions)
    } else {
        None
    };

    if let Some(intent) = intent {
        intents.write(GestureMessage(intent));
    }
}

/// System to turn wheel scrolling into zoom
pub fn track_wheel_zoom(
    mut wheel: MessageReader<MouseWheel>,
    gestures: Res<GestureInput>,
    mut intents: MessageWriter<GestureMessage>,
) {
    for event in wheel.read() {
        // Scrolling down moves the camera away, like a browser wheel delta
        let delta_y = match event.unit {
            MouseScrollUnit::Line => -event.y * WHEEL_LINE_PIXELS,
            MouseScrollUnit::Pixel => -event.y,
        };
        if let Some(intent) = gestures.wheel(delta_y) {
            intents.write(GestureMessage(intent));
        }
    }
}
