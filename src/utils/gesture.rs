//! Turns raw pointer and touch streams into cube intents.
//!
//! Coordinates are window pixels with the origin at the top left and y
//! pointing down. The interpreter knows nothing about the 3D scene: "on the
//! cube" is a square region around the screen center.

use bevy::prelude::*;
use std::time::Duration;

use crate::utils::config::CubeConfig;
use crate::utils::objects::{Direction, Face, Slice};

/// What a recognised gesture asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    /// Rotate the whole scene by a pixel delta.
    Orbit { dx: f32, dy: f32 },
    RotateFace { face: Face, direction: Direction },
    RotateSlice { slice: Slice, direction: Direction },
    Zoom { delta: f32 },
}

/// Thresholds used for classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    pub hit_region_half_extent: f32,
    pub slice_band_threshold: f32,
    pub swipe_min_distance: f32,
    pub swipe_max_duration: Duration,
    pub zoom_scale: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self::from(&CubeConfig::default())
    }
}

impl From<&CubeConfig> for GestureSettings {
    fn from(config: &CubeConfig) -> Self {
        Self {
            hit_region_half_extent: config.hit_region_half_extent,
            slice_band_threshold: config.slice_band_threshold,
            swipe_min_distance: config.swipe_min_distance,
            swipe_max_duration: Duration::from_millis(config.swipe_max_duration_ms),
            zoom_scale: config.zoom_scale,
        }
    }
}

/// One press-to-release interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start: Vec2,
    pub last: Vec2,
    pub started_at: Duration,
    /// Set once the pointer passes over the cube; later moves turn slices.
    pub is_rotating: bool,
    /// Set once a move has orbited the scene; the release is then never a swipe.
    pub orbited: bool,
}

impl DragSession {
    fn new(start: Vec2, now: Duration) -> Self {
        Self {
            start,
            last: start,
            started_at: now,
            is_rotating: false,
            orbited: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
    /// Two contacts; drag classification is suspended.
    Pinching { start_distance: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    settings: GestureSettings,
    viewport: Vec2,
    state: GestureState,
}

impl GestureInterpreter {
    pub fn new(settings: GestureSettings, viewport: Vec2) -> Self {
        Self {
            settings,
            viewport,
            state: GestureState::Idle,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Last point of the drag in progress.
    pub fn drag_position(&self) -> Option<Vec2> {
        match self.state {
            GestureState::Dragging(session) => Some(session.last),
            _ => None,
        }
    }

    fn center(&self) -> Vec2 {
        self.viewport / 2.0
    }

    /// Whether `point` lies in the square region treated as the cube.
    pub fn is_point_on_cube(&self, point: Vec2) -> bool {
        let distance = (point - self.center()).abs();
        let half = self.settings.hit_region_half_extent;
        distance.x < half && distance.y < half
    }

    /// Horizontal drags turn the band the drag started in.
    pub fn horizontal_slice(&self, y: f32) -> Slice {
        let relative = y - self.center().y;
        let band = self.settings.slice_band_threshold;
        if relative < -band {
            Slice::Top
        } else if relative > band {
            Slice::Bottom
        } else {
            Slice::Middle
        }
    }

    /// Vertical drags turn the column the drag started in.
    pub fn vertical_slice(&self, x: f32) -> Slice {
        let relative = x - self.center().x;
        let band = self.settings.slice_band_threshold;
        if relative < -band {
            Slice::Left
        } else if relative > band {
            Slice::Right
        } else {
            Slice::Middle
        }
    }

    pub fn pointer_down(&mut self, position: Vec2, now: Duration) {
        self.start_drag(position, now);
    }

    pub fn pointer_move(&mut self, position: Vec2) -> Option<GestureIntent> {
        self.drag(position)
    }

    pub fn pointer_up(&mut self, position: Vec2, now: Duration) -> Option<GestureIntent> {
        self.end_drag(position, now)
    }

    /// Wheel deltas zoom directly.
    pub fn wheel(&self, delta_y: f32) -> Option<GestureIntent> {
        Some(GestureIntent::Zoom {
            delta: delta_y * self.settings.zoom_scale,
        })
    }

    /// `contacts` holds every contact down after the new one arrived.
    pub fn touch_start(&mut self, contacts: &[Vec2], now: Duration) {
        match contacts {
            [single] => self.start_drag(*single, now),
            [first, second] => self.start_pinch(*first, *second),
            _ => {}
        }
    }

    pub fn touch_move(&mut self, contacts: &[Vec2]) -> Option<GestureIntent> {
        match contacts {
            [single] => self.drag(*single),
            [first, second] => self.pinch(*first, *second),
            _ => None,
        }
    }

    /// `remaining` holds the contacts still down after the release.
    pub fn touch_end(&mut self, remaining: &[Vec2], now: Duration) -> Option<GestureIntent> {
        match remaining {
            [] => match self.state {
                GestureState::Dragging(session) => self.end_drag(session.last, now),
                _ => {
                    self.state = GestureState::Idle;
                    None
                }
            },
            [single] => {
                self.start_drag(*single, now);
                None
            }
            _ => None,
        }
    }

    fn start_drag(&mut self, position: Vec2, now: Duration) {
        self.state = GestureState::Dragging(DragSession::new(position, now));
    }

    fn start_pinch(&mut self, first: Vec2, second: Vec2) {
        self.state = GestureState::Pinching {
            start_distance: first.distance(second),
        };
    }

    fn drag(&mut self, position: Vec2) -> Option<GestureIntent> {
        let GestureState::Dragging(mut session) = self.state else {
            return None;
        };
        let delta = position - session.last;

        if !session.is_rotating && self.is_point_on_cube(position) {
            session.is_rotating = true;
        }

        let intent = if session.is_rotating {
            self.slice_intent(session.start, delta)
        } else {
            session.orbited = true;
            GestureIntent::Orbit {
                dx: delta.x,
                dy: delta.y,
            }
        };

        session.last = position;
        self.state = GestureState::Dragging(session);
        Some(intent)
    }

    fn slice_intent(&self, start: Vec2, delta: Vec2) -> GestureIntent {
        if delta.x.abs() > delta.y.abs() {
            GestureIntent::RotateSlice {
                slice: self.horizontal_slice(start.y),
                direction: Direction::from_delta(delta.x),
            }
        } else {
            GestureIntent::RotateSlice {
                slice: self.vertical_slice(start.x),
                direction: Direction::from_delta(delta.y),
            }
        }
    }

    fn end_drag(&mut self, position: Vec2, now: Duration) -> Option<GestureIntent> {
        let GestureState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        if session.orbited {
            return None;
        }

        let delta = position - session.start;
        let elapsed = now.saturating_sub(session.started_at);
        let is_swipe = delta.length() > self.settings.swipe_min_distance
            && elapsed < self.settings.swipe_max_duration;
        if !is_swipe {
            return None;
        }

        let intent = if delta.x.abs() > delta.y.abs() {
            let face = if delta.x > 0.0 { Face::Right } else { Face::Left };
            GestureIntent::RotateFace {
                face,
                direction: Direction::from_delta(delta.x),
            }
        } else {
            let face = if delta.y > 0.0 { Face::Bottom } else { Face::Top };
            GestureIntent::RotateFace {
                face,
                direction: Direction::from_delta(delta.y),
            }
        };
        Some(intent)
    }

    fn pinch(&mut self, first: Vec2, second: Vec2) -> Option<GestureIntent> {
        let GestureState::Pinching { start_distance } = self.state else {
            self.start_pinch(first, second);
            return None;
        };
        let delta = first.distance(second) - start_distance;
        Some(GestureIntent::Zoom {
            delta: delta * self.settings.zoom_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(GestureSettings::default(), VIEWPORT)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn hit_region_is_a_square_around_the_center() {
        let gestures = interpreter();
        assert!(gestures.is_point_on_cube(Vec2::new(500.0, 400.0)));
        assert!(gestures.is_point_on_cube(Vec2::new(699.0, 201.0)));
        assert!(!gestures.is_point_on_cube(Vec2::new(700.0, 400.0)));
        assert!(!gestures.is_point_on_cube(Vec2::new(500.0, 650.0)));
    }

    #[test]
    fn slice_bands_split_at_the_threshold() {
        let gestures = interpreter();
        assert_eq!(gestures.horizontal_slice(250.0), Slice::Top);
        assert_eq!(gestures.horizontal_slice(300.0), Slice::Middle);
        assert_eq!(gestures.horizontal_slice(501.0), Slice::Bottom);
        assert_eq!(gestures.vertical_slice(399.0), Slice::Left);
        assert_eq!(gestures.vertical_slice(550.0), Slice::Middle);
        assert_eq!(gestures.vertical_slice(601.0), Slice::Right);
    }

    #[test]
    fn drag_off_the_cube_orbits_without_rotating() {
        let mut gestures = interpreter();
        gestures.pointer_down(Vec2::new(50.0, 50.0), ms(0));
        let intent = gestures.pointer_move(Vec2::new(110.0, 50.0));
        assert_eq!(intent, Some(GestureIntent::Orbit { dx: 60.0, dy: 0.0 }));
        assert_eq!(gestures.pointer_up(Vec2::new(110.0, 50.0), ms(200)), None);
        assert_eq!(gestures.state(), &GestureState::Idle);
    }

    #[test]
    fn entering_the_cube_switches_to_slice_turns_for_the_rest_of_the_drag() {
        let mut gestures = interpreter();
        gestures.pointer_down(Vec2::new(250.0, 250.0), ms(0));
        assert_eq!(
            gestures.pointer_move(Vec2::new(310.0, 250.0)),
            Some(GestureIntent::RotateSlice {
                slice: Slice::Top,
                direction: Direction::Clockwise
            })
        );
        // Leaving the region again keeps turning slices, picked from the start point.
        assert_eq!(
            gestures.pointer_move(Vec2::new(310.0, 100.0)),
            Some(GestureIntent::RotateSlice {
                slice: Slice::Left,
                direction: Direction::CounterClockwise
            })
        );
    }

    #[test]
    fn quick_vertical_swipe_turns_the_bottom_face_on_release() {
        let mut gestures = interpreter();
        gestures.pointer_down(Vec2::new(900.0, 100.0), ms(0));
        let intent = gestures.pointer_up(Vec2::new(900.0, 180.0), ms(150));
        assert_eq!(
            intent,
            Some(GestureIntent::RotateFace {
                face: Face::Bottom,
                direction: Direction::Clockwise
            })
        );
    }

    #[test]
    fn flick_that_orbited_is_not_a_swipe() {
        let mut gestures = interpreter();
        gestures.pointer_down(Vec2::new(500.0, 700.0), ms(0));
        assert_eq!(
            gestures.pointer_move(Vec2::new(500.0, 740.0)),
            Some(GestureIntent::Orbit { dx: 0.0, dy: 40.0 })
        );
        // Fast and long enough for a swipe, but the drag already rotated the scene
        assert_eq!(gestures.pointer_up(Vec2::new(500.0, 780.0), ms(150)), None);
        assert_eq!(*gestures.state(), GestureState::Idle);
    }

    #[test]
    fn swipes_pick_faces_from_the_dominant_axis() {
        let cases = [
            (Vec2::new(-70.0, 10.0), Face::Left, Direction::CounterClockwise),
            (Vec2::new(70.0, -10.0), Face::Right, Direction::Clockwise),
            (Vec2::new(5.0, -60.0), Face::Top, Direction::CounterClockwise),
        ];
        for (delta, face, direction) in cases {
            let mut gestures = interpreter();
            let start = Vec2::new(500.0, 400.0);
            gestures.pointer_down(start, ms(0));
            assert_eq!(
                gestures.pointer_up(start + delta, ms(100)),
                Some(GestureIntent::RotateFace { face, direction })
            );
        }
    }

    #[test]
    fn slow_or_short_releases_are_not_swipes() {
        let mut gestures = interpreter();
        gestures.pointer_down(Vec2::new(0.0, 0.0), ms(0));
        assert_eq!(gestures.pointer_up(Vec2::new(0.0, 80.0), ms(300)), None);

        gestures.pointer_down(Vec2::new(0.0, 0.0), ms(0));
        assert_eq!(gestures.pointer_up(Vec2::new(30.0, 40.0), ms(10)), None);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut gestures = interpreter();
        assert_eq!(gestures.pointer_up(Vec2::new(0.0, 200.0), ms(10)), None);
        assert_eq!(gestures.pointer_move(Vec2::new(0.0, 300.0)), None);
    }

    #[test]
    fn pinch_zooms_by_distance_change_since_start() {
        let mut gestures = interpreter();
        gestures.touch_start(&[Vec2::new(100.0, 100.0)], ms(0));
        gestures.touch_start(&[Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)], ms(10));
        let intent = gestures.touch_move(&[Vec2::new(85.0, 100.0), Vec2::new(215.0, 100.0)]);
        let Some(GestureIntent::Zoom { delta }) = intent else {
            panic!("expected a zoom, got {intent:?}");
        };
        assert!((delta - 0.30).abs() < 1e-4);
    }

    #[test]
    fn lifting_one_finger_of_a_pinch_restarts_a_drag() {
        let mut gestures = interpreter();
        gestures.touch_start(&[Vec2::new(10.0, 10.0), Vec2::new(60.0, 10.0)], ms(0));
        gestures.touch_end(&[Vec2::new(60.0, 10.0)], ms(50));
        let GestureState::Dragging(session) = *gestures.state() else {
            panic!("expected a drag");
        };
        assert_eq!(session.start, Vec2::new(60.0, 10.0));
        assert_eq!(session.started_at, ms(50));
    }

    #[test]
    fn lifting_both_fingers_of_a_pinch_is_not_a_swipe() {
        let mut gestures = interpreter();
        gestures.touch_start(&[Vec2::new(10.0, 10.0), Vec2::new(60.0, 10.0)], ms(0));
        gestures.touch_move(&[Vec2::new(0.0, 10.0), Vec2::new(200.0, 10.0)]);
        assert_eq!(gestures.touch_end(&[], ms(20)), None);
        assert_eq!(gestures.state(), &GestureState::Idle);
    }

    #[test]
    fn single_touch_swipe_uses_last_contact_point() {
        let mut gestures = interpreter();
        gestures.touch_start(&[Vec2::new(500.0, 400.0)], ms(0));
        gestures.touch_move(&[Vec2::new(520.0, 400.0)]);
        gestures.touch_move(&[Vec2::new(580.0, 400.0)]);
        // The drag was over the cube, so the release may still be a swipe.
        assert_eq!(
            gestures.touch_end(&[], ms(120)),
            Some(GestureIntent::RotateFace {
                face: Face::Right,
                direction: Direction::Clockwise
            })
        );
    }

    #[test]
    fn wheel_is_scaled() {
        let gestures = interpreter();
        let Some(GestureIntent::Zoom { delta }) = gestures.wheel(-120.0) else {
            panic!("wheel should always zoom");
        };
        assert!((delta + 1.2).abs() < 1e-5);
    }
}
