// This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_INITIAL_DISTANCE, ORBIT_INITIAL_PITCH, ORBIT_INITIAL_YAW,
};
use crate::utils::constants::game_constants::SEED;

/// One of the six sides of the cube. Also used as the facelet label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
    ];

    /// Position of the face in [`Face::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Left => "left",
            Face::Right => "right",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the known face or slice labels.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown label `{0}`")]
pub struct UnknownLabel(pub String);

impl FromStr for Face {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::ALL
            .into_iter()
            .find(|face| face.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_owned()))
    }
}

/// A layer of pieces turned by a drag over the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slice {
    Top,
    Middle,
    Bottom,
    Left,
    Right,
}

impl Slice {
    pub const ALL: [Slice; 5] = [
        Slice::Top,
        Slice::Middle,
        Slice::Bottom,
        Slice::Left,
        Slice::Right,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Slice::Top => "top",
            Slice::Middle => "middle",
            Slice::Bottom => "bottom",
            Slice::Left => "left",
            Slice::Right => "right",
        }
    }

    /// Face group whose pieces this slice turns.
    ///
    /// There is no real slice decomposition: the outer slices reuse the
    /// matching face group and the middle slice reuses the front group.
    pub fn group(self) -> Face {
        match self {
            Slice::Top => Face::Top,
            Slice::Bottom => Face::Bottom,
            Slice::Left => Face::Left,
            Slice::Right => Face::Right,
            Slice::Middle => Face::Front,
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Slice {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slice::ALL
            .into_iter()
            .find(|slice| slice.label() == s)
            .ok_or_else(|| UnknownLabel(s.to_owned()))
    }
}

/// Turn direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Accepts only `1` and `-1`.
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Direction::Clockwise),
            -1 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    /// Positive deltas turn clockwise, everything else counter-clockwise.
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A random number generator
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGen {
    fn default() -> Self {
        Self::from_seed(SEED)
    }
}

/// Scene orbit applied to the cube root group.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SceneOrbit {
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for SceneOrbit {
    fn default() -> Self {
        Self {
            pitch: ORBIT_INITIAL_PITCH,
            yaw: ORBIT_INITIAL_YAW,
        }
    }
}

/// Distance of the camera from the cube center.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraZoom(pub f32);

impl Default for CameraZoom {
    fn default() -> Self {
        Self(CAMERA_3D_INITIAL_DISTANCE)
    }
}

/// Moves and timing of the level being played.
#[derive(Resource, Clone, Debug, Default)]
pub struct GameSession {
    pub move_count: u32,
    pub start_time: Option<Duration>,
    pub solved_time: Option<Duration>,
}

impl GameSession {
    pub fn is_solved(&self) -> bool {
        self.solved_time.is_some()
    }

    pub fn elapsed(&self) -> Option<Duration> {
        Some(self.solved_time?.saturating_sub(self.start_time?))
    }
}

/// Written once per finished quarter turn.
#[derive(Message, Clone, Debug)]
pub struct RotationCompleted {
    pub request: crate::utils::rotation_engine::RotationRequest,
}

/// Written when the cube reaches the solved state during a session.
#[derive(Message, Clone, Debug)]
pub struct PuzzleSolved {
    pub level: u32,
    pub moves: u32,
    pub elapsed: Duration,
}

/// Marks the group holding every cube piece. Scene orbit rotates this entity.
#[derive(Component)]
pub struct CubeRoot;

/// Marks a mesh entity as a movable cube piece. The piece name lives in its [`Name`].
#[derive(Component)]
pub struct CubePiece;

/// Marks the camera controlled by zoom gestures.
#[derive(Component)]
pub struct CubeCamera;

/// The cube being played, keyed by piece entity.
#[derive(Resource, Default, Deref, DerefMut)]
pub struct CubeResource(pub crate::utils::rubiks_cube::RubiksCube<Entity>);
