//! The cube as seen by the rest of the game: pieces, facelets and the turn engine.

use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use crate::utils::cube_state::CubeState;
use crate::utils::objects::{Direction, Face, Slice};
use crate::utils::piece_registry::{PieceRegistry, RegistryError};
use crate::utils::rotation_engine::{EngineState, RotationEngine, RotationRequest};

#[derive(Debug, Clone)]
pub struct RubiksCube<H> {
    registry: PieceRegistry<H>,
    state: CubeState,
    engine: RotationEngine,
}

impl<H> RubiksCube<H> {
    /// An empty, solved cube whose turns last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            registry: PieceRegistry::new(),
            state: CubeState::solved(),
            engine: RotationEngine::new(duration),
        }
    }

    pub fn register_piece(
        &mut self,
        name: impl Into<String>,
        handle: H,
        transform: Transform,
    ) -> Result<(), RegistryError> {
        self.registry.register(name, handle, transform)
    }

    pub fn registry(&self) -> &PieceRegistry<H> {
        &self.registry
    }

    pub fn engine_state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn active_rotation(&self) -> Option<&RotationRequest> {
        self.engine.active()
    }

    /// Starts an animated face turn. Returns false when busy or when the face has no pieces.
    pub fn rotate_face(&mut self, face: Face, direction: Direction, now: Duration) -> bool {
        self.engine
            .start(RotationRequest::face(face, direction), now, &mut self.registry)
    }

    /// Starts an animated slice turn. Facelets are not updated by slice turns.
    pub fn rotate_slice(&mut self, slice: Slice, direction: Direction, now: Duration) -> bool {
        self.engine
            .start(RotationRequest::slice(slice, direction), now, &mut self.registry)
    }

    /// Label-based face turn; unknown labels and directions other than ±1 are ignored.
    pub fn rotate_face_by_name(&mut self, face: &str, direction: i32, now: Duration) -> bool {
        match (face.parse::<Face>(), Direction::from_sign(direction)) {
            (Ok(face), Some(direction)) => self.rotate_face(face, direction, now),
            _ => false,
        }
    }

    /// Label-based slice turn; unknown labels and directions other than ±1 are ignored.
    pub fn rotate_slice_by_name(&mut self, slice: &str, direction: i32, now: Duration) -> bool {
        match (slice.parse::<Slice>(), Direction::from_sign(direction)) {
            (Ok(slice), Some(direction)) => self.rotate_slice(slice, direction, now),
            _ => false,
        }
    }

    /// Per-frame step. Returns the turn that completed on this frame, if any.
    pub fn update(&mut self, now: Duration) -> Option<RotationRequest> {
        self.engine.update(now, &mut self.registry, &mut self.state)
    }

    pub fn turn_immediately(&mut self, request: RotationRequest) -> bool {
        self.engine
            .turn_immediately(request, &mut self.registry, &mut self.state)
    }

    /// Applies `moves` instant face turns, each with a face and direction drawn
    /// uniformly from `rng`. Nothing happens while a turn is animating.
    /// Returns the turns that were drawn.
    pub fn scramble(&mut self, moves: u32, rng: &mut impl Rng) -> Vec<RotationRequest> {
        if !self.engine.is_idle() {
            log::debug!("scramble ignored, a turn is animating");
            return Vec::new();
        }

        let turns: Vec<RotationRequest> = (0..moves)
            .map(|_| {
                let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
                let direction = if rng.random_bool(0.5) {
                    Direction::Clockwise
                } else {
                    Direction::CounterClockwise
                };
                RotationRequest::face(face, direction)
            })
            .collect();
        for turn in &turns {
            self.turn_immediately(*turn);
        }
        log::debug!("scrambled with {} turns", turns.len());
        turns
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Snapshot of the facelet grids.
    pub fn cube_state(&self) -> CubeState {
        self.state.clone()
    }

    /// Transform of a piece in the cube frame, including any turn in progress.
    pub fn piece_transform(&self, name: &str) -> Option<Transform> {
        let piece = self.registry.piece(name)?;
        Some(piece.root_transform(self.engine.pivot_transform()))
    }

    /// Every piece handle with its current transform in the cube frame.
    pub fn piece_transforms(&self) -> impl Iterator<Item = (&H, Transform)> {
        let pivot = self.engine.pivot_transform();
        self.registry
            .pieces()
            .map(move |piece| (&piece.handle, piece.root_transform(pivot)))
    }
}

impl<H> Default for RubiksCube<H> {
    fn default() -> Self {
        Self {
            registry: PieceRegistry::new(),
            state: CubeState::solved(),
            engine: RotationEngine::default(),
        }
    }
}
