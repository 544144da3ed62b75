//! Animated quarter turns of face and slice groups.
//!
//! A turn moves its pieces from the root group into a pivot group at the
//! cube center, rotates the pivot over several frames, then hands the
//! pieces back to the root group with their new transforms baked in. Only
//! one turn can be in flight; requests arriving meanwhile are dropped.

use bevy::prelude::*;
use std::time::Duration;

use crate::utils::constants::cube_constants::{QUARTER_TURN_RAD, TRANSLATION_SNAP};
use crate::utils::cube_state::CubeState;
use crate::utils::interpolate::{EASE_IN_OUT_CUBIC, InterpolateFn};
use crate::utils::objects::{Direction, Face, Slice};
use crate::utils::piece_registry::{PieceParent, PieceRegistry};

const TURN_INTERPOLATION_FN: InterpolateFn = EASE_IN_OUT_CUBIC;

/// What a turn acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationTarget {
    Face(Face),
    Slice(Slice),
}

impl RotationTarget {
    /// Signed rotation axis. The second member of each axis pair turns the other way.
    pub fn axis(self) -> Vec3 {
        match self {
            RotationTarget::Face(Face::Top) | RotationTarget::Slice(Slice::Top) => Vec3::X,
            RotationTarget::Face(Face::Bottom) | RotationTarget::Slice(Slice::Bottom) => Vec3::NEG_X,
            RotationTarget::Face(Face::Front) | RotationTarget::Slice(Slice::Middle) => Vec3::Z,
            RotationTarget::Face(Face::Back) => Vec3::NEG_Z,
            RotationTarget::Face(Face::Left) | RotationTarget::Slice(Slice::Left) => Vec3::Y,
            RotationTarget::Face(Face::Right) | RotationTarget::Slice(Slice::Right) => Vec3::NEG_Y,
        }
    }

    /// Face group providing the pieces.
    pub fn group(self) -> Face {
        match self {
            RotationTarget::Face(face) => face,
            RotationTarget::Slice(slice) => slice.group(),
        }
    }
}

/// One quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationRequest {
    pub target: RotationTarget,
    pub direction: Direction,
}

impl RotationRequest {
    pub fn face(face: Face, direction: Direction) -> Self {
        Self {
            target: RotationTarget::Face(face),
            direction,
        }
    }

    pub fn slice(slice: Slice, direction: Direction) -> Self {
        Self {
            target: RotationTarget::Slice(slice),
            direction,
        }
    }

    /// Pivot rotation once the turn is complete.
    pub fn final_rotation(&self) -> Quat {
        self.rotation_at(1.0)
    }

    /// Pivot rotation after `eased` of the turn, `eased` in 0..=1.
    pub fn rotation_at(&self, eased: f32) -> Quat {
        Quat::from_axis_angle(self.target.axis(), rotation_angle(eased, self.direction))
    }
}

/// Linear progress of a turn, clamped to 0..=1. A zero duration is always complete.
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Angle of the pivot for an eased progress value.
pub fn rotation_angle(eased: f32, direction: Direction) -> f32 {
    QUARTER_TURN_RAD * direction.sign() * eased
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Animating,
}

#[derive(Debug, Clone)]
struct ActiveRotation {
    request: RotationRequest,
    started_at: Duration,
    pieces: Vec<String>,
}

/// Runs at most one turn at a time, sampled once per frame.
#[derive(Debug, Clone)]
pub struct RotationEngine {
    duration: Duration,
    pivot: Transform,
    active: Option<ActiveRotation>,
}

impl RotationEngine {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pivot: Transform::IDENTITY,
            active: None,
        }
    }

    pub fn state(&self) -> EngineState {
        match self.active {
            Some(_) => EngineState::Animating,
            None => EngineState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// The turn in flight, if any.
    pub fn active(&self) -> Option<&RotationRequest> {
        self.active.as_ref().map(|active| &active.request)
    }

    /// Current pivot group transform, in the root group frame.
    pub fn pivot_transform(&self) -> &Transform {
        &self.pivot
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts an animated turn at time `now`. Returns whether it was accepted:
    /// busy engines and empty groups leave everything untouched.
    pub fn start<H>(
        &mut self,
        request: RotationRequest,
        now: Duration,
        registry: &mut PieceRegistry<H>,
    ) -> bool {
        if self.active.is_some() {
            log::debug!("turn {request:?} dropped, another turn is animating");
            return false;
        }
        let Some(pieces) = self.attach_to_pivot(request, registry) else {
            return false;
        };

        log::debug!("turn {request:?} started with {} pieces", pieces.len());
        self.active = Some(ActiveRotation {
            request,
            started_at: now,
            pieces,
        });
        true
    }

    /// Samples the turn in flight at time `now`. Returns the request once, on the
    /// frame it completes, after the pieces are back in the root group and
    /// `state` has been updated.
    pub fn update<H>(
        &mut self,
        now: Duration,
        registry: &mut PieceRegistry<H>,
        state: &mut CubeState,
    ) -> Option<RotationRequest> {
        let active = self.active.as_ref()?;
        let t = progress(now.saturating_sub(active.started_at), self.duration);
        self.pivot.rotation = active.request.rotation_at(TURN_INTERPOLATION_FN(t));
        log::trace!("turn {:?} at {t:.3}", active.request);

        if t < 1.0 {
            return None;
        }
        let active = self.active.take()?;
        self.finish(&active, registry, state);
        Some(active.request)
    }

    /// Applies a whole turn in one step, without animation. Rejected while busy.
    pub fn turn_immediately<H>(
        &mut self,
        request: RotationRequest,
        registry: &mut PieceRegistry<H>,
        state: &mut CubeState,
    ) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(pieces) = self.attach_to_pivot(request, registry) else {
            return false;
        };

        self.pivot.rotation = request.final_rotation();
        let active = ActiveRotation {
            request,
            started_at: Duration::ZERO,
            pieces,
        };
        self.finish(&active, registry, state);
        true
    }

    /// Moves the pieces of the request's group from the root group into the
    /// pivot group. `None` when the group is empty.
    fn attach_to_pivot<H>(
        &mut self,
        request: RotationRequest,
        registry: &mut PieceRegistry<H>,
    ) -> Option<Vec<String>> {
        let names = registry.group(request.target.group()).to_vec();
        if names.is_empty() {
            log::debug!("turn {request:?} has no pieces");
            return None;
        }

        self.pivot = Transform::IDENTITY;
        let pivot = self.pivot;
        let mut attached = Vec::with_capacity(names.len());
        for name in names {
            let Some(piece) = registry.piece_mut(&name) else {
                log::debug!("piece {name} is missing, skipped");
                continue;
            };
            let world = piece.root_transform(&pivot);
            piece.local = relative_to(&pivot, &world);
            piece.parent = PieceParent::Pivot;
            attached.push(name);
        }
        Some(attached)
    }

    /// Hands the pieces back to the root group, then updates the facelets.
    fn finish<H>(
        &mut self,
        active: &ActiveRotation,
        registry: &mut PieceRegistry<H>,
        state: &mut CubeState,
    ) {
        let pivot = self.pivot;
        for name in &active.pieces {
            let Some(piece) = registry.piece_mut(name) else {
                continue;
            };
            piece.local = snap(piece.root_transform(&pivot));
            piece.parent = PieceParent::Root;
        }
        self.pivot = Transform::IDENTITY;

        let RotationRequest { target, direction } = active.request;
        match target {
            RotationTarget::Face(face) => state.apply_face_turn(face, direction),
            RotationTarget::Slice(slice) => state.apply_slice_turn(slice, direction),
        }
        log::debug!("turn {:?} finished", active.request);
    }
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::utils::constants::cube_constants::ROTATION_DURATION_MS,
        ))
    }
}

/// Expresses `world` in the frame of `parent`. Parents never carry scale.
pub fn relative_to(parent: &Transform, world: &Transform) -> Transform {
    let inverse = parent.rotation.inverse();
    Transform {
        translation: inverse * (world.translation - parent.translation),
        rotation: inverse * world.rotation,
        scale: world.scale,
    }
}

/// Removes float drift accumulated by repeated quarter turns.
fn snap(mut transform: Transform) -> Transform {
    transform.translation = (transform.translation / TRANSLATION_SNAP).round() * TRANSLATION_SNAP;
    transform.rotation = transform.rotation.normalize();
    transform
}
