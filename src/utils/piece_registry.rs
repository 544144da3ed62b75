//! Named cube pieces and their static face groups.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::utils::constants::cube_constants::CENTER_PIECE_NAME;
use crate::utils::objects::Face;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a piece named `{0}` is already registered")]
    DuplicateName(String),
}

/// Group currently owning a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceParent {
    #[default]
    Root,
    Pivot,
}

/// A movable piece. `local` is relative to `parent`; the root group frame is
/// the cube frame, the pivot frame is the temporary turning group.
#[derive(Debug, Clone)]
pub struct Piece<H> {
    pub name: String,
    pub handle: H,
    pub parent: PieceParent,
    pub local: Transform,
}

impl<H> Piece<H> {
    /// Transform of the piece in the root group frame.
    pub fn root_transform(&self, pivot: &Transform) -> Transform {
        match self.parent {
            PieceParent::Root => self.local,
            PieceParent::Pivot => pivot.mul_transform(self.local),
        }
    }
}

/// Which face group a piece name belongs to, if any.
pub fn categorize(name: &str) -> Option<Face> {
    if name == CENTER_PIECE_NAME {
        None
    } else if name.starts_with('a') {
        Some(Face::Top)
    } else if name.starts_with('b') {
        Some(Face::Front)
    } else if name.starts_with('c') {
        Some(Face::Bottom)
    } else {
        None
    }
}

/// Owns every piece handle. Groups are computed once, at registration.
#[derive(Debug, Clone)]
pub struct PieceRegistry<H> {
    pieces: Vec<Piece<H>>,
    by_name: HashMap<String, usize>,
    groups: [Vec<String>; 6],
}

impl<H> Default for PieceRegistry<H> {
    fn default() -> Self {
        Self {
            pieces: Vec::new(),
            by_name: HashMap::new(),
            groups: Default::default(),
        }
    }
}

impl<H> PieceRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a piece under a unique name, owned by the root group.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handle: H,
        transform: Transform,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        match categorize(&name) {
            Some(face) => {
                log::debug!("piece {name} joins the {face} group");
                self.groups[face.index()].push(name.clone());
            }
            None => log::debug!("piece {name} is not part of any group"),
        }

        self.by_name.insert(name.clone(), self.pieces.len());
        self.pieces.push(Piece {
            name,
            handle,
            parent: PieceParent::Root,
            local: transform,
        });
        Ok(())
    }

    /// Piece names of a face group, in registration order.
    pub fn group(&self, face: Face) -> &[String] {
        &self.groups[face.index()]
    }

    /// Same as [`Self::group`] for a face label. Unknown labels give an empty group.
    pub fn group_by_label(&self, label: &str) -> &[String] {
        match label.parse::<Face>() {
            Ok(face) => self.group(face),
            Err(_) => &[],
        }
    }

    pub fn piece(&self, name: &str) -> Option<&Piece<H>> {
        self.by_name.get(name).map(|&index| &self.pieces[index])
    }

    pub fn piece_mut(&mut self, name: &str) -> Option<&mut Piece<H>> {
        let index = *self.by_name.get(name)?;
        Some(&mut self.pieces[index])
    }

    /// All pieces in registration order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece<H>> {
        self.pieces.iter()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
