//! Logical facelet model of the cube, kept in step with the animated pieces.

use std::collections::BTreeMap;

use crate::utils::objects::{Direction, Face, Slice};

/// A 3x3 grid of facelet labels, indexed `[row][col]`.
pub type FaceGrid = [[Face; 3]; 3];

// Clockwise 4-cycles of the boundary cells. The center (1, 1) never moves.
const CORNER_CYCLE: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 2), (2, 0)];
const EDGE_CYCLE: [(usize, usize); 4] = [(0, 1), (1, 2), (2, 1), (1, 0)];

/// Per-face facelet grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeState {
    faces: [FaceGrid; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// Every grid filled with its own face label.
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| [[face; 3]; 3]),
        }
    }

    pub fn grid(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    pub fn grid_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }

    /// Turns the grid of `face` a quarter turn in place.
    pub fn apply_face_turn(&mut self, face: Face, direction: Direction) {
        let grid = self.grid_mut(face);
        cycle_cells(grid, &CORNER_CYCLE, direction);
        cycle_cells(grid, &EDGE_CYCLE, direction);
    }

    /// Label-based variant for collaborators holding strings. Unknown faces are ignored.
    pub fn apply_face_turn_by_name(&mut self, face: &str, direction: Direction) {
        if let Ok(face) = face.parse() {
            self.apply_face_turn(face, direction);
        }
    }

    /// Slice turns do not track facelets yet; the grids are left untouched.
    pub fn apply_slice_turn(&mut self, slice: Slice, direction: Direction) {
        log::debug!("slice turn {slice} {direction:?} leaves facelet grids unchanged");
    }

    /// True when every face shows a single label.
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().flatten().all(|cell| *cell == grid[0][0]))
    }

    /// TOML snapshot with one `label = [[...], [...], [...]]` entry per face.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let grids: BTreeMap<&str, &FaceGrid> = Face::ALL
            .into_iter()
            .map(|face| (face.label(), self.grid(face)))
            .collect();
        toml::to_string(&grids)
    }
}

/// Moves the value at `cycle[i]` to `cycle[i + 1]` (clockwise) or the reverse.
fn cycle_cells(grid: &mut FaceGrid, cycle: &[(usize, usize); 4], direction: Direction) {
    let values = cycle.map(|(row, col)| grid[row][col]);
    for (i, &(row, col)) in cycle.iter().enumerate() {
        let source = match direction {
            Direction::Clockwise => (i + 3) % 4,
            Direction::CounterClockwise => (i + 1) % 4,
        };
        grid[row][col] = values[source];
    }
}
