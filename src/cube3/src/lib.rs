#![warn(clippy::pedantic)]

//! Cubie-level model of the 3x3x3 cube: the state of the 20 movable pieces,
//! the 18 face turns, and move-notation parsing.

mod parse;
mod turn;

pub use parse::{ParseTurnError, parse_move_sequence};
pub use turn::{Face, Turn, TurnAngle};

/// Number of movable cubie slots: 8 corners and 12 edges. Centers never move.
pub const CUBIE_COUNT: usize = 20;

/// Slots holding corner cubies.
///
/// Slots number the movable pieces back layer, middle layer, front layer, and
/// row-major top-to-bottom within a layer, skipping centers. The four corners
/// of the back and front layers land on these eight slots.
pub const CORNER_SLOTS: [usize; 8] = [0, 2, 5, 7, 12, 14, 17, 19];

/// One movable piece: which cubie sits in a slot and how it is rotated there.
///
/// Corner orientations count twists in `{0, 1, 2}`, edge orientations flips
/// in `{0, 1}`. A cubie's `id` is the slot it occupies when solved.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cubie {
    pub id: u8,
    pub orient: u8,
}

/// The positions and orientations of all 20 movable cubies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CubeState {
    pub(crate) cubies: [Cubie; CUBIE_COUNT],
}

impl CubeState {
    /// Every cubie home and untwisted.
    pub const SOLVED: Self = {
        let mut cubies = [Cubie { id: 0, orient: 0 }; CUBIE_COUNT];
        let mut slot = 0;
        while slot < CUBIE_COUNT {
            cubies[slot].id = slot as u8;
            slot += 1;
        }
        Self { cubies }
    };

    /// Assemble a state directly from its cubies.
    ///
    /// No legality checks are made; callers wanting a reachable cube should
    /// start from [`CubeState::SOLVED`] and apply turns instead.
    #[must_use]
    pub fn from_cubies(cubies: [Cubie; CUBIE_COUNT]) -> Self {
        Self { cubies }
    }

    /// The cubie currently occupying `slot`.
    #[must_use]
    pub fn cubie(&self, slot: usize) -> Cubie {
        self.cubies[slot]
    }

    /// The state after applying `turn`.
    #[must_use]
    pub fn turned(&self, turn: Turn) -> Self {
        turn.applied_to(self)
    }

    /// The state after applying a whole move sequence in order.
    #[must_use]
    pub fn scrambled_by(&self, turns: &[Turn]) -> Self {
        turns.iter().fold(*self, |state, &turn| state.turned(turn))
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::SOLVED
    }
}
