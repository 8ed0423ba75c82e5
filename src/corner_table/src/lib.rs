#![warn(clippy::pedantic)]

//! The corner heuristic table of a 3x3x3 solver: an exact minimum-turn
//! distance for every configuration of the eight corner cubies, packed four
//! bits per entry.
//!
//! Distances are stored biased by one so that a zero nibble always means
//! "unset" while generating; [`lookup`] removes the bias.

pub mod generate;
pub mod index;
pub mod table;

pub use generate::{GenerateError, generate};
pub use index::corner_index;
pub use table::NibbleTable;

use cube3::CubeState;

/// Number of distinct corner configurations: 8! placements times 3^7 free
/// orientations (the eighth twist is forced).
pub const CORNER_STATES: u32 = 88_179_840;

/// Size of the packed table: one nibble per corner configuration.
pub const TABLE_BYTES: usize = CORNER_STATES as usize / 2;

/// Diameter of the corner configuration graph in face turns.
pub const MAX_DEPTH: u8 = 11;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

/// Lower bound on the face turns needed to bring `state`'s corners to the
/// reference configuration the table was generated about.
///
/// Meaningful only on a fully generated (or loaded) table; an unset entry
/// trips a debug assertion.
#[must_use]
pub fn lookup(table: &NibbleTable, state: &CubeState) -> u8 {
    let stored = table.get(corner_index(state));
    debug_assert!(stored != 0, "looked up an unset corner table entry");
    stored - 1
}
