//! Perfect hash of a cube's corner configuration.
//!
//! The eight corner cubies are read in slot order. The first seven give a
//! Lehmer code of the permutation (the eighth placement is forced by
//! elimination) and the first seven orientations give base-3 digits (the
//! eighth twist is forced by the mod-3 twist sum). Combined in a mixed-radix
//! system this enumerates all 8!·3^7 configurations exactly once.

use crate::CORNER_STATES;
use cube3::{CORNER_SLOTS, CUBIE_COUNT, CubeState};

/// Maps a corner cubie id to its rank `0..8` among the corner slots.
/// Non-corner ids map to a poisoned rank.
const CORNER_NUMBER: [u8; CUBIE_COUNT] = {
    let mut map = [u8::MAX; CUBIE_COUNT];
    let mut rank = 0;
    while rank < CORNER_SLOTS.len() {
        map[CORNER_SLOTS[rank]] = rank as u8;
        rank += 1;
    }
    map
};

/// 3^7, the number of free orientation combinations.
const ORI_COMBINATIONS: u32 = 2187;

/// Positional weight of the k-th permutation digit: (7 - k)! * 3^7.
const PERM_WEIGHTS: [u32; 7] = {
    let mut weights = [0; 7];
    let mut factorial = 1_u32;
    let mut multiplier = 2_u32;
    let mut k = 6_usize;
    loop {
        weights[k] = factorial * ORI_COMBINATIONS;
        if k == 0 {
            break;
        }
        factorial *= multiplier;
        multiplier += 1;
        k -= 1;
    }
    weights
};

/// Positional weight of the k-th orientation digit: 3^(6 - k).
const ORI_WEIGHTS: [u32; 7] = [729, 243, 81, 27, 9, 3, 1];

/// Hash `state`'s corner configuration into `[0, 88_179_840)`.
///
/// Deterministic and bijective over (corner permutation, first seven
/// orientations); the solved state hashes to 0.
#[must_use]
pub fn corner_index(state: &CubeState) -> u32 {
    // Rank of each corner among those not yet emitted. Emitting corner c
    // shifts every later corner down one rank.
    let mut slot_rank: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
    let mut index = 0_u32;

    for (k, &slot) in CORNER_SLOTS.iter().enumerate().take(7) {
        let corner = usize::from(CORNER_NUMBER[usize::from(state.cubie(slot).id)]);
        debug_assert!(corner < 8, "corner slot {slot} holds a non-corner cubie");
        index += u32::from(slot_rank[corner]) * PERM_WEIGHTS[k];
        for rank in &mut slot_rank[corner + 1..] {
            *rank -= 1;
        }
    }

    for (k, &slot) in CORNER_SLOTS.iter().enumerate().take(7) {
        let orient = state.cubie(slot).orient;
        debug_assert!(orient < 3, "corner slot {slot} has twist {orient}");
        index += u32::from(orient) * ORI_WEIGHTS[k];
    }

    debug_assert!(index < CORNER_STATES);
    index
}
