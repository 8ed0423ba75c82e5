use crate::{CubeState, Cubie};

/// The six faces, in the fixed order used for turn identifiers.
///
/// Opposite faces share an axis: `U`/`D`, `R`/`L`, `F`/`B` are three apart,
/// so `axis = face mod 3`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    fn axis(self) -> u8 {
        self as u8 % 3
    }
}

/// How far a face is rotated, clockwise as seen from outside that face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TurnAngle {
    Clockwise,
    Half,
    Counterclockwise,
}

impl TurnAngle {
    pub const ALL: [TurnAngle; 3] = [
        TurnAngle::Clockwise,
        TurnAngle::Half,
        TurnAngle::Counterclockwise,
    ];

    fn quarter_count(self) -> u8 {
        self as u8 + 1
    }
}

/// One of the 18 face turns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
    pub face: Face,
    pub angle: TurnAngle,
}

/// One step of a quarter-turn cycle: the cubie in `src` moves to `dest`,
/// picking up `delta` orientation (twist mod 3 for corners, flip mod 2 for
/// edges).
#[derive(Clone, Copy)]
struct CycleStep {
    dest: usize,
    src: usize,
    delta: u8,
}

struct QuarterTurn {
    corners: [CycleStep; 4],
    edges: [CycleStep; 4],
}

const fn step(dest: usize, src: usize, delta: u8) -> CycleStep {
    CycleStep { dest, src, delta }
}

/// Clockwise quarter turn of each face, indexed by `Face`.
///
/// Corner twists follow the usual convention: `U` and `D` leave corners
/// untwisted, the other four faces twist their corners by (2, 1, 1, 2)
/// around the cycle. Only `F` and `B` flip edges.
const QUARTER_TURNS: [QuarterTurn; 6] = [
    // U
    QuarterTurn {
        corners: [step(14, 2, 0), step(12, 14, 0), step(0, 12, 0), step(2, 0, 0)],
        edges: [step(9, 1, 0), step(13, 9, 0), step(8, 13, 0), step(1, 8, 0)],
    },
    // R
    QuarterTurn {
        corners: [step(14, 19, 2), step(2, 14, 1), step(19, 7, 1), step(7, 2, 2)],
        edges: [step(9, 16, 0), step(4, 9, 0), step(11, 4, 0), step(16, 11, 0)],
    },
    // F
    QuarterTurn {
        corners: [step(14, 12, 1), step(12, 17, 2), step(19, 14, 2), step(17, 19, 1)],
        edges: [step(13, 15, 1), step(16, 13, 1), step(18, 16, 1), step(15, 18, 1)],
    },
    // D
    QuarterTurn {
        corners: [step(19, 17, 0), step(17, 5, 0), step(5, 7, 0), step(7, 19, 0)],
        edges: [step(11, 18, 0), step(18, 10, 0), step(10, 6, 0), step(6, 11, 0)],
    },
    // L
    QuarterTurn {
        corners: [step(12, 0, 1), step(0, 5, 2), step(17, 12, 2), step(5, 17, 1)],
        edges: [step(8, 3, 0), step(10, 15, 0), step(15, 8, 0), step(3, 10, 0)],
    },
    // B
    QuarterTurn {
        corners: [step(0, 2, 1), step(2, 7, 2), step(5, 0, 2), step(7, 5, 1)],
        edges: [step(1, 4, 1), step(3, 1, 1), step(6, 3, 1), step(4, 6, 1)],
    },
];

fn quarter_turned(state: &CubeState, face: Face) -> CubeState {
    let table = &QUARTER_TURNS[face as usize];
    let mut next = *state;
    for &CycleStep { dest, src, delta } in &table.corners {
        let moved = state.cubies[src];
        next.cubies[dest] = Cubie {
            id: moved.id,
            orient: (moved.orient + delta) % 3,
        };
    }
    for &CycleStep { dest, src, delta } in &table.edges {
        let moved = state.cubies[src];
        next.cubies[dest] = Cubie {
            id: moved.id,
            orient: (moved.orient + delta) % 2,
        };
    }
    next
}

impl Turn {
    /// All 18 turns in identifier order: face-major, then clockwise, half,
    /// counterclockwise within a face.
    pub const ALL: [Turn; 18] = {
        let mut all = [Turn {
            face: Face::U,
            angle: TurnAngle::Clockwise,
        }; 18];
        let mut face = 0;
        while face < 6 {
            let mut angle = 0;
            while angle < 3 {
                all[face * 3 + angle] = Turn {
                    face: Face::ALL[face],
                    angle: TurnAngle::ALL[angle],
                };
                angle += 1;
            }
            face += 1;
        }
        all
    };

    /// This turn's identifier in `0..18`.
    #[must_use]
    pub fn index(self) -> usize {
        self.face as usize * 3 + self.angle as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Turn> {
        Turn::ALL.get(index).copied()
    }

    /// The turn undoing this one.
    #[must_use]
    pub fn inverse(self) -> Turn {
        let angle = match self.angle {
            TurnAngle::Clockwise => TurnAngle::Counterclockwise,
            TurnAngle::Half => TurnAngle::Half,
            TurnAngle::Counterclockwise => TurnAngle::Clockwise,
        };
        Turn { face: self.face, angle }
    }

    /// Whether making this turn directly after `last` is pointless for a
    /// search: a same-face pair always collapses to at most one turn, and of
    /// the two orders of a commuting opposite-face pair only one is kept
    /// (`U` after `D` is allowed, `D` after `U` is not).
    #[must_use]
    pub fn is_redundant_after(self, last: Turn) -> bool {
        self.face.axis() == last.face.axis() && self.face as u8 >= last.face as u8
    }

    pub(crate) fn applied_to(self, state: &CubeState) -> CubeState {
        let mut next = quarter_turned(state, self.face);
        for _ in 1..self.angle.quarter_count() {
            next = quarter_turned(&next, self.face);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CORNER_SLOTS, CUBIE_COUNT};
    use itertools::Itertools;

    fn turn(face: Face, angle: TurnAngle) -> Turn {
        Turn { face, angle }
    }

    /// A cube state is only plausible if it is a permutation of all 20
    /// cubies that keeps corners in corner slots, with twist sum divisible
    /// by 3 and flip sum even.
    fn assert_well_formed(state: &CubeState) {
        let ids = (0..CUBIE_COUNT)
            .map(|slot| state.cubie(slot).id)
            .sorted()
            .collect_vec();
        assert_eq!(ids, (0..CUBIE_COUNT as u8).collect_vec());

        let mut twists = 0_u32;
        let mut flips = 0_u32;
        for slot in 0..CUBIE_COUNT {
            let cubie = state.cubie(slot);
            if CORNER_SLOTS.contains(&slot) {
                assert!(CORNER_SLOTS.contains(&usize::from(cubie.id)));
                assert!(cubie.orient < 3);
                twists += u32::from(cubie.orient);
            } else {
                assert!(!CORNER_SLOTS.contains(&usize::from(cubie.id)));
                assert!(cubie.orient < 2);
                flips += u32::from(cubie.orient);
            }
        }
        assert_eq!(twists % 3, 0);
        assert_eq!(flips % 2, 0);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for face in Face::ALL {
            let mut state = CubeState::SOLVED;
            for _ in 0..4 {
                state = state.turned(turn(face, TurnAngle::Clockwise));
                assert_well_formed(&state);
            }
            assert_eq!(state, CubeState::SOLVED);
        }
    }

    #[test]
    fn every_turn_undone_by_its_inverse() {
        for t in Turn::ALL {
            let there = CubeState::SOLVED.turned(t);
            assert_ne!(there, CubeState::SOLVED);
            assert_eq!(there.turned(t.inverse()), CubeState::SOLVED);
        }
    }

    #[test]
    fn half_turn_is_two_quarters() {
        for face in Face::ALL {
            let twice = CubeState::SOLVED
                .turned(turn(face, TurnAngle::Clockwise))
                .turned(turn(face, TurnAngle::Clockwise));
            assert_eq!(CubeState::SOLVED.turned(turn(face, TurnAngle::Half)), twice);
        }
    }

    #[test]
    fn sexy_move_has_order_six() {
        let sexy = [
            turn(Face::R, TurnAngle::Clockwise),
            turn(Face::U, TurnAngle::Clockwise),
            turn(Face::R, TurnAngle::Counterclockwise),
            turn(Face::U, TurnAngle::Counterclockwise),
        ];
        let mut state = CubeState::SOLVED;
        for repetition in 1..=6 {
            state = state.scrambled_by(&sexy);
            assert_well_formed(&state);
            assert_eq!(state == CubeState::SOLVED, repetition == 6);
        }
    }

    #[test]
    fn scrambles_stay_well_formed() {
        let scramble: Vec<Turn> = (0..100).map(|i| Turn::ALL[i * 7 % 18]).collect();
        let mut state = CubeState::SOLVED;
        for &t in &scramble {
            state = state.turned(t);
            assert_well_formed(&state);
        }
    }

    #[test]
    fn turn_identifiers_round_trip() {
        for (index, t) in Turn::ALL.iter().enumerate() {
            assert_eq!(t.index(), index);
            assert_eq!(Turn::from_index(index), Some(*t));
        }
        assert_eq!(Turn::from_index(18), None);
    }

    #[test]
    fn redundant_turn_predicate() {
        let u = turn(Face::U, TurnAngle::Clockwise);
        let u2 = turn(Face::U, TurnAngle::Half);
        let d = turn(Face::D, TurnAngle::Clockwise);
        let r = turn(Face::R, TurnAngle::Clockwise);
        let l = turn(Face::L, TurnAngle::Counterclockwise);

        // Same face is always redundant, whatever the angles.
        assert!(u.is_redundant_after(u));
        assert!(u2.is_redundant_after(u));
        // Of an opposite-face pair, only one order survives.
        assert!(d.is_redundant_after(u));
        assert!(!u.is_redundant_after(d));
        assert!(l.is_redundant_after(r));
        assert!(!r.is_redundant_after(l));
        // Different axes never prune.
        assert!(!r.is_redundant_after(u));
        assert!(!u.is_redundant_after(r));
    }
}
