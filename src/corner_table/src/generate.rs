//! Table generation: iterative-deepening depth-first search over the turn
//! graph from a reference state.
//!
//! Plain breadth-first search would need the whole frontier held in memory
//! at once. Deepening a bounded DFS instead keeps the live state to a few
//! hundred frames, and the visited-at-depth filter recovers most of the
//! re-expansion cost that deepening brings.

use crate::{CORNER_STATES, MAX_DEPTH, NibbleTable, index::corner_index, start, success, working};
use cube3::{CubeState, Turn};
use log::{debug, info};
use std::time::Instant;
use thiserror::Error;

/// Progress cadence in stack pops.
const POPS_PER_REPORT: u64 = 1 << 18;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(
        "corner table incomplete after exhausting depth 11: \
         {filled} of 88179840 configurations reached"
    )]
    Incomplete { filled: u32 },
}

struct Frame {
    state: CubeState,
    last: Option<Turn>,
    distance: u8,
}

/// Fill `table` with the distance-plus-one of every corner configuration
/// from `reference`, leaving no entry unset.
///
/// Any cube state works as the reference; the corner configurations
/// reachable from it are always the full 88,179,840.
///
/// # Errors
///
/// Fails if configurations remain unreached past the corner graph's
/// diameter, which a correct turn set makes impossible.
pub fn generate(table: &mut NibbleTable, reference: &CubeState) -> Result<(), GenerateError> {
    info!(start!("Generating the corner heuristic table"));
    let start = Instant::now();

    table.clear();
    let mut visited = NibbleTable::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut filled = 0_u32;
    let mut pops = 0_u64;

    for target_depth in 0..=MAX_DEPTH {
        let iteration_start = Instant::now();
        visited.clear();
        stack.push(Frame {
            state: *reference,
            last: None,
            distance: 0,
        });

        while let Some(Frame {
            state,
            last,
            distance,
        }) = stack.pop()
        {
            pops += 1;
            if pops % POPS_PER_REPORT == 0 {
                debug!(
                    working!("{}/{} filled, depth {}/{}, {} frames traversed"),
                    filled, CORNER_STATES, target_depth, MAX_DEPTH, pops
                );
            }

            if distance == target_depth {
                // Found at the iteration's target depth, so `distance` is
                // exact unless an earlier iteration already claimed the
                // entry.
                let index = corner_index(&state);
                if table.get(index) == 0 {
                    table.set(index, distance + 1);
                    filled += 1;
                    if filled == CORNER_STATES {
                        break;
                    }
                }
                continue;
            }

            for turn in Turn::ALL {
                if last.is_some_and(|last| turn.is_redundant_after(last)) {
                    continue;
                }
                let next = state.turned(turn);
                let index = corner_index(&next);
                // Skip anything already pushed this iteration at the same
                // or a shallower distance; its subtree was explored with at
                // least as much depth budget.
                let pushed_at = visited.get(index);
                if pushed_at != 0 && pushed_at <= distance + 1 {
                    continue;
                }
                visited.set(index, distance + 1);
                stack.push(Frame {
                    state: next,
                    last: Some(turn),
                    distance: distance + 1,
                });
            }
        }

        debug!(
            working!("depth {} pass took {:.3}s"),
            target_depth,
            iteration_start.elapsed().as_secs_f64()
        );

        if filled == CORNER_STATES {
            info!(
                success!("corner table generated in {:.3}s"),
                start.elapsed().as_secs_f64()
            );
            return Ok(());
        }
    }

    Err(GenerateError::Incomplete { filled })
}
