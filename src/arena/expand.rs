//! Level-synchronized forward expansion of the restricted game tree.
//!
//! Starting from the root's packed position, each depth level is split
//! into batches that workers claim off a shared queue. A worker inserts
//! each position into the store (skipping keys some other path already
//! inserted), detects immediate checkmates, and otherwise emits the packed
//! successors admitted by the opening book or the move laws into a
//! thread-local buffer. Buffers are merged under a mutex once per batch;
//! the level barrier guarantees no depth `d+1` position is processed
//! before all of depth `d` finished.

use std::io::Write;

use parking_lot::Mutex;
use shakmaty::{CastlingMode, Chess, Position};

use crate::arena::store::PositionStore;
use crate::arena::{Score, VALUE_MATE};
use crate::book::OpeningBook;
use crate::laws::MoveLaws;
use crate::pack::{short_fen, PackedBoard};
use crate::pool;

/// Everything enumeration produces: the store, the index-to-key table, and
/// the terminal mates found along the way.
pub struct Expansion {
    pub store: PositionStore,
    pub keys: Vec<PackedBoard>,
    pub terminal_mates: Vec<(PackedBoard, Score)>,
    pub depth_reached: u32,
}

pub fn expand(
    root: &Chess,
    laws: &MoveLaws,
    book: &OpeningBook,
    max_depth: u32,
    workers: usize,
    verbose: u8,
) -> Expansion {
    let store = PositionStore::new();
    let terminal_mates: Mutex<Vec<(PackedBoard, Score)>> = Mutex::new(Vec::new());

    let mut current_level: Vec<PackedBoard> = vec![PackedBoard::pack(root)];
    let mut depth: u32 = 0;

    while !current_level.is_empty() && depth <= max_depth {
        let next_level: Mutex<Vec<PackedBoard>> = Mutex::new(Vec::new());
        let batch_size = pool::level_batch_size(current_level.len(), workers);
        let batches = pool::batch_ranges(current_level.len(), batch_size);
        log::debug!(
            "expanding depth {depth}: {} positions in {} batches",
            current_level.len(),
            batches.len()
        );

        pool::run_tasks(workers, &batches, |batch| {
            let mut local_next: Vec<PackedBoard> = Vec::new();
            let mut local_mates: Vec<(PackedBoard, Score)> = Vec::new();

            for pfen in &current_level[batch.clone()] {
                let (index, is_new) = store.insert_if_absent(*pfen);
                if !is_new {
                    continue;
                }
                if index % 10_000 == 0 {
                    print!("Progress: {index} (d{depth})\r");
                    std::io::stdout().flush().ok();
                }

                let pos = pfen.unpack();
                let legal_moves = pos.legal_moves();
                if legal_moves.is_empty() {
                    if pos.is_check() {
                        local_mates.push((*pfen, -VALUE_MATE));
                    }
                    // Stalemates keep score 0 and spawn nothing.
                    continue;
                }

                let forced = if book.is_empty() {
                    None
                } else {
                    let fen = short_fen(&pos);
                    let hit = book.lookup(&fen).map(str::to_string);
                    if verbose >= 3 {
                        if let Some(mv) = &hit {
                            println!("Picked move {mv} for {fen}.");
                            if verbose >= 4 {
                                println!("Remaining book: {}", book.dump());
                            }
                        }
                    }
                    hit
                };

                for m in &legal_moves {
                    let admitted = match &forced {
                        Some(mv) => m.to_uci(CastlingMode::Standard).to_string() == *mv,
                        None => laws.allows(&pos, m),
                    };
                    if !admitted {
                        continue;
                    }
                    let mut child = pos.clone();
                    child.play_unchecked(m);
                    local_next.push(PackedBoard::pack(&child));
                }
            }

            if !local_mates.is_empty() {
                terminal_mates.lock().append(&mut local_mates);
            }
            if !local_next.is_empty() {
                next_level.lock().append(&mut local_next);
            }
        });

        current_level = next_level.into_inner();
        depth += 1;
    }

    let mut keys = vec![PackedBoard::default(); store.len()];
    store.for_each(|key, index| keys[index as usize] = *key);

    Expansion {
        store,
        keys,
        terminal_mates: terminal_mates.into_inner(),
        depth_reached: depth.saturating_sub(1),
    }
}
