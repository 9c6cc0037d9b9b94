//! Backward move graph over the enumerated positions.
//!
//! After enumeration freezes the store, every non-terminal node gets its
//! child-index list by regenerating its legal moves (unfiltered; the laws
//! only prune enumeration) and looking each successor up in the store.
//! Successors the enumeration never stored are dropped: the restricted
//! tree treats them as irrelevant to the bound.
//!
//! The node table is split into disjoint `&mut` chunks, one worker each;
//! the key-index bijection means every cell has exactly one writer, so no
//! locking is needed.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use shakmaty::Position;

use crate::arena::store::PositionStore;
use crate::arena::Node;
use crate::pack::PackedBoard;

pub fn connect_children(
    nodes: &mut [Node],
    keys: &[PackedBoard],
    store: &PositionStore,
    workers: usize,
) {
    let total = nodes.len();
    let connected = AtomicUsize::new(0);
    let chunk_len = total.div_ceil(workers.max(1)).max(1);

    thread::scope(|scope| {
        for (node_chunk, key_chunk) in nodes.chunks_mut(chunk_len).zip(keys.chunks(chunk_len)) {
            let connected = &connected;
            scope.spawn(move || {
                for (node, key) in node_chunk.iter_mut().zip(key_chunk) {
                    // Terminal mates have no children by invariant.
                    if node.score.load(Ordering::Relaxed) != 0 {
                        continue;
                    }
                    let pos = key.unpack();
                    for m in pos.legal_moves() {
                        let mut child = pos.clone();
                        child.play_unchecked(&m);
                        if let Some(index) = store.get(&PackedBoard::pack(&child)) {
                            node.children.push(index);
                        }
                    }
                    let done = connected.fetch_add(1, Ordering::Relaxed) + 1;
                    if done % 10_000 == 0 {
                        print!("Progress: {done}/{total}\r");
                        std::io::stdout().flush().ok();
                    }
                }
            });
        }
    });
}
