//! Parallel fixed-point relaxation of mate-distance scores.
//!
//! Repeated backward sweeps relax every node to the best (maximum) child
//! score seen from the parent, until a full sweep changes nothing.
//!
//! Sweeps are deliberately lock-free on the score field: a batch may read
//! a neighbour's score while another batch writes it, but any write also
//! bumps the sweep's change counter, so the outer loop repeats. Only a
//! race-free sweep can report zero changes, and that witnesses the fixed
//! point. Scores go through relaxed atomics; each node's attainable score
//! set is finite and the max-of-children relaxation is monotone, so the
//! iteration converges.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::arena::{parent_score, Node, VALUE_NONE};
use crate::pool;

/// Sweep until no score changes; returns the number of sweeps.
pub fn solve(nodes: &[Node], workers: usize) -> u32 {
    let mut iteration: u32 = 0;
    loop {
        let changed = AtomicUsize::new(0);
        let batch_size = pool::sweep_batch_size(nodes.len(), workers);
        let mut batches = pool::batch_ranges(nodes.len(), batch_size);
        batches.reverse();

        pool::run_tasks(workers, &batches, |batch| {
            let mut batch_changed = 0usize;
            for j in batch.clone().rev() {
                let node = &nodes[j];
                let mut best = VALUE_NONE;
                for &child in &node.children {
                    let score = parent_score(nodes[child as usize].score.load(Ordering::Relaxed));
                    if best == VALUE_NONE || score > best {
                        best = score;
                    }
                }
                // Childless nodes keep their seeded score.
                if best != VALUE_NONE && node.score.load(Ordering::Relaxed) != best {
                    node.score.store(best, Ordering::Relaxed);
                    batch_changed += 1;
                }
            }
            if batch_changed != 0 {
                changed.fetch_add(batch_changed, Ordering::Relaxed);
            }
        });

        iteration += 1;
        let total = changed.load(Ordering::Relaxed);
        print!("Iteration {iteration}, changed {total:>9} scores\r");
        std::io::stdout().flush().ok();
        log::debug!("sweep {iteration}: {total} scores changed");
        if total == 0 {
            return iteration;
        }
    }
}
