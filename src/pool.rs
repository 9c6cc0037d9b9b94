//! Queue-fed task execution on a fixed set of native threads.
//!
//! Each phase hands a slice of tasks (usually index ranges) to
//! [`run_tasks`]; workers claim tasks off a shared atomic cursor until the
//! queue drains. Returning from [`run_tasks`] is the phase barrier: all
//! tasks have finished when it does.

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Run `f` over every task with `workers` threads.
pub fn run_tasks<T, F>(workers: usize, tasks: &[T], f: F)
where
    T: Sync,
    F: Fn(&T) + Sync,
{
    if tasks.is_empty() {
        return;
    }
    let workers = workers.clamp(1, tasks.len());
    let cursor = AtomicUsize::new(0);
    let f = &f;
    thread::scope(|scope| {
        for _ in 0..workers {
            let cursor = &cursor;
            scope.spawn(move || loop {
                let i = cursor.fetch_add(1, Ordering::Relaxed);
                if i >= tasks.len() {
                    break;
                }
                f(&tasks[i]);
            });
        }
    });
}

/// Split `[0, len)` into contiguous ranges of `batch_size` (the last one
/// may be shorter).
pub fn batch_ranges(len: usize, batch_size: usize) -> Vec<Range<usize>> {
    let batch_size = batch_size.max(1);
    let mut ranges = Vec::with_capacity(len.div_ceil(batch_size));
    let mut start = 0;
    while start < len {
        let end = (start + batch_size).min(len);
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Batch size for one expansion level: roughly eight batches per worker,
/// never smaller than 128.
pub fn level_batch_size(len: usize, workers: usize) -> usize {
    128.max(len / (workers.max(1) * 8))
}

/// Batch size for one relaxation sweep: finer-grained than expansion
/// batches, never smaller than 128.
pub fn sweep_batch_size(len: usize, workers: usize) -> usize {
    128.max(len / (workers.max(1) * 32))
}
