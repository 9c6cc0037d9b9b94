//! The enumerated game tree: node model, concurrent position store,
//! forward expansion, and the backward move graph.

pub mod expand;
pub mod graph;
pub mod store;

use std::sync::atomic::AtomicI16;

/// Mate-distance score attached to every node. See [`VALUE_MATE`].
pub type Score = i16;

/// Dense index of a node, assigned on first insertion into the store.
pub type NodeIndex = u32;

/// The side to move is checkmated at score `-VALUE_MATE`; relaxation moves
/// scores one step toward zero per ply.
pub const VALUE_MATE: Score = 30000;

/// Sentinel for "no information"; used while relaxing and when probing
/// positions outside the store, never stored in the table.
pub const VALUE_NONE: Score = 30001;

/// A node of the solved tree: the relaxed score plus the indices of all
/// stored successor positions.
///
/// The score is atomic because relaxation sweeps read neighbours that
/// other batches may be writing; see [`crate::solve`].
#[derive(Debug, Default)]
pub struct Node {
    pub score: AtomicI16,
    pub children: Vec<NodeIndex>,
}

/// A child's score seen from the parent: negated, with the magnitude
/// stepped one ply toward zero. Draw-like scores stay zero.
#[inline]
pub fn parent_score(child: Score) -> Score {
    if child == 0 {
        0
    } else {
        -child + child.signum()
    }
}

/// The mate announcement for a score: `Some(n)` renders as `#n`, negative
/// when the side to move is the one getting mated.
pub fn score2mate(score: Score) -> Option<i32> {
    if score == 0 || score == VALUE_NONE {
        return None;
    }
    if score > 0 {
        Some((i32::from(VALUE_MATE) - i32::from(score) + 1) / 2)
    } else {
        Some(-((i32::from(VALUE_MATE) + i32::from(score)) / 2))
    }
}
