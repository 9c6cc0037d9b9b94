//! Probing the finished table, PV reconstruction, and result output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashMap;
use shakmaty::{CastlingMode, Chess, Color, Move, Position};

use crate::arena::store::PositionStore;
use crate::arena::{parent_score, score2mate, Node, Score, VALUE_NONE};
use crate::pack::{short_fen, PackedBoard};

/// A root alternative: the transformed score and the PV it starts.
#[derive(Debug, Clone)]
pub struct RootMove {
    pub score: Score,
    pub pv: Vec<String>,
}

/// The table score of a position, or [`VALUE_NONE`] when enumeration never
/// stored it (a legal but filtered-out alternative).
pub fn probe(store: &PositionStore, nodes: &[Node], pos: &Chess) -> Score {
    match store.get(&PackedBoard::pack(pos)) {
        Some(index) => nodes[index as usize]
            .score
            .load(std::sync::atomic::Ordering::Relaxed),
        None => VALUE_NONE,
    }
}

fn probe_from_parent(store: &PositionStore, nodes: &[Node], child: &Chess) -> Score {
    let score = probe(store, nodes, child);
    if score != VALUE_NONE && score != 0 {
        parent_score(score)
    } else {
        score
    }
}

/// `better` under the root-move ordering: any real score beats
/// [`VALUE_NONE`], otherwise larger is better.
fn improves(score: Score, best: Score) -> bool {
    if score == VALUE_NONE {
        return false;
    }
    best == VALUE_NONE || score > best
}

/// Greedily extend the PV from `pos`: keep playing the legal move with the
/// best transformed score. Stops on stalemate, insufficient material, or a
/// third visit to the same position; on the defender's turn an exhausted
/// 50-move clock ends the PV with a literal `; draw by 50mr` token.
fn extend_pv(
    store: &PositionStore,
    nodes: &[Node],
    mut pos: Chess,
    mating_side: Color,
    pv: &mut Vec<String>,
) {
    let mut visits: FxHashMap<String, u32> = FxHashMap::default();
    loop {
        if pos.is_stalemate() || pos.is_insufficient_material() {
            return;
        }
        let seen = visits.entry(short_fen(&pos)).or_insert(0);
        *seen += 1;
        if *seen >= 3 {
            return;
        }
        if pos.turn() != mating_side && pos.halfmoves() >= 100 {
            pv.push("; draw by 50mr".to_string());
            return;
        }

        let mut best: Option<(Score, Move)> = None;
        for m in pos.legal_moves() {
            let mut child = pos.clone();
            child.play_unchecked(&m);
            let score = probe_from_parent(store, nodes, &child);
            let better = match &best {
                None => true,
                Some((best_score, _)) => improves(score, *best_score),
            };
            if better {
                best = Some((score, m));
            }
        }
        let Some((_, m)) = best else {
            return;
        };
        pv.push(m.to_uci(CastlingMode::Standard).to_string());
        pos.play_unchecked(&m);
    }
}

/// Score every legal root move by probing its successor, attach greedy PVs
/// to the scored ones, and sort descending with [`VALUE_NONE`] last. The
/// sort is stable, so equal scores keep the legal-move order.
pub fn root_moves(
    store: &PositionStore,
    nodes: &[Node],
    root: &Chess,
    mating_side: Color,
) -> Vec<RootMove> {
    let mut moves: Vec<RootMove> = Vec::new();
    for m in root.legal_moves() {
        let mut child = root.clone();
        child.play_unchecked(&m);
        let score = probe_from_parent(store, nodes, &child);
        let mut pv = vec![m.to_uci(CastlingMode::Standard).to_string()];
        if score != VALUE_NONE && score != 0 {
            extend_pv(store, nodes, child, mating_side, &mut pv);
        }
        moves.push(RootMove { score, pv });
    }
    moves.sort_by(|a, b| {
        use std::cmp::Ordering;
        match (a.score == VALUE_NONE, b.score == VALUE_NONE) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.score.cmp(&a.score),
        }
    });
    moves
}

/// Print the result: the `Matetrack:` line for a proven mate (or `No mate
/// found.`), plus the MultiPV block at verbosity 1 and chessdb.cn links at
/// verbosity 2.
pub fn print_report(root_fen: &str, moves: &[RootMove], root_is_checkmate: bool, verbose: u8) {
    if moves.is_empty() {
        if root_is_checkmate {
            println!("\nMatetrack:");
            println!("{root_fen} bm #0; PV: ;");
        } else {
            println!("No mate found.");
        }
        return;
    }

    let best = &moves[0];
    if best.score != VALUE_NONE && best.score != 0 {
        let mate = score2mate(best.score).expect("mate score");
        println!("\nMatetrack:");
        println!("{root_fen} bm #{mate}; PV: {};", best.pv.join(" "));
    } else {
        println!("No mate found.");
    }

    if verbose == 0 {
        return;
    }
    println!("\nMultiPV:");
    for (i, rm) in moves.iter().enumerate() {
        if rm.score == VALUE_NONE {
            println!("multipv {} score None", i + 1);
            continue;
        }
        let mut score_str = format!("cp {}", rm.score);
        if rm.score != 0 {
            let mate = score2mate(rm.score).expect("mate score");
            score_str.push_str(&format!(" mate {mate}"));
        }
        let mut pv_str = rm.pv.join(" ");
        if pv_str.ends_with(';') {
            pv_str.pop();
        }
        println!("multipv {} score {score_str} pv {pv_str}", i + 1);
        if verbose >= 2 {
            println!("{}\n", cdb_link(root_fen, &pv_str));
        }
    }
}

/// chessdb.cn query link for a position plus a move sequence.
pub fn cdb_link(root_fen: &str, pv: &str) -> String {
    format!("https://chessdb.cn/queryc_en/?{root_fen} moves {pv}").replace(' ', "_")
}

/// Write one line per stored position: `<short-fen>` plus ` bm #N;` for
/// nodes with a proven mate score.
pub fn write_tb(path: &Path, keys: &[PackedBoard], nodes: &[Node]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for (key, node) in keys.iter().zip(nodes) {
        let fen = short_fen(&key.unpack());
        let score = node.score.load(std::sync::atomic::Ordering::Relaxed);
        match score2mate(score) {
            Some(mate) => writeln!(out, "{fen} bm #{mate};")?,
            None => writeln!(out, "{fen}")?,
        }
    }
    out.flush()
}
