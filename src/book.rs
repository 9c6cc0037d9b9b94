//! Forced opening lines for the mating side.
//!
//! The book is built once at configuration time from comma-separated UCI
//! lines and is immutable afterwards. During enumeration a book hit
//! overrides the move laws: exactly the stored move is explored, every
//! other legal move is pruned. Defender moves are never in the book.
//!
//! Each line may contain a single `*` wildcard for the defender: the
//! prefix is replayed from the root and the line is duplicated for every
//! legal reply, unless an identical extended prefix is already present.

use rustc_hash::FxHashMap;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Move, Position};

use crate::config::ConfigError;
use crate::pack::short_fen;
use crate::report::cdb_link;

/// An immutable map from short FEN to the single forced UCI move.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: FxHashMap<String, String>,
}

impl OpeningBook {
    /// Build the book by expanding wildcards and replaying every line from
    /// the root. Fails on conflicting moves for the same position, on
    /// illegal moves, and on lines with more than one `*`.
    pub fn build(
        root: &Chess,
        root_fen: &str,
        mating_side: Color,
        opening_moves: &str,
        verbose: u8,
    ) -> Result<Self, ConfigError> {
        let mut lines: Vec<Vec<String>> = Vec::new();

        for line in opening_moves.split(',') {
            let stars = line.matches('*').count();
            if stars > 1 {
                return Err(ConfigError::BookWildcards {
                    line: line.trim().to_string(),
                });
            }
            if stars == 0 {
                let moves: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                if !moves.is_empty() {
                    lines.push(moves);
                }
                continue;
            }

            let (before, after) = line.split_once('*').expect("line contains a star");
            let prefix: Vec<String> = before.split_whitespace().map(str::to_string).collect();
            let suffix: Vec<String> = after.split_whitespace().map(str::to_string).collect();

            let mut pos = root.clone();
            for mv in &prefix {
                let m = parse_move(&pos, mv)?;
                pos.play_unchecked(&m);
            }
            for reply in pos.legal_moves() {
                let reply_uci = reply.to_uci(CastlingMode::Standard).to_string();
                let already_present = lines.iter().any(|existing| {
                    existing.len() > prefix.len()
                        && existing[..prefix.len()] == prefix[..]
                        && existing[prefix.len()] == reply_uci
                });
                if already_present {
                    continue;
                }
                let mut extended = prefix.clone();
                extended.push(reply_uci);
                extended.extend(suffix.iter().cloned());
                lines.push(extended);
            }
        }

        let mut entries: FxHashMap<String, String> = FxHashMap::default();
        for moves in &lines {
            if verbose >= 3 {
                let line_str = moves.join(" ");
                println!("Processing line {line_str} ...");
                if verbose >= 4 {
                    println!("{}", cdb_link(root_fen, &line_str));
                }
            }
            let mut pos = root.clone();
            for mv in moves {
                if pos.turn() == mating_side {
                    let fen = short_fen(&pos);
                    match entries.get(&fen) {
                        Some(existing) if existing != mv => {
                            return Err(ConfigError::BookConflict {
                                fen,
                                existing: existing.clone(),
                                conflicting: mv.clone(),
                            });
                        }
                        _ => {
                            entries.insert(fen, mv.clone());
                        }
                    }
                }
                let m = parse_move(&pos, mv)?;
                pos.play_unchecked(&m);
            }
        }

        Ok(Self { entries })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The forced move for a position, if any. Keys are short FENs, so the
    /// halfmove clock does not matter for a hit.
    pub fn lookup(&self, fen: &str) -> Option<&str> {
        self.entries.get(fen).map(String::as_str)
    }

    /// One-line `fen: move, ...` rendering for verbose dumps.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (fen, mv) in &self.entries {
            out.push_str(fen);
            out.push_str(": ");
            out.push_str(mv);
            out.push_str(", ");
        }
        out
    }
}

fn parse_move(pos: &Chess, uci: &str) -> Result<Move, ConfigError> {
    let parsed: UciMove = uci.parse().map_err(|_| ConfigError::BookIllegalMove {
        fen: short_fen(pos),
        mv: uci.to_string(),
    })?;
    parsed.to_move(pos).map_err(|_| ConfigError::BookIllegalMove {
        fen: short_fen(pos),
        mv: uci.to_string(),
    })
}
