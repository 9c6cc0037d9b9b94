//! Run configuration: the options record, root-EPD parsing, and the fatal
//! configuration errors.
//!
//! All configuration is validated before enumeration starts; the phases
//! after that never produce recoverable errors.

use std::fmt;
use std::path::PathBuf;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Position};

use crate::pack::MAX_MEN;

/// Effectively unlimited enumeration depth.
pub const MAX_DEPTH: u32 = u32::MAX;

/// The study solved when no `--epd` is given.
pub const DEFAULT_EPD: &str = "8/8/8/1p6/6k1/1p2Q3/p1p1p3/rbrbK3 w - - bm #36;";

/// The full configuration record, shaped like the command line.
///
/// Restriction sets are kept in their raw token form here; [`crate::laws`]
/// parses them into square sets and piece types (and reports unknown
/// tokens as [`ConfigError`]s).
#[derive(Debug, Clone)]
pub struct Options {
    pub epd: String,
    pub depth: u32,
    pub opening_moves: String,
    pub exclude_moves: String,
    pub exclude_sans: String,
    pub exclude_from: String,
    pub exclude_to: String,
    pub exclude_captures: bool,
    pub exclude_captures_of: String,
    pub exclude_to_attacked: bool,
    pub exclude_to_capturable: bool,
    pub exclude_promotion_to: String,
    pub exclude_allowing_capture: bool,
    pub exclude_allowing_from: String,
    pub exclude_allowing_to: String,
    pub exclude_allowing_moves: String,
    pub exclude_allowing_sans: String,
    pub out_file: Option<PathBuf>,
    pub verbose: u8,
    pub concurrency: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            epd: DEFAULT_EPD.to_string(),
            depth: MAX_DEPTH,
            opening_moves: String::new(),
            exclude_moves: String::new(),
            exclude_sans: String::new(),
            exclude_from: String::new(),
            exclude_to: String::new(),
            exclude_captures: false,
            exclude_captures_of: String::new(),
            exclude_to_attacked: false,
            exclude_to_capturable: false,
            exclude_promotion_to: String::new(),
            exclude_allowing_capture: false,
            exclude_allowing_from: String::new(),
            exclude_allowing_to: String::new(),
            exclude_allowing_moves: String::new(),
            exclude_allowing_sans: String::new(),
            out_file: None,
            verbose: 0,
            concurrency: default_concurrency(),
        }
    }
}

impl Options {
    /// Whether any restriction or opening option is set. When none is, the
    /// preset table in [`crate::scenarios`] may fill them in.
    pub fn has_restrictions(&self) -> bool {
        !self.opening_moves.is_empty()
            || !self.exclude_moves.is_empty()
            || !self.exclude_sans.is_empty()
            || !self.exclude_from.is_empty()
            || !self.exclude_to.is_empty()
            || self.exclude_captures
            || !self.exclude_captures_of.is_empty()
            || self.exclude_to_attacked
            || self.exclude_to_capturable
            || !self.exclude_promotion_to.is_empty()
            || self.exclude_allowing_capture
            || !self.exclude_allowing_from.is_empty()
            || !self.exclude_allowing_to.is_empty()
            || !self.exclude_allowing_moves.is_empty()
            || !self.exclude_allowing_sans.is_empty()
    }
}

pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn enclosed(s: &str) -> String {
    if s.contains(' ') {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--epd \"{}\" ", self.epd)?;
        if self.depth < MAX_DEPTH {
            write!(f, "--depth {} ", self.depth)?;
        }
        if !self.opening_moves.is_empty() {
            write!(f, "--openingMoves {} ", enclosed(&self.opening_moves))?;
        }
        if !self.exclude_moves.is_empty() {
            write!(f, "--excludeMoves {} ", enclosed(&self.exclude_moves))?;
        }
        if !self.exclude_sans.is_empty() {
            write!(f, "--excludeSANs {} ", enclosed(&self.exclude_sans))?;
        }
        if !self.exclude_from.is_empty() {
            write!(f, "--excludeFrom {} ", enclosed(&self.exclude_from))?;
        }
        if !self.exclude_to.is_empty() {
            write!(f, "--excludeTo {} ", enclosed(&self.exclude_to))?;
        }
        if self.exclude_captures {
            write!(f, "--excludeCaptures ")?;
        }
        if !self.exclude_captures_of.is_empty() {
            write!(f, "--excludeCapturesOf {} ", enclosed(&self.exclude_captures_of))?;
        }
        if self.exclude_to_attacked {
            write!(f, "--excludeToAttacked ")?;
        }
        if self.exclude_to_capturable {
            write!(f, "--excludeToCapturable ")?;
        }
        if !self.exclude_promotion_to.is_empty() {
            write!(f, "--excludePromotionTo {} ", enclosed(&self.exclude_promotion_to))?;
        }
        if self.exclude_allowing_capture {
            write!(f, "--excludeAllowingCapture ")?;
        }
        if !self.exclude_allowing_from.is_empty() {
            write!(f, "--excludeAllowingFrom {} ", enclosed(&self.exclude_allowing_from))?;
        }
        if !self.exclude_allowing_to.is_empty() {
            write!(f, "--excludeAllowingTo {} ", enclosed(&self.exclude_allowing_to))?;
        }
        if !self.exclude_allowing_moves.is_empty() {
            write!(f, "--excludeAllowingMoves {} ", enclosed(&self.exclude_allowing_moves))?;
        }
        if !self.exclude_allowing_sans.is_empty() {
            write!(f, "--excludeAllowingSANs {} ", enclosed(&self.exclude_allowing_sans))?;
        }
        if let Some(path) = &self.out_file {
            write!(f, "--outFile {} ", enclosed(&path.display().to_string()))?;
        }
        Ok(())
    }
}

/// Fatal configuration problems. All are diagnosed before enumeration
/// begins and terminate the run with exit code 1.
#[derive(Debug)]
pub enum ConfigError {
    EpdTooShort {
        epd: String,
    },
    BadRoot {
        fen: String,
        reason: String,
    },
    TooManyMen {
        count: usize,
    },
    UnknownSquare {
        token: String,
    },
    UnknownPiece {
        token: String,
    },
    BookWildcards {
        line: String,
    },
    BookConflict {
        fen: String,
        existing: String,
        conflicting: String,
    },
    BookIllegalMove {
        fen: String,
        mv: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EpdTooShort { epd } => write!(f, "EPD \"{epd}\" is too short."),
            ConfigError::BadRoot { fen, reason } => {
                write!(f, "Cannot set up position \"{fen}\": {reason}.")
            }
            ConfigError::TooManyMen { count } => {
                write!(f, "Position has {count} men; at most {MAX_MEN} are supported.")
            }
            ConfigError::UnknownSquare { token } => write!(f, "Unknown square \"{token}\"."),
            ConfigError::UnknownPiece { token } => write!(f, "Unknown piece type \"{token}\"."),
            ConfigError::BookWildcards { line } => {
                write!(f, "More than one '*' in line {line}.")
            }
            ConfigError::BookConflict {
                fen,
                existing,
                conflicting,
            } => write!(
                f,
                "Cannot specify both {conflicting} and {existing} for position {fen}."
            ),
            ConfigError::BookIllegalMove { fen, mv } => {
                write!(f, "Illegal move {mv} in position {fen}.")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// The parsed root: position, its four-token FEN, and the side whose moves
/// are restricted.
#[derive(Debug, Clone)]
pub struct Root {
    pub position: Chess,
    pub short_fen: String,
    pub mating_side: Color,
}

/// Parse the root EPD. The first four tokens set up the position; an
/// optional `bm #-N;` annotation flips the mating side to the opponent of
/// the side to move.
pub fn parse_root(epd: &str) -> Result<Root, ConfigError> {
    let parts: Vec<&str> = epd.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(ConfigError::EpdTooShort {
            epd: epd.to_string(),
        });
    }
    let short_fen = parts[..4].join(" ");

    let fen: Fen = short_fen.parse().map_err(|e: shakmaty::fen::ParseFenError| {
        ConfigError::BadRoot {
            fen: short_fen.clone(),
            reason: e.to_string(),
        }
    })?;
    let position: Chess =
        fen.into_position(CastlingMode::Standard)
            .map_err(|e| ConfigError::BadRoot {
                fen: short_fen.clone(),
                reason: e.to_string(),
            })?;

    let men = position.board().occupied().count();
    if men > MAX_MEN {
        return Err(ConfigError::TooManyMen { count: men });
    }

    let mut mating_side = position.turn();
    for pair in parts[4..].windows(2) {
        if pair[0] == "bm" && pair[1].contains("#-") {
            mating_side = !mating_side;
            break;
        }
    }

    Ok(Root {
        position,
        short_fen,
        mating_side,
    })
}
