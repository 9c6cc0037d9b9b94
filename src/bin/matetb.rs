//! Command-line front end: parse the arguments into an [`Options`] record,
//! apply the built-in presets, and run the tablebase generator.
//!
//! # Examples
//!
//! ```bash
//! # A preset study (the restrictions are filled in automatically):
//! cargo run --release -- --epd "8/8/7p/5K1k/R7/8/8/8 w - -"
//!
//! # Explicit restrictions and a TB dump:
//! cargo run --release -- \
//!   --epd "8/8/8/1p6/6k1/1p2Q3/p1p1p3/rbrbK3 w - -" \
//!   --excludeFrom e1 --excludeTo "a1 c1" --excludeToAttacked \
//!   --outFile tb.txt
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use matetb::config::{default_concurrency, Options, DEFAULT_EPD, MAX_DEPTH};
use matetb::scenarios::apply_preset_restrictions;
use matetb::tb::MateTb;

/// Prove (upper bound) for best mate for a given position by constructing
/// a custom tablebase for a (reduced) game tree.
#[derive(Parser, Debug)]
#[command(name = "matetb", version)]
struct Cli {
    /// EPD for the root position. If bm is not given, it is assumed that
    /// the side to move is mating.
    #[arg(long, default_value = DEFAULT_EPD)]
    epd: String,

    /// Maximal depth for the to be constructed game tree (a too low value
    /// means mate cannot be found).
    #[arg(long)]
    depth: Option<u32>,

    /// Comma separated opening lines in UCI notation that specify the
    /// mating side's moves. In each line a single placeholder '*' is
    /// allowed for the defending side.
    #[arg(long = "openingMoves", default_value = "")]
    opening_moves: String,

    /// Space separated UCI moves that are not allowed.
    #[arg(long = "excludeMoves", default_value = "")]
    exclude_moves: String,

    /// Space separated SAN moves that are not allowed.
    #[arg(long = "excludeSANs", default_value = "")]
    exclude_sans: String,

    /// Space separated square names that pieces should never move from.
    #[arg(long = "excludeFrom", default_value = "")]
    exclude_from: String,

    /// Space separated square names that pieces should never move to.
    #[arg(long = "excludeTo", default_value = "")]
    exclude_to: String,

    /// Never capture.
    #[arg(long = "excludeCaptures")]
    exclude_captures: bool,

    /// String containing piece types that should never be captured,
    /// e.g. "qrbn".
    #[arg(long = "excludeCapturesOf", default_value = "")]
    exclude_captures_of: String,

    /// Never move to attacked squares (including from pinned pieces, but
    /// ignoring en passant).
    #[arg(long = "excludeToAttacked")]
    exclude_to_attacked: bool,

    /// Never move to a square that risks capture (much slower than
    /// --excludeToAttacked).
    #[arg(long = "excludeToCapturable")]
    exclude_to_capturable: bool,

    /// String containing piece types that should never be promoted to,
    /// e.g. "qrb".
    #[arg(long = "excludePromotionTo", default_value = "")]
    exclude_promotion_to: String,

    /// Avoid moves that allow a capture somewhere on the board (much
    /// slower than --excludeToAttacked).
    #[arg(long = "excludeAllowingCapture")]
    exclude_allowing_capture: bool,

    /// Space separated square names that opponent's pieces should not be
    /// allowed to move from in reply to our move.
    #[arg(long = "excludeAllowingFrom", default_value = "")]
    exclude_allowing_from: String,

    /// Space separated square names that opponent's pieces should not be
    /// allowed to move to in reply to our move.
    #[arg(long = "excludeAllowingTo", default_value = "")]
    exclude_allowing_to: String,

    /// Space separated UCI moves that opponent should not be allowed to
    /// make in reply to our move.
    #[arg(long = "excludeAllowingMoves", default_value = "")]
    exclude_allowing_moves: String,

    /// Space separated SAN moves that opponent should not be allowed to
    /// make in reply to our move.
    #[arg(long = "excludeAllowingSANs", default_value = "")]
    exclude_allowing_sans: String,

    /// Optional output file for the TB.
    #[arg(long = "outFile")]
    out_file: Option<PathBuf>,

    /// Specify the verbosity level. E.g. --verbose 1 shows PVs for all
    /// legal moves, and --verbose 2 also links to chessdb.cn.
    #[arg(long, default_value_t = 0)]
    verbose: u8,

    /// Number of worker threads (defaults to the available parallelism).
    #[arg(long)]
    concurrency: Option<usize>,
}

impl Cli {
    fn into_options(self) -> Options {
        Options {
            epd: self.epd,
            depth: self.depth.unwrap_or(MAX_DEPTH),
            opening_moves: self.opening_moves,
            exclude_moves: self.exclude_moves,
            exclude_sans: self.exclude_sans,
            exclude_from: self.exclude_from,
            exclude_to: self.exclude_to,
            exclude_captures: self.exclude_captures,
            exclude_captures_of: self.exclude_captures_of,
            exclude_to_attacked: self.exclude_to_attacked,
            exclude_to_capturable: self.exclude_to_capturable,
            exclude_promotion_to: self.exclude_promotion_to,
            exclude_allowing_capture: self.exclude_allowing_capture,
            exclude_allowing_from: self.exclude_allowing_from,
            exclude_allowing_to: self.exclude_allowing_to,
            exclude_allowing_moves: self.exclude_allowing_moves,
            exclude_allowing_sans: self.exclude_allowing_sans,
            out_file: self.out_file,
            verbose: self.verbose,
            concurrency: self.concurrency.unwrap_or_else(default_concurrency),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    );

    let mut options = Cli::parse().into_options();
    apply_preset_restrictions(&mut options);
    println!("Running with options {options}");

    let mut tb = match MateTb::new(&options) {
        Ok(tb) => tb,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    tb.create();
    tb.output();
    if let Some(path) = &options.out_file {
        tb.write_tb(path)?;
    }
    Ok(())
}
