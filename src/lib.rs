//! # matetb
//!
//! Proves an **upper bound** on the shortest forced mate for a single chess
//! position by solving a *restricted* game tree exhaustively: the mating
//! side's candidate moves are pruned by user-supplied restrictions (plus an
//! optional forced opening book), the defender keeps every legal move, and
//! the remaining subtree is scored by retrograde analysis.
//!
//! ## Architecture
//!
//! The crate is structured as layered components:
//!
//! - [`config`]: the options record, root-EPD parsing, fatal configuration errors.
//! - [`pack`]: the 24-byte packed position codec used as node identity.
//! - [`laws`]: restriction predicates over the mating side's moves.
//! - [`book`]: the forced opening-book overlay (a hit bypasses the laws).
//! - [`scenarios`]: built-in restriction presets for known study positions.
//! - [`pool`]: queue-fed task execution on scoped threads.
//! - [`arena`]: the concurrent position store, forward expansion, and the
//!   backward move graph.
//! - [`solve`]: parallel fixed-point relaxation of mate-distance scores.
//! - [`report`]: probing, PV reconstruction, result output, the TB writer.
//! - [`tb`]: the [`tb::MateTb`] driver tying the phases together.
//!
//! ## Quick start
//!
//! ```no_run
//! use matetb::config::Options;
//! use matetb::tb::MateTb;
//!
//! let mut options = Options::default();
//! matetb::scenarios::apply_preset_restrictions(&mut options);
//!
//! let mut tb = MateTb::new(&options).unwrap();
//! tb.create();
//! tb.output();
//! ```

pub mod arena;
pub mod book;
pub mod config;
pub mod laws;
pub mod pack;
pub mod pool;
pub mod report;
pub mod scenarios;
pub mod solve;
pub mod tb;
