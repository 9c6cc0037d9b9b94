//! The tablebase driver: configuration, the three build phases, and the
//! user-facing reports.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use shakmaty::{Chess, Color, Position};

use crate::arena::expand::expand;
use crate::arena::graph::connect_children;
use crate::arena::store::PositionStore;
use crate::arena::{Node, NodeIndex, Score};
use crate::book::OpeningBook;
use crate::config::{parse_root, ConfigError, Options};
use crate::laws::MoveLaws;
use crate::pack::PackedBoard;
use crate::report::{self, RootMove};
use crate::solve::solve;

/// A mate tablebase for one root position under one restriction set.
///
/// [`MateTb::new`] validates the whole configuration; [`MateTb::create`]
/// runs enumeration, graph building and relaxation. After that the table
/// is frozen and can be probed, reported, and written out.
pub struct MateTb {
    root: Chess,
    root_fen: String,
    mating_side: Color,
    laws: MoveLaws,
    book: OpeningBook,
    max_depth: u32,
    verbose: u8,
    workers: usize,
    store: PositionStore,
    keys: Vec<PackedBoard>,
    nodes: Vec<Node>,
}

impl MateTb {
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        let root = parse_root(&options.epd)?;
        println!(
            "Restrict moves for {} side.",
            match root.mating_side {
                Color::White => "WHITE",
                Color::Black => "BLACK",
            }
        );

        let laws = MoveLaws::from_options(options, root.mating_side)?;

        let book = if options.opening_moves.is_empty() {
            OpeningBook::default()
        } else {
            println!("Preparing the opening book ...");
            let book = OpeningBook::build(
                &root.position,
                &root.short_fen,
                root.mating_side,
                &options.opening_moves,
                options.verbose,
            )?;
            println!(
                "Done. The opening book contains {} positions/moves.",
                book.len()
            );
            if options.verbose >= 4 {
                println!("Opening book: {}", book.dump());
            }
            book
        };

        let workers = options.concurrency.max(1);
        log::info!("using {workers} worker threads");

        Ok(Self {
            root: root.position,
            root_fen: root.short_fen,
            mating_side: root.mating_side,
            laws,
            book,
            max_depth: options.depth,
            verbose: options.verbose,
            workers,
            store: PositionStore::new(),
            keys: Vec::new(),
            nodes: Vec::new(),
        })
    }

    /// Run all three phases: enumerate, connect, relax.
    pub fn create(&mut self) {
        self.initialize();
        self.connect();
        self.generate();
    }

    /// Enumerate the restricted game tree and seed the terminal mates.
    fn initialize(&mut self) {
        let tic = Instant::now();
        println!("Create the allowed part of the game tree ...");
        let expansion = expand(
            &self.root,
            &self.laws,
            &self.book,
            self.max_depth,
            self.workers,
            self.verbose,
        );
        println!(
            "Found {} positions to depth {} in {:.2}s  ",
            expansion.store.len(),
            expansion.depth_reached,
            tic.elapsed().as_secs_f64()
        );

        print!("Seed the mate scores ...\r");
        io::stdout().flush().ok();
        self.store = expansion.store;
        self.keys = expansion.keys;
        self.nodes = std::iter::repeat_with(Node::default)
            .take(self.store.len())
            .collect();
        for (key, score) in &expansion.terminal_mates {
            let index = self.store.get(key).expect("terminal mate was enumerated");
            *self.nodes[index as usize].score.get_mut() = *score;
        }
        log::debug!(
            "seeded {} terminal mates among {} nodes",
            expansion.terminal_mates.len(),
            self.nodes.len()
        );
    }

    /// Fill every non-terminal node's child-index list.
    fn connect(&mut self) {
        let tic = Instant::now();
        println!("Connect child nodes ... ");
        connect_children(&mut self.nodes, &self.keys, &self.store, self.workers);
        println!(
            "Connected {} positions in {:.2}s",
            self.nodes.len(),
            tic.elapsed().as_secs_f64()
        );
    }

    /// Relax scores to the fixed point.
    fn generate(&mut self) {
        let tic = Instant::now();
        println!("Generate tablebase ...");
        let iterations = solve(&self.nodes, self.workers);
        println!(
            "Tablebase generated with {} iterations in {:.2}s",
            iterations,
            tic.elapsed().as_secs_f64()
        );
    }

    /// All legal root moves with transformed scores and PVs, best first.
    pub fn root_moves(&self) -> Vec<RootMove> {
        report::root_moves(&self.store, &self.nodes, &self.root, self.mating_side)
    }

    /// Print the Matetrack result (and MultiPV at higher verbosity).
    pub fn output(&self) {
        report::print_report(
            &self.root_fen,
            &self.root_moves(),
            self.root.is_checkmate(),
            self.verbose,
        );
    }

    /// Write the position-to-score table to `path`.
    pub fn write_tb(&self, path: &Path) -> io::Result<()> {
        report::write_tb(path, &self.keys, &self.nodes)?;
        println!("Wrote TB to {}.", path.display());
        Ok(())
    }

    /// Table score of an arbitrary position.
    pub fn probe(&self, pos: &Chess) -> Score {
        report::probe(&self.store, &self.nodes, pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn mating_side(&self) -> Color {
        self.mating_side
    }

    pub fn score(&self, index: NodeIndex) -> Score {
        self.nodes[index as usize]
            .score
            .load(std::sync::atomic::Ordering::Relaxed)
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        &self.nodes[index as usize].children
    }

    /// Visit every `(key, index)` pair of the store.
    pub fn for_each_entry(&self, f: impl FnMut(&PackedBoard, NodeIndex)) {
        self.store.for_each(f);
    }
}
