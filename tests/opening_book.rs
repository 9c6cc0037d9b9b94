use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Position};

use matetb::book::OpeningBook;
use matetb::config::ConfigError;
use matetb::pack::short_fen;

fn position(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .unwrap()
        .into_position(CastlingMode::Standard)
        .unwrap()
}

// White: Kf5, Ra4. Black: Kh5, pawn h7.
const ROOT: &str = "8/7p/8/5K1k/R7/8/8/8 w - -";

fn build(lines: &str) -> Result<OpeningBook, ConfigError> {
    let root = position(ROOT);
    OpeningBook::build(&root, ROOT, Color::White, lines, 0)
}

#[test]
fn plain_lines_record_only_the_mating_side_moves() {
    let book = build("a4a8 h5h4 a8a1").unwrap();
    assert_eq!(book.len(), 2);

    let root = position(ROOT);
    assert_eq!(book.lookup(&short_fen(&root)), Some("a4a8"));

    let mut pos = root.clone();
    for uci in ["a4a8", "h5h4"] {
        let m = uci
            .parse::<shakmaty::uci::UciMove>()
            .unwrap()
            .to_move(&pos)
            .unwrap();
        pos.play_unchecked(&m);
    }
    assert_eq!(book.lookup(&short_fen(&pos)), Some("a8a1"));
}

#[test]
fn a_wildcard_expands_over_every_legal_defender_reply() {
    // After a4a8 black has Kh4, Kh6 and h7h6: three expanded lines, each
    // forcing a8a1 on the move after the reply.
    let book = build("a4a8 * a8a1").unwrap();
    // Root entry plus one entry per distinct reply position.
    assert_eq!(book.len(), 4);

    let root = position(ROOT);
    for reply in ["h5h4", "h5h6", "h7h6"] {
        let mut pos = root.clone();
        for uci in ["a4a8", reply] {
            let m = uci
                .parse::<shakmaty::uci::UciMove>()
                .unwrap()
                .to_move(&pos)
                .unwrap();
            pos.play_unchecked(&m);
        }
        assert_eq!(book.lookup(&short_fen(&pos)), Some("a8a1"));
    }
}

#[test]
fn explicit_lines_take_precedence_over_wildcard_expansion() {
    // The explicit continuation after h5h4 must survive; the wildcard may
    // not add a conflicting a8a1 for the same reply.
    let book = build("a4a8 h5h4 a8h8, a4a8 * a8a1").unwrap();

    let root = position(ROOT);
    let mut pos = root.clone();
    for uci in ["a4a8", "h5h4"] {
        let m = uci
            .parse::<shakmaty::uci::UciMove>()
            .unwrap()
            .to_move(&pos)
            .unwrap();
        pos.play_unchecked(&m);
    }
    assert_eq!(book.lookup(&short_fen(&pos)), Some("a8h8"));
}

#[test]
fn conflicting_moves_for_the_same_position_fail() {
    assert!(matches!(
        build("a4a8, a4a1"),
        Err(ConfigError::BookConflict { .. })
    ));
}

#[test]
fn illegal_and_malformed_book_moves_fail() {
    assert!(matches!(
        build("a4e8"),
        Err(ConfigError::BookIllegalMove { .. })
    ));
    assert!(matches!(
        build("not-a-move"),
        Err(ConfigError::BookIllegalMove { .. })
    ));
}

#[test]
fn more_than_one_wildcard_in_a_line_fails() {
    assert!(matches!(
        build("a4a8 * a8a1 * a1a4"),
        Err(ConfigError::BookWildcards { .. })
    ));
}
