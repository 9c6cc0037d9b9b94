use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position};

use matetb::pack::{short_fen, PackedBoard};

fn position(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .unwrap()
        .into_position(CastlingMode::Standard)
        .unwrap()
}

fn assert_roundtrip(fen: &str) {
    let pos = position(fen);
    let unpacked = PackedBoard::pack(&pos).unpack();
    assert_eq!(short_fen(&unpacked), short_fen(&pos), "placement for {fen}");
    assert_eq!(unpacked.turn(), pos.turn(), "turn for {fen}");
    assert_eq!(unpacked.halfmoves(), pos.halfmoves(), "clock for {fen}");
    assert_eq!(
        unpacked.castles().castling_rights(),
        pos.castles().castling_rights(),
        "castling for {fen}"
    );
    assert_eq!(
        unpacked.ep_square(EnPassantMode::Always),
        pos.ep_square(EnPassantMode::Always),
        "en passant for {fen}"
    );
    assert_eq!(
        unpacked.legal_moves().len(),
        pos.legal_moves().len(),
        "move count for {fen}"
    );
}

#[test]
fn endgame_positions_roundtrip() {
    assert_roundtrip("8/8/7p/5K1k/R7/8/8/8 w - - 0 1");
    assert_roundtrip("8/8/8/1p6/6k1/1p2Q3/p1p1p3/rbrbK3 w - - 0 1");
    assert_roundtrip("k7/2Q5/8/2p5/1pp5/1pp5/prp5/nbK5 w - - 37 54");
    assert_roundtrip("8/8/7p/5K1k/R7/8/8/8 b - - 13 9");
}

#[test]
fn castling_rights_roundtrip() {
    assert_roundtrip("rnbqkbnr/ppp1pppp/8/8/8/8/PP3PPP/RNBQKBNR w KQkq - 0 4");
    assert_roundtrip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 4 20");
    assert_roundtrip("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 20");
}

#[test]
fn en_passant_squares_roundtrip_for_both_sides() {
    assert_roundtrip("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PP3PPP/RNBQKBNR b KQkq e3 0 3");
    assert_roundtrip("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
}

#[test]
fn positions_differing_only_in_the_clock_are_distinct_nodes() {
    let a = position("8/8/7p/5K1k/R7/8/8/8 w - - 0 1");
    let b = position("8/8/7p/5K1k/R7/8/8/8 w - - 1 1");
    assert_ne!(PackedBoard::pack(&a), PackedBoard::pack(&b));
    assert_eq!(PackedBoard::pack(&a).unpack().halfmoves(), 0);
    assert_eq!(PackedBoard::pack(&b).unpack().halfmoves(), 1);
}

#[test]
fn the_en_passant_square_is_part_of_the_node_identity() {
    let with_ep = position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let without_ep = position("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2");
    assert_ne!(PackedBoard::pack(&with_ep), PackedBoard::pack(&without_ep));
}

#[test]
fn packing_reaches_every_position_of_a_real_line() {
    // Replay a short line and check the codec at every step.
    let mut pos = position("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PP3PPP/RNBQKBNR b KQkq e3 0 3");
    for _ in 0..6 {
        assert_roundtrip(&format!(
            "{} {} 1",
            short_fen(&pos),
            pos.halfmoves()
        ));
        let m = pos.legal_moves()[0].clone();
        pos.play_unchecked(&m);
    }
}
