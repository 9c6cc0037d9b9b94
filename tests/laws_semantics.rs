use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Move, Position};

use matetb::config::Options;
use matetb::laws::MoveLaws;

fn position(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .unwrap()
        .into_position(CastlingMode::Standard)
        .unwrap()
}

fn mv(pos: &Chess, uci: &str) -> Move {
    uci.parse::<UciMove>().unwrap().to_move(pos).unwrap()
}

fn laws(options: Options) -> MoveLaws {
    MoveLaws::from_options(&options, Color::White).unwrap()
}

// White: Kf5, Ra4. Black: Kh5, pawn h6.
const ROOK_STUDY: &str = "8/8/7p/5K1k/R7/8/8/8 w - -";

#[test]
fn without_restrictions_every_legal_move_is_allowed() {
    let pos = position(ROOK_STUDY);
    let laws = laws(Options::default());
    for m in pos.legal_moves() {
        assert!(laws.allows(&pos, &m));
    }
}

#[test]
fn the_defender_is_never_restricted() {
    // Black to move; the filters name black's squares and moves, but the
    // laws only bind the mating side (white here).
    let pos = position("8/8/7p/5K1k/7R/8/8/8 b - -");
    let laws = laws(Options {
        exclude_from: "h5 h6".to_string(),
        exclude_to: "g6 h7".to_string(),
        exclude_moves: "h5g6".to_string(),
        exclude_captures: true,
        ..Options::default()
    });
    for m in pos.legal_moves() {
        assert!(laws.allows(&pos, &m));
    }
}

#[test]
fn uci_san_from_and_to_exclusions_reject_exactly_their_moves() {
    let pos = position(ROOK_STUDY);

    let by_uci = laws(Options {
        exclude_moves: "a4a1 f5e5".to_string(),
        ..Options::default()
    });
    assert!(!by_uci.allows(&pos, &mv(&pos, "a4a1")));
    assert!(!by_uci.allows(&pos, &mv(&pos, "f5e5")));
    assert!(by_uci.allows(&pos, &mv(&pos, "a4a2")));

    let by_san = laws(Options {
        exclude_sans: "Ra1 Ke5".to_string(),
        ..Options::default()
    });
    assert!(!by_san.allows(&pos, &mv(&pos, "a4a1")));
    assert!(!by_san.allows(&pos, &mv(&pos, "f5e5")));
    assert!(by_san.allows(&pos, &mv(&pos, "a4a3")));

    let by_from = laws(Options {
        exclude_from: "a4".to_string(),
        ..Options::default()
    });
    assert!(!by_from.allows(&pos, &mv(&pos, "a4a1")));
    assert!(!by_from.allows(&pos, &mv(&pos, "a4h4")));
    assert!(by_from.allows(&pos, &mv(&pos, "f5f6")));

    let by_to = laws(Options {
        exclude_to: "a1 h4".to_string(),
        ..Options::default()
    });
    assert!(!by_to.allows(&pos, &mv(&pos, "a4a1")));
    assert!(!by_to.allows(&pos, &mv(&pos, "a4h4")));
    assert!(by_to.allows(&pos, &mv(&pos, "a4a8")));
}

#[test]
fn capture_exclusions_see_the_captured_piece_type() {
    // White: Kf5, Ra4. Black: Kh5, pawn a5, rook h4.
    let pos = position("8/8/8/p4K1k/R6r/8/8/8 w - -");

    let no_captures = laws(Options {
        exclude_captures: true,
        ..Options::default()
    });
    assert!(!no_captures.allows(&pos, &mv(&pos, "a4a5")));
    assert!(!no_captures.allows(&pos, &mv(&pos, "a4h4")));
    assert!(no_captures.allows(&pos, &mv(&pos, "a4a1")));

    let no_pawn_grabs = laws(Options {
        exclude_captures_of: "p".to_string(),
        ..Options::default()
    });
    assert!(!no_pawn_grabs.allows(&pos, &mv(&pos, "a4a5")));
    assert!(no_pawn_grabs.allows(&pos, &mv(&pos, "a4h4")));
}

#[test]
fn exclude_to_attacked_vacates_the_from_square_first() {
    // White: Ke1, Qe3. Black: Kg4, rook e8. The queen on e3 shields e2
    // from the rook; e2 counts as attacked anyway because the from-square
    // is vacated before the query.
    let pos = position("4r3/8/8/8/6k1/4Q3/8/4K3 w - -");
    let laws = laws(Options {
        exclude_to_attacked: true,
        ..Options::default()
    });
    assert!(!laws.allows(&pos, &mv(&pos, "e3e2")));
    // f4 is attacked by the black king.
    assert!(!laws.allows(&pos, &mv(&pos, "e3f4")));
    // b3 is attacked by nothing.
    assert!(laws.allows(&pos, &mv(&pos, "e3b3")));
}

#[test]
fn promotion_exclusions_only_hit_the_named_piece_types() {
    // White: Kd1, pawn g7. Black: Ka8.
    let pos = position("k7/6P1/8/8/8/8/8/3K4 w - -");
    let laws = laws(Options {
        exclude_promotion_to: "qr".to_string(),
        ..Options::default()
    });
    assert!(!laws.allows(&pos, &mv(&pos, "g7g8q")));
    assert!(!laws.allows(&pos, &mv(&pos, "g7g8r")));
    assert!(laws.allows(&pos, &mv(&pos, "g7g8b")));
    assert!(laws.allows(&pos, &mv(&pos, "g7g8n")));
    assert!(laws.allows(&pos, &mv(&pos, "d1d2")));
}

#[test]
fn exclude_to_capturable_rejects_destinations_the_defender_can_take() {
    // White: Kf5, Ra4. Black: Kh5, rook h4: anything the rook or king can
    // grab on its destination square is out.
    let pos = position("8/8/8/5K1k/R6r/8/8/8 w - -");
    let laws = laws(Options {
        exclude_to_capturable: true,
        ..Options::default()
    });
    // a4h4 captures the rook but hangs the rook to Kxh4... and h4 can be
    // recaptured by the king.
    assert!(!laws.allows(&pos, &mv(&pos, "a4h4")));
    assert!(laws.allows(&pos, &mv(&pos, "a4a8")));
}

#[test]
fn exclude_allowing_capture_rejects_moves_that_allow_any_capture() {
    // White: Kf5, Ra4. Black: Kh5, pawn h6. The undefended rook on h4 can
    // be taken by the king; on a8 nothing hangs.
    let pos = position(ROOK_STUDY);
    let laws = laws(Options {
        exclude_allowing_capture: true,
        ..Options::default()
    });
    assert!(!laws.allows(&pos, &mv(&pos, "a4h4")));
    assert!(laws.allows(&pos, &mv(&pos, "a4a8")));
}

// White: Kf5, Ra4. Black: Kh5, pawn h7. After a quiet rook move black has
// Kh4, Kh6 and the pawn push h7h6; after the checking a4h4 the only reply
// is Kxh4.
const PAWN_STUDY: &str = "8/7p/8/5K1k/R7/8/8/8 w - -";

#[test]
fn allowing_from_to_and_moves_filters_look_at_defender_replies() {
    let pos = position(PAWN_STUDY);

    let no_pawn_replies = laws(Options {
        exclude_allowing_from: "h7".to_string(),
        ..Options::default()
    });
    assert!(!no_pawn_replies.allows(&pos, &mv(&pos, "a4a8")));
    assert!(no_pawn_replies.allows(&pos, &mv(&pos, "a4h4")));

    let no_reply_to_h6 = laws(Options {
        exclude_allowing_to: "h6".to_string(),
        ..Options::default()
    });
    assert!(!no_reply_to_h6.allows(&pos, &mv(&pos, "a4a8")));
    assert!(no_reply_to_h6.allows(&pos, &mv(&pos, "a4h4")));

    let no_h7h6_reply = laws(Options {
        exclude_allowing_moves: "h7h6".to_string(),
        ..Options::default()
    });
    assert!(!no_h7h6_reply.allows(&pos, &mv(&pos, "a4a8")));
    assert!(no_h7h6_reply.allows(&pos, &mv(&pos, "a4h4")));

    let no_kh6_san_reply = laws(Options {
        exclude_allowing_sans: "Kh6".to_string(),
        ..Options::default()
    });
    assert!(!no_kh6_san_reply.allows(&pos, &mv(&pos, "a4a8")));
}
