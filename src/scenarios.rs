//! Built-in restriction presets for known study positions.
//!
//! When the user supplies no restriction or opening option, the root EPD
//! is looked up here and, on a hit, the preset fills in the restriction
//! set (and sometimes a depth) that is known to prove the study's mate.
//! This is a data asset: the entries are keyed on the exact four-token
//! EPD.

use crate::config::{Options, MAX_DEPTH};

fn warn_engine_needed() {
    println!("\n!! WARNING: An engine may be needed (not implemented yet).\n");
}

/// Fill in the preset restrictions for a known root EPD. Does nothing if
/// any restriction or opening option is already set, or if the EPD is
/// unknown.
pub fn apply_preset_restrictions(options: &mut Options) {
    if options.has_restrictions() {
        return;
    }

    let epd: String = options
        .epd
        .split_whitespace()
        .take(4)
        .collect::<Vec<_>>()
        .join(" ");

    match epd.as_str() {
        // bm #6
        "8/8/7p/5K1k/R7/8/8/8 w - -" => {
            options.exclude_allowing_capture = true;
            options.exclude_allowing_moves = "h2h1q".into();
            if options.depth == MAX_DEPTH {
                options.depth = 11;
            }
        }
        // bm #7
        "8/4p2p/8/8/8/8/6p1/2B1K1kb w - -" => {
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "g1".into();
            options.exclude_allowing_moves = "e6e5 e5e4".into();
        }
        // bm #7
        "8/8/7P/8/pp6/kp6/1p6/1Kb5 w - -" => {
            options.exclude_from = "b1".into();
            options.exclude_captures = true;
            options.exclude_promotion_to = "qrb".into();
            options.exclude_to_capturable = true;
        }
        // bm #7 both
        "8/6Q1/8/7k/8/6p1/6p1/6Kb w - -" | "8/8/8/8/Q7/5kp1/6p1/6Kb w - -" => {
            options.exclude_from = "g1".into();
            options.exclude_to_capturable = true;
            if options.depth == MAX_DEPTH {
                options.depth = 13;
            }
        }
        // bm #8
        "8/3Q4/8/1r6/kp6/bp6/1p6/1K6 w - -" => {
            options.exclude_from = "b1".into();
            options.exclude_to = "b3".into();
            options.exclude_to_capturable = true;
            if options.depth == MAX_DEPTH {
                options.depth = 15;
            }
        }
        // bm #11
        "k7/2Q5/8/2p5/1pp5/1pp5/prp5/nbK5 w - -" => {
            options.exclude_from = "c1".into();
            options.exclude_to = "b2".into();
            options.exclude_to_capturable = true;
        }
        // bm #12
        "8/2P5/8/8/8/1p2k1p1/1p1pppp1/1Kbrqbrn w - -" => {
            options.opening_moves = "c7c8q".into();
            options.exclude_from = "b1".into();
            options.exclude_to_capturable = true;
        }
        // bm #13
        "8/8/1p6/1p6/1p6/1p6/pppbK3/rbk3N1 w - -" => {
            options.exclude_from = "e2".into();
            options.exclude_to_capturable = true;
        }
        // bm #7, bm #15
        "8/8/8/6r1/8/6B1/p1p5/k1Kb4 w - -" | "k7/8/1Qp5/2p5/2p5/6p1/2p1ppp1/2Kbrqrn w - -" => {
            options.exclude_from = "c1".into();
            options.exclude_to_capturable = true;
        }
        // bm #15
        "8/8/8/2p5/1pp5/brpp4/1pprp2P/qnkbK3 w - -" => {
            options.exclude_from = "e1".into();
            options.exclude_promotion_to = "qrb".into();
            options.exclude_to_capturable = true;
        }
        // bm #15
        "4k3/6Q1/8/8/5p2/1p1p1p2/1ppp1p2/nrqrbK2 w - -" => {
            options.exclude_from = "f1".into();
            options.exclude_to_capturable = true;
        }
        // bm #16
        "8/8/8/2p5/1pp5/brpp4/qpprp2P/1nkbnK2 w - -" => {
            options.opening_moves = "f1e1".into();
            options.exclude_from = "e1".into();
            options.exclude_promotion_to = "qrb".into();
            options.exclude_to_capturable = true;
        }
        // bm #16
        "8/8/8/2p5/1pp5/brpp4/qpprpK1P/1nkbn3 w - -" => {
            options.opening_moves = "f2e1".into();
            options.exclude_from = "e1".into();
            options.exclude_promotion_to = "qrb".into();
            options.exclude_to_capturable = true;
        }
        // bm #18
        "8/p7/8/8/8/3p1b2/pp1K1N2/qk6 w - -" => {
            options.exclude_from = "d2".into();
            options.exclude_to_capturable = true;
        }
        // bm #26
        "k7/8/1Q6/8/8/6p1/1p1pppp1/1Kbrqbrn w - -" => {
            options.exclude_from = "b1".into();
            options.exclude_to_capturable = true;
        }
        // bm #26, bm #28
        "8/8/2p5/2p5/p1p5/rbp5/p1p2Q2/n1K4k w - -"
        | "8/2p5/2p5/8/p1p5/rbp5/p1p2Q2/n1K4k w - -" => {
            options.exclude_from = "c1".into();
            options.exclude_to = "a3 c3".into();
            options.exclude_to_capturable = true;
        }
        // bm #17, bm #18, bm #30
        "4k3/6Q1/8/5p2/5p2/1p3p2/1ppp1p2/nrqrbK2 w - -"
        | "4k3/6Q1/8/8/8/1p3p2/1ppp1p2/nrqrbK2 w - -"
        | "8/7p/4k3/5p2/3Q1p2/5p2/5p1p/5Kbr w - -" => {
            options.exclude_from = "f1".into();
            options.exclude_to = "h1".into();
            options.exclude_to_capturable = true;
        }
        // bm #9 .. bm #34, all queen-vs-fortress studies with the king on d1
        "8/8/8/8/6k1/8/2Qp1pp1/3Kbrrb w - -"
        | "8/3Q4/8/2kp4/8/1p1p4/pp1p4/rrbK4 w - -"
        | "8/8/8/6k1/3Q4/8/3p1pp1/3Kbrrb w - -"
        | "k7/8/8/2Q5/3p4/1p1p4/pp1p4/rrbK4 w - -"
        | "7k/8/8/8/8/5Qp1/3p1pp1/3Kbrrn w - -"
        | "6k1/8/5Q2/8/8/8/3p1pp1/3Kbrrb w - -"
        | "4Q3/6k1/8/8/8/8/3p1pp1/3Kbrrb w - -"
        | "5k2/8/4Q3/8/8/8/3p1pp1/3Kbrrb w - -"
        | "6k1/8/8/8/8/3Q4/3p1pp1/3Kbrrb w - -"
        | "8/8/8/1p6/1k6/3Q4/pp1p4/rrbK4 w - -"
        | "4k3/8/3Q4/8/8/8/3p1pp1/3Kbrrb w - -"
        | "4k3/2Q5/8/8/8/8/3p1pp1/3Kbrrb w - -"
        | "8/8/8/8/1Q6/3k4/3p1pp1/3Kbrrb w - -"
        | "8/8/6k1/Q7/8/8/3p1pp1/3Kbrrb w - -"
        | "8/8/2k5/8/3p4/Qp1p4/pp1p4/rrbK4 w - -"
        | "8/3k4/3p1Q2/8/8/1p1p4/pp1p4/rrbK4 w - -"
        | "8/1p6/1Q6/8/2kp4/3p4/pp1p4/rrbK4 w - -"
        | "8/6p1/4Q3/6k1/8/8/3p1pp1/3Kbrrb w - -"
        | "2k5/3p4/1Q6/8/8/1p1p4/pp1p4/rrbK4 w - -"
        | "4k3/3p4/5Q2/8/8/1p1p4/pp1p4/rrbK4 w - -"
        | "3Q4/8/8/8/k7/8/3p1pp1/3Kbrrb w - -"
        | "8/2Q5/8/8/1k1p4/4p1p1/3prpp1/3Kbbrn w - -" => {
            options.exclude_from = "d1".into();
            options.exclude_allowing_capture = true;
        }
        // bm #-35, bm #36
        "8/8/8/1p6/6k1/1Q6/p1p1p3/rbrbK3 b - -"
        | "8/8/8/1p6/6k1/1p2Q3/p1p1p3/rbrbK3 w - -" => {
            options.exclude_from = "e1".into();
            options.exclude_to = "a1 c1".into();
            options.exclude_to_attacked = true;
        }
        // bm #43
        "7k/8/5p2/8/8/8/P1Kp1pp1/4brrb w - -" => {
            options.opening_moves = "c2d1".into();
            options.exclude_from = "d1".into();
            options.exclude_to_attacked = true;
        }
        // bm #46
        "8/1p6/8/3p3k/3p4/6Q1/pp1p4/rrbK4 w - -" => {
            options.exclude_from = "d1".into();
            options.exclude_captures = true;
            options.exclude_to_attacked = true;
        }
        // bm #12 .. bm #50
        "6Q1/8/7k/8/8/6p1/4p1pb/4Kbrr w - -"
        | "2Q5/k7/8/8/8/8/1pp1p3/brrbK3 w - -"
        | "8/8/3p4/1Q6/8/2k5/ppp1p3/brrbK3 w - -"
        | "8/1p2k3/8/8/5Q2/8/ppp1p3/qrrbK3 w - -"
        | "8/1p2k3/8/8/5Q2/8/ppp1p3/bqrbK3 w - -" => {
            options.exclude_from = "e1".into();
            options.exclude_allowing_capture = true;
        }
        // bm #54
        "8/7p/7p/7p/1p3Q1p/1Kp5/nppr4/qrk5 w - -" => {
            options.exclude_from = "b3".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "b1 h1".into();
            options.exclude_allowing_moves = "c3c2".into();
        }
        // bm #56, bm #57
        "8/1p6/4k3/8/3p1Q2/3p4/pp1p4/rrbK4 w - -"
        | "8/6pp/5p2/k7/3p4/1Q2p3/3prpp1/3Kbqrb w - -" => {
            options.exclude_from = "d1".into();
            options.exclude_to_attacked = true;
        }
        // bm #60 (finds #62)
        "5Q2/p1p5/p1p5/6rp/7k/6p1/p1p3P1/rbK5 w - -" => {
            options.exclude_from = "c1 g2".into();
            options.exclude_to = "a1 g3".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "h5".into();
        }
        // bm #20, bm #32, bm #69
        "4R3/1n1p4/3n4/8/8/p4p2/7p/5K1k w - -"
        | "4R3/1n1p1p2/3n4/8/8/p4p2/7p/5K1k w - -"
        | "4R3/pn1p1p1p/p2n4/8/8/p4p2/7p/5K1k w - -" => {
            options.opening_moves =
                "e8e1 d6e4 e1e4 f3f2 f1f2 * e4e1, e8e1 d6e4 e1e4 * e4e1, e8e1 * f1f2".into();
            options.exclude_sans = "Ra2 Ra3 Ra4 Ra5 Ra6 Ra7 Ra8 \
                                    Rb2 Rb3 Rb4 Rb5 Rb6 Rb7 Rb8 \
                                    Rc2 Rc3 Rc4 Rc5 Rc6 Rc7 Rc8 \
                                    Rd2 Rd3 Rd4 Rd5 Rd6 Rd7 Rd8 \
                                    Re2 Re3 Re4 Re5 Re6 Re7 Re8 \
                                    Rf2 Rf3 Rf4 Rf5 Rf6 Rf7 Rf8 \
                                    Rg2 Rg3 Rg4 Rg5 Rg6 Rg7 Rg8 \
                                    Rh2 Rh3 Rh4 Rh5 Rh6 Rh7 Rh8"
                .into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "a1 d1 f1 h1".into();
        }
        // bm #72
        "8/1p4Pp/1p6/1p6/1p5p/5r1k/5p1p/5Kbr w - -" => {
            options.opening_moves = "g7g8q".into();
            options.exclude_from = "f1".into();
            options.exclude_to = "h1".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "b3 h5 h4".into();
        }
        // bm #19, bm #77
        "8/6Pp/8/8/7p/5r2/4Kpkp/6br w - -" | "8/1p4Pp/1p6/1p6/1p5p/5r2/4Kpkp/6br w - -" => {
            options.opening_moves = "g7g8q g2h3 e2f1, g7g8q f3g3 g8d5 g3f3 d5f3, \
                                     g7g8q f3g3 g8d5 g2h3 d5e6 g3g4 e2f1, \
                                     g7g8q f3g3 g8d5 g2h3 d5e6 h3g2 e6e4 g3f3 e4f3, \
                                     g7g8q f3g3 g8d5 g2h3 d5e6 h3g2 e6e4 g2h3 e2f1"
                .into();
            options.exclude_from = "f1".into();
            options.exclude_to = "h1".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "b3 h5 h4".into();
        }
        // bm #7, bm #27, bm #87
        "8/8/8/8/NK6/1B1N4/2rpn1pp/2bk1brq w - -"
        | "8/7p/8/8/NK6/1B1N4/2rpn1pp/2bk1brq w - -"
        | "8/5ppp/5p2/8/NK6/1B1N4/2rpn1pp/2bk1brq w - -" => {
            options.exclude_sans = "Nb6 Nb5 Nc4".into();
            options.exclude_from = "a4 b3 d3".into();
            options.exclude_allowing_capture = true;
            warn_engine_needed();
        }
        // bm #10, bm #28, bm #48, bm #93
        "8/5P2/8/8/8/n7/1pppp2K/br1r1kn1 w - -"
        | "8/3p1P2/8/8/8/n7/1pppp2K/br1r1kn1 w - -"
        | "8/2pp1P2/8/8/8/n7/1pppp2K/br1r1kn1 w - -"
        | "8/pppp1P2/8/8/8/n7/1pppp2K/br1r1kn1 w - -" => {
            options.opening_moves = "f7f8q g1f3 f8f3 f1e1 f3g3 e1f1 g3g1, \
                 f7f8q f1e1 f8a3 g1f3 a3f3 * f3g3 e1f1 g3g1, \
                 f7f8q f1e1 f8a3 g1h3 a3h3 e1f2 h3g3 f2f1 g3g1, \
                 f7f8q f1e1 f8a3 g1h3 a3h3 * h3g3 e1f1 g3g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 g1f3 f8f3 f1e1 f3g3 e1f1 g3g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1f3 h2g3 d1c1 c5f2 e1d1 f2f3 \
                 d1e1 f3h1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1f3 h2g3 f3d4 c5d4 e1f1 d4f2, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1f3 h2g3 f3d4 c5d4 * d4g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1f3 h2g3 * c5f2, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1h3 h2h3 e1f1 c5f5 f1g1 f5g4 \
                 g1f2 g4g3 f2f1 g3g2 f1e1 g2g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1h3 h2h3 e1f1 c5f5 f1e1 f5g6 \
                 e1f2 g6g3 f2f1 g3g2 f1e1 g2g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1h3 h2h3 e1f1 c5f5 f1e1 f5g6 \
                 e1f1 g6g2 f1e1 g2g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1h3 h2h3 e1f1 c5f5 f1e1 f5g6 * \
                 g6g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 g1h3 h2h3 * c5g1, \
                 f7f8q f1e1 f8a3 e1f1 a3f8 f1e1 f8c5 * c5g1, \
                 f7f8q f1e1 f8a3 e1f2 a3g3, \
                 f7f8q f1e1 f8a3 d1c1 a3g3, \
                 f7f8q f1e1 f8a3 b1c1 a3g3, \
                 f7f8q f1e1 f8a3 * a3g3 e1f1 g3g1"
                .into();
            options.exclude_sans = "Kh1 Kg1 Kg2 Kg3 Kg4 Kh4".into();
            options.exclude_to = "b2 c2 d2 e2".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "b2 c2 d2 e2".into();
            options.exclude_allowing_sans = "Ke3 Kf3 Kh1 Kg2 Kh2".into();
        }
        // bm #3, bm #31, bm #96
        "7K/8/8/8/4n3/pp1N3p/rp2N1br/bR3n1k w - -"
        | "7K/8/8/7p/p3n3/1p1N3p/rp2N1br/bR3n1k w - -"
        | "7K/3p4/4p3/1p5p/p3n3/1p1N3p/rp2N1br/bR3n1k w - -" => {
            options.exclude_from = "d3 e2".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "b2 h2 h1".into();
            options.exclude_allowing_sans = "Be4 Bd5 Bc6 Bb7 Ba8 Bg4 Bh5".into();
            warn_engine_needed();
        }
        // bm #12, bm #34, bm #100
        "8/8/6p1/6Pb/p3P1k1/P1p1PNnr/2P1PKRp/7B w - -"
        | "8/4p3/6p1/6Pb/p3P1k1/P1p1PNnr/2P1PKRp/7B w - -"
        | "8/p1p1p3/2p3p1/6Pb/p3P1k1/P1p1PNnr/2P1PKRp/7B w - -" => {
            options.exclude_sans = "Rf2".into();
            options.exclude_from = "f3 e4".into();
            options.exclude_allowing_capture = true;
        }
        // bm #16, bm #35, bm #57, bm #101
        "n1K5/bNp5/1pP5/1k4p1/1N2pnp1/PP2p1p1/4rpP1/5B2 w - -"
        | "n1K5/bNp1p3/1pP5/1k4p1/1N3np1/PP2p1p1/4rpP1/5B2 w - -"
        | "n1K5/bNp1p1p1/1pP5/1k6/1N3np1/PP2p1p1/4rpP1/5B2 w - -"
        | "n1K5/bNp1p1p1/1pP3p1/1k2p3/1N3n2/PP4p1/4rpP1/5B2 w - -" => {
            options.exclude_from = "a3 b3 b4 b7 c6 g2".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "a8 b5 b6 c7 e2 f1 g3 g2 d3".into();
            options.exclude_to = "a8".into();
            options.exclude_to_capturable = true;
            options.exclude_moves = "f1c4 e2c4 e2d1 e2f3 e2g4 e2h5 f1g2 f1h3 d3c2 d3b1 d3e4 \
                                     d3f5 d3g6 d3h7"
                .into();
            warn_engine_needed();
        }
        // bm #4, bm #35, bm #102
        "8/8/8/3p2p1/p2np1K1/p3N1pp/rb1N2pr/k1n3Rb w - -"
        | "8/8/8/3p2p1/p2np1Kp/p3N1p1/rb1N2pr/k1n3Rb w - -"
        | "8/4p3/3p4/p5p1/3n2Kp/p3N1p1/rb1N2pr/k1n3Rb w - -" => {
            options.exclude_from = "d2 e3 g1".into();
            options.exclude_to = "g3".into();
            options.exclude_allowing_from = "a1 a2 d5".into();
            options.exclude_allowing_capture = true;
            warn_engine_needed();
        }
        // bm #5, bm #21, bm #107, bm #109 (not yet)
        "2RN1qN1/5P2/3p1P2/3P4/1K6/1p1p1pp1/1p1p1np1/bk1b2Q1 w - -"
        | "2RN1qN1/5P2/3p1P2/3P4/8/Kp1p1pp1/1p1p1np1/bk1b2Q1 w - -"
        | "3N1qN1/1Kn2P2/3p1Pp1/3P1pp1/R7/1p1p4/1p1p1n2/bk1b2Q1 w - -"
        | "3N1qN1/1Kn2P2/1Q1p1Pp1/3P1pp1/1R6/1p1p4/kp1p4/b2b3n w - -" => {
            if epd == "3N1qN1/1Kn2P2/1Q1p1Pp1/3P1pp1/1R6/1p1p4/kp1p4/b2b3n w - -" {
                options.opening_moves = "b4a4 * b6g1".into();
            }
            options.exclude_from = "d5 e7 g7 e8".into();
            options.exclude_to = "d6 a1 b2 b3 d1 d2 d3".into();
            options.exclude_sans = "Qxf2 Qxf3 Qxf4 Qxf5 Qxf6 Qxf7 Qxg8 Qxg2 Qxg3 Qxg4 Qxg5 \
                                    Qxg6 Qxg7 Qxg8 Qxh1 Qxh1+ Rb1 Rb2 Rb3 Rb4 Rb5 Rb6 Rb7 Rb8 \
                                    Rd1 Rd2 Rd3 Rd4 Rd5 Rd6 Rd7 Rd8 Re1 Re2 Re3 Re4 Re5 Re6 \
                                    Re7 Re8 Rf1 Rf2 Rf3 Rf4 Rf5 Rf6 Rf7 Rf8 Rg1 Rg2 Rg3 Rg4 \
                                    Rg5 Rg6 Rg7 Rg8 Rh1 Rh2 Rh3 Rh4 Rh5 Rh6 Rh7 Rh8"
                .into();
            options.exclude_moves = "d8e6 d8c6 d8b7 f7h8 f7h6 f7g5 f7e5 f7d6 g8f6 g8e7 h6g4 \
                                     h6f5 h6f7 f7f8n"
                .into();
            options.exclude_to_capturable = true;
            options.exclude_promotion_to = "qrb".into();
            options.exclude_allowing_from =
                "c7 a1 b2 b3 d1 d2 d3 g7 h6 f7 g8 e8 d8 e7 h8 c8 b8 a8".into();
            options.exclude_allowing_to = "f1 g1 f6 d5".into();
            options.exclude_allowing_moves = "a2a3 c2c3".into();
            options.exclude_allowing_sans = "Nxf7 Nxf6 Nxf7+ Nxf6+".into();
            warn_engine_needed();
        }
        // bm #10, bm #22, bm #120
        "8/p7/8/p7/b3Q3/K7/p1r5/rk6 w - -"
        | "8/p7/8/p7/b3Q3/K6p/p1r5/rk6 w - -"
        | "8/p6p/7p/p6p/b3Q2p/K6p/p1r5/rk6 w - -" => {
            options.exclude_from = "a3".into();
            options.exclude_to = "a1".into();
            options.exclude_allowing_capture = true;
            options.exclude_allowing_from = "a1 h1".into();
            options.exclude_allowing_sans = "Kb1 Kc2 Kd1 Kd2".into();
        }
        // bm #4, bm #26, bm #121
        "r1b5/1pKp4/pP1P4/P6B/3pn3/1P1k4/1P6/5N1N w - -"
        | "r1b5/1pKp4/pP1P4/P6B/3pn2p/1P1k4/1P6/5N1N w - -"
        | "r1b5/1pKp4/pP1P1p1p/P4p1B/3pn2p/1P1k4/1P6/5N1N w - -" => {
            options.opening_moves = "h5d1".into();
            options.exclude_from = "d1 f1 h1 b2 b3 a5 b6 d6".into();
            options.exclude_to = "c8".into();
            options.exclude_allowing_from = "d3 d4 a6 b7 c8 d7".into();
            options.exclude_allowing_to = "d1 f1 h1".into();
            warn_engine_needed();
        }
        // bm #121
        "8/1p1p4/3p2p1/5pP1/1p3P1k/1P1p1P1p/1P1P1P1K/7B w - -" => {
            options.exclude_captures = true;
            options.exclude_from = "h1".into();
            warn_engine_needed();
        }
        // bm #6, bm #9, bm #92, bm #126
        "n7/b1p1K3/1pP5/1P6/7p/1p4Pn/1P2N1br/3NRn1k w - -"
        | "n7/b1p1K3/1pP5/1P6/6pp/1p4Pn/1P2N1br/3NRn1k w - -"
        | "n7/b1p1K3/1pP5/1P4p1/6pp/1p4Pn/1P2N1br/3NRn1k w - -"
        | "n7/b1p1K3/1pP4p/1P4p1/6p1/1p4Pn/1P2N1br/3NRn1k w - -" => {
            options.exclude_from = "b2 d1 e1 b5 c6".into();
            options.exclude_to = "a8 b6 c7 b3".into();
            options.exclude_moves = "e2g1 e2c1 e2c3 e2d4 e2f4 g3h1 g3h5 g3f5 g3e4 g3f1".into();
            options.exclude_to_capturable = true;
            options.exclude_promotion_to = "qrbn".into();
            options.exclude_allowing_from = "a8 b6 c7 h2 f1".into();
            warn_engine_needed();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_epd_gets_its_preset() {
        let mut options = Options::default();
        apply_preset_restrictions(&mut options);
        assert_eq!(options.exclude_from, "e1");
        assert_eq!(options.exclude_to, "a1 c1");
        assert!(options.exclude_to_attacked);
    }

    #[test]
    fn user_restrictions_suppress_the_preset() {
        let mut options = Options {
            exclude_captures: true,
            ..Options::default()
        };
        apply_preset_restrictions(&mut options);
        assert!(options.exclude_from.is_empty());
        assert!(!options.exclude_to_attacked);
    }

    #[test]
    fn presets_never_override_an_explicit_depth() {
        let mut options = Options {
            epd: "8/8/7p/5K1k/R7/8/8/8 w - -".to_string(),
            depth: 9,
            ..Options::default()
        };
        apply_preset_restrictions(&mut options);
        assert_eq!(options.depth, 9);
        assert!(options.exclude_allowing_capture);
    }
}
