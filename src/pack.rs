//! Compact 24-byte position packing.
//!
//! A [`PackedBoard`] is the identity of a node in the game tree: two
//! positions are the same node iff their packed bytes are equal. The
//! encoding covers piece placement, side to move, castling rights, the
//! en-passant square and the halfmove clock, so positions that differ only
//! in the clock are distinct nodes (a 50-move draw is representable).
//!
//! Encoding:
//! - bytes `0..8`: occupancy bitboard, little endian
//! - bytes `8..23`: one nibble per occupied square in ascending square
//!   order (low nibble first), at most [`MAX_MEN`] men
//! - byte `23`: halfmove clock, saturated at 255
//!
//! Nibble codes:
//! - `0..=5`: white pawn, knight, bishop, rook, queen, king
//! - `6..=11`: the same for black
//! - `12`: a pawn whose double step produced the current en-passant square
//!   (its color follows from its rank)
//! - `13`: a rook with castling rights (its color follows from its rank)
//! - `14`: the black king when black is to move

use std::num::NonZeroU32;

use shakmaty::fen::Epd;
use shakmaty::{
    Bitboard, Board, CastlingMode, Chess, Color, EnPassantMode, FromSetup, Piece, Position, Rank,
    Role, Setup, Square,
};

/// Maximum number of men in a packable position.
///
/// Captures and promotions never increase the man count, so checking the
/// root position once covers the whole game tree.
pub const MAX_MEN: usize = 30;

const EP_PAWN: u8 = 12;
const CASTLE_ROOK: u8 = 13;
const BLACK_KING_TO_MOVE: u8 = 14;

/// A position packed into 24 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedBoard(pub [u8; 24]);

impl PackedBoard {
    /// Pack a position. The position must have at most [`MAX_MEN`] men.
    pub fn pack(pos: &Chess) -> PackedBoard {
        let board = pos.board();
        let occ = board.occupied();
        assert!(occ.count() <= MAX_MEN, "position has more than {MAX_MEN} men");

        let ep_square = pos.ep_square(EnPassantMode::Always);
        let castling = pos.castles().castling_rights();
        let pusher = !pos.turn();

        let mut bytes = [0u8; 24];
        bytes[..8].copy_from_slice(&u64::from(occ).to_le_bytes());

        for (i, sq) in occ.into_iter().enumerate() {
            let piece = board.piece_at(sq).expect("occupied square holds a piece");
            let code = nibble(piece, sq, ep_square, castling, pusher, pos.turn());
            if i % 2 == 0 {
                bytes[8 + i / 2] |= code;
            } else {
                bytes[8 + i / 2] |= code << 4;
            }
        }

        bytes[23] = pos.halfmoves().min(255) as u8;
        PackedBoard(bytes)
    }

    /// Unpack into a position. Inverse of [`PackedBoard::pack`] for any
    /// legal position.
    pub fn unpack(&self) -> Chess {
        let occ = Bitboard::from(u64::from_le_bytes(
            self.0[..8].try_into().expect("eight occupancy bytes"),
        ));

        let mut board = Board::empty();
        let mut castling_rights = Bitboard::EMPTY;
        let mut ep_square = None;
        let mut turn = Color::White;

        for (i, sq) in occ.into_iter().enumerate() {
            let byte = self.0[8 + i / 2];
            let code = if i % 2 == 0 { byte & 0x0f } else { byte >> 4 };
            let piece = match code {
                EP_PAWN => {
                    // Double-pushed pawns sit on the fourth or fifth rank.
                    let color = if sq.rank() == Rank::Fourth {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let behind = match color {
                        Color::White => sq.offset(-8),
                        Color::Black => sq.offset(8),
                    };
                    ep_square = Some(behind.expect("en-passant square on the board"));
                    color.pawn()
                }
                CASTLE_ROOK => {
                    castling_rights |= Bitboard::from_square(sq);
                    let color = if sq.rank() == Rank::First {
                        Color::White
                    } else {
                        Color::Black
                    };
                    color.rook()
                }
                BLACK_KING_TO_MOVE => {
                    turn = Color::Black;
                    Color::Black.king()
                }
                code if code < 6 => Piece {
                    color: Color::White,
                    role: role_from_index(code),
                },
                code => Piece {
                    color: Color::Black,
                    role: role_from_index(code - 6),
                },
            };
            board.set_piece_at(sq, piece);
        }

        let setup = Setup {
            board,
            turn,
            castling_rights,
            ep_square,
            halfmoves: u32::from(self.0[23]),
            fullmoves: NonZeroU32::new(1).expect("one is non-zero"),
            ..Setup::empty()
        };
        Chess::from_setup(setup, CastlingMode::Standard)
            .expect("packed positions decode to legal positions")
    }
}

fn nibble(
    piece: Piece,
    sq: Square,
    ep_square: Option<Square>,
    castling: Bitboard,
    pusher: Color,
    turn: Color,
) -> u8 {
    if piece.role == Role::Pawn && piece.color == pusher {
        if let Some(ep) = ep_square {
            let pawn_sq = match pusher {
                Color::White => ep.offset(8),
                Color::Black => ep.offset(-8),
            };
            if pawn_sq == Some(sq) {
                return EP_PAWN;
            }
        }
    }
    if piece.role == Role::Rook && castling.contains(sq) {
        return CASTLE_ROOK;
    }
    if piece.role == Role::King && piece.color == Color::Black && turn == Color::Black {
        return BLACK_KING_TO_MOVE;
    }
    let base = match piece.color {
        Color::White => 0,
        Color::Black => 6,
    };
    base + role_index(piece.role)
}

fn role_index(role: Role) -> u8 {
    match role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    }
}

fn role_from_index(index: u8) -> Role {
    match index {
        0 => Role::Pawn,
        1 => Role::Knight,
        2 => Role::Bishop,
        3 => Role::Rook,
        4 => Role::Queen,
        5 => Role::King,
        _ => unreachable!("nibble codes 0..=5 per side"),
    }
}

/// FEN without the halfmove and fullmove counters, as used for opening-book
/// keys and the TB file.
pub fn short_fen(pos: &Chess) -> String {
    Epd::from_setup(pos.clone().into_setup(EnPassantMode::Legal)).to_string()
}
