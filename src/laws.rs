//! Move restrictions for the mating side.
//!
//! [`MoveLaws`] decides which candidate moves the mating side may play in
//! the constructed game tree; the defender always keeps every legal move.
//! The predicates mirror the command-line restriction sets and are checked
//! in a fixed order, cheapest first. Response filters (everything named
//! `allowing`) temporarily apply the candidate move and inspect all
//! defender replies.
//!
//! Positions are cloned before a candidate move is applied, so a rejected
//! move leaves the caller's board untouched.

use rustc_hash::FxHashSet;
use shakmaty::san::SanPlus;
use shakmaty::{Bitboard, CastlingMode, Chess, Color, Move, Position, Role, Square};

use crate::config::{ConfigError, Options};

/// Restriction predicates over the mating side's candidate moves.
#[derive(Debug, Clone)]
pub struct MoveLaws {
    mating_side: Color,
    exclude_uci: FxHashSet<String>,
    exclude_san: FxHashSet<String>,
    exclude_from: Bitboard,
    exclude_to: Bitboard,
    exclude_captures: bool,
    exclude_captures_of: Vec<Role>,
    exclude_to_attacked: bool,
    exclude_promotion_to: Vec<Role>,
    exclude_to_capturable: bool,
    exclude_allowing_capture: bool,
    exclude_allowing_from: Bitboard,
    exclude_allowing_to: Bitboard,
    exclude_allowing_uci: FxHashSet<String>,
    exclude_allowing_san: FxHashSet<String>,
    need_responses: bool,
}

impl MoveLaws {
    pub fn from_options(options: &Options, mating_side: Color) -> Result<Self, ConfigError> {
        let exclude_allowing_from = parse_squares(&options.exclude_allowing_from)?;
        let exclude_allowing_to = parse_squares(&options.exclude_allowing_to)?;
        let exclude_allowing_uci = parse_tokens(&options.exclude_allowing_moves);
        let exclude_allowing_san = parse_tokens(&options.exclude_allowing_sans);
        let need_responses = options.exclude_to_capturable
            || options.exclude_allowing_capture
            || exclude_allowing_from.any()
            || exclude_allowing_to.any()
            || !exclude_allowing_uci.is_empty()
            || !exclude_allowing_san.is_empty();

        Ok(Self {
            mating_side,
            exclude_uci: parse_tokens(&options.exclude_moves),
            exclude_san: parse_tokens(&options.exclude_sans),
            exclude_from: parse_squares(&options.exclude_from)?,
            exclude_to: parse_squares(&options.exclude_to)?,
            exclude_captures: options.exclude_captures,
            exclude_captures_of: parse_roles(&options.exclude_captures_of)?,
            exclude_to_attacked: options.exclude_to_attacked,
            exclude_promotion_to: parse_roles(&options.exclude_promotion_to)?,
            exclude_to_capturable: options.exclude_to_capturable,
            exclude_allowing_capture: options.exclude_allowing_capture,
            exclude_allowing_from,
            exclude_allowing_to,
            exclude_allowing_uci,
            exclude_allowing_san,
            need_responses,
        })
    }

    #[inline]
    pub fn mating_side(&self) -> Color {
        self.mating_side
    }

    /// Whether the mating side may play `m` from `pos`. Defender moves are
    /// always allowed.
    pub fn allows(&self, pos: &Chess, m: &Move) -> bool {
        if pos.turn() != self.mating_side {
            return true;
        }

        if !self.exclude_uci.is_empty() {
            let uci = m.to_uci(CastlingMode::Standard).to_string();
            if self.exclude_uci.contains(&uci) {
                return false;
            }
        }
        if !self.exclude_san.is_empty() {
            let san = SanPlus::from_move(pos.clone(), m).to_string();
            if self.exclude_san.contains(&san) {
                return false;
            }
        }
        if let Some(from) = m.from() {
            if self.exclude_from.contains(from) {
                return false;
            }
        }
        if self.exclude_to.contains(m.to()) {
            return false;
        }
        if self.exclude_captures {
            if m.is_capture() {
                return false;
            }
        } else if !self.exclude_captures_of.is_empty() {
            if let Some(victim) = m.capture() {
                if self.exclude_captures_of.contains(&victim) {
                    return false;
                }
            }
        }
        if self.exclude_to_attacked && self.destination_attacked(pos, m) {
            return false;
        }
        if let Some(promoted) = m.promotion() {
            if self.exclude_promotion_to.contains(&promoted) {
                return false;
            }
        }
        if self.need_responses && self.allows_forbidden_response(pos, m) {
            return false;
        }

        true
    }

    /// Whether the destination of `m` is attacked by the defender once the
    /// from-square is vacated. Pinned attackers count; en passant is
    /// intentionally ignored.
    fn destination_attacked(&self, pos: &Chess, m: &Move) -> bool {
        let Some(from) = m.from() else {
            return false;
        };
        let occupied = pos.board().occupied() & !Bitboard::from_square(from);
        pos.board()
            .attacks_to(m.to(), !pos.turn(), occupied)
            .any()
    }

    /// Whether any defender reply to `m` matches one of the response
    /// filters.
    fn allows_forbidden_response(&self, pos: &Chess, m: &Move) -> bool {
        let mut after = pos.clone();
        after.play_unchecked(m);
        for reply in after.legal_moves() {
            if self.exclude_to_capturable && reply.is_capture() && reply.to() == m.to() {
                return true;
            }
            if self.exclude_allowing_capture && reply.is_capture() {
                return true;
            }
            if let Some(from) = reply.from() {
                if self.exclude_allowing_from.contains(from) {
                    return true;
                }
            }
            if self.exclude_allowing_to.contains(reply.to()) {
                return true;
            }
            if !self.exclude_allowing_uci.is_empty()
                && self
                    .exclude_allowing_uci
                    .contains(&reply.to_uci(CastlingMode::Standard).to_string())
            {
                return true;
            }
            if !self.exclude_allowing_san.is_empty()
                && self
                    .exclude_allowing_san
                    .contains(&SanPlus::from_move(after.clone(), &reply).to_string())
            {
                return true;
            }
        }
        false
    }
}

fn parse_tokens(tokens: &str) -> FxHashSet<String> {
    tokens.split_whitespace().map(str::to_string).collect()
}

fn parse_squares(tokens: &str) -> Result<Bitboard, ConfigError> {
    let mut squares = Bitboard::EMPTY;
    for token in tokens.split_whitespace() {
        let sq: Square = token.parse().map_err(|_| ConfigError::UnknownSquare {
            token: token.to_string(),
        })?;
        squares |= Bitboard::from_square(sq);
    }
    Ok(squares)
}

fn parse_roles(symbols: &str) -> Result<Vec<Role>, ConfigError> {
    symbols
        .chars()
        .map(|c| {
            Role::from_char(c).ok_or(ConfigError::UnknownPiece {
                token: c.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_filter_tokens_are_configuration_errors() {
        assert!(matches!(
            parse_squares("e4 z9"),
            Err(ConfigError::UnknownSquare { .. })
        ));
        assert!(matches!(
            parse_roles("qx"),
            Err(ConfigError::UnknownPiece { .. })
        ));
    }
}
