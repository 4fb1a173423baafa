//! Square and bitboard conversions for algebraic coordinates.
//!
//! Files `a`-`h` map to columns 0-7 and ranks `1`-`8` to rows 0-7, so
//! `index = row * 8 + column`. Save files depend on this mapping.

use crate::game_state::checkers_types::Square;

/// Convert algebraic notation (for example: "b6") to a square.
/// The file letter may be upper or lower case.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", bytes[0] as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Square::from_file_rank((file - b'a') as i8, (rank - b'1') as i8)
        .ok_or_else(|| format!("Invalid algebraic square: {square}"))
}

/// Convert algebraic notation to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> Result<u64, String> {
    Ok(algebraic_to_square(square)?.mask())
}

/// Convert a square to algebraic notation (for example: "b6").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}

/// Convert a one-hot bitboard to algebraic notation.
pub fn bitboard_to_algebraic(bitboard: u64) -> Result<String, String> {
    if bitboard.count_ones() != 1 {
        return Err(format!(
            "Bitboard must contain exactly one set bit, got {}",
            bitboard.count_ones()
        ));
    }

    Square::new(bitboard.trailing_zeros() as i32)
        .map(square_to_algebraic)
        .ok_or_else(|| "Bitboard square out of range".to_owned())
}

#[cfg(test)]
mod tests {
    use super::{
        algebraic_to_bitboard, algebraic_to_square, bitboard_to_algebraic, square_to_algebraic,
    };
    use crate::game_state::checkers_types::Square;

    #[test]
    fn corner_and_interior_squares_map_to_indices() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse").index(), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse").index(), 63);
        assert_eq!(algebraic_to_square("b6").expect("b6 should parse").index(), 41);
        assert_eq!(algebraic_to_square("B6").expect("B6 should parse").index(), 41);

        let c3 = Square::new(18).expect("on board");
        assert_eq!(square_to_algebraic(c3), "c3");
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "a", "a10", "i1", "a0", "a9", "11", "1a"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn bitboard_conversion_requires_one_hot() {
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(e4, 1u64 << 28);
        assert_eq!(bitboard_to_algebraic(e4).expect("one-hot bitboard"), "e4");
        assert!(bitboard_to_algebraic(0).is_err());
        assert!(bitboard_to_algebraic(0b11).is_err());
    }
}
