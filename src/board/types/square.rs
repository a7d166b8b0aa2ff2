//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceId;
use crate::board::error::SquareError;

/// A square on the chess board, stored as its index (a1=0, b1=1, ..., h8=63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Signed-coordinate lookup; anything off the board is `None`
    #[must_use]
    pub fn from_coords(file: i32, rank: i32) -> Option<Self> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Index constructor for arena loops; wraps into 0-63
    #[inline]
    #[must_use]
    pub(crate) const fn from_index_masked(idx: usize) -> Self {
        Square((idx % 64) as u8)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a file/rank delta, `None` when the step leaves the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Square::from_coords(
            i32::from(self.file()) + i32::from(d_file),
            i32::from(self.rank()) + i32::from(d_rank),
        )
    }

    /// Background shade; a1 is dark
    #[inline]
    #[must_use]
    pub const fn shade(self) -> Shade {
        if (self.file() + self.rank()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }

    /// Iterate all 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    /// Build from a `(file, rank)` pair
    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square((rank * 8 + file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Square::new(file, rank).ok_or_else(invalid)
    }
}

/// Background color tag of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shade {
    Light,
    Dark,
}

/// One slot of the board's square arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareSlot {
    pub(crate) square: Square,
    pub(crate) shade: Shade,
    pub(crate) occupier: Option<PieceId>,
}

impl SquareSlot {
    pub(crate) const fn vacant(square: Square) -> Self {
        SquareSlot {
            square,
            shade: square.shade(),
            occupier: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn shade(&self) -> Shade {
        self.shade
    }

    #[inline]
    #[must_use]
    pub const fn occupier(&self) -> Option<PieceId> {
        self.occupier
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupier.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert!(Square::from_coords(-1, 3).is_none());
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn test_square_notation() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn test_square_offset() {
        let a1 = Square::new(0, 0).unwrap();
        assert_eq!(a1.offset(1, 2), Square::new(1, 2));
        assert_eq!(a1.offset(-1, 0), None);
        let h8 = Square::new(7, 7).unwrap();
        assert_eq!(h8.offset(0, 1), None);
    }

    #[test]
    fn test_square_shades() {
        assert_eq!("a1".parse::<Square>().unwrap().shade(), Shade::Dark);
        assert_eq!("h1".parse::<Square>().unwrap().shade(), Shade::Light);
        assert_eq!("d1".parse::<Square>().unwrap().shade(), Shade::Light);
        assert_eq!("e1".parse::<Square>().unwrap().shade(), Shade::Dark);
    }

    #[test]
    fn test_try_from_pair() {
        assert_eq!(Square::try_from((4, 3)), Ok(Square::new(4, 3).unwrap()));
        assert_eq!(
            Square::try_from((9, 0)),
            Err(SquareError::FileOutOfBounds { file: 9 })
        );
        assert_eq!(
            Square::try_from((0, 8)),
            Err(SquareError::RankOutOfBounds { rank: 8 })
        );
    }
}
