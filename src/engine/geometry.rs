use crate::board::Square;

/// Maps screen pixels to squares and back.
///
/// Screen row 0 is rank 8, so White sits at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    square_size: u32,
}

impl BoardGeometry {
    #[must_use]
    pub const fn new(square_size: u32) -> Self {
        BoardGeometry { square_size }
    }

    #[inline]
    #[must_use]
    pub const fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Width and height of the whole board in pixels, saturating at `u32::MAX`
    #[must_use]
    pub const fn board_size(&self) -> u32 {
        self.square_size.saturating_mul(8)
    }

    /// Square under a pixel, `None` outside the board.
    #[must_use]
    pub fn square_at(&self, x: i32, y: i32) -> Option<Square> {
        if self.square_size == 0 || x < 0 || y < 0 {
            return None;
        }
        let size = i64::from(self.square_size);
        let file = i64::from(x) / size;
        let row = i64::from(y) / size;
        if file >= 8 || row >= 8 {
            return None;
        }
        Square::from_coords(file as i32, 7 - row as i32)
    }

    /// Top-left pixel of a square.
    ///
    /// `None` when the pixel does not fit in the `i32` space `square_at`
    /// accepts.
    #[must_use]
    pub fn square_origin(&self, square: Square) -> Option<(i32, i32)> {
        let size = i32::try_from(self.square_size).ok()?;
        let x = i32::from(square.file()).checked_mul(size)?;
        let y = (7 - i32::from(square.rank())).checked_mul(size)?;
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pixel_to_square() {
        let geometry = BoardGeometry::new(100);
        assert_eq!(geometry.square_at(0, 0), Some(sq("a8")));
        assert_eq!(geometry.square_at(799, 799), Some(sq("h1")));
        assert_eq!(geometry.square_at(450, 650), Some(sq("e2")));
        assert_eq!(geometry.square_at(800, 10), None);
        assert_eq!(geometry.square_at(-1, 10), None);
        assert_eq!(geometry.square_at(10, 800), None);
    }

    #[test]
    fn test_square_origin_round_trip() {
        let geometry = BoardGeometry::new(64);
        for square in Square::all() {
            let (x, y) = geometry.square_origin(square).unwrap();
            assert_eq!(geometry.square_at(x, y), Some(square));
            assert_eq!(geometry.square_at(x + 63, y + 63), Some(square));
        }
        assert_eq!(geometry.board_size(), 512);
    }

    #[test]
    fn test_oversized_squares_have_no_origin() {
        let geometry = BoardGeometry::new(u32::MAX);
        assert_eq!(geometry.square_origin(sq("a8")), None);
        assert_eq!(geometry.square_origin(sq("h1")), None);
        assert_eq!(geometry.board_size(), u32::MAX);
        // every non-negative pixel lands in the top-left square
        assert_eq!(geometry.square_at(i32::MAX, i32::MAX), Some(sq("a8")));

        let geometry = BoardGeometry::new(1 << 29);
        assert_eq!(geometry.square_origin(sq("a8")), Some((0, 0)));
        assert_eq!(geometry.square_origin(sq("d8")), Some((3 << 29, 0)));
        assert_eq!(geometry.square_origin(sq("e8")), None);
        assert_eq!(geometry.square_origin(sq("a7")), Some((0, 1 << 29)));
        assert_eq!(geometry.square_origin(sq("a4")), None);
        assert_eq!(geometry.square_at(3 << 29, 0), Some(sq("d8")));
    }

    #[test]
    fn test_zero_size_maps_nothing() {
        assert_eq!(BoardGeometry::new(0).square_at(0, 0), None);
    }
}
