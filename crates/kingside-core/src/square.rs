//! Board squares in little-endian rank-file order.

use std::fmt;

/// A square on the board. Index = rank * 8 + file, so a1 = 0 and h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

macro_rules! rank_squares {
    ($rank:literal: $a:ident $b:ident $c:ident $d:ident $e:ident $f:ident $g:ident $h:ident) => {
        pub const $a: Square = Square($rank * 8);
        pub const $b: Square = Square($rank * 8 + 1);
        pub const $c: Square = Square($rank * 8 + 2);
        pub const $d: Square = Square($rank * 8 + 3);
        pub const $e: Square = Square($rank * 8 + 4);
        pub const $f: Square = Square($rank * 8 + 5);
        pub const $g: Square = Square($rank * 8 + 6);
        pub const $h: Square = Square($rank * 8 + 7);
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    rank_squares!(0: A1 B1 C1 D1 E1 F1 G1 H1);
    rank_squares!(1: A2 B2 C2 D2 E2 F2 G2 H2);
    rank_squares!(2: A3 B3 C3 D3 E3 F3 G3 H3);
    rank_squares!(3: A4 B4 C4 D4 E4 F4 G4 H4);
    rank_squares!(4: A5 B5 C5 D5 E5 F5 G5 H5);
    rank_squares!(5: A6 B6 C6 D6 E6 F6 G6 H6);
    rank_squares!(6: A7 B7 C7 D7 E7 F7 G7 H7);
    rank_squares!(7: A8 B8 C8 D8 E8 F8 G8 H8);

    /// Create a square from zero-based file and rank, or `None` off the board.
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, or `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        match s.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Square::from_coords(file - b'a', rank - b'1')
            }
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based file (0 = a).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Zero-based rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// Rank digit, `'1'..='8'`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// The square `df` files and `dr` ranks away, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Iterate a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
