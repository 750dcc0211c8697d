//! Middlegame/endgame score pair used by the evaluator.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::eval::phase::MAX_PHASE;

/// A pair of centipawn values, one for the middlegame and one for the
/// endgame, blended by [`taper`](Score::taper) once the phase is known.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Score {
    mg: i32,
    eg: i32,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline]
    pub const fn new(mg: i32, eg: i32) -> Score {
        Score { mg, eg }
    }

    #[inline]
    pub const fn mg(self) -> i32 {
        self.mg
    }

    #[inline]
    pub const fn eg(self) -> i32 {
        self.eg
    }

    /// Interpolate between the two values: `phase == MAX_PHASE` is pure
    /// middlegame, `phase == 0` pure endgame.
    pub fn taper(self, phase: i32) -> i32 {
        let phase = phase.clamp(0, MAX_PHASE);
        (self.mg * phase + self.eg * (MAX_PHASE - phase)) / MAX_PHASE
    }
}

/// Shorthand for [`Score::new`].
#[allow(non_snake_case)]
#[inline]
pub const fn S(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        S(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        S(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        *self = *self - rhs;
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        S(-self.mg, -self.eg)
    }
}

impl Mul<i32> for Score {
    type Output = Score;

    #[inline]
    fn mul(self, rhs: i32) -> Score {
        S(self.mg * rhs, self.eg * rhs)
    }
}

impl fmt::Debug for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S({}, {})", self.mg, self.eg)
    }
}
