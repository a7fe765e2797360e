use std::fmt;
use std::ops;

/// Simple (x, y) coordinate / vector in playfield space.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Pos2 {
    /// Position on the x-axis.
    pub x: f32,
    /// Position on the y-axis.
    pub y: f32,
}

impl Pos2 {
    /// Return the null vector.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Return the position's length.
    #[inline]
    pub fn length(&self) -> f32 {
        ((self.x * self.x + self.y * self.y) as f64).sqrt() as f32
    }

    /// Return the distance to another position.
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).length()
    }
}

impl ops::Sub<Pos2> for Pos2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl ops::Mul<f32> for Pos2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl fmt::Display for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
