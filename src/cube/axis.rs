//! The three coordinate axes of the cube, and quarter turns of positions about them.

use super::Vector;

/// An axis of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    /// The B-G axis
    X,
    /// The Y-W axis
    Y,
    /// The O-R axis
    Z,
}

impl Axis {
    /// All three axes, in coordinate order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl Vector {
    /// The coordinate of this vector along the given axis.
    pub fn component(self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Rotate a quarter turn about `axis`, clockwise when looking at the side of the cube the
    /// vector lies on. The coordinate along the axis is kept; the other two are swapped and one of
    /// them negated, depending on which side of the cube the vector is on.
    pub fn quarter_turn(self, axis: Axis) -> Vector {
        let Vector { x, y, z } = self;
        let e = if self.component(axis) > 0 { 1 } else { -1 };
        match axis {
            Axis::X => Vector::new(x, e * z, -e * y),
            Axis::Y => Vector::new(-e * z, y, e * x),
            Axis::Z => Vector::new(e * y, -e * x, z),
        }
    }
}
