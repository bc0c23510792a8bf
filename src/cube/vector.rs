use std::ops::Add;

/// A position or direction on the cube, with each coordinate in -1, 0 or 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Vector {
    /// Create a vector from its coordinates.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Vector { x, y, z }
    }

    /// The number of nonzero coordinates. Corners have rank 3, edges rank 2 and face centres
    /// rank 1.
    pub fn rank(self) -> usize {
        self.coords().iter().filter(|&&c| c != 0).count()
    }

    /// The dot product of two vectors.
    pub fn dot(self, other: Vector) -> i8 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The coordinates as an array.
    pub fn coords(self) -> [i8; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}
