use super::{Axis, Vector};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The six face colors. A color names both the face whose centre has that color, and the
/// direction from the centre of the cube to that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Color {
    /// Orange, +z
    O,
    /// Blue, +x
    B,
    /// Yellow, +y
    Y,
    /// Green, -x
    G,
    /// White, -y
    W,
    /// Red, -z
    R,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 6] = [Color::O, Color::B, Color::Y, Color::G, Color::W, Color::R];

    /// The outward unit vector of this color's face.
    pub fn direction(self) -> Vector {
        match self {
            Color::B => Vector::new(1, 0, 0),
            Color::Y => Vector::new(0, 1, 0),
            Color::O => Vector::new(0, 0, 1),
            Color::G => Vector::new(-1, 0, 0),
            Color::W => Vector::new(0, -1, 0),
            Color::R => Vector::new(0, 0, -1),
        }
    }

    /// The axis this color's face is turned about.
    pub fn axis(self) -> Axis {
        match self {
            Color::B | Color::G => Axis::X,
            Color::Y | Color::W => Axis::Y,
            Color::O | Color::R => Axis::Z,
        }
    }

    /// The color on the given side of the given axis, if `sign` is 1 or -1.
    pub fn along(axis: Axis, sign: i8) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|c| c.axis() == axis && c.direction().component(axis) == sign)
    }

    /// The letter used for this color in words and state files.
    pub fn letter(self) -> char {
        match self {
            Color::O => 'O',
            Color::B => 'B',
            Color::Y => 'Y',
            Color::G => 'G',
            Color::W => 'W',
            Color::R => 'R',
        }
    }

    /// Read a color letter, in either case.
    pub fn from_letter(letter: char) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|c| c.letter() == letter.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_match_axes() {
        for c in Color::ALL {
            assert_eq!(c.direction().rank(), 1);
            assert_eq!(c.direction().component(c.axis()).abs(), 1);
            assert_eq!(Color::along(c.axis(), c.direction().component(c.axis())), Some(c));
            assert_eq!(Color::from_letter(c.letter()), Some(c));
            assert_eq!(Color::from_letter(c.letter().to_ascii_lowercase()), Some(c));
            assert_eq!(Color::ALL[c as usize], c);
        }
        assert_eq!(Color::along(Axis::X, 0), None);
        assert_eq!(Color::from_letter('x'), None);
    }
}
