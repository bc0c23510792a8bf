//! Reading and writing cube states as text.
//!
//! Each line of a state file reads `x y z colors`: the position `(x, y, z)` holds the piece whose
//! home position is the sum of the directions of `colors`. So `1 1 1 GYO` says the corner at
//! `(1, 1, 1)` holds the piece which belongs at `(-1, 1, 1)`. Positions not mentioned hold their
//! own piece.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use super::{slot_of, Axis, Color, Coloring, CubeState, Slot, Vector, SLOTS, VERTEX_SLOTS};
use crate::error::{MalformedStateFileError, StateFileError, StateFileProblem};

fn malformed(line: usize, problem: StateFileProblem) -> MalformedStateFileError {
    MalformedStateFileError { line, problem }
}

fn parse_coordinate(field: &str) -> Result<i8, StateFileProblem> {
    match field.parse::<i8>() {
        Ok(c) if (-1..=1).contains(&c) => Ok(c),
        _ => Err(StateFileProblem::BadCoordinate(field.to_string())),
    }
}

fn parse_occupant(colors: &str) -> Result<Slot, StateFileProblem> {
    let mut sum = Vector::default();
    for letter in colors.chars() {
        let c = Color::from_letter(letter).ok_or(StateFileProblem::UnknownColor(letter))?;
        sum = sum + c.direction();
    }
    slot_of(sum).ok_or_else(|| StateFileProblem::UntrackedOccupant(colors.to_string()))
}

fn parse_line(line: &str) -> Result<(Slot, Slot), StateFileProblem> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[x, y, z, colors] = &fields[..] else {
        return Err(StateFileProblem::FieldCount(fields.len()));
    };

    let coords = [parse_coordinate(x)?, parse_coordinate(y)?, parse_coordinate(z)?];
    let position = slot_of(Vector::new(coords[0], coords[1], coords[2]))
        .ok_or(StateFileProblem::UntrackedPosition(coords))?;
    let piece = parse_occupant(colors)?;
    // corners only ever sit in corner slots, edges in edge slots
    if VERTEX_SLOTS.contains(&position) != VERTEX_SLOTS.contains(&piece) {
        return Err(StateFileProblem::RankMismatch {
            position: coords,
            colors: colors.to_string(),
        });
    }
    Ok((position, piece))
}

/// The color letters naming a piece, in x, y, z order.
fn color_word(piece: Vector) -> String {
    Axis::ALL
        .into_iter()
        .filter_map(|axis| Color::along(axis, piece.component(axis)))
        .map(Color::letter)
        .collect()
}

impl CubeState {
    /// Parse the contents of a state file. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, MalformedStateFileError> {
        let mut occupants = SLOTS;
        let mut positions = BTreeSet::new();
        let mut pieces = BTreeSet::new();

        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = i + 1;
            let (position, piece) = parse_line(line).map_err(|p| malformed(line_no, p))?;

            if !positions.insert(position) {
                let coords = SLOTS[position as usize - 1].coords();
                return Err(malformed(line_no, StateFileProblem::RepeatedPosition(coords)));
            }
            if !pieces.insert(piece) {
                return Err(malformed(line_no, StateFileProblem::RepeatedOccupant(piece)));
            }
            occupants[position as usize - 1] = SLOTS[piece as usize - 1];
        }

        // The listed lines may be fine on their own while clashing with a position left alone.
        let mut seen = BTreeSet::new();
        for piece in occupants {
            let slot = slot_of(piece).unwrap_or_default();
            if !seen.insert(slot) {
                return Err(malformed(0, StateFileProblem::RepeatedOccupant(slot)));
            }
        }

        Ok(CubeState::from_coloring(Coloring::from_occupants(occupants)))
    }

    /// Write every slot, in slot order, in the state file format.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        for (position, piece) in self.coloring().iter() {
            let Vector { x, y, z } = position;
            writeln!(w, "{x} {y} {z} {}", color_word(piece))?;
        }
        Ok(())
    }

    /// Read a state file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StateFileError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    /// Write a state file to disk.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        fs::write(path, buf)
    }
}

impl FromStr for CubeState {
    type Err = MalformedStateFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
