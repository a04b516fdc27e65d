//! Neighbourhood offsets used by the cellular brushes.

use glam::IVec3;

/// The 6 face neighbours, in -x, +x, -y, +y, -z, +z order.
///
/// Tie-breaking in the fill pass depends on this order.
pub const FACE_NEIGHBORS: [IVec3; 6] = [
    IVec3::new(-1, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, -1),
    IVec3::new(0, 0, 1),
];

/// The 26 cells of a 3x3x3 block around the centre, excluding the centre.
pub fn moore_neighbors() -> impl Iterator<Item = IVec3> {
    (-1..=1).flat_map(|y| {
        (-1..=1).flat_map(move |z| {
            (-1..=1).map(move |x| IVec3::new(x, y, z))
        })
    })
    .filter(|offset| *offset != IVec3::ZERO)
}

/// Frequency tally that keeps first-seen order, so callers can break ties
/// by iteration position.
#[derive(Clone, Debug, Default)]
pub struct Tally<T> {
    entries: Vec<(T, u32)>,
}

impl<T: PartialEq + Copy> Tally<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn add(&mut self, value: T) {
        match self.entries.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value, 1)),
        }
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Most frequent value; among equal counts the last one in tally order wins.
    pub fn mode_last_wins(&self) -> Option<T> {
        let mut best: Option<(T, u32)> = None;
        for &(value, count) in &self.entries {
            match best {
                Some((_, best_count)) if count < best_count => {}
                _ => best = Some((value, count)),
            }
        }
        best.map(|(v, _)| v)
    }

    /// Most frequent value only when no other value shares its count.
    pub fn unique_mode(&self) -> Option<T> {
        let max = self.entries.iter().map(|(_, c)| *c).max()?;
        let mut winners = self.entries.iter().filter(|(_, c)| *c == max);
        let first = winners.next()?;
        if winners.next().is_some() {
            None
        } else {
            Some(first.0)
        }
    }
}
