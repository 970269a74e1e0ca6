//! Shapes of rules and neighborhoods.
//!
//! A neighborhood of a cell is the tuple of states read to decide the next
//! state of the cell: the `r - 1` cells to its left, then the cell itself.
//! All `k^r` neighborhoods are enumerated in lexicographic order, the first
//! cell being the most significant digit. The position of a neighborhood in
//! this order is its _index_.

use crate::{error::Error, states::State};
use std::convert::TryFrom;

/// The number of states and the neighborhood size of a rule.
///
/// Every rule identifier of a valid shape fits in a `u64`,
/// i.e., `k^(k^r) <= 2^64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    num_states: usize,
    neighborhood_size: usize,
    table_size: usize,
    max_rule: u64,
}

impl Shape {
    /// Three states, each cell reading its left neighbor and itself.
    pub const TERNARY: Shape = Shape {
        num_states: 3,
        neighborhood_size: 2,
        table_size: 9,
        max_rule: 19682,
    };

    /// Creates a new shape.
    ///
    /// Requires at least two states, a positive neighborhood size,
    /// and a rule space small enough for `u64` rule identifiers.
    pub fn new(num_states: usize, neighborhood_size: usize) -> Result<Self, Error> {
        let invalid = Error::InvalidShape(num_states, neighborhood_size);
        if num_states < 2 || neighborhood_size < 1 {
            return Err(invalid);
        }
        let table_size = u32::try_from(neighborhood_size)
            .ok()
            .and_then(|r| num_states.checked_pow(r))
            .ok_or_else(|| invalid.clone())?;
        let max_rule = u32::try_from(table_size)
            .ok()
            .and_then(|n| (num_states as u128).checked_pow(n))
            .filter(|&count| count <= 1 << 64)
            .map(|count| (count - 1) as u64)
            .ok_or(invalid)?;
        Ok(Shape {
            num_states,
            neighborhood_size,
            table_size,
            max_rule,
        })
    }

    /// Number of states `k`.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// Number of cells in a neighborhood `r`.
    pub fn neighborhood_size(&self) -> usize {
        self.neighborhood_size
    }

    /// Number of distinct neighborhoods, `k^r`.
    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// The largest valid rule identifier, `k^(k^r) - 1`.
    pub fn max_rule(&self) -> u64 {
        self.max_rule
    }

    /// Whether `state` is a valid state of this shape.
    #[inline]
    pub fn contains(&self, state: State) -> bool {
        state.0 < self.num_states
    }

    /// The lexicographic index of a neighborhood.
    ///
    /// Returns [`Error::InvalidNeighborhood`] if the neighborhood has the wrong
    /// size or contains an invalid state.
    pub fn index_of(&self, neighborhood: &[State]) -> Result<usize, Error> {
        if neighborhood.len() != self.neighborhood_size {
            return Err(Error::InvalidNeighborhood(neighborhood.to_vec()));
        }
        neighborhood.iter().try_fold(0, |index, &state| {
            if self.contains(state) {
                Ok(index * self.num_states + state.0)
            } else {
                Err(Error::InvalidNeighborhood(neighborhood.to_vec()))
            }
        })
    }

    /// The neighborhood at the given lexicographic index,
    /// or `None` if the index is out of range.
    pub fn neighborhood(&self, index: usize) -> Option<Vec<State>> {
        if index >= self.table_size {
            return None;
        }
        let mut states = vec![State(0); self.neighborhood_size];
        let mut n = index;
        for state in states.iter_mut().rev() {
            *state = State(n % self.num_states);
            n /= self.num_states;
        }
        Some(states)
    }

    /// All neighborhoods in lexicographic order.
    pub fn neighborhoods(&self) -> impl Iterator<Item = Vec<State>> {
        let shape = *self;
        (0..shape.table_size).filter_map(move |index| shape.neighborhood(index))
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::TERNARY
    }
}

/// Index of the cell `offset` positions to the left of cell `i`
/// on a ring of `len` cells.
///
/// `len` must be positive.
#[inline]
pub(crate) fn left_of(i: usize, offset: usize, len: usize) -> usize {
    (i + len - offset % len) % len
}

/// Reads the neighborhood of cell `i` into `buf`, wrapping around the ends.
pub(crate) fn read_neighborhood(config: &[State], i: usize, size: usize, buf: &mut Vec<State>) {
    let len = config.len();
    buf.clear();
    buf.extend((0..size).rev().map(|offset| config[left_of(i, offset, len)]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ternary_matches_new() {
        assert_eq!(Shape::new(3, 2), Ok(Shape::TERNARY));
    }

    #[test]
    fn invalid_shapes() {
        assert_eq!(Shape::new(1, 2), Err(Error::InvalidShape(1, 2)));
        assert_eq!(Shape::new(3, 0), Err(Error::InvalidShape(3, 0)));
        // 6^36 does not fit in a u64.
        assert_eq!(Shape::new(6, 2), Err(Error::InvalidShape(6, 2)));
        assert_eq!(Shape::new(2, 7), Err(Error::InvalidShape(2, 7)));
    }

    #[test]
    fn largest_binary_shape() {
        let shape = Shape::new(2, 6).unwrap();
        assert_eq!(shape.table_size(), 64);
        assert_eq!(shape.max_rule(), u64::MAX);
    }

    #[test]
    fn lexicographic_order() {
        let all: Vec<_> = Shape::TERNARY.neighborhoods().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], vec![State(0), State(0)]);
        assert_eq!(all[1], vec![State(0), State(1)]);
        assert_eq!(all[3], vec![State(1), State(0)]);
        assert_eq!(all[8], vec![State(2), State(2)]);
        for (i, nbhd) in all.iter().enumerate() {
            assert_eq!(Shape::TERNARY.index_of(nbhd), Ok(i));
        }
        assert_eq!(Shape::TERNARY.neighborhood(9), None);
    }

    #[test]
    fn bad_neighborhoods() {
        let shape = Shape::TERNARY;
        assert_eq!(
            shape.index_of(&[State(0), State(3)]),
            Err(Error::InvalidNeighborhood(vec![State(0), State(3)]))
        );
        assert_eq!(
            shape.index_of(&[State(0)]),
            Err(Error::InvalidNeighborhood(vec![State(0)]))
        );
    }

    #[test]
    fn wrapping() {
        assert_eq!(left_of(0, 1, 4), 3);
        assert_eq!(left_of(2, 1, 4), 1);
        assert_eq!(left_of(0, 0, 4), 0);
        assert_eq!(left_of(0, 5, 4), 3);
        assert_eq!(left_of(0, 1, 1), 0);

        let config = [State(0), State(1), State(2), State(0)];
        let mut buf = Vec::new();
        read_neighborhood(&config, 0, 2, &mut buf);
        assert_eq!(buf, vec![State(0), State(0)]);
        read_neighborhood(&config, 2, 2, &mut buf);
        assert_eq!(buf, vec![State(1), State(2)]);
        read_neighborhood(&config, 1, 3, &mut buf);
        assert_eq!(buf, vec![State(0), State(0), State(1)]);
    }
}
