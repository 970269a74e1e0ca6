//! The spacetime field.

use crate::states::State;
use log::debug;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// The recorded history of an automaton.
///
/// Row `t` is the configuration after `t` steps; row `0` is the initial
/// condition, and the last row is the current configuration.
/// Every row has the same length.
///
/// The rows are stored one after another in a single buffer.
/// Rows are only ever appended, never modified or removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpacetimeField {
    /// Number of cells in each configuration.
    length: usize,

    /// Number of recorded configurations.
    ///
    /// Stored separately so that empty configurations can still be counted.
    generations: usize,

    /// All cells, row after row.
    cells: Vec<State>,
}

impl SpacetimeField {
    /// Creates a field whose only row is `initial`.
    pub(crate) fn new(initial: Vec<State>) -> Self {
        SpacetimeField {
            length: initial.len(),
            generations: 1,
            cells: initial,
        }
    }

    /// Appends a configuration.
    ///
    /// The caller must make sure that it has the same length as the others.
    pub(crate) fn push(&mut self, config: &[State]) {
        debug_assert_eq!(config.len(), self.length);
        self.cells.extend_from_slice(config);
        self.generations += 1;
    }

    /// Tries to reserve room for `additional` more configurations.
    ///
    /// This is only a hint: if the memory cannot be reserved up front,
    /// the buffer grows as configurations are pushed.
    pub(crate) fn reserve(&mut self, additional: usize) {
        let cells = additional.saturating_mul(self.length);
        if self.cells.try_reserve(cells).is_err() {
            debug!("Unable to reserve room for {} more configurations", additional);
        }
    }

    /// Number of recorded configurations.
    ///
    /// This is always at least one.
    pub fn len(&self) -> usize {
        self.generations
    }

    /// Always `false`: the initial condition is always recorded.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of cells in each configuration.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The configuration after `t` steps.
    pub fn get(&self, t: usize) -> Option<&[State]> {
        if t < self.generations {
            Some(&self.cells[t * self.length..(t + 1) * self.length])
        } else {
            None
        }
    }

    /// The initial condition.
    pub fn first(&self) -> &[State] {
        &self.cells[..self.length]
    }

    /// The current configuration.
    pub fn last(&self) -> &[State] {
        &self.cells[(self.generations - 1) * self.length..]
    }

    /// Iterates over all configurations, starting from the initial condition.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[State]> + ExactSizeIterator + '_ {
        (0..self.generations).map(move |t| &self.cells[t * self.length..(t + 1) * self.length])
    }

    /// Copies the field into a grid of integers, one row per generation.
    pub fn to_vec(&self) -> Vec<Vec<usize>> {
        self.iter()
            .map(|row| row.iter().map(|&state| usize::from(state)).collect())
            .collect()
    }
}

/// Displays the field with one line per generation
/// and one digit per cell.
///
/// States above `9` are written as letters, starting from `a`.
impl Display for SpacetimeField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in self.iter() {
            for &State(i) in row {
                let c = std::char::from_digit(i as u32, 36).unwrap_or('?');
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized as a sequence of rows.
#[cfg(feature = "serde")]
impl Serialize for SpacetimeField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
