//! Rule tables.

use crate::{error::Error, neighborhood::Shape, states::State};
use log::debug;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A rule of the cellular automaton.
///
/// It maps every neighborhood of its [`Shape`] to the next state of the
/// central cell, and is immutable once built.
///
/// # Rule identifiers
///
/// A rule is identified by an integer in `0..=k^(k^r) - 1`.
/// The digits of the identifier in base `k`, least significant digit
/// first, are padded with trailing zeros to length `k^r`.
/// Digit `i` of this sequence is the next state of neighborhood `i`
/// in lexicographic order.
///
/// For example, with three states and neighborhood size 2, the rule `235`
/// is `22201` in base 3, so its digit sequence is `1, 0, 2, 2, 2, 0, 0, 0, 0`:
/// `(0, 0)` maps to `1`, `(0, 1)` to `0`, `(0, 2)` to `2`, and so on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RuleTable {
    shape: Shape,
    rule: u64,
    /// Next states, indexed by the lexicographic index of the neighborhood.
    table: Vec<State>,
}

impl RuleTable {
    /// Decodes a rule identifier with three states and neighborhood size 2.
    pub fn new(rule: u64) -> Result<Self, Error> {
        RuleTable::with_shape(rule, Shape::TERNARY)
    }

    /// Decodes a rule identifier of the given shape.
    pub fn with_shape(rule: u64, shape: Shape) -> Result<Self, Error> {
        if rule > shape.max_rule() {
            return Err(Error::InvalidRule(rule, shape.max_rule()));
        }

        let k = shape.num_states() as u64;
        let mut table = Vec::with_capacity(shape.table_size());
        let mut n = rule;
        while n != 0 {
            table.push(State((n % k) as usize));
            n /= k;
        }
        // The digits were collected least significant first,
        // so the padding goes at the end.
        table.resize(shape.table_size(), State(0));

        debug!("Decoded rule {} with {:?}", rule, shape);
        Ok(RuleTable { shape, rule, table })
    }

    /// Builds a rule from the next states of all neighborhoods,
    /// listed in lexicographic order of the neighborhoods.
    ///
    /// This is the inverse of [`with_shape`](Self::with_shape).
    pub fn from_states(shape: Shape, table: Vec<State>) -> Result<Self, Error> {
        if table.len() != shape.table_size() {
            return Err(Error::InvalidTableSize(table.len(), shape.table_size()));
        }
        if let Some((i, state)) = table.iter().enumerate().find(|&(_, &s)| !shape.contains(s)) {
            return Err(Error::InvalidState(i, state.0, shape.num_states()));
        }

        // Cannot overflow: the value is at most `shape.max_rule()`.
        let k = shape.num_states() as u64;
        let rule = table
            .iter()
            .rev()
            .fold(0, |rule: u64, state| rule * k + state.0 as u64);

        Ok(RuleTable { shape, rule, table })
    }

    /// The rule identifier.
    pub fn rule(&self) -> u64 {
        self.rule
    }

    /// The shape of the rule.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Next states of all neighborhoods, in lexicographic order
    /// of the neighborhoods.
    pub fn states(&self) -> &[State] {
        &self.table
    }

    /// The next state of the central cell of a neighborhood.
    pub fn lookup(&self, neighborhood: &[State]) -> Result<State, Error> {
        let index = self.shape.index_of(neighborhood)?;
        Ok(self.table[index])
    }

    /// Iterates over all `(neighborhood, next state)` pairs
    /// in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec<State>, State)> + '_ {
        self.shape.neighborhoods().zip(self.table.iter().copied())
    }
}

/// Parses a decimal rule identifier with three states
/// and neighborhood size 2.
impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleTable::new(s.trim().parse()?)
    }
}

impl Display for RuleTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.rule)?;
        if self.shape != Shape::TERNARY {
            write!(
                f,
                " (k = {}, r = {})",
                self.shape.num_states(),
                self.shape.neighborhood_size()
            )?;
        }
        Ok(())
    }
}
