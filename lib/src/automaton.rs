//! The automaton.

use crate::{
    error::Error,
    field::SpacetimeField,
    neighborhood::read_neighborhood,
    rule::RuleTable,
    states::State,
};
use log::{debug, trace};

/// A one-dimensional cellular automaton with periodic boundary.
///
/// It owns a [`RuleTable`] and the [`SpacetimeField`] of all the
/// configurations it has gone through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    /// The rule of the cellular automaton.
    rule: RuleTable,

    /// All configurations so far. The last one is the current configuration.
    field: SpacetimeField,
}

impl Automaton {
    /// Creates a new automaton from a rule and an initial condition.
    ///
    /// Returns [`Error::InvalidState`] if some cell of the initial condition
    /// is not a valid state of the rule. The initial condition may be empty.
    pub fn new(rule: RuleTable, initial: &[usize]) -> Result<Self, Error> {
        let shape = rule.shape();
        let initial = initial
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                if shape.contains(State(s)) {
                    Ok(State(s))
                } else {
                    Err(Error::InvalidState(i, s, shape.num_states()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Created automaton with rule {} on {} cells",
            rule,
            initial.len()
        );
        Ok(Automaton {
            rule,
            field: SpacetimeField::new(initial),
        })
    }

    /// The rule of the automaton.
    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// The current configuration.
    pub fn current(&self) -> &[State] {
        self.field.last()
    }

    /// Number of steps taken so far.
    pub fn generation(&self) -> usize {
        self.field.len() - 1
    }

    /// All configurations so far, starting from the initial condition.
    pub fn field(&self) -> &SpacetimeField {
        &self.field
    }

    /// Consumes the automaton and returns its spacetime field.
    pub fn into_field(self) -> SpacetimeField {
        self.field
    }

    /// Advances the automaton by one step.
    ///
    /// Every cell reads its neighborhood from the current configuration,
    /// wrapping around the ends; the new configuration is only recorded
    /// once all the cells have been computed.
    pub fn step(&mut self) -> Result<(), Error> {
        let size = self.rule.shape().neighborhood_size();
        let current = self.field.last();
        let mut nbhd = Vec::with_capacity(size);
        let mut next = Vec::with_capacity(current.len());
        for i in 0..current.len() {
            read_neighborhood(current, i, size, &mut nbhd);
            next.push(self.rule.lookup(&nbhd)?);
        }
        self.field.push(&next);
        trace!("Generation {}", self.generation());
        Ok(())
    }

    /// Advances the automaton by `steps` steps.
    ///
    /// Returns [`Error::InvalidStepCount`] if `steps` is negative,
    /// without changing anything.
    pub fn advance(&mut self, steps: isize) -> Result<(), Error> {
        if steps < 0 {
            return Err(Error::InvalidStepCount(steps));
        }
        self.field.reserve(steps as usize);
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }
}
