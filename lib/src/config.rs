//! Run configuration.

use crate::{
    automaton::Automaton, error::Error, neighborhood::Shape, random::random_configuration,
    rule::RuleTable,
};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run configuration.
///
/// The automaton will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The rule identifier.
    #[educe(Default = 235)]
    pub rule: u64,

    /// Number of states.
    #[educe(Default = 3)]
    pub num_states: usize,

    /// Number of cells in a neighborhood,
    /// counting the cell itself and its left neighbors.
    #[educe(Default = 2)]
    pub neighborhood_size: usize,

    /// Number of cells.
    ///
    /// Ignored when [`initial`](#structfield.initial) is given.
    #[educe(Default = 100)]
    pub length: isize,

    /// Number of steps to run.
    #[educe(Default = 100)]
    pub steps: isize,

    /// The initial condition.
    ///
    /// `None` means that a random initial condition
    /// of the given [`length`](#structfield.length) is used.
    pub initial: Option<Vec<usize>>,

    /// Seed for the random initial condition.
    ///
    /// `None` means that the seed is chosen by the operating system.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with the given rule, length and steps.
    pub fn new(rule: u64, length: isize, steps: isize) -> Self {
        Config {
            rule,
            length,
            steps,
            ..Config::default()
        }
    }

    /// Sets the rule identifier.
    pub fn set_rule(mut self, rule: u64) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the number of states and the neighborhood size.
    pub fn set_shape(mut self, num_states: usize, neighborhood_size: usize) -> Self {
        self.num_states = num_states;
        self.neighborhood_size = neighborhood_size;
        self
    }

    /// Sets the number of cells.
    pub fn set_length(mut self, length: isize) -> Self {
        self.length = length;
        self
    }

    /// Sets the number of steps.
    pub fn set_steps(mut self, steps: isize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the initial condition.
    pub fn set_initial<T: Into<Option<Vec<usize>>>>(mut self, initial: T) -> Self {
        self.initial = initial.into();
        self
    }

    /// Sets the seed of the random initial condition.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// The shape of the rule.
    pub fn shape(&self) -> Result<Shape, Error> {
        Shape::new(self.num_states, self.neighborhood_size)
    }

    /// The rule table.
    pub fn rule_table(&self) -> Result<RuleTable, Error> {
        RuleTable::with_shape(self.rule, self.shape()?)
    }

    /// The initial condition: the given one if any, otherwise a random one.
    pub fn initial_condition(&self) -> Result<Vec<usize>, Error> {
        if let Some(initial) = &self.initial {
            return Ok(initial.clone());
        }
        if self.length < 0 {
            return Err(Error::InvalidLength(self.length));
        }
        let shape = self.shape()?;
        let length = self.length as usize;
        let initial = match self.seed {
            Some(seed) => random_configuration(&mut StdRng::seed_from_u64(seed), length, shape),
            None => random_configuration(&mut thread_rng(), length, shape),
        };
        debug!("Generated a random initial condition of {} cells", length);
        Ok(initial)
    }

    /// Creates a new automaton from the configuration, without running it.
    pub fn automaton(&self) -> Result<Automaton, Error> {
        let rule = self.rule_table()?;
        let initial = self.initial_condition()?;
        Automaton::new(rule, &initial)
    }

    /// Creates a new automaton from the configuration,
    /// and runs it for [`steps`](#structfield.steps) steps.
    pub fn run(&self) -> Result<Automaton, Error> {
        if self.steps < 0 {
            return Err(Error::InvalidStepCount(self.steps));
        }
        let mut automaton = self.automaton()?;
        automaton.advance(self.steps)?;
        Ok(automaton)
    }
}
