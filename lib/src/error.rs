//! All kinds of errors in this crate.

use crate::states::State;
use displaydoc::Display;
use std::num::ParseIntError;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid rule {0}: rule identifiers must lie in 0..={1}.
    InvalidRule(u64, u64),
    /// Invalid rule: {0}.
    ParseRuleError(#[from] ParseIntError),
    /// Cell {0} has invalid state {1}: states must lie in 0..{2}.
    InvalidState(usize, usize, usize),
    /// Step count should be non-negative: {0}.
    InvalidStepCount(isize),
    /// No rule table entry for neighborhood {0:?}.
    InvalidNeighborhood(Vec<State>),
    /// Rules with {0} states and neighborhood size {1} are not supported.
    InvalidShape(usize, usize),
    /// Rule table has {0} entries, but {1} are expected.
    InvalidTableSize(usize, usize),
    /// Length should be non-negative: {0}.
    InvalidLength(isize),
}
