use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
///
/// For an automaton with `k` states, a valid state lies in `0..k`.
/// Configurations are validated when they enter an automaton,
/// so every state stored in a [`SpacetimeField`](crate::SpacetimeField) is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct State(pub usize);

impl From<State> for usize {
    #[inline]
    fn from(state: State) -> Self {
        state.0
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
