//! One-dimensional cellular automata with `k` states.
//!
//! A [`RuleTable`] is decoded from a rule identifier; an [`Automaton`]
//! applies it to a ring of cells, recording every configuration
//! in a [`SpacetimeField`].
//!
//! # Example
//!
//! ```
//! use ternca_lib::{Automaton, RuleTable};
//!
//! let rule = RuleTable::new(235)?;
//! let mut automaton = Automaton::new(rule, &[0, 1, 2, 0])?;
//! automaton.advance(10)?;
//! assert_eq!(automaton.field().len(), 11);
//! # Ok::<(), ternca_lib::Error>(())
//! ```

mod automaton;
mod config;
mod error;
mod field;
mod neighborhood;
mod random;
mod rule;
mod states;

pub use automaton::Automaton;
pub use config::Config;
pub use error::Error;
pub use field::SpacetimeField;
pub use neighborhood::Shape;
pub use random::random_configuration;
pub use rule::RuleTable;
pub use states::State;
