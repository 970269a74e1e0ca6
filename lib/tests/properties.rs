use proptest::prelude::*;
use ternca_lib::{Automaton, RuleTable, Shape, State};

proptest! {
    #[test]
    fn decode_then_encode(rule in 0..=19682u64) {
        let table = RuleTable::new(rule).unwrap();
        let encoded = RuleTable::from_states(Shape::TERNARY, table.states().to_vec()).unwrap();
        prop_assert_eq!(encoded.rule(), rule);
    }

    #[test]
    fn encode_then_decode(digits in prop::collection::vec(0..3usize, 9)) {
        let states: Vec<State> = digits.into_iter().map(State).collect();
        let table = RuleTable::from_states(Shape::TERNARY, states.clone()).unwrap();
        let decoded = RuleTable::new(table.rule()).unwrap();
        prop_assert_eq!(decoded.states(), &states[..]);
    }

    #[test]
    fn binary_round_trip(digits in prop::collection::vec(0..2usize, 8)) {
        let shape = Shape::new(2, 3).unwrap();
        let states: Vec<State> = digits.into_iter().map(State).collect();
        let table = RuleTable::from_states(shape, states).unwrap();
        prop_assert_eq!(RuleTable::with_shape(table.rule(), shape).unwrap(), table);
    }

    #[test]
    fn advance_is_associative(
        rule in 0..=19682u64,
        initial in prop::collection::vec(0..3usize, 0..24),
        s1 in 0..16isize,
        s2 in 0..16isize,
    ) {
        let rule = RuleTable::new(rule).unwrap();
        let mut split = Automaton::new(rule.clone(), &initial).unwrap();
        split.advance(s1).unwrap();
        split.advance(s2).unwrap();
        let mut whole = Automaton::new(rule, &initial).unwrap();
        whole.advance(s1 + s2).unwrap();
        prop_assert_eq!(split.current(), whole.current());
        prop_assert_eq!(split.field(), whole.field());
    }

    #[test]
    fn field_stays_valid(
        rule in 0..=19682u64,
        initial in prop::collection::vec(0..3usize, 0..24),
        steps in 0..32isize,
    ) {
        let mut automaton = Automaton::new(RuleTable::new(rule).unwrap(), &initial).unwrap();
        automaton.advance(steps).unwrap();
        let field = automaton.field();
        prop_assert_eq!(field.len(), steps as usize + 1);
        prop_assert_eq!(field.last(), automaton.current());
        for row in field.iter() {
            prop_assert_eq!(row.len(), initial.len());
            prop_assert!(row.iter().all(|&State(s)| s < 3));
        }
    }
}
