use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::Config;
use proptest_derive::Arbitrary;
use proptest_state_machine::{ReferenceStateMachine, StateMachineTest};

use crate::{CursorError, List};

proptest_state_machine::prop_state_machine! {
    #![proptest_config(Config {
        // No regression files for the model test.
        failure_persistence: None,
        .. Config::default()
    })]

    #[test]
    fn list_state_machine_test(sequential 1..200 => List<u32>);
}

/// The possible transitions of the state machine.
///
/// Positions count steps from the ghost link: `0` is the ghost link, `k` is the
/// `k`-th element.
#[derive(Clone, Debug)]
pub enum Transition {
    PushFront(u32),
    PopFront,
    InsertAfter(usize, u32),
    EraseAfter(usize),
    Assign(Vec<u32>),
    Clear,
}

pub struct ListStateMachine;

impl ReferenceStateMachine for ListStateMachine {
    type State = Vec<u32>;
    type Transition = Transition;

    fn init_state() -> BoxedStrategy<Self::State> {
        vec(any::<u32>(), 0..8).boxed()
    }

    fn transitions(state: &Self::State) -> BoxedStrategy<Self::Transition> {
        let len = state.len();
        prop_oneof![
            2 => any::<u32>().prop_map(Transition::PushFront),
            1 => Just(Transition::PopFront),
            3 => (0..=len, any::<u32>())
                .prop_map(|(position, value)| Transition::InsertAfter(position, value)),
            2 => (0..len.max(1)).prop_map(Transition::EraseAfter),
            1 => vec(any::<u32>(), 0..8).prop_map(Transition::Assign),
            1 => Just(Transition::Clear),
        ]
        .boxed()
    }

    fn preconditions(state: &Self::State, transition: &Self::Transition) -> bool {
        match transition {
            Transition::InsertAfter(position, _) => *position <= state.len(),
            Transition::EraseAfter(position) => *position < state.len(),
            _ => true,
        }
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        match transition {
            Transition::PushFront(value) => state.insert(0, *value),
            Transition::PopFront => {
                if !state.is_empty() {
                    state.remove(0);
                }
            }
            Transition::InsertAfter(position, value) => state.insert(*position, *value),
            Transition::EraseAfter(position) => {
                state.remove(*position);
            }
            Transition::Assign(values) => state.clone_from(values),
            Transition::Clear => state.clear(),
        }
        state
    }
}

impl StateMachineTest for List<u32> {
    type SystemUnderTest = Self;
    type Reference = ListStateMachine;

    fn init_test(
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        List::from(ref_state.as_slice())
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        _ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: Transition,
    ) -> Self::SystemUnderTest {
        match transition {
            Transition::PushFront(value) => state.push_front(value),
            Transition::PopFront => {
                state.pop_front();
            }
            Transition::InsertAfter(position, value) => {
                let mut cursor = state.before_begin_mut();
                assert_eq!(cursor.seek_forward(position), Ok(()));
                let inserted = cursor.insert_after(value);
                assert_eq!(inserted.current(), Some(&value));
            }
            Transition::EraseAfter(position) => {
                let mut cursor = state.before_begin_mut();
                assert_eq!(cursor.seek_forward(position), Ok(()));
                assert!(cursor.peek_next().is_some());
                let len = cursor.len();
                let successor = cursor.erase_after();
                assert_eq!(successor.len(), len - 1);
            }
            Transition::Assign(values) => state.clone_from(&List::from(values.as_slice())),
            Transition::Clear => state.clear(),
        }
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        assert_eq!(state.len(), ref_state.len());
        assert_eq!(state.is_empty(), ref_state.is_empty());
        assert_eq!(state.front(), ref_state.first());
        assert!(state.iter().eq(ref_state.iter()));
    }
}

/// A single step of a cursor walking a list.
#[derive(Arbitrary, Debug)]
enum Step {
    Advance,
    Insert(u8),
    Erase,
}

proptest! {
    #[test]
    fn traversal_matches_source(values in vec(any::<u32>(), 0..64)) {
        let list = List::from(values.as_slice());
        prop_assert_eq!(list.len(), values.len());
        prop_assert!(list.iter().eq(values.iter()));
        prop_assert_eq!(list.clone().into_iter().collect::<Vec<_>>(), values);
    }

    #[test]
    fn ordering_matches_vec(a in vec(0..4_u8, 0..6), b in vec(0..4_u8, 0..6)) {
        let list_a = List::from(a.as_slice());
        let list_b = List::from(b.as_slice());
        prop_assert_eq!(list_a.cmp(&list_b), a.cmp(&b));
        prop_assert_eq!(list_a == list_b, a == b);
        prop_assert_eq!(list_a < list_b, a < b);
        prop_assert!(list_a == list_a.clone());
    }

    #[test]
    fn swap_exchanges_contents(a in vec(any::<u32>(), 0..16), b in vec(any::<u32>(), 0..16)) {
        let mut list_a = List::from(a.as_slice());
        let mut list_b = List::from(b.as_slice());
        list_a.swap(&mut list_b);
        prop_assert!(list_a.iter().eq(b.iter()));
        prop_assert!(list_b.iter().eq(a.iter()));
        prop_assert_eq!(list_a.len(), b.len());
        prop_assert_eq!(list_b.len(), a.len());
    }

    #[test]
    fn cursor_walk_matches_vec(
        initial in vec(any::<u8>(), 0..16),
        steps in vec(any::<Step>(), 0..64),
    ) {
        let mut reference = initial.clone();
        let mut list = List::from(initial.as_slice());
        {
            let mut cursor = list.before_begin_mut();
            // number of elements before the cursor's successor
            let mut position = 0;
            for step in steps {
                match step {
                    Step::Advance => {
                        if position < reference.len() {
                            prop_assert_eq!(cursor.move_next(), Ok(()));
                            position += 1;
                        }
                    }
                    Step::Insert(value) => {
                        cursor.insert_after(value);
                        reference.insert(position, value);
                    }
                    Step::Erase => {
                        if position < reference.len() {
                            prop_assert_eq!(cursor.remove_after(), Ok(reference.remove(position)));
                        } else {
                            prop_assert_eq!(cursor.remove_after(), Err(CursorError::NoSuccessor));
                        }
                    }
                }
                prop_assert_eq!(cursor.is_before_begin(), position == 0);
                prop_assert_eq!(cursor.current(), position.checked_sub(1).map(|i| &reference[i]));
                prop_assert_eq!(cursor.peek_next(), reference.get(position));
            }
        }
        prop_assert_eq!(list.len(), reference.len());
        prop_assert!(list.iter().eq(reference.iter()));
    }
}
