//! The transition function of the palindrome machine.
//!
//! Each pass consumes the two outermost live digits on each side of the tape:
//! `Init` erases the leftmost digit and remembers it, the machine walks right and
//! checks the rightmost digit against it, then `Decide` erases the next digit from
//! the right, walks left and checks the new leftmost digit against that one.
//! Scanning states write back what they read; every other transition writes `Blank`.

use crate::types::{Branch, Direction, State, Symbol, Transition};

use Direction::{Left, Right};
use Symbol::{Blank, One, Zero};

const REJECT: Transition = Transition::new(State::Reject, Right, Blank);

/// Returns the transition for `state` reading `symbol`.
///
/// Terminal states have no outgoing transitions and map to `Reject`.
pub fn transition(state: State, symbol: Symbol) -> Transition {
    match (state, symbol) {
        (State::Init, Blank) => Transition::new(State::Accept, Right, Blank),
        (State::Init, One) => Transition::new(State::SeekRight(Branch::True), Right, Blank),
        (State::Init, Zero) => Transition::new(State::SeekRight(Branch::False), Right, Blank),

        (State::SeekRight(b), Blank) => Transition::new(State::CheckRight(b), Left, Blank),
        (State::SeekRight(b), digit) => Transition::new(State::SeekRight(b), Right, digit),

        // The fronts met on an odd number of live digits.
        (State::CheckRight(_), Blank) => Transition::new(State::Accept, Left, Blank),
        (State::CheckRight(b), digit) if digit == b.expects() => {
            Transition::new(State::Decide(b), Left, Blank)
        }
        (State::CheckRight(_), _) => Transition::new(State::Reject, Left, Blank),

        // The next branch depends only on the digit read, not on the current one.
        (State::Decide(_), Blank) => Transition::new(State::Accept, Right, Blank),
        (State::Decide(_), One) => Transition::new(State::SeekLeft(Branch::True), Left, Blank),
        (State::Decide(_), Zero) => Transition::new(State::SeekLeft(Branch::False), Left, Blank),

        (State::SeekLeft(b), Blank) => Transition::new(State::CheckLeft(b), Right, Blank),
        (State::SeekLeft(b), digit) => Transition::new(State::SeekLeft(b), Left, digit),

        (State::CheckLeft(_), Blank) => Transition::new(State::Accept, Right, Blank),
        (State::CheckLeft(b), digit) if digit == b.expects() => {
            Transition::new(State::Init, Right, Blank)
        }
        (State::CheckLeft(_), _) => REJECT,

        (State::Accept | State::Reject, _) => REJECT,
    }
}

/// Enumerates every defined entry of the transition function, in state order.
pub fn table() -> impl Iterator<Item = (State, Symbol, Transition)> {
    State::LIVE.into_iter().flat_map(|state| {
        [Blank, One, Zero]
            .into_iter()
            .map(move |symbol| (state, symbol, transition(state, symbol)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The classic numeric table: (state, read) -> (next, direction, write).
    const REFERENCE: [(u16, Symbol, u16, Direction, Symbol); 33] = [
        (0, Blank, 200, Right, Blank),
        (0, One, 10, Right, Blank),
        (0, Zero, 20, Right, Blank),
        (10, Blank, 11, Left, Blank),
        (10, One, 10, Right, One),
        (10, Zero, 10, Right, Zero),
        (11, Blank, 200, Left, Blank),
        (11, One, 12, Left, Blank),
        (11, Zero, 100, Left, Blank),
        (12, Blank, 200, Right, Blank),
        (12, One, 13, Left, Blank),
        (12, Zero, 23, Left, Blank),
        (13, Blank, 14, Right, Blank),
        (13, One, 13, Left, One),
        (13, Zero, 13, Left, Zero),
        (14, Blank, 200, Right, Blank),
        (14, One, 0, Right, Blank),
        (14, Zero, 100, Right, Blank),
        (20, Blank, 21, Left, Blank),
        (20, One, 20, Right, One),
        (20, Zero, 20, Right, Zero),
        (21, Blank, 200, Left, Blank),
        (21, One, 100, Left, Blank),
        (21, Zero, 22, Left, Blank),
        (22, Blank, 200, Right, Blank),
        (22, One, 13, Left, Blank),
        (22, Zero, 23, Left, Blank),
        (23, Blank, 24, Right, Blank),
        (23, One, 23, Left, One),
        (23, Zero, 23, Left, Zero),
        (24, Blank, 200, Right, Blank),
        (24, One, 100, Right, Blank),
        (24, Zero, 0, Right, Blank),
    ];

    fn state_by_code(code: u16) -> State {
        State::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or_else(|| panic!("no state with code {}", code))
    }

    #[test]
    fn test_matches_reference_table() {
        for (state, read, next, direction, write) in REFERENCE {
            let t = transition(state_by_code(state), read);
            assert_eq!(
                t,
                Transition::new(state_by_code(next), direction, write),
                "state {} reading {}",
                state,
                read
            );
        }
    }

    #[test]
    fn test_table_is_total_over_live_states() {
        let entries: Vec<_> = table().collect();
        assert_eq!(entries.len(), 33);
        assert!(entries.iter().all(|(state, _, _)| !state.is_terminal()));
    }

    #[test]
    fn test_terminal_states_reject() {
        for state in [State::Accept, State::Reject] {
            for symbol in [Blank, One, Zero] {
                assert_eq!(transition(state, symbol), REJECT);
            }
        }
    }

    #[test]
    fn test_scanning_states_preserve_digits() {
        for b in [Branch::True, Branch::False] {
            for digit in [One, Zero] {
                assert_eq!(transition(State::SeekRight(b), digit).write, digit);
                assert_eq!(transition(State::SeekLeft(b), digit).write, digit);
            }
        }
    }

    #[test]
    fn test_consuming_states_erase() {
        assert_eq!(transition(State::Decide(Branch::True), Zero).write, Blank);
        assert_eq!(transition(State::CheckLeft(Branch::True), One).write, Blank);
        assert_eq!(transition(State::Init, One).write, Blank);
    }
}
