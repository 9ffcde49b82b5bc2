//! This module defines the `Machine` struct, which drives the palindrome program over a
//! single tape. It handles the control state, head movement and the halting verdict.

use crate::encoder::encode;
use crate::program;
use crate::tape::Tape;
use crate::types::{State, Step, Symbol, Transition, TuringMachineError, Verdict};
use serde::Serialize;
use tracing::{debug, trace};

/// A single run of the palindrome machine.
///
/// Each run owns its tape; the transition function itself is stateless, so any number
/// of machines may run side by side.
#[derive(Debug, Clone)]
pub struct Machine {
    state: State,
    head: isize,
    tape: Tape,
    step_count: usize,
}

/// A serializable view of a machine between steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub step: usize,
    pub state: State,
    pub head: isize,
    pub tape: String,
}

impl Machine {
    /// Creates a machine in the `Init` state with its head on position 0.
    pub fn new(tape: Tape) -> Self {
        Self {
            state: State::Init,
            head: 0,
            tape,
            step_count: 0,
        }
    }

    /// Creates a machine whose tape holds the binary digits of `n`.
    pub fn for_input(n: u64) -> Self {
        Self::new(encode(n))
    }

    /// Executes a single step: read, look up, write, move, change state.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if the machine performed a step.
    /// * `Step::Halt(_)` if the machine is in a terminal state. Nothing is changed.
    pub fn step(&mut self) -> Step {
        if let Some(verdict) = self.verdict() {
            return Step::Halt(verdict);
        }

        let transition = self.transition();
        trace!(
            step = self.step_count,
            state = %self.state,
            head = self.head,
            read = %self.symbol(),
            next = %transition.next,
            "step"
        );

        self.tape.write(self.head, transition.write);
        self.head += transition.direction.delta();
        self.state = transition.next;
        self.step_count += 1;

        Step::Continue
    }

    /// Runs the machine until it halts.
    ///
    /// Every pass erases at least one digit from each end of the tape, so this
    /// always terminates.
    pub fn run(&mut self) -> Verdict {
        loop {
            if let Step::Halt(verdict) = self.step() {
                debug!(steps = self.step_count, ?verdict, "machine halted");
                return verdict;
            }
        }
    }

    /// Runs the machine for at most `limit` steps.
    pub fn run_with_limit(&mut self, limit: usize) -> Result<Verdict, TuringMachineError> {
        while self.step_count < limit {
            if let Step::Halt(verdict) = self.step() {
                debug!(steps = self.step_count, ?verdict, "machine halted");
                return Ok(verdict);
            }
        }

        self.verdict()
            .ok_or(TuringMachineError::StepLimitExceeded(limit))
    }

    /// Puts the machine back into `Init` on a new tape.
    pub fn reset(&mut self, tape: Tape) {
        self.state = State::Init;
        self.head = 0;
        self.tape = tape;
        self.step_count = 0;
    }

    /// Returns the current control state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the head position. It may be outside the tape window.
    pub fn head(&self) -> isize {
        self.head
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the total number of steps executed.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_halted(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the verdict if the machine has halted.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.state {
            State::Accept => Some(Verdict::Accept),
            State::Reject => Some(Verdict::Reject),
            _ => None,
        }
    }

    /// Returns the symbol under the head.
    pub fn symbol(&self) -> Symbol {
        self.tape.read(self.head)
    }

    /// Returns the transition the next step would take.
    pub fn transition(&self) -> Transition {
        program::transition(self.state, self.symbol())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.step_count,
            state: self.state,
            head: self.head,
            tape: self.tape.to_string(),
        }
    }
}

/// Decides whether the binary representation of `n` is a palindrome by running the machine.
pub fn decide(n: u64) -> bool {
    Machine::for_input(n).run().into()
}
