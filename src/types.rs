//! This module defines the core data structures and types used throughout the palindrome
//! machine: tape symbols, head directions, control states, transitions, verdicts and errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of blank cells allocated past the last input digit.
/// The head never travels more than one cell beyond the live digits.
pub const TAPE_SLACK: usize = 2;
/// Number of inputs generated for a default workload.
pub const DEFAULT_CASES: usize = 100_000;
/// Largest input value generated for a default workload.
pub const DEFAULT_MAX_VALUE: u64 = 0xffff;
/// Seed used for a default workload.
pub const DEFAULT_SEED: u64 = 1337;

/// A single tape cell.
///
/// `Blank` is distinct from both digits. It is the tape's default fill and also what
/// the machine writes to erase a digit it has already compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[default]
    Blank,
    One,
    Zero,
}

impl Symbol {
    /// Returns the digit symbol for a bit.
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Symbol::One
        } else {
            Symbol::Zero
        }
    }

    /// Returns the bit value of a digit, `None` for `Blank`.
    pub fn bit(self) -> Option<bool> {
        match self {
            Symbol::One => Some(true),
            Symbol::Zero => Some(false),
            Symbol::Blank => None,
        }
    }

    /// Parses the rendering produced by `Display` (`1`, `0`, `_`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Symbol::One),
            '0' => Some(Symbol::Zero),
            '_' | ' ' => Some(Symbol::Blank),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::One => '1',
            Symbol::Zero => '0',
            Symbol::Blank => '_',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Represents the possible directions the head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Position delta applied to the head.
    pub fn delta(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// The digit remembered for the current comparison pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    /// The consumed digit was `One`.
    True,
    /// The consumed digit was `Zero`.
    False,
}

impl Branch {
    /// The digit this branch expects to find at the opposite end.
    pub fn expects(self) -> Symbol {
        match self {
            Branch::True => Symbol::One,
            Branch::False => Symbol::Zero,
        }
    }

    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        match symbol {
            Symbol::One => Some(Branch::True),
            Symbol::Zero => Some(Branch::False),
            Symbol::Blank => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Branch::True => "true",
            Branch::False => "false",
        }
    }

    fn offset(self) -> u16 {
        match self {
            Branch::True => 10,
            Branch::False => 20,
        }
    }
}

/// Control state of the palindrome machine.
///
/// `Init` starts a comparison pass. Each branch has five states which walk to the
/// right end, check it, pick the digit for the left end, walk back and check that.
/// `Accept` and `Reject` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    Init,
    SeekRight(Branch),
    CheckRight(Branch),
    Decide(Branch),
    SeekLeft(Branch),
    CheckLeft(Branch),
    Reject,
    Accept,
}

impl State {
    /// The states that have outgoing transitions.
    pub const LIVE: [State; 11] = [
        State::Init,
        State::SeekRight(Branch::True),
        State::CheckRight(Branch::True),
        State::Decide(Branch::True),
        State::SeekLeft(Branch::True),
        State::CheckLeft(Branch::True),
        State::SeekRight(Branch::False),
        State::CheckRight(Branch::False),
        State::Decide(Branch::False),
        State::SeekLeft(Branch::False),
        State::CheckLeft(Branch::False),
    ];

    /// Every state, live states first.
    pub const ALL: [State; 13] = [
        State::Init,
        State::SeekRight(Branch::True),
        State::CheckRight(Branch::True),
        State::Decide(Branch::True),
        State::SeekLeft(Branch::True),
        State::CheckLeft(Branch::True),
        State::SeekRight(Branch::False),
        State::CheckRight(Branch::False),
        State::Decide(Branch::False),
        State::SeekLeft(Branch::False),
        State::CheckLeft(Branch::False),
        State::Reject,
        State::Accept,
    ];

    /// Numeric tag of the state in the classic table layout
    /// (`0` init, `1x` true branch, `2x` false branch, `100` reject, `200` accept).
    pub fn code(self) -> u16 {
        match self {
            State::Init => 0,
            State::SeekRight(b) => b.offset(),
            State::CheckRight(b) => b.offset() + 1,
            State::Decide(b) => b.offset() + 2,
            State::SeekLeft(b) => b.offset() + 3,
            State::CheckLeft(b) => b.offset() + 4,
            State::Reject => 100,
            State::Accept => 200,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, State::Accept | State::Reject)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Init => write!(f, "init"),
            State::SeekRight(b) => write!(f, "seek_right@{}", b.name()),
            State::CheckRight(b) => write!(f, "check_right@{}", b.name()),
            State::Decide(b) => write!(f, "decide@{}", b.name()),
            State::SeekLeft(b) => write!(f, "seek_left@{}", b.name()),
            State::CheckLeft(b) => write!(f, "check_left@{}", b.name()),
            State::Reject => write!(f, "reject"),
            State::Accept => write!(f, "accept"),
        }
    }
}

/// A single entry of the transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state the machine moves to.
    pub next: State,
    /// Where the head moves after writing.
    pub direction: Direction,
    /// The symbol written under the head.
    pub write: Symbol,
}

impl Transition {
    pub const fn new(next: State, direction: Direction, write: Symbol) -> Self {
        Self {
            next,
            direction,
            write,
        }
    }
}

/// The decision reached by a halted machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accept,
    Reject,
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict == Verdict::Accept
    }
}

/// Represents the outcome of a single machine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine performed a step and has not halted yet.
    Continue,
    /// The machine is in a terminal state.
    Halt(Verdict),
}

/// Represents the errors raised around the machine: step-budgeted runs and
/// workload configuration. Deciding an input never fails.
#[derive(Debug, Error)]
pub enum TuringMachineError {
    /// The machine did not halt within the given number of steps.
    #[error("Machine did not halt within {0} steps")]
    StepLimitExceeded(usize),
    /// A workload configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A configuration file could not be read.
    #[error("File error: {0}")]
    FileError(String),
    /// A configuration file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
