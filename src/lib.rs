//! This crate decides whether the binary representation of an integer is a palindrome by
//! emulating a single-tape Turing machine. It includes the machine's transition function,
//! its bounded tape, the integer encoder and the executor, along with a reference check
//! and a workload harness used to validate the machine's verdicts.

pub mod encoder;
pub mod machine;
pub mod oracle;
pub mod program;
pub mod tape;
pub mod types;
pub mod workload;

/// Re-exports the encoding functions from the encoder module.
pub use encoder::{bit_length, decode, encode};
/// Re-exports the `Machine` struct and the `decide` entry point from the machine module.
pub use machine::{decide, Machine, Snapshot};
/// Re-exports the reference check from the oracle module.
pub use oracle::is_binary_palindrome;
/// Re-exports the transition function from the program module.
pub use program::{table, transition};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the machine's value types and error type from the types module.
pub use types::{Branch, Direction, State, Step, Symbol, Transition, TuringMachineError, Verdict};
/// Re-exports the workload harness.
pub use workload::{Mismatch, Report, Workload, WorkloadConfig};
