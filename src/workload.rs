//! This module generates reproducible batches of inputs, runs them through the machine and
//! compares every verdict with the reference check.

use crate::machine::decide;
use crate::oracle::is_binary_palindrome;
use crate::types::{TuringMachineError, DEFAULT_CASES, DEFAULT_MAX_VALUE, DEFAULT_SEED};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// Settings for a verification workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of inputs to generate.
    pub cases: usize,
    /// Inputs are drawn uniformly from `0..=max_value`.
    pub max_value: u64,
    /// Seed for the input generator.
    pub seed: u64,
    /// Number of worker threads used to verify the inputs.
    pub threads: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            cases: DEFAULT_CASES,
            max_value: DEFAULT_MAX_VALUE,
            seed: DEFAULT_SEED,
            threads: 1,
        }
    }
}

impl WorkloadConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, TuringMachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TuringMachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TuringMachineError> {
        if self.cases == 0 {
            return Err(TuringMachineError::InvalidConfig(
                "cases must be greater than 0".to_string(),
            ));
        }

        if self.threads == 0 {
            return Err(TuringMachineError::InvalidConfig(
                "threads must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// A batch of inputs paired with their expected verdicts.
#[derive(Debug, Clone)]
pub struct Workload {
    inputs: Vec<u64>,
    expected: Vec<bool>,
}

/// An input on which the machine disagreed with the reference check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub index: usize,
    pub input: u64,
    pub expected: bool,
    pub actual: bool,
}

/// Outcome of verifying a workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub cases: usize,
    pub mismatches: Vec<Mismatch>,
    pub elapsed_ms: f64,
    pub ms_per_case: f64,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl Workload {
    /// Generates `config.cases` inputs from a generator seeded with `config.seed`.
    ///
    /// The same configuration always yields the same inputs.
    pub fn generate(config: &WorkloadConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);

        let inputs: Vec<u64> = (0..config.cases)
            .map(|_| rng.gen_range(0..=config.max_value))
            .collect();
        let expected = inputs.iter().map(|&n| is_binary_palindrome(n)).collect();

        info!(
            cases = config.cases,
            max_value = config.max_value,
            seed = config.seed,
            "generated workload"
        );

        Self { inputs, expected }
    }

    /// Builds a workload from explicit inputs.
    pub fn from_inputs(inputs: Vec<u64>) -> Self {
        let expected = inputs.iter().map(|&n| is_binary_palindrome(n)).collect();
        Self { inputs, expected }
    }

    pub fn inputs(&self) -> &[u64] {
        &self.inputs
    }

    pub fn expected(&self) -> &[bool] {
        &self.expected
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Runs every input through the machine and collects the disagreements.
    ///
    /// The inputs are split into contiguous chunks, one per thread. Each decision
    /// builds its own tape, so the threads share nothing but the read-only inputs.
    pub fn verify(&self, threads: usize) -> Report {
        let start = Instant::now();

        let chunk_size = self.inputs.len().div_ceil(threads.max(1)).max(1);
        let mut mismatches: Vec<Mismatch> = thread::scope(|scope| {
            let workers: Vec<_> = self
                .inputs
                .chunks(chunk_size)
                .zip(self.expected.chunks(chunk_size))
                .enumerate()
                .map(|(chunk, (inputs, expected))| {
                    let offset = chunk * chunk_size;
                    scope.spawn(move || verify_chunk(offset, inputs, expected))
                })
                .collect();

            workers
                .into_iter()
                .flat_map(|worker| match worker.join() {
                    Ok(mismatches) => mismatches,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });
        mismatches.sort_by_key(|m| m.index);

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        let cases = self.inputs.len();
        let ms_per_case = if cases == 0 {
            0.0
        } else {
            elapsed_ms / cases as f64
        };

        info!(
            cases,
            mismatches = mismatches.len(),
            elapsed_ms,
            "verified workload"
        );

        Report {
            cases,
            mismatches,
            elapsed_ms,
            ms_per_case,
        }
    }
}

fn verify_chunk(offset: usize, inputs: &[u64], expected: &[bool]) -> Vec<Mismatch> {
    inputs
        .iter()
        .zip(expected)
        .enumerate()
        .filter_map(|(i, (&input, &expected))| {
            let actual = decide(input);
            (actual != expected).then(|| {
                warn!(index = offset + i, input, expected, actual, "verdict mismatch");
                Mismatch {
                    index: offset + i,
                    input,
                    expected,
                    actual,
                }
            })
        })
        .collect()
}
