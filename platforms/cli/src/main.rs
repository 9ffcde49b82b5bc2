use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tur_palindrome::{
    table, Machine, Report, Step, TuringMachineError, Verdict, Workload, WorkloadConfig,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[clap(long, global = true, default_value = "warn")]
    log_level: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify a seeded batch of random inputs against the reference check
    Bench {
        /// JSON workload configuration; flags override its values
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Number of inputs
        #[clap(long)]
        cases: Option<usize>,

        /// Largest input value
        #[clap(long)]
        max_value: Option<u64>,

        /// Seed for the input generator
        #[clap(long)]
        seed: Option<u64>,

        /// Number of worker threads
        #[clap(short, long)]
        threads: Option<usize>,

        /// Print the report as JSON
        #[clap(long)]
        json: bool,
    },
    /// Run the machine on a single input
    Decide {
        /// The input value
        input: u64,

        /// Print each step of the execution
        #[clap(short = 'd', long)]
        trace: bool,
    },
    /// Print the transition table
    Table {
        /// Print the table as JSON
        #[clap(long)]
        json: bool,
    },
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = match cli.command {
        Command::Bench {
            config,
            cases,
            max_value,
            seed,
            threads,
            json,
        } => load_config(config, cases, max_value, seed, threads)
            .and_then(|config| bench(&config, json)),
        Command::Decide { input, trace } => {
            decide(input, trace);
            Ok(true)
        }
        Command::Table { json } => print_table(json).map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(
    path: Option<PathBuf>,
    cases: Option<usize>,
    max_value: Option<u64>,
    seed: Option<u64>,
    threads: Option<usize>,
) -> Result<WorkloadConfig, TuringMachineError> {
    let mut config = match path {
        Some(path) => WorkloadConfig::from_file(&path)?,
        None => WorkloadConfig::default(),
    };

    if let Some(cases) = cases {
        config.cases = cases;
    }
    if let Some(max_value) = max_value {
        config.max_value = max_value;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(threads) = threads {
        config.threads = threads;
    }

    config.validate()?;
    Ok(config)
}

/// Returns `Ok(false)` if any verdict disagreed with the reference check.
fn bench(config: &WorkloadConfig, json: bool) -> Result<bool, TuringMachineError> {
    let workload = Workload::generate(config);
    let report = workload.verify(config.threads);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(report.is_success())
}

fn print_report(report: &Report) {
    for m in &report.mismatches {
        println!("{}: {}, {} -> FAIL", m.index, m.input, m.expected);
    }
    println!("{} ms, {} ms/case", report.elapsed_ms, report.ms_per_case);
}

fn decide(input: u64, trace: bool) {
    let mut machine = Machine::for_input(input);

    let verdict = if trace {
        let print_state = |machine: &Machine| {
            let snapshot = machine.snapshot();
            println!(
                "Step: {}, State: {}, Head: {}, Tape: [{}]",
                snapshot.step, snapshot.state, snapshot.head, snapshot.tape
            );
        };

        print_state(&machine);
        loop {
            match machine.step() {
                Step::Continue => print_state(&machine),
                Step::Halt(verdict) => {
                    println!("\nMachine halted.");
                    break verdict;
                }
            }
        }
    } else {
        machine.run()
    };

    match verdict {
        Verdict::Accept => println!("{}: accept", input),
        Verdict::Reject => println!("{}: reject", input),
    }
}

fn print_table(json: bool) -> Result<(), TuringMachineError> {
    if json {
        let entries: Vec<_> = table().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (state, read, t) in table() {
        println!(
            "{:>3} {:<16} {} -> {:>3} {:<16} {} {:?}",
            state.code(),
            state.to_string(),
            read,
            t.next.code(),
            t.next.to_string(),
            t.write,
            t.direction
        );
    }

    Ok(())
}
