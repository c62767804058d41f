//! cpusched - CPU scheduling simulator CLI
//!
//! Runs a workload (from a JSON request file or generated at random)
//! through one or all scheduling algorithms and prints the per-process
//! results, execution order and metrics.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_cpusched::dispatching::Algorithm;
use u_cpusched::models::{ProcessSpec, Tick};
use u_cpusched::scheduler::{SimulationMetrics, SimulationOutcome, SimulationRequest, Simulator};
use u_cpusched::workload::WorkloadConfig;
use u_cpusched::{MetricsError, SimulationError};

/// Quantum used for Round-Robin when none is configured.
const DEFAULT_QUANTUM: Tick = 2;

#[derive(Parser, Debug)]
#[command(name = "cpusched")]
#[command(about = "Simulate CPU scheduling algorithms tick by tick", long_about = None)]
struct Args {
    /// JSON simulation request (processes, algorithm, quantum)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Algorithm: FCFS, SJF, SRTF, RR or PRIORITY (overrides the request)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Round-Robin time quantum in ticks (overrides the request)
    #[arg(short, long)]
    quantum: Option<Tick>,

    /// Generate this many random processes instead of reading --input
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random (a fresh seed is drawn and logged if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run every algorithm on the same workload and compare metrics
    #[arg(long)]
    compare: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("either --input or --random must be given")]
    MissingWorkload,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

#[derive(Serialize)]
struct Report<'a> {
    outcome: &'a SimulationOutcome,
    execution_order: Vec<String>,
    metrics: &'a SimulationMetrics,
}

#[derive(Serialize)]
struct ComparisonRow {
    algorithm: Algorithm,
    metrics: SimulationMetrics,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let request = resolve_request(args)?;

    if args.compare {
        return compare(args, &request.processes, request.quantum);
    }

    let outcome = Simulator::run_request(&request)?;
    let metrics = outcome.metrics()?;

    if args.json {
        let report = Report {
            outcome: &outcome,
            execution_order: outcome.execution_order(),
            metrics: &metrics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_outcome(&outcome, &metrics);
    }
    Ok(())
}

/// Builds the request from --input or --random, then applies overrides.
fn resolve_request(args: &Args) -> Result<SimulationRequest, CliError> {
    let mut request = if let Some(path) = &args.input {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str::<SimulationRequest>(&text)?
    } else if let Some(count) = args.random {
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(count, seed, "generating random workload");
        let mut rng = StdRng::seed_from_u64(seed);
        let processes = WorkloadConfig::default().with_count(count).generate(&mut rng);
        SimulationRequest::new(processes, Algorithm::Fcfs)
    } else {
        return Err(CliError::MissingWorkload);
    };

    if let Some(algorithm) = args.algorithm {
        request.algorithm = algorithm;
    }
    if let Some(quantum) = args.quantum {
        request.quantum = Some(quantum);
    }
    if request.quantum.is_none() && (request.algorithm.requires_quantum() || args.compare) {
        request.quantum = Some(DEFAULT_QUANTUM);
    }
    Ok(request)
}

fn compare(args: &Args, processes: &[ProcessSpec], quantum: Option<Tick>) -> Result<(), CliError> {
    let mut rows = Vec::new();
    for algorithm in Algorithm::ALL {
        let mut simulator = Simulator::new(algorithm);
        if let Some(q) = quantum {
            simulator = simulator.with_quantum(q);
        }
        let outcome = simulator.run(processes)?;
        rows.push(ComparisonRow {
            algorithm,
            metrics: outcome.metrics()?,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<10} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Algorithm", "Avg TAT", "Avg WT", "Avg RT", "CPU Util", "Throughput"
    );
    println!("{}", "-".repeat(67));
    for row in &rows {
        let m = &row.metrics;
        println!(
            "{:<10} {:>10.2} {:>10.2} {:>10.2} {:>9.2}% {:>12.2}",
            row.algorithm.name(),
            m.avg_turnaround,
            m.avg_waiting,
            m.avg_response,
            m.cpu_utilization,
            m.throughput
        );
    }
    Ok(())
}

fn print_outcome(outcome: &SimulationOutcome, metrics: &SimulationMetrics) {
    match outcome.quantum() {
        Some(q) => println!("Algorithm: {} (quantum {q})\n", outcome.algorithm().description()),
        None => println!("Algorithm: {}\n", outcome.algorithm().description()),
    }

    println!(
        "{:<8} {:>8} {:>8} {:>8} {:>10} {:>8} {:>8}",
        "PID", "Arrival", "Burst", "Priority", "Completion", "TAT", "WT"
    );
    println!("{}", "-".repeat(66));
    for p in outcome.processes() {
        println!(
            "{:<8} {:>8} {:>8} {:>8} {:>10} {:>8} {:>8}",
            p.id(),
            p.arrival(),
            p.burst(),
            p.priority(),
            fmt_tick(p.completion()),
            fmt_tick(p.turnaround()),
            fmt_tick(p.waiting()),
        );
    }

    println!("\nExecution order: {}", outcome.execution_order().join(" -> "));
    println!(
        "\nAvg TAT: {:.2}  Avg WT: {:.2}  CPU Util: {:.2}%  Throughput: {:.2} proc/unit",
        metrics.avg_turnaround, metrics.avg_waiting, metrics.cpu_utilization, metrics.throughput
    );
}

fn fmt_tick(value: Option<Tick>) -> String {
    value.map_or_else(|| "-".to_string(), |t| t.to_string())
}
