use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use pacer_delay::{SleepOutcome, Sleeper};
use serde::Serialize;

mod cli;
mod config;
use cli::Args;
use config::PacerConfig;

#[derive(Debug, Serialize)]
struct SleepReport {
    outcome: &'static str,
    elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    planned_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PacerConfig::load(path)?,
        None => PacerConfig::default(),
    }
    .with_overrides(args.seed, args.sampling.map(Into::into));

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        target: "pacer",
        version = env!("CARGO_PKG_VERSION"),
        sampling = %config.sampling,
        seeded = config.seed.is_some(),
        "pacer starting"
    );

    match args.command {
        cli::Command::Int { upper, count } => {
            let mut generator = config.generator();
            let values = (0..count)
                .map(|_| generator.random_int(upper))
                .collect::<Result<Vec<_>, _>>()?;
            print_values(&values, args.json)
        }
        cli::Command::Long { upper, count } => {
            let mut generator = config.generator();
            let values = (0..count)
                .map(|_| generator.random_long(upper))
                .collect::<Result<Vec<_>, _>>()?;
            print_values(&values, args.json)
        }
        cli::Command::Id { length } => {
            let id = config.generator().random_id(length);
            if args.json {
                println!("{}", serde_json::to_string(&id)?);
            } else {
                println!("{id}");
            }
            Ok(())
        }
        cli::Command::SleepMillis { millis } => {
            let started = Instant::now();
            let outcome = run_cancellable(move |sleeper| sleeper.sleep_millis(millis)).await??;
            report_sleep(outcome, started, None, args.json)
        }
        cli::Command::SleepSecs { secs } => {
            let started = Instant::now();
            let outcome = run_cancellable(move |sleeper| sleeper.sleep_secs(secs)).await??;
            report_sleep(outcome, started, None, args.json)
        }
        cli::Command::Jitter {
            base_ms,
            variance_ms,
        } => {
            let mut generator = config.generator();
            let started = Instant::now();
            let (planned, outcome) = run_cancellable(move |sleeper| {
                sleeper.sleep_jittered(&mut generator, base_ms, variance_ms)
            })
            .await?;
            report_sleep(outcome, started, Some(planned), args.json)
        }
        cli::Command::Repeat {
            iterations,
            interval_ms,
        } => {
            let interval = Duration::from_millis(interval_ms);
            let ran = run_cancellable(move |sleeper| {
                pacer_delay::repeat_with_sleep(sleeper, iterations, interval, |i, started_at| {
                    println!("tick {i} at {}ms", started_at.elapsed().as_millis());
                })
            })
            .await?;
            tracing::info!(target: "pacer", ran, iterations, "repeat finished");
            Ok(())
        }
    }
}

/// Runs a blocking sleep on the blocking pool and cancels it on Ctrl-C.
async fn run_cancellable<T, F>(op: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&Sleeper) -> T + Send + 'static,
{
    let sleeper = Sleeper::new();
    let token = sleeper.token().clone();
    let mut worker = tokio::task::spawn_blocking(move || op(&sleeper));

    tokio::select! {
        joined = &mut worker => Ok(joined?),
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::info!(target: "pacer", "interrupt received, cancelling sleep");
            token.cancel();
            Ok(worker.await?)
        }
    }
}

fn print_values<T: Serialize + std::fmt::Display>(values: &[T], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(values)?);
    } else {
        for value in values {
            println!("{value}");
        }
    }
    Ok(())
}

fn report_sleep(
    outcome: SleepOutcome,
    started: Instant,
    planned: Option<Duration>,
    json: bool,
) -> Result<()> {
    let report = SleepReport {
        outcome: if outcome.is_completed() {
            "completed"
        } else {
            "cancelled"
        },
        elapsed_ms: match outcome {
            SleepOutcome::Cancelled { elapsed } => elapsed,
            SleepOutcome::Completed => started.elapsed(),
        }
        .as_millis() as u64,
        planned_ms: planned.map(|planned| planned.as_millis() as u64),
    };

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else if let Some(planned_ms) = report.planned_ms {
        println!(
            "{} after {}ms (planned {planned_ms}ms)",
            report.outcome, report.elapsed_ms
        );
    } else {
        println!("{} after {}ms", report.outcome, report.elapsed_ms);
    }
    Ok(())
}
