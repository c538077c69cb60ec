use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pacer", version, about = "Bounded random values and cancellable sleeps")]
pub struct Args {
    /// TOML file with `seed`, `sampling` and `log` keys.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, env = "PACER_SEED", global = true)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, env = "PACER_SAMPLING", global = true)]
    pub sampling: Option<SamplingChoice>,
    #[arg(long, default_value_t = false, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw 32-bit values in [0, UPPER).
    Int {
        #[arg(allow_negative_numbers = true)]
        upper: i32,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Draw 64-bit values in [0, UPPER).
    Long {
        #[arg(allow_negative_numbers = true)]
        upper: i64,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Print a random alphanumeric identifier.
    Id {
        #[arg(long, default_value_t = pacer_rand::DEFAULT_ID_LENGTH)]
        length: usize,
    },
    /// Sleep for MILLIS milliseconds. Ctrl-C ends the sleep early.
    SleepMillis {
        #[arg(allow_negative_numbers = true)]
        millis: i64,
    },
    /// Sleep for SECS seconds. Ctrl-C ends the sleep early.
    SleepSecs {
        #[arg(allow_negative_numbers = true)]
        secs: i64,
    },
    /// Sleep for BASE_MS give or take half of VARIANCE_MS.
    Jitter {
        #[arg(long)]
        base_ms: u64,
        #[arg(long, default_value_t = 0)]
        variance_ms: u64,
    },
    /// Print a tick, then sleep, ITERATIONS times.
    Repeat {
        #[arg(long)]
        iterations: usize,
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SamplingChoice {
    #[value(alias = "modulo_abs")]
    ModuloAbs,
    Uniform,
}

impl From<SamplingChoice> for pacer_rand::Sampling {
    fn from(value: SamplingChoice) -> Self {
        match value {
            SamplingChoice::ModuloAbs => pacer_rand::Sampling::ModuloAbs,
            SamplingChoice::Uniform => pacer_rand::Sampling::Uniform,
        }
    }
}
