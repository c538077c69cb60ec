use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pacer_rand::{BoundedRandom, Sampling};
use serde::Deserialize;

const DEFAULT_LOG_FILTER: &str = "pacer=info";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacerConfig {
    pub seed: Option<u64>,
    pub sampling: Sampling,
    pub log: Option<String>,
}

impl PacerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Command-line values win over the file.
    pub fn with_overrides(mut self, seed: Option<u64>, sampling: Option<Sampling>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(sampling) = sampling {
            self.sampling = sampling;
        }
        self
    }

    /// `PACER_LOG` first, then the file, then the default.
    pub fn log_filter(&self) -> String {
        std::env::var("PACER_LOG")
            .ok()
            .or_else(|| self.log.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into())
    }

    pub fn generator(&self) -> BoundedRandom {
        match self.seed {
            Some(seed) => BoundedRandom::seeded(seed, self.sampling),
            None => BoundedRandom::from_entropy(self.sampling),
        }
    }
}
