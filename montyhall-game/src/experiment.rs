//! Experiment batches over repeated trials
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::numbers;
use crate::rng::RngBundle;
use crate::strategy::Strategy;
use crate::trial::play_trial;

/// Inputs describing one experiment batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Number of doors in each trial's lineup
    #[serde(default = "ExperimentConfig::default_doors")]
    pub doors: usize,
    /// Number of trials to run
    #[serde(default = "ExperimentConfig::default_trials")]
    pub trials: u64,
    /// Contestant behavior after the reveal
    #[serde(default = "ExperimentConfig::default_strategy")]
    pub strategy: Strategy,
    /// Seed deriving every trial's RNG streams
    #[serde(default)]
    pub seed: u64,
}

impl ExperimentConfig {
    const fn default_doors() -> usize {
        3
    }

    const fn default_trials() -> u64 {
        1_000
    }

    const fn default_strategy() -> Strategy {
        Strategy::Stay
    }

    /// Validate configuration invariants before running.
    ///
    /// # Errors
    ///
    /// Returns `ExperimentConfigError` when a count field is zero.
    pub fn validate(&self) -> Result<(), ExperimentConfigError> {
        if self.doors == 0 {
            return Err(ExperimentConfigError::MinViolation {
                field: "doors",
                min: 1,
                value: 0,
            });
        }
        if self.trials == 0 {
            return Err(ExperimentConfigError::MinViolation {
                field: "trials",
                min: 1,
                value: 0,
            });
        }
        Ok(())
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            doors: Self::default_doors(),
            trials: Self::default_trials(),
            strategy: Self::default_strategy(),
            seed: 0,
        }
    }
}

/// Errors raised when experiment configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExperimentConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u64,
        value: u64,
    },
}

/// Tally of a finished experiment batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    /// Trials the contestant won
    pub wins: u64,
    /// Trials performed
    pub attempts: u64,
}

impl ExperimentSummary {
    /// Win ratio rounded to a whole percentage.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        if self.attempts == 0 {
            return 0;
        }
        let ratio = numbers::u64_to_f64(self.wins) / numbers::u64_to_f64(self.attempts);
        numbers::round_f64_to_u8(ratio * 100.0)
    }

    /// Win ratio rendered as a whole-percent string like `33%`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{}%", self.percentage())
    }
}

/// Run the configured batch of trials, each over an independently derived seed.
///
/// # Errors
///
/// Returns `ExperimentConfigError` when the configuration fails validation.
pub fn run_experiment(cfg: &ExperimentConfig) -> Result<ExperimentSummary, ExperimentConfigError> {
    cfg.validate()?;

    let mut wins = 0_u64;
    for idx in 0..cfg.trials {
        let bundle = RngBundle::from_user_seed(cfg.seed.wrapping_add(idx));
        if play_trial(cfg.doors, cfg.strategy, &bundle) {
            wins += 1;
        }
    }

    Ok(ExperimentSummary {
        wins,
        attempts: cfg.trials,
    })
}
