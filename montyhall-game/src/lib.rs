//! Monty Hall Trial Engine
//!
//! Platform-agnostic core simulation logic for the Monty Hall probability puzzle.
//! This crate provides the trial and experiment mechanics without any terminal or
//! platform-specific dependencies.

pub mod door;
pub mod experiment;
pub mod numbers;
pub mod reveal;
pub mod rng;
pub mod strategy;
pub mod trial;

// Re-export commonly used types
pub use door::{Door, generate_doors};
pub use experiment::{ExperimentConfig, ExperimentConfigError, ExperimentSummary, run_experiment};
pub use reveal::{Reveal, resolve_reveal};
pub use rng::{CountingRng, RngBundle, entropy_seed};
pub use strategy::{ParseStrategyError, Strategy};
pub use trial::play_trial;
