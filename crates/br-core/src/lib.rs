//! Bayes Reasoning core: the Bayes engine and its command-line driver.
//!
//! Given prior probabilities of mutually exclusive hypotheses and the
//! likelihood of each fact under each hypothesis, the engine derives:
//! - the marginal probability of every fact,
//! - the posterior of every hypothesis given a single fact,
//! - the posterior of every hypothesis given a set of facts assumed
//!   conditionally independent (naive-Bayes combination).
//!
//! The engine performs no I/O. Loading, prompting and printing live in
//! [`commands`], [`selection`] and [`report`].

pub mod cli;
pub mod commands;
pub mod exit_codes;
pub mod inference;
pub mod logging;
pub mod report;
pub mod selection;
pub mod session;

pub use exit_codes::ExitCode;
pub use inference::{BayesEngine, InferenceError};
