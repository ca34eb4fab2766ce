//! Run configuration from CLI arguments and environment.
//!
//! Flags override environment variables; nothing here changes how units are
//! classified.

use std::path::PathBuf;

use tsfix_units::TestCategory;

use crate::runner::{AmbientPolicy, RunnerOptions};

/// Corpus root when neither `--corpus` nor `TS_REPO_DIR` is given.
pub const DEFAULT_CORPUS_ROOT: &str = "./typescript";
pub const DEFAULT_OUTPUT_DIR: &str = "./fixtures";
pub const DEFAULT_ORACLE_COMMAND: &str = "node oracle/ts-oracle.mjs";

/// Invalid command-line input. Maps to exit status 2.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown category '{0}' (expected compiler or conformance)")]
    UnknownCategory(String),
    #[error("oracle command is empty")]
    EmptyOracleCommand,
}

/// Everything a `generate` run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub corpus_root: PathBuf,
    pub output_dir: PathBuf,
    pub debug: bool,
    /// Classify and report without writing anything.
    pub dry_run: bool,
    /// Program followed by its arguments.
    pub oracle_command: Vec<String>,
    pub categories: Vec<TestCategory>,
    pub runner: RunnerOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            corpus_root: PathBuf::from(DEFAULT_CORPUS_ROOT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            debug: false,
            dry_run: false,
            oracle_command: split_command(DEFAULT_ORACLE_COMMAND),
            categories: TestCategory::ALL.to_vec(),
            runner: RunnerOptions::default(),
        }
    }
}

impl RunConfig {
    /// Build a config from the process environment and `args` (flags only,
    /// without the program or command name).
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        Self::from_env_and_args(|name| std::env::var(name).ok(), args)
    }

    /// Build a config from an environment lookup and `args`.
    pub fn from_env_and_args(
        env: impl Fn(&str) -> Option<String>,
        args: &[String],
    ) -> Result<Self, ConfigError> {
        let mut config = RunConfig::default();

        if let Some(root) = env("TS_REPO_DIR").filter(|v| !v.is_empty()) {
            config.corpus_root = PathBuf::from(root);
        }
        config.debug = is_set(env("DEBUG"));
        config.dry_run = is_set(env("NO_SAVE"));
        if let Some(command) = env("TSFIX_ORACLE").filter(|v| !v.trim().is_empty()) {
            config.oracle_command = split_command(&command);
        }

        let mut categories = Vec::new();
        for arg in args {
            if let Some(dir) = arg.strip_prefix("--corpus=") {
                config.corpus_root = PathBuf::from(non_empty("--corpus", dir)?);
            } else if let Some(dir) = arg.strip_prefix("--out=") {
                config.output_dir = PathBuf::from(non_empty("--out", dir)?);
            } else if arg == "--debug" || arg == "-v" {
                config.debug = true;
            } else if arg == "--dry-run" {
                config.dry_run = true;
            } else if let Some(command) = arg.strip_prefix("--oracle=") {
                config.oracle_command = split_command(command);
                if config.oracle_command.is_empty() {
                    return Err(ConfigError::EmptyOracleCommand);
                }
            } else if arg == "--no-parallel" {
                config.runner.parallel = false;
            } else if let Some(jobs) = arg.strip_prefix("--jobs=") {
                config.runner.jobs = Some(parse_jobs(jobs)?);
            } else if let Some(name) = arg.strip_prefix("--category=") {
                let category = TestCategory::parse(name)
                    .ok_or_else(|| ConfigError::UnknownCategory(name.to_string()))?;
                if !categories.contains(&category) {
                    categories.push(category);
                }
            } else if let Some(filter) = arg.strip_prefix("--filter=") {
                config.runner.filter = Some(non_empty("--filter", filter)?.to_string());
            } else if arg == "--strict-ambient" {
                config.runner.ambient = AmbientPolicy::Fatal;
            } else {
                return Err(ConfigError::UnknownFlag(arg.clone()));
            }
        }

        if !categories.is_empty() {
            config.categories = categories;
        }
        Ok(config)
    }
}

/// Environment toggles are on for any non-empty value.
fn is_set(value: Option<String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

fn non_empty<'a>(flag: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::InvalidValue {
            flag,
            value: String::new(),
        })
    } else {
        Ok(value)
    }
}

fn parse_jobs(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            flag: "--jobs",
            value: value.to_string(),
        }),
    }
}
