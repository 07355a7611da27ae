//! Command handlers.
//!
//! Each handler returns the exit code for a completed command; errors are
//! returned to `main`, which prints them and maps them to an exit code.

use std::io::{self, BufRead, Write};
use std::path::Path;

use br_common::{Error, OutputFormat, Result};
use br_config::model::EXAMPLE_YAML;
use br_config::{
    discover_configs, load_config, select_config, validate_semantics, ConfigSnapshot,
    Configuration, LoadedConfig,
};
use br_math::Precision;
use clap::CommandFactory;
use serde_json::json;
use tracing::{info, warn};

use crate::cli::{Cli, Commands, RunArgs};
use crate::exit_codes::ExitCode;
use crate::inference::BayesEngine;
use crate::report::Report;
use crate::selection::parse_selection;
use crate::session::QueryLog;

/// Source label for the embedded example.
pub const EXAMPLE_SOURCE: &str = "<embedded example>";

pub fn dispatch(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::List { dir } => cmd_list(dir, cli.format),
        Commands::Run(args) => cmd_run(args, cli.format),
        Commands::Validate { config } => cmd_validate(config, cli.format),
        Commands::Example => {
            print!("{}", EXAMPLE_YAML);
            Ok(ExitCode::Clean)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "br-core", &mut io::stdout());
            Ok(ExitCode::Clean)
        }
    }
}

/// Print an error in the requested format.
pub fn print_error(err: &Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let doc = json!({
                "error": {
                    "code": err.code(),
                    "message": err.to_string(),
                    "retryable": !err.is_session_fatal(),
                }
            });
            println!("{}", doc);
        }
        OutputFormat::Text => eprintln!("error: {}", err),
    }
}

fn cmd_list(dir: &Path, format: OutputFormat) -> Result<ExitCode> {
    let files = discover_configs(dir)?;
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = files
                .iter()
                .enumerate()
                .map(|(index, path)| json!({ "index": index, "path": path.display().to_string() }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "dir": dir.display().to_string(),
                    "files": entries,
                }))?
            );
        }
        OutputFormat::Text => {
            if files.is_empty() {
                println!("No configuration files in {}", dir.display());
            } else {
                println!("Available configuration files:");
                for (index, path) in files.iter().enumerate() {
                    println!("[{}] {}", index, path.display());
                }
            }
        }
    }
    Ok(ExitCode::Clean)
}

fn resolve_run_config(args: &RunArgs) -> Result<LoadedConfig> {
    if args.example {
        let config = Configuration::example()?;
        let snapshot = ConfigSnapshot::capture(EXAMPLE_SOURCE, EXAMPLE_YAML.as_bytes(), &config);
        return Ok(LoadedConfig { config, snapshot });
    }
    if let Some(path) = &args.config {
        return Ok(load_config(path)?);
    }
    if let Some(index) = args.index {
        let path = select_config(&args.dir, index)?;
        info!(index, path = %path.display(), "selected configuration");
        return Ok(load_config(&path)?);
    }
    Err(Error::Config(
        "no configuration given; pass a file, --index N or --example".to_string(),
    ))
}

fn cmd_run(args: &RunArgs, format: OutputFormat) -> Result<ExitCode> {
    let LoadedConfig { config, snapshot } = resolve_run_config(args)?;
    let validation = validate_semantics(&config);
    let precision = Precision::new(args.precision);

    let mut engine = BayesEngine::new(config);
    let marginals = engine.marginals()?.clone();
    let posteriors = engine.single_posteriors()?;

    let mut log = QueryLog::new();
    for selection in &args.facts {
        let indices = parse_selection(selection)?;
        log.run(&engine, &indices, precision)?;
    }
    if args.interactive {
        let stdin = io::stdin();
        prompt_queries(&engine, &mut log, precision, stdin.lock(), &mut io::stderr())?;
    }

    let report = Report::new(engine.config(), marginals, posteriors)
        .with_source(snapshot)
        .with_warnings(validation.warnings)
        .with_joint(log.into_queries());
    print!("{}", report.render(format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(ExitCode::Clean)
}

/// Ask for fact selections until EOF or an empty line.
///
/// Invalid selections are reported on `prompt` and asked again; they never
/// end the session.
pub fn prompt_queries<R: BufRead, W: Write>(
    engine: &BayesEngine,
    log: &mut QueryLog,
    precision: Precision,
    mut input: R,
    prompt: &mut W,
) -> Result<()> {
    loop {
        writeln!(prompt, "Facts to choose:")?;
        for (index, fact) in engine.config().facts().iter().enumerate() {
            writeln!(prompt, "[{}] {}", index, fact.name)?;
        }
        writeln!(
            prompt,
            "Please insert fact numbers separated by space (empty line to finish)"
        )?;
        prompt.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            return Ok(());
        }

        let outcome = parse_selection(&line)
            .map_err(Error::from)
            .and_then(|indices| {
                log.run(engine, &indices, precision)
                    .map(|_| ())
                    .map_err(Error::from)
            });
        if let Err(err) = outcome {
            warn!(error = %err, "selection rejected");
            writeln!(prompt, "{}; try again", err)?;
        }
    }
}

fn cmd_validate(path: &Path, format: OutputFormat) -> Result<ExitCode> {
    let loaded = load_config(path)?;
    let validation = validate_semantics(&loaded.config);

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "valid": true,
                    "source": loaded.snapshot,
                    "warnings": validation.warnings,
                }))?
            );
        }
        OutputFormat::Text => {
            println!(
                "OK: {} ({} hypotheses, {} facts)",
                path.display(),
                loaded.config.hypothesis_count(),
                loaded.config.fact_count()
            );
            for w in &validation.warnings {
                println!("warning: {}", w.message);
            }
        }
    }

    if validation.is_clean() {
        Ok(ExitCode::Clean)
    } else {
        Ok(ExitCode::Warnings)
    }
}
