//! Application entry point and dispatch.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use palsel_cli::input::{parse_args, read_file, read_from};
use palsel_cli::output::write_to_file;
use palsel_cli::presenter::CLIResultPresenter;
use palsel_cli::ui::print_warning;
use palsel_core::registry::DefaultFactory;
use palsel_orchestration::interfaces::ResultPresenter;
use palsel_orchestration::orchestrator::{analyze_comparison_results, execute_selections};
use palsel_orchestration::selector_selection::get_selectors_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(version = %crate::version::full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "palsel", &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn load_numbers(config: &AppConfig) -> Result<Vec<i32>> {
    if let Some(path) = &config.input {
        return read_file(path).with_context(|| format!("reading {}", path.display()));
    }
    if !config.numbers.is_empty() {
        return Ok(parse_args(&config.numbers)?);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        debug!("no numbers given and stdin is a terminal, using empty input");
        return Ok(Vec::new());
    }
    Ok(read_from(stdin.lock())?)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();
    let numbers = load_numbers(config)?;
    debug!(count = numbers.len(), algo = %config.algo, "input loaded");

    let factory = DefaultFactory::new();
    let selectors = get_selectors_to_run(&config.algo, &factory)?;
    let results = execute_selections(&selectors, &numbers, &opts);

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);

    // In quiet mode a single listing is enough
    let shown = if config.quiet {
        &results[..results.len().min(1)]
    } else {
        &results[..]
    };
    for result in shown {
        presenter.present_result(result, numbers.len(), config.details);
    }
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // The first failure decides the exit code
    if let Some(Err(e)) = results.iter().map(|r| &r.outcome).find(|o| o.is_err()) {
        return Err(e.clone().into());
    }

    if results.len() > 1 {
        if let Err(e) = analyze_comparison_results(&results) {
            warn!(error = %e, "selectors disagree");
            print_warning(&e.to_string());
            return Err(e.into());
        }
    }

    if let Some(ref path) = config.output {
        if let Some(Ok(selected)) = results.first().map(|r| &r.outcome) {
            write_to_file(path, selected).with_context(|| format!("writing {path}"))?;
        }
    }

    Ok(())
}
