//! CLI result presenter.

use palsel_orchestration::interfaces::{ResultPresenter, SelectionResult};

use crate::output::{format_count, format_duration, format_selection};
use crate::ui::{print_error, print_header};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &SelectionResult, input_len: usize, details: bool) {
        let selected = match &result.outcome {
            Ok(selected) => selected,
            Err(e) => {
                self.present_error(&format!("{}: {e}", result.algorithm));
                return;
            }
        };

        if self.quiet {
            println!("{}", format_selection(selected, true));
            return;
        }

        print_header(&result.algorithm);
        println!("Duration: {}", format_duration(result.duration));

        if details {
            println!("Input values: {}", format_count(input_len));
            println!("Palindromes: {}", format_count(selected.len()));
            println!("Rejected: {}", format_count(input_len - selected.len()));
        }

        println!("Result: {}", format_selection(selected, self.verbose));
    }

    fn present_comparison(&self, results: &[SelectionResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = match result.selected_len() {
                Some(len) => format!("OK, {} kept", format_count(len)),
                None => "ERROR".to_string(),
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
