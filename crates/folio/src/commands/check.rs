//! `folio check` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs;

impl CheckArgs {
    /// Report content problems; fails when any are found.
    pub(crate) fn execute(self, global: &GlobalArgs, output: &Output) -> Result<(), CliError> {
        let (config, site) = global.load_site()?;
        let diagnostics = site.check();

        if diagnostics.is_empty() {
            output.success(&format!(
                "No problems found in {}",
                config.content_resolved.root_dir.display()
            ));
            return Ok(());
        }

        for diagnostic in &diagnostics {
            output.warning(&diagnostic.to_string());
        }
        Err(CliError::Validation(problem_summary(diagnostics.len())))
    }
}

fn problem_summary(count: usize) -> String {
    if count == 1 {
        "1 problem found".to_owned()
    } else {
        format!("{count} problems found")
    }
}
