//! Review subcommand implementation.

use crate::cli::Context;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;

/// Ask the scoring service to review a domain.
#[derive(Parser, Debug)]
pub struct ReviewCommand {
    /// Page URL or hostname whose domain should be reviewed
    #[arg(value_name = "URL")]
    pub url: String,
}

impl ReviewCommand {
    /// Execute the review command.
    pub async fn execute(&self, ctx: &Context) -> CliResult<()> {
        let cache = ctx.cache()?;

        let domain = cache
            .request_review(&self.url)
            .await?
            .ok_or_else(|| CliError::Other(format!("no domain in '{}'", self.url)))?;

        if !ctx.quiet {
            output::print_success(&format!("Review requested for {}", domain));
        }

        Ok(())
    }
}
