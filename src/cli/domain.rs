//! Domain subcommand implementation.

use crate::cli::Context;
use crate::domain::DomainExtractor;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;

/// Print the registrable domain of one or more URLs.
#[derive(Parser, Debug)]
pub struct DomainCommand {
    /// Page URLs or hostnames
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,
}

impl DomainCommand {
    /// Execute the domain command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let extractor = DomainExtractor::default();
        let mut failed = 0;

        for url in &self.urls {
            match extractor.extract(url) {
                Ok(domain) if self.urls.len() == 1 || ctx.quiet => println!("{}", domain),
                Ok(domain) => println!("{}\t{}", url, domain),
                Err(e) => {
                    output::print_warning(&e.to_string());
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(CliError::Other(format!(
                "{} of {} inputs had no domain",
                failed,
                self.urls.len()
            )));
        }

        Ok(())
    }
}
