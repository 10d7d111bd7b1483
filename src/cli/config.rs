//! Config subcommand implementation.

use crate::cli::Context;
use crate::config::Settings;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, Subcommand};

/// Show or initialize settings.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Settings actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        match &self.action {
            ConfigAction::Show => {
                if !ctx.quiet {
                    output::print_info(&format!(
                        "Settings file: {}",
                        ctx.settings_file.display()
                    ));
                    output::print_info(&format!("Records: {}", ctx.records_dir.display()));
                }
                let json = serde_json::to_string_pretty(&ctx.settings)
                    .map_err(|e| CliError::Other(e.to_string()))?;
                println!("{}", json);
                Ok(())
            }
            ConfigAction::Init { force } => {
                if ctx.settings_file.exists() && !force {
                    return Err(CliError::Other(format!(
                        "{} already exists (use --force to overwrite)",
                        ctx.settings_file.display()
                    )));
                }

                Settings::default().save_to(&ctx.settings_file)?;

                if !ctx.quiet {
                    output::print_success(&format!(
                        "Wrote default settings to {}",
                        ctx.settings_file.display()
                    ));
                }
                Ok(())
            }
        }
    }
}
