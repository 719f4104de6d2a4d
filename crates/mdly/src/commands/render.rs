//! `mdly render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use mdly_cards::{CardsExtension, ScriptPosition};
use mdly_config::{CliSettings, Config};
use mdly_pipeline::Pipeline;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to read (default: stdin, `-` also selects stdin).
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdly.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Domain suffix admitted for card conversion (repeatable, overrides config).
    #[arg(long = "allow", value_name = "DOMAIN")]
    allowed_domains: Vec<String>,

    /// Loader script placement: after, before or none (overrides config).
    #[arg(long, value_name = "POSITION")]
    script_position: Option<ScriptPosition>,

    /// Enable verbose output (show resolved configuration).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or input/output I/O fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            allowed_domains: (!self.allowed_domains.is_empty()).then_some(self.allowed_domains),
            script_position: self.script_position,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if self.verbose {
            describe_config(&output, &config);
        }

        let source = super::read_input(self.input.as_deref())?;

        let mut pipeline = Pipeline::new();
        CardsExtension::new(config.cards).install(&mut pipeline);
        let html = pipeline.render(&source);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                std::io::stdout().lock().write_all(html.as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Print the resolved configuration to stderr.
fn describe_config(output: &Output, config: &Config) {
    match &config.config_path {
        Some(path) => output.info(&format!("Configuration: {}", path.display())),
        None => output.info("Configuration: built-in defaults"),
    }
    if config.cards.allowed_domains.is_empty() {
        output.info("Allowed domains: all");
    } else {
        output.info(&format!(
            "Allowed domains: {}",
            config.cards.allowed_domains.join(", ")
        ));
    }
}
