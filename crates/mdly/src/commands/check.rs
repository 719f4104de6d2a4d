//! `mdly check` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use mdly_cards::CardRewriter;
use mdly_config::{CliSettings, Config};
use mdly_pipeline::{FenceTracker, SpanOutput, SpanRewriter, inline_code_spans};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Markdown file to read (default: stdin, `-` also selects stdin).
    input: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdly.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Domain suffix admitted for card conversion (repeatable, overrides config).
    #[arg(long = "allow", value_name = "DOMAIN")]
    allowed_domains: Vec<String>,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            allowed_domains: (!self.allowed_domains.is_empty()).then_some(self.allowed_domains),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = super::read_input(self.input.as_deref())?;

        let mut rewriter = CardRewriter::new(Arc::new(config.cards));
        let pattern = rewriter.pattern().clone();

        let mut cards = 0;
        let mut literals = 0;
        let mut fence = FenceTracker::new();

        for (idx, line) in source.lines().enumerate() {
            let fence_marker = fence.advance(line);
            if fence_marker || fence.in_fence() {
                continue;
            }

            let code_spans = inline_code_spans(line);
            for caps in pattern.captures_iter(line) {
                let Some(m) = caps.get(0) else { continue };
                if code_spans
                    .iter()
                    .any(|span| m.start() < span.end && span.start < m.end())
                {
                    continue;
                }

                let url = caps["url"].to_owned();
                match rewriter.rewrite(&caps) {
                    // Admitted directives become anchor cards
                    SpanOutput::Replace(element) if element.tag() == "a" => {
                        cards += 1;
                        output.info(&format!("  line {}: {url} -> card", idx + 1));
                    }
                    _ => {
                        literals += 1;
                        output.info(&format!("  line {}: {url} -> text (not admitted)", idx + 1));
                    }
                }
            }
        }

        let total = cards + literals;
        if total == 0 {
            output.info("No embed directives found");
        } else if literals == 0 {
            output.success(&format!("{total} embed directives, all admitted"));
        } else {
            output.warning(&format!(
                "{total} embed directives, {literals} kept as literal text"
            ));
        }

        Ok(())
    }
}
