//! Loader script injection.

use std::sync::Arc;

use mdly_pipeline::Postprocessor;

use crate::CardOptions;
use crate::card::CARD_CLASS;
use crate::options::ScriptPosition;

/// Loader script source URL.
pub const SCRIPT_URL: &str = "https://cdn.embedly.com/widgets/platform.js";

/// Postprocessor adding the loader script tag to rendered output.
///
/// Runs once per render. Output without the card marker is left untouched,
/// so documents that produced no cards never load the script. The marker
/// test is a literal substring scan, not a structural query; text that
/// merely mentions the marker also triggers injection.
pub struct ScriptInjector {
    options: Arc<CardOptions>,
}

impl ScriptInjector {
    /// Create an injector reading the given options snapshot.
    #[must_use]
    pub fn new(options: Arc<CardOptions>) -> Self {
        Self { options }
    }
}

impl Postprocessor for ScriptInjector {
    fn run(&mut self, output: &mut String) {
        if matches!(self.options.script_position, ScriptPosition::None) {
            return;
        }
        if !output.contains(CARD_CLASS) {
            return;
        }

        let tag = script_tag(self.options.script_async);
        match &self.options.script_position {
            ScriptPosition::Before => output.insert_str(0, &tag),
            ScriptPosition::After => output.push_str(&tag),
            // Unrecognized placement injects nothing; the configured value
            // is not an error.
            ScriptPosition::None | ScriptPosition::Other(_) => {}
        }
    }
}

/// The loader script tag, with `async` when configured.
pub(crate) fn script_tag(script_async: bool) -> String {
    let async_attr = if script_async { " async" } else { "" };
    format!(r#"<script{async_attr} src="{SCRIPT_URL}" charset="UTF-8"></script>"#)
}
