//! Extension wiring.

use std::sync::Arc;

use mdly_pipeline::Pipeline;

use crate::directive::CardRewriter;
use crate::script::ScriptInjector;
use crate::{CardOptions, ScriptPosition};

/// Priority for the directive rewriter.
///
/// Sorts ahead of link-style span rewriting so the directive claims the
/// bracketed span first.
pub const CARD_REWRITER_PRIORITY: u32 = 175;

/// Priority for the loader script postprocessor.
pub const SCRIPT_INJECTOR_PRIORITY: u32 = 10;

/// The embed cards extension.
///
/// Owns one immutable [`CardOptions`] snapshot and installs the two
/// pipeline hooks that share it: the directive rewriter, and the script
/// injector unless `script_position` is `none`.
///
/// # Example
///
/// ```
/// use mdly_cards::{CardOptions, CardsExtension};
/// use mdly_pipeline::Pipeline;
///
/// let mut pipeline = Pipeline::new();
/// CardsExtension::new(CardOptions::default()).install(&mut pipeline);
///
/// let html = pipeline.render("[!embed https://youtu.be/abc Video Title]");
/// assert!(html.contains(r#"class="embedly-card""#));
/// ```
pub struct CardsExtension {
    options: Arc<CardOptions>,
}

impl CardsExtension {
    /// Create the extension with the given options.
    #[must_use]
    pub fn new(options: CardOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    /// The options snapshot shared by the installed hooks.
    #[must_use]
    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Install the extension's hooks into a pipeline.
    ///
    /// An unrecognized `script_position` still registers the injector; it
    /// then injects nothing at run time.
    pub fn install(&self, pipeline: &mut Pipeline) {
        pipeline.register_span_rewriter(
            CARD_REWRITER_PRIORITY,
            CardRewriter::new(Arc::clone(&self.options)),
        );

        if !matches!(self.options.script_position, ScriptPosition::None) {
            pipeline.register_postprocessor(
                SCRIPT_INJECTOR_PRIORITY,
                ScriptInjector::new(Arc::clone(&self.options)),
            );
        }
    }
}
