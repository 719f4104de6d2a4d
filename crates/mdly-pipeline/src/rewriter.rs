//! Span rewriter trait.
//!
//! Span rewriters claim regex matches in raw source text and replace them
//! with elements before markdown parsing.

use regex::{Captures, Regex};

use crate::Element;

/// Replacement decision for one pattern match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpanOutput {
    /// Replace the matched span with this element.
    Replace(Element),
    /// Leave the matched text unchanged.
    ///
    /// Skipped text stays visible to rewriters at lower priority.
    Skip,
}

/// Handler for one family of inline spans, selected by regex.
///
/// A rewriter supplies the pattern the pipeline scans with and a handler
/// invoked once per non-overlapping match, left to right. The pipeline
/// replaces exactly the whole-match span with the serialized element; the
/// handler never adjusts the span, it only inspects the capture groups.
///
/// # Thread Safety
///
/// Rewriters implement `Send` only (not `Sync`) since each document gets its
/// own pipeline instance. For parallel document processing, create separate
/// pipeline instances per thread.
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
///
/// use mdly_pipeline::{Element, SpanOutput, SpanRewriter};
/// use regex::{Captures, Regex};
///
/// static MENTION: LazyLock<Regex> =
///     LazyLock::new(|| Regex::new(r"@(?P<user>\w+)").unwrap());
///
/// struct MentionRewriter;
///
/// impl SpanRewriter for MentionRewriter {
///     fn pattern(&self) -> &Regex {
///         &MENTION
///     }
///
///     fn rewrite(&mut self, caps: &Captures<'_>) -> SpanOutput {
///         let user = &caps["user"];
///         SpanOutput::Replace(
///             Element::new("a")
///                 .with_attr("href", format!("/users/{user}"))
///                 .with_text(format!("@{user}")),
///         )
///     }
/// }
/// ```
pub trait SpanRewriter: Send {
    /// Pattern whose non-overlapping matches this rewriter claims.
    fn pattern(&self) -> &Regex;

    /// Handle one match of [`pattern`](Self::pattern).
    fn rewrite(&mut self, caps: &Captures<'_>) -> SpanOutput;
}
