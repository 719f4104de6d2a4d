//! Markup pipeline with pluggable rewriting hooks.
//!
//! The [`Pipeline`] renders markdown to HTML in three phases: registered
//! [`SpanRewriter`]s claim regex matches in the raw source and replace them
//! with [`Element`]s, the rewritten source is rendered to HTML, and
//! registered [`Postprocessor`]s rewrite the serialized output once at the
//! end. Hooks are registered by ordinal priority; higher priority runs
//! first.
//!
//! The pipeline itself knows nothing about any particular span syntax;
//! extensions supply rewriters and postprocessors.

mod element;
mod fence;
mod pipeline;
mod postprocessor;
mod rewriter;

pub use element::{Element, escape_html};
pub use fence::{FenceTracker, inline_code_spans};
pub use pipeline::Pipeline;
pub use postprocessor::Postprocessor;
pub use rewriter::{SpanOutput, SpanRewriter};
