//! Document pipeline: span rewriting, markdown rendering, postprocessing.

use pulldown_cmark::{Options, Parser, html};

use crate::fence::{FenceTracker, inline_code_spans};
use crate::{Postprocessor, SpanOutput, SpanRewriter};

/// Line fragment during span rewriting.
///
/// Claimed fragments hold serialized replacements and are opaque to
/// rewriters at lower priority.
enum Segment {
    Text(String),
    Claimed(String),
}

/// Markup-to-HTML pipeline with pluggable rewriting hooks.
///
/// Rendering runs in three phases:
///
/// 1. **Span rewriting**: registered [`SpanRewriter`]s claim regex matches
///    in the raw source, higher priority first, and replace them with
///    serialized elements. Fenced code blocks and inline code spans are
///    never rewritten.
/// 2. **Markdown rendering**: the rewritten source is rendered to HTML;
///    replacement elements pass through as inline HTML.
/// 3. **Postprocessing**: registered [`Postprocessor`]s rewrite the final
///    HTML string, higher priority first, each exactly once.
///
/// # Example
///
/// ```
/// use std::sync::LazyLock;
///
/// use mdly_pipeline::{Element, Pipeline, SpanOutput, SpanRewriter};
/// use regex::{Captures, Regex};
///
/// static ISSUE: LazyLock<Regex> =
///     LazyLock::new(|| Regex::new(r"#(?P<id>\d+)").unwrap());
///
/// struct IssueLinks;
///
/// impl SpanRewriter for IssueLinks {
///     fn pattern(&self) -> &Regex {
///         &ISSUE
///     }
///
///     fn rewrite(&mut self, caps: &Captures<'_>) -> SpanOutput {
///         let id = &caps["id"];
///         SpanOutput::Replace(
///             Element::new("a")
///                 .with_attr("href", format!("/issues/{id}"))
///                 .with_text(format!("#{id}")),
///         )
///     }
/// }
///
/// let mut pipeline = Pipeline::new().with_span_rewriter(100, IssueLinks);
/// let html = pipeline.render("Fixed in #42.");
/// assert!(html.contains(r#"<a href="/issues/42">#42</a>"#));
/// ```
pub struct Pipeline {
    rewriters: Vec<(u32, Box<dyn SpanRewriter>)>,
    postprocessors: Vec<(u32, Box<dyn Postprocessor>)>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Create a pipeline with no registered hooks.
    ///
    /// Rendering with no hooks is plain markdown to HTML.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rewriters: Vec::new(),
            postprocessors: Vec::new(),
        }
    }

    /// Register a span rewriter.
    ///
    /// Higher priority runs first; ties run in registration order.
    pub fn register_span_rewriter<R>(&mut self, priority: u32, rewriter: R)
    where
        R: SpanRewriter + 'static,
    {
        insert_by_priority(&mut self.rewriters, priority, Box::new(rewriter));
    }

    /// Register a span rewriter, builder style.
    #[must_use]
    pub fn with_span_rewriter<R>(mut self, priority: u32, rewriter: R) -> Self
    where
        R: SpanRewriter + 'static,
    {
        self.register_span_rewriter(priority, rewriter);
        self
    }

    /// Register a postprocessor.
    ///
    /// Higher priority runs first; ties run in registration order.
    pub fn register_postprocessor<P>(&mut self, priority: u32, postprocessor: P)
    where
        P: Postprocessor + 'static,
    {
        insert_by_priority(&mut self.postprocessors, priority, Box::new(postprocessor));
    }

    /// Register a postprocessor, builder style.
    #[must_use]
    pub fn with_postprocessor<P>(mut self, priority: u32, postprocessor: P) -> Self
    where
        P: Postprocessor + 'static,
    {
        self.register_postprocessor(priority, postprocessor);
        self
    }

    /// Rewrite spans in raw source text.
    ///
    /// Runs line by line. Fence marker lines and fence interiors pass
    /// through untouched; elsewhere each rewriter claims its matches left
    /// to right, and unclaimed text passes through byte-for-byte. Matches
    /// inside inline code spans are left for the markdown renderer.
    #[must_use]
    pub fn rewrite_spans(&mut self, source: &str) -> String {
        let mut fence = FenceTracker::new();
        let mut output = String::with_capacity(source.len());
        let lines: Vec<&str> = source.lines().collect();
        let line_count = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            let fence_marker = fence.advance(line);
            if fence_marker || fence.in_fence() {
                output.push_str(line);
            } else {
                output.push_str(&self.rewrite_line(line));
            }

            // Preserve line endings
            if idx < line_count - 1 || source.ends_with('\n') {
                output.push('\n');
            }
        }

        output
    }

    fn rewrite_line(&mut self, line: &str) -> String {
        let mut segments = vec![Segment::Text(line.to_owned())];

        for (_, rewriter) in &mut self.rewriters {
            let mut next = Vec::with_capacity(segments.len());
            for segment in segments {
                match segment {
                    Segment::Text(text) => rewrite_segment(rewriter.as_mut(), &text, &mut next),
                    claimed @ Segment::Claimed(_) => next.push(claimed),
                }
            }
            segments = next;
        }

        let mut result = String::with_capacity(line.len());
        for segment in &segments {
            match segment {
                Segment::Text(text) | Segment::Claimed(text) => result.push_str(text),
            }
        }
        result
    }

    /// Apply all postprocessors to serialized output, in priority order.
    pub fn postprocess(&mut self, output: &mut String) {
        for (_, postprocessor) in &mut self.postprocessors {
            postprocessor.run(output);
        }
    }

    /// Render markup to HTML: rewrite spans, render markdown, postprocess.
    #[must_use]
    pub fn render(&mut self, source: &str) -> String {
        let rewritten = self.rewrite_spans(source);
        let mut output = markdown_to_html(&rewritten);
        self.postprocess(&mut output);
        output
    }
}

/// Insert keeping the vector sorted by priority, highest first. Equal
/// priorities stay in registration order.
fn insert_by_priority<H: ?Sized>(entries: &mut Vec<(u32, Box<H>)>, priority: u32, hook: Box<H>) {
    let idx = entries
        .iter()
        .position(|(p, _)| *p < priority)
        .unwrap_or(entries.len());
    entries.insert(idx, (priority, hook));
}

/// Scan one text fragment with a rewriter, splitting it into claimed
/// replacements and leftover text. Matches touching an inline code span
/// are never claimed.
fn rewrite_segment(rewriter: &mut dyn SpanRewriter, text: &str, out: &mut Vec<Segment>) {
    let pattern = rewriter.pattern().clone();
    let code_spans = inline_code_spans(text);
    let mut last = 0;

    for caps in pattern.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };

        if code_spans
            .iter()
            .any(|span| m.start() < span.end && span.start < m.end())
        {
            continue;
        }
        if m.start() > last {
            out.push(Segment::Text(text[last..m.start()].to_owned()));
        }
        match rewriter.rewrite(&caps) {
            SpanOutput::Replace(element) => out.push(Segment::Claimed(element.to_html())),
            SpanOutput::Skip => out.push(Segment::Text(m.as_str().to_owned())),
        }
        last = m.end();
    }

    if last < text.len() {
        out.push(Segment::Text(text[last..].to_owned()));
    }
}

/// Render markdown to HTML with the table, strikethrough and task list
/// extensions enabled.
fn markdown_to_html(source: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(source, options);
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
