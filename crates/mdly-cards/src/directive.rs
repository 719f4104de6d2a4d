//! Embed directive matching.

use std::sync::{Arc, LazyLock};

use mdly_pipeline::{Element, SpanOutput, SpanRewriter};
use regex::{Captures, Regex};

use crate::CardOptions;
use crate::card::synthesize;
use crate::policy::admit;

/// Directive grammar: `[!embed` `(":" TYPE)?` URL `(TITLE)?` `]` where TYPE
/// is word characters, URL runs to the next whitespace or `]`, and TITLE is
/// everything up to the closing `]`.
static EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[!embed(?::(?P<type>\w+))?\s+(?P<url>[^\s\]]+)(?:\s+(?P<title>[^\]]+))?\]")
        .unwrap()
});

/// Span rewriter turning embed directives into card elements.
///
/// Each match produces exactly one element: a card when the URL passes the
/// admission policy, otherwise a plain `<span>` wrapping the matched text
/// verbatim. The directive is never silently dropped.
pub struct CardRewriter {
    options: Arc<CardOptions>,
}

impl CardRewriter {
    /// Create a rewriter reading the given options snapshot.
    #[must_use]
    pub fn new(options: Arc<CardOptions>) -> Self {
        Self { options }
    }
}

impl SpanRewriter for CardRewriter {
    fn pattern(&self) -> &Regex {
        &EMBED
    }

    fn rewrite(&mut self, caps: &Captures<'_>) -> SpanOutput {
        let url = &caps["url"];

        if !admit(url, &self.options.allowed_domains) {
            return SpanOutput::Replace(Element::new("span").with_text(&caps[0]));
        }

        let card_type = caps
            .name("type")
            .map_or(self.options.default_type.as_str(), |m| m.as_str());
        let title = caps
            .name("title")
            .map_or(self.options.default_title.as_str(), |m| m.as_str());

        SpanOutput::Replace(synthesize(url, card_type, title, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(rewriter: &mut CardRewriter, input: &str) -> Element {
        let pattern = rewriter.pattern().clone();
        let caps = pattern.captures(input).expect("directive should match");
        match rewriter.rewrite(&caps) {
            SpanOutput::Replace(element) => element,
            SpanOutput::Skip => panic!("directive handler never skips"),
        }
    }

    fn default_rewriter() -> CardRewriter {
        CardRewriter::new(Arc::new(CardOptions::default()))
    }

    #[test]
    fn test_directive_with_type_and_title() {
        let mut rewriter = default_rewriter();
        let card = rewrite(&mut rewriter, "[!embed:video https://youtu.be/abc My Video]");

        assert_eq!(card.tag(), "a");
        assert_eq!(card.attr("href"), Some("https://youtu.be/abc"));
        assert_eq!(card.attr("data-card-type"), Some("video"));
        assert_eq!(card.text(), "My Video");
    }

    #[test]
    fn test_type_falls_back_to_default() {
        let mut rewriter = default_rewriter();
        let card = rewrite(&mut rewriter, "[!embed https://youtu.be/abc My Video]");

        assert_eq!(card.attr("data-card-type"), Some("article"));
    }

    #[test]
    fn test_title_falls_back_to_default() {
        let mut rewriter = default_rewriter();
        let card = rewrite(&mut rewriter, "[!embed https://youtu.be/abc]");

        assert_eq!(card.text(), "Embedded content");
    }

    #[test]
    fn test_configured_defaults_apply() {
        let options = CardOptions {
            default_title: "An embed".to_owned(),
            default_type: "link".to_owned(),
            ..CardOptions::default()
        };
        let mut rewriter = CardRewriter::new(Arc::new(options));
        let card = rewrite(&mut rewriter, "[!embed https://example.com]");

        assert_eq!(card.attr("data-card-type"), Some("link"));
        assert_eq!(card.text(), "An embed");
    }

    #[test]
    fn test_title_may_contain_spaces() {
        let mut rewriter = default_rewriter();
        let card = rewrite(
            &mut rewriter,
            "[!embed https://example.com A longer title here]",
        );

        assert_eq!(card.text(), "A longer title here");
    }

    #[test]
    fn test_invalid_url_becomes_passthrough_span() {
        let mut rewriter = default_rewriter();
        let span = rewrite(&mut rewriter, "[!embed notaurl]");

        assert_eq!(span.tag(), "span");
        assert_eq!(span.text(), "[!embed notaurl]");
    }

    #[test]
    fn test_relative_url_becomes_passthrough_span() {
        let mut rewriter = default_rewriter();
        let span = rewrite(&mut rewriter, "[!embed /relative/path A title]");

        assert_eq!(span.tag(), "span");
        assert_eq!(span.text(), "[!embed /relative/path A title]");
    }

    #[test]
    fn test_disallowed_domain_becomes_passthrough_span() {
        let options = CardOptions {
            allowed_domains: vec!["example.com".to_owned()],
            ..CardOptions::default()
        };
        let mut rewriter = CardRewriter::new(Arc::new(options));
        let span = rewrite(&mut rewriter, "[!embed:video https://example.org/x Title]");

        assert_eq!(span.tag(), "span");
        assert_eq!(span.text(), "[!embed:video https://example.org/x Title]");
    }

    #[test]
    fn test_allowed_domain_becomes_card() {
        let options = CardOptions {
            allowed_domains: vec!["example.com".to_owned()],
            ..CardOptions::default()
        };
        let mut rewriter = CardRewriter::new(Arc::new(options));
        let card = rewrite(&mut rewriter, "[!embed https://sub.example.com/x]");

        assert_eq!(card.tag(), "a");
    }

    #[test]
    fn test_pattern_requires_url() {
        let rewriter = default_rewriter();
        assert!(!rewriter.pattern().is_match("[!embed]"));
        assert!(!rewriter.pattern().is_match("[!embed:video]"));
    }

    #[test]
    fn test_pattern_matches_are_non_overlapping() {
        let rewriter = default_rewriter();
        let matches: Vec<_> = rewriter
            .pattern()
            .find_iter("[!embed https://a.com] and [!embed https://b.com]")
            .map(|m| m.as_str())
            .collect();

        assert_eq!(
            matches,
            vec!["[!embed https://a.com]", "[!embed https://b.com]"]
        );
    }
}
