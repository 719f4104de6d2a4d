//! Code region tracking.
//!
//! Span rewriting must leave code regions alone: [`FenceTracker`] tracks
//! fenced block state as the pipeline walks the source line by line, and
//! [`inline_code_spans`] locates backtick code spans within a single line.

use std::ops::Range;

/// Line-by-line fence state.
///
/// `CommonMark` fences open with three or more backticks or tildes; the
/// closing fence uses the same character and is at least as long. Feed
/// every line through [`advance`](Self::advance); a line is protected when
/// `advance` returns `true` or the tracker is [`in_fence`](Self::in_fence).
#[derive(Debug, Default)]
pub struct FenceTracker {
    /// Character and length of the currently open fence.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tracker is inside an open fence.
    pub fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Advance over one line, opening or closing a fence as needed.
    ///
    /// Returns `true` if the line itself is a fence marker.
    pub fn advance(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();

        match self.open {
            Some((ch, len)) => {
                if closes_fence(trimmed, ch, len) {
                    self.open = None;
                    true
                } else {
                    false
                }
            }
            None => {
                self.open = opens_fence(trimmed);
                self.open.is_some()
            }
        }
    }
}

fn opens_fence(trimmed: &str) -> Option<(char, usize)> {
    let ch = trimmed.chars().next()?;
    if ch != '`' && ch != '~' {
        return None;
    }

    let len = trimmed.chars().take_while(|&c| c == ch).count();
    (len >= 3).then_some((ch, len))
}

/// A closing fence repeats the opening character at least as many times,
/// followed by nothing but whitespace.
fn closes_fence(trimmed: &str, ch: char, min_len: usize) -> bool {
    let len = trimmed.chars().take_while(|&c| c == ch).count();
    len >= min_len && trimmed[len..].chars().all(char::is_whitespace)
}

/// Byte ranges of inline code spans within one line.
///
/// A code span opens with a backtick run and closes at the next run of
/// exactly the same length, so ``` ``a `b` c`` ``` is one span. Backtick
/// runs with no matching closer are literal text, and a backslash-escaped
/// backtick opens nothing.
#[must_use]
pub fn inline_code_spans(line: &str) -> Vec<Range<usize>> {
    let bytes = line.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some((start, len)) = next_backtick_run(bytes, pos) {
        pos = start + len;
        if start > 0 && bytes[start - 1] == b'\\' {
            continue;
        }

        let mut search = pos;
        while let Some((close, close_len)) = next_backtick_run(bytes, search) {
            search = close + close_len;
            if close_len == len {
                spans.push(start..search);
                pos = search;
                break;
            }
        }
    }

    spans
}

/// Start and length of the next backtick run at or after `from`.
fn next_backtick_run(bytes: &[u8], from: usize) -> Option<(usize, usize)> {
    let start = from + bytes[from..].iter().position(|&b| b == b'`')?;
    let len = bytes[start..].iter().take_while(|&&b| b == b'`').count();
    Some((start, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_outside_fence() {
        assert!(!FenceTracker::new().in_fence());
    }

    #[test]
    fn test_backtick_fence_opens_and_closes() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.advance("```rust"));
        assert!(tracker.in_fence());
        assert!(!tracker.advance("let x = 1;"));
        assert!(tracker.in_fence());
        assert!(tracker.advance("```"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_tilde_fence() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.advance("~~~"));
        assert!(tracker.in_fence());
        assert!(tracker.advance("~~~"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_closing_fence_must_be_at_least_as_long() {
        let mut tracker = FenceTracker::new();

        tracker.advance("````");
        assert!(!tracker.advance("```"));
        assert!(tracker.in_fence());
        assert!(tracker.advance("`````"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_closing_fence_must_match_character() {
        let mut tracker = FenceTracker::new();

        tracker.advance("```");
        assert!(!tracker.advance("~~~"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_two_backticks_are_not_a_fence() {
        let mut tracker = FenceTracker::new();

        assert!(!tracker.advance("``inline``"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_indented_fence() {
        let mut tracker = FenceTracker::new();

        assert!(tracker.advance("  ```"));
        assert!(tracker.in_fence());
        assert!(tracker.advance("   ```"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn test_text_after_closing_chars_keeps_fence_open() {
        let mut tracker = FenceTracker::new();

        tracker.advance("```");
        assert!(!tracker.advance("``` not a close"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn test_inline_span_single_backticks() {
        assert_eq!(inline_code_spans("a `b` c"), vec![2..5]);
    }

    #[test]
    fn test_inline_span_none_without_backticks() {
        assert!(inline_code_spans("plain text").is_empty());
    }

    #[test]
    fn test_inline_span_multiple_on_one_line() {
        assert_eq!(inline_code_spans("`a` and `b`"), vec![0..3, 8..11]);
    }

    #[test]
    fn test_inline_span_unclosed_backtick_is_literal() {
        assert!(inline_code_spans("a ` b").is_empty());
    }

    #[test]
    fn test_inline_span_double_backticks_contain_single() {
        assert_eq!(inline_code_spans("``a `b` c``"), vec![0..11]);
    }

    #[test]
    fn test_inline_span_run_lengths_must_match() {
        assert!(inline_code_spans("``a`").is_empty());
    }

    #[test]
    fn test_inline_span_escaped_backtick_opens_nothing() {
        assert!(inline_code_spans(r"a \`b\` c").is_empty());
    }
}
