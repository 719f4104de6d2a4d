//! Element model for span replacements.
//!
//! Rewriters hand the pipeline an [`Element`] rather than a raw HTML string,
//! so attribute values and text content are escaped in one place.

use std::borrow::Cow;
use std::fmt::Write;

/// A replacement node: tag, attributes, text content.
///
/// Attributes serialize in insertion order. Text content and attribute
/// values are escaped when the element is serialized, not when set.
///
/// # Example
///
/// ```
/// use mdly_pipeline::Element;
///
/// let el = Element::new("a")
///     .with_attr("href", "https://example.com")
///     .with_text("Example");
/// assert_eq!(el.to_html(), r#"<a href="https://example.com">Example</a>"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
}

impl Element {
    /// Create an element with the given tag and no attributes or text.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: String::new(),
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of the first attribute with the given name, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Unescaped text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Serialize to HTML, escaping attribute values and text content.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.tag.len() * 2 + self.text.len() + 16);
        html.push('<');
        html.push_str(&self.tag);
        for (name, value) in &self.attrs {
            write!(html, " {name}=\"{}\"", escape_html(value)).unwrap();
        }
        html.push('>');
        html.push_str(&escape_html(&self.text));
        write!(html, "</{}>", self.tag).unwrap();
        html
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for safe HTML embedding.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element() {
        let el = Element::new("span");
        assert_eq!(el.to_html(), "<span></span>");
    }

    #[test]
    fn test_attrs_serialize_in_insertion_order() {
        let el = Element::new("a")
            .with_attr("class", "card")
            .with_attr("href", "https://example.com")
            .with_attr("data-x", "1");

        assert_eq!(
            el.to_html(),
            r#"<a class="card" href="https://example.com" data-x="1"></a>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let el = Element::new("span").with_text("a < b & c");
        assert_eq!(el.to_html(), "<span>a &lt; b &amp; c</span>");
    }

    #[test]
    fn test_attr_value_is_escaped() {
        let el = Element::new("a").with_attr("href", r#"https://example.com/?q="x"&y=1"#);
        assert_eq!(
            el.to_html(),
            r#"<a href="https://example.com/?q=&quot;x&quot;&amp;y=1"></a>"#
        );
    }

    #[test]
    fn test_text_accessor_is_unescaped() {
        let el = Element::new("span").with_text("a & b");
        assert_eq!(el.text(), "a & b");
    }

    #[test]
    fn test_attr_accessor() {
        let el = Element::new("a").with_attr("href", "https://example.com");
        assert_eq!(el.attr("href"), Some("https://example.com"));
        assert_eq!(el.attr("class"), None);
    }

    #[test]
    fn test_escape_html_borrows_when_clean() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_html_all_specials() {
        assert_eq!(
            escape_html(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&#39;".to_owned()
        );
    }
}
