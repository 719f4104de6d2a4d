//! Card element synthesis.

use mdly_pipeline::Element;

use crate::CardOptions;

/// Class attribute marking card elements.
///
/// The loader script discovers cards by this class, and the script
/// injection pass keys off it as a literal marker substring.
pub const CARD_CLASS: &str = "embedly-card";

/// Build the card element for an admitted URL.
///
/// Attribute names and value formats are a compatibility surface for the
/// loader script and its styling. `data-card-key` appears only when a key
/// is configured; the other attributes are always present.
#[must_use]
pub fn synthesize(url: &str, card_type: &str, title: &str, options: &CardOptions) -> Element {
    let controls = if options.card_controls { "1" } else { "0" };

    let mut card = Element::new("a")
        .with_attr("class", CARD_CLASS)
        .with_attr("href", url)
        .with_attr("data-card-type", card_type)
        .with_attr("data-card-controls", controls)
        .with_attr("data-card-align", options.card_align.as_str())
        .with_attr("data-card-width", options.card_width.as_str())
        .with_attr("data-card-theme", options.card_theme.as_str());

    if !options.card_key.is_empty() {
        card = card.with_attr("data-card-key", options.card_key.as_str());
    }

    card.with_text(title)
}
