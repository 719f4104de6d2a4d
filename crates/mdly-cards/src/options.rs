//! Extension options.

/// Loader script placement.
///
/// Parsed from configuration text. Parsing never fails: unrecognized values
/// are preserved in [`Other`](Self::Other) and inject nothing at the point
/// of use, matching the permissive handling of the rest of the options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum ScriptPosition {
    /// Append the loader script to the rendered output.
    #[default]
    After,
    /// Prepend the loader script to the rendered output.
    Before,
    /// Never inject the loader script.
    None,
    /// Unrecognized configured value, kept verbatim.
    Other(String),
}

impl ScriptPosition {
    /// Parse a configured value.
    ///
    /// The known spellings are `after`, `before` and `none`; anything else
    /// becomes [`Other`](Self::Other).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "after" => Self::After,
            "before" => Self::Before,
            "none" => Self::None,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for ScriptPosition {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl std::str::FromStr for ScriptPosition {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(value))
    }
}

/// Options for the embed cards extension.
///
/// Immutable once constructed; the installed hooks share one snapshot and
/// never re-derive defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardOptions {
    /// Title used when a directive omits one.
    pub default_title: String,
    /// Card type used when a directive omits one.
    pub default_type: String,
    /// Domain suffixes eligible for card conversion; empty allows all.
    pub allowed_domains: Vec<String>,
    /// Whether cards render share controls.
    pub card_controls: bool,
    /// Alignment presentation hint.
    pub card_align: String,
    /// Width presentation hint (CSS length).
    pub card_width: String,
    /// Theme presentation hint.
    pub card_theme: String,
    /// API key attached to cards; omitted when empty.
    pub card_key: String,
    /// Where the loader script is injected, if at all.
    pub script_position: ScriptPosition,
    /// Whether the injected script tag carries `async`.
    pub script_async: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            default_title: "Embedded content".to_owned(),
            default_type: "article".to_owned(),
            allowed_domains: Vec::new(),
            card_controls: false,
            card_align: "left".to_owned(),
            card_width: "100%".to_owned(),
            card_theme: "default".to_owned(),
            card_key: String::new(),
            script_position: ScriptPosition::default(),
            script_async: true,
        }
    }
}
