#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Case transform for tag or attribute names.
///
/// Configuration values are matched case-insensitively; anything that is
/// not `lower` or `upper` means [`CaseStyle::Leave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum CaseStyle {
    Lower,
    Upper,
    #[default]
    Leave,
}

impl From<&str> for CaseStyle {
    fn from(value: &str) -> CaseStyle {
        match value.to_ascii_lowercase().as_str() {
            "lower" => CaseStyle::Lower,
            "upper" => CaseStyle::Upper,
            _ => CaseStyle::Leave,
        }
    }
}

impl From<String> for CaseStyle {
    fn from(value: String) -> CaseStyle {
        CaseStyle::from(value.as_str())
    }
}

impl From<CaseStyle> for String {
    fn from(value: CaseStyle) -> String {
        match value {
            CaseStyle::Lower => "lower",
            CaseStyle::Upper => "upper",
            CaseStyle::Leave => "leave",
        }
        .to_string()
    }
}

/// Quote character used around attribute values.
///
/// Any configuration value other than `single` means [`QuoteStyle::Double`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum QuoteStyle {
    Single,
    #[default]
    Double,
}

impl QuoteStyle {
    /// The quote character itself.
    pub fn quote(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

impl From<&str> for QuoteStyle {
    fn from(value: &str) -> QuoteStyle {
        if value == "single" {
            QuoteStyle::Single
        } else {
            QuoteStyle::Double
        }
    }
}

impl From<String> for QuoteStyle {
    fn from(value: String) -> QuoteStyle {
        QuoteStyle::from(value.as_str())
    }
}

impl From<QuoteStyle> for String {
    fn from(value: QuoteStyle) -> String {
        match value {
            QuoteStyle::Single => "single",
            QuoteStyle::Double => "double",
        }
        .to_string()
    }
}

/// Whether each tag should start on its own line.
///
/// In the source configuration format this is a boolean or the string
/// `decide`; `decide` leaves the choice to the generation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "NewlineRepr", into = "NewlineRepr"))]
pub enum NewlineMode {
    Always,
    Never,
    #[default]
    Decide,
}

impl From<bool> for NewlineMode {
    fn from(value: bool) -> NewlineMode {
        if value {
            NewlineMode::Always
        } else {
            NewlineMode::Never
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NewlineRepr {
    Flag(bool),
    Word(String),
}

#[cfg(feature = "serde")]
impl From<NewlineRepr> for NewlineMode {
    fn from(repr: NewlineRepr) -> NewlineMode {
        match repr {
            NewlineRepr::Flag(flag) => NewlineMode::from(flag),
            NewlineRepr::Word(_) => NewlineMode::Decide,
        }
    }
}

#[cfg(feature = "serde")]
impl From<NewlineMode> for NewlineRepr {
    fn from(mode: NewlineMode) -> NewlineRepr {
        match mode {
            NewlineMode::Always => NewlineRepr::Flag(true),
            NewlineMode::Never => NewlineRepr::Flag(false),
            NewlineMode::Decide => NewlineRepr::Word("decide".to_string()),
        }
    }
}

/// Closing style for empty elements.
///
/// In the source configuration format this is the string `xhtml` or a
/// boolean: `xhtml` closes with ` /`, `true` with a bare `/`, and `false`
/// (or any unrecognized value) with nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "SelfClosingRepr", into = "SelfClosingRepr")
)]
pub enum SelfClosingStyle {
    Xhtml,
    Slash,
    #[default]
    Empty,
}

impl SelfClosingStyle {
    /// The token emitted before the final `>` of an empty element.
    pub fn token(self) -> &'static str {
        match self {
            SelfClosingStyle::Xhtml => " /",
            SelfClosingStyle::Slash => "/",
            SelfClosingStyle::Empty => "",
        }
    }
}

impl From<&str> for SelfClosingStyle {
    fn from(value: &str) -> SelfClosingStyle {
        if value == "xhtml" {
            SelfClosingStyle::Xhtml
        } else {
            SelfClosingStyle::Empty
        }
    }
}

impl From<bool> for SelfClosingStyle {
    fn from(value: bool) -> SelfClosingStyle {
        if value {
            SelfClosingStyle::Slash
        } else {
            SelfClosingStyle::Empty
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SelfClosingRepr {
    Flag(bool),
    Word(String),
}

#[cfg(feature = "serde")]
impl From<SelfClosingRepr> for SelfClosingStyle {
    fn from(repr: SelfClosingRepr) -> SelfClosingStyle {
        match repr {
            SelfClosingRepr::Flag(flag) => SelfClosingStyle::from(flag),
            SelfClosingRepr::Word(word) => SelfClosingStyle::from(word.as_str()),
        }
    }
}

#[cfg(feature = "serde")]
impl From<SelfClosingStyle> for SelfClosingRepr {
    fn from(style: SelfClosingStyle) -> SelfClosingRepr {
        match style {
            SelfClosingStyle::Xhtml => SelfClosingRepr::Word("xhtml".to_string()),
            SelfClosingStyle::Slash => SelfClosingRepr::Flag(true),
            SelfClosingStyle::Empty => SelfClosingRepr::Flag(false),
        }
    }
}

/// A partial options record used to build a [`Profile`](crate::Profile).
///
/// Every field is optional; a field left unset keeps the profile default.
/// Construct with struct update syntax:
///
/// ```
/// use outprofile::{CaseStyle, ProfileOptions};
///
/// let options = ProfileOptions {
///     tag_case: Some(CaseStyle::Upper),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProfileOptions {
    /// Case transform for tag names.
    pub tag_case: Option<CaseStyle>,
    /// Case transform for attribute names.
    pub attr_case: Option<CaseStyle>,
    /// Quote character for attribute values.
    pub attr_quotes: Option<QuoteStyle>,
    /// Whether each tag starts a new line.
    pub tag_nl: Option<NewlineMode>,
    /// Whether to emit a cursor placeholder token.
    pub place_cursor: Option<bool>,
    /// Whether to indent nested tags.
    pub indent: Option<bool>,
    /// Number of consecutive inline elements that forces a line break;
    /// 0 disables the break.
    pub inline_break: Option<u32>,
    /// Closing style for empty elements.
    pub self_closing_tag: Option<SelfClosingStyle>,
    /// Comma-separated output filter names that override syntax-level
    /// filters.
    pub filters: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_style_parses_case_insensitively() {
        assert_eq!(CaseStyle::from("LOWER"), CaseStyle::Lower);
        assert_eq!(CaseStyle::from("Upper"), CaseStyle::Upper);
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        assert_eq!(CaseStyle::from("mixed"), CaseStyle::Leave);
        assert_eq!(CaseStyle::from(""), CaseStyle::Leave);
        assert_eq!(QuoteStyle::from("backtick"), QuoteStyle::Double);
        assert_eq!(SelfClosingStyle::from("sgml"), SelfClosingStyle::Empty);
    }

    #[test]
    fn test_self_closing_from_bool() {
        assert_eq!(SelfClosingStyle::from(true), SelfClosingStyle::Slash);
        assert_eq!(SelfClosingStyle::from(false), SelfClosingStyle::Empty);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json() {
        let options: ProfileOptions = serde_json::from_str(
            r#"{"tag_case": "upper", "self_closing_tag": true, "tag_nl": "decide"}"#,
        )
        .unwrap();
        assert_eq!(options.tag_case, Some(CaseStyle::Upper));
        assert_eq!(options.self_closing_tag, Some(SelfClosingStyle::Slash));
        assert_eq!(options.tag_nl, Some(NewlineMode::Decide));
        assert_eq!(options.attr_quotes, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json_with_bool_union() {
        let options: ProfileOptions =
            serde_json::from_str(r#"{"tag_nl": false, "self_closing_tag": "xhtml"}"#).unwrap();
        assert_eq!(options.tag_nl, Some(NewlineMode::Never));
        assert_eq!(options.self_closing_tag, Some(SelfClosingStyle::Xhtml));
    }
}
