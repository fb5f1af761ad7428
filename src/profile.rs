use std::borrow::Cow;

use crate::cursor::CursorSource;
use crate::options::{CaseStyle, NewlineMode, ProfileOptions, QuoteStyle, SelfClosingStyle};

/// A resolved set of markup formatting options.
///
/// Every field has a value once the profile is constructed; options left
/// unset by the caller keep the defaults, which match the `xhtml` built-in
/// profile. Profiles are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Case transform for tag names.
    pub tag_case: CaseStyle,
    /// Case transform for attribute names.
    pub attr_case: CaseStyle,
    /// Quote character for attribute values.
    pub attr_quotes: QuoteStyle,
    /// Whether each tag starts a new line.
    pub tag_nl: NewlineMode,
    /// Whether to emit a cursor placeholder token.
    pub place_cursor: bool,
    /// Whether to indent nested tags.
    pub indent: bool,
    /// Number of consecutive inline elements that forces a line break;
    /// 0 disables the break.
    pub inline_break: u32,
    /// Closing style for empty elements.
    pub self_closing_tag: SelfClosingStyle,
    /// Comma-separated output filter names that override syntax-level
    /// filters.
    pub filters: String,
}

impl Default for Profile {
    fn default() -> Profile {
        Profile {
            tag_case: CaseStyle::Lower,
            attr_case: CaseStyle::Lower,
            attr_quotes: QuoteStyle::Double,
            tag_nl: NewlineMode::Decide,
            place_cursor: true,
            indent: true,
            inline_break: 3,
            self_closing_tag: SelfClosingStyle::Xhtml,
            filters: String::new(),
        }
    }
}

impl Profile {
    /// Build a free-standing profile from a partial options record.
    ///
    /// Options merge over the defaults: a set field wins, an unset field
    /// keeps the default. The profile is not registered anywhere; use
    /// [`ProfileRegistry::create`](crate::ProfileRegistry::create) to store
    /// one under a name.
    pub fn new(options: ProfileOptions) -> Profile {
        let defaults = Profile::default();
        Profile {
            tag_case: options.tag_case.unwrap_or(defaults.tag_case),
            attr_case: options.attr_case.unwrap_or(defaults.attr_case),
            attr_quotes: options.attr_quotes.unwrap_or(defaults.attr_quotes),
            tag_nl: options.tag_nl.unwrap_or(defaults.tag_nl),
            place_cursor: options.place_cursor.unwrap_or(defaults.place_cursor),
            indent: options.indent.unwrap_or(defaults.indent),
            inline_break: options.inline_break.unwrap_or(defaults.inline_break),
            self_closing_tag: options.self_closing_tag.unwrap_or(defaults.self_closing_tag),
            filters: options.filters.unwrap_or(defaults.filters),
        }
    }

    /// Apply the profile's tag case transform to a tag name.
    pub fn tag_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.tag_case.apply(name)
    }

    /// Apply the profile's attribute case transform to an attribute name.
    pub fn attribute_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.attr_case.apply(name)
    }

    /// The quote character for attribute values.
    pub fn attribute_quote(&self) -> char {
        self.attr_quotes.quote()
    }

    /// The token emitted before the final `>` of an empty element.
    pub fn self_closing(&self) -> &'static str {
        self.self_closing_tag.token()
    }

    /// The caret placeholder token, or the empty string if this profile
    /// does not place a cursor.
    pub fn cursor<'a>(&self, source: &'a impl CursorSource) -> &'a str {
        if self.place_cursor {
            source.caret_placeholder()
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_unset_options() {
        let profile = Profile::new(ProfileOptions {
            attr_quotes: Some(QuoteStyle::Single),
            ..Default::default()
        });
        assert_eq!(profile.attr_quotes, QuoteStyle::Single);
        assert_eq!(profile.tag_case, CaseStyle::Lower);
        assert_eq!(profile.inline_break, 3);
        assert_eq!(profile.self_closing_tag, SelfClosingStyle::Xhtml);
    }

    #[test]
    fn test_empty_options_give_defaults() {
        assert_eq!(Profile::new(ProfileOptions::default()), Profile::default());
    }
}
