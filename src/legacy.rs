//! Deprecated free functions kept for callers that predate [`Profile`].
//!
//! [`Profile`]: crate::Profile

use crate::options::{QuoteStyle, SelfClosingStyle};

/// Quote character for attribute values: `'` if `param` is `single`,
/// `"` otherwise.
#[deprecated(note = "use `Profile::attribute_quote` instead")]
pub fn quote(param: &str) -> char {
    log::warn!("outprofile::quote is deprecated, use Profile::attribute_quote");
    QuoteStyle::from(param).quote()
}

/// Self-closing token for empty elements: ` /` for `"xhtml"`, `/` for
/// `true`, empty otherwise.
#[deprecated(note = "use `Profile::self_closing` instead")]
pub fn self_closing(param: impl Into<SelfClosingStyle>) -> &'static str {
    log::warn!("outprofile::self_closing is deprecated, use Profile::self_closing");
    param.into().token()
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("single"), '\'');
        assert_eq!(quote("double"), '"');
        assert_eq!(quote(""), '"');
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(self_closing("xhtml"), " /");
        assert_eq!(self_closing(true), "/");
        assert_eq!(self_closing(false), "");
        assert_eq!(self_closing("html"), "");
    }
}
