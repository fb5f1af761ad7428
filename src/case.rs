use std::borrow::Cow;

use crate::options::CaseStyle;

impl CaseStyle {
    /// Apply this case transform to a string.
    ///
    /// [`CaseStyle::Leave`] borrows the input unchanged.
    pub fn apply(self, s: &str) -> Cow<'_, str> {
        match self {
            CaseStyle::Lower => Cow::Owned(s.to_lowercase()),
            CaseStyle::Upper => Cow::Owned(s.to_uppercase()),
            CaseStyle::Leave => Cow::Borrowed(s),
        }
    }
}

/// Apply the case transform named by a loose configuration value.
///
/// `case_value` is matched case-insensitively against `lower` and `upper`;
/// any other value returns the input unchanged.
///
/// ```
/// use outprofile::string_case;
///
/// assert_eq!(string_case("DIV", "lower"), "div");
/// assert_eq!(string_case("div", "upper"), "DIV");
/// assert_eq!(string_case("Div", "leave"), "Div");
/// assert_eq!(string_case("Div", "bogus"), "Div");
/// ```
pub fn string_case<'a>(s: &'a str, case_value: &str) -> Cow<'a, str> {
    CaseStyle::from(case_value).apply(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_borrows() {
        assert!(matches!(string_case("Div", "leave"), Cow::Borrowed("Div")));
    }

    #[test]
    fn test_case_value_is_normalized() {
        assert_eq!(string_case("Div", "LOWER"), "div");
        assert_eq!(string_case("Div", "Upper"), "DIV");
    }
}
