use proptest::prelude::*;
use rstest::rstest;

use outprofile::string_case;

#[rstest]
#[case("DIV", "lower", "div")]
#[case("div", "upper", "DIV")]
#[case("Div", "leave", "Div")]
#[case("Div", "", "Div")]
#[case("Div", "bogus", "Div")]
#[case("div", "UPPER", "DIV")]
#[case("DIV", "Lower", "div")]
fn string_case_values(#[case] input: &str, #[case] case_value: &str, #[case] expected: &str) {
    assert_eq!(string_case(input, case_value), expected);
}

proptest! {
    #[test]
    fn lower_matches_to_lowercase(s in ".*") {
        prop_assert_eq!(string_case(&s, "lower"), s.to_lowercase());
    }

    #[test]
    fn upper_matches_to_uppercase(s in ".*") {
        prop_assert_eq!(string_case(&s, "upper"), s.to_uppercase());
    }

    #[test]
    fn other_case_values_leave_input_alone(s in ".*", case_value in "[a-z]{0,8}") {
        prop_assume!(case_value != "lower" && case_value != "upper");
        prop_assert_eq!(string_case(&s, &case_value), s.as_str());
    }
}
