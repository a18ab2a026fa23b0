/// Upper-cases `input` unless `to_upper` is explicitly `Some(false)`,
/// in which case it is lower-cased.
pub fn format(input: &str, to_upper: Option<bool>) -> String {
    if to_upper.unwrap_or(true) {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_upper() {
        assert_eq!(format("Hello", None), "HELLO");
    }

    #[test]
    fn test_explicit_flags() {
        assert_eq!(format("Hello", Some(true)), "HELLO");
        assert_eq!(format("Hello", Some(false)), "hello");
    }

    #[test]
    fn test_unicode_and_empty() {
        assert_eq!(format("straße", None), "STRASSE");
        assert_eq!(format("ÀÉÎ", Some(false)), "àéî");
        assert_eq!(format("", None), "");
    }

    proptest! {
        #[test]
        fn test_none_matches_true(s in ".*") {
            prop_assert_eq!(format(&s, None), format(&s, Some(true)));
        }
    }
}
