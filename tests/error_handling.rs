use prefixkey::{
    prefix_key, prefix_key_with, prefix_range, ConfigLoadError, InvalidDigitPolicy, PrefixKey,
    PrefixKeyConfig, PrefixKeyError,
};

#[test]
fn invalid_digit_reports_position_and_character() {
    let err = prefix_key("+441234").unwrap_err();
    assert_eq!(
        err,
        PrefixKeyError::InvalidDigit {
            position: 0,
            found: '+'
        }
    );
    assert_eq!(err.to_string(), "invalid digit '+' at position 0");
}

#[test]
fn whitespace_is_not_a_digit() {
    assert!(matches!(
        prefix_key(" 44"),
        Err(PrefixKeyError::InvalidDigit { position: 0, .. })
    ));
    assert!(matches!(
        prefix_key("44 "),
        Err(PrefixKeyError::InvalidDigit { position: 2, .. })
    ));
}

#[test]
fn zero_policy_never_fails() {
    for input in ["", "abc", "+1 (555) 010-9999", "ünïcödé", "#########################"] {
        assert!(
            prefix_key_with(input, InvalidDigitPolicy::Zero).is_ok(),
            "input {input:?}"
        );
    }
}

#[test]
fn out_of_range_raw_value() {
    let err = PrefixKey::try_from(1_000_000_000_000_000).unwrap_err();
    assert_eq!(err, PrefixKeyError::OutOfRange(1_000_000_000_000_000));
    assert_eq!(
        err.to_string(),
        "key 1000000000000000 exceeds the 15-digit maximum"
    );
}

#[test]
fn range_rejects_bad_prefix() {
    assert!(matches!(
        prefix_range("44*"),
        Err(PrefixKeyError::InvalidDigit {
            position: 2,
            found: '*'
        })
    ));
}

#[test]
fn bad_yaml_is_a_parse_error() {
    let res = PrefixKeyConfig::from_yaml("invalid_digit: [reject]\n");
    let err = res.unwrap_err();
    assert!(matches!(err, ConfigLoadError::YamlParse(_)));
    assert!(err.to_string().starts_with("failed to parse YAML"));
}
