use vp_password::{validate, Rule, Validation};

#[test]
fn validate_messages() {
    let cases = [
        ("short1!", "Password must be at least 8 characters long."),
        (
            "alllower123!",
            "Password must contain at least one uppercase letter.",
        ),
        (
            "ALLUPPER123!",
            "Password must contain at least one lowercase letter.",
        ),
        ("NoDigitsHere!", "Password must contain at least one digit."),
        (
            "NoSpecial123",
            "Password must contain at least one special character (!@#$%^&*()).",
        ),
        ("Valid1Pass!", "Password is strong."),
    ];

    for (password, message) in cases {
        assert_eq!(message, validate(password).message(), "{}", password);
    }
}

#[test]
fn validate_short_circuits_on_length() {
    assert_eq!(Validation::Invalid(Rule::Length), validate("short"));
    assert_eq!(Validation::Invalid(Rule::Length), validate(""));
}

#[test]
fn validate_rule_order() {
    // missing everything except length and lowercase
    assert_eq!(Validation::Invalid(Rule::Uppercase), validate("abcdefgh"));
    // missing digit and special
    assert_eq!(Validation::Invalid(Rule::Digit), validate("Abcdefgh"));
}

#[test]
fn validate_every_special_character() {
    for special in "!@#$%^&*()".chars() {
        let password = format!("Abcdef1{}", special);
        assert!(validate(&password).is_valid(), "{}", password);
    }
}

#[test]
fn validate_accepts_spaces() {
    assert!(validate("Two Words1!").is_valid());
}

#[test]
fn validate_is_deterministic() {
    let password = "NoDigitsHere!";
    let first = validate(password);
    for _ in 0..10 {
        assert_eq!(first, validate(password));
    }
}
