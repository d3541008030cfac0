use validation_outcome::{DetailValue, ErrorMessage, Renderable};

#[test]
fn invalid_keys_render_as_comma_joined_keys() {
    let message = ErrorMessage::invalid_keys(["a", "b"]);
    assert_eq!(message.reason(), "Invalid configuration");
    assert_eq!(
        message.detail("invalid_keys"),
        Some(&DetailValue::Keys(vec!["a".to_string(), "b".to_string()]))
    );
    assert_eq!(
        message.to_body().to_string(),
        "reason=Invalid configuration, invalid_keys={keys=a,b}"
    );
}

#[test]
fn missing_mandatory_keys_detail() {
    let message = ErrorMessage::missing_mandatory_keys(vec![String::from("hosts")]);
    assert_eq!(message.to_string(), "Invalid configuration (missing_mandatory_keys: hosts)");
}

#[test]
fn wrong_datatypes_render_each_key() {
    let message = ErrorMessage::wrong_datatypes([("hosts", "Array expected"), ("port", "Integer expected")]);
    assert_eq!(
        message.to_body().to_string(),
        "reason=Invalid configuration, wrong_datatypes={hosts=Array expected, port=Integer expected}"
    );
    assert_eq!(
        message.to_string(),
        "Invalid configuration (wrong_datatypes: hosts (Array expected), port (Integer expected))"
    );
}

#[test]
fn wrong_datatypes_repeated_key_keeps_last_expectation() {
    let message = ErrorMessage::wrong_datatypes([("a", "Array expected"), ("a", "String expected")]);
    assert_eq!(
        message.detail("wrong_datatypes"),
        Some(&DetailValue::Types(vec![("a".into(), "String expected".into())]))
    );
    assert_eq!(
        message.to_body().to_string(),
        "reason=Invalid configuration, wrong_datatypes={a=String expected}"
    );
    assert_eq!(message.to_string(), "Invalid configuration (wrong_datatypes: a (String expected))");
}

#[test]
fn merged_type_details_replace_same_key() {
    let message = ErrorMessage::wrong_datatypes([("hosts", "Array expected"), ("port", "Integer expected")])
        .with_detail_value("wrong_datatypes", DetailValue::Types(vec![("hosts".into(), "String expected".into())]));
    assert_eq!(
        message.to_string(),
        "Invalid configuration (wrong_datatypes: hosts (String expected), port (Integer expected))"
    );
}

#[test]
fn detail_named_reason_keeps_reason_text() {
    let message = ErrorMessage::new("Invalid configuration").with_detail("reason", ["shadow"]);
    let body = message.to_body();
    assert_eq!(body.len(), 1);
    assert_eq!(body.to_string(), "reason=Invalid configuration");
}

#[test]
fn fixed_reasons() {
    assert_eq!(ErrorMessage::body_not_parseable().reason(), "Could not parse content of request.");
    assert_eq!(ErrorMessage::payload_mandatory().reason(), "Request body required for this action.");
    assert_eq!(ErrorMessage::payload_not_allowed().reason(), "Request body not allowed for this action.");
    assert_eq!(ErrorMessage::payload_not_allowed().details().count(), 0);
}

#[test]
fn details_with_same_key_merge() {
    let message = ErrorMessage::invalid_keys(["a"]).with_detail("invalid_keys", ["b", "c"]);
    assert_eq!(message.details().count(), 1);
    assert_eq!(
        message.to_body().to_string(),
        "reason=Invalid configuration, invalid_keys={keys=a,b,c}"
    );
}

#[test]
fn detail_of_other_kind_replaces() {
    let message = ErrorMessage::new("mixed")
        .with_detail("field", ["a"])
        .with_detail_value("field", DetailValue::Types(vec![("a".into(), "String expected".into())]));
    assert_eq!(message.to_body().to_string(), "reason=mixed, field={a=String expected}");
}

#[test]
fn details_keep_insertion_order() {
    let message = ErrorMessage::invalid_keys(["x"]).with_detail("missing_mandatory_keys", ["y"]);
    let keys: Vec<_> = message.details().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["invalid_keys", "missing_mandatory_keys"]);
}

#[test]
fn conversions_from_text() {
    assert_eq!(ErrorMessage::from("static"), ErrorMessage::new("static"));
    assert_eq!(ErrorMessage::from(String::from("owned")).reason(), "owned");
    assert_eq!(ErrorMessage::new("plain").to_string(), "plain");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_keeps_details() {
    let message = ErrorMessage::invalid_keys(["a"]).with_detail("missing_mandatory_keys", ["b"]);
    let json = serde_json::to_string(&message).unwrap();
    let back: ErrorMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, message);
}
