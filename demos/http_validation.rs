//! A role mapping endpoint validating its request body in stages.
//!
//! Run with `cargo run --example http_validation --features full`.

use serde_json::{Map, Value};
use validation_outcome::prelude::*;

const ALLOWED_KEYS: [&str; 3] = ["users", "hosts", "description"];
const MANDATORY_KEYS: [&str; 1] = ["users"];

fn parse_body(raw: &str) -> Outcome<Map<String, Value>> {
    ensure!(!raw.trim().is_empty(), StatusCode::BadRequest, ErrorMessage::payload_mandatory());
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Outcome::success(map),
        _ => Outcome::error(StatusCode::BadRequest, ErrorMessage::body_not_parseable()),
    }
}

fn known_keys(body: Map<String, Value>) -> Outcome<Map<String, Value>> {
    let invalid: Vec<&String> = body.keys().filter(|key| !ALLOWED_KEYS.contains(&key.as_str())).collect();
    if invalid.is_empty() {
        Outcome::success(body)
    } else {
        Outcome::error(StatusCode::BadRequest, ErrorMessage::invalid_keys(invalid.into_iter().cloned()))
    }
}

fn mandatory_keys(body: Map<String, Value>) -> Outcome<Map<String, Value>> {
    let missing: Vec<&str> = MANDATORY_KEYS.into_iter().filter(|key| !body.contains_key(*key)).collect();
    ensure!(missing.is_empty(), StatusCode::BadRequest, ErrorMessage::missing_mandatory_keys(missing));
    Outcome::success(body)
}

fn datatypes(body: Map<String, Value>) -> Outcome<Map<String, Value>> {
    let wrong: Vec<(&str, &str)> = ["users", "hosts"]
        .into_iter()
        .filter(|key| body.get(*key).is_some_and(|value| !value.is_array()))
        .map(|key| (key, "Array expected"))
        .collect();
    ensure!(wrong.is_empty(), StatusCode::BadRequest, ErrorMessage::wrong_datatypes(wrong));
    Outcome::success(body)
}

fn handle(raw: &str, stored: &mut Vec<Map<String, Value>>) {
    let outcome = Outcome::success(raw)
        .map(parse_body)
        .map(known_keys)
        .map(mandatory_keys)
        .map(datatypes)
        .valid(|body| stored.push(body.clone()));

    outcome.on_error(|status, message| {
        let body = Rejection::new(status, message).to_body();
        match serde_json::to_string(&body) {
            Ok(json) => println!("{} {json}", status.as_u16()),
            Err(e) => eprintln!("failed to render error: {e}"),
        }
    });
    if outcome.is_valid() {
        println!("200 {{\"status\":\"OK\"}}");
    }
}

fn main() {
    let mut stored = Vec::new();
    let requests = [
        r#"{"users": ["alice"], "hosts": ["*.local"]}"#,
        "",
        "not json",
        r#"{"users": ["bob"], "colour": "red"}"#,
        r#"{"hosts": ["*.local"]}"#,
        r#"{"users": "carol"}"#,
    ];

    for raw in requests {
        handle(raw, &mut stored);
    }

    println!("stored {} mapping(s)", stored.len());
}
