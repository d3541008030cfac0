use std::cell::Cell;

use validation_outcome::traits::{IntoOutcome, OptionOutcomeExt};
use validation_outcome::{ErrorMessage, Outcome, StatusCode};

#[test]
fn into_outcome_converts_error_with_into() {
    let ok: Outcome<i32> = Ok::<_, &'static str>(1).into_outcome(StatusCode::BadRequest);
    assert_eq!(ok.into_content(), Some(1));

    let failed: Outcome<i32> = Err::<i32, _>("no").into_outcome(StatusCode::Unauthorized);
    assert_eq!(failed.status(), StatusCode::Unauthorized);
    assert_eq!(failed.error_message(), Some(&ErrorMessage::new("no")));
}

#[test]
fn into_outcome_with_builds_payload_only_on_error() {
    let calls = Cell::new(0);
    let build = |e: std::num::ParseIntError| {
        calls.set(calls.get() + 1);
        ErrorMessage::new(e.to_string())
    };

    let ok: Outcome<u8> = "12".parse::<u8>().into_outcome_with(StatusCode::BadRequest, build);
    assert!(ok.is_valid());
    assert_eq!(calls.get(), 0);

    let failed: Outcome<u8> = "300".parse::<u8>().into_outcome_with(StatusCode::BadRequest, build);
    assert!(failed.is_error());
    assert_eq!(calls.get(), 1);
}

#[test]
fn option_ok_or_outcome() {
    let present: Outcome<&str, &str> = Some("v").ok_or_outcome(StatusCode::NotFound, "absent");
    assert_eq!(present, Outcome::success("v"));

    let absent: Outcome<&str, &str> = None.ok_or_outcome(StatusCode::NotFound, "absent");
    assert_eq!(absent, Outcome::error(StatusCode::NotFound, "absent"));
}

#[test]
fn option_ok_or_outcome_with_is_lazy() {
    let calls = Cell::new(0);
    let present: Outcome<u8, &str> = Some(1).ok_or_outcome_with(StatusCode::NotFound, || {
        calls.set(calls.get() + 1);
        "absent"
    });
    assert!(present.is_valid());
    assert_eq!(calls.get(), 0);

    let absent: Outcome<u8> = None.ok_or_outcome_with(StatusCode::NotFound, || {
        calls.set(calls.get() + 1);
        ErrorMessage::new("absent")
    });
    assert!(absent.is_error());
    assert_eq!(calls.get(), 1);
}
