use std::cell::Cell;

use validation_outcome::{ErrorMessage, Outcome, StatusCode};

fn exploding_stage(_: i32) -> Outcome<i32, &'static str> {
    panic!("stage must not be invoked after a failure")
}

#[test]
fn map_on_success_returns_mapper_result() {
    let mapped: Outcome<i32, &str> = Outcome::success(4).map(|n| {
        let payload = if n == 4 { "four" } else { "other" };
        Outcome::error(StatusCode::Conflict, payload)
    });
    assert_eq!(mapped, Outcome::error(StatusCode::Conflict, "four"));
}

#[test]
fn map_on_error_never_calls_mapper() {
    let calls = Cell::new(0);
    let failed = Outcome::<i32, _>::error(StatusCode::UnprocessableEntity, "unparseable");
    let mapped: Outcome<String, _> = failed.map(|n| {
        calls.set(calls.get() + 1);
        Outcome::success(n.to_string())
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.status(), StatusCode::UnprocessableEntity);
    assert_eq!(mapped.error_message(), Some(&"unparseable"));
}

#[test]
fn success_mapped_through_success_is_unchanged() {
    let original = Outcome::<_, &str>::success("x");
    assert_eq!(original.clone().map(Outcome::success), original);
}

#[test]
fn short_circuit_preserves_first_failure() {
    let r0 = Outcome::<i32, _>::error(StatusCode::BadRequest, "bad");
    let r1 = r0.map(exploding_stage);
    let r2 = r1.map(exploding_stage);

    assert_eq!(r2.status(), StatusCode::BadRequest);
    assert_eq!(r2.error_message(), Some(&"bad"));
}

#[test]
fn success_chain_accumulates() {
    let result = Outcome::<_, &str>::success(5)
        .map(|n| Outcome::success(n * 2))
        .map(|n| Outcome::success(n + 1));
    assert_eq!(result.into_content(), Some(11));
}

#[test]
fn failure_midway_stops_later_stages() {
    let reached = Cell::new(Vec::new());
    let record = |stage: &'static str| {
        let mut seen = reached.take();
        seen.push(stage);
        reached.set(seen);
    };

    let outcome: Outcome<u32> = Outcome::success("8080")
        .map(|raw| {
            record("parse");
            match raw.parse::<u32>() {
                Ok(port) => Outcome::success(port),
                Err(_) => Outcome::error(StatusCode::BadRequest, ErrorMessage::body_not_parseable()),
            }
        })
        .map(|port| {
            record("range");
            if port < 1024 {
                Outcome::success(port)
            } else {
                Outcome::forbidden("only privileged ports may be configured")
            }
        })
        .map(|port| {
            record("bind");
            Outcome::success(port)
        });

    assert_eq!(reached.take(), vec!["parse", "range"]);
    assert_eq!(outcome.status(), StatusCode::Forbidden);
    assert_eq!(
        outcome.error_message().map(ErrorMessage::reason),
        Some("only privileged ports may be configured")
    );
}

#[test]
fn try_map_propagates_mapper_failure() {
    #[derive(Debug, PartialEq)]
    struct WriteFailed;

    let result: Result<Outcome<i32, &str>, WriteFailed> =
        Outcome::success(1).try_map(|_| Err(WriteFailed));
    assert_eq!(result, Err(WriteFailed));
}

#[test]
fn try_map_passes_failure_through_without_calling_mapper() {
    let failed = Outcome::<i32, _>::error(StatusCode::NotFound, "missing");
    let result = failed.try_map(|_| -> Result<Outcome<i32, &str>, ()> { panic!("must not run") });
    assert_eq!(result, Ok(Outcome::error(StatusCode::NotFound, "missing")));
}

#[test]
fn try_map_chains_with_question_mark() {
    fn run(input: &str) -> Result<Outcome<u16, &'static str>, std::num::ParseIntError> {
        Outcome::success(input)
            .try_map(|raw| -> Result<_, std::num::ParseIntError> {
                Ok(Outcome::success(raw.trim().parse::<u16>()?))
            })?
            .try_map(|port| {
                Ok(if port == 0 {
                    Outcome::error(StatusCode::BadRequest, "port 0 is reserved")
                } else {
                    Outcome::success(port)
                })
            })
    }

    assert_eq!(run(" 9200 ").unwrap().into_content(), Some(9200));
    assert_eq!(run("0").unwrap().error_message(), Some(&"port 0 is reserved"));
    assert!(run("abc").is_err());
}

#[test]
fn valid_and_on_error_dispatch_to_one_branch_in_a_chain() {
    let mut accepted = Vec::new();
    let mut rendered = Vec::new();

    for input in ["admin", "", "ops"] {
        let outcome: Outcome<&str, &str> = Outcome::success(input).map(|name| {
            if name.is_empty() {
                Outcome::error(StatusCode::BadRequest, "name required")
            } else {
                Outcome::success(name)
            }
        });
        outcome
            .valid(|name| accepted.push(*name))
            .on_error(|status, payload| rendered.push((status, *payload)));
    }

    assert_eq!(accepted, vec!["admin", "ops"]);
    assert_eq!(rendered, vec![(StatusCode::BadRequest, "name required")]);
}

#[test]
fn and_then_matches_map() {
    let via_map = Outcome::<_, &str>::success(3).map(|n| Outcome::success(n + 1));
    let via_and_then = Outcome::<_, &str>::success(3).and_then(|n| Outcome::success(n + 1));
    assert_eq!(via_map, via_and_then);
}
