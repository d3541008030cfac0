use std::cell::Cell;

use validation_outcome::{Outcome, StatusCode};

#[test]
fn iter_yields_content_only_for_success() {
    let ok = Outcome::<_, &str>::success(7);
    assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&7]);
    assert_eq!(ok.iter().len(), 1);

    let failed = Outcome::<i32, _>::error(StatusCode::BadRequest, "bad");
    assert_eq!(failed.iter().count(), 0);
    assert_eq!((&failed).into_iter().len(), 0);
}

#[test]
fn into_iter_moves_content_out() {
    let ok = Outcome::<_, &str>::success(String::from("kept"));
    let items: Vec<String> = ok.into_iter().collect();
    assert_eq!(items, vec!["kept".to_string()]);
}

#[test]
fn outcomes_flatten_into_their_successes() {
    let outcomes = vec![
        Outcome::success(1),
        Outcome::error(StatusCode::NotFound, "gone"),
        Outcome::success(3),
    ];
    let total: i32 = outcomes.into_iter().flatten().sum();
    assert_eq!(total, 4);
}

#[test]
fn collect_gathers_all_successes() {
    let collected: Outcome<Vec<u8>, &str> =
        (1..=3u8).map(Outcome::success).collect();
    assert_eq!(collected, Outcome::success(vec![1, 2, 3]));
}

#[test]
fn collect_stops_at_first_failure() {
    let pulled = Cell::new(0);
    let stages = [
        Outcome::success("a"),
        Outcome::error(StatusCode::Forbidden, "first"),
        Outcome::error(StatusCode::Conflict, "second"),
        Outcome::success("d"),
    ];

    let collected: Outcome<Vec<&str>, &str> = stages
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .collect();

    assert_eq!(pulled.get(), 2);
    assert_eq!(collected.status(), StatusCode::Forbidden);
    assert_eq!(collected.error_message(), Some(&"first"));
}

#[test]
fn collect_of_nothing_is_empty_success() {
    let collected: Outcome<Vec<i32>, &str> = std::iter::empty().collect();
    assert_eq!(collected.into_content(), Some(Vec::new()));
}
