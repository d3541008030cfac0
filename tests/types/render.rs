use std::borrow::Cow;

use validation_outcome::{BodyValue, RenderConfig, Renderable, ResponseBody, StatusCode, StatusStyle};

#[test]
fn insert_keeps_order_and_replaces_in_place() {
    let mut body = ResponseBody::new();
    body.insert("a", "1").insert("b", 2i64).insert("c", true);
    body.insert("a", "replaced");

    let keys: Vec<_> = body.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(body.get("a"), Some(&BodyValue::Text("replaced".into())));
    assert_eq!(body.to_string(), "a=replaced, b=2, c=true");
}

#[test]
fn remove_keeps_remaining_order() {
    let mut body = ResponseBody::new().with("x", "1").with("y", "2").with("z", "3");
    assert_eq!(body.remove("y"), Some(BodyValue::Text("2".into())));
    assert_eq!(body.remove("missing"), None);
    assert_eq!(body.to_string(), "x=1, z=3");
    assert!(!body.contains_key("y"));
    assert_eq!(body.len(), 2);
}

#[test]
fn nested_and_list_values_display() {
    let inner = ResponseBody::new().with("keys", "a,b");
    let body = ResponseBody::new()
        .with("invalid_keys", inner)
        .with("hosts", vec!["h1".to_string(), "h2".to_string()]);
    assert_eq!(body.to_string(), "invalid_keys={keys=a,b}, hosts=[h1, h2]");
}

#[test]
fn text_payloads_render_as_message() {
    assert_eq!("plain".to_body().to_string(), "message=plain");
    assert_eq!(String::from("owned").to_body().to_string(), "message=owned");
    assert_eq!(Cow::Borrowed("cow").to_body().to_string(), "message=cow");
    assert_eq!(Box::new("boxed").to_body().to_string(), "message=boxed");
}

#[test]
fn body_renders_into_another_body() {
    let extra = ResponseBody::new().with("hint", "retry later");
    let mut body = ResponseBody::new().with("reason", "busy");
    extra.render(&mut body);
    assert_eq!(body.to_string(), "reason=busy, hint=retry later");
}

#[test]
fn render_config_presets() {
    let default = RenderConfig::default();
    assert!(default.include_status);
    assert_eq!(default.status_style, StatusStyle::Name);
    assert_eq!(default.status_key, "status");

    assert_eq!(RenderConfig::numeric().status_style, StatusStyle::Code);
    assert!(!RenderConfig::payload_only().include_status);
}

#[test]
fn write_status_honours_custom_key() {
    let config = RenderConfig { status_key: "code".into(), ..RenderConfig::numeric() };
    let mut body = ResponseBody::new();
    config.write_status(StatusCode::Conflict, &mut body);
    assert_eq!(body.get("code"), Some(&BodyValue::Integer(409)));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_as_ordered_map() {
    let body = ResponseBody::new()
        .with("status", "BAD_REQUEST")
        .with("code", 400u16)
        .with("details", ResponseBody::new().with("keys", "a"))
        .with("tags", vec!["x".to_string()])
        .with("retry", false);
    let json = serde_json::to_string(&body).unwrap();
    assert_eq!(
        json,
        r#"{"status":"BAD_REQUEST","code":400,"details":{"keys":"a"},"tags":["x"],"retry":false}"#
    );
}
