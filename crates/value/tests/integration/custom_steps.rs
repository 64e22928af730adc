//! Caller-supplied chain steps built on `apply` and `and_then`.

use pliant_value::{Dyn, Value, ValueError};
use pretty_assertions::assert_eq;

/// Rounds a numeric payload to the number of decimals given as first param.
fn round_to(d: Dyn, params: &[Value]) -> Dyn {
    let places = params.first().and_then(|p| p.to_i64().ok()).unwrap_or(0);
    d.and_then(|v| {
        let factor = 10f64.powi(places as i32);
        Ok(Value::Float((v.to_f64()? * factor).round() / factor))
    })
}

/// Rejects empty text.
fn non_empty(d: Dyn, _: &[Value]) -> Dyn {
    d.and_then(|v| {
        if v.to_text()?.trim().is_empty() {
            Err(ValueError::custom("empty value"))
        } else {
            Ok(v)
        }
    })
}

/// Turns any held error into a marker payload, keeping the message.
fn annotate(d: Dyn, _: &[Value]) -> Dyn {
    match d.into_result() {
        Ok(v) => Dyn::new(v),
        Err(e) => Dyn::new(format!("invalid ({e})")),
    }
}

#[test]
fn custom_step_with_params() {
    let d = Dyn::new("1.23456").apply(round_to, &[Value::Int(2)]);
    assert_eq!(d.to_f64(), Ok(1.23));
}

#[test]
fn custom_step_errors_are_sticky() {
    let d = Dyn::new("   ").apply(non_empty, &[]).upper().clip(0, 1);
    assert_eq!(d.error(), Some(&ValueError::custom("empty value")));
    assert!(d.error().is_some_and(ValueError::is_coercion));
}

#[test]
fn custom_step_can_recover() {
    let d = Dyn::new(5).key("name").apply(annotate, &[]);
    assert_eq!(d.to_text(), Ok("invalid (type is not a mapping)".to_owned()));
}

#[test]
fn closures_work_as_steps() {
    let suffix = "!";
    let d = Dyn::new("hey").apply(
        |d, params| d.and_then(|v| Ok(Value::text(format!("{}{}{suffix}", v.to_text()?, params.len())))),
        &[Value::Null, Value::Null],
    );
    assert_eq!(d.text_or_zero(), "hey2!");
}

#[test]
fn native_errors_flow_like_any_other() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json missing");
    let d = Dyn::from_error(io).key("port").clip(0, 1);
    let err = d.error().unwrap();

    assert!(!err.is_coercion());
    assert_eq!(err.to_string(), "config.json missing");
    assert_eq!(d.catch(80).to_u16(), Ok(80));
}
