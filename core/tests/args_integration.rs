use std::time::Duration;

use argview_core::{Args, SliceOptions, Value, ValueError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn args_from(list: &[&str]) -> Args {
    Args::new(list.iter().map(|s| s.to_string()).collect())
}

// ---------------------------------------------------------------------------
// Integer access
// ---------------------------------------------------------------------------

#[test]
fn test_int_flags_end_to_end() {
    let args = args_from(&[
        "prog",
        "--int.value",
        "123",
        "--int.empty",
        "--int.default",
        "--int.equals=987",
        "--int.must.value",
        "12345",
        "--int.must.empty",
        "--int.must.default",
    ]);

    // value supplied
    assert_eq!(args.fetch("int.value").i64(None), Ok(123));

    // bare flag, no default: error naming the flag
    assert_eq!(
        args.fetch("int.empty").i64(None),
        Err(ValueError::Missing("int.empty".to_string()))
    );

    // bare flag with a default
    assert_eq!(args.fetch("int.default").i64(Some(1234)), Ok(1234));

    // equals form
    assert_eq!(args.fetch("int.equals").i64(None), Ok(987));

    // must variants
    assert_eq!(args.fetch("int.must.value").must_i64(None), 12345);
    assert_eq!(args.fetch("int.must.empty").must_i64(None), 0);
    assert_eq!(args.fetch("int.must.default").must_i64(Some(123456)), 123456);
}

#[test]
fn test_int_width_overflow_is_reported_not_truncated() {
    let args = args_from(&["prog", "--small", "1000"]);

    assert_eq!(
        args.fetch("small").i8(None),
        Err(ValueError::IntOverflow {
            token: "1000".to_string(),
            bits: 8,
        })
    );
    assert_eq!(args.fetch("small").i16(None), Ok(1000));
    assert_eq!(args.fetch("small").must_i8(None), 0);
}

#[test]
fn test_int_slices_and_radix_forms() {
    let args = args_from(&["prog", "--list", "1,2,3", "--hex", "0x10"]);

    assert_eq!(
        args.fetch("list").i64_slice(SliceOptions::new()).unwrap(),
        vec![1, 2, 3]
    );
    assert_eq!(args.fetch("hex").i64(None), Ok(16));

    // absent key with a default sequence
    assert_eq!(
        args.fetch("absent")
            .i64_slice(SliceOptions::new().with_default(vec![4, 5, 6]))
            .unwrap(),
        vec![4, 5, 6]
    );
}

// ---------------------------------------------------------------------------
// String access
// ---------------------------------------------------------------------------

#[test]
fn test_string_flags_end_to_end() {
    let args = args_from(&[
        "prog",
        "--string.value",
        "string value",
        "--string.must",
        "--string.slice",
        "A,B,C,D",
        "--string.slice.delimiter",
        "E-F-G-H",
        "--string.slice.empty",
    ]);

    assert_eq!(
        args.fetch("string.value").string(None).unwrap(),
        "string value"
    );

    // bare flag, must form: zero value
    assert_eq!(args.fetch("string.must").must_string(None), "");

    assert_eq!(
        args.fetch("string.slice")
            .string_slice(SliceOptions::new())
            .unwrap(),
        vec!["A", "B", "C", "D"]
    );

    assert_eq!(
        args.fetch("string.slice.delimiter")
            .string_slice(SliceOptions::new().with_delimiter("-"))
            .unwrap(),
        vec!["E", "F", "G", "H"]
    );

    // bare flag, no default sequence: missing error, empty must result
    assert!(
        args.fetch("string.slice.empty")
            .string_slice(SliceOptions::new())
            .is_err()
    );
    assert!(
        args.fetch("string.slice.empty")
            .must_string_slice(SliceOptions::new())
            .is_empty()
    );

    // absent key with a default sequence
    assert_eq!(
        args.fetch("string.slice.default")
            .string_slice(SliceOptions::new().with_default(vec!["Z".into(), "Y".into()]))
            .unwrap(),
        vec!["Z", "Y"]
    );
}

#[test]
fn test_equals_form_with_empty_value_is_missing_for_strings() {
    let args = args_from(&["prog", "--k="]);

    assert_eq!(args.fetch("k").payload(), "");
    assert_eq!(
        args.fetch("k").string(None),
        Err(ValueError::Missing("k".to_string()))
    );
}

// ---------------------------------------------------------------------------
// Boolean access
// ---------------------------------------------------------------------------

#[test]
fn test_bool_flags_end_to_end() {
    let args = args_from(&[
        "prog",
        "--bool.bare",
        "--bool.off",
        "false",
        "--bool.list",
        "true,T,True,1",
        "--bool.gaps",
        "false,,0",
    ]);

    assert_eq!(args.fetch("bool.bare").bool(None), Ok(true));
    assert_eq!(args.fetch("bool.bare").bool(Some(false)), Ok(false));
    assert_eq!(args.fetch("bool.off").bool(None), Ok(false));

    assert_eq!(
        args.fetch("bool.list").bool_slice(SliceOptions::new()).unwrap(),
        vec![true, true, true, true]
    );

    // empty segments in a boolean sequence read as true
    assert_eq!(
        args.fetch("bool.gaps").bool_slice(SliceOptions::new()).unwrap(),
        vec![false, true, false]
    );
}

// ---------------------------------------------------------------------------
// Duration and datetime access
// ---------------------------------------------------------------------------

#[test]
fn test_duration_flags_end_to_end() {
    let args = args_from(&["prog", "--wait", "3s", "--steps", "1m,2s"]);

    assert_eq!(args.fetch("wait").duration(None), Ok(Duration::from_secs(3)));
    assert_eq!(
        args.fetch("steps")
            .duration_slice(SliceOptions::new())
            .unwrap(),
        vec![Duration::from_secs(60), Duration::from_secs(2)]
    );

    assert_eq!(
        args.fetch("absent").duration(Some(Duration::from_secs(1))),
        Ok(Duration::from_secs(1))
    );
    assert_eq!(args.fetch("absent").must_duration(None), Duration::ZERO);
}

#[test]
fn test_datetime_flags_end_to_end() {
    let args = args_from(&[
        "prog",
        "--at",
        "2026-02-07 10:30",
        "--schedule=2026-01-01 00:00,2026-06-01 12:00",
    ]);

    let at = args.fetch("at").datetime("%Y-%m-%d %H:%M", None).unwrap();
    assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2026-02-07 10:30");

    let schedule = args
        .fetch("schedule")
        .datetime_slice("%Y-%m-%d %H:%M", SliceOptions::new())
        .unwrap();
    assert_eq!(schedule.len(), 2);

    assert!(matches!(
        args.fetch("at").datetime("%H:%M:%S", None),
        Err(ValueError::InvalidDateTime { .. })
    ));
}

// ---------------------------------------------------------------------------
// Lookup policy
// ---------------------------------------------------------------------------

#[test]
fn test_absent_key_yields_absent_value_not_fault() {
    let args = args_from(&["prog"]);
    let value = args.fetch("never.set");

    assert!(!value.is_present());
    assert_eq!(value.string(None), Err(ValueError::Empty));
    assert_eq!(value.i64(Some(1234)), Ok(1234));
    assert_eq!(value.must_i64(None), 0);
}

#[test]
fn test_literal_value_matches_lookup_behavior() {
    // A Value built from a literal payload behaves like a lookup result,
    // except that missing-value errors cannot name a flag.
    assert_eq!(Value::new("123").i64(None), Ok(123));
    assert_eq!(Value::new("").i64(None), Err(ValueError::Empty));
}

#[test]
fn test_replace_starts_a_fresh_generation() {
    let args = args_from(&["prog", "--env", "staging", "--verbose"]);
    assert_eq!(args.fetch("env").string(None).unwrap(), "staging");
    assert_eq!(args.fetch("verbose").bool(None), Ok(true));

    args.replace(
        ["prog", "--env", "production"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    assert_eq!(args.fetch("env").string(None).unwrap(), "production");
    assert!(!args.fetch("verbose").is_present());
}
