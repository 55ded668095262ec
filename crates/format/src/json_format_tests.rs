// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde::Deserialize;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn round_trips_a_struct() {
    let fmt = JsonFormat;
    let p = Point { x: 1, y: 2 };
    let bytes = fmt.encode(&p).unwrap();
    let back: Point = fmt.decode(&bytes).unwrap();
    assert_eq!(p, back);
}

#[test]
fn is_human_readable() {
    let fmt = JsonFormat;
    let bytes = fmt.encode(&Point { x: 1, y: 2 }).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\"x\""));
}

#[test]
fn version_and_extension_are_stable() {
    assert_eq!(JsonFormat::VERSION, "1");
    assert_eq!(JsonFormat.extension(), "json");
}

#[test]
fn decode_error_on_garbage() {
    let fmt = JsonFormat;
    let result: Result<Point, FormatError> = fmt.decode(b"not json");
    assert!(result.is_err());
}
