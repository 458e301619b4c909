use framejson::text::{decode, decode_file, decode_reader, encode, encode_file, encode_pretty};
use framejson::{JsonArray, JsonObject, JsonValue, ParseError};

fn obj(fields: &[(&str, JsonValue)]) -> JsonValue {
    fields
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect::<JsonObject>()
        .into()
}

fn arr(items: &[JsonValue]) -> JsonValue {
    items.iter().cloned().collect::<JsonArray>().into()
}

#[test]
fn text_round_trip_matrix() {
    let values = vec![
        JsonValue::Null,
        JsonValue::from(true),
        JsonValue::from(false),
        JsonValue::from(0i32),
        JsonValue::from(-123i64),
        JsonValue::from(1.5f64),
        JsonValue::from(-12321.321123f64),
        JsonValue::from(1e300f64),
        JsonValue::from(0.1f32),
        JsonValue::from(-3.75f32),
        JsonValue::from(""),
        JsonValue::from("abc123"),
        JsonValue::from("with \"quotes\" and \\ slashes\n"),
        JsonValue::from("…🎉…"),
        obj(&[]),
        arr(&[]),
        obj(&[("foo", JsonValue::from("bar"))]),
        arr(&[
            JsonValue::from(1i32),
            JsonValue::Null,
            JsonValue::from("str"),
            arr(&[JsonValue::from(true)]),
        ]),
        obj(&[
            ("", JsonValue::Null),
            ("null", JsonValue::from(false)),
            ("nested", obj(&[("k", arr(&[JsonValue::from(2.5f64)]))])),
        ]),
    ];

    for value in values {
        let compact = encode(&value);
        let decoded = decode(&compact)
            .unwrap_or_else(|e| panic!("decode failed for {compact}: {e}"));
        assert_eq!(decoded, value, "round trip mismatch for {compact}");

        let pretty = encode_pretty(&value);
        let decoded_pretty = decode(&pretty)
            .unwrap_or_else(|e| panic!("pretty decode failed for {pretty}: {e}"));
        assert_eq!(decoded_pretty, value);
    }
}

#[test]
fn scenario_three_ordered_keys() {
    let value = decode("{\"x\":1,\"y\":[true,false],\"z\":{\"w\":null}}").unwrap();

    let root = value.as_object().expect("root must be an object");
    let keys: Vec<String> = root.borrow().keys().map(str::to_owned).collect();
    assert_eq!(keys, vec!["x", "y", "z"]);

    let y = value.get("y").unwrap();
    assert_eq!(y.at(0).unwrap(), JsonValue::from(true));
    assert_eq!(y.at(1).unwrap(), JsonValue::from(false));
    assert_eq!(y.as_array().unwrap().borrow().len(), 2);

    assert!(value.get("z").unwrap().get("w").unwrap().is_null());

    // writing back compact reproduces the document, key order intact
    assert_eq!(encode(&value), "{\"x\":1,\"y\":[true,false],\"z\":{\"w\":null}}");
}

#[test]
fn duplicate_keys_fail_with_position() {
    let err = decode("{\"a\":1,\"a\":2}").unwrap_err();
    match err {
        ParseError::DuplicateObjectKeys(pos) => {
            assert_eq!(pos.line, 1);
            assert_eq!(pos.column, 8);
        }
        other => panic!("expected DuplicateObjectKeys, got {other}"),
    }
}

#[test]
fn escape_fidelity() {
    let value = decode("\"\\u0041\\n\\\"\"").unwrap();
    assert_eq!(value, JsonValue::from("A\n\""));
    // re-escaping uses the reverse table: printable A stays literal
    assert_eq!(encode(&value), "\"A\\n\\\"\"");
    assert_eq!(decode(&encode(&value)).unwrap(), value);
}

#[test]
fn surrogate_pair_escapes_compose_to_astral_characters() {
    let value = decode("\"\\ud83d\\ude00\"").unwrap();
    assert_eq!(value, JsonValue::from("😀"));
    // astral characters write back raw and round-trip
    assert_eq!(decode(&encode(&value)).unwrap(), value);
}

#[test]
fn invalid_documents_matrix() {
    let invalid = [
        "",
        "@",
        "tru",
        "nul",
        "{\"a\" 1}",
        "{\"a\":1,}",
        "[1,]",
        "[1;2]",
        "{1:2}",
        "\"\\q\"",
        "\"\\u00g1\"",
        "\"\\ud800\"",
        "\"\\udc00\"",
    ];
    for text in invalid {
        assert!(decode(text).is_err(), "expected failure for {text:?}");
    }
}

#[test]
fn reader_and_file_entry_points() {
    let value = decode_reader("[1,2,3]".as_bytes()).unwrap();
    assert_eq!(value, decode("[1,2,3]").unwrap());

    let path = std::env::temp_dir().join("framejson_text_matrix.json");
    encode_file(&path, &value).unwrap();
    assert_eq!(decode_file(&path).unwrap(), value);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = decode_file("/nonexistent/framejson.json").unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}
