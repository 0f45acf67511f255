use recordtree_record::{
    record, Codec, Document, JsonCodec, Nullable, Record, RecordExt, Style, Value,
};

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct SubObj {
        pub a: i32,
        pub b: i32,
        pub v: Nullable<[i32; 3]>,
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct MainObj {
        pub bool_val: bool => "boolVal",
        pub uint_val: Nullable<u32> => "uintVal",
        pub vec: Vec<i32>,
        pub obj: Nullable<SubObj>,
        pub vec_obj: Nullable<Vec<SubObj>> => "vecObj",
        pub vec_obj_fixed_size: Nullable<[SubObj; 2]> => "vecObjFixedSize",
    }
}

fn sub(a: i32, b: i32, v: Option<[i32; 3]>) -> SubObj {
    SubObj {
        a,
        b,
        v: Nullable::from_option(v),
    }
}

fn json_value(text: &str) -> Value {
    JsonCodec.decode(text).unwrap()
}

#[test]
fn string_where_unsigned_expected_fails_at_field() {
    let mut doc = Document::<MainObj>::new();
    let ok = doc.load(r#"{"boolVal": true, "uintVal": "123", "vec": [1,2,3], "foo": null}"#);

    assert!(!ok);
    assert_eq!(doc.last_error(), "Input json object is not valid");
    assert!(doc.error_info().starts_with("$.uintVal"));
    assert_eq!(doc.error_info(), "$.uintVal -> invalid value type.");
}

#[test]
fn valid_input_loads_and_writes_equivalent_tree() {
    let input = r#"{"boolVal": true, "uintVal": 123, "vec": [1,2,3]}"#;
    let mut doc = Document::<MainObj>::new();

    assert!(doc.load(input));
    assert!(doc.bool_val);
    assert!(doc.uint_val.holds(&123));
    assert_eq!(doc.vec, vec![1, 2, 3]);
    assert!(doc.obj.is_null());

    let (text, ok) = doc.write(true);
    assert!(ok);

    let written = json_value(&text);
    assert_eq!(written.field("boolVal"), Some(&Value::Bool(true)));
    assert_eq!(written.field("uintVal"), Some(&Value::from(123)));
    assert_eq!(written.field("vec"), Some(&Value::from(vec![1, 2, 3])));
    // absent slots are written as explicit nulls, never dropped
    assert_eq!(written.field("obj"), Some(&Value::Null));
    assert_eq!(written.field("vecObj"), Some(&Value::Null));
    assert_eq!(written.field("vecObjFixedSize"), Some(&Value::Null));
}

#[test]
fn nested_records_round_trip() {
    let input = r#"{
        "boolVal": false,
        "uintVal": null,
        "vec": [],
        "obj": {"a": 11, "b": 22},
        "vecObj": [{"a": 44, "b": 55, "v": [6,7,8]}, {"a": 66, "b": 77}, {"a": 88, "b": 99, "v": null}],
        "vecObjFixedSize": [{"a": 444, "b": 545}, {"a": 666, "b": 777}]
    }"#;

    let parsed = MainObj::from_json(input).unwrap();
    assert_eq!(parsed.obj, Nullable::new(sub(11, 22, None)));
    assert_eq!(
        parsed.vec_obj,
        Nullable::new(vec![
            sub(44, 55, Some([6, 7, 8])),
            sub(66, 77, None),
            sub(88, 99, None),
        ])
    );
    assert_eq!(
        parsed.vec_obj_fixed_size,
        Nullable::new([sub(444, 545, None), sub(666, 777, None)])
    );

    let text = parsed.to_json(Style::Compact).unwrap();
    let reparsed = MainObj::from_json(&text).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn nested_failures_carry_full_path() {
    let mut doc = Document::<MainObj>::new();

    let ok = doc.load(r#"{"boolVal": true, "vec": [], "vecObj": [{"a": 1, "b": 2}, {"a": 1, "b": 2, "v": [1, 2]}]}"#);
    assert!(!ok);
    assert_eq!(doc.error_info(), "$.vecObj[1].v -> invalid fixed size array 2 != 3.");

    let ok = doc.load(r#"{"boolVal": true, "vec": [], "obj": {"a": 1}}"#);
    assert!(!ok);
    assert_eq!(doc.error_info(), "$.obj.b -> invalid value type.");

    let ok = doc.load(r#"{"boolVal": true, "vec": [], "vecObjFixedSize": [{"a": 1, "b": 2}]}"#);
    assert!(!ok);
    assert_eq!(doc.error_info(), "$.vecObjFixedSize -> invalid fixed size array 1 != 2.");

    let ok = doc.load(r#"{"boolVal": true, "vec": [], "obj": [1]}"#);
    assert!(!ok);
    assert_eq!(doc.error_info(), "$.obj -> invalid type, must be object.");
}

#[test]
fn list_reports_first_failing_index_only() {
    let mut doc = Document::<MainObj>::new();
    assert!(!doc.load(r#"{"boolVal": true, "vec": [1, 2, "three", "four"]}"#));
    assert_eq!(doc.error_info(), "$.vec[2] -> invalid value type.");

    assert!(!doc.load(r#"{"boolVal": true, "vec": {"0": 1}}"#));
    assert_eq!(doc.error_info(), "$.vec -> invalid type, must be array.");
}

#[test]
fn first_failing_field_wins() {
    let node = json_value(r#"{"boolVal": "yes", "vec": "nope"}"#);
    let failure = MainObj::validate_record(&node).unwrap_err();

    assert_eq!(failure.index, Some(0));
    assert_eq!(failure.error_info(), "$.boolVal -> invalid value type.");
}

#[test]
fn missing_required_field_is_rejected_missing_optional_is_not() {
    let node = json_value(r#"{"boolVal": true}"#);
    let failure = MainObj::validate_record(&node).unwrap_err();
    assert_eq!(failure.index, Some(2));
    assert_eq!(failure.error_info(), "$.vec -> invalid type, must be array.");

    let node = json_value(r#"{"a": 1, "b": 2}"#);
    let parsed = SubObj::parse_record(&node).unwrap();
    assert!(parsed.v.is_null());
}

#[test]
fn programmatic_construction_writes_expected_tree() {
    let mut doc = Document::<MainObj>::new();
    doc.bool_val = true;
    doc.uint_val.set(23456);
    doc.vec = vec![8, 7, 6, 5, 4, 3, 2, 1];

    let (text, ok) = doc.write(Style::Compact);
    assert!(ok, "{}", doc.last_error());
    assert_eq!(
        text,
        r#"{"boolVal":true,"obj":null,"uintVal":23456,"vec":[8,7,6,5,4,3,2,1],"vecObj":null,"vecObjFixedSize":null}"#
    );

    let sub_doc = Document::from(sub(123, 456, Some([7, 6, 5])));
    assert_eq!(
        sub_doc.data().to_json(Style::Compact).unwrap(),
        r#"{"a":123,"b":456,"v":[7,6,5]}"#
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let parsed = SubObj::from_json(r#"{"a": 1, "b": 2, "c": "extra"}"#).unwrap();
    assert_eq!(parsed, sub(1, 2, None));
}

#[test]
fn null_root_loads_all_optional_record() {
    record! {
        #[derive(Debug)]
        struct AllOptional {
            x: Nullable<i64>,
            y: Nullable<String>,
        }
    }

    let parsed = AllOptional::from_json("null").unwrap();
    assert!(parsed.x.is_null());
    assert!(parsed.y.is_null());

    let err = AllOptional::from_json("[]").unwrap_err();
    assert_eq!(err.error_info().as_deref(), Some("$ -> invalid type, must be object."));
    assert_eq!(err.failure().and_then(|f| f.index), None);
}

#[test]
fn non_finite_float_fails_create() {
    record! {
        #[derive(Debug)]
        struct Reading {
            level: f64,
        }
    }

    let mut doc = Document::from(Reading { level: f64::NAN });
    let (text, ok) = doc.write(false);
    assert!(!ok);
    assert!(text.is_empty());
    assert_eq!(doc.last_error(), "Cannot create json object");
    assert_eq!(doc.error_info(), "$.level -> invalid value, must be a finite number.");
}
