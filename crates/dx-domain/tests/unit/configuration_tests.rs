//! Unit tests for the configuration tree

use dx_domain::constants::MAX_INDEX_GROWTH;
use dx_domain::{Configuration, Error};
use serde_json::json;
use std::io::Write;

fn tree(value: serde_json::Value) -> Configuration {
    Configuration::from_value(value).expect("object root")
}

#[test]
fn test_parse_well_formed_json() {
    let config = Configuration::from_json(r#"{"job": {"setting": {"speed": {"channel": 3}}}}"#)
        .expect("should parse");
    assert_eq!(config.get("job.setting.speed.channel").unwrap(), &json!(3));
}

#[test]
fn test_parse_malformed_json_is_parse_error() {
    let err = Configuration::from_json("{\"job\": ").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
}

#[test]
fn test_parse_non_object_root_is_parse_error() {
    let err = Configuration::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "got {err:?}");
}

#[test]
fn test_from_path_names_the_file_on_parse_failure() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = Configuration::from_path(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains(&file.path().display().to_string()),
        "message should name the file: {message}"
    );
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Configuration::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {err:?}");
}

#[test]
fn test_merge_without_overwrite_keeps_destination() {
    let mut dest = tree(json!({"a": 1, "b": 2}));
    dest.merge(&tree(json!({"b": 3, "c": 4})), false);
    assert_eq!(dest.as_raw(), &json!({"a": 1, "b": 2, "c": 4}));
}

#[test]
fn test_merge_with_overwrite_takes_overlay() {
    let mut dest = tree(json!({"a": 1, "b": 2}));
    dest.merge(&tree(json!({"b": 3, "c": 4})), true);
    assert_eq!(dest.as_raw(), &json!({"a": 1, "b": 3, "c": 4}));
}

#[test]
fn test_merge_is_leaf_granular() {
    let mut dest = tree(json!({"core": {"transport": {"channel": {"speed": 5}}}}));
    let overlay = tree(json!({
        "core": {"transport": {"channel": {"speed": 9, "class": "MemoryChannel"}}}
    }));
    dest.merge(&overlay, false);

    assert_eq!(dest.get("core.transport.channel.speed").unwrap(), &json!(5));
    assert_eq!(
        dest.get("core.transport.channel.class").unwrap(),
        &json!("MemoryChannel")
    );
}

#[test]
fn test_merge_sequences_element_wise() {
    let mut dest = tree(json!({"content": [{"reader": {"name": "mysqlreader"}}]}));
    let overlay = tree(json!({
        "content": [{"reader": {"name": "other", "parameter": {}}}, {"extra": true}]
    }));
    dest.merge(&overlay, false);

    assert_eq!(
        dest.get("content[0].reader.name").unwrap(),
        &json!("mysqlreader")
    );
    assert_eq!(dest.get("content[1].extra").unwrap(), &json!(true));
}

#[test]
fn test_merge_fills_null_destination() {
    let mut dest = tree(json!({"a": null}));
    dest.merge(&tree(json!({"a": 7})), false);
    assert_eq!(dest.get("a").unwrap(), &json!(7));
}

#[test]
fn test_get_missing_key() {
    let config = tree(json!({"a": {"b": 1}}));
    match config.get("a.c").unwrap_err() {
        Error::MissingKey { path } => assert_eq!(path, "a.c"),
        other => panic!("Expected MissingKey error, got {other:?}"),
    }
}

#[test]
fn test_get_or_default() {
    let config = tree(json!({"a": 1}));
    assert_eq!(config.get_or("b", json!("fallback")).unwrap(), json!("fallback"));
    assert_eq!(config.get_or("a", json!(0)).unwrap(), json!(1));
}

#[test]
fn test_paths_are_case_sensitive() {
    let config = tree(json!({"Name": "upper"}));
    assert!(config.contains("Name"));
    assert!(!config.contains("name"));
}

#[test]
fn test_typed_getters() {
    let config = tree(json!({
        "name": "streamreader",
        "channel": 4,
        "enabled": true,
        "retries": "3",
        "nested": {"k": "v"}
    }));

    assert_eq!(config.get_string("name").unwrap(), "streamreader");
    assert_eq!(config.get_string("channel").unwrap(), "4");
    assert_eq!(config.get_string_or("missing", "").unwrap(), "");
    assert!(config.get_bool_or("enabled", false).unwrap());
    assert!(!config.get_bool_or("missing", false).unwrap());
    assert_eq!(config.get_i64_or("retries", 0).unwrap(), 3);
    assert_eq!(config.get_i64_or("missing", 11).unwrap(), 11);
    assert!(config.get_string("nested").is_err());
    assert_eq!(
        config.get_configuration("nested").unwrap().as_raw(),
        &json!({"k": "v"})
    );
}

#[test]
fn test_set_creates_intermediate_nodes() {
    let mut config = Configuration::new();
    config
        .set("plugin.reader.mysqlreader.path", json!("/plugins/mysqlreader"))
        .unwrap();
    assert_eq!(
        config.as_raw(),
        &json!({"plugin": {"reader": {"mysqlreader": {"path": "/plugins/mysqlreader"}}}})
    );
}

#[test]
fn test_set_pads_sequences() {
    let mut config = Configuration::new();
    config.set("job.content[1].writer.name", json!("hdfswriter")).unwrap();
    assert_eq!(
        config.as_raw(),
        &json!({"job": {"content": [null, {"writer": {"name": "hdfswriter"}}]}})
    );
}

#[test]
fn test_set_returns_previous_value() {
    let mut config = tree(json!({"a": 1}));
    assert_eq!(config.set("a", json!(2)).unwrap(), Some(json!(1)));
    assert_eq!(config.set("b", json!(3)).unwrap(), None);
}

#[test]
fn test_set_replaces_scalar_in_the_way() {
    let mut config = tree(json!({"a": 1}));
    config.set("a.b", json!(2)).unwrap();
    assert_eq!(config.as_raw(), &json!({"a": {"b": 2}}));
}

#[test]
fn test_set_rejects_malformed_path() {
    let mut config = Configuration::new();
    let err = config.set("a..b", json!(1)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }), "got {err:?}");
}

#[test]
fn test_set_rejects_index_at_usize_max() {
    let mut config = Configuration::new();
    let err = config
        .set("a[18446744073709551615]", json!(1))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }), "got {err:?}");
    assert!(config.as_raw().as_object().unwrap().is_empty());
}

#[test]
fn test_set_rejects_far_out_of_range_index() {
    let mut config = tree(json!({"a": {"list": [1, 2], "keep": true}}));
    let err = config.set("a.list[1000000000000]", json!(3)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }), "got {err:?}");
    assert_eq!(config.as_raw(), &json!({"a": {"list": [1, 2], "keep": true}}));
}

#[test]
fn test_set_pads_up_to_growth_limit() {
    let mut config = Configuration::new();
    let path = format!("items[{MAX_INDEX_GROWTH}]");
    config.set(&path, json!("last")).unwrap();
    assert_eq!(config.get_string(&path).unwrap(), "last");

    let beyond = format!("items[{}]", 2 * MAX_INDEX_GROWTH + 2);
    assert!(config.set(&beyond, json!(1)).is_err());
}

#[test]
fn test_remove() {
    let mut config = tree(json!({"a": {"b": 1, "c": [1, 2, 3]}}));
    assert_eq!(config.remove("a.b").unwrap(), Some(json!(1)));
    assert_eq!(config.remove("a.c[1]").unwrap(), Some(json!(2)));
    assert_eq!(config.remove("a.missing").unwrap(), None);
    assert_eq!(config.as_raw(), &json!({"a": {"c": [1, 3]}}));
}

#[test]
fn test_keys_lists_leaf_paths() {
    let config = tree(json!({"job": {"content": [{"reader": {"name": "r"}}], "id": 1}}));
    let mut keys = config.keys();
    keys.sort();
    assert_eq!(keys, vec!["job.content[0].reader.name", "job.id"]);
}

#[test]
fn test_as_raw_embeds_into_another_tree() {
    let descriptor = tree(json!({"name": "mysqlreader", "class": "Reader"}));
    let mut nested = Configuration::new();
    nested
        .set("plugin.reader.mysqlreader", descriptor.as_raw().clone())
        .unwrap();
    assert_eq!(
        nested.get("plugin.reader.mysqlreader.class").unwrap(),
        &json!("Reader")
    );
}

#[test]
fn test_display_renders_json() {
    let config = tree(json!({"a": 1}));
    assert_eq!(config.to_string(), r#"{"a":1}"#);
    assert!(config.to_pretty_json().unwrap().contains("\"a\": 1"));
}
