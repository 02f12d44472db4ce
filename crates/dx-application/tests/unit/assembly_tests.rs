//! Config Assembly Tests

use std::sync::Arc;

use dx_application::use_cases::{AssemblySettings, ConfigAssembler};
use dx_domain::error::{Error, Result};
use dx_domain::ports::SecretDecryptor;
use dx_domain::value_objects::Configuration;
use serde_json::{Value, json};

use crate::test_utils::{InMemoryResources, PassThrough};

const CORE: &str = r#"{
    "core": {"transport": {"channel": {"speed": {"byte": 1048576}}}},
    "job": {"setting": {"speed": {"channel": 1}, "errorLimit": {"record": 0}}}
}"#;

const MYSQL_READER: &str = r#"{
    "name": "mysqlreader",
    "class": "com.alibaba.datax.plugin.reader.mysqlreader.MysqlReader",
    "description": "reads rows from MySQL"
}"#;

const HDFS_WRITER: &str = r#"{
    "name": "hdfswriter",
    "class": "com.alibaba.datax.plugin.writer.hdfswriter.HdfsWriter"
}"#;

const STREAM_WRITER: &str = r#"{"name": "streamwriter", "class": "StreamWriter"}"#;

fn job(reader: &str, writer: &str) -> String {
    json!({
        "job": {
            "setting": {"speed": {"channel": 3}},
            "content": [{
                "reader": {"name": reader, "parameter": {"username": "root"}},
                "writer": {"name": writer, "parameter": {"path": "/tmp/out"}}
            }]
        }
    })
    .to_string()
}

fn classpath() -> InMemoryResources {
    InMemoryResources::new()
        .with_root("classpath")
        .with_file("conf/core.json", CORE)
        .with_file("plugin/reader/mysqlreader/plugin.json", MYSQL_READER)
        .with_file("plugin/writer/hdfswriter/plugin.json", HDFS_WRITER)
        .with_file("plugin/writer/streamwriter/plugin.json", STREAM_WRITER)
}

fn assembler(resources: InMemoryResources) -> ConfigAssembler {
    ConfigAssembler::new(
        Arc::new(resources),
        Arc::new(PassThrough),
        AssemblySettings::default(),
    )
}

#[test]
fn test_assembles_reader_and_writer_descriptors() {
    let configuration = assembler(classpath())
        .assemble(&job("mysqlreader", "hdfswriter"))
        .unwrap();

    assert_eq!(
        configuration
            .get_string("plugin.reader.mysqlreader.path")
            .unwrap(),
        "memory://classpath/plugin/reader/mysqlreader/plugin.json"
    );
    assert_eq!(
        configuration
            .get_string("plugin.reader.mysqlreader.loadType")
            .unwrap(),
        "classLoader"
    );
    assert_eq!(
        configuration
            .get_string("plugin.writer.hdfswriter.class")
            .unwrap(),
        "com.alibaba.datax.plugin.writer.hdfswriter.HdfsWriter"
    );
    assert!(!configuration.contains("plugin.writer.streamwriter"));
}

#[test]
fn test_job_values_take_precedence_over_core() {
    let configuration = assembler(classpath())
        .assemble(&job("mysqlreader", "hdfswriter"))
        .unwrap();

    assert_eq!(
        configuration.get_i64_or("job.setting.speed.channel", 0).unwrap(),
        3
    );
    assert_eq!(
        configuration
            .get_i64_or("job.setting.errorLimit.record", -1)
            .unwrap(),
        0
    );
    assert_eq!(
        configuration
            .get_i64_or("core.transport.channel.speed.byte", 0)
            .unwrap(),
        1048576
    );
    assert_eq!(
        configuration
            .get_string("job.content[0].reader.parameter.username")
            .unwrap(),
        "root"
    );
}

#[test]
fn test_job_plugin_settings_are_not_overwritten_by_descriptor() {
    let mut job: Value = serde_json::from_str(&job("mysqlreader", "hdfswriter")).unwrap();
    job["plugin"] = json!({"reader": {"mysqlreader": {"class": "custom.Reader"}}});

    let configuration = assembler(classpath()).assemble(&job.to_string()).unwrap();
    assert_eq!(
        configuration
            .get_string("plugin.reader.mysqlreader.class")
            .unwrap(),
        "custom.Reader"
    );
    assert_eq!(
        configuration
            .get_string("plugin.reader.mysqlreader.description")
            .unwrap(),
        "reads rows from MySQL"
    );
}

#[test]
fn test_unknown_writer_is_reported() {
    let err = assembler(classpath())
        .assemble(&job("mysqlreader", "unknownwriter"))
        .unwrap_err();

    match err {
        Error::UnresolvedPlugin { plugins, message } => {
            assert_eq!(plugins, vec!["unknownwriter"]);
            assert!(message.contains("unknownwriter"));
        }
        other => panic!("Expected UnresolvedPlugin error, got {other:?}"),
    }
}

#[test]
fn test_every_unresolved_plugin_is_reported() {
    let err = assembler(classpath())
        .assemble(&job("oraclereader", "kafkawriter"))
        .unwrap_err();

    match err {
        Error::UnresolvedPlugin { plugins, .. } => {
            assert_eq!(plugins, vec!["kafkawriter", "oraclereader"]);
        }
        other => panic!("Expected UnresolvedPlugin error, got {other:?}"),
    }
}

#[test]
fn test_malformed_job_is_parse_error() {
    let err = assembler(classpath()).assemble("{\"job\": ").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_missing_reader_name_is_missing_key() {
    let err = assembler(classpath())
        .assemble(r#"{"job": {"content": [{"writer": {"name": "hdfswriter"}}]}}"#)
        .unwrap_err();

    match err {
        Error::MissingKey { path } => assert_eq!(path, "job.content[0].reader.name"),
        other => panic!("Expected MissingKey error, got {other:?}"),
    }
}

#[test]
fn test_missing_core_config_is_missing_resource() {
    let resources = InMemoryResources::new()
        .with_file("plugin/reader/mysqlreader/plugin.json", MYSQL_READER)
        .with_file("plugin/writer/hdfswriter/plugin.json", HDFS_WRITER);

    let err = assembler(resources)
        .assemble(&job("mysqlreader", "hdfswriter"))
        .unwrap_err();
    match err {
        Error::MissingResource { resource, .. } => assert_eq!(resource, "conf/core.json"),
        other => panic!("Expected MissingResource error, got {other:?}"),
    }
}

#[test]
fn test_malformed_core_config_names_resource() {
    let resources = InMemoryResources::new()
        .with_root("broken")
        .with_file("conf/core.json", "{ not json");

    let err = assembler(resources)
        .assemble(&job("mysqlreader", "hdfswriter"))
        .unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("memory://broken/conf/core.json"));
}

#[test]
fn test_malformed_descriptor_fails_assembly() {
    let resources = InMemoryResources::new()
        .with_root("classpath")
        .with_file("conf/core.json", CORE)
        .with_file("plugin/reader/aaa/plugin.json", "[unterminated");

    let err = assembler(resources)
        .assemble(&job("mysqlreader", "hdfswriter"))
        .unwrap_err();
    assert!(err.to_string().contains("plugin/reader/aaa/plugin.json"));
}

#[test]
fn test_descriptor_with_structured_name_is_skipped() {
    let resources = classpath()
        .with_root("extras")
        .with_file("plugin/reader/odd/plugin.json", r#"{"name": {"zh": "x"}}"#)
        .with_file("plugin/writer/odd/plugin.json", r#"{"name": ["a", "b"]}"#);

    let configuration = assembler(resources)
        .assemble(&job("mysqlreader", "streamwriter"))
        .unwrap();
    assert!(configuration.contains("plugin.reader.mysqlreader.class"));
    assert!(configuration.contains("plugin.writer.streamwriter.class"));
}

#[test]
fn test_stops_scanning_once_all_plugins_matched() {
    let resources = classpath()
        .with_root("extras")
        .with_file("plugin/reader/broken/plugin.json", "{ never parsed");

    let configuration = assembler(resources)
        .assemble(&job("mysqlreader", "hdfswriter"))
        .unwrap();
    assert!(configuration.contains("plugin.writer.hdfswriter"));
}

#[test]
fn test_custom_settings_are_honored() {
    let resources = InMemoryResources::new()
        .with_root("custom")
        .with_file("settings/defaults.json", CORE)
        .with_file("readers/mysql/descriptor.json", MYSQL_READER)
        .with_file("writers/hdfs/descriptor.json", HDFS_WRITER);
    let settings = AssemblySettings {
        core_config: "settings/defaults.json".to_string(),
        descriptor_file: "descriptor.json".to_string(),
        load_type: "jarLoader".to_string(),
    };
    let assembler = ConfigAssembler::new(Arc::new(resources), Arc::new(PassThrough), settings);

    let configuration = assembler.assemble(&job("mysqlreader", "hdfswriter")).unwrap();
    assert_eq!(
        configuration
            .get_string("plugin.writer.hdfswriter.loadType")
            .unwrap(),
        "jarLoader"
    );
}

struct UnmaskPasswords;

impl SecretDecryptor for UnmaskPasswords {
    fn decrypt(&self, mut configuration: Configuration) -> Result<Configuration> {
        let masked = "job.content[0].reader.parameter.password";
        if configuration.get_string_or(masked, "")? == "ENC(secret)" {
            configuration.set(masked, Value::String("secret".to_string()))?;
        }
        Ok(configuration)
    }
}

#[test]
fn test_secrets_are_decrypted_before_merge() {
    let mut job: Value = serde_json::from_str(&job("mysqlreader", "hdfswriter")).unwrap();
    job["job"]["content"][0]["reader"]["parameter"]["password"] = json!("ENC(secret)");

    let assembler = ConfigAssembler::new(
        Arc::new(classpath()),
        Arc::new(UnmaskPasswords),
        AssemblySettings::default(),
    );
    let configuration = assembler.assemble(&job.to_string()).unwrap();
    assert_eq!(
        configuration
            .get_string("job.content[0].reader.parameter.password")
            .unwrap(),
        "secret"
    );
}
