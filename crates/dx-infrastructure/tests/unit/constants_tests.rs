//! Constants Tests

use dx_infrastructure::constants::*;

#[test]
fn test_config_constants() {
    assert_eq!(DEFAULT_CONFIG_FILENAME, "datax.toml");
    assert_eq!(CONFIG_ENV_PREFIX, "DATAX");
    assert_eq!(CONFIG_ENV_SEPARATOR, "__");
    assert!(DEFAULT_CONFIG_FILENAME.ends_with(".toml"));
}

#[test]
fn test_logging_constants() {
    assert_eq!(DEFAULT_LOG_LEVEL, "info");
    assert_eq!(LOG_ENV_FILTER, "DATAX_LOG");
    assert!(LOG_MAX_FILES > 0);
    assert!(DESCRIPTOR_SEARCH_DEPTH >= 4);
}
