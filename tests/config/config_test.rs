/*!
 * Configuration Loading Tests
 * File and environment layering
 */

use pretty_assertions::assert_eq;
use quickfit::core::limits::{ENV_COMMON_SIZES, ENV_CONFIG_PATH, ENV_FREE_LIST_POLICY};
use quickfit::{AllocatorConfig, ConfigError, FreeListPolicy, QuickFitAllocator};
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    std::env::remove_var(ENV_CONFIG_PATH);
    std::env::remove_var(ENV_COMMON_SIZES);
    std::env::remove_var(ENV_FREE_LIST_POLICY);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"common_sizes": [32, 16, 32], "policy": "replenishing"}}"#).unwrap();

    let config = AllocatorConfig::from_file(file.path()).unwrap();
    assert_eq!(config.common_sizes, vec![32, 16, 32]);
    assert_eq!(config.policy, FreeListPolicy::Replenishing);

    let allocator = QuickFitAllocator::with_config(&[16, 32, 64], &config);
    assert_eq!(allocator.size_classes(), &[16, 32]);
    assert_eq!(allocator.free_list_len(16), Some(1));
    assert_eq!(allocator.free_list_len(32), Some(1));
}

#[test]
fn test_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "common_sizes = [1]").unwrap();

    let err = AllocatorConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
#[serial]
fn test_env_defaults() {
    clear_env();
    assert_eq!(AllocatorConfig::from_env().unwrap(), AllocatorConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"common_sizes": [8], "policy": "replenishing"}}"#).unwrap();

    std::env::set_var(ENV_CONFIG_PATH, file.path());
    std::env::set_var(ENV_FREE_LIST_POLICY, "strict");
    let config = AllocatorConfig::from_env();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.common_sizes, vec![8]);
    assert_eq!(config.policy, FreeListPolicy::Strict);
}

#[test]
#[serial]
fn test_env_bad_sizes() {
    clear_env();
    std::env::set_var(ENV_COMMON_SIZES, "10,twenty");
    let result = AllocatorConfig::from_env();
    clear_env();

    match result {
        Err(ConfigError::InvalidEnv { var, value }) => {
            assert_eq!(var, ENV_COMMON_SIZES);
            assert_eq!(value, "10,twenty");
        }
        other => panic!("Expected InvalidEnv, got {:?}", other),
    }
}
