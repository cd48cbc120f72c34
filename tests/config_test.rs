// ==========================================
// PolicyLoader 集成测试
// ==========================================
// 测试目标: 验证策略文件读取、部分覆盖、错误报告
// ==========================================

use maintenance_hub::config::{ConfigError, EnginePolicy, PolicyLoader, POLICY_ENV_VAR};
use std::fs;
use tempfile::TempDir;

/// 在临时目录写入策略文件
fn write_policy(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("写入策略文件失败");
    path
}

#[test]
fn test_load_explicit_file_partial_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(
        &dir,
        "policy.json",
        r#"{ "due_soon_miles": 1000, "seasonal_suppression_months": 3 }"#,
    );

    let policy = PolicyLoader::new().with_path(&path).load().unwrap();

    assert_eq!(policy.due_soon_miles, 1000);
    assert_eq!(policy.seasonal_suppression_months, 3);
    // 未携带的键保持默认
    assert_eq!(policy.due_soon_days, 30);
    assert_eq!(policy.missing_days_sort_key, 9999);
}

#[test]
fn test_empty_object_is_default_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "empty.json", "{}");

    let policy = PolicyLoader::load_file(&path).unwrap();
    assert_eq!(policy, EnginePolicy::default());
}

#[test]
fn test_missing_explicit_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let result = PolicyLoader::new().with_path(&path).load();
    match result {
        Err(ConfigError::Io { path: reported, .. }) => {
            assert!(reported.ends_with("absent.json"));
        }
        other => panic!("应返回 Io 错误: {:?}", other),
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "broken.json", r#"{ "due_soon_miles": "many" }"#);

    assert!(matches!(
        PolicyLoader::load_file(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_invalid_value_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_policy(&dir, "zero.json", r#"{ "days_per_month_estimate": 0 }"#);

    match PolicyLoader::load_file(&path) {
        Err(ConfigError::InvalidValue { key, .. }) => {
            assert_eq!(key, "days_per_month_estimate");
        }
        other => panic!("应返回 InvalidValue 错误: {:?}", other),
    }
}

#[test]
fn test_env_var_and_explicit_precedence() {
    let dir = tempfile::tempdir().unwrap();
    let env_path = write_policy(&dir, "env.json", r#"{ "due_soon_days": 45 }"#);
    let explicit_path = write_policy(&dir, "explicit.json", r#"{ "due_soon_days": 10 }"#);

    // 本测试文件中只有这里设置该环境变量
    std::env::set_var(POLICY_ENV_VAR, &env_path);

    let from_env = PolicyLoader::new().load().unwrap();
    let from_explicit = PolicyLoader::new().with_path(&explicit_path).load().unwrap();

    std::env::remove_var(POLICY_ENV_VAR);

    assert_eq!(from_env.due_soon_days, 45);
    assert_eq!(from_explicit.due_soon_days, 10, "显式路径优先于环境变量");
}

#[test]
fn test_default_path_location() {
    if let Some(path) = PolicyLoader::default_path() {
        assert!(path.ends_with("maintenance-hub/policy.json"));
    }
}
