use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "AIVIS_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.catalog_path.is_none());
    assert_eq!(cfg.variant, Variant::Extended);
    assert!(cfg.seed.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("AIVIS_ENV", "test");
    map.insert("AIVIS_LOG_LEVEL", "debug");
    map.insert("AIVIS_CATALOG_PATH", "./config/catalog.yaml");
    map.insert("AIVIS_VARIANT", "minimal");
    map.insert("AIVIS_SEED", "42");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Test);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.catalog_path,
        Some(PathBuf::from("./config/catalog.yaml"))
    );
    assert_eq!(cfg.variant, Variant::Minimal);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn build_app_config_variant_is_case_insensitive() {
    let mut map = HashMap::new();
    map.insert("AIVIS_VARIANT", "Extended");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.variant, Variant::Extended);
}

#[test]
fn build_app_config_fails_with_invalid_variant() {
    let mut map = HashMap::new();
    map.insert("AIVIS_VARIANT", "maximal");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AIVIS_VARIANT"),
        "expected InvalidEnvVar(AIVIS_VARIANT), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_seed() {
    let mut map = HashMap::new();
    map.insert("AIVIS_SEED", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AIVIS_SEED"),
        "expected InvalidEnvVar(AIVIS_SEED), got: {result:?}"
    );
}

#[test]
fn build_app_config_blank_seed_is_unset() {
    let mut map = HashMap::new();
    map.insert("AIVIS_SEED", "  ");
    map.insert("AIVIS_CATALOG_PATH", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.seed.is_none());
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn variant_display_round_trips_through_from_str() {
    for variant in [Variant::Minimal, Variant::Extended] {
        assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
    }
}
