use std::path::Path;

use super::*;

fn two_by_two() -> Catalog {
    Catalog {
        brands: vec![BrandDescriptor::new("Pfizer"), BrandDescriptor::new("Roche")],
        platforms: vec![
            PlatformDescriptor::new("ChatGPT"),
            PlatformDescriptor::new("Claude"),
        ],
    }
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.brands.len(), 7);
    assert_eq!(catalog.platforms.len(), 5);
    assert!(validate_catalog(&catalog).is_ok());
}

#[test]
fn builtin_catalog_carries_full_metadata() {
    let catalog = builtin_catalog();
    assert!(catalog
        .brands
        .iter()
        .all(|b| b.specialty.is_some() && b.market_cap.is_some()));
    assert!(catalog
        .platforms
        .iter()
        .all(|p| p.user_base.is_some() && p.accuracy.is_some()));
}

#[test]
fn validate_accepts_descriptors_without_metadata() {
    assert!(validate_catalog(&two_by_two()).is_ok());
}

#[test]
fn validate_rejects_empty_brand_list() {
    let mut catalog = two_by_two();
    catalog.brands.clear();
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("at least one brand"));
}

#[test]
fn validate_rejects_empty_platform_list() {
    let mut catalog = two_by_two();
    catalog.platforms.clear();
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("at least one platform"));
}

#[test]
fn validate_rejects_blank_brand_name() {
    let mut catalog = two_by_two();
    catalog.brands.push(BrandDescriptor::new("   "));
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("brand name must be non-empty"));
}

#[test]
fn validate_rejects_duplicate_brand_case_insensitively() {
    let mut catalog = two_by_two();
    catalog.brands.push(BrandDescriptor::new("pfizer"));
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("duplicate brand name"));
}

#[test]
fn validate_rejects_duplicate_platform() {
    let mut catalog = two_by_two();
    catalog.platforms.push(PlatformDescriptor::new("Claude"));
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("duplicate platform name"));
}

#[test]
fn validate_rejects_negative_market_cap() {
    let mut catalog = two_by_two();
    catalog.brands[0].market_cap = Some(-1.0);
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("invalid market_cap"));
}

#[test]
fn validate_rejects_accuracy_above_one() {
    let mut catalog = two_by_two();
    catalog.platforms[1].accuracy = Some(1.2);
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("invalid accuracy"));
}

#[test]
fn validate_rejects_nan_user_base() {
    let mut catalog = two_by_two();
    catalog.platforms[0].user_base = Some(f64::NAN);
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("invalid user_base"));
}

#[test]
fn parse_yaml_with_optional_fields_omitted() {
    let yaml = "brands:\n  - name: Pfizer\n    market_cap: 200\nplatforms:\n  - name: ChatGPT\n";
    let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(catalog.brands[0].market_cap, Some(200.0));
    assert!(catalog.brands[0].specialty.is_none());
    assert!(catalog.platforms[0].accuracy.is_none());
}

#[test]
fn load_catalog_missing_file_is_io_error() {
    let err = load_catalog(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
}

#[test]
fn load_catalog_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("catalog.yaml");
    assert!(
        path.exists(),
        "catalog.yaml missing at {path:?}; required for this test"
    );
    let result = load_catalog(&path);
    assert!(result.is_ok(), "failed to load catalog.yaml: {result:?}");
    assert_eq!(result.unwrap(), builtin_catalog());
}
