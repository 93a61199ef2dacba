// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;
use crate::environment::EnvOp;

#[rstest]
fn test_parse_minimal() {
    let spec = ModuleSpec::from_yaml("api: tecmod/v0\n").expect("Should parse");

    assert_eq!(spec.api, ApiVersion::V0);
    assert_eq!(spec.python_paths, vec!["."]);
    assert_eq!(spec.bin_paths, vec!["bin"]);
    assert!(spec.conflicts.is_empty());
    assert!(spec.environment.is_empty());
}

#[rstest]
fn test_parse_empty_document_uses_defaults() {
    let spec = ModuleSpec::from_yaml("").expect("Empty file is a valid module");
    assert_eq!(spec.python_paths, vec!["."]);
    assert_eq!(spec.bin_paths, vec!["bin"]);
}

#[rstest]
fn test_parse_comments_only_document_uses_defaults() {
    let spec = ModuleSpec::from_yaml("# placeholder module\n").expect("Should parse");
    assert_eq!(spec.bin_paths, vec!["bin"]);
}

#[rstest]
fn test_parse_full() {
    let yaml = r#"
api: tecmod/v0
description: "Tecplot data reduction utilities"
root_var: TEC_UTIL_ROOT
python_paths: ["."]
bin_paths: ["bin", "scripts"]
conflicts: ["tec-util-legacy"]
environment:
  - set: TEC_UTIL_DEBUG
    value: "0"
"#;

    let spec = ModuleSpec::from_yaml(yaml).expect("Should parse");
    assert_eq!(spec.description.as_deref(), Some("Tecplot data reduction utilities"));
    assert_eq!(spec.root_var.as_deref(), Some("TEC_UTIL_ROOT"));
    assert_eq!(spec.bin_paths, vec!["bin", "scripts"]);
    assert_eq!(spec.conflicts, vec!["tec-util-legacy"]);
    assert_eq!(spec.environment.len(), 1);
    assert!(matches!(&spec.environment[0], EnvOp::Set(s) if s.set == "TEC_UTIL_DEBUG"));
}

#[rstest]
fn test_parse_unknown_api_version_fails() {
    let result = ModuleSpec::from_yaml("api: tecmod/v99\n");
    assert!(matches!(result, Err(crate::Error::InvalidYaml { .. })));
}

#[rstest]
fn test_load_sets_source_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tec_util");
    std::fs::write(&path, "api: tecmod/v0\n").unwrap();

    let spec = ModuleSpec::load(&path).expect("Should load");
    assert_eq!(spec.source_path, Some(path));
}

#[rstest]
fn test_load_missing_file_is_read_failed() {
    let tmp = TempDir::new().unwrap();
    let result = ModuleSpec::load(tmp.path().join("absent"));
    assert!(matches!(result, Err(crate::Error::ReadFailed { .. })));
}

#[rstest]
#[case("tec_util", "TEC_UTIL_ROOT")]
#[case("tec-util", "TEC_UTIL_ROOT")]
#[case("abc123", "ABC123_ROOT")]
fn test_default_root_var(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(default_root_var(name), expected);
}

#[rstest]
fn test_root_var_for_prefers_explicit() {
    let mut spec = ModuleSpec::default();
    assert_eq!(spec.root_var_for("tec_util"), "TEC_UTIL_ROOT");

    spec.root_var = Some("CUSTOM_ROOT".to_string());
    assert_eq!(spec.root_var_for("tec_util"), "CUSTOM_ROOT");
}

#[rstest]
fn test_validate_rejects_bad_root_var() {
    let spec = ModuleSpec {
        root_var: Some("1BAD NAME".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        spec.validate(),
        Err(crate::Error::ValidationFailed(_))
    ));

    let ok = ModuleSpec {
        root_var: Some("TEC_UTIL_ROOT".to_string()),
        ..Default::default()
    };
    assert!(ok.validate().is_ok());
}
