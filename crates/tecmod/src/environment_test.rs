// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn test_generate_startup_script_basic() {
    let ops = vec![
        EnvOp::Comment(CommentEnv {
            comment: "tec_util environment".to_string(),
        }),
        EnvOp::Set(SetEnv {
            set: "TEC_UTIL_ROOT".to_string(),
            value: "/opt/tools/tec/mod".to_string(),
        }),
        EnvOp::Prepend(PrependEnv {
            prepend: "PATH".to_string(),
            value: "/opt/tools/tec/mod/bin".to_string(),
            separator: None,
        }),
        EnvOp::Append(AppendEnv {
            append: "LD_LIBRARY_PATH".to_string(),
            value: "/opt/tools/tec/mod/lib".to_string(),
            separator: Some(":".to_string()),
        }),
    ];

    let script = generate_startup_script(&ops);

    assert!(script.contains("# tec_util environment"));
    assert!(script.contains("export TEC_UTIL_ROOT=\"/opt/tools/tec/mod\""));
    assert!(script.contains("export PATH=\"/opt/tools/tec/mod/bin:${PATH}\""));
    assert!(script.contains("export LD_LIBRARY_PATH=\"${LD_LIBRARY_PATH}:"));
}

#[test]
fn test_escape_special_characters() {
    let ops = vec![EnvOp::Set(SetEnv {
        set: "SPECIAL".to_string(),
        value: "value with $dollar and \"quotes\"".to_string(),
    })];

    let script = generate_startup_script(&ops);
    assert!(script.contains("SPECIAL"));
    assert!(!script.contains("$dollar and \"quotes\""));
    assert!(script.contains("\\$dollar"));
    assert!(script.contains("\\\"quotes\\\""));
}

#[test]
fn test_escape_backslash_and_backquote() {
    let ops = vec![EnvOp::Set(SetEnv {
        set: "SPECIAL".to_string(),
        value: "back\\slash and `tick`".to_string(),
    })];

    let script = generate_startup_script(&ops);
    assert!(script.contains("back\\\\slash"));
    assert!(script.contains("\\`tick\\`"));
    assert!(!script.contains("`tick`"));
}

#[test]
fn test_prepend_precedence_order() {
    // The prepended value must sit in front of the existing expansion.
    let ops = vec![EnvOp::Prepend(PrependEnv {
        prepend: "PYTHONPATH".to_string(),
        value: "/opt/tools/tec/mod".to_string(),
        separator: None,
    })];

    let script = generate_startup_script(&ops);
    let value_pos = script.find("/opt/tools/tec/mod").unwrap();
    let expansion_pos = script.find("${PYTHONPATH}").unwrap();
    assert!(value_pos < expansion_pos);
}

#[test]
fn test_yaml_roundtrip_of_ops() {
    let yaml = r#"
- set: TEC_UTIL_DEBUG
  value: "0"
- prepend: PATH
  value: /opt/bin
- append: MANPATH
  value: /opt/man
  separator: ":"
"#;

    let ops: Vec<EnvOp> = serde_yaml::from_str(yaml).expect("Should parse ops");
    assert_eq!(ops.len(), 3);
    assert!(matches!(&ops[0], EnvOp::Set(s) if s.set == "TEC_UTIL_DEBUG"));
    assert!(matches!(&ops[1], EnvOp::Prepend(p) if p.prepend == "PATH"));
    assert!(matches!(&ops[2], EnvOp::Append(a) if a.separator.as_deref() == Some(":")));
}

#[test]
fn test_variable_accessor() {
    let op = EnvOp::Prepend(PrependEnv {
        prepend: "PATH".to_string(),
        value: "/bin".to_string(),
        separator: None,
    });
    assert_eq!(op.variable(), Some("PATH"));

    let comment = EnvOp::Comment(CommentEnv {
        comment: "hi".to_string(),
    });
    assert_eq!(comment.variable(), None);
}
