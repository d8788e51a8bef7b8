use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Translation guards for the two site locales.
///
/// - every `t!("...")` key referenced under `src/` exists in the en-US file
/// - es-ES defines exactly the en-US keys, with the same `$variables`
/// - no file defines a key twice
///
/// The FTL parsing is a line heuristic: `key = value` at column 0 is a
/// message, everything else (comments, group headers, continuation lines)
/// is skipped.
const EN_US: &str = include_str!("../i18n/en-US/vitrina-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/vitrina-ui.ftl");

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message id -> variables referenced in its value.
fn parse_messages(src: &str, locale: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages = BTreeMap::new();
    for line in src.lines() {
        if line.is_empty() || line.starts_with('#') || line.starts_with(' ') || line.starts_with('-') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || !id.chars().all(valid_key_char) {
            continue;
        }
        let previous = messages.insert(id.to_string(), variables(value));
        assert!(previous.is_none(), "{locale}: duplicate definition of `{id}`");
    }
    messages
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Literal first arguments of `t!(` under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (pos, needle) in content.match_indices("t!(\"") {
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
    found
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = parse_messages(EN_US, "en-US");
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_keys(&src);
    assert!(!referenced.is_empty(), "no t!() usages found under {src:?}");

    let missing: Vec<_> = referenced
        .iter()
        .filter(|key| !fallback.contains_key(*key))
        .cloned()
        .collect();
    assert!(
        missing.is_empty(),
        "keys used in src/ but missing from en-US:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn spanish_matches_fallback_keys_and_variables() {
    let fallback = parse_messages(EN_US, "en-US");
    let spanish = parse_messages(ES_ES, "es-ES");
    assert!(!fallback.is_empty(), "en-US defines no messages");

    let mut failures = Vec::new();
    for (key, vars) in &fallback {
        match spanish.get(key) {
            None => failures.push(format!("missing `{key}`")),
            Some(es_vars) if es_vars != vars => {
                failures.push(format!("`{key}` uses {es_vars:?}, en-US uses {vars:?}"))
            }
            Some(_) => {}
        }
    }
    for key in spanish.keys().filter(|key| !fallback.contains_key(*key)) {
        failures.push(format!("`{key}` is not defined in en-US"));
    }

    assert!(
        failures.is_empty(),
        "es-ES translation problems:\n  {}",
        failures.join("\n  ")
    );
}

#[test]
fn runtime_messages_take_expected_arguments() {
    let fallback = parse_messages(EN_US, "en-US");
    let expect = |key: &str, vars: &[&str]| {
        let expected: BTreeSet<String> = vars.iter().map(|v| v.to_string()).collect();
        assert_eq!(fallback.get(key), Some(&expected), "{key}");
    };
    expect("form-error-required", &["label"]);
    expect("form-error-email", &[]);
    expect("slider-position", &["current", "total"]);
}
