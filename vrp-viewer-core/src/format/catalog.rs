#[cfg(test)]
#[path = "../../tests/unit/format/catalog_test.rs"]
mod catalog_test;

use crate::models::{Case, StepRef};
use rustc_hash::FxHashSet;
use serde_json::Value;

/// Converts any accepted catalog shape into an ordered list of cases. Never fails.
///
/// Accepted shapes, tried in order:
/// - `{"cases": [...]}` where an element is either a case name or `{"name": .., "steps": [..]}`;
///   other elements are dropped. A bare name is taken verbatim, `.json` suffix is kept;
/// - `["case_1.json", ...]`: file names, a trailing `.json` is stripped to obtain a case name;
/// - anything else yields an empty list.
///
/// Later duplicates of a case name are dropped.
pub fn normalize_catalog(value: &Value) -> Vec<Case> {
    let cases = match value {
        Value::Object(map) if map.get("cases").is_some_and(Value::is_array) => {
            map["cases"].as_array().into_iter().flatten().filter_map(parse_case_entry).collect()
        }
        Value::Array(files) => files
            .iter()
            .filter_map(Value::as_str)
            .map(|file| Case::new(file.strip_suffix(".json").unwrap_or(file)))
            .collect(),
        _ => Vec::new(),
    };

    deduplicate(cases)
}

/// Reads a step list from either `{"steps": [...]}` or a bare array. Returns `None` on unexpected shape.
pub fn normalize_step_list(value: &Value) -> Option<Vec<StepRef>> {
    let steps = match value {
        Value::Object(map) => map.get("steps").and_then(Value::as_array),
        Value::Array(steps) => Some(steps),
        _ => None,
    }?;

    Some(parse_string_list(steps))
}

fn parse_case_entry(entry: &Value) -> Option<Case> {
    match entry {
        Value::String(name) => Some(Case::new(name.as_str())),
        Value::Object(map) => {
            let name = map.get("name").and_then(Value::as_str).filter(|name| !name.is_empty())?;
            let steps = map.get("steps").and_then(Value::as_array).map(|steps| parse_string_list(steps));

            Some(Case::with_steps(name, steps.unwrap_or_default()))
        }
        _ => None,
    }
}

fn parse_string_list(values: &[Value]) -> Vec<String> {
    values.iter().filter_map(Value::as_str).map(str::to_string).collect()
}

fn deduplicate(cases: Vec<Case>) -> Vec<Case> {
    let mut seen = FxHashSet::default();

    cases
        .into_iter()
        .filter(|case| {
            let is_new = seen.insert(case.name.clone());
            if !is_new {
                log::warn!("catalog contains duplicate case '{}', keeping the first one", case.name);
            }
            is_new
        })
        .collect()
}
