use super::*;
use serde_json::json;

fn names(cases: &[Case]) -> Vec<&str> {
    cases.iter().map(|case| case.name.as_str()).collect()
}

#[test]
fn can_normalize_cases_object_with_mixed_entries() {
    let cases = normalize_catalog(&json!({ "cases": ["a.json", { "name": "b", "steps": ["s1"] }] }));

    assert_eq!(cases, vec![Case::new("a.json"), Case::with_steps("b", vec!["s1".to_string()])]);
}

#[test]
fn can_normalize_array_of_file_names() {
    let cases = normalize_catalog(&json!(["case_1.json", "case_2.json"]));

    assert_eq!(cases, vec![Case::new("case_1"), Case::new("case_2")]);
}

parameterized_test! {can_normalize_any_json_without_failure, (value, expected), {
    can_normalize_any_json_without_failure_impl(value, expected);
}}

can_normalize_any_json_without_failure! {
    case_01_null: (json!(null), vec![]),
    case_02_number: (json!(42), vec![]),
    case_03_string: (json!("case_1.json"), vec![]),
    case_04_bool: (json!(true), vec![]),
    case_05_empty_object: (json!({}), vec![]),
    case_06_cases_not_array: (json!({ "cases": "case_1" }), vec![]),
    case_07_empty_array: (json!([]), vec![]),
    case_08_non_strings_in_array: (json!([1, null, "c.json", { "name": "x" }]), vec!["c"]),
    case_09_invalid_case_objects: (
        json!({ "cases": [{ "name": "" }, { "steps": [] }, { "name": 1 }, 7, "ok"] }),
        vec!["ok"]
    ),
    case_10_no_suffix: (json!(["plain", "x.json.json"]), vec!["plain", "x.json"]),
}

fn can_normalize_any_json_without_failure_impl(value: Value, expected: Vec<&str>) {
    let cases = normalize_catalog(&value);

    assert_eq!(names(&cases), expected);
}

#[test]
fn can_keep_first_of_duplicate_cases() {
    let catalog = json!({ "cases": [{ "name": "a", "steps": ["s1"] }, "b", { "name": "a", "steps": ["s2"] }] });

    let cases = normalize_catalog(&catalog);

    assert_eq!(cases, vec![Case::with_steps("a", vec!["s1".to_string()]), Case::new("b")]);
}

#[test]
fn can_drop_non_string_steps_of_case_object() {
    let cases = normalize_catalog(&json!({ "cases": [{ "name": "a", "steps": ["s1", 2, null, "s2"] }] }));

    assert_eq!(cases, vec![Case::with_steps("a", vec!["s1".to_string(), "s2".to_string()])]);
}

#[test]
fn can_treat_non_array_steps_of_case_object_as_unknown() {
    let cases = normalize_catalog(&json!({ "cases": [{ "name": "a", "steps": "s1" }] }));

    assert_eq!(cases, vec![Case::new("a")]);
    assert!(!cases[0].has_steps());
}

parameterized_test! {can_normalize_step_list, (value, expected), {
    let expected = expected.map(|steps: Vec<&str>| steps.into_iter().map(str::to_string).collect::<Vec<_>>());

    assert_eq!(normalize_step_list(&value), expected);
}}

can_normalize_step_list! {
    case_01_object: (json!({ "steps": ["step_0.json", "step_1.json"] }), Some(vec!["step_0.json", "step_1.json"])),
    case_02_array: (json!(["step_0.json"]), Some(vec!["step_0.json"])),
    case_03_non_strings: (json!({ "steps": ["a", 1, "b"] }), Some(vec!["a", "b"])),
    case_04_empty: (json!({ "steps": [] }), Some(vec![])),
    case_05_no_steps_key: (json!({ "files": ["a"] }), None),
    case_06_steps_not_array: (json!({ "steps": "a" }), None),
    case_07_primitive: (json!(null), None),
}
