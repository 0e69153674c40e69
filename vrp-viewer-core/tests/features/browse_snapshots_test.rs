use crate::helpers::models::create_test_dataset_json;
use crate::loading::*;
use crate::models::NodeDetails;
use crate::utils::FetchError;
use serde_json::{Value, json};
use std::collections::VecDeque;

/// Serves requests of the loader from a fixed script, checking that paths are requested in order.
fn drive(loader: &mut DatasetLoader, first: Option<FetchRequest>, script: Vec<(&str, Result<Value, FetchError>)>) {
    let mut script = VecDeque::from(script);
    let mut request = first;

    while let Some(FetchRequest { ticket, path }) = request.take() {
        let (expected_path, result) = script.pop_front().unwrap_or_else(|| panic!("unexpected request: '{path}'"));
        assert_eq!(path, expected_path);

        request = loader.complete(ticket, result);
    }

    assert!(script.is_empty(), "not all resources were requested: {script:?}");
}

#[test]
fn can_browse_from_catalog_to_selected_pair() {
    let mut loader = DatasetLoader::new(DEFAULT_DATA_ROOT);
    let first = loader.start();

    drive(
        &mut loader,
        first,
        vec![
            ("vrp_data/index.json", Ok(json!(["case_1.json"]))),
            ("vrp_data/case_1/index.json", Ok(json!({ "steps": ["step_0.json"] }))),
            ("vrp_data/case_1/step_0.json", Ok(create_test_dataset_json())),
        ],
    );

    assert_eq!(loader.cases().len(), 1);
    assert_eq!(loader.cases()[0].name, "case_1");
    assert!(loader.cases()[0].steps.is_empty());
    let dataset = loader.dataset().expect("no dataset");
    let selection = dataset.select(1).expect("no selection");
    assert_eq!(selection.node_id, 1);
    assert_eq!(selection.partner_id, Some(2));
    let details = NodeDetails::new(dataset, &selection).expect("no details");
    assert!(details.to_string().contains("partner id: 2"));
}

#[test]
fn can_browse_catalog_with_shipped_steps() {
    let mut loader = DatasetLoader::new(DEFAULT_DATA_ROOT);
    let first = loader.start();

    drive(
        &mut loader,
        first,
        vec![
            ("vrp_data/index.json", Ok(json!({ "cases": [{ "name": "case_1", "steps": ["step_3.json"] }] }))),
            ("vrp_data/case_1/step_3.json", Ok(create_test_dataset_json())),
        ],
    );

    let request = loader.select_case("case_1").expect("cannot select case");
    assert!(request.is_none());
    assert_eq!(loader.status(Stage::Dataset), LoadStatus::Ready);
}

#[test]
fn can_continue_browsing_after_failed_step() {
    let mut loader = DatasetLoader::new(DEFAULT_DATA_ROOT);
    let first = loader.start();
    drive(
        &mut loader,
        first,
        vec![
            ("vrp_data/index.json", Ok(json!({ "cases": [{ "name": "case_1", "steps": ["bad.json", "good.json"] }] }))),
            ("vrp_data/case_1/bad.json", Err(FetchError::Transport("404".to_string()))),
        ],
    );
    assert_eq!(loader.status(Stage::Dataset), LoadStatus::Failed);

    let request = loader.select_step("good.json").expect("cannot select step");
    drive(&mut loader, request, vec![("vrp_data/case_1/good.json", Ok(create_test_dataset_json()))]);

    assert_eq!(loader.status(Stage::Dataset), LoadStatus::Ready);
    assert!(loader.dataset().is_some());
}
