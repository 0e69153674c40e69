#[cfg(test)]
#[path = "../../tests/unit/commands/inspect_test.rs"]
mod inspect_test;

use super::*;
use vrp_viewer_core::models::{CustomerId, NodeDetails};

const NODE_ARG_NAME: &str = "node";

pub fn get_inspect_app() -> Command {
    let command = Command::new("inspect").about("Prints details of a node and its pickup/delivery partner").arg(
        Arg::new(NODE_ARG_NAME).help("Specifies node (customer) id").short('n').long(NODE_ARG_NAME).required(true),
    );

    add_out_result_arg(add_selection_args(add_source_args(command)), false)
}

pub fn run_inspect(matches: &ArgMatches) -> Result<(), String> {
    let node_id = parse_int_value::<CustomerId>(matches, NODE_ARG_NAME, "node id")?
        .ok_or_else(|| "node id is required".to_string())?;

    let config = get_config(matches)?;
    let mut browser = SnapshotBrowser::new(matches, &config)?;
    browser.select_from_args(matches)?;

    if browser.session().loader().dataset().is_none() {
        return Err(browser.describe_no_data());
    }

    let selection = browser
        .session_mut()
        .click(node_id)
        .ok_or_else(|| format!("node '{node_id}' is not present in dataset"))?;

    let details = browser
        .session()
        .loader()
        .dataset()
        .and_then(|dataset| NodeDetails::new(dataset, &selection))
        .ok_or_else(|| browser.describe_no_data())?;

    let mut out_buffer = create_out_buffer(matches)?;
    write!(out_buffer, "{details}")
        .and_then(|_| out_buffer.flush())
        .map_err(|err| format!("cannot write details: '{err}'"))
}
