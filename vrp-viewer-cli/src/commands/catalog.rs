#[cfg(test)]
#[path = "../../tests/unit/commands/catalog_test.rs"]
mod catalog_test;

use super::*;
use clap::ArgAction;

const STEPS_ARG_NAME: &str = "steps";

pub fn get_catalog_app() -> Command {
    let command = Command::new("catalog").about("Lists cases of the catalog with their steps").arg(
        Arg::new(STEPS_ARG_NAME)
            .help("Fetches step list of every case, not only of the first one")
            .long(STEPS_ARG_NAME)
            .action(ArgAction::SetTrue),
    );

    add_out_result_arg(add_source_args(command), false)
}

pub fn run_catalog(matches: &ArgMatches) -> Result<(), String> {
    let config = get_config(matches)?;
    let mut browser = SnapshotBrowser::new(matches, &config)?;

    if browser.session().loader().status(Stage::Catalog) == LoadStatus::Failed {
        return Err("cannot load catalog".to_string());
    }

    let discover_steps = matches.get_flag(STEPS_ARG_NAME);
    let cases = browser.session().loader().cases().to_vec();

    let lines = cases
        .into_iter()
        .map(|case| {
            if discover_steps && !case.has_steps() {
                browser.select_case(&case.name)?;
            }

            let loader = browser.session().loader();
            let is_selected = loader.selected_case() == Some(case.name.as_str());
            let steps = if is_selected { loader.steps() } else { case.steps.as_slice() };

            Ok(match steps {
                [] => format!("{}: -", case.name),
                steps => format!("{}: {}", case.name, steps.join(", ")),
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    let mut out_buffer = create_out_buffer(matches)?;
    lines
        .iter()
        .try_for_each(|line| writeln!(out_buffer, "{line}"))
        .and_then(|_| out_buffer.flush())
        .map_err(|err| format!("cannot write catalog: '{err}'"))
}
