#[cfg(test)]
#[path = "../../tests/unit/commands/index_test.rs"]
mod index_test;

use super::*;
use clap::ArgAction;
use std::path::Path;
use vrp_viewer_core::format::{create_catalog_index, write_catalog_index};

const ROOT_ARG_NAME: &str = "ROOT";
const PER_CASE_ARG_NAME: &str = "per-case";

pub fn get_index_app() -> Command {
    Command::new("index")
        .about("Writes catalog index for a directory with 'case_*' subdirectories")
        .arg(Arg::new(ROOT_ARG_NAME).help("Specifies data root directory").required(true).index(1))
        .arg(
            Arg::new(PER_CASE_ARG_NAME)
                .help("Writes step index into every case directory too")
                .long(PER_CASE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_index(matches: &ArgMatches) -> Result<(), String> {
    let root = matches.get_one::<String>(ROOT_ARG_NAME).map(Path::new).ok_or("data root is required")?;
    let per_case = matches.get_flag(PER_CASE_ARG_NAME);

    let cases = create_catalog_index(root).map_err(|err| format!("cannot create index: '{err}'"))?;
    if cases.is_empty() {
        log::warn!("no case directories found in '{}'", root.display());
    }

    write_catalog_index(root, &cases, per_case).map_err(|err| format!("cannot write index: '{err}'"))
}
