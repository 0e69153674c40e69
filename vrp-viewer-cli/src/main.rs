//! A command line interface to browse and render VRP route snapshots.

mod cli;
mod commands;

use crate::cli::{get_app, init_logger, run_subcommand};

fn main() {
    let matches = get_app().get_matches();

    init_logger(&matches);

    run_subcommand(matches);
}
