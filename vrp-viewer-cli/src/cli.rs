use crate::commands::catalog::{get_catalog_app, run_catalog};
use crate::commands::index::{get_index_app, run_index};
use crate::commands::inspect::{get_inspect_app, run_inspect};
use crate::commands::render::{get_render_app, run_render};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::process;

const VERBOSE_ARG_NAME: &str = "verbose";

/// Creates the command line application.
pub fn get_app() -> Command {
    Command::new("VRP Route Viewer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ilya Builuk <ilya.builuk@gmail.com>")
        .about("A command line interface to browse and render VRP route snapshots")
        .arg(
            Arg::new(VERBOSE_ARG_NAME)
                .help("Logs loading progress")
                .short('v')
                .long(VERBOSE_ARG_NAME)
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(get_catalog_app())
        .subcommand(get_render_app())
        .subcommand(get_inspect_app())
        .subcommand(get_index_app())
}

/// Initializes logging. `RUST_LOG` takes precedence over verbosity flag.
pub fn init_logger(matches: &ArgMatches) {
    let level = if matches.get_flag(VERBOSE_ARG_NAME) { log::LevelFilter::Info } else { log::LevelFilter::Warn };

    env_logger::Builder::new().filter_level(level).parse_default_env().format_target(false).init();
}

/// Runs selected subcommand, exits the process on failure.
pub fn run_subcommand(matches: ArgMatches) {
    let result = match matches.subcommand() {
        Some(("catalog", matches)) => run_catalog(matches),
        Some(("render", matches)) => run_render(matches),
        Some(("inspect", matches)) => run_inspect(matches),
        Some(("index", matches)) => run_index(matches),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
