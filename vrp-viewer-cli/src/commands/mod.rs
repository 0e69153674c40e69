use clap::{Arg, ArgMatches, Command};

pub mod catalog;
pub mod index;
pub mod inspect;
pub mod render;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use tokio::runtime::Runtime;
use vrp_viewer_core::config::{Config, read_config};
use vrp_viewer_core::loading::{LoadStatus, LoaderConfig, Session, Stage, create_fetcher};
use vrp_viewer_core::utils::{GenericError, GenericResult};

const SOURCE_ARG_NAME: &str = "source";
const DATA_ROOT_ARG_NAME: &str = "data-root";
const CONFIG_ARG_NAME: &str = "config";
const CASE_ARG_NAME: &str = "case";
const STEP_ARG_NAME: &str = "step";
const OUT_RESULT_ARG_NAME: &str = "out-result";

fn add_source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(SOURCE_ARG_NAME)
                .help("Specifies base url or local directory which contains data root")
                .short('s')
                .long(SOURCE_ARG_NAME)
                .default_value("."),
        )
        .arg(
            Arg::new(DATA_ROOT_ARG_NAME)
                .help("Specifies data root relative to the source, default is 'vrp_data'")
                .long(DATA_ROOT_ARG_NAME),
        )
        .arg(Arg::new(CONFIG_ARG_NAME).help("Specifies path to viewer config file").short('c').long(CONFIG_ARG_NAME))
}

fn add_selection_args(command: Command) -> Command {
    command
        .arg(Arg::new(CASE_ARG_NAME).help("Selects a case, the first one is used by default").long(CASE_ARG_NAME))
        .arg(Arg::new(STEP_ARG_NAME).help("Selects a step, the first one is used by default").long(STEP_ARG_NAME))
}

fn add_out_result_arg(command: Command, required: bool) -> Command {
    command.arg(
        Arg::new(OUT_RESULT_ARG_NAME)
            .help("Specifies path to file for result output")
            .short('o')
            .long(OUT_RESULT_ARG_NAME)
            .required(required),
    )
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn create_out_buffer(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string()),
        None => Ok(Config::default()),
    }
}

fn get_loader_config(matches: &ArgMatches, config: &Config) -> LoaderConfig {
    let mut loader_config = config.loader_config();

    if let Some(data_root) = matches.get_one::<String>(DATA_ROOT_ARG_NAME) {
        loader_config.data_root = data_root.clone();
    }

    loader_config
}

/// Drives a loading session to completion after each selection on its own single threaded runtime.
pub(crate) struct SnapshotBrowser {
    session: Session,
    runtime: Runtime,
}

impl SnapshotBrowser {
    /// Creates a browser over the source specified in arguments and loads the catalog with its first case and step.
    pub fn new(matches: &ArgMatches, config: &Config) -> Result<Self, String> {
        let loader_config = get_loader_config(matches, config);
        let source = matches.get_one::<String>(SOURCE_ARG_NAME).map(String::as_str).unwrap_or(".");
        let timeout = Stage::ALL.iter().map(|&stage| loader_config.timeouts.get(stage)).max().unwrap_or_default();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|err| format!("cannot create runtime: '{err}'"))?;
        let session = Session::new(create_fetcher(source, timeout), &loader_config);

        log::info!("browsing '{source}' with data root '{}'", loader_config.data_root);

        let mut browser = Self { session, runtime };
        browser.start()?;

        Ok(browser)
    }

    /// Applies case and step selection from arguments.
    pub fn select_from_args(&mut self, matches: &ArgMatches) -> Result<(), String> {
        if let Some(case) = matches.get_one::<String>(CASE_ARG_NAME) {
            self.select_case(case)?;
        }

        if let Some(step) = matches.get_one::<String>(STEP_ARG_NAME) {
            self.select_step(step)?;
        }

        Ok(())
    }

    pub fn select_case(&mut self, name: &str) -> Result<(), String> {
        self.apply(|session| session.select_case(name))
    }

    pub fn select_step(&mut self, step: &str) -> Result<(), String> {
        self.apply(|session| session.select_step(step))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Explains why there is no dataset to show.
    pub fn describe_no_data(&self) -> String {
        let loader = self.session.loader();

        match Stage::ALL.iter().find(|&&stage| loader.status(stage) == LoadStatus::Failed) {
            Some(stage) => format!("no data: cannot load {stage}"),
            None if loader.cases().is_empty() => "no data: catalog has no cases".to_string(),
            None if loader.selected_step().is_none() => "no data: selected case has no steps".to_string(),
            None => "no data".to_string(),
        }
    }

    fn start(&mut self) -> Result<(), String> {
        self.apply(|session| {
            session.start();
            Ok(())
        })
    }

    fn apply(&mut self, action: impl FnOnce(&mut Session) -> GenericResult<()>) -> Result<(), String> {
        let Self { session, runtime } = self;

        runtime
            .block_on(async {
                action(session)?;
                session.settle().await;

                Ok::<_, GenericError>(())
            })
            .map_err(|err| err.to_string())
    }
}
