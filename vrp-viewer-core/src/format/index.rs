#[cfg(test)]
#[path = "../../tests/unit/format/index_test.rs"]
mod index_test;

use crate::models::Case;
use crate::utils::GenericResult;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A name of catalog and step index files.
pub const INDEX_FILE_NAME: &str = "index.json";

/// A prefix of directories treated as cases.
pub const CASE_DIR_PREFIX: &str = "case_";

#[derive(Serialize)]
struct CatalogIndex<'a> {
    cases: &'a [Case],
}

#[derive(Serialize)]
struct StepIndex<'a> {
    steps: &'a [String],
}

/// Scans `root` for `case_*` directories and collects their `*.json` step files.
///
/// Both cases and steps are sorted by name. Index files themselves are not steps.
pub fn create_catalog_index(root: &Path) -> GenericResult<Vec<Case>> {
    let mut case_dirs = read_dir_names(root, |path| path.is_dir())?
        .into_iter()
        .filter(|name| name.starts_with(CASE_DIR_PREFIX))
        .collect::<Vec<_>>();
    case_dirs.sort();

    case_dirs
        .into_iter()
        .map(|name| {
            let mut steps = read_dir_names(&root.join(&name), |path| path.is_file())?
                .into_iter()
                .filter(|file| file.ends_with(".json") && file != INDEX_FILE_NAME)
                .collect::<Vec<_>>();
            steps.sort();

            Ok(Case::with_steps(name, steps))
        })
        .collect()
}

/// Writes catalog index into `root/index.json` and, optionally, step index into each case directory.
pub fn write_catalog_index(root: &Path, cases: &[Case], per_case: bool) -> GenericResult<()> {
    write_json(&root.join(INDEX_FILE_NAME), &CatalogIndex { cases })?;

    if per_case {
        cases.iter().try_for_each(|case| {
            write_json(&root.join(&case.name).join(INDEX_FILE_NAME), &StepIndex { steps: case.steps.as_slice() })
        })?;
    }

    Ok(())
}

fn read_dir_names(dir: &Path, filter: impl Fn(&Path) -> bool) -> GenericResult<Vec<String>> {
    fs::read_dir(dir)
        .map_err(|err| format!("cannot read directory '{}': '{err}'", dir.display()))?
        .map(|entry| entry.map(|entry| entry.path()))
        .filter_map(|path| match path {
            Ok(path) if filter(&path) => {
                path.file_name().and_then(|name| name.to_str()).map(|name| Ok(name.to_string()))
            }
            Ok(_) => None,
            Err(err) => Some(Err(err.into())),
        })
        .collect()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> GenericResult<()> {
    let file = File::create(path).map_err(|err| format!("cannot create file '{}': '{err}'", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    log::info!("index written to '{}'", path.display());

    Ok(())
}
