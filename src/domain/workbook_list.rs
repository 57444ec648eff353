//! Parsers for the workbook list files passed with `--path-list` and `--name-list`.
//!
//! A missing list file reads as an empty list. Malformed lines are skipped
//! without affecting the rest of the file.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::AppError;

/// Workbook name to the set of project paths it should be looked up under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookPathMapping {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl WorkbookPathMapping {
    pub fn insert(&mut self, workbook: &str, path: &str) {
        self.entries.entry(workbook.to_string()).or_default().insert(path.to_string());
    }

    /// Paths listed for `workbook`; `None` if the workbook never appeared.
    pub fn paths(&self, workbook: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(workbook)
    }

    pub fn contains_workbook(&self, workbook: &str) -> bool {
        self.entries.contains_key(workbook)
    }

    pub fn contains(&self, workbook: &str, path: &str) -> bool {
        self.paths(workbook).is_some_and(|paths| paths.contains(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }
}

/// Parse a file of `<workbook name>,<project path>` lines.
pub fn parse_workbook_path(file_path: &Path) -> Result<WorkbookPathMapping, AppError> {
    let mut mapping = WorkbookPathMapping::default();
    let Some(content) = read_list_file(file_path)? else {
        return Ok(mapping);
    };

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_path_line(line) {
            Some((workbook, path)) => {
                debug!(workbook, path, "listed workbook path");
                mapping.insert(workbook, path);
            }
            None => warn!(
                file = %file_path.display(),
                line = index + 1,
                "skipping line, expected exactly one '<workbook name>,<project path>' pair"
            ),
        }
    }

    Ok(mapping)
}

fn parse_path_line(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(',');
    let workbook = parts.next()?.trim();
    let path = parts.next()?.trim().trim_matches('/');
    if parts.next().is_some() || workbook.is_empty() || path.is_empty() {
        return None;
    }
    Some((workbook, path))
}

/// Parse a file with one workbook name per line, skipping blank lines.
pub fn parse_workbook_names(file_path: &Path) -> Result<Vec<String>, AppError> {
    let Some(content) = read_list_file(file_path)? else {
        return Ok(Vec::new());
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn read_list_file(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(file = %path.display(), "workbook list file not found, treating it as empty");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
