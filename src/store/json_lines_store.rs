use super::HistoryStore;
use crate::AppResult;
use crate::attributes::AttributeRecord;
use crate::values::{AttributeName, StoredValue};
use camino::{Utf8Path, Utf8PathBuf};
use core::fmt::Write as _;
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};

const LOG_TARGET: &str = "     store";
const EXTENSION: &str = "jsonl";

#[derive(Serialize)]
struct LineOut<'a> {
    record: &'a AttributeRecord,
    value: &'a StoredValue,
}

#[derive(Deserialize)]
struct LineIn {
    record: AttributeRecord,
    value: StoredValue,
}

/// A directory holding one `.jsonl` file per attribute.
///
/// Files are named after the exact attribute name, with every byte other than an
/// ASCII letter, digit, `-` or `_` percent-encoded, so distinct names never share
/// a file and no name can point outside the directory. Every line of a file is a JSON object with the attribute's `record` and one
/// `value`. Saving appends a line, so files can be inspected and truncated with
/// ordinary tools.
#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    dir: Utf8PathBuf,
}

impl JsonLinesStore {
    /// Use `dir`, creating it if needed.
    pub fn open(dir: impl Into<Utf8PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).into_app_err_with(|| format!("unable to create store directory '{dir}'"))?;
        log::debug!(target: LOG_TARGET, "Opened history store at '{dir}'");
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// The file holding the history of `name`.
    #[must_use]
    pub fn path_for(&self, name: &AttributeName) -> Utf8PathBuf {
        self.dir.join(format!("{}.{EXTENSION}", file_stem(name)))
    }

    /// Name of the attribute whose history `path` holds, if the file has any.
    fn owner(path: &Utf8Path) -> AppResult<Option<AttributeName>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).into_app_err_with(|| format!("unable to open file '{path}'")),
        };

        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.into_app_err_with(|| format!("unable to read file '{path}'"))?;
            if !line.trim().is_empty() {
                let parsed: LineIn =
                    serde_json::from_str(&line).into_app_err_with(|| format!("unable to parse line {} of '{path}'", number + 1))?;
                return Ok(Some(parsed.record.name));
            }
        }

        Ok(None)
    }

    fn read_lines(path: &Utf8Path) -> AppResult<Vec<LineIn>> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).into_app_err_with(|| format!("unable to open file '{path}'")),
        };

        let mut lines = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.into_app_err_with(|| format!("unable to read file '{path}'"))?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed = serde_json::from_str(&line).into_app_err_with(|| format!("unable to parse line {} of '{path}'", number + 1))?;
            lines.push(parsed);
        }

        Ok(lines)
    }
}

impl HistoryStore for JsonLinesStore {
    fn save(&mut self, name: &AttributeName, value: &StoredValue, record: &AttributeRecord) -> AppResult<()> {
        let path = self.path_for(name);
        if let Some(owner) = Self::owner(&path)?
            && owner != *name
        {
            bail!("'{path}' already holds the history of '{owner}', refusing to add values of '{name}'");
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .into_app_err_with(|| format!("unable to open file '{path}' for appending"))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &LineOut { record, value }).into_app_err_with(|| format!("unable to write file '{path}'"))?;
        writeln!(writer).into_app_err_with(|| format!("unable to write file '{path}'"))?;
        writer.flush().into_app_err_with(|| format!("unable to flush file '{path}'"))?;

        log::trace!(target: LOG_TARGET, "Saved value #{} of '{name}' to '{path}'", value.sequence);
        Ok(())
    }

    fn load_history(&self, name: &AttributeName) -> AppResult<Vec<StoredValue>> {
        let path = self.path_for(name);
        let values: Vec<_> = Self::read_lines(&path)?.into_iter().map(|l| l.value).collect();
        log::debug!(target: LOG_TARGET, "Loaded {} value(s) of '{name}' from '{path}'", values.len());
        Ok(values)
    }

    fn load_record(&self, name: &AttributeName) -> AppResult<Option<AttributeRecord>> {
        Ok(Self::read_lines(&self.path_for(name))?.pop().map(|l| l.record))
    }

    fn records(&self) -> AppResult<Vec<AttributeRecord>> {
        let mut paths = Vec::new();
        for entry in self.dir.read_dir_utf8().into_app_err_with(|| format!("unable to list store directory '{}'", self.dir))? {
            let entry = entry.into_app_err_with(|| format!("unable to list store directory '{}'", self.dir))?;
            if entry.path().extension() == Some(EXTENSION) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            if let Some(line) = Self::read_lines(&path)?.pop() {
                records.push(line.record);
            }
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(records)
    }
}

fn file_stem(name: &AttributeName) -> String {
    let mut stem = String::with_capacity(name.as_str().len());
    for byte in name.as_str().bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(char::from(byte));
        } else {
            let _ = write!(stem, "%{byte:02X}");
        }
    }
    stem
}
