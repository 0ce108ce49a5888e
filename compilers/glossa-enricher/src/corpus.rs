use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use glossa_protocol::Corpus;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::analysis::EnrichMode;
use crate::enrich_corpus;
use crate::error::CorpusError;
use crate::report::{EnrichReport, RunSummary};

pub const DEFAULT_OUTPUT_SUFFIX: &str = "_corrected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichOptions {
    pub mode: EnrichMode,
    /// Appended to the file stem when no output path is given.
    pub output_suffix: String,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            mode: EnrichMode::default(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

pub fn read_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes pretty-printed JSON with two-space indentation and unescaped
/// non-ASCII text, creating parent directories as needed.
pub fn write_corpus(path: &Path, corpus: &Corpus) -> Result<(), CorpusError> {
    let write_err = |source: io::Error| CorpusError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    serde_json::to_writer_pretty(&mut writer, corpus)
        .map_err(|e| write_err(io::Error::from(e)))?;
    writer.write_all(b"\n").map_err(write_err)?;
    writer.flush().map_err(write_err)
}

/// `dir/name.json` -> `dir/name<suffix>.json`
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(name)
}

/// Reads one corpus file, enriches it and writes the result to `output`.
pub fn enrich_file(
    input: &Path,
    output: &Path,
    options: &EnrichOptions,
) -> Result<EnrichReport, CorpusError> {
    debug!(input = %input.display(), mode = ?options.mode, "enriching corpus file");

    let mut corpus = read_corpus(input)?;
    let report = enrich_corpus(&mut corpus, options.mode);
    write_corpus(output, &corpus)?;

    info!(input = %input.display(), output = %output.display(), "{report}");
    Ok(report)
}

/// Enriches a single file or every `*.json` file below a directory.
///
/// For a file, `output` may name the target file or an existing directory.
/// For a directory, `output` is the root of a mirrored tree. Without `output`,
/// results are written next to their inputs using the configured suffix, and
/// inputs that already carry the suffix are skipped. Per-file failures inside
/// a directory are collected in the summary instead of aborting the run.
pub fn enrich_path(
    input: &Path,
    output: Option<&Path>,
    options: &EnrichOptions,
) -> Result<RunSummary, CorpusError> {
    if !input.exists() {
        return Err(CorpusError::MissingInput(input.to_path_buf()));
    }

    let mut summary = RunSummary::default();

    if input.is_file() {
        let target = match output {
            Some(out) if out.is_dir() => out.join(input.file_name().unwrap_or_default()),
            Some(out) => out.to_path_buf(),
            None => default_output_path(input, &options.output_suffix),
        };
        let report = enrich_file(input, &target, options)?;
        summary.files_processed = 1;
        summary.report = report;
        return Ok(summary);
    }

    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_json(path) {
            continue;
        }
        if output.is_some_and(|out| path.starts_with(out)) {
            continue;
        }

        let target = match output {
            Some(out) => out.join(path.strip_prefix(input).unwrap_or(path)),
            None => {
                if has_suffix(path, &options.output_suffix) {
                    debug!(path = %path.display(), "skipping previously enriched file");
                    summary.files_skipped += 1;
                    continue;
                }
                default_output_path(path, &options.output_suffix)
            }
        };

        match enrich_file(path, &target, options) {
            Ok(report) => {
                summary.files_processed += 1;
                summary.report.merge(&report);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping corpus file");
                summary.failures.push((path.to_path_buf(), err.to_string()));
            }
        }
    }

    Ok(summary)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    !suffix.is_empty()
        && path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(suffix))
}
