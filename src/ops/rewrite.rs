//! Transactional CSV rewriting.
//!
//! [`Rewriter`] streams a source file through a [`Replacement`] into a
//! temporary file created in the same directory, then publishes the result
//! with a single atomic rename. Readers of the target path observe either
//! the complete old file or the complete new file. On any failure the
//! temporary file is removed and the source keeps its original bytes.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use csv::{Reader, StringRecord};
use tempfile::NamedTempFile;

use crate::dialect::Dialect;
use crate::error::{ReplaceError, Result};
use crate::ops::transform::Replacement;

/// Rewrites CSV files through a fixed [`Dialect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Rewriter {
    dialect: Dialect,
}

/// What an update would do, measured by a read-only pass.
///
/// When the requested column is absent the scan stops at the header, so
/// `rows` and `matches` are both zero.
#[derive(Debug, Clone, Copy)]
pub struct Preview {
    /// Whether the requested column exists in the header.
    pub column_found: bool,
    /// Number of data rows scanned.
    pub rows: u64,
    /// Number of scanned rows whose target field equals the old value.
    pub matches: u64,
}

impl Rewriter {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Replaces every field in `column` that exactly equals `old_value`
    /// with `new_value`, across all rows of the CSV file at `path`.
    ///
    /// Returns `Ok(true)` when a rewritten file was published and
    /// `Ok(false)` when the header has no column named `column`, in which
    /// case nothing on disk is created or modified.
    ///
    /// # Errors
    ///
    /// Returns [`ReplaceError::NotFound`] if the file cannot be opened,
    /// [`ReplaceError::DuplicateColumn`] if the header repeats a name, and
    /// [`ReplaceError::Csv`] or [`ReplaceError::Io`] if a row cannot be
    /// decoded or the staged output cannot be written or published. The
    /// source file is left untouched in every error case.
    pub fn update_row_values(
        &self,
        path: impl AsRef<Path>,
        column: &str,
        old_value: &str,
        new_value: &str,
    ) -> Result<bool> {
        let path = path.as_ref();
        let mut reader = self.open(path)?;
        let headers = validated_headers(&mut reader)?;

        let Some(column_index) = headers.iter().position(|name| name == column) else {
            log::debug!(
                "Column '{}' not in header of {}; leaving file untouched",
                column,
                path.display()
            );
            return Ok(false);
        };

        log::debug!(
            "Replacing '{}' with '{}' in column '{}' (index {}) of {}",
            old_value,
            new_value,
            column,
            column_index,
            path.display()
        );

        let replacement = Replacement::new(column_index, old_value, new_value);

        // Stage in the source's directory so publishing is a same-filesystem
        // rename. An empty parent means a bare file name in the working
        // directory.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let staging = NamedTempFile::new_in(dir)?;
        log::debug!("Staging output in {}", staging.path().display());

        let mut writer = self.dialect.writer(BufWriter::new(staging.as_file()));
        writer.write_record(&headers)?;

        let mut rows: u64 = 0;
        let mut replaced: u64 = 0;
        for record in reader.records() {
            let row = record?;
            if replacement.matches(&row) {
                replaced += 1;
            }
            writer.write_record(&replacement.apply(&row))?;
            rows += 1;
        }
        writer.flush()?;

        // Close both ends before the rename replaces the source.
        drop(writer);
        drop(reader);

        staging.persist(path).map_err(|e| e.error)?;
        log::info!(
            "Published {} ({} rows, {} replaced)",
            path.display(),
            rows,
            replaced
        );
        Ok(true)
    }

    /// Reports what [`update_row_values`](Self::update_row_values) would do
    /// for the same arguments, without creating or modifying any file.
    pub fn preview(
        &self,
        path: impl AsRef<Path>,
        column: &str,
        old_value: &str,
        new_value: &str,
    ) -> Result<Preview> {
        let path = path.as_ref();
        let mut reader = self.open(path)?;
        let headers = validated_headers(&mut reader)?;

        let Some(column_index) = headers.iter().position(|name| name == column) else {
            return Ok(Preview {
                column_found: false,
                rows: 0,
                matches: 0,
            });
        };

        let replacement = Replacement::new(column_index, old_value, new_value);
        let mut rows: u64 = 0;
        let mut matches: u64 = 0;
        for record in reader.records() {
            let row = record?;
            if replacement.matches(&row) {
                matches += 1;
            }
            rows += 1;
        }

        Ok(Preview {
            column_found: true,
            rows,
            matches,
        })
    }

    fn open(&self, path: &Path) -> Result<Reader<BufReader<File>>> {
        let file = File::open(path).map_err(|source| ReplaceError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.dialect.reader(BufReader::new(file)))
    }
}

/// Replaces `old_value` with `new_value` in `column` of the CSV file at
/// `path`, using the default RFC 4180 dialect.
pub fn update_row_values(
    path: impl AsRef<Path>,
    column: &str,
    old_value: &str,
    new_value: &str,
) -> Result<bool> {
    Rewriter::default().update_row_values(path, column, old_value, new_value)
}

/// Reads the header row and rejects duplicate column names.
///
/// An empty file yields an empty header, which no column name can match;
/// the caller then reports the file as not modified.
fn validated_headers(reader: &mut Reader<BufReader<File>>) -> Result<StringRecord> {
    let headers = reader.headers()?;

    let mut seen = std::collections::HashSet::new();
    for name in headers.iter() {
        if !seen.insert(name) {
            return Err(ReplaceError::DuplicateColumn(name.to_string()));
        }
    }

    Ok(headers.clone())
}
